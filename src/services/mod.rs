// Service module exports

pub mod dispatch;
pub mod form_post;
pub mod pickers;
pub mod recurrence;
pub mod settings;
