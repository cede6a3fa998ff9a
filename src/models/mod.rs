// Module exports for models

pub mod page;
pub mod recurrence;
pub mod settings;
