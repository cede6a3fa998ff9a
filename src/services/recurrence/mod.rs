//! Recurrence form synchronizer.
//!
//! Keeps the event form and the repeat dialog consistent and derives the
//! human-readable summary shown on both.

mod rrule;
mod series;
mod summary;
mod sync;
mod termination;

pub use rrule::to_rrule;
pub use series::occurrence_dates;
pub use summary::compute_summary;
pub use sync::{copy_modal_to_primary, copy_primary_to_modal};
pub use termination::TerminationTrigger;
