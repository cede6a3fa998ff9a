// Termination mode transitions
// The dialog's "Ends" radio only changes on an explicit user action.

use crate::models::recurrence::TerminationMode;

/// User actions that can move the "Ends" radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationTrigger {
    /// A radio button was clicked
    Select(TerminationMode),
    /// The occurrence count input received focus
    FocusOccurrences,
    /// The end date input received focus
    FocusEndDate,
}

impl TerminationMode {
    /// Next mode after `trigger`. Focusing an input selects its radio.
    pub fn transition(self, trigger: TerminationTrigger) -> TerminationMode {
        let next = match trigger {
            TerminationTrigger::Select(mode) => mode,
            TerminationTrigger::FocusOccurrences => TerminationMode::After,
            TerminationTrigger::FocusEndDate => TerminationMode::On,
        };

        if next != self {
            log::debug!("Ends: {} -> {}", self.as_value(), next.as_value());
        }
        next
    }
}
