// UI models module
// Which endpoint the popup is editing

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpenState {
    #[default]
    Closed,
    EditingFrom,
    EditingTo,
}

impl OpenState {
    pub fn is_open(&self) -> bool {
        !matches!(self, OpenState::Closed)
    }

    /// Next state after the user activates `target`.
    ///
    /// Activating the endpoint that is already open closes the popup,
    /// activating the other one switches to it.
    pub fn toggled(self, target: OpenState) -> OpenState {
        if self.is_open() && self == target {
            OpenState::Closed
        } else {
            target
        }
    }
}
