//! Session flags.

use serde::{Deserialize, Serialize};

/// The two orthogonal flags of a calculator session.
///
/// `running` starts true and only ever goes false. `scientific` toggles
/// freely and decides whether scientific operations are offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMode {
    running: bool,
    scientific: bool,
}

impl Default for SessionMode {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SessionMode {
    pub fn new(scientific: bool) -> Self {
        Self {
            running: true,
            scientific,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_scientific(&self) -> bool {
        self.scientific
    }

    /// Flip scientific mode, returning the new setting.
    pub fn toggle_scientific(&mut self) -> bool {
        self.scientific = !self.scientific;
        self.scientific
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Label shown in the menu header.
    pub fn label(&self) -> &'static str {
        if self.scientific {
            "Scientific"
        } else {
            "Basic"
        }
    }
}
