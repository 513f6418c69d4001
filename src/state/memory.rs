//! Single-value memory register (MS / MR / M+ / M- / MC).

use serde::{Deserialize, Serialize};

/// Scalar memory register, zero on creation.
///
/// The register accepts every value it is given. Keeping it finite is the
/// caller's job; the session checks operands before they get here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored value.
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    /// Add `value` to the stored value (M+).
    pub fn accumulate(&mut self, value: f64) {
        self.value += value;
    }

    /// Subtract `value` from the stored value (M-).
    pub fn deaccumulate(&mut self, value: f64) {
        self.value -= value;
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// True when the stored value is distinguishable from zero.
    pub fn has_value(&self) -> bool {
        self.value.abs() > f64::EPSILON
    }
}
