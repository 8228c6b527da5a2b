//! Percentage value object for the 0-100 score scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whole-number share of the maximum score, between 0 and 100 inclusive.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Creates a percentage, clamping values above 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Computes `round(part / whole * 100)`, clamped to 100.
    ///
    /// A zero `whole` yields zero percent.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let pct = (f64::from(part) / f64::from(whole) * 100.0).round();
        Self::new(pct.min(100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
