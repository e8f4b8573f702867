//! # Labor Durations
//!
//! [`Minutes`] is an exact, non-negative labor duration. Every per-task
//! duration in the rule table is a whole number of minutes, so sums are
//! exact and rounding only ever happens once, when a value is displayed.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A labor duration in whole minutes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Minutes(u32);

impl Minutes {
    /// No labor.
    pub const ZERO: Minutes = Minutes(0);

    /// Create a duration from whole minutes.
    pub const fn new(minutes: u32) -> Self {
        Self(minutes)
    }

    /// The raw minute count.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether the duration is zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Unrounded decimal hours.
    pub fn as_hours(self) -> f64 {
        f64::from(self.0) / 60.0
    }

    /// Decimal hours rounded half away from zero to 2 decimal places.
    ///
    /// Presentation only. Aggregation must never feed this value back in.
    pub fn hours_2dp(self) -> f64 {
        (self.as_hours() * 100.0).round() / 100.0
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Minutes) -> Minutes {
        Minutes(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Minutes {
    fn add_assign(&mut self, rhs: Minutes) {
        *self = *self + rhs;
    }
}

impl Sum for Minutes {
    fn sum<I: Iterator<Item = Minutes>>(iter: I) -> Minutes {
        iter.fold(Minutes::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Minutes> for Minutes {
    fn sum<I: Iterator<Item = &'a Minutes>>(iter: I) -> Minutes {
        iter.copied().sum()
    }
}

/// Renders as hours with 2 decimal places, e.g. `1.50`.
impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.hours_2dp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_hour_is_point_five() {
        assert_eq!(Minutes::new(30).as_hours(), 0.5);
    }

    #[test]
    fn rounding_applies_to_display_only() {
        // 20 minutes is 0.333.. hours; three of them are exactly one hour.
        let third = Minutes::new(20);
        assert_eq!(third.hours_2dp(), 0.33);
        let total: Minutes = [third, third, third].iter().sum();
        assert_eq!(total.as_hours(), 1.0);
        assert_eq!(total.to_string(), "1.00");
    }

    #[test]
    fn display_has_two_decimals() {
        assert_eq!(Minutes::new(90).to_string(), "1.50");
        assert_eq!(Minutes::ZERO.to_string(), "0.00");
    }

    #[test]
    fn add_saturates() {
        let big = Minutes::new(u32::MAX);
        assert_eq!(big + Minutes::new(1), big);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&Minutes::new(45)).unwrap();
        assert_eq!(json, "45");
    }
}
