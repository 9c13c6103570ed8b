//! Internal per-field state.
//!
//! Managed by [`SpinValueStore`](crate::SpinValueStore); not exposed publicly.

use crate::bounds::{BoundsChange, settle};
use crate::text::format_value;

/// State for a single stepper field.
#[derive(Clone, Debug)]
pub(crate) struct SpinState {
    /// The committed value. Always finite and within `[min_value, max_value]`.
    pub value: f64,

    /// Lower bound. May be `-inf`.
    pub min_value: f64,

    /// Upper bound. May be `+inf`.
    pub max_value: f64,

    /// Display text derived from `value`; re-rendered on every commit.
    pub text: String,

    /// Monotonic revision counter, incremented on every commit, including
    /// commits that leave the numeric value unchanged. View layers key
    /// their refresh on it.
    pub value_rev: u64,
}

impl Default for SpinState {
    fn default() -> Self {
        Self::with_value(0.0, 0.0, f64::INFINITY)
    }
}

impl SpinState {
    /// Build a fresh field state from declared initial value and bounds.
    ///
    /// Bounds settle in declaration order (min, then max), the value last,
    /// all through the same settlement path as later mutations.
    pub fn with_value(initial: f64, min: f64, max: f64) -> Self {
        let s = settle(0.0, 0.0, f64::INFINITY, BoundsChange::Min(min));
        let s = settle(s.value, s.min, s.max, BoundsChange::Max(max));
        let s = settle(s.value, s.min, s.max, BoundsChange::Value(initial));

        Self {
            value: s.value,
            min_value: s.min,
            max_value: s.max,
            text: format_value(s.value),
            value_rev: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_zero_with_open_upper_bound() {
        let st = SpinState::default();
        assert_eq!(st.value, 0.0);
        assert_eq!(st.min_value, 0.0);
        assert_eq!(st.max_value, f64::INFINITY);
        assert_eq!(st.text, "0");
        assert_eq!(st.value_rev, 0);
    }

    #[test]
    fn declared_bounds_settle_before_the_initial_value() {
        let st = SpinState::with_value(50.0, 1.0, 9.0);
        assert_eq!((st.min_value, st.max_value, st.value), (1.0, 9.0, 9.0));
        assert_eq!(st.text, "9");
    }

    #[test]
    fn contradictory_declared_bounds_settle_to_the_later_one() {
        let st = SpinState::with_value(5.0, 7.0, 3.0);
        assert_eq!((st.min_value, st.max_value, st.value), (3.0, 3.0, 3.0));
    }
}
