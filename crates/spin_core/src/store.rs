//! Central store for stepper field values and bounds.
//!
//! The store is the single source of truth for each field's committed value
//! and its `[min, max]` interval, and the single clamping choke point: every
//! path that changes a value goes through one settlement step. After any
//! public mutation returns, `min <= max` and `min <= value <= max` hold and
//! the display text matches the committed value.

use crate::bounds::{BoundsChange, settle};
use crate::id::SpinId;
use crate::state::SpinState;
use crate::text::format_value;
use std::collections::HashMap;

/// Central store for stepper field state.
///
/// Keyed by [`SpinId`] so one store can back every stepper field of a
/// document or panel. All mutators return the committed (clamped) value.
///
/// # Example
///
/// ```
/// use spin_core::{SpinId, SpinValueStore};
///
/// let mut store = SpinValueStore::new();
/// let id = SpinId::from_raw(1);
///
/// store.ensure_initial_bounded(id, 5.0, 0.0, 10.0);
/// assert_eq!(store.increment(id), 6.0);
/// assert_eq!(store.set_value(id, 42.0), 10.0); // clamped to max
/// assert_eq!(store.display_text(id), Some("10"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpinValueStore {
    values: HashMap<SpinId, SpinState>,
}

impl SpinValueStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: SpinId) -> bool {
        self.values.contains_key(&id)
    }

    /// The committed value for this field, if any.
    pub fn value(&self, id: SpinId) -> Option<f64> {
        self.values.get(&id).map(|s| s.value)
    }

    /// The lower bound for this field, if any.
    pub fn min_value(&self, id: SpinId) -> Option<f64> {
        self.values.get(&id).map(|s| s.min_value)
    }

    /// The upper bound for this field, if any.
    pub fn max_value(&self, id: SpinId) -> Option<f64> {
        self.values.get(&id).map(|s| s.max_value)
    }

    /// The display text derived from the committed value, if any.
    pub fn display_text(&self, id: SpinId) -> Option<&str> {
        self.values.get(&id).map(|s| s.text.as_str())
    }

    /// Monotonic revision counter for the field.
    ///
    /// Increments on every commit, including commits that leave the numeric
    /// value unchanged. Useful for view-side refresh/cache invalidation.
    pub fn value_revision(&self, id: SpinId) -> u64 {
        self.values.get(&id).map(|s| s.value_rev).unwrap_or(0)
    }

    /// Ensure an entry exists; if missing, inserts the initial value with
    /// the default bounds (`min = 0`, `max = +inf`).
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial(&mut self, id: SpinId, initial: f64) {
        self.values
            .entry(id)
            .or_insert_with(|| SpinState::with_value(initial, 0.0, f64::INFINITY));
    }

    /// Ensure an entry exists; if missing, inserts the initial value with
    /// the declared bounds. Out-of-range initials settle through the same
    /// path as later mutations.
    ///
    /// If an entry already exists, this is a no-op.
    pub fn ensure_initial_bounded(&mut self, id: SpinId, initial: f64, min: f64, max: f64) {
        self.values
            .entry(id)
            .or_insert_with(|| SpinState::with_value(initial, min, max));
    }

    /// Commit a new value, clamped into the field's bounds.
    ///
    /// Returns the committed value. Committing the already-committed value
    /// is a no-op on the number but still re-renders the text and advances
    /// the revision, so a stale display can always be forced back in sync.
    pub fn set_value(&mut self, id: SpinId, value: f64) -> f64 {
        self.apply(id, BoundsChange::Value(value))
    }

    /// Move the lower bound. If the new minimum exceeds the current maximum,
    /// the maximum is raised to match; the value is then re-clamped and
    /// re-committed.
    ///
    /// Returns the committed value.
    pub fn set_min_value(&mut self, id: SpinId, min: f64) -> f64 {
        self.apply(id, BoundsChange::Min(min))
    }

    /// Move the upper bound. If the new maximum undercuts the current
    /// minimum, the minimum is lowered to match; the value is then
    /// re-clamped and re-committed.
    ///
    /// Returns the committed value.
    pub fn set_max_value(&mut self, id: SpinId, max: f64) -> f64 {
        self.apply(id, BoundsChange::Max(max))
    }

    /// Step the value up by one. A no-op at the upper bound.
    pub fn increment(&mut self, id: SpinId) -> f64 {
        let next = self.value(id).unwrap_or(0.0) + 1.0;
        self.apply(id, BoundsChange::Value(next))
    }

    /// Step the value down by one. A no-op at the lower bound.
    pub fn decrement(&mut self, id: SpinId) -> f64 {
        let next = self.value(id).unwrap_or(0.0) - 1.0;
        self.apply(id, BoundsChange::Value(next))
    }

    /// Re-commit the current value.
    ///
    /// The numeric state is unchanged, but the text is re-rendered and the
    /// revision advances. This is the fallback used when an edit cannot be
    /// parsed: the display snaps back to the last committed value.
    pub fn refresh(&mut self, id: SpinId) -> f64 {
        let current = self.value(id).unwrap_or(0.0);
        self.apply(id, BoundsChange::Value(current))
    }

    /// Clear all stored field state.
    ///
    /// Typically called when the owning document or panel is torn down.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Settle one proposed change and commit the result.
    ///
    /// The single choke point: settlement is complete before any field of
    /// the state is written, so no partial update is ever observable.
    fn apply(&mut self, id: SpinId, change: BoundsChange) -> f64 {
        let st = self.values.entry(id).or_default();
        let settled = settle(st.value, st.min_value, st.max_value, change);

        st.min_value = settled.min;
        st.max_value = settled.max;
        st.value = settled.value;
        st.text = format_value(st.value);
        st.value_rev = st.value_rev.wrapping_add(1);

        st.value
    }
}
