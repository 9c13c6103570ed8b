//! Store trait defining the interface for stepper field state.
//!
//! Routing code and view adapters are written against this trait so test
//! doubles or alternative stores can be swapped in. [`SpinValueStore`] is
//! the standard implementation.
//!
//! [`SpinValueStore`]: crate::SpinValueStore

use crate::id::SpinId;

/// Trait capturing the stepper store operations.
///
/// All mutators return the committed (clamped) value, and every mutation
/// re-renders the display text and advances the field's revision before
/// returning, so the text is never stale relative to the committed value.
pub trait SpinStore {
    /// Ensure an entry exists; if missing, inserts the initial value with
    /// the default bounds (`min = 0`, `max = +inf`).
    fn ensure_initial(&mut self, id: SpinId, initial: f64);

    /// Ensure an entry exists; if missing, inserts the initial value with
    /// the declared bounds.
    fn ensure_initial_bounded(&mut self, id: SpinId, initial: f64, min: f64, max: f64);

    /// Commit a new value, clamped into the field's bounds.
    fn set_value(&mut self, id: SpinId, value: f64) -> f64;

    /// Move the lower bound, dragging the upper bound if it would cross it.
    fn set_min_value(&mut self, id: SpinId, min: f64) -> f64;

    /// Move the upper bound, dragging the lower bound if it would cross it.
    fn set_max_value(&mut self, id: SpinId, max: f64) -> f64;

    /// Step the value up by one. A no-op at the upper bound.
    fn increment(&mut self, id: SpinId) -> f64;

    /// Step the value down by one. A no-op at the lower bound.
    fn decrement(&mut self, id: SpinId) -> f64;

    /// Re-commit the current value, re-rendering the text.
    fn refresh(&mut self, id: SpinId) -> f64;

    /// The committed value for this field, if any.
    fn value(&self, id: SpinId) -> Option<f64>;

    /// The lower bound for this field, if any.
    fn min_value(&self, id: SpinId) -> Option<f64>;

    /// The upper bound for this field, if any.
    fn max_value(&self, id: SpinId) -> Option<f64>;

    /// The display text derived from the committed value, if any.
    fn display_text(&self, id: SpinId) -> Option<&str>;

    /// Monotonic revision counter for the field.
    fn value_revision(&self, id: SpinId) -> u64;
}

impl SpinStore for crate::store::SpinValueStore {
    #[inline]
    fn ensure_initial(&mut self, id: SpinId, initial: f64) {
        crate::store::SpinValueStore::ensure_initial(self, id, initial)
    }

    #[inline]
    fn ensure_initial_bounded(&mut self, id: SpinId, initial: f64, min: f64, max: f64) {
        crate::store::SpinValueStore::ensure_initial_bounded(self, id, initial, min, max)
    }

    #[inline]
    fn set_value(&mut self, id: SpinId, value: f64) -> f64 {
        crate::store::SpinValueStore::set_value(self, id, value)
    }

    #[inline]
    fn set_min_value(&mut self, id: SpinId, min: f64) -> f64 {
        crate::store::SpinValueStore::set_min_value(self, id, min)
    }

    #[inline]
    fn set_max_value(&mut self, id: SpinId, max: f64) -> f64 {
        crate::store::SpinValueStore::set_max_value(self, id, max)
    }

    #[inline]
    fn increment(&mut self, id: SpinId) -> f64 {
        crate::store::SpinValueStore::increment(self, id)
    }

    #[inline]
    fn decrement(&mut self, id: SpinId) -> f64 {
        crate::store::SpinValueStore::decrement(self, id)
    }

    #[inline]
    fn refresh(&mut self, id: SpinId) -> f64 {
        crate::store::SpinValueStore::refresh(self, id)
    }

    #[inline]
    fn value(&self, id: SpinId) -> Option<f64> {
        crate::store::SpinValueStore::value(self, id)
    }

    #[inline]
    fn min_value(&self, id: SpinId) -> Option<f64> {
        crate::store::SpinValueStore::min_value(self, id)
    }

    #[inline]
    fn max_value(&self, id: SpinId) -> Option<f64> {
        crate::store::SpinValueStore::max_value(self, id)
    }

    #[inline]
    fn display_text(&self, id: SpinId) -> Option<&str> {
        crate::store::SpinValueStore::display_text(self, id)
    }

    #[inline]
    fn value_revision(&self, id: SpinId) -> u64 {
        crate::store::SpinValueStore::value_revision(self, id)
    }
}
