//! Generic, UI-agnostic identifier for stepper fields.
//!
//! A plain `u64` newtype so the store never couples to a host toolkit's
//! widget-identifier type. Integration layers convert their native IDs at
//! the call boundary.

/// Opaque identifier for a field within a [`SpinValueStore`](crate::SpinValueStore).
///
/// A lightweight, copyable handle; the raw value carries no meaning inside
/// this crate, it is just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpinId(u64);

impl SpinId {
    /// Create a `SpinId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value, for converting back to a host ID system.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SpinId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for SpinId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<SpinId> for u64 {
    #[inline]
    fn from(id: SpinId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_id_round_trip() {
        let id = SpinId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
        assert_eq!(u64::from(id), 7);
    }

    #[test]
    fn spin_id_is_a_usable_map_key() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(SpinId::from_raw(1));
        set.insert(SpinId::from_raw(2));
        set.insert(SpinId::from_raw(1));

        assert_eq!(set.len(), 2);
    }
}
