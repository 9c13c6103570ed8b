#![no_main]

use libfuzzer_sys::fuzz_target;
use spin_core::{BoundsChange, settle};

fn read_f64(bytes: &[u8]) -> f64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[..8]);
    f64::from_le_bytes(raw)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 25 {
        return;
    }

    let value = read_f64(&data[0..8]);
    let min = read_f64(&data[8..16]);
    let proposed = read_f64(&data[16..24]);

    // Start from a triple that already satisfies the invariants.
    if !value.is_finite() || min.is_nan() || min == f64::INFINITY || min > value {
        return;
    }
    let max = f64::INFINITY;

    let change = match data[24] % 3 {
        0 => BoundsChange::Value(proposed),
        1 => BoundsChange::Min(proposed),
        _ => BoundsChange::Max(proposed),
    };

    let s = settle(value, min, max, change);
    assert!(s.min <= s.max);
    assert!(s.min <= s.value && s.value <= s.max);
    assert!(s.value.is_finite());
});
