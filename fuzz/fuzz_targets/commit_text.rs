#![no_main]

use libfuzzer_sys::fuzz_target;
use spin_core::{
    FocusTrigger, InteractionState, SpinHost, SpinId, SpinValueStore, commit_text, focus_text,
};

struct NullHost;

impl SpinHost for NullHost {
    fn set_display_text(&mut self, _id: SpinId, _text: &str) {}
    fn value_committed(&mut self, _id: SpinId, _value: f64) {}
    fn request_widget_focus(&mut self, _id: SpinId) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut store = SpinValueStore::new();
    let mut interaction = InteractionState::default();
    let mut host = NullHost;
    let id = SpinId::from_raw(1);
    store.ensure_initial_bounded(id, 5.0, 0.0, 10.0);

    focus_text(&mut interaction, id, FocusTrigger::Key);
    let committed = commit_text(&mut store, &mut interaction, id, text, &mut host);

    // Whatever the bytes were, the field must stay settled and in range.
    assert!((0.0..=10.0).contains(&committed));
    assert_eq!(store.value(id), Some(committed));
    let shown = store.display_text(id).unwrap();
    assert_eq!(spin_core::parse_value(shown), Ok(committed));
});
