//! Table-driven commit semantics: cases live in `tests/cases/commit_cases.toml`.

use serde::Deserialize;
use spin_core::{
    FocusTrigger, InteractionState, SpinHost, SpinId, SpinValueStore, commit_text, focus_text,
};

#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(rename = "case")]
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    initial: f64,
    min: f64,
    max: f64,
    input: String,
    value: f64,
    text: String,
}

struct NullHost;

impl SpinHost for NullHost {
    fn set_display_text(&mut self, _id: SpinId, _text: &str) {}
    fn value_committed(&mut self, _id: SpinId, _value: f64) {}
    fn request_widget_focus(&mut self, _id: SpinId) {}
}

#[test]
fn commit_cases_from_table() {
    let file: CaseFile = toml::from_str(include_str!("cases/commit_cases.toml"))
        .expect("commit_cases.toml parses");
    assert!(!file.cases.is_empty());

    for case in &file.cases {
        let mut store = SpinValueStore::new();
        let mut interaction = InteractionState::default();
        let mut host = NullHost;
        let id = SpinId::from_raw(1);

        store.ensure_initial_bounded(id, case.initial, case.min, case.max);
        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        let committed = commit_text(&mut store, &mut interaction, id, &case.input, &mut host);

        assert_eq!(committed, case.value, "case {:?}: committed", case.name);
        assert_eq!(
            store.value(id),
            Some(case.value),
            "case {:?}: stored value",
            case.name
        );
        assert_eq!(
            store.display_text(id),
            Some(case.text.as_str()),
            "case {:?}: display text",
            case.name
        );
    }
}
