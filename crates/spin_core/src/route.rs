//! Command routing from view events onto the store.
//!
//! The surrounding toolkit owns trigger wiring (which key, which button);
//! this module owns the resulting store and focus effects. Three logical
//! commands exist: step up, step down, and commit the edited text. A field
//! is either **Idle** (text mirrors the committed value) or **Editing**
//! (the text part holds focus and its raw text may diverge). Committing,
//! whether by Enter, by focus loss, or by stepping out of an active edit,
//! always ends in Idle.

use crate::id::SpinId;
use crate::text::parse_value;
use crate::traits::SpinStore;

/// View-side adapter for a stepper host.
///
/// Implemented once per host toolkit; the router pushes every outbound
/// effect through it so the core never touches widget APIs.
pub trait SpinHost {
    /// The display text changed; repaint the text part.
    fn set_display_text(&mut self, id: SpinId, text: &str);

    /// A value was committed (possibly unchanged).
    fn value_committed(&mut self, id: SpinId, value: f64);

    /// Move input focus from the text part to the widget as a whole.
    fn request_widget_focus(&mut self, id: SpinId);
}

/// What handed focus to the text part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTrigger {
    Pointer,
    Key,
}

/// Editing phase of a field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditPhase {
    /// Text mirrors the committed value.
    #[default]
    Idle,
    /// The text part holds focus; raw text may diverge from the value.
    Editing,
}

/// Focus and edit state across the fields of one store.
///
/// At most one field's text part holds focus at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionState {
    focused: Option<SpinId>,
    phase: EditPhase,
}

impl InteractionState {
    /// The field whose text part holds focus, if any.
    pub fn focused(&self) -> Option<SpinId> {
        self.focused
    }

    /// Returns `true` if this field's text part is being edited.
    pub fn is_editing(&self, id: SpinId) -> bool {
        self.focused == Some(id) && self.phase == EditPhase::Editing
    }

    /// Reset all focus/edit state.
    pub fn clear(&mut self) {
        self.focused = None;
        self.phase = EditPhase::Idle;
    }

    fn begin_edit(&mut self, id: SpinId) {
        self.focused = Some(id);
        self.phase = EditPhase::Editing;
    }

    fn end_edit(&mut self, id: SpinId) {
        if self.focused == Some(id) {
            self.phase = EditPhase::Idle;
        }
    }

    fn drop_focus(&mut self, id: SpinId) {
        if self.focused == Some(id) {
            self.focused = None;
            self.phase = EditPhase::Idle;
        }
    }
}

/// The text part of `id` gained input focus: the field enters Editing.
pub fn focus_text(interaction: &mut InteractionState, id: SpinId, _trigger: FocusTrigger) {
    interaction.begin_edit(id);
}

/// Commit the raw text currently held by the view.
///
/// Parseable text is committed through the store's clamping path. Anything
/// else falls back to re-committing the last value, which snaps the display
/// back: the unparseable edit is discarded, not raised as an error. Ends
/// Editing.
///
/// Returns the committed value.
pub fn commit_text<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) -> f64
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    let committed = match parse_value(raw) {
        Ok(v) => store.set_value(id, v),
        Err(_) => store.refresh(id),
    };
    interaction.end_edit(id);
    emit(store, id, host);
    committed
}

/// The text part lost focus without an explicit commit keystroke.
///
/// Loss of focus is itself a commit trigger: the raw text is committed (or
/// discarded if unparseable) and the field's focus state is released.
pub fn text_lost_focus<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) -> f64
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    let committed = commit_text(store, interaction, id, raw, host);
    interaction.drop_focus(id);
    committed
}

/// Enter was pressed in the text part: commit, then hand focus back to the
/// widget as a whole.
pub fn enter_pressed<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) -> f64
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    let committed = commit_text(store, interaction, id, raw, host);
    host.request_widget_focus(id);
    committed
}

/// Step the field up by one.
///
/// If the text part is being edited, the pending raw text is committed
/// first and focus moves to the widget, so the stepped value is not pushed
/// into an in-progress edit. Always ends Idle.
pub fn increase<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) -> f64
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    leave_edit_before_step(store, interaction, id, raw, host);
    let committed = store.increment(id);
    emit(store, id, host);
    committed
}

/// Step the field down by one. Mirror of [`increase`].
pub fn decrease<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) -> f64
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    leave_edit_before_step(store, interaction, id, raw, host);
    let committed = store.decrement(id);
    emit(store, id, host);
    committed
}

fn leave_edit_before_step<S, H>(
    store: &mut S,
    interaction: &mut InteractionState,
    id: SpinId,
    raw: &str,
    host: &mut H,
) where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    if interaction.is_editing(id) {
        commit_text(store, interaction, id, raw, host);
        host.request_widget_focus(id);
    }
}

/// Push the field's current text and value to the host.
fn emit<S, H>(store: &S, id: SpinId, host: &mut H)
where
    S: SpinStore + ?Sized,
    H: SpinHost + ?Sized,
{
    if let Some(text) = store.display_text(id) {
        host.set_display_text(id, text);
    }
    if let Some(value) = store.value(id) {
        host.value_committed(id, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SpinValueStore;

    #[derive(Debug, PartialEq)]
    enum HostEvent {
        Text(SpinId, String),
        Committed(SpinId, f64),
        WidgetFocus(SpinId),
    }

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<HostEvent>,
    }

    impl SpinHost for RecordingHost {
        fn set_display_text(&mut self, id: SpinId, text: &str) {
            self.events.push(HostEvent::Text(id, text.to_string()));
        }

        fn value_committed(&mut self, id: SpinId, value: f64) {
            self.events.push(HostEvent::Committed(id, value));
        }

        fn request_widget_focus(&mut self, id: SpinId) {
            self.events.push(HostEvent::WidgetFocus(id));
        }
    }

    fn setup(initial: f64, min: f64, max: f64) -> (SpinValueStore, InteractionState, SpinId) {
        let mut store = SpinValueStore::new();
        let id = SpinId::from_raw(1);
        store.ensure_initial_bounded(id, initial, min, max);
        (store, InteractionState::default(), id)
    }

    #[test]
    fn focus_enters_editing() {
        let (_, mut interaction, id) = setup(3.0, 0.0, 10.0);

        assert!(!interaction.is_editing(id));
        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        assert!(interaction.is_editing(id));
        assert_eq!(interaction.focused(), Some(id));
    }

    #[test]
    fn commit_parses_and_clamps_through_the_store() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        let committed = commit_text(&mut store, &mut interaction, id, " 42 ", &mut host);

        assert_eq!(committed, 10.0);
        assert!(!interaction.is_editing(id));
        assert_eq!(
            host.events,
            vec![
                HostEvent::Text(id, "10".to_string()),
                HostEvent::Committed(id, 10.0),
            ]
        );
    }

    #[test]
    fn unparseable_commit_snaps_the_display_back() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Key);
        let committed = commit_text(&mut store, &mut interaction, id, "not a number", &mut host);

        assert_eq!(committed, 3.0);
        assert_eq!(store.value(id), Some(3.0));
        assert_eq!(
            host.events,
            vec![
                HostEvent::Text(id, "3".to_string()),
                HostEvent::Committed(id, 3.0),
            ]
        );
    }

    #[test]
    fn losing_focus_commits_and_releases_focus() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        text_lost_focus(&mut store, &mut interaction, id, "7", &mut host);

        assert_eq!(store.value(id), Some(7.0));
        assert_eq!(interaction.focused(), None);
    }

    #[test]
    fn enter_commits_and_hands_focus_to_the_widget() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Key);
        enter_pressed(&mut store, &mut interaction, id, "8", &mut host);

        assert_eq!(store.value(id), Some(8.0));
        assert_eq!(host.events.last(), Some(&HostEvent::WidgetFocus(id)));
    }

    #[test]
    fn stepping_while_idle_does_not_touch_focus() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        let committed = increase(&mut store, &mut interaction, id, "", &mut host);

        assert_eq!(committed, 4.0);
        assert_eq!(
            host.events,
            vec![
                HostEvent::Text(id, "4".to_string()),
                HostEvent::Committed(id, 4.0),
            ]
        );
    }

    #[test]
    fn stepping_while_editing_commits_the_pending_text_first() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        let committed = increase(&mut store, &mut interaction, id, "7", &mut host);

        // Pending "7" commits, focus moves to the widget, then one step up.
        assert_eq!(committed, 8.0);
        assert!(!interaction.is_editing(id));
        assert_eq!(
            host.events,
            vec![
                HostEvent::Text(id, "7".to_string()),
                HostEvent::Committed(id, 7.0),
                HostEvent::WidgetFocus(id),
                HostEvent::Text(id, "8".to_string()),
                HostEvent::Committed(id, 8.0),
            ]
        );
    }

    #[test]
    fn stepping_while_editing_garbage_discards_the_edit() {
        let (mut store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let mut host = RecordingHost::default();

        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        let committed = decrease(&mut store, &mut interaction, id, "garbage", &mut host);

        assert_eq!(committed, 2.0);
        assert_eq!(store.value(id), Some(2.0));
    }

    #[test]
    fn stepping_at_the_bound_still_reemits() {
        let (mut store, mut interaction, id) = setup(5.0, 5.0, 5.0);
        let mut host = RecordingHost::default();

        let committed = increase(&mut store, &mut interaction, id, "", &mut host);

        assert_eq!(committed, 5.0);
        assert_eq!(
            host.events,
            vec![
                HostEvent::Text(id, "5".to_string()),
                HostEvent::Committed(id, 5.0),
            ]
        );
    }

    #[test]
    fn focus_moves_between_fields() {
        let (_store, mut interaction, id) = setup(3.0, 0.0, 10.0);
        let other = SpinId::from_raw(2);

        focus_text(&mut interaction, id, FocusTrigger::Pointer);
        focus_text(&mut interaction, other, FocusTrigger::Pointer);

        assert!(!interaction.is_editing(id));
        assert!(interaction.is_editing(other));
    }
}
