//! The stepper field widget: a framed text edit plus step buttons.
//!
//! All value/bounds semantics live in `spin_core`; this module only turns
//! egui events into routed commands and paints the result. Arrow keys are
//! consumed before the text edit is added so stepping never fights the
//! caret, and the step buttons repeat while held.

use crate::repeat::{RepeatClock, StepDir};
use egui::{Align, Button, CornerRadius, Frame, Key, Margin, Modifiers, Stroke, TextEdit, Ui};
use spin_core::{
    FocusTrigger, InteractionState, SpinHost, SpinId, SpinValueStore, decrease, enter_pressed,
    focus_text, increase, text_lost_focus,
};
use std::collections::HashMap;

/// Sizing knobs for [`SpinFields::show`].
#[derive(Debug, Clone, Copy)]
pub struct SpinFieldConfig {
    pub height: f32,
    pub text_width: f32,
}

impl Default for SpinFieldConfig {
    fn default() -> Self {
        Self {
            height: 24.0,
            text_width: 96.0,
        }
    }
}

/// One frame's outcome for a single field.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinFieldOutput {
    /// The value committed this frame, if any commit ran.
    pub committed: Option<f64>,
    /// `true` if the field emitted anything (text or value) this frame.
    pub changed: bool,
}

/// Per-field raw edit text plus the store revision it was rendered from.
#[derive(Debug)]
struct EditBuffer {
    text: String,
    seen_rev: u64,
}

/// Retained egui-side state for the stepper fields sharing one store.
///
/// The store stays the single source of truth; this type only holds the
/// raw edit buffers (which may diverge while a field is being edited) and
/// the focus/repeat bookkeeping.
#[derive(Debug, Default)]
pub struct SpinFields {
    buffers: HashMap<SpinId, EditBuffer>,
    interaction: InteractionState,
    repeat: RepeatClock,
}

/// Collects the outbound field effects of one frame.
#[derive(Default)]
struct FrameHost {
    text: Option<String>,
    committed: Option<f64>,
    widget_focus: bool,
}

impl SpinHost for FrameHost {
    fn set_display_text(&mut self, _id: SpinId, text: &str) {
        self.text = Some(text.to_string());
    }

    fn value_committed(&mut self, _id: SpinId, value: f64) {
        self.committed = Some(value);
    }

    fn request_widget_focus(&mut self, _id: SpinId) {
        self.widget_focus = true;
    }
}

impl SpinFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint one stepper field and route its input.
    ///
    /// The field must already be seeded in the store (`ensure_initial*`);
    /// unknown ids fall back to a default field.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        store: &mut SpinValueStore,
        id: SpinId,
        config: &SpinFieldConfig,
    ) -> SpinFieldOutput {
        store.ensure_initial(id, 0.0);

        let te_id = ui.make_persistent_id(("spin-field-text", id.as_raw()));
        let mut host = FrameHost::default();
        let mut out = SpinFieldOutput::default();

        // Arrow-key stepping is resolved before the text edit exists this
        // frame, so the keys never reach the caret.
        if self.interaction.is_editing(id) {
            let (up, down) = ui.input_mut(|i| {
                (
                    i.consume_key(Modifiers::NONE, Key::ArrowUp),
                    i.consume_key(Modifiers::NONE, Key::ArrowDown),
                )
            });
            if up || down {
                let pending = self.pending_text(id);
                let committed = if up {
                    increase(store, &mut self.interaction, id, &pending, &mut host)
                } else {
                    decrease(store, &mut self.interaction, id, &pending, &mut host)
                };
                log::trace!(target: "spin.field", "arrow step field {} -> {committed}", id.as_raw());
                out.committed = Some(committed);
            }
        }

        // Keep the buffer mirroring the committed text whenever the field
        // is not being edited.
        let rev = store.value_revision(id);
        let editing = self.interaction.is_editing(id);
        let (text_resp, dec_resp, inc_resp) = {
            let buf = self.buffers.entry(id).or_insert_with(|| EditBuffer {
                text: store.display_text(id).unwrap_or_default().to_string(),
                seen_rev: rev,
            });
            if !editing && buf.seen_rev != rev {
                buf.text = store.display_text(id).unwrap_or_default().to_string();
                buf.seen_rev = rev;
            }

            let h = config.height.max(1.0);
            ui.horizontal(|ui| {
                let text_resp = Frame::new()
                    .stroke(Stroke::new(
                        1.0,
                        ui.visuals().widgets.inactive.bg_stroke.color,
                    ))
                    .corner_radius(CornerRadius::same(4))
                    .inner_margin(Margin::symmetric(4, 2))
                    .show(ui, |ui| {
                        ui.add_sized(
                            [config.text_width, h - 4.0],
                            TextEdit::singleline(&mut buf.text)
                                .id(te_id)
                                .vertical_align(Align::Center),
                        )
                    })
                    .inner;

                let dec_resp = ui.add(Button::new("−").min_size([h, h].into()));
                let inc_resp = ui.add(Button::new("+").min_size([h, h].into()));
                (text_resp, dec_resp, inc_resp)
            })
            .inner
        };

        // Focus transitions on the text part.
        if text_resp.gained_focus() {
            let trigger = if ui.input(|i| i.pointer.any_pressed() || i.pointer.any_down()) {
                FocusTrigger::Pointer
            } else {
                FocusTrigger::Key
            };
            focus_text(&mut self.interaction, id, trigger);
        }

        if text_resp.lost_focus() {
            let raw = self.pending_text(id);
            let enter = ui.input(|i| i.key_pressed(Key::Enter));
            let committed = if enter {
                enter_pressed(store, &mut self.interaction, id, &raw, &mut host)
            } else {
                text_lost_focus(store, &mut self.interaction, id, &raw, &mut host)
            };
            log::trace!(target: "spin.field", "commit field {} -> {committed}", id.as_raw());
            out.committed = Some(committed);
        }

        // Step buttons, with hold-to-repeat.
        let now = ui.input(|i| i.time);
        for (resp, dir) in [(&dec_resp, StepDir::Down), (&inc_resp, StepDir::Up)] {
            let steps = if resp.is_pointer_button_down_on() {
                self.repeat.held(id, dir, now)
            } else {
                self.repeat.released(id, dir);
                0
            };
            for _ in 0..steps {
                let pending = self.pending_text(id);
                let committed = match dir {
                    StepDir::Up => increase(store, &mut self.interaction, id, &pending, &mut host),
                    StepDir::Down => {
                        decrease(store, &mut self.interaction, id, &pending, &mut host)
                    }
                };
                out.committed = Some(committed);
            }
        }

        // Apply the frame's outbound effects.
        if host.widget_focus {
            ui.memory_mut(|mem| mem.surrender_focus(te_id));
        }
        if !self.interaction.is_editing(id) {
            let rev = store.value_revision(id);
            if let Some(buf) = self.buffers.get_mut(&id)
                && buf.seen_rev != rev
            {
                buf.text = store.display_text(id).unwrap_or_default().to_string();
                buf.seen_rev = rev;
            }
        }

        out.changed = host.text.is_some() || host.committed.is_some();
        if out.changed || self.repeat.is_armed() {
            ui.ctx().request_repaint();
        }
        out
    }

    /// Reset all retained widget state (buffers, focus, repeat).
    pub fn clear(&mut self) {
        self.buffers.clear();
        self.interaction.clear();
        self.repeat = RepeatClock::default();
    }

    fn pending_text(&self, id: SpinId) -> String {
        self.buffers
            .get(&id)
            .map(|b| b.text.clone())
            .unwrap_or_default()
    }
}
