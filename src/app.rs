//! The demo panel: a handful of stepper fields backed by one store.

use egui::{CentralPanel, Context, Grid, TopBottomPanel};
use platform::ShellApp;
use spin_core::{SpinId, SpinValueStore};
use spin_gfx::{SpinFieldConfig, SpinFields};

/// Declarative description of one field, seeded into the store at startup.
struct FieldSpec {
    label: &'static str,
    initial: f64,
    min: f64,
    max: f64,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "Quantity",
        initial: 1.0,
        min: 0.0,
        max: 99.0,
    },
    FieldSpec {
        label: "Score",
        initial: 0.0,
        min: 0.0,
        max: f64::INFINITY,
    },
    FieldSpec {
        label: "Balance",
        initial: 0.0,
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    },
    FieldSpec {
        label: "Pinned",
        initial: 5.0,
        min: 5.0,
        max: 5.0,
    },
];

pub struct SpinboxApp {
    store: SpinValueStore,
    fields: SpinFields,
    config: SpinFieldConfig,
    last_committed: Option<(&'static str, f64)>,
}

impl SpinboxApp {
    pub fn new() -> Self {
        let mut store = SpinValueStore::new();
        for (i, spec) in FIELDS.iter().enumerate() {
            store.ensure_initial_bounded(field_id(i), spec.initial, spec.min, spec.max);
        }

        Self {
            store,
            fields: SpinFields::new(),
            config: SpinFieldConfig::default(),
            last_committed: None,
        }
    }
}

impl ShellApp for SpinboxApp {
    fn ui(&mut self, ctx: &Context) {
        TopBottomPanel::top("spinbox_topbar").show(ctx, |ui| {
            ui.label("Spinbox — bounded stepper fields");
        });

        CentralPanel::default().show(ctx, |ui| {
            Grid::new("spinbox_fields")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (i, spec) in FIELDS.iter().enumerate() {
                        let id = field_id(i);
                        ui.label(spec.label);
                        let out = self.fields.show(ui, &mut self.store, id, &self.config);
                        if let Some(value) = out.committed {
                            self.last_committed = Some((spec.label, value));
                        }

                        let (min, max) = (
                            self.store.min_value(id).unwrap_or(0.0),
                            self.store.max_value(id).unwrap_or(f64::INFINITY),
                        );
                        ui.label(format!("[{min}, {max}]"));
                        ui.end_row();
                    }
                });

            if let Some((label, value)) = self.last_committed {
                ui.separator();
                ui.label(format!("last commit: {label} = {value}"));
            }
        });
    }
}

fn field_id(index: usize) -> SpinId {
    SpinId::from_raw(index as u64 + 1)
}
