//! # spin_core
//!
//! UI-agnostic state layer for bounded numeric stepper fields.
//!
//! A stepper field holds one double-precision value constrained to a
//! mutable `[min, max]` interval, plus the text the value is displayed as.
//! This crate provides the building blocks for keeping the four mutually
//! consistent under arbitrary mutation order:
//! - [`SpinId`]: a generic, opaque identifier for fields
//! - [`SpinValueStore`]: the central store; every value/bound mutation
//!   settles through one clamping choke point
//! - command routing ([`increase`], [`decrease`], [`commit_text`], ...)
//!   mapping view events onto store mutations and focus effects through a
//!   [`SpinHost`] adapter
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework (egui, wgpu, etc.)
//! - Layout or hit-testing systems
//! - Platform-specific APIs
//!
//! It depends only on `std` and provides pure stepping/commit semantics
//! that can be tested independently and reused across different UI
//! implementations.
//!
//! ## Integration
//!
//! A host toolkit wires its own triggers (keys, buttons, focus changes) to
//! the routing functions and implements [`SpinHost`] to receive display
//! text, committed values, and focus requests back.

mod bounds;
mod id;
mod route;
mod state;
mod store;
mod text;
mod traits;

pub use bounds::{BoundsChange, Settled, clamp_to_bounds, settle};
pub use id::SpinId;
pub use route::{
    EditPhase, FocusTrigger, InteractionState, SpinHost, commit_text, decrease, enter_pressed,
    focus_text, increase, text_lost_focus,
};
pub use store::SpinValueStore;
pub use text::{ParseValueError, format_value, parse_value};
pub use traits::SpinStore;
