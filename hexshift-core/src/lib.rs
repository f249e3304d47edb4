//! Hexshift is a per-letter gradient text animation engine.
//!
//! It turns a line of text plus one or more color gradients into a sequence of
//! colorized frames, then serializes those frames into the `change-interval`
//! YAML snippet consumed by game-server status plugins (one `&#RRGGBB` color
//! code per character).
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: raw [`Gradient`] stop lists become boundary-complete
//!    [`NormalizedGradient`]s (sorted, clamped, anchored at 0 and 1)
//! 2. **Generate**: [`GradientSet`] + [`AnimationSpec`] -> `Vec<Frame>` (one
//!    sampled color per character per frame, phase-shifted over time)
//! 3. **Encode**: [`Frame`] -> `&#RRGGBB`-marked string ([`encode_frame`])
//! 4. **Emit**: encoded frames -> final YAML document ([`yaml_document`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: generation is pure and stable for a given input; the
//!   parallel path produces byte-identical output to the sequential one.
//! - **No IO in the pipeline**: the only IO lives in [`PresetStore`], which is
//!   front-loaded and never touched during generation.
//! - **Byte-exact output**: marker runs and the document shape are wire
//!   contracts for the downstream configuration loader.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod gradient;
mod preset;

pub use animation::frames::{
    Frame, FrameCell, FrameThreading, generate_frames, generate_frames_with,
};
pub use animation::phase::phase_for_frame;
pub use animation::spec::{AnimationSpec, ShiftMode};
pub use encode::document::{generate_document, yaml_document};
pub use encode::marker::{COLOR_MARKER, decode_frame, encode_frame};
pub use foundation::color::Rgb;
pub use foundation::error::{HexshiftError, HexshiftResult};
pub use gradient::normalize::NormalizedGradient;
pub use gradient::set::{GradientSet, MAX_GRADIENTS};
pub use gradient::stop::{ColorStop, Gradient};
pub use preset::record::PresetRecord;
pub use preset::store::PresetStore;
