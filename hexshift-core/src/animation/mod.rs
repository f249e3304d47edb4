//! Phase scheduling and frame generation.

pub(crate) mod frames;
pub(crate) mod phase;
pub(crate) mod spec;
