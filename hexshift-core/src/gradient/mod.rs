//! Gradient authoring, normalization, and sampling.

pub(crate) mod normalize;
pub(crate) mod sample;
pub(crate) mod set;
pub(crate) mod stop;
