//! Frame wire format and document emission.

pub(crate) mod document;
pub(crate) mod marker;
