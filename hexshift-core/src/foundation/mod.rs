//! Shared value types and the error taxonomy.

pub(crate) mod color;
pub(crate) mod error;
