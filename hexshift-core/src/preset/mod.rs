//! Saved generation requests and their on-disk catalog.

pub(crate) mod record;
pub(crate) mod store;
