//! Plot configuration (serde documents with defaults and range validation).

pub(crate) mod plot;
