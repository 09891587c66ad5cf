//! Clone data model: fraction tables, the layout forest and the JSON input document.

pub(crate) mod data;
pub(crate) mod forest;
pub(crate) mod input;
