//! Outline geometry: curve fitting and clone shape construction.

pub(crate) mod curve;
pub(crate) mod interp;
