//! Layout solver: fraction tables to per-clone control points.

pub(crate) mod solver;
