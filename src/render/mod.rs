//! Drawing: the surface abstraction, its SVG and CPU raster implementations, and the
//! scene that paints a fish plot onto any surface.

pub(crate) mod background;
pub(crate) mod clone;
pub(crate) mod cpu;
pub(crate) mod legend;
pub(crate) mod output;
pub(crate) mod raster;
pub(crate) mod scene;
pub(crate) mod surface;
pub(crate) mod svg;
pub(crate) mod text;
pub(crate) mod traversal;
