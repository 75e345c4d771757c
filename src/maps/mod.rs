//! Map dataset modules - static configuration for each map view.
//!
//! Each dataset is independent: the renderer loads the SVG named by the
//! module's `SVG_PATH`, colors shapes from its color scale, and resolves
//! shape ids through the module's code-to-name mapping.

pub mod german;
pub mod world;
