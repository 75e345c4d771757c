//! Static configuration data for the concert map front-end.
//!
//! Three independent modules, each loaded on demand by the renderer:
//! the German and world map datasets ([`maps`]), the base color palette
//! with conversion helpers ([`colors`]), and CSS custom-property
//! generation ([`styles`]). Everything here is immutable process-wide
//! data; the only side-effecting operation is
//! [`styles::apply_style_properties`], which writes into a
//! caller-supplied [`styles::StyleRoot`].

pub mod colors;
pub mod maps;
pub mod styles;

pub use colors::{hex_to_rgb, with_opacity, Rgb};
pub use styles::{apply_style_properties, style_properties, MemoryStyleRoot, StyleRoot};
