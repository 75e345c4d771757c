//! CSS custom-property generation and injection.
//!
//! The front-end stylesheet references the palette through custom
//! properties (`--red`, `--black-opacity-30`, ...). Hosts generate the
//! full set here and write it into whatever owns their document root at
//! startup.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::colors::{palette, with_opacity};

/// Destination for generated style properties.
///
/// The host passes the root explicitly instead of the crate reaching
/// into ambient global state; bridge it to a DOM handle, a webview, or a
/// plain buffer. Writes are idempotent.
pub trait StyleRoot {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Build the full custom-property mapping.
///
/// Order and contents are fixed: the six base palette colors first, then
/// the opacity variants. Repeated calls produce identical output.
pub fn style_properties() -> Vec<(&'static str, String)> {
    vec![
        // Base colors
        ("--white", palette::WHITE.to_owned()),
        ("--black", palette::BLACK.to_owned()),
        ("--dark-grey", palette::DARK_GREY.to_owned()),
        ("--light-grey", palette::LIGHT_GREY.to_owned()),
        ("--red", palette::RED.to_owned()),
        ("--dark-red", palette::DARK_RED.to_owned()),
        // Opacity variants
        ("--red-opacity-20", with_opacity(palette::RED, 0.2)),
        ("--red-opacity-15", with_opacity(palette::RED, 0.15)),
        ("--red-opacity-50", with_opacity(palette::RED, 0.5)),
        ("--black-opacity-90", with_opacity(palette::BLACK, 0.9)),
        ("--black-opacity-30", with_opacity(palette::BLACK, 0.3)),
        ("--white-opacity-10", with_opacity(palette::WHITE, 0.1)),
    ]
}

/// Write every generated property into `root`.
///
/// Called once when the host application initializes; calling it again
/// rewrites the same values.
pub fn apply_style_properties(root: &mut dyn StyleRoot) {
    let properties = style_properties();
    for (name, value) in &properties {
        debug!("style property {name} = {value}");
        root.set_property(name, value);
    }
    info!("applied {} style properties", properties.len());
}

/// Map-backed [`StyleRoot`] for hosts that collect properties before
/// flushing them to a real document, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyleRoot {
    properties: HashMap<String, String>,
}

impl MemoryStyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl StyleRoot for MemoryStyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }
}
