use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the overlap checker
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct OverlapConfig {
    /// Rectangles which are almost touching are also considered overlapping
    #[serde(default)]
    pub tolerant: bool,
    /// Write an SVG drawing of the scene next to the report
    #[serde(default = "default_svg_export")]
    pub svg_export: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_svg_export() -> bool {
    true
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            tolerant: false,
            svg_export: default_svg_export(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
