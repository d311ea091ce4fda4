use std::fmt::{Display, Formatter};

use anyhow::{Result, anyhow, ensure};
use rect_overlap::geometry::primitives::{Point, Rectangle};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgSceneTheme,
    ///Fill overlapping rectangles with a distinct color and connect their centers
    #[serde(default)]
    pub highlight_overlaps: bool,
    ///Label each rectangle with its id
    #[serde(default)]
    pub draw_ids: bool,
    ///Draw the orientation of each rectangle from its center
    #[serde(default)]
    pub draw_axes: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgSceneTheme::default(),
            highlight_overlaps: true,
            draw_ids: true,
            draw_axes: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgSceneTheme {
    pub stroke_width_multiplier: f64,
    pub background_fill: Color,
    pub rect_fill: Color,
    pub overlap_fill: Color,
    pub overlap_highlight_color: Color,
    pub axis_color: Color,
}

impl Default for SvgSceneTheme {
    fn default() -> Self {
        SvgSceneTheme::EARTH_TONES
    }
}

impl SvgSceneTheme {
    pub const EARTH_TONES: SvgSceneTheme = SvgSceneTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xCC, 0x82, 0x4A),
        rect_fill: Color(0xFF, 0xC8, 0x79),
        overlap_fill: Color(0xFF, 0x5E, 0x00), // ORANGE
        overlap_highlight_color: Color(0x00, 0xFF, 0x00), // LIME
        axis_color: Color(0x2D, 0x2D, 0x2D),
    };

    pub const GRAY: SvgSceneTheme = SvgSceneTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xD3, 0xD3, 0xD3),
        rect_fill: Color(0x7A, 0x7A, 0x7A),
        overlap_fill: Color(0x63, 0x63, 0x63),
        overlap_highlight_color: Color(0xD0, 0x00, 0x00),
        axis_color: Color(0x00, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses a hex color of the form `#RRGGBB` (the `#` is optional).
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| anyhow!("invalid color: {s:?}, {e}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(D::Error::custom)
    }
}

// path data is single precision
fn coords(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn rectangle_data(rect: &Rectangle) -> Data {
    let [v0, v1, v2, v3] = *rect.vertices();
    Data::new()
        .move_to(coords(v0))
        .line_to(coords(v1))
        .line_to(coords(v2))
        .line_to(coords(v3))
        .close()
}

pub fn line_data(start: Point, end: Point) -> Data {
    Data::new().move_to(coords(start)).line_to(coords(end))
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn point(Point(x, y): Point, fill: Option<&str>, rad: Option<f64>) -> Circle {
    Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", rad.unwrap_or(0.5))
        .set("fill", fill.unwrap_or("black"))
}
