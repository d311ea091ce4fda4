use serde::{Deserialize, Serialize};

/// External representation of a [`Rectangle`](crate::geometry::primitives::Rectangle).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRectangle {
    /// Unique identifier of the rectangle within its scene
    pub id: u64,
    /// x-coordinate of the center
    pub x: f64,
    /// y-coordinate of the center
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Counter-clockwise rotation around the center, in degrees
    #[serde(default)]
    pub rotation: f64,
}

/// A named collection of rectangles
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtScene {
    #[serde(default)]
    pub name: String,
    pub rectangles: Vec<ExtRectangle>,
}

/// External representation of an [`Axis`](crate::geometry::primitives::Axis).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtAxis {
    pub x: f64,
    pub y: f64,
}

/// Outcome of the overlap test between two rectangles of a scene
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPairResult {
    /// id of the first rectangle
    pub a: u64,
    /// id of the second rectangle
    pub b: u64,
    pub overlapped: bool,
    /// Axis along which the rectangles are separated, absent if they overlap
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub separating_axis: Option<ExtAxis>,
}
