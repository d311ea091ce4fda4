use std::fmt::Display;

use crate::geometry::Transformation;
use crate::geometry::primitives::Point;

/// Direction onto which shapes are projected.
/// Always of unit length, so [`Axis::project`] yields the exact scalar projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    x: f64,
    y: f64,
}

impl Axis {
    /// Unit axis along the x-axis
    pub const X: Axis = Axis { x: 1.0, y: 0.0 };
    /// Unit axis along the y-axis
    pub const Y: Axis = Axis { x: 0.0, y: 1.0 };

    /// Creates an axis pointing in the direction of `(x, y)`, normalized to unit length.
    /// Returns `None` if the direction is the zero vector or its magnitude is not finite.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        let magnitude = x.hypot(y);
        if magnitude > 0.0 && magnitude.is_finite() {
            Some(Axis {
                x: x / magnitude,
                y: y / magnitude,
            })
        } else {
            None
        }
    }

    /// Axis with the given angle (in radians) relative to the positive x-axis.
    pub(crate) fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Axis { x: cos, y: sin }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Scalar projection of `point` onto the axis
    #[inline(always)]
    pub fn project(&self, point: &Point) -> f64 {
        self.x * point.0 + self.y * point.1
    }

    /// The axis rotated a quarter turn counter-clockwise
    pub fn perpendicular(&self) -> Self {
        Axis {
            x: -self.y,
            y: self.x,
        }
    }

    /// Exact test, no tolerance is applied.
    pub fn is_parallel_to(&self, other: &Axis) -> bool {
        self.x * other.y - self.y * other.x == 0.0
    }

    /// Exact test, no tolerance is applied.
    pub fn is_perpendicular_to(&self, other: &Axis) -> bool {
        self.x * other.x + self.y * other.y == 0.0
    }

    /// The axis with the rotational part of `t` applied to it.
    /// Translations do not affect directions.
    pub fn rotate(&self, t: &Transformation) -> Self {
        let (x, y) = t.apply_linear(self.x, self.y);
        Axis { x, y }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Axis> for (f64, f64) {
    fn from(a: Axis) -> Self {
        (a.x, a.y)
    }
}
