use std::fmt::Display;

use itertools::Itertools;

use crate::geometry::Transformation;
use crate::geometry::geo_enums::Slope;
use crate::geometry::geo_traits::{AlmostCollidesWith, CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{AARect, Axis, Point};
use crate::geometry::sat;
use crate::geometry::sat::Projection;
use crate::util::assertions;

/// Rectangle with an arbitrary rotation around its center.
///
/// Before rotation, the vertices are ordered bottom-left, bottom-right, top-right, top-left.
/// Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    vertices: [Point; 4],
    center: Point,
    width: f64,
    height: f64,
    /// in degrees
    rotation: f64,
    /// Unit direction of the first edge, cached for the separating axis test
    orientation: Axis,
}

impl Rectangle {
    /// Creates a rectangle centered at `(x, y)` with dimensions `width` x `height`,
    /// rotated counter-clockwise by `rotation` degrees around its center.
    ///
    /// Zero or negative dimensions are accepted as they are.
    pub fn new(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        let (dw, dh) = (width / 2.0, height / 2.0);

        let mut vertices = [
            Point(x - dw, y - dh),
            Point(x + dw, y - dh),
            Point(x + dw, y + dh),
            Point(x - dw, y + dh),
        ];

        let angle = rotation.to_radians();
        if angle != 0.0 {
            let (sin, cos) = angle.sin_cos();
            for Point(v_x, v_y) in vertices.iter_mut() {
                let (x1, y1) = (*v_x - x, *v_y - y);
                *v_x = x1 * cos - y1 * sin + x;
                *v_y = x1 * sin + y1 * cos + y;
            }
        }

        let rect = Rectangle {
            vertices,
            center: Point(x, y),
            width,
            height,
            rotation,
            orientation: Axis::from_angle(angle),
        };

        debug_assert!(assertions::rectangle_is_consistent(&rect), "{rect:?}");

        rect
    }

    /// Returns true iff `self` and `other` overlap.
    /// Rectangles which only touch each other are considered overlapping.
    pub fn overlapped(&self, other: &Rectangle) -> bool {
        self.find_separating_axis(other).is_none()
    }

    /// Same as [`Rectangle::overlapped`], additionally returning an axis of separation
    /// in case the rectangles do not overlap.
    pub fn overlapped_with_axis(&self, other: &Rectangle) -> (bool, Option<Axis>) {
        let axis = self.find_separating_axis(other);
        (axis.is_none(), axis)
    }

    /// Searches for an axis onto which the projections of `self` and `other` are disjoint.
    /// `None` means the rectangles overlap.
    pub fn find_separating_axis(&self, other: &Rectangle) -> Option<Axis> {
        let axis = sat::find_separating_axis(
            self.candidate_axes(other),
            &self.vertices,
            &other.vertices,
            Projection::separated_from,
        );

        debug_assert!(
            axis.is_none_or(|a| assertions::separating_axis_is_valid(self, other, &a)),
            "invalid axis of separation {axis:?} for {self} and {other}"
        );

        axis
    }

    /// Tolerant version of [`Rectangle::overlapped`]: rectangles which are almost touching are also considered overlapping.
    pub fn almost_overlapped(&self, other: &Rectangle) -> bool {
        self.find_almost_separating_axis(other).is_none()
    }

    /// Tolerant version of [`Rectangle::find_separating_axis`]:
    /// only axes along which the projections are disjoint by more than a floating point tolerance qualify.
    pub fn find_almost_separating_axis(&self, other: &Rectangle) -> Option<Axis> {
        sat::find_separating_axis(
            self.candidate_axes(other),
            &self.vertices,
            &other.vertices,
            Projection::almost_separated_from,
        )
    }

    /// Up to four axes which need to be checked to decide whether `self` and `other` overlap.
    pub fn candidate_axes(&self, other: &Rectangle) -> impl Iterator<Item = Axis> {
        sat::candidate_axes(&self.orientation, &other.orientation)
    }

    /// Slope of the edge between the first two vertices
    pub fn slope(&self) -> Slope {
        let [v0, v1, _, _] = self.vertices;
        Slope::between(v0.into(), v1.into())
    }

    /// Rigid transformation of `self`, creating a new rectangle
    pub fn transformed(&self, t: &Transformation) -> Self {
        let transformed = Rectangle {
            vertices: self.vertices.map(|v| v.transform_clone(t)),
            center: self.center.transform_clone(t),
            width: self.width,
            height: self.height,
            rotation: self.rotation + t.rotation().to_degrees(),
            orientation: self.orientation.rotate(t),
        };

        debug_assert!(
            assertions::rectangle_is_consistent(&transformed),
            "{transformed:?}"
        );

        transformed
    }

    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Direction of the first edge
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    /// The four edges in cyclic order, the first one running from the first to the second vertex
    pub fn edges(&self) -> [(Point, Point); 4] {
        let [v0, v1, v2, v3] = self.vertices;
        [(v0, v1), (v1, v2), (v2, v3), (v3, v0)]
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rectangle vertices: {}", self.vertices.iter().join(" "))
    }
}

impl Shape for Rectangle {
    fn centroid(&self) -> Point {
        self.center
    }

    fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    fn bbox(&self) -> AARect {
        let xs = self.vertices.map(|v| v.0);
        let ys = self.vertices.map(|v| v.1);
        AARect {
            x_min: xs.into_iter().fold(f64::INFINITY, f64::min),
            y_min: ys.into_iter().fold(f64::INFINITY, f64::min),
            x_max: xs.into_iter().fold(f64::NEG_INFINITY, f64::max),
            y_max: ys.into_iter().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    fn diameter(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

impl CollidesWith<Rectangle> for Rectangle {
    fn collides_with(&self, other: &Rectangle) -> bool {
        self.overlapped(other)
    }
}

impl AlmostCollidesWith<Rectangle> for Rectangle {
    fn almost_collides_with(&self, other: &Rectangle) -> bool {
        self.almost_overlapped(other)
    }
}
