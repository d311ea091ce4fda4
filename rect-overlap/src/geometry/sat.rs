//! Separating Axis Theorem, specialized for rectangles.
//!
//! Two convex shapes are disjoint iff there is an axis onto which their projections do not intersect.
//! For polygons it suffices to test the normals of their edges.
//! A rectangle only has two distinct edge directions, each the normal of the other,
//! so two rectangles have at most four candidate axes.

use crate::geometry::primitives::{Axis, Point};
use crate::util::FPA;

/// Interval covered by the scalar projections of a set of points onto an [`Axis`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    pub fn of<'a>(points: impl IntoIterator<Item = &'a Point>, axis: &Axis) -> Self {
        points.into_iter().fold(
            Projection {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |Projection { min, max }, p| {
                let proj = axis.project(p);
                Projection {
                    min: f64::min(min, proj),
                    max: f64::max(max, proj),
                }
            },
        )
    }

    /// True if one interval lies strictly beyond the other.
    /// Touching intervals are not separated.
    #[inline(always)]
    pub fn separated_from(&self, other: &Projection) -> bool {
        self.min > other.max || other.min > self.max
    }

    /// Like [`Projection::separated_from`], but intervals which are almost touching are not separated either.
    #[inline(always)]
    pub fn almost_separated_from(&self, other: &Projection) -> bool {
        FPA(self.min) > FPA(other.max) || FPA(other.min) > FPA(self.max)
    }
}

/// The edge direction itself and its normal
pub fn axis_pair(orientation: &Axis) -> [Axis; 2] {
    [*orientation, orientation.perpendicular()]
}

/// Candidate separating axes for two rectangles with edge orientations `own` and `other`.
///
/// The pair derived from `other` comes first.
/// The pair derived from `own` is skipped when both orientations are exactly parallel or perpendicular,
/// in which case it would consist of the same two directions.
pub fn candidate_axes(own: &Axis, other: &Axis) -> impl Iterator<Item = Axis> {
    let shared_orientation = own.is_parallel_to(other) || own.is_perpendicular_to(other);
    let own_pair = (!shared_orientation).then(|| axis_pair(own));

    axis_pair(other)
        .into_iter()
        .chain(own_pair.into_iter().flatten())
}

/// Returns the first axis in `axes` along which the projections of `own` and `other` are separated,
/// according to `separated`.
pub fn find_separating_axis(
    axes: impl IntoIterator<Item = Axis>,
    own: &[Point],
    other: &[Point],
    separated: impl Fn(&Projection, &Projection) -> bool,
) -> Option<Axis> {
    axes.into_iter().find(|axis| {
        let other_proj = Projection::of(other, axis);
        let own_proj = Projection::of(own, axis);
        separated(&own_proj, &other_proj)
    })
}
