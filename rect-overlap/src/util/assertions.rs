use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;

use crate::geometry::primitives::{Axis, Point, Rectangle};
use crate::geometry::sat::Projection;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks whether the vertices of `rect` form a rectangle around its center:
/// opposite vertices are symmetric about the center, adjacent edges are perpendicular
/// and the cached orientation runs along the first edge.
/// Rectangles with non-finite coordinates are not checked.
pub fn rectangle_is_consistent(rect: &Rectangle) -> bool {
    let v = rect.vertices();
    let c = rect.center();

    let finite = v
        .iter()
        .chain([&c])
        .all(|p| p.0.is_finite() && p.1.is_finite());
    if !finite {
        return true;
    }

    // tolerances relative to the magnitude of the coordinates involved
    let scale = v
        .iter()
        .map(|p| f64::max(p.0.abs(), p.1.abs()))
        .fold(1.0, f64::max);
    let eps = 1e-9 * scale;

    let symmetric = [(0, 2), (1, 3)].into_iter().all(|(i, j)| {
        approx_eq!(f64, v[i].0 + v[j].0, 2.0 * c.0, epsilon = eps)
            && approx_eq!(f64, v[i].1 + v[j].1, 2.0 * c.1, epsilon = eps)
    });

    let direction = |&(s, e): &(Point, Point)| (e.0 - s.0, e.1 - s.1);

    let perpendicular = rect
        .edges()
        .iter()
        .circular_tuple_windows()
        .all(|(e1, e2)| {
            let (d1, d2) = (direction(e1), direction(e2));
            approx_eq!(f64, d1.0 * d2.0 + d1.1 * d2.1, 0.0, epsilon = eps * scale)
        });

    let oriented = {
        let o = rect.orientation();
        let d = direction(&rect.edges()[0]);
        approx_eq!(f64, o.x() * d.1 - o.y() * d.0, 0.0, epsilon = eps)
    };

    if !(symmetric && perpendicular && oriented) {
        error!(
            "inconsistent rectangle, symmetric: {symmetric}, perpendicular: {perpendicular}, oriented: {oriented}"
        );
    }

    symmetric && perpendicular && oriented
}

/// Checks whether the projections of `a` and `b` onto `axis` are disjoint.
pub fn separating_axis_is_valid(a: &Rectangle, b: &Rectangle, axis: &Axis) -> bool {
    let proj_a = Projection::of(a.vertices(), axis);
    let proj_b = Projection::of(b.vertices(), axis);
    proj_a.separated_from(&proj_b)
}
