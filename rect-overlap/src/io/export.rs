use crate::geometry::primitives::{Axis, Rectangle};
use crate::io::ext_repr::{ExtAxis, ExtPairResult, ExtRectangle};

/// Exports a [`Rectangle`] with the given `id` as an [`ExtRectangle`].
pub fn export_rectangle(id: u64, rect: &Rectangle) -> ExtRectangle {
    let center = rect.center();
    ExtRectangle {
        id,
        x: center.x(),
        y: center.y(),
        width: rect.width(),
        height: rect.height(),
        rotation: rect.rotation(),
    }
}

pub fn export_axis(axis: &Axis) -> ExtAxis {
    ExtAxis {
        x: axis.x(),
        y: axis.y(),
    }
}

/// Exports the outcome of a separating axis search between rectangles `a` and `b`.
/// No axis of separation means the rectangles overlap.
pub fn export_pair_result(a: u64, b: u64, separating_axis: Option<Axis>) -> ExtPairResult {
    ExtPairResult {
        a,
        b,
        overlapped: separating_axis.is_none(),
        separating_axis: separating_axis.as_ref().map(export_axis),
    }
}
