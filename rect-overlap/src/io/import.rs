use std::collections::HashSet;

use anyhow::{Result, bail, ensure};
use log::debug;

use crate::geometry::primitives::{Axis, Rectangle};
use crate::io::ext_repr::{ExtAxis, ExtRectangle, ExtScene};

/// Converts an [`ExtRectangle`] into a [`Rectangle`].
/// All parameters need to be finite.
pub fn import_rectangle(ext_rect: &ExtRectangle) -> Result<Rectangle> {
    let ExtRectangle {
        id,
        x,
        y,
        width,
        height,
        rotation,
    } = *ext_rect;
    ensure!(
        [x, y, width, height, rotation].iter().all(|v| v.is_finite()),
        "rectangle {id} has non-finite parameters: {ext_rect:?}"
    );
    Ok(Rectangle::new(x, y, width, height, rotation))
}

/// Converts all rectangles of an [`ExtScene`], paired with their ids.
/// Ids need to be unique within the scene.
pub fn import_scene(ext_scene: &ExtScene) -> Result<Vec<(u64, Rectangle)>> {
    let mut seen_ids = HashSet::new();
    let mut rects = Vec::with_capacity(ext_scene.rectangles.len());
    for ext_rect in &ext_scene.rectangles {
        if !seen_ids.insert(ext_rect.id) {
            bail!(
                "duplicate rectangle id {} in scene '{}'",
                ext_rect.id,
                ext_scene.name
            );
        }
        rects.push((ext_rect.id, import_rectangle(ext_rect)?));
    }
    debug!(
        "[IMPORT] scene '{}' with {} rectangles",
        ext_scene.name,
        rects.len()
    );
    Ok(rects)
}

/// Converts an [`ExtAxis`] into a (normalized) [`Axis`].
pub fn import_axis(ext_axis: &ExtAxis) -> Result<Axis> {
    match Axis::new(ext_axis.x, ext_axis.y) {
        Some(axis) => Ok(axis),
        None => bail!("degenerate axis: {ext_axis:?}"),
    }
}
