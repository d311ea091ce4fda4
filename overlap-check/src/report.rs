use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use rect_overlap::geometry::primitives::Rectangle;
use rect_overlap::io::export::export_pair_result;
use rect_overlap::io::ext_repr::ExtPairResult;

/// Tests every unordered pair of `rects` for overlap, in parallel.
///
/// Pairs are reported in the order of the scene: `(r0, r1), (r0, r2), ..., (r1, r2), ...`.
/// When `tolerant` is set, rectangles which are almost touching are considered overlapping as well.
pub fn evaluate_scene(rects: &[(u64, Rectangle)], tolerant: bool) -> Vec<ExtPairResult> {
    let pairs = rects.iter().tuple_combinations().collect_vec();

    let results: Vec<ExtPairResult> = pairs
        .par_iter()
        .map(|((id_a, a), (id_b, b))| {
            let axis = match tolerant {
                false => a.find_separating_axis(b),
                true => a.find_almost_separating_axis(b),
            };
            export_pair_result(*id_a, *id_b, axis)
        })
        .collect();

    let n_overlapping = results.iter().filter(|r| r.overlapped).count();
    info!(
        "[REPORT] {} pairs evaluated, {} overlapping",
        results.len(),
        n_overlapping
    );

    results
}

/// Human readable summary of a single pair, e.g. `1 x 2: separated along (1, 0)`.
pub fn format_result(result: &ExtPairResult) -> String {
    match result.separating_axis {
        None => format!("{} x {}: overlapped", result.a, result.b),
        Some(axis) => format!(
            "{} x {}: separated along ({}, {})",
            result.a, result.b, axis.x, axis.y
        ),
    }
}
