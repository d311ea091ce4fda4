use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::warn;
use rect_overlap::geometry::geo_traits::Shape;
use rect_overlap::geometry::primitives::{AARect, Point, Rectangle};
use rect_overlap::io::ext_repr::ExtPairResult;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws all rectangles of a scene, highlighting the overlapping pairs in `results`.
pub fn scene_to_svg(
    rects: &[(u64, Rectangle)],
    results: &[ExtPairResult],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = rects
        .iter()
        .map(|(_, r)| r.bbox())
        .reduce(AARect::bounding_rect)
        .unwrap_or(AARect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 1.0,
            y_max: 1.0,
        });

    let vbox = bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let overlapping = results.iter().filter(|r| r.overlapped).collect_vec();

    let label = {
        //print some information above the left top of the scene
        let label_content = format!(
            "rectangles: {} | overlapping pairs: {} | {}",
            rects.len(),
            overlapping.len(),
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set(
                "y",
                bbox.y_min - 0.5 * 0.025 * f64::min(bbox.width(), bbox.height()),
            )
            .set("font-size", f64::min(bbox.width(), bbox.height()) * 0.025)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let background = svg_util::data_to_path(
        svg_util::rectangle_data(&Rectangle::new(
            vbox.centroid().x(),
            vbox.centroid().y(),
            vbox.width(),
            vbox.height(),
            0.0,
        )),
        &[
            ("fill", &*format!("{}", theme.background_fill)),
            ("fill-opacity", "0.3"),
        ],
    );

    let overlapping_ids: HashSet<u64> = match options.highlight_overlaps {
        true => overlapping.iter().flat_map(|r| [r.a, r.b]).collect(),
        false => HashSet::new(),
    };

    let rects_group = rects.iter().fold(
        Group::new().set("id", "rectangles"),
        |group, (id, rect)| {
            let fill = match overlapping_ids.contains(id) {
                true => theme.overlap_fill,
                false => theme.rect_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let path = svg_util::data_to_path(
                svg_util::rectangle_data(rect),
                &[
                    ("fill", &*format!("{fill}")),
                    ("fill-opacity", "0.5"),
                    ("stroke", &*format!("{stroke}")),
                    ("stroke-width", &*format!("{stroke_width}")),
                    ("stroke-linejoin", "round"),
                ],
            )
            .add(Title::new(format!(
                "id: {id}, center: {}, size: {} x {}, rotation: {}°, {rect}",
                rect.center(),
                rect.width(),
                rect.height(),
                rect.rotation()
            )));
            group.add(path)
        },
    );

    let ids_group = match options.draw_ids {
        false => None,
        true => {
            let group = rects.iter().fold(Group::new().set("id", "ids"), |group, (id, rect)| {
                let Point(x, y) = rect.center();
                let font_size = f64::max(f64::min(rect.width(), rect.height()).abs() * 0.3, stroke_width);
                group.add(
                    Text::new(format!("{id}"))
                        .set("x", x)
                        .set("y", y)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                )
            });
            Some(group)
        }
    };

    let axes_group = match options.draw_axes {
        false => None,
        true => {
            let group = rects.iter().fold(Group::new().set("id", "axes"), |group, (_, rect)| {
                let c = rect.center();
                let o = rect.orientation();
                let len = rect.width().abs() / 2.0;
                let end = Point(c.0 + o.x() * len, c.1 + o.y() * len);
                group
                    .add(svg_util::data_to_path(
                        svg_util::line_data(c, end),
                        &[
                            ("stroke", &*format!("{}", theme.axis_color)),
                            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                            ("stroke-linecap", "round"),
                        ],
                    ))
                    .add(svg_util::point(
                        c,
                        Some(&*format!("{}", theme.axis_color)),
                        Some(2.0 * stroke_width),
                    ))
            });
            Some(group)
        }
    };

    let overlap_group = match options.highlight_overlaps {
        false => None,
        true => {
            let centers: HashMap<u64, Point> =
                rects.iter().map(|(id, r)| (*id, r.center())).collect();
            let mut group = Group::new().set("id", "overlap_lines");
            for result in overlapping {
                match (centers.get(&result.a), centers.get(&result.b)) {
                    (Some(&start), Some(&end)) => {
                        group = group.add(svg_util::data_to_path(
                            svg_util::line_data(start, end),
                            &[
                                ("stroke", &*format!("{}", theme.overlap_highlight_color)),
                                ("stroke-opacity", "0.75"),
                                ("stroke-width", &*format!("{}", stroke_width * 4.0)),
                                (
                                    "stroke-dasharray",
                                    &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                                ),
                                ("stroke-linecap", "round"),
                                ("stroke-linejoin", "round"),
                            ],
                        ));
                    }
                    _ => warn!(
                        "overlap between unknown rectangles {} and {}",
                        result.a, result.b
                    ),
                }
            }
            Some(group)
        }
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let optionals = [axes_group, overlap_group, ids_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(background)
        .add(rects_group)
        .add(optionals)
        .add(label)
}
