#[cfg(test)]
mod tests {
    use test_case::test_case;

    use rect_overlap::geometry::primitives::{Axis, Rectangle};
    use rect_overlap::io::export::{export_axis, export_pair_result, export_rectangle};
    use rect_overlap::io::ext_repr::{ExtAxis, ExtRectangle, ExtScene};
    use rect_overlap::io::import::{import_axis, import_rectangle, import_scene};

    fn ext_rect(id: u64, x: f64, y: f64, rotation: f64) -> ExtRectangle {
        ExtRectangle {
            id,
            x,
            y,
            width: 2.0,
            height: 1.0,
            rotation,
        }
    }

    #[test]
    fn scene_is_imported_in_order() {
        let scene = ExtScene {
            name: "row".to_string(),
            rectangles: vec![ext_rect(3, 0.0, 0.0, 0.0), ext_rect(1, 5.0, 0.0, 30.0)],
        };
        let rects = import_scene(&scene).unwrap();

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].0, 3);
        assert_eq!(rects[1].0, 1);
        assert_eq!(rects[1].1, Rectangle::new(5.0, 0.0, 2.0, 1.0, 30.0));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let scene = ExtScene {
            name: "duplicates".to_string(),
            rectangles: vec![ext_rect(1, 0.0, 0.0, 0.0), ext_rect(1, 5.0, 0.0, 0.0)],
        };
        assert!(import_scene(&scene).is_err());
    }

    #[test_case(f64::NAN, 0.0; "nan center")]
    #[test_case(0.0, f64::INFINITY; "infinite rotation")]
    fn non_finite_parameters_are_rejected(x: f64, rotation: f64) {
        assert!(import_rectangle(&ext_rect(0, x, 0.0, rotation)).is_err());
    }

    #[test]
    fn exported_rectangle_keeps_its_parameters() {
        let ext = ext_rect(7, -1.0, 4.0, 12.5);
        let rect = import_rectangle(&ext).unwrap();
        assert_eq!(export_rectangle(7, &rect), ext);
    }

    #[test]
    fn rotation_defaults_to_zero() {
        let json = r#"{"name": "s", "rectangles": [{"id": 0, "x": 1, "y": 2, "width": 3, "height": 4}]}"#;
        let scene: ExtScene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.rectangles[0].rotation, 0.0);
    }

    #[test]
    fn pair_result_carries_witness_only_when_separated() {
        let separated = export_pair_result(0, 1, Some(Axis::X));
        assert!(!separated.overlapped);
        assert_eq!(separated.separating_axis, Some(ExtAxis { x: 1.0, y: 0.0 }));

        let overlapped = export_pair_result(0, 1, None);
        assert!(overlapped.overlapped);
        assert_eq!(overlapped.separating_axis, None);
        let json = serde_json::to_string(&overlapped).unwrap();
        assert!(!json.contains("separating_axis"));
    }

    #[test]
    fn axis_is_normalized_on_import() {
        let axis = import_axis(&ExtAxis { x: 0.0, y: 5.0 }).unwrap();
        assert_eq!(export_axis(&axis), ExtAxis { x: 0.0, y: 1.0 });
        assert!(import_axis(&ExtAxis { x: 0.0, y: 0.0 }).is_err());
    }
}
