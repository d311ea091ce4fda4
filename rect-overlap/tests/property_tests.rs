#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use rect_overlap::geometry::Transformation;
    use rect_overlap::geometry::geo_traits::Transformable;
    use rect_overlap::geometry::primitives::{Point, Rectangle};
    use rect_overlap::geometry::sat;
    use rect_overlap::geometry::sat::Projection;
    use rect_overlap::util::assertions;

    const N_SAMPLES: usize = 2_000;

    /// Rotations are drawn from a small set so rectangles regularly share an orientation.
    const ROTATIONS: [f64; 8] = [0.0, 15.0, 30.0, 45.0, 90.0, 120.0, 180.0, 300.0];

    fn random_rectangle(rng: &mut SmallRng) -> Rectangle {
        let rotation = match rng.random_bool(0.5) {
            true => ROTATIONS[rng.random_range(0..ROTATIONS.len())],
            false => rng.random_range(-360.0..360.0),
        };
        Rectangle::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(0.1..8.0),
            rng.random_range(0.1..8.0),
            rotation,
        )
    }

    fn random_pairs(seed: u64) -> impl Iterator<Item = (Rectangle, Rectangle)> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..N_SAMPLES).map(move |_| (random_rectangle(&mut rng), random_rectangle(&mut rng)))
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn overlap_is_symmetric(seed: u64) {
        for (a, b) in random_pairs(seed) {
            assert_eq!(a.overlapped(&b), b.overlapped(&a), "{a:?}, {b:?}");
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(7; "seed 7")]
    fn rectangle_overlaps_itself(seed: u64) {
        for (a, b) in random_pairs(seed) {
            assert!(a.overlapped(&a));
            assert!(b.overlapped(&b.clone()));
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(3; "seed 3")]
    fn witness_axis_separates_projections(seed: u64) {
        let mut n_separated = 0;
        for (a, b) in random_pairs(seed) {
            if let (false, Some(axis)) = a.overlapped_with_axis(&b) {
                n_separated += 1;
                let proj_a = Projection::of(a.vertices(), &axis);
                let proj_b = Projection::of(b.vertices(), &axis);
                assert!(
                    proj_a.min > proj_b.max || proj_b.min > proj_a.max,
                    "{axis} does not separate {a:?} and {b:?}"
                );
                assert!(assertions::separating_axis_is_valid(&b, &a, &axis));
            }
        }
        // make sure both outcomes are actually being exercised
        assert!(n_separated > 0 && n_separated < N_SAMPLES);
    }

    #[test_case(0; "seed 0")]
    #[test_case(5; "seed 5")]
    fn overlap_is_invariant_under_translation(seed: u64) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(seed + 1000);
        for (a, b) in random_pairs(seed) {
            let t = Transformation::from_translation((
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            ))?;
            assert_eq!(
                a.overlapped(&b),
                a.transformed(&t).overlapped(&b.transformed(&t)),
                "{a:?}, {b:?}, {t:?}"
            );
        }
        Ok(())
    }

    #[test_case(0; "seed 0")]
    #[test_case(9; "seed 9")]
    fn overlap_is_invariant_under_rotation(seed: u64) -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(seed + 2000);
        for (a, b) in random_pairs(seed) {
            let pivot = Point(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
            let angle = rng.random_range(-std::f64::consts::PI..std::f64::consts::PI);
            let t = Transformation::empty().rotate_about(pivot, angle)?;
            assert_eq!(
                a.overlapped(&b),
                a.transformed(&t).overlapped(&b.transformed(&t)),
                "{a:?}, {b:?}, {t:?}"
            );
        }
        Ok(())
    }

    #[test_case(0; "seed 0")]
    #[test_case(11; "seed 11")]
    fn skipping_redundant_axes_never_loses_a_separating_axis(seed: u64) {
        for (a, b) in random_pairs(seed) {
            let all_axes = sat::axis_pair(&b.orientation())
                .into_iter()
                .chain(sat::axis_pair(&a.orientation()));
            let exhaustive = sat::find_separating_axis(
                all_axes,
                a.vertices(),
                b.vertices(),
                Projection::separated_from,
            );
            assert_eq!(
                a.overlapped(&b),
                exhaustive.is_none(),
                "{a:?}, {b:?}"
            );
        }
    }

    #[test]
    fn transformed_rectangle_matches_rebuilt_one() -> Result<()> {
        let rect = Rectangle::new(1.0, 2.0, 3.0, 1.0, 10.0);
        let t = Transformation::empty()
            .rotate(20.0_f64.to_radians())?
            .translate((5.0, -1.0))?;
        let transformed = rect.transformed(&t);

        let Point(cx, cy) = Point(1.0, 2.0).transform_clone(&t);
        let rebuilt = Rectangle::new(cx, cy, 3.0, 1.0, 30.0);

        assert!(float_cmp::approx_eq!(f64, transformed.rotation(), 30.0, epsilon = 1e-9));
        for (v, w) in transformed.vertices().iter().zip(rebuilt.vertices()) {
            assert!(v.distance(w) < 1e-9, "{v} != {w}");
        }
        Ok(())
    }

    #[test]
    fn inverse_transformation_restores_rectangle() -> Result<()> {
        let rect = Rectangle::new(-4.0, 2.0, 2.0, 6.0, 75.0);
        let t = Transformation::empty().rotate_about(Point(1.0, 1.0), 1.2)?;
        let restored = rect.transformed(&t).transformed(&t.clone().inverse());

        for (v, w) in restored.vertices().iter().zip(rect.vertices()) {
            assert!(v.distance(w) < 1e-9, "{v} != {w}");
        }
        Ok(())
    }

    #[test_case(Transformation::from_translation((f64::INFINITY, 0.0)).and_then(|t| t.rotate(0.5)); "infinite translation")]
    #[test_case(Transformation::empty().rotate_about(Point(f64::INFINITY, 0.0), 0.5); "infinite pivot")]
    #[test_case(Transformation::from_rotation(f64::INFINITY); "infinite angle")]
    #[test_case(Transformation::empty().translate((f64::MAX, 0.0)).and_then(|t| t.translate((f64::MAX, 0.0))); "overflowing translation")]
    fn non_finite_transformation_is_an_error(t: Result<Transformation>) {
        assert!(t.is_err());
    }

    #[test]
    fn nan_transformation_is_rejected() {
        assert!(Transformation::from_rotation(f64::NAN).is_err());
        assert!(Transformation::from_translation((0.0, f64::NAN)).is_err());
        assert!(Transformation::empty().is_empty());
    }
}
