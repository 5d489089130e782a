//! Property-based tests over the geometric core
//!
//! Covers the invariants the planners lean on: sampling stays inside the
//! boundaries, the metric behaves like a metric, collision checks are
//! symmetric and consistent with containment, and the scene parser never
//! panics on arbitrary input.

use proptest::prelude::*;

use mpl::boundaries::Boundaries;
use mpl::collision::{AabbCollisionChecker, CollisionChecker, Rect};
use mpl::space::Point;

/// Strategy for non-degenerate 1D intervals.
fn interval() -> impl Strategy<Value = (f64, f64)> {
    (-100.0f64..100.0, 0.01f64..50.0).prop_map(|(lower, extent)| (lower, lower + extent))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_samples_stay_inside_bounds(
        (x_lower, x_upper) in interval(),
        (y_lower, y_upper) in interval(),
        seed in 0u64..1_000,
    ) {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let bounds: Boundaries<f64> = Boundaries::new(x_lower, x_upper, y_lower, y_upper);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let p = bounds.sample(&mut rng);
            prop_assert!(bounds.is_inside(&p));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_distance_is_symmetric_and_nonnegative(
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let d_ab = a.euclidean_distance(&b);
        let d_ba = b.euclidean_distance(&a);
        prop_assert!(d_ab >= 0.0);
        prop_assert_eq!(d_ab, d_ba);
        prop_assert_eq!(a.euclidean_distance(&a), 0.0);
    }

    #[test]
    fn prop_triangle_inequality(
        ax in -50.0f64..50.0, ay in -50.0f64..50.0,
        bx in -50.0f64..50.0, by in -50.0f64..50.0,
        cx in -50.0f64..50.0, cy in -50.0f64..50.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let c = Point::new(cx, cy);
        let direct = a.euclidean_distance(&c);
        let detour = a.euclidean_distance(&b) + b.euclidean_distance(&c);
        prop_assert!(direct <= detour + 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_contained_point_collides(
        (x_lower, x_upper) in interval(),
        (y_lower, y_upper) in interval(),
        fx in 0.0f64..1.0, fy in 0.0f64..1.0,
    ) {
        let rect = Rect::new(x_lower, x_upper, y_lower, y_upper);
        let inside = Point::new(
            x_lower + fx * (x_upper - x_lower),
            y_lower + fy * (y_upper - y_lower),
        );
        prop_assert!(rect.contains(&inside));

        let checker = AabbCollisionChecker::new(vec![rect]);
        prop_assert!(checker.is_node_colliding(&inside));
    }

    #[test]
    fn prop_edge_collision_is_symmetric(
        (x_lower, x_upper) in interval(),
        (y_lower, y_upper) in interval(),
        ax in -100.0f64..100.0, ay in -100.0f64..100.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
    ) {
        let checker = AabbCollisionChecker::new(vec![Rect::new(x_lower, x_upper, y_lower, y_upper)]);
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(
            checker.is_edge_colliding(&a, &b),
            checker.is_edge_colliding(&b, &a)
        );
    }

    #[test]
    fn prop_edge_with_contained_endpoint_collides(
        (x_lower, x_upper) in interval(),
        (y_lower, y_upper) in interval(),
        fx in 0.0f64..1.0, fy in 0.0f64..1.0,
        bx in -100.0f64..100.0, by in -100.0f64..100.0,
    ) {
        let rect = Rect::new(x_lower, x_upper, y_lower, y_upper);
        let inside = Point::new(
            x_lower + fx * (x_upper - x_lower),
            y_lower + fy * (y_upper - y_lower),
        );
        let checker = AabbCollisionChecker::new(vec![rect]);
        prop_assert!(checker.is_edge_colliding(&inside, &Point::new(bx, by)));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_scene_parser_never_panics(content in ".{0,256}") {
        // Arbitrary text must produce Ok or a typed error, never a panic.
        let _ = mpl::scene::Scene::from_toml_str(&content);
    }
}
