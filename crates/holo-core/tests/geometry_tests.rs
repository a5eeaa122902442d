// Host-side tests for the procedural target generators.

use glam::Vec3;
use holo_core::{
    generate_with, Axis, GeometryGenerator, HalfSpaceClip, ShapeKind, TargetSet,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-4;

fn all_shapes() -> Vec<ShapeKind> {
    let mut shapes = ShapeKind::ALL_PRESETS.to_vec();
    shapes.extend(['A', 'K', 'Q', 'Z'].map(ShapeKind::Letter));
    shapes
}

fn seeded(shape: ShapeKind, count: usize, clip: Option<HalfSpaceClip>, seed: u64) -> TargetSet {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with(shape, count, clip, &mut rng)
}

#[test]
fn every_shape_returns_exact_count_within_bound() {
    for shape in all_shapes() {
        for count in [1usize, 2, 7, 100, 1000] {
            let set = seeded(shape, count, None, 11);
            assert_eq!(set.len(), count, "{shape} count {count}");
            let bound = shape.bound() + EPS;
            for p in set.points() {
                assert!(
                    p.abs().max_element() <= bound,
                    "{shape}: {p} outside bound {bound}"
                );
                assert!(p.is_finite(), "{shape}: non-finite point");
            }
        }
    }
}

#[test]
fn clip_keeps_every_point_in_the_half_space() {
    for shape in all_shapes() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let clip = HalfSpaceClip::new(axis);
            let set = seeded(shape, 500, Some(clip), 5);
            assert_eq!(set.len(), 500, "{shape} {axis:?}");
            assert!(
                set.points().iter().all(|p| axis.component(*p) >= 0.0),
                "{shape} leaks across {axis:?}"
            );
        }
    }
}

#[test]
fn same_seed_same_formation() {
    let a = seeded(ShapeKind::Humanoid, 300, None, 99);
    let b = seeded(ShapeKind::Humanoid, 300, None, 99);
    let c = seeded(ShapeKind::Humanoid, 300, None, 100);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut g1 = GeometryGenerator::new(3);
    let mut g2 = GeometryGenerator::new(3);
    assert_eq!(
        g1.generate(ShapeKind::Tree, 64, None),
        g2.generate(ShapeKind::Tree, 64, None)
    );
}

#[test]
fn sphere_points_lie_on_the_unit_sphere() {
    let set = seeded(ShapeKind::Sphere, 2000, None, 1);
    for p in set.points() {
        assert!((p.length() - 1.0).abs() < 1e-4, "{p}");
    }
    // inverse-CDF sampling keeps the caps from crowding
    let polar = set.points().iter().filter(|p| p.z.abs() > 0.9).count();
    assert!(polar < 260, "{polar} points within the polar caps");
}

#[test]
fn cube_points_lie_on_faces() {
    let set = seeded(ShapeKind::Cube, 600, None, 2);
    for p in set.points() {
        assert!((p.abs().max_element() - 0.8).abs() < 1e-5, "{p}");
    }
}

#[test]
fn torus_points_sit_on_the_tube() {
    let set = seeded(ShapeKind::Torus, 600, None, 4);
    for p in set.points() {
        let ring = (p.x * p.x + p.z * p.z).sqrt() - 0.7;
        let tube = (ring * ring + p.y * p.y).sqrt();
        assert!((tube - 0.25).abs() < 1e-4, "{p}");
    }
}

#[test]
fn heart_and_galaxy_are_flat() {
    let heart = seeded(ShapeKind::Heart, 400, None, 6);
    assert!(heart.points().iter().all(|p| p.z.abs() <= 0.1 + EPS));
    let galaxy = seeded(ShapeKind::Galaxy, 400, None, 6);
    assert!(galaxy.points().iter().all(|p| p.y.abs() <= 0.05 + EPS));
}

#[test]
fn letters_stay_on_the_glyph_plane() {
    for c in 'A'..='Z' {
        let set = seeded(ShapeKind::Letter(c), 200, None, 8);
        assert_eq!(set.len(), 200);
        for p in set.points() {
            assert!(p.z.abs() <= 0.05 + EPS, "{c}: {p}");
            assert!(p.x.abs() <= 0.83 + EPS && p.y.abs() <= 0.83 + EPS, "{c}: {p}");
        }
    }
}

#[test]
fn letter_l_hugs_its_two_strokes() {
    let set = seeded(ShapeKind::Letter('L'), 300, None, 9);
    for p in set.points() {
        // vertical stroke at x = -0.8 or base stroke at y = -0.8
        let near_stem = (p.x + 0.8).abs() <= 0.03 + EPS;
        let near_base = (p.y + 0.8).abs() <= 0.03 + EPS;
        assert!(near_stem || near_base, "{p}");
    }
}

#[test]
fn unknown_names_fall_back_to_free_flow() {
    let shape = ShapeKind::from_name_or_free("spaceship");
    assert_eq!(shape, ShapeKind::Free);
    let set = seeded(shape, 500, None, 10);
    assert_eq!(set.len(), 500);
    assert!(set.points().iter().all(|p| p.abs().max_element() <= 2.0));
    // a free fill spreads well past the unit cube
    assert!(set.points().iter().any(|p| p.abs().max_element() > 1.2));
}

#[test]
fn names_round_trip_through_display() {
    for shape in all_shapes() {
        let parsed: ShapeKind = shape.to_string().parse().unwrap();
        match shape {
            ShapeKind::Letter(c) => assert_eq!(parsed, ShapeKind::Letter(c.to_ascii_uppercase())),
            _ => assert_eq!(parsed, shape),
        }
    }
}

#[test]
fn zero_count_is_empty_and_wrapped_indexing_cycles() {
    assert!(seeded(ShapeKind::Cube, 0, None, 1).is_empty());
    let set = TargetSet::new(vec![Vec3::X, Vec3::Y]);
    assert_eq!(set.wrapped(0), Some(Vec3::X));
    assert_eq!(set.wrapped(3), Some(Vec3::Y));
    assert_eq!(TargetSet::default().wrapped(0), None);
}
