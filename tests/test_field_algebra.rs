//! Integration tests: algebraic invariants of composed fields.

mod common;

use common::*;
use isoforge::prelude::*;

// ============================================================================
// Evaluation contract
// ============================================================================

#[test]
fn batch_length_matches_input_for_all_combinators() {
    let shapes = vec![
        test_sphere(),
        test_csg_demo(),
        test_sphere().twist(0.7),
        test_sphere().bend(0.3),
        test_cube().elongate(DVec3::new(0.5, 0.0, 0.0)),
        test_sphere()
            .repeat(DVec3::splat(4.0), DVec3::splat(2.0))
            .unwrap(),
        test_cube().circular_array(5, 1.5).unwrap(),
        test_sphere().blend(test_cube(), 0.25),
        test_sphere().shell(0.1).dilate(0.05),
        test_sphere().scale(2.0).unwrap(),
        test_sphere().scale_xyz(DVec3::new(1.0, 2.0, 0.5)).unwrap(),
        test_sphere().rotate(1.0, DVec3::new(1.0, 1.0, 0.0)).unwrap(),
    ];
    let points = test_points();
    for shape in &shapes {
        assert_eq!(shape.evaluate(&points).len(), points.len());
        assert_eq!(shape.evaluate(&[]).len(), 0);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let shape = test_csg_demo().twist(0.2);
    let points = test_points();
    assert_eq!(shape.evaluate(&points), shape.evaluate(&points));
}

// ============================================================================
// Concrete distances
// ============================================================================

#[test]
fn sphere_distances_are_exact() {
    let sphere = test_sphere();
    assert_close(sphere.distance(DVec3::ZERO), -1.0, 1e-12, "center");
    assert_close(sphere.distance(DVec3::new(1.0, 0.0, 0.0)), 0.0, 1e-12, "surface");
    assert_close(sphere.distance(DVec3::new(2.0, 0.0, 0.0)), 1.0, 1e-12, "outside");
}

#[test]
fn box_distances_are_exact() {
    let cube = Sdf::cube(2.0).unwrap();
    assert_close(cube.distance(DVec3::ZERO), -1.0, 1e-12, "center");
    assert_close(
        cube.distance(DVec3::new(1.5, 0.0, 0.0)),
        0.5,
        1e-12,
        "outside face",
    );
}

#[test]
fn oriented_cylinder_lies_along_target_axis() {
    let along_x = Sdf::cylinder(0.5).unwrap().orient(DVec3::X).unwrap();
    assert_close(
        along_x.distance(DVec3::new(7.0, 0.5, 0.0)),
        0.0,
        1e-9,
        "surface far along X",
    );
    assert_close(along_x.distance(DVec3::new(-3.0, 0.0, 0.0)), -0.5, 1e-9, "axis");
}

// ============================================================================
// Transform laws
// ============================================================================

#[test]
fn translate_by_zero_is_identity() {
    let shape = test_csg_demo();
    let moved = shape.clone().translate(DVec3::ZERO);
    for p in test_points() {
        assert_eq!(shape.distance(p), moved.distance(p));
    }
}

#[test]
fn translations_compose() {
    let shape = test_sphere();
    let a = DVec3::new(0.5, -1.0, 2.0);
    let b = DVec3::new(-0.25, 0.75, 0.1);
    let twice = shape.clone().translate(a).translate(b);
    for p in test_points() {
        assert_close(
            twice.distance(p),
            shape.distance(p - a - b),
            1e-12,
            "translate composition",
        );
    }
}

#[test]
fn uniform_scale_scales_distances() {
    let shape = test_cube();
    let s = 2.5;
    let scaled = shape.clone().scale(s).unwrap();
    for p in test_points() {
        assert_close(
            scaled.distance(p),
            s * shape.distance(p / s),
            1e-12,
            "uniform scale",
        );
    }
}

#[test]
fn rotation_by_full_turn_is_identity() {
    let shape = test_cube();
    let turned = shape
        .clone()
        .rotate(std::f64::consts::TAU, DVec3::new(1.0, 2.0, 3.0))
        .unwrap();
    for p in test_points() {
        assert_close(shape.distance(p), turned.distance(p), 1e-9, "full turn");
    }
}

// ============================================================================
// Boolean laws
// ============================================================================

#[test]
fn hard_union_commutes() {
    let a = test_sphere();
    let b = test_cube().translate(DVec3::new(0.4, 0.2, -0.3));
    let ab = a.clone() | b.clone();
    let ba = b | a;
    for p in test_points() {
        assert_eq!(ab.distance(p), ba.distance(p));
    }
}

#[test]
fn subtracting_far_empty_shape_changes_nothing() {
    let a = test_csg_demo();
    // A speck a hundred kilometers away: positive distances everywhere
    // near the origin, i.e. an empty set for our probes.
    let far_empty = Sdf::sphere_at(1e-3, DVec3::new(1e5, 0.0, 0.0)).unwrap();
    let carved = a.clone() - far_empty;
    for p in test_points() {
        assert_close(carved.distance(p), a.distance(p), 1e-6, "subtract empty");
    }
}

#[test]
fn self_subtraction_is_empty() {
    let a = test_sphere();
    let nothing = a.clone() - a;
    for p in test_points() {
        assert!(nothing.distance(p) >= 0.0, "self subtraction inside at {p}");
    }
}

#[test]
fn smooth_union_bounds_hard_union() {
    let a = test_sphere().translate(DVec3::new(-0.6, 0.0, 0.0));
    let b = test_sphere().translate(DVec3::new(0.6, 0.0, 0.0));
    let hard = a.clone() | b.clone();
    let smooth = a.smooth_union(b, 0.4);
    for p in test_points() {
        assert!(
            smooth.distance(p) <= hard.distance(p) + 1e-12,
            "smooth union above hard union at {p}"
        );
    }
}

#[test]
fn zero_k_smooth_matches_hard() {
    let a = test_sphere();
    let b = test_cube();
    let hard = a.clone() | b.clone();
    let tagged = a.with_k(0.0) | b;
    for p in test_points() {
        assert_eq!(hard.distance(p), tagged.distance(p));
    }
}

// ============================================================================
// Modifier laws
// ============================================================================

#[test]
fn shell_is_absolute_distance_minus_thickness() {
    let a = test_csg_demo();
    let t = 0.07;
    let shelled = a.clone().shell(t);
    for p in test_points() {
        assert_close(
            shelled.distance(p),
            a.distance(p).abs() - t,
            1e-12,
            "shell",
        );
    }
}

#[test]
fn dilate_and_erode_cancel() {
    let a = test_sphere();
    let r = 0.2;
    let round_trip = a.clone().dilate(r).erode(r);
    for p in test_points() {
        assert_close(round_trip.distance(p), a.distance(p), 1e-12, "dilate/erode");
    }
}

#[test]
fn repeat_covers_neighbor_cells() {
    let lattice = test_sphere()
        .repeat(DVec3::splat(5.0), DVec3::splat(3.0))
        .unwrap();
    // The copy two cells over evaluates like the original.
    let p = DVec3::new(10.3, 0.1, -0.2);
    assert_close(
        lattice.distance(p),
        test_sphere().distance(p - DVec3::new(10.0, 0.0, 0.0)),
        1e-12,
        "repeat copy",
    );
}

#[test]
fn blend_midpoint_averages_fields() {
    let a = test_sphere();
    let b = test_cube();
    let half = a.clone().blend(b.clone(), 0.5);
    for p in test_points() {
        assert_close(
            half.distance(p),
            0.5 * (a.distance(p) + b.distance(p)),
            1e-12,
            "blend midpoint",
        );
    }
}

#[test]
fn circular_array_contains_rotated_copies() {
    let petal = Sdf::sphere_at(0.3, DVec3::new(1.2, 0.0, 0.0)).unwrap();
    let flower = petal.circular_array(8, 0.0).unwrap();
    // Each copy center must be inside the array.
    for i in 0..8 {
        let angle = std::f64::consts::TAU * i as f64 / 8.0;
        let center = DVec3::new(1.2 * angle.cos(), 1.2 * angle.sin(), 0.0);
        assert!(
            flower.distance(center) < -0.29,
            "copy {i} missing at {center}"
        );
    }
}
