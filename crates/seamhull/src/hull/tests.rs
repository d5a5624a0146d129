//! Engine tests: concrete merge scenarios, tangent and seam units, and
//! replay properties over random clouds.

use proptest::prelude::*;

use super::*;
use crate::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
use crate::geom::{cross, Edge, Point};
use crate::trace::{Drawable, Mark, Trace};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn has_diagonal(poly: &Polygon, a: Point, b: Point) -> bool {
    let wanted = Edge::new(a, b);
    poly.diagonals().iter().any(|d| d.connects_same(&wanted))
}

/// Twice the signed area of the ring; positive for counter-clockwise order.
fn signed_area_2(ring: &[Point]) -> f64 {
    let mut acc = 0.0;
    for k in 0..ring.len() {
        let a = ring[k];
        let b = ring[(k + 1) % ring.len()];
        acc += a.x * b.y - b.x * a.y;
    }
    acc
}

/// On-or-inside test for a counter-clockwise convex ring.
fn ring_contains(ring: &[Point], p: Point) -> bool {
    match ring.len() {
        1 => ring[0] == p,
        2 => {
            // on the segment, within tolerance
            let collinear = cross(ring[0], ring[1], p).abs() < 1e-6;
            let within = p.x >= ring[0].x.min(ring[1].x) - 1e-9
                && p.x <= ring[0].x.max(ring[1].x) + 1e-9;
            collinear && within
        }
        _ => (0..ring.len()).all(|k| {
            let a = ring[k];
            let b = ring[(k + 1) % ring.len()];
            cross(a, b, p) >= -1e-6
        }),
    }
}

/// Replaying any prefix must never hit a dangling removal: each frame moves
/// the live-set size by exactly one in the direction of its mark.
fn assert_frames_consistent(trace: &Trace) {
    let mut prev = 0usize;
    for k in 0..=trace.len() {
        let live = trace.snapshot(k).len();
        if k > 0 {
            match trace.entries()[k - 1].mark {
                Mark::Add => assert_eq!(live, prev + 1, "add not applied at frame {k}"),
                Mark::Remove => assert_eq!(live, prev - 1, "dangling removal at frame {k}"),
            }
        }
        prev = live;
    }
}

#[test]
fn empty_input_is_invalid() {
    assert_eq!(
        build_hull(&[], true),
        Err(HullError::InvalidInput("point set must not be empty"))
    );
}

#[test]
fn single_point_yields_a_singleton_polygon() {
    let (hull, trace) = build_hull(&[pt(4.0, 2.0)], true).unwrap();
    assert_eq!(hull.ring(), &[pt(4.0, 2.0)]);
    assert!(hull.interior().is_empty());
    assert!(hull.diagonals().is_empty());
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.final_state(), vec![Drawable::Polygon(hull)]);
}

#[test]
fn two_points_trace_shape() {
    let (hull, trace) = build_hull(&[pt(0.0, 0.0), pt(2.0, 1.0)], true).unwrap();
    assert_eq!(hull.ring(), &[pt(0.0, 0.0), pt(2.0, 1.0)]);
    // two singleton adds, two seeded tangent searches (one transient pair
    // each), two retirements, one merged add
    assert_eq!(trace.len(), 9);
    assert_eq!(trace.final_state(), vec![Drawable::Polygon(hull)]);
}

#[test]
fn scenario_triangle() {
    let points = [pt(0.0, 0.0), pt(1.0, 2.0), pt(3.0, 1.0)];
    let (hull, _) = build_hull(&points, true).unwrap();
    assert_eq!(hull.ring(), &[pt(0.0, 0.0), pt(3.0, 1.0), pt(1.0, 2.0)]);
    assert!(hull.interior().is_empty());
    assert!(hull.diagonals().is_empty());
}

#[test]
fn scenario_convex_quadrilateral() {
    let points = [pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 0.0), pt(1.0, 1.0)];
    let (hull, _) = build_hull(&points, true).unwrap();
    assert_eq!(
        hull.ring(),
        &[pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)]
    );
    assert!(hull.interior().is_empty());
    assert_eq!(hull.diagonals().len(), 1);
    assert!(has_diagonal(&hull, pt(0.0, 1.0), pt(1.0, 0.0)));
}

#[test]
fn scenario_interior_point() {
    // (2, 0.5) sits strictly inside the triangle of the other three
    let points = [pt(0.0, 0.0), pt(1.0, 2.0), pt(2.0, 0.5), pt(3.0, 0.0)];
    let (hull, _) = build_hull(&points, true).unwrap();
    assert_eq!(hull.ring(), &[pt(0.0, 0.0), pt(3.0, 0.0), pt(1.0, 2.0)]);
    assert_eq!(hull.interior(), &[pt(2.0, 0.5)]);
    assert_eq!(hull.diagonals().len(), 2);
    assert!(has_diagonal(&hull, pt(3.0, 0.0), pt(2.0, 0.5)));
    assert!(has_diagonal(&hull, pt(2.0, 0.5), pt(0.0, 0.0)));
}

#[test]
fn scenario_duplicate_coordinates_collapse() {
    let (hull, _) = build_hull(&[pt(5.0, 5.0), pt(5.0, 5.0)], true).unwrap();
    assert_eq!(hull.ring(), &[pt(5.0, 5.0)]);

    let points = [pt(0.0, 0.0), pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 0.0)];
    let (hull, _) = build_hull(&points, true).unwrap();
    assert_eq!(hull.ring(), &[pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 1.0)]);
    assert!(hull.interior().is_empty());
}

#[test]
fn triangulation_toggle_leaves_geometry_unchanged() {
    let points = draw_point_cloud(
        CloudCfg {
            count: 24,
            ..CloudCfg::default()
        },
        ReplayToken { seed: 5, index: 0 },
    );
    let (with, _) = build_hull(&points, true).unwrap();
    let (without, _) = build_hull(&points, false).unwrap();
    assert_eq!(with.ring(), without.ring());
    assert_eq!(with.interior(), without.interior());
    assert!(without.diagonals().is_empty());
    assert!(!with.diagonals().is_empty());
}

#[test]
fn tangents_of_two_vertical_segments() {
    let mut trace = Trace::new();
    let left = Polygon::new(vec![pt(0.0, 0.0), pt(0.0, 1.0)]).unwrap();
    let right = Polygon::new(vec![pt(1.0, 0.0), pt(1.0, 1.0)]).unwrap();
    let top = upper_tangent(&left, &right, &mut trace);
    let bot = lower_tangent(&left, &right, &mut trace);
    assert_eq!(top, Edge::new(pt(0.0, 0.0), pt(1.0, 0.0)));
    assert_eq!(bot, Edge::new(pt(0.0, 1.0), pt(1.0, 1.0)));
    // seeds and every candidate change were recorded as transient pairs
    assert!(trace.len() >= 4);
    assert_eq!(trace.entries()[0].mark, Mark::Add);
    assert_eq!(trace.entries()[1].mark, Mark::Remove);
    assert!(trace.final_state().is_empty());
}

#[test]
fn merge_folds_the_left_chain_into_the_interior() {
    let mut trace = Trace::new();
    let left = Polygon::new(vec![pt(0.0, 0.0), pt(2.0, 1.0), pt(1.0, 3.0)]).unwrap();
    let right = Polygon::new(vec![pt(5.0, 1.0)]).unwrap();
    let merged = merge(&left, &right, &mut trace, true);
    assert_eq!(merged.ring(), &[pt(0.0, 0.0), pt(5.0, 1.0), pt(1.0, 3.0)]);
    assert_eq!(merged.interior(), &[pt(2.0, 1.0)]);
    // the two former hull edges along the chain plus one seam diagonal
    assert_eq!(merged.diagonals().len(), 3);
    assert!(has_diagonal(&merged, pt(0.0, 0.0), pt(2.0, 1.0)));
    assert!(has_diagonal(&merged, pt(2.0, 1.0), pt(1.0, 3.0)));
    assert!(has_diagonal(&merged, pt(2.0, 1.0), pt(5.0, 1.0)));
}

#[test]
fn seam_of_a_square_is_one_diagonal() {
    let mut trace = Trace::new();
    let got = triangulate_seam(
        &[pt(0.0, 0.0), pt(0.0, 1.0)],
        &[pt(1.0, 0.0), pt(1.0, 1.0)],
        &mut trace,
    );
    assert_eq!(got, vec![Edge::new(pt(0.0, 1.0), pt(1.0, 0.0))]);
    // transient pair per accepted diagonal
    assert_eq!(trace.len(), 2);
}

#[test]
fn seam_skips_degenerate_chains() {
    let mut trace = Trace::new();
    assert!(triangulate_seam(&[], &[pt(1.0, 0.0)], &mut trace).is_empty());
    assert!(triangulate_seam(&[pt(0.0, 0.0)], &[pt(1.0, 0.0), pt(1.0, 1.0)], &mut trace).is_empty());
    assert!(trace.is_empty());
}

#[test]
fn trace_survivor_is_the_root_polygon() {
    let points = draw_point_cloud(
        CloudCfg {
            count: 40,
            ..CloudCfg::default()
        },
        ReplayToken { seed: 9, index: 0 },
    );
    let (hull, trace) = build_hull(&points, true).unwrap();
    assert_eq!(trace.final_state(), vec![Drawable::Polygon(hull)]);
    assert!(trace.snapshot(0).is_empty());
    assert_frames_consistent(&trace);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn hull_encloses_every_input_point(
        raw in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..40)
    ) {
        let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let (hull, _) = build_hull(&points, true).unwrap();
        if hull.ring_len() >= 3 {
            // zero only for fully collinear clouds
            prop_assert!(signed_area_2(hull.ring()) >= 0.0, "ring is not counter-clockwise");
        }
        for &p in &points {
            prop_assert!(ring_contains(hull.ring(), p), "point {p:?} escapes the hull");
        }
        for v in hull.ring() {
            prop_assert!(points.contains(v), "ring vertex {v:?} is not an input point");
        }
    }

    #[test]
    fn ring_and_interior_partition_the_input(
        raw in prop::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..40)
    ) {
        let points: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let (hull, _) = build_hull(&points, true).unwrap();
        let mut distinct: Vec<Point> = Vec::new();
        for &p in &points {
            if !distinct.contains(&p) {
                distinct.push(p);
            }
        }
        prop_assert_eq!(hull.ring_len() + hull.interior().len(), distinct.len());
        for p in hull.interior() {
            prop_assert!(!hull.ring().contains(p));
        }
        let mut seen: Vec<Point> = hull.ring().to_vec();
        seen.extend_from_slice(hull.interior());
        for &p in &points {
            prop_assert!(seen.contains(&p));
        }
    }

    #[test]
    fn replay_is_idempotent_over_random_clouds(seed in 0u64..500) {
        let points = draw_point_cloud(
            CloudCfg { count: 16, ..CloudCfg::default() },
            ReplayToken { seed, index: 0 },
        );
        let (hull, trace) = build_hull(&points, true).unwrap();
        prop_assert_eq!(trace.final_state(), vec![Drawable::Polygon(hull)]);
        assert_frames_consistent(&trace);
    }
}
