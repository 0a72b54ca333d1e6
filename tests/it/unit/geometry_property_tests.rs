//! Property-style checks over the path geometry engine.

use pensketch::path::{decode, encode, hit_indices, resample, split};
use pensketch::Point;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[test]
fn test_round_trip_equals_input_rounded_to_one_decimal() {
    let strokes: Vec<Vec<Point>> = vec![
        vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        vec![Point::new(1.234, 5.678), Point::new(-3.21, 0.04), Point::new(100.55, -7.89)],
        vec![Point::new(0.06, 0.04), Point::new(0.1, 0.2), Point::new(9.99, 9.99)],
    ];

    for points in strokes {
        let decoded = decode(&encode(&points)).unwrap();
        assert_eq!(decoded.len(), points.len());
        for (original, round_tripped) in points.iter().zip(&decoded) {
            assert!((round1(original.x) - round_tripped.x).abs() < 1e-9);
            assert!((round1(original.y) - round_tripped.y).abs() < 1e-9);
        }
    }
}

#[test]
fn test_resample_idempotent_over_many_shapes() {
    let shapes: Vec<Vec<Point>> = vec![
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(50.0, 4.0)],
        vec![Point::new(-20.0, -20.0), Point::new(20.0, 20.0), Point::new(20.0, -20.0)],
    ];

    for points in shapes {
        let once = resample(&points, 2.0);
        assert_eq!(resample(&once, 2.0), once);
        assert!(once.len() >= points.len());
        assert_eq!(once.first(), points.first());
        assert_eq!(once.last(), points.last());
    }
}

#[test]
fn test_hit_indices_ascending_subset() {
    let points: Vec<Point> = (0..50)
        .map(|i| Point::new((i % 10) as f64, (i / 10) as f64))
        .collect();
    let hits = hit_indices(&points, 4.0, 2.0, 1.5);

    assert!(!hits.is_empty());
    assert!(hits.windows(2).all(|w| w[0] < w[1]));
    assert!(hits.iter().all(|&i| i < points.len()));
}

#[test]
fn test_split_identity_and_annihilation() {
    let points: Vec<Point> = (0..8).map(|i| Point::new(i as f64, 0.0)).collect();

    // Empty hit set: the untouched sequence comes back as one fragment
    assert_eq!(split(&points, &[]), vec![points.clone()]);

    // Hits covering everything: every fragment degenerates and is dropped
    let all: Vec<usize> = (0..points.len()).collect();
    assert!(split(&points, &all).is_empty());

    // Hits covering every other index: all gaps are single points
    let odd: Vec<usize> = (0..points.len()).filter(|i| i % 2 == 1).collect();
    assert!(split(&points, &odd).is_empty());
}

#[test]
fn test_interpolation_scenario_exact_step_formula() {
    // dist = 10, min_spacing = 2: steps = floor(10 / 2 * 2) + 1 = 11, so the
    // pair gains 10 interior samples and every gap is 10/11.
    let out = resample(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 2.0);
    assert_eq!(out.len(), 12);
    for (k, p) in out.iter().enumerate() {
        assert!((p.x - 10.0 * k as f64 / 11.0).abs() < 1e-9);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn test_erase_scenario_hits_then_split() {
    // A stroke that lingers near the origin then jumps away; erasing around
    // the first two samples leaves only the tail.
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(10.0, 10.0),
    ];

    let hits = hit_indices(&points, 0.5, 0.5, 1.0);
    assert_eq!(hits, vec![0, 1]);

    let fragments = split(&points, &hits);
    assert_eq!(fragments, vec![vec![Point::new(2.0, 2.0), Point::new(10.0, 10.0)]]);
}
