//! Falsification Tests - Line Primitive Claims
//!
//! Each test is a falsifiable claim about the public `Line` API.
//!
//! Run: cargo test --test line_claims_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::sync::Once;

use trueno_segment::prelude::*;

static TRACING: Once = Once::new();

/// Route library events to the test writer so `--nocapture` shows them.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

fn points(line: &Line) -> Vec<(f32, f32)> {
    line.rasterize().map(|p| (p.x, p.y)).collect()
}

// ============================================================================
// GEOMETRIC QUERIES
// ============================================================================

/// Claim 1: Inverting a line does not change its length
#[test]
fn claim_01_length_symmetric_under_invert() {
    let mut line = Line::from_coords(-3.5, 2.0, 8.25, -1.0);
    let before = line.length();
    assert_eq!(line.invert().length(), before);
}

/// Claim 2: Center of (0,0)->(4,2) is (2,1)
#[test]
fn claim_02_center() {
    let line = Line::from_coords(0.0, 0.0, 4.0, 2.0);
    assert_eq!(line.center(), Vector2::new(2.0, 1.0));
}

/// Claim 3: Bounds have non-negative size for every endpoint ordering
#[test]
fn claim_03_bounds_non_negative() {
    for (x0, y0, x1, y1) in [(0.0, 0.0, 5.0, 5.0), (5.0, 5.0, 0.0, 0.0), (-1.0, 4.0, 3.0, -2.0)] {
        let bounds = Line::from_coords(x0, y0, x1, y1).bounds();
        assert!(
            bounds.width >= 0.0,
            "negative width for {x0},{y0} -> {x1},{y1}"
        );
        assert!(
            bounds.height >= 0.0,
            "negative height for {x0},{y0} -> {x1},{y1}"
        );
    }
}

/// Claim 4: Bounds read once are frozen, even across set/invert/field writes
#[test]
fn claim_04_bounds_cached_once() {
    init_tracing();
    let mut line = Line::from_coords(0.0, 0.0, 2.0, 3.0);
    let first = line.bounds();
    assert_eq!(first, Rect::new(0.0, 0.0, 2.0, 3.0));

    line.set(Vector2::new(10.0, 10.0), Vector2::new(20.0, 40.0));
    assert_eq!(line.bounds(), first);

    line.start = Vector2::new(-50.0, -50.0);
    line.invert();
    assert_eq!(line.bounds(), first);
}

/// Claim 5: A zero-length line reports an explicit degenerate-normal error
#[test]
fn claim_05_degenerate_normal_is_explicit() {
    init_tracing();
    let line = Line::default();
    let err = line.normal().unwrap_err();
    assert!(matches!(err, Error::DegenerateNormal { .. }));
    assert_eq!(line.normal_or_zero(), Vector2::ZERO);
}

/// Claim 6: Double inversion restores the original endpoints
#[test]
fn claim_06_invert_round_trip() {
    let mut line = Line::from_coords(1.0, 2.0, 3.0, 4.0);
    line.invert();
    line.invert();
    assert_eq!(line.start, Vector2::new(1.0, 2.0));
    assert_eq!(line.end, Vector2::new(3.0, 4.0));
}

// ============================================================================
// RASTERIZATION
// ============================================================================

/// Claim 7: Horizontal line yields exactly its four grid points
#[test]
fn claim_07_rasterize_horizontal() {
    init_tracing();
    let line = Line::from_coords(0.0, 0.0, 3.0, 0.0);
    assert_eq!(
        points(&line),
        vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]
    );
}

/// Claim 8: Zero-length line yields a single point and terminates
#[test]
fn claim_08_rasterize_degenerate() {
    let line = Line::from_coords(0.0, 0.0, 0.0, 0.0);
    assert_eq!(points(&line), vec![(0.0, 0.0)]);
}

/// Claim 9: Perfect diagonal steps both axes every iteration
#[test]
fn claim_09_rasterize_diagonal() {
    let line = Line::from_coords(0.0, 0.0, 2.0, 2.0);
    assert_eq!(points(&line), vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
}

/// Claim 10: Reversed diagonal yields the reverse sequence, same cardinality
#[test]
fn claim_10_rasterize_reverse_diagonal() {
    let forward = points(&Line::from_coords(0.0, 0.0, 2.0, 2.0));
    let mut backward = points(&Line::from_coords(2.0, 2.0, 0.0, 0.0));
    assert_eq!(backward.len(), forward.len());
    backward.reverse();
    assert_eq!(backward, forward);
}

/// Claim 11: Point count is max(dx, dy) + 1 in every octant
#[test]
fn claim_11_point_count_all_octants() {
    for (x1, y1) in [(7i32, 3i32), (3, 7), (-3, 7), (-7, 3), (-7, -3), (-3, -7), (3, -7), (7, -3)] {
        let line = Line::from_coords(0.0, 0.0, x1 as f32, y1 as f32);
        let expected = x1.unsigned_abs().max(y1.unsigned_abs()) as usize + 1;
        let grid = line.rasterize();
        assert_eq!(
            grid.len(),
            expected,
            "reported length for (0,0) -> ({x1},{y1})"
        );
        assert_eq!(
            grid.count(),
            expected,
            "walked length for (0,0) -> ({x1},{y1})"
        );
    }
}

/// Claim 12: Every rasterization call is a fresh walk of the current endpoints
#[test]
fn claim_12_rasterize_not_cached() {
    let mut line = Line::from_coords(0.0, 0.0, 1.0, 0.0);
    assert_eq!(line.rasterize().len(), 2);
    line.set(Vector2::ZERO, Vector2::new(5.0, 0.0));
    assert_eq!(line.rasterize().len(), 6);
}

/// Claim 13: Fractional endpoints snap per the configured rounding policy
#[test]
fn claim_13_rounding_policy() {
    let line = Line::from_coords(0.6, 0.0, 2.4, 0.0);
    assert_eq!(points(&line), vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);

    let rounded: Vec<_> = line
        .rasterize_with(RasterOptions::new().with_rounding(Rounding::Round))
        .collect();
    assert_eq!(
        rounded,
        vec![Vector2::new(1.0, 0.0), Vector2::new(2.0, 0.0)]
    );
}

/// Claim 14: Non-finite endpoints are rejected before rasterizing
#[test]
fn claim_14_non_finite_rejected() {
    let line = Line::from_coords(f32::NAN, 0.0, 1.0, 1.0);
    assert!(matches!(
        line.try_rasterize(RasterOptions::default()),
        Err(Error::NonFiniteCoordinate { .. })
    ));
    let unbounded = Vector2::new(0.0, f32::NEG_INFINITY);
    assert!(Line::try_new(Vector2::ZERO, unbounded).is_err());
}

/// Claim 15: Cells stay exact beyond the f32 grid range; checked rasterization refuses it
#[test]
fn claim_15_large_coordinates_exact() {
    let line = Line::from_coords(16_777_216.0, 0.0, 16_777_220.0, 0.0);
    let xs: Vec<i32> = line.rasterize().cells().map(|(x, _)| x).collect();
    let expected: Vec<i32> = (16_777_216..=16_777_220).collect();
    assert_eq!(xs, expected);

    assert!(matches!(
        line.try_rasterize(RasterOptions::default()),
        Err(Error::CoordinateOutOfRange { .. })
    ));
}
