//! Canonicalization pipeline: resample, rotate to the centroid baseline,
//! scale into a fixed bounding box.
//!
//! Two canonical strokes are comparable index by index: the pipeline is what
//! puts corresponding points into correspondence. There is no later alignment
//! search, so the fixed order of these steps is part of the matching contract.

use crate::{error::RecognizerError, geometry, point::Point};

/// Default number of points on the resampled gesture path
pub const SAMPLING_RESOLUTION: usize = 64;
/// Default side length of the canonical bounding box
pub const BOUNDING_BOX_SIZE: f32 = 100.0;

/// An axis extent this much smaller than the other axis counts as collapsed.
/// Rotating a perfectly vertical stroke leaves a residue of about
/// `length * f32::EPSILON` on the flattened axis, which this absorbs.
const COLLAPSE_RATIO: f32 = 1e-5;

/// Optional pre-processing hook applied to the raw stroke before resampling
/// (e.g. a smoothing or decimation filter supplied by the capturing UI).
pub type StrokeFilter = fn(&[Point]) -> Vec<Point>;

/// Tuning knobs for the normalization pipeline.
///
/// Both sides of a comparison must be normalized with the same parameters;
/// [`GestureLibrary`](crate::library::GestureLibrary) enforces this by
/// carrying the parameters its cached templates were built with.
#[derive(Clone, Copy, Debug)]
pub struct Parameters {
    /// Number of points every canonical stroke is resampled to.
    pub step_count: usize,
    /// Side length of the canonical bounding box.
    pub size: f32,
    /// Optional stroke filter, invoked once before resampling when present.
    pub filter: Option<StrokeFilter>,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            step_count: SAMPLING_RESOLUTION,
            size: BOUNDING_BOX_SIZE,
            filter: None,
        }
    }
}

/// Maps a raw stroke to its canonical form: exactly `step_count` points,
/// evenly spaced by arc length, first point rotated onto the centroid
/// baseline, bounding box scaled to `size` × `size`.
///
/// The input is never mutated; every step builds a fresh point list.
pub fn normalize(points: &[Point], params: &Parameters) -> Result<Vec<Point>, RecognizerError> {
    let filtered;
    let points = match params.filter {
        Some(filter) => {
            filtered = filter(points);
            filtered.as_slice()
        }
        None => points,
    };
    let resampled = resample(points, params.step_count)?;
    let rotated = rotate_to_baseline(&resampled);
    scale_to_box(&rotated, params.size)
}

/// Resamples the stroke into `n` points equally spaced along its path.
///
/// The first input point is always emitted unconditionally; after that the
/// path is walked with a running distance accumulator and a new point is
/// interpolated whenever the accumulated distance reaches the target
/// interval. Interpolation continues from the freshly emitted point, not
/// from the original vertex, so spacing is measured along the emitted path.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, RecognizerError> {
    debug_assert!(n >= 2);
    if points.len() < 2 {
        return Err(RecognizerError::DegenerateStroke);
    }
    let interval = geometry::path_length(points) / (n as f32 - 1.0);
    if interval <= 0.0 {
        return Err(RecognizerError::DegenerateStroke);
    }

    let mut new_points = Vec::with_capacity(n);
    new_points.push(points[0]);
    let mut d = 0.0;

    for i in 1..points.len() {
        let mut dist = geometry::euclidean_distance(&points[i - 1], &points[i]);
        if d + dist >= interval {
            let mut cursor = points[i - 1];
            while d + dist >= interval && new_points.len() < n {
                let t = if dist != 0.0 {
                    ((interval - d) / dist).clamp(0.0, 1.0)
                } else {
                    0.5
                };
                let q = Point::new(
                    (1.0 - t) * cursor.x + t * points[i].x,
                    (1.0 - t) * cursor.y + t * points[i].y,
                );
                new_points.push(q);

                // continue the walk from the emitted point
                dist = d + dist - interval;
                d = 0.0;
                cursor = q;
            }
            d = dist;
        } else {
            d += dist;
        }
    }
    // rounding can leave us one point short of the target resolution
    if new_points.len() == n - 1 {
        new_points.push(points[points.len() - 1]);
    }
    Ok(new_points)
}

/// Rotates the stroke about its centroid so that the direction from the
/// first point toward the centroid is cancelled out. After this step the
/// stroke's orientation no longer depends on how it was drawn on screen.
pub fn rotate_to_baseline(points: &[Point]) -> Vec<Point> {
    let c = geometry::centroid(points);
    let theta = (c.y - points[0].y).atan2(c.x - points[0].x);
    rotate_about(points, &c, -theta)
}

/// Rotates all points about `center` by `angle` radians
/// (positive angles turn clockwise in screen coordinates).
fn rotate_about(points: &[Point], center: &Point, angle: f32) -> Vec<Point> {
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            Point::new(
                center.x + dx * cos - dy * sin,
                center.y + dx * sin + dy * cos,
            )
        })
        .collect()
}

/// Remaps the stroke so its bounding box becomes exactly `size` × `size`.
///
/// The x and y axes are scaled independently: aspect ratio is not preserved.
/// This matches the single-angle pipeline above and is part of the matching
/// contract; do not swap in shape-preserving scaling.
pub fn scale_to_box(points: &[Point], size: f32) -> Result<Vec<Point>, RecognizerError> {
    let bounds = geometry::bounding_box(points);
    let width = bounds.width();
    let height = bounds.height();
    let extent = width.max(height);
    if width <= extent * COLLAPSE_RATIO || height <= extent * COLLAPSE_RATIO {
        return Err(RecognizerError::DegenerateBoundingBox);
    }
    Ok(points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - bounds.min_x) * size / width,
                (p.y - bounds.min_y) * size / height,
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-2;

    fn triangle() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(25.0, 50.0),
            Point::new(0.0, 0.0),
        ]
    }

    fn rotate_deg(points: &[Point], degrees: f32) -> Vec<Point> {
        let (sin, cos) = degrees.to_radians().sin_cos();
        points
            .iter()
            .map(|p| Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
            .collect()
    }

    fn scale(points: &[Point], k: f32) -> Vec<Point> {
        points.iter().map(|p| Point::new(p.x * k, p.y * k)).collect()
    }

    fn translate(points: &[Point], dx: f32, dy: f32) -> Vec<Point> {
        points.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect()
    }

    fn assert_strokes_eq(a: &[Point], b: &[Point], eps: f32) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!(
                (p.x - q.x).abs() < eps && (p.y - q.y).abs() < eps,
                "points differ: ({}, {}) vs ({}, {})",
                p.x, p.y, q.x, q.y,
            );
        }
    }

    #[test]
    fn resample_produces_exact_point_count() {
        for n in [2, 3, 16, 64, 128] {
            let out = resample(&triangle(), n).unwrap();
            assert_eq!(out.len(), n, "step_count {}", n);
        }
    }

    #[test]
    fn resample_emits_first_input_point_first() {
        let out = resample(&triangle(), 64).unwrap();
        assert_eq!(out[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn resample_handles_uneven_input_density() {
        // same diagonal line, wildly uneven vertex spacing
        let line = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.5, 1.5),
            Point::new(40.0, 40.0),
            Point::new(100.0, 100.0),
        ];
        let out = resample(&line, 32).unwrap();
        assert_eq!(out.len(), 32);

        // all segments except possibly the last are equally long
        let interval = geometry::path_length(&line) / 31.0;
        for w in out.windows(2).take(30) {
            let d = geometry::euclidean_distance(&w[0], &w[1]);
            assert!(
                (d - interval).abs() < 1e-3,
                "segment length {} vs interval {}",
                d,
                interval
            );
        }
    }

    #[test]
    fn resample_rejects_single_point() {
        let err = resample(&[Point::new(3.0, 3.0)], 64).unwrap_err();
        assert_eq!(err, RecognizerError::DegenerateStroke);
    }

    #[test]
    fn resample_rejects_zero_length_path() {
        let stationary = [Point::new(5.0, 5.0); 10];
        let err = resample(&stationary, 64).unwrap_err();
        assert_eq!(err, RecognizerError::DegenerateStroke);
    }

    #[test]
    fn canonical_bounding_box_has_requested_size() {
        let params = Parameters::default();
        let out = normalize(&triangle(), &params).unwrap();
        let b = geometry::bounding_box(&out);
        assert!((b.width() - params.size).abs() < EPS);
        assert!((b.height() - params.size).abs() < EPS);
        assert!(b.min_x.abs() < EPS && b.min_y.abs() < EPS);
    }

    #[test]
    fn normalize_is_rotation_invariant() {
        let params = Parameters::default();
        let base = normalize(&triangle(), &params).unwrap();
        for degrees in [15.0, 30.0, 90.0, 180.0, 270.0] {
            let rotated = normalize(&rotate_deg(&triangle(), degrees), &params).unwrap();
            assert_strokes_eq(&base, &rotated, EPS);
        }
    }

    #[test]
    fn normalize_is_scale_invariant() {
        let params = Parameters::default();
        let base = normalize(&triangle(), &params).unwrap();
        for k in [0.1, 0.5, 2.0, 25.0] {
            let scaled = normalize(&scale(&triangle(), k), &params).unwrap();
            assert_strokes_eq(&base, &scaled, EPS);
        }
    }

    #[test]
    fn normalize_is_translation_invariant() {
        let params = Parameters::default();
        let base = normalize(&triangle(), &params).unwrap();
        let shifted = normalize(&translate(&triangle(), 312.0, -87.5), &params).unwrap();
        assert_strokes_eq(&base, &shifted, EPS);
    }

    #[test]
    fn normalize_rejects_horizontal_line() {
        let line = [Point::new(0.0, 10.0), Point::new(80.0, 10.0)];
        let err = normalize(&line, &Parameters::default()).unwrap_err();
        assert_eq!(err, RecognizerError::DegenerateBoundingBox);
    }

    #[test]
    fn normalize_rejects_vertical_line() {
        let line = [Point::new(10.0, 0.0), Point::new(10.0, 80.0)];
        let err = normalize(&line, &Parameters::default()).unwrap_err();
        assert_eq!(err, RecognizerError::DegenerateBoundingBox);
    }

    #[test]
    fn normalize_leaves_input_untouched() {
        let input = triangle();
        let before = input.clone();
        let _ = normalize(&input, &Parameters::default()).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn filter_output_feeds_the_pipeline() {
        // a filter that ignores its input entirely, so the canonical form
        // proves the hook actually ran
        fn always_triangle(_points: &[Point]) -> Vec<Point> {
            vec![
                Point::new(0.0, 0.0),
                Point::new(50.0, 0.0),
                Point::new(25.0, 50.0),
                Point::new(0.0, 0.0),
            ]
        }

        let filtered = Parameters {
            filter: Some(always_triangle),
            ..Parameters::default()
        };
        let unrelated = [
            Point::new(0.0, 40.0),
            Point::new(0.0, 0.0),
            Point::new(25.0, 40.0),
            Point::new(25.0, 0.0),
        ];
        let through_filter = normalize(&unrelated, &filtered).unwrap();
        let direct = normalize(&triangle(), &Parameters::default()).unwrap();
        assert_eq!(through_filter, direct);
    }
}
