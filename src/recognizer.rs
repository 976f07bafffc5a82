//! Nearest-template classification over canonical strokes.

use crate::{
    error::RecognizerError,
    geometry,
    library::GestureLibrary,
    normalizer::{self, Parameters},
    point::Point,
};

/// Result of a successful classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Name of the winning template
    pub name: String,
    /// Summed Manhattan distance between the canonical forms;
    /// lower is more similar
    pub distance: f32,
}

/// Main function of the recognizer.
/// Classifies a candidate stroke against the templates in the library and
/// returns the closest one, comparing cached canonical forms positionally.
/// Ties go to the earliest-inserted template.
pub fn classify(
    candidate: &[Point],
    library: &GestureLibrary,
) -> Result<Match, RecognizerError> {
    if library.is_empty() {
        return Err(RecognizerError::EmptyLibrary);
    }
    if candidate.len() < 2 {
        return Err(RecognizerError::EmptySample);
    }
    let canonical = normalizer::normalize(candidate, library.parameters())?;

    let mut min_distance = f32::MAX;
    let mut name = String::new();
    for template in library.templates() {
        let dist = canonical_distance(&canonical, template.canonical());
        if dist < min_distance {
            min_distance = dist;
            name = template.name.clone();
        }
    }
    Ok(Match {
        name,
        distance: min_distance,
    })
}

/// Scores the similarity of two strokes: both are normalized independently
/// and their canonical forms compared point by point. Non-negative; zero
/// only for strokes with identical canonical forms.
pub fn similarity(a: &[Point], b: &[Point], params: &Parameters) -> Result<f32, RecognizerError> {
    let ca = normalizer::normalize(a, params)?;
    let cb = normalizer::normalize(b, params)?;
    Ok(canonical_distance(&ca, &cb))
}

/// Sums the Manhattan distance over corresponding index pairs of two
/// canonical strokes. No alignment search is performed: resampling,
/// rotation, and scaling are trusted to have put the points into
/// correspondence already.
fn canonical_distance(a: &[Point], b: &[Point]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(p, q)| geometry::manhattan_distance(p, q))
        .sum()
}
