use thiserror::Error;

/// Errors surfaced by the recognizer core.
///
/// All of these are local, recoverable conditions: the caller (typically a
/// drawing UI) decides how to present them. None of them is retryable — a
/// degenerate stroke stays degenerate until the user draws something else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognizerError {
    /// The stroke has fewer than two points or zero total path length,
    /// so arc-length resampling is undefined.
    #[error("stroke has zero path length and cannot be resampled")]
    DegenerateStroke,

    /// The rotated stroke has no extent along one axis (e.g. a perfectly
    /// horizontal or vertical line), so bounding-box scaling is undefined.
    #[error("stroke collapses to a zero-area bounding box and cannot be scaled")]
    DegenerateBoundingBox,

    /// Classification was asked to match a candidate with fewer than two points.
    #[error("candidate stroke needs at least two points")]
    EmptySample,

    /// Classification was asked to match against a library with no templates.
    #[error("gesture library contains no templates")]
    EmptyLibrary,

    /// Templates must carry a non-empty name.
    #[error("template name must not be empty")]
    EmptyName,

    /// Template names are unique within a library; the first insertion wins.
    #[error("library already contains a template named {0:?}")]
    DuplicateTemplate(String),
}
