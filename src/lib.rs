//! A single-stroke template gesture recognizer in the spirit of the
//! `$`-family recognizers.
//!
//! A raw stroke (the ordered points captured during one press-and-drag
//! gesture) is brought into a canonical form: resampled to a fixed number of
//! equidistant points, rotated so its first point is aligned with the
//! centroid axis, and scaled into a fixed-size bounding box. Canonical forms
//! are compared positionally against a library of stored templates, and the
//! template with the smallest summed Manhattan distance wins.
//!
//! The pipeline deliberately keeps the simplifications of the simplest
//! `$1`-style recognizers: a single rotation alignment (no indicative-angle
//! search) and non-uniform bounding-box scaling (aspect ratio is not
//! preserved). Both are part of the matching contract, not accidents.

pub mod error;
pub mod geometry;
pub mod library;
pub mod normalizer;
pub mod point;
pub mod recognizer;
