#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A 2D point in drawing coordinates (y grows downward, as on screen).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Constructs a new point from its coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
