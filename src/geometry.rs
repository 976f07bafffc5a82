use crate::point::Point;

/// Computes the Euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Computes the Manhattan (city-block) distance between two points
pub fn manhattan_distance(a: &Point, b: &Point) -> f32 {
    (b.x - a.x).abs() + (b.y - a.y).abs()
}

/// Computes the path length for an array of points,
/// i.e. the sum of Euclidean distances between consecutive points
pub fn path_length(points: &[Point]) -> f32 {
    let mut length = 0.0;
    for i in 1..points.len() {
        length += euclidean_distance(&points[i - 1], &points[i]);
    }
    length
}

/// Computes the centroid (arithmetic mean position) for an array of points
pub fn centroid(points: &[Point]) -> Point {
    let mut cx = 0.0;
    let mut cy = 0.0;
    for p in points {
        cx += p.x;
        cy += p.y;
    }
    let n = points.len() as f32;
    Point::new(cx / n, cy / n)
}

/// Axis-aligned bounding box of a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Computes the axis-aligned bounding box for an array of points
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let (mut min_x, mut min_y) = (f32::MAX, f32::MAX);
    let (mut max_x, mut max_y) = (f32::MIN, f32::MIN);
    for p in points {
        if p.x < min_x { min_x = p.x; }
        if p.y < min_y { min_y = p.y; }
        if p.x > max_x { max_x = p.x; }
        if p.y > max_y { max_y = p.y; }
    }
    BoundingBox { min_x, min_y, max_x, max_y }
}
