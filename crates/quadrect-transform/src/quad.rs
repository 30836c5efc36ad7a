//! Corner points and quadrilateral ordering
//!
//! Homography estimation needs its two point sets in matching cyclic
//! order. [`OrderedQuad`] makes that requirement a type: its constructors
//! always produce corners in clockwise order (as seen on the image, where
//! y grows downward), so an `OrderedQuad` can be paired index-by-index
//! with another without further checks.

/// A 2D point with floating-point coordinates
///
/// Used for corner points in both source-pixel and destination-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Four corner points in clockwise order
///
/// The order starts from the corner at the smallest signed angle about the
/// centroid, so the same four physical points always produce the same
/// sequence regardless of input order. For an axis-aligned rectangle this
/// is top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderedQuad {
    points: [Point; 4],
}

impl OrderedQuad {
    /// Order four arbitrary corner points clockwise.
    ///
    /// Computes the centroid and sorts the points by their signed angle
    /// `atan2(y - cy, x - cx)` in ascending order. With image coordinates
    /// (y downward) ascending angle is clockwise on screen.
    ///
    /// Degenerate inputs (coincident or collinear points) are not rejected
    /// here; they sort into an arbitrary but deterministic order, and are
    /// reported by homography estimation instead.
    pub fn from_points(points: [Point; 4]) -> Self {
        let cx = points.iter().map(|p| p.x).sum::<f64>() / 4.0;
        let cy = points.iter().map(|p| p.y).sum::<f64>() / 4.0;

        let mut points = points;
        points.sort_by(|a, b| {
            let ang_a = (a.y - cy).atan2(a.x - cx);
            let ang_b = (b.y - cy).atan2(b.x - cx);
            ang_a.total_cmp(&ang_b)
        });

        Self { points }
    }

    /// The canonical axis-aligned destination rectangle
    /// `(0,0), (width,0), (width,height), (0,height)`.
    ///
    /// Already clockwise; used as the target of the rectification mapping.
    pub fn axis_aligned(width: f64, height: f64) -> Self {
        Self {
            points: [
                Point::new(0.0, 0.0),
                Point::new(width, 0.0),
                Point::new(width, height),
                Point::new(0.0, height),
            ],
        }
    }

    /// Get the ordered corner points.
    #[inline]
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// Get a corner by index (0..4).
    #[inline]
    pub fn get(&self, index: usize) -> Point {
        self.points[index]
    }
}
