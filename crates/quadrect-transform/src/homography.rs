//! Planar projective transforms (homographies)
//!
//! A homography maps one plane onto another and is determined, up to
//! scale, by 8 parameters. Fixing the bottom-right matrix entry at 1
//! removes the scale freedom, so four point correspondences yield an
//! 8x8 linear system with a unique solution whenever the points are in
//! general position.

use crate::quad::OrderedQuad;
use crate::solve::solve;
use crate::{TransformError, TransformResult};

/// Projective transform coefficients (8 values)
///
/// Defines the mapping:
/// ```text
/// x' = (h0*x + h1*y + h2) / (h6*x + h7*y + 1)
/// y' = (h3*x + h4*y + h5) / (h6*x + h7*y + 1)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Homography {
    /// Coefficients [h0, h1, h2, h3, h4, h5, h6, h7]
    coeffs: [f64; 8],
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}

impl Homography {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            coeffs: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        }
    }

    /// Create from raw coefficients.
    pub fn from_coeffs(coeffs: [f64; 8]) -> Self {
        Self { coeffs }
    }

    /// Get the raw coefficients.
    pub fn coeffs(&self) -> &[f64; 8] {
        &self.coeffs
    }

    /// Estimate the homography carrying each corner of `from` onto the
    /// matching corner of `to`.
    ///
    /// Both quads are clockwise-ordered, so corners correspond index to
    /// index. Each correspondence `(x, y) -> (X, Y)` contributes two rows
    /// to an 8x8 system in the unknown coefficients:
    ///
    /// ```text
    /// x*h0 + y*h1 + h2 - x*X*h6 - y*X*h7 = X
    /// x*h3 + y*h4 + h5 - x*Y*h6 - y*Y*h7 = Y
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::DegenerateQuad`] if either quad repeats a
    /// corner, and [`TransformError::SingularSystem`] if the
    /// correspondences admit no unique transform (e.g. collinear corners).
    /// A failed estimate never yields a fallback transform.
    pub fn mapping(from: &OrderedQuad, to: &OrderedQuad) -> TransformResult<Self> {
        check_distinct(from)?;
        check_distinct(to)?;

        let mut a = Vec::with_capacity(8);
        let mut b = Vec::with_capacity(8);
        for i in 0..4 {
            let p = from.get(i);
            let q = to.get(i);
            a.push(vec![
                p.x,
                p.y,
                1.0,
                0.0,
                0.0,
                0.0,
                -p.x * q.x,
                -p.y * q.x,
            ]);
            b.push(q.x);
            a.push(vec![
                0.0,
                0.0,
                0.0,
                p.x,
                p.y,
                1.0,
                -p.x * q.y,
                -p.y * q.y,
            ]);
            b.push(q.y);
        }

        let h = solve(&a, &b)?;
        Ok(Self {
            coeffs: [h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7]],
        })
    }

    /// Apply the transform to a point, including perspective division.
    ///
    /// Division by a near-zero denominator is not guarded here; callers
    /// clamp the result into valid bounds where that matters.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [h0, h1, h2, h3, h4, h5, h6, h7] = self.coeffs;
        let xp = h0 * x + h1 * y + h2;
        let yp = h3 * x + h4 * y + h5;
        let w = h6 * x + h7 * y + 1.0;
        (xp / w, yp / w)
    }
}

fn check_distinct(quad: &OrderedQuad) -> TransformResult<()> {
    let pts = quad.points();
    for i in 0..4 {
        for j in (i + 1)..4 {
            if pts[i].x == pts[j].x && pts[i].y == pts[j].y {
                return Err(TransformError::DegenerateQuad(format!(
                    "corners {i} and {j} coincide at ({}, {})",
                    pts[i].x, pts[i].y
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::Point;

    #[test]
    fn test_rectangle_onto_itself_is_identity() {
        let rect = OrderedQuad::axis_aligned(100.0, 50.0);
        let h = Homography::mapping(&rect, &rect).unwrap();
        let expected = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
        for (got, want) in h.coeffs().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_corners_reproduce_correspondences() {
        let from = OrderedQuad::axis_aligned(50.0, 150.0);
        let to = OrderedQuad::from_points([
            Point::new(10.0, 10.0),
            Point::new(90.0, 20.0),
            Point::new(80.0, 95.0),
            Point::new(5.0, 80.0),
        ]);
        let h = Homography::mapping(&from, &to).unwrap();
        for i in 0..4 {
            let p = from.get(i);
            let q = to.get(i);
            let (x, y) = h.apply(p.x, p.y);
            assert!(
                (x - q.x).abs() < 1e-6 && (y - q.y).abs() < 1e-6,
                "corner {i}: expected ({}, {}), got ({x}, {y})",
                q.x,
                q.y,
            );
        }
    }

    #[test]
    fn test_random_quads_reproduce_correspondences() {
        use rand::RngExt;
        let mut rng = rand::rng();

        for _ in 0..50 {
            // One corner per quadrant keeps the quad convex and well
            // separated, so the system stays far from singular.
            let to = OrderedQuad::from_points([
                Point::new(rng.random_range(0.0..40.0), rng.random_range(0.0..40.0)),
                Point::new(rng.random_range(60.0..100.0), rng.random_range(0.0..40.0)),
                Point::new(rng.random_range(60.0..100.0), rng.random_range(60.0..100.0)),
                Point::new(rng.random_range(0.0..40.0), rng.random_range(60.0..100.0)),
            ]);
            let from = OrderedQuad::axis_aligned(64.0, 48.0);
            let h = Homography::mapping(&from, &to).unwrap();
            for i in 0..4 {
                let p = from.get(i);
                let q = to.get(i);
                let (x, y) = h.apply(p.x, p.y);
                assert!((x - q.x).abs() < 1e-6 && (y - q.y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_identity_apply() {
        let h = Homography::default();
        assert_eq!(h.apply(12.5, -3.0), (12.5, -3.0));
    }

    #[test]
    fn test_perspective_division() {
        // Pure perspective: w = 1 + x at y = 0.
        let h = Homography::from_coeffs([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        let (x, y) = h.apply(1.0, 2.0);
        assert!((x - 0.5).abs() < 1e-15);
        assert!((y - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_repeated_corner_is_degenerate() {
        let p = Point::new(5.0, 5.0);
        let to = OrderedQuad::from_points([p, p, Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        let from = OrderedQuad::axis_aligned(10.0, 10.0);
        assert!(matches!(
            Homography::mapping(&from, &to),
            Err(TransformError::DegenerateQuad(_))
        ));
    }

    #[test]
    fn test_collinear_corners_are_singular() {
        let to = OrderedQuad::from_points([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        ]);
        let from = OrderedQuad::axis_aligned(1.0, 1.0);
        assert!(matches!(
            Homography::mapping(&from, &to),
            Err(TransformError::SingularSystem)
        ));
    }
}
