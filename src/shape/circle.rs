use crate::prelude::*;

/// A solid circle: centre plus non-negative radius. Containment and overlap
/// tests are inclusive of the boundary. Zero-radius circles are valid and
/// behave as points.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Circle {
    centre: Vec2,
    radius: f32,
}

impl Circle {
    /// Creates a new circle. Fails on a negative radius.
    pub fn new(centre: Vec2, radius: f32) -> Result<Self> {
        if radius < 0.0 {
            bail!("invalid circle radius: {radius}");
        }
        Ok(Self { centre, radius })
    }

    pub fn centre(&self) -> Vec2 {
        self.centre
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Inclusive containment test: squared distance to the centre is at most
    /// the squared radius.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.centre.dist_squared(p) <= self.radius * self.radius
    }

    /// Shortest distance from the circle to `p`; zero if `p` is inside or on
    /// the boundary.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        (self.centre.dist(p) - self.radius).max(0.0)
    }

    /// The point of this circle closest to `p` (which is `p` itself if `p` is
    /// inside).
    #[must_use]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        if self.contains_point(p) {
            p
        } else {
            self.centre + (p - self.centre).normed() * self.radius
        }
    }

    /// Applies an affine transformation. The new radius is the length of a
    /// transformed unit-radius vector along the x-axis, so non-uniform scale
    /// affects the radius through the x scale factor only.
    #[must_use]
    pub fn transformed(&self, by: &Mat3x3) -> Circle {
        Circle {
            centre: *by * self.centre,
            radius: self.radius * by.linear_mul(Vec2::right()).len(),
        }
    }
}

impl AxisAlignedExtent for Circle {
    fn extent(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }
    fn centre(&self) -> Vec2 {
        self.centre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_radius() {
        assert!(Circle::new(Vec2::zero(), -1.0).is_err());
        assert!(Circle::new(Vec2::zero(), 0.0).is_ok());
    }

    #[test]
    fn contains_point_inclusive_of_edge() {
        let c = Circle::new(Vec2::zero(), 5.0).unwrap();
        assert!(c.contains_point(Vec2::zero()));
        assert!(c.contains_point(Vec2 { x: 5.0, y: 0.0 }));
        assert!(c.contains_point(Vec2 { x: 3.0, y: 4.0 }));
        assert!(!c.contains_point(Vec2 { x: 5.1, y: 0.0 }));
    }

    #[test]
    fn distance_to_point() {
        let c = Circle::new(Vec2::zero(), 5.0).unwrap();
        assert_eq!(c.distance_to(Vec2 { x: 3.0, y: 0.0 }), 0.0);
        assert_eq!(c.distance_to(Vec2 { x: 8.0, y: 0.0 }), 3.0);
    }

    #[test]
    fn closest_point() {
        let c = Circle::new(Vec2::zero(), 5.0).unwrap();
        let inside = Vec2 { x: 1.0, y: 1.0 };
        assert_eq!(c.closest_point_to(inside), inside);
        assert!(
            c.closest_point_to(Vec2 { x: 10.0, y: 0.0 })
                .almost_eq(Vec2 { x: 5.0, y: 0.0 })
        );
    }

    #[test]
    fn zero_radius_tolerated() {
        let c = Circle::new(Vec2::one(), 0.0).unwrap();
        assert!(c.contains_point(Vec2::one()));
        assert_eq!(c.distance_to(Vec2 { x: 4.0, y: 1.0 }), 3.0);
        // Closest point to a degenerate circle is its centre.
        assert_eq!(c.closest_point_to(Vec2 { x: 4.0, y: 1.0 }), Vec2::one());
    }

    #[test]
    fn bounding_box() {
        let c = Circle::new(Vec2 { x: 2.0, y: 3.0 }, 1.5).unwrap();
        let bb = c.bounding_box();
        assert_eq!(bb.min(), Vec2 { x: 0.5, y: 1.5 });
        assert_eq!(bb.max(), Vec2 { x: 3.5, y: 4.5 });
    }

    #[test]
    fn transform_rescales_radius_by_x_axis() {
        let c = Circle::new(Vec2 { x: 1.0, y: 0.0 }, 2.0).unwrap();
        let translated = c.transformed(&Mat3x3::translation(3.0, 4.0));
        assert_eq!(translated.centre(), Vec2 { x: 4.0, y: 4.0 });
        assert_eq!(translated.radius(), 2.0);

        // Non-uniform scale: the radius follows the transformed x-axis unit
        // vector's length.
        let scaled = c.transformed(&Mat3x3::scaling(3.0, 10.0));
        assert_eq!(scaled.radius(), 6.0);

        // Rotation leaves the radius unchanged.
        let rotated = c.transformed(&Mat3x3::rotation(std::f32::consts::FRAC_PI_2));
        assert!((rotated.radius() - 2.0).abs() < EPSILON);
    }
}
