pub mod circle;
pub mod polygon;
pub mod triangle;

pub use circle::Circle;
pub use polygon::{FaceStrip, Polygon, FACE_STRIP_SIZE};
pub use triangle::{Triangle, TriangleFeature};

use crate::prelude::*;
use std::fmt;

/// Discriminant of a [`Shape`], used in error messages for unsupported
/// primitive combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Point,
    Circle,
    Rectangle,
    Triangle,
    Polygon,
    Everything,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A geometric primitive: the unit of dispatch for intersection, distance
/// and normal queries.
///
/// All variants are immutable values; derived data (triangle normals,
/// polygon face strips, bounding boxes) is computed at construction, so a
/// `Shape` is safe to share between threads for read-only queries.
///
/// `Everything` is the universal primitive: it covers the whole plane,
/// intersects every other primitive and has zero distance to everything.
#[derive(
    Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize, bincode::Encode, bincode::Decode,
)]
pub enum Shape {
    Point(Vec2),
    Circle(Circle),
    Rect(Rect),
    Triangle(Triangle),
    Polygon(Polygon),
    Everything,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rect(_) => ShapeKind::Rectangle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Everything => ShapeKind::Everything,
        }
    }

    /// The tightest axis-aligned rectangle containing this shape;
    /// [`Rect::unbounded`] for `Everything`.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Point(p) => Rect::from_corners(*p, *p),
            Shape::Circle(c) => c.bounding_box(),
            Shape::Rect(r) => *r,
            Shape::Triangle(t) => t.bounding_box(),
            Shape::Polygon(p) => p.bounding_box(),
            Shape::Everything => Rect::unbounded(),
        }
    }

    /// Applies an affine transformation, producing a new shape of the
    /// appropriate type.
    ///
    /// A transformed `Rect` becomes a `Polygon` of its four transformed
    /// corners, since rotation destroys axis-alignment. `Everything` is
    /// stateless and transforms to itself.
    #[must_use]
    pub fn transformed(&self, by: &Mat3x3) -> Shape {
        match self {
            Shape::Point(p) => Shape::Point(*by * *p),
            Shape::Circle(c) => Shape::Circle(c.transformed(by)),
            Shape::Rect(r) => {
                Shape::Polygon(Polygon::from_vertices(
                    r.corners().iter().map(|&c| *by * c).collect(),
                ))
            }
            Shape::Triangle(t) => Shape::Triangle(t.transformed(by)),
            Shape::Polygon(p) => Shape::Polygon(p.transformed(by)),
            Shape::Everything => Shape::Everything,
        }
    }

    /// Inclusive solid containment test.
    pub fn contains_point(&self, p: Vec2) -> bool {
        match self {
            Shape::Point(q) => *q == p,
            Shape::Circle(c) => c.contains_point(p),
            Shape::Rect(r) => r.contains_point(p),
            Shape::Triangle(t) => t.contains_point(p),
            Shape::Polygon(poly) => poly.contains_point(p),
            Shape::Everything => true,
        }
    }

    /// Shortest distance from this shape to a point; zero if the point is
    /// inside or on the shape.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        match self {
            Shape::Point(q) => q.dist(p),
            Shape::Circle(c) => c.distance_to(p),
            Shape::Rect(r) => r.distance_to(p),
            Shape::Triangle(t) => t.distance_to(p),
            Shape::Polygon(poly) => poly.distance_to(p),
            Shape::Everything => 0.0,
        }
    }

    /// Squared shortest distance from this shape to a point.
    #[must_use]
    pub fn distance_squared_to(&self, p: Vec2) -> f32 {
        match self {
            Shape::Point(q) => q.dist_squared(p),
            Shape::Circle(c) => {
                let d = c.distance_to(p);
                d * d
            }
            Shape::Rect(r) => r.distance_squared_to(p),
            Shape::Triangle(t) => t.distance_squared_to(p),
            Shape::Polygon(poly) => poly.distance_squared_to(p),
            Shape::Everything => 0.0,
        }
    }

    /// The point of this shape closest to `p` (which is `p` itself if `p` is
    /// inside).
    #[must_use]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        match self {
            Shape::Point(q) => *q,
            Shape::Circle(c) => c.closest_point_to(p),
            Shape::Rect(r) => r.closest_point_to(p),
            Shape::Triangle(t) => t.closest_point_to(p),
            Shape::Polygon(poly) => poly.closest_point_to(p),
            Shape::Everything => p,
        }
    }
}

impl From<Vec2> for Shape {
    fn from(value: Vec2) -> Self {
        Shape::Point(value)
    }
}
impl From<Circle> for Shape {
    fn from(value: Circle) -> Self {
        Shape::Circle(value)
    }
}
impl From<Rect> for Shape {
    fn from(value: Rect) -> Self {
        Shape::Rect(value)
    }
}
impl From<Triangle> for Shape {
    fn from(value: Triangle) -> Self {
        Shape::Triangle(value)
    }
}
impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Shape::Polygon(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_transform_yields_polygon_of_corners() {
        let r = Rect::new(Vec2::zero(), Vec2 { x: 4.0, y: 2.0 }).unwrap();
        let Shape::Polygon(p) = Shape::Rect(r).transformed(&Mat3x3::one()) else {
            panic!("expected a polygon");
        };
        assert_eq!(p.vertices().len(), 4);
        let expected = Polygon::new(r.corners().to_vec()).unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn everything_is_stateless() {
        let e = Shape::Everything;
        assert_eq!(
            e.transformed(&Mat3x3::translation(100.0, -50.0)),
            Shape::Everything
        );
        assert_eq!(e.distance_to(Vec2::splat(1e20)), 0.0);
        assert!(e.contains_point(Vec2::splat(-1e20)));
        assert_eq!(e.bounding_box().max(), Vec2::splat(f32::MAX));
    }

    #[test]
    fn point_shape() {
        let p = Shape::Point(Vec2::one());
        assert!(p.contains_point(Vec2::one()));
        assert!(!p.contains_point(Vec2::zero()));
        assert_eq!(p.bounding_box().dimensions(), Vec2::zero());
        assert_eq!(p.distance_to(Vec2 { x: 4.0, y: 1.0 }), 3.0);
    }

    #[test]
    fn rotated_rect_transform() {
        // Rotating a unit square 90 degrees about the origin maps it onto
        // the quadrant above the x-axis (screen coordinates).
        let r = Rect::new(Vec2::zero(), Vec2::one()).unwrap();
        let Shape::Polygon(p) = Shape::Rect(r).transformed(&Mat3x3::rotation(std::f32::consts::FRAC_PI_2))
        else {
            panic!("expected a polygon");
        };
        let bb = p.bounding_box();
        assert!(bb.min().almost_eq(Vec2 { x: -1.0, y: 0.0 }));
        assert!(bb.max().almost_eq(Vec2 { x: 0.0, y: 1.0 }));
    }
}
