use crate::prelude::*;
use num_traits::Zero;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Scalar counterpart of [`Vec2::almost_eq`]: absolute difference below
/// [`EPSILON`].
pub trait AlmostEq {
    fn almost_eq(self, rhs: Self) -> bool;
}

impl AlmostEq for f32 {
    fn almost_eq(self, rhs: f32) -> bool {
        (self - rhs).abs() < EPSILON
    }
}

/// A 2D vector; doubles as the "point" primitive of the geometry engine.
///
/// Equality is exact coordinate equality, as required by point-point
/// intersection tests; use [`almost_eq()`](Vec2::almost_eq) for
/// tolerance-based comparison.
///
/// The y-axis points down (screen convention), so [`Vec2::up()`] is
/// `(0, -1)`.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing up (negative y-axis).
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing down (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 1.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns the zero vector.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }
    /// Returns a vector with both components set to `v`.
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len()`](Vec2::len) when comparing lengths to
    /// avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector. Returns the zero vector if this vector has zero length.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns an orthogonal vector, rotated 90 degrees clockwise from this
    /// vector (components swapped, x negated).
    #[must_use]
    pub fn orthog(&self) -> Vec2 {
        Vec2 {
            x: self.y,
            y: -self.x,
        }
    }

    /// Returns the component-wise minimum of the two vectors.
    #[must_use]
    pub fn min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
    /// Returns the component-wise maximum of the two vectors.
    #[must_use]
    pub fn max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Returns the dot product of this vector with another.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the 2D cross product (z-component of the 3D cross product) of
    /// this vector with another.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns a new vector rotated clockwise by the given angle in radians.
    #[must_use]
    pub fn rotated(&self, radians: f32) -> Vec2 {
        Mat3x3::rotation(radians) * *self
    }

    /// Returns the distance to another point.
    #[must_use]
    pub fn dist(&self, other: Vec2) -> f32 {
        (*self - other).len()
    }

    /// Returns the squared distance to another point.
    #[must_use]
    pub fn dist_squared(&self, other: Vec2) -> f32 {
        (*self - other).len_squared()
    }

    /// Calculates the shortest distance from this point to a line segment.
    ///
    /// The projection of the point onto the line through `start` and `end` is
    /// clamped to the segment; if `start` and `end` coincide, returns the
    /// distance to that point.
    #[must_use]
    pub fn dist_to_line(&self, start: Vec2, end: Vec2) -> f32 {
        self.dist(self.closest_point_on_line(start, end))
    }

    /// Returns the point on the segment from `start` to `end` closest to this
    /// point.
    ///
    /// Three cases: the projection falls before `start`, after `end`, or
    /// properly on the segment.
    #[must_use]
    pub fn closest_point_on_line(&self, start: Vec2, end: Vec2) -> Vec2 {
        if start == end {
            return start;
        }
        let dx = end - start;
        let t = (*self - start).dot(dx);
        if t <= 0.0 {
            start
        } else if t >= dx.len_squared() {
            end
        } else {
            start + (t / dx.len_squared()) * dx
        }
    }

    /// Linearly interpolates between this vector and another vector; `t` is
    /// clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(&self, to: Vec2, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        *self + t * (to - *self)
    }

    /// Checks if the vector is approximately equal to another vector: the
    /// length of their difference is less than [`EPSILON`].
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "vec({:.*}, {:.*})", precision, self.x, precision, self.y)
        } else {
            write!(f, "vec({}, {})", self.x, self.y)
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}
impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3x3 matrix representing a 2D affine transformation in homogeneous
/// coordinates.
///
/// The elements are arranged as follows:
/// ```text
/// | xx xy xw |
/// | yx yy yw |
/// | wx wy ww |
/// ```
/// where the first two columns hold the linear transformation components and
/// the third column holds the translation components.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[must_use]
pub struct Mat3x3 {
    pub xx: f32,
    pub xy: f32,
    pub xw: f32,
    pub yx: f32,
    pub yy: f32,
    pub yw: f32,
    pub wx: f32,
    pub wy: f32,
    pub ww: f32,
}

impl Mat3x3 {
    /// Creates an identity matrix.
    pub fn one() -> Mat3x3 {
        Mat3x3 {
            xx: 1.0,
            xy: 0.0,
            xw: 0.0,
            yx: 0.0,
            yy: 1.0,
            yw: 0.0,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a translation matrix.
    pub fn translation(dx: f32, dy: f32) -> Mat3x3 {
        Mat3x3 {
            xw: dx,
            yw: dy,
            ..Self::one()
        }
    }

    /// Creates a translation matrix from a [`Vec2`].
    pub fn translation_vec2(vec2: Vec2) -> Mat3x3 {
        Self::translation(vec2.x, vec2.y)
    }

    /// Creates a rotation matrix; positive angles rotate clockwise in screen
    /// coordinates (y-axis down).
    pub fn rotation(radians: f32) -> Mat3x3 {
        Mat3x3 {
            xx: f32::cos(radians),
            xy: -f32::sin(radians),
            yx: f32::sin(radians),
            yy: f32::cos(radians),
            ..Self::one()
        }
    }

    /// Creates a scaling matrix with separate x and y scale factors.
    pub fn scaling(sx: f32, sy: f32) -> Mat3x3 {
        Mat3x3 {
            xx: sx,
            yy: sy,
            ..Self::one()
        }
    }

    /// Creates a scaling matrix from a [`Vec2`] of scale factors.
    pub fn scaling_vec2(scale: Vec2) -> Mat3x3 {
        Self::scaling(scale.x, scale.y)
    }

    /// Calculates the determinant of the matrix.
    #[must_use]
    pub fn det(&self) -> f32 {
        self.xx * (self.yy * self.ww - self.yw * self.wy)
            - self.xy * (self.yx * self.ww - self.yw * self.wx)
            + self.xw * (self.yx * self.wy - self.yy * self.wx)
    }

    /// Applies only the linear part of the transformation (no translation) to
    /// a vector. Used to transform directions and extents rather than points.
    #[must_use]
    pub fn linear_mul(&self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.xx * rhs.x + self.xy * rhs.y,
            y: self.yx * rhs.x + self.yy * rhs.y,
        }
    }

    /// Compares two matrices for approximate equality.
    pub fn almost_eq(&self, rhs: Mat3x3) -> bool {
        (self.xx - rhs.xx).abs() < EPSILON
            && (self.xy - rhs.xy).abs() < EPSILON
            && (self.xw - rhs.xw).abs() < EPSILON
            && (self.yx - rhs.yx).abs() < EPSILON
            && (self.yy - rhs.yy).abs() < EPSILON
            && (self.yw - rhs.yw).abs() < EPSILON
            && (self.wx - rhs.wx).abs() < EPSILON
            && (self.wy - rhs.wy).abs() < EPSILON
            && (self.ww - rhs.ww).abs() < EPSILON
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            xx: self.xx * rhs.xx + self.xy * rhs.yx + self.xw * rhs.wx,
            xy: self.xx * rhs.xy + self.xy * rhs.yy + self.xw * rhs.wy,
            xw: self.xx * rhs.xw + self.xy * rhs.yw + self.xw * rhs.ww,
            yx: self.yx * rhs.xx + self.yy * rhs.yx + self.yw * rhs.wx,
            yy: self.yx * rhs.xy + self.yy * rhs.yy + self.yw * rhs.wy,
            yw: self.yx * rhs.xw + self.yy * rhs.yw + self.yw * rhs.ww,
            wx: self.wx * rhs.xx + self.wy * rhs.yx + self.ww * rhs.wx,
            wy: self.wx * rhs.xy + self.wy * rhs.yy + self.ww * rhs.wy,
            ww: self.wx * rhs.xw + self.wy * rhs.yw + self.ww * rhs.ww,
        }
    }
}

impl Mul<Vec2> for Mat3x3 {
    type Output = Vec2;

    // Affine transformation of a point (homogeneous w = 1).
    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.xx * rhs.x + self.xy * rhs.y + self.xw,
            y: self.yx * rhs.x + self.yy * rhs.y + self.yw,
        }
    }
}

/// Trait for shapes with a well-defined axis-aligned bounding box.
///
/// Implementors provide [`extent()`](AxisAlignedExtent::extent) and
/// [`centre()`](AxisAlignedExtent::centre); everything else is derived.
pub trait AxisAlignedExtent {
    fn extent(&self) -> Vec2;
    fn centre(&self) -> Vec2;

    fn half_widths(&self) -> Vec2 {
        self.extent() / 2.0
    }
    fn top_left(&self) -> Vec2 {
        self.centre() - self.half_widths()
    }
    fn bottom_right(&self) -> Vec2 {
        self.centre() + self.half_widths()
    }

    fn left(&self) -> f32 {
        self.top_left().x
    }
    fn right(&self) -> f32 {
        self.bottom_right().x
    }
    fn top(&self) -> f32 {
        self.top_left().y
    }
    fn bottom(&self) -> f32 {
        self.bottom_right().y
    }

    /// The tightest axis-aligned rectangle containing this shape.
    fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.top_left(), self.bottom_right())
    }
}

/// An axis-aligned rectangle defined by its minimum and maximum corners.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`; [`Rect::new`] rejects
/// violations. The rectangle is solid, and all containment and overlap tests
/// are inclusive of the boundary.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize, bincode::Encode,
)]
#[serde(try_from = "[Vec2; 2]", into = "[Vec2; 2]")]
pub struct Rect {
    min: Vec2,
    max: Vec2,
}

impl Rect {
    /// Creates a new rectangle from its minimum and maximum corners.
    ///
    /// Fails if either coordinate of `min` exceeds the corresponding
    /// coordinate of `max`.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        if min.x > max.x || min.y > max.y {
            bail!("invalid rectangle corners: min {min} exceeds max {max}");
        }
        Ok(Self { min, max })
    }

    /// Creates a rectangle from two arbitrary diagonal corners, sorting the
    /// coordinates so the min/max invariant holds.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates the smallest rectangle containing all the given points.
    /// Returns an empty rectangle at the origin if the iterator is empty.
    pub fn around(points: impl IntoIterator<Item = Vec2>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::empty();
        };
        let mut min = first;
        let mut max = first;
        for p in points {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    /// Creates an empty rectangle with zero size at the origin.
    pub fn empty() -> Self {
        Self {
            min: Vec2::zero(),
            max: Vec2::zero(),
        }
    }

    /// Creates a rectangle covering the whole representable plane
    /// (±[`f32::MAX`] on both axes).
    pub fn unbounded() -> Self {
        Self {
            min: Vec2::splat(-f32::MAX),
            max: Vec2::splat(f32::MAX),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }
    pub fn max(&self) -> Vec2 {
        self.max
    }
    /// Width and height of the rectangle.
    pub fn dimensions(&self) -> Vec2 {
        self.max - self.min
    }

    /// The four corners in clockwise order (screen coordinates) starting from
    /// the minimum corner.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2 {
                x: self.max.x,
                y: self.min.y,
            },
            self.max,
            Vec2 {
                x: self.min.x,
                y: self.max.y,
            },
        ]
    }

    /// Inclusive axis-aligned overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Inclusive containment test.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }

    /// The point inside this rectangle closest to `p` (which is `p` itself if
    /// `p` is inside).
    #[must_use]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: p.x.clamp(self.min.x, self.max.x),
            y: p.y.clamp(self.min.y, self.max.y),
        }
    }

    /// Shortest distance from the rectangle to `p`; zero if `p` is inside.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.distance_squared_to(p).sqrt()
    }

    /// Squared shortest distance from the rectangle to `p`.
    #[must_use]
    pub fn distance_squared_to(&self, p: Vec2) -> f32 {
        p.dist_squared(self.closest_point_to(p))
    }

    #[must_use]
    pub fn union(&self, rhs: &Rect) -> Rect {
        Rect {
            min: self.min.min(rhs.min),
            max: self.max.max(rhs.max),
        }
    }
}

impl TryFrom<[Vec2; 2]> for Rect {
    type Error = anyhow::Error;

    fn try_from(value: [Vec2; 2]) -> Result<Self> {
        Rect::new(value[0], value[1])
    }
}
impl From<Rect> for [Vec2; 2] {
    fn from(value: Rect) -> Self {
        [value.min, value.max]
    }
}

// Wire layout is min then max; decoding re-validates the corner invariant so
// a corrupt stream cannot produce a half-constructed rectangle.
impl<Context> bincode::Decode<Context> for Rect {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let min: Vec2 = bincode::Decode::decode(decoder)?;
        let max: Vec2 = bincode::Decode::decode(decoder)?;
        Rect::new(min, max)
            .map_err(|e| bincode::error::DecodeError::OtherString(format!("{e:#}")))
    }
}
bincode::impl_borrow_decode!(Rect);

impl AxisAlignedExtent for Rect {
    fn extent(&self) -> Vec2 {
        self.dimensions()
    }
    fn centre(&self) -> Vec2 {
        self.min + self.dimensions() / 2.0
    }

    fn top_left(&self) -> Vec2 {
        self.min
    }
    fn bottom_right(&self) -> Vec2 {
        self.max
    }
    fn bounding_box(&self) -> Rect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    // ==================== Vec2 ====================

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
        assert_eq!(b - a, Vec2 { x: 2.0, y: 2.0 });
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(2.0 * a, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(b / 2.0, Vec2 { x: 1.5, y: 2.0 });
        assert_eq!(-a, Vec2 { x: -1.0, y: -2.0 });
    }

    #[test]
    fn vec2_dot_cross() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(a.dot(a.orthog()), 0.0);
    }

    #[test]
    fn vec2_normed() {
        assert_eq!(Vec2 { x: 3.0, y: 4.0 }.normed().len(), 1.0);
        assert_eq!(Vec2::zero().normed(), Vec2::zero());
    }

    #[test]
    fn vec2_rotated() {
        assert!(Vec2::right().rotated(FRAC_PI_2).almost_eq(Vec2::down()));
        let diag = Vec2::right().rotated(FRAC_PI_4);
        assert!(diag.almost_eq(Vec2 {
            x: 1.0 / SQRT_2,
            y: 1.0 / SQRT_2
        }));
    }

    #[test]
    fn vec2_dist_to_line() {
        let start = Vec2 { x: -1.0, y: 0.0 };
        let end = Vec2 { x: 1.0, y: 0.0 };
        // Projection properly on the segment.
        assert_eq!(Vec2 { x: 0.0, y: 1.0 }.dist_to_line(start, end), 1.0);
        // Projection before the start.
        assert_eq!(Vec2 { x: -3.0, y: 0.0 }.dist_to_line(start, end), 2.0);
        // Projection after the end.
        assert_eq!(Vec2 { x: 2.0, y: 0.0 }.dist_to_line(start, end), 1.0);
        // Degenerate segment.
        assert_eq!(Vec2 { x: 0.0, y: 2.0 }.dist_to_line(start, start), Vec2 { x: 0.0, y: 2.0 }.dist(start));
    }

    #[test]
    fn vec2_closest_point_on_line() {
        let start = Vec2 { x: 0.0, y: 0.0 };
        let end = Vec2 { x: 10.0, y: 0.0 };
        assert_eq!(
            Vec2 { x: 4.0, y: 3.0 }.closest_point_on_line(start, end),
            Vec2 { x: 4.0, y: 0.0 }
        );
        assert_eq!(
            Vec2 { x: -5.0, y: 3.0 }.closest_point_on_line(start, end),
            start
        );
        assert_eq!(
            Vec2 { x: 15.0, y: 3.0 }.closest_point_on_line(start, end),
            end
        );
    }

    #[test]
    fn vec2_lerp_clamps() {
        let a = Vec2::zero();
        let b = Vec2 { x: 10.0, y: 20.0 };
        assert_eq!(a.lerp(b, 0.5), Vec2 { x: 5.0, y: 10.0 });
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    // ==================== Mat3x3 ====================

    #[test]
    fn mat3x3_identity() {
        let v = Vec2 { x: 3.0, y: -2.0 };
        assert_eq!(Mat3x3::one() * v, v);
        assert_eq!(Mat3x3::one().det(), 1.0);
    }

    #[test]
    fn mat3x3_translation() {
        let m = Mat3x3::translation(2.0, 3.0);
        assert_eq!(m * Vec2::zero(), Vec2 { x: 2.0, y: 3.0 });
        // Translation does not affect directions.
        assert_eq!(m.linear_mul(Vec2::right()), Vec2::right());
    }

    #[test]
    fn mat3x3_rotation() {
        let m = Mat3x3::rotation(FRAC_PI_2);
        assert!((m * Vec2::right()).almost_eq(Vec2::down()));
        assert!((m.det() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn mat3x3_scaling() {
        let m = Mat3x3::scaling(2.0, 3.0);
        assert_eq!(m * Vec2::one(), Vec2 { x: 2.0, y: 3.0 });
        assert_eq!(m.det(), 6.0);
    }

    #[test]
    fn mat3x3_composition() {
        // Translate then rotate vs. rotate then translate.
        let t = Mat3x3::translation(1.0, 0.0);
        let r = Mat3x3::rotation(FRAC_PI_2);
        let p = Vec2::zero();
        assert!((r * t * p).almost_eq(Vec2 { x: 0.0, y: 1.0 }));
        assert!(((t * r) * p).almost_eq(Vec2 { x: 1.0, y: 0.0 }));
    }

    // ==================== Rect ====================

    #[test]
    fn rect_construction_validates_corners() {
        assert!(Rect::new(Vec2::zero(), Vec2::one()).is_ok());
        assert!(Rect::new(Vec2::one(), Vec2::zero()).is_err());
        assert!(Rect::new(Vec2 { x: 0.0, y: 1.0 }, Vec2 { x: 1.0, y: 0.0 }).is_err());
        // Zero-size rectangles are fine.
        assert!(Rect::new(Vec2::one(), Vec2::one()).is_ok());
    }

    #[test]
    fn rect_accessors() {
        let r = Rect::new(Vec2 { x: 1.0, y: 2.0 }, Vec2 { x: 5.0, y: 8.0 }).unwrap();
        assert_eq!(r.dimensions(), Vec2 { x: 4.0, y: 6.0 });
        assert_eq!(r.centre(), Vec2 { x: 3.0, y: 5.0 });
        assert_eq!(r.bounding_box(), r);
    }

    #[test]
    fn rect_contains_point_inclusive() {
        let r = Rect::new(Vec2::zero(), Vec2::splat(2.0)).unwrap();
        assert!(r.contains_point(Vec2::one()));
        assert!(r.contains_point(Vec2::zero()));
        assert!(r.contains_point(Vec2::splat(2.0)));
        assert!(r.contains_point(Vec2 { x: 2.0, y: 1.0 }));
        assert!(!r.contains_point(Vec2 { x: 2.1, y: 1.0 }));
    }

    #[test]
    fn rect_distance_to_point() {
        let r = Rect::new(Vec2::zero(), Vec2::splat(2.0)).unwrap();
        assert_eq!(r.distance_to(Vec2::one()), 0.0);
        assert_eq!(r.distance_to(Vec2 { x: 5.0, y: 1.0 }), 3.0);
        assert_eq!(r.distance_to(Vec2 { x: 5.0, y: 6.0 }), 5.0);
        assert_eq!(
            r.closest_point_to(Vec2 { x: 5.0, y: 6.0 }),
            Vec2 { x: 2.0, y: 2.0 }
        );
    }

    #[test]
    fn rect_intersects_inclusive() {
        let a = Rect::new(Vec2::zero(), Vec2::splat(2.0)).unwrap();
        let b = Rect::new(Vec2::splat(2.0), Vec2::splat(4.0)).unwrap();
        let c = Rect::new(Vec2::splat(2.1), Vec2::splat(4.0)).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn rect_around_points() {
        let r = Rect::around([
            Vec2 { x: 1.0, y: 5.0 },
            Vec2 { x: -2.0, y: 0.0 },
            Vec2 { x: 4.0, y: 3.0 },
        ]);
        assert_eq!(r.min(), Vec2 { x: -2.0, y: 0.0 });
        assert_eq!(r.max(), Vec2 { x: 4.0, y: 5.0 });
    }

    #[test]
    fn rect_unbounded_covers_everything() {
        let r = Rect::unbounded();
        assert!(r.contains_point(Vec2::splat(1e30)));
        assert!(r.contains_point(Vec2::splat(-1e30)));
    }
}
