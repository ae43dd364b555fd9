//! Distance, closest-point and separation-normal queries between [`Shape`]s.
//!
//! Distances are Euclidean, symmetric, and zero whenever the shapes
//! intersect. Normals are unit vectors and degrade to the zero vector for
//! coincident or contained configurations rather than producing NaN.

use crate::intersect::{edges_of, intersect, intersect_segments, SegmentIntersection};
use crate::prelude::*;

/// Shortest distance between two shapes; zero if they intersect.
///
/// Circle pairs reduce to centre distance minus radii. Pairs of solid
/// polyline-bounded shapes (rectangle, triangle, polygon) take the minimum
/// distance over all edge pairs after an intersection check, which is exact
/// since the closest points of two disjoint solids lie on their boundaries.
#[must_use]
pub fn distance(a: &Shape, b: &Shape) -> f32 {
    match (a, b) {
        (Shape::Everything, _) | (_, Shape::Everything) => 0.0,
        (Shape::Point(p), other) | (other, Shape::Point(p)) => other.distance_to(*p),
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            (c1.centre().dist(c2.centre()) - c1.radius() - c2.radius()).max(0.0)
        }
        (Shape::Circle(c), other) | (other, Shape::Circle(c)) => {
            (other.distance_to(c.centre()) - c.radius()).max(0.0)
        }
        _ => {
            if intersect(a, b) {
                return 0.0;
            }
            let a_edges = edges_of(a);
            let b_edges = edges_of(b);
            let mut best = f32::MAX;
            for &(u, v) in &a_edges {
                for &(s, t) in &b_edges {
                    best = best.min(segment_distance(u, v, s, t));
                }
            }
            best
        }
    }
}

/// Squared shortest distance between two shapes.
///
/// Pairs involving a point are computed natively in squared form; the rest
/// square [`distance`].
#[must_use]
pub fn distance_squared(a: &Shape, b: &Shape) -> f32 {
    match (a, b) {
        (Shape::Everything, _) | (_, Shape::Everything) => 0.0,
        (Shape::Point(p), other) | (other, Shape::Point(p)) => other.distance_squared_to(*p),
        _ => {
            let d = distance(a, b);
            d * d
        }
    }
}

/// The point of `shape` closest to `p`; `p` itself if `p` is inside.
#[must_use]
pub fn closest_point(shape: &Shape, p: Vec2) -> Vec2 {
    shape.closest_point_to(p)
}

/// [`closest_point`] together with its distance to `p`, avoiding a second
/// traversal.
#[must_use]
pub fn closest_point_with_distance(shape: &Shape, p: Vec2) -> (Vec2, f32) {
    let closest = shape.closest_point_to(p);
    (closest, closest.dist(p))
}

/// Unit vector pointing from `a` towards `b`.
///
/// Circles are treated as their centre point, so any pair with at most one
/// extended non-circle shape is supported; the zero vector is returned for
/// coincident or contained configurations, and for `Everything` (which has
/// no outside). Two extended non-circle shapes have no single separation
/// normal and fail with an error naming both kinds.
pub fn normal_between(a: &Shape, b: &Shape) -> Result<Vec2> {
    if matches!(a, Shape::Everything) || matches!(b, Shape::Everything) {
        return Ok(Vec2::zero());
    }
    match (point_like(a), point_like(b)) {
        (Some(pa), Some(pb)) => Ok((pb - pa).normed()),
        (Some(pa), None) => Ok(-normal_towards(b, pa)),
        (None, Some(pb)) => Ok(normal_towards(a, pb)),
        (None, None) => bail!(
            "normal_between not supported between {} and {}",
            a.kind(),
            b.kind()
        ),
    }
}

fn point_like(shape: &Shape) -> Option<Vec2> {
    match shape {
        Shape::Point(p) => Some(*p),
        Shape::Circle(c) => Some(c.centre()),
        _ => None,
    }
}

// Unit vector from an extended shape towards an outside point; zero if the
// point is inside. Triangles and polygons use their outward edge normals so
// the result matches the closest boundary feature.
fn normal_towards(shape: &Shape, p: Vec2) -> Vec2 {
    match shape {
        Shape::Triangle(t) => t.outward_normal_to(p),
        Shape::Polygon(poly) => poly.outward_normal_to(p),
        _ => (p - shape.closest_point_to(p)).normed(),
    }
}

fn segment_distance(u: Vec2, v: Vec2, s: Vec2, t: Vec2) -> f32 {
    if intersect_segments(u, v, s, t) != SegmentIntersection::None {
        return 0.0;
    }
    // Disjoint segments: the minimum is realised at an endpoint of one
    // against the other.
    let d1 = u.dist(u.closest_point_on_line(s, t));
    let d2 = v.dist(v.closest_point_on_line(s, t));
    let d3 = s.dist(s.closest_point_on_line(u, v));
    let d4 = t.dist(t.closest_point_on_line(u, v));
    d1.min(d2).min(d3).min(d4)
}
