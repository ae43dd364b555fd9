//! Pairwise intersection tests between [`Shape`]s, plus line-segment
//! intersection and cropping.
//!
//! All tests treat shapes as solid and are inclusive of boundaries, and every
//! unordered pair of primitive kinds is supported. Dispatch is symmetric:
//! `intersect(a, b) == intersect(b, a)` for all pairs.

use crate::prelude::*;
use num_traits::Zero;

/// Result of intersecting two line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not touch.
    None,
    /// The segments meet in exactly one point.
    Point(Vec2),
    /// The segments are collinear and overlap along a sub-segment, so no
    /// unique intersection point exists.
    Segment,
}

/// Tests whether two shapes overlap.
///
/// Fast paths: coordinate tests for points, centre-distance for circles,
/// axis-aligned overlap for rectangles, boundary-distance tests for a circle
/// against a triangle or polygon. Convex pairs (rectangle/triangle) use
/// separating-axis testing after a bounding-box prune; pairs involving a
/// possibly concave polygon fall back to edge-pair intersection plus mutual
/// containment probes.
pub fn intersect(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Everything, _) | (_, Shape::Everything) => true,
        (Shape::Point(p), Shape::Point(q)) => p == q,
        (Shape::Point(p), Shape::Circle(c)) | (Shape::Circle(c), Shape::Point(p)) => {
            c.contains_point(*p)
        }
        (Shape::Point(p), Shape::Rect(r)) | (Shape::Rect(r), Shape::Point(p)) => {
            r.contains_point(*p)
        }
        (Shape::Point(p), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Point(p)) => {
            t.contains_point(*p)
        }
        (Shape::Point(p), Shape::Polygon(poly)) | (Shape::Polygon(poly), Shape::Point(p)) => {
            poly.contains_point(*p)
        }
        (Shape::Circle(c1), Shape::Circle(c2)) => {
            c1.centre().dist_squared(c2.centre()) <= (c1.radius() + c2.radius()).powi(2)
        }
        (Shape::Circle(c), Shape::Rect(r)) | (Shape::Rect(r), Shape::Circle(c)) => {
            r.distance_squared_to(c.centre()) <= c.radius().powi(2)
        }
        (Shape::Circle(c), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Circle(c)) => {
            t.distance_squared_to(c.centre()) <= c.radius().powi(2)
        }
        (Shape::Circle(c), Shape::Polygon(poly)) | (Shape::Polygon(poly), Shape::Circle(c)) => {
            poly.distance_squared_to(c.centre()) <= c.radius().powi(2)
        }
        (Shape::Rect(r1), Shape::Rect(r2)) => r1.intersects(r2),
        (Shape::Rect(r), Shape::Triangle(t)) | (Shape::Triangle(t), Shape::Rect(r)) => {
            r.intersects(&t.bounding_box()) && convex_overlap(&r.corners(), &t.vertices())
        }
        (Shape::Triangle(t1), Shape::Triangle(t2)) => {
            t1.bounding_box().intersects(&t2.bounding_box())
                && convex_overlap(&t1.vertices(), &t2.vertices())
        }
        (Shape::Rect(_), Shape::Polygon(_))
        | (Shape::Polygon(_), Shape::Rect(_))
        | (Shape::Triangle(_), Shape::Polygon(_))
        | (Shape::Polygon(_), Shape::Triangle(_))
        | (Shape::Polygon(_), Shape::Polygon(_)) => solid_overlap(a, b),
    }
}

/// Boundary edges of an extended shape. Points, circles and `Everything`
/// have no polyline boundary and yield no edges.
pub(crate) fn edges_of(shape: &Shape) -> Vec<(Vec2, Vec2)> {
    match shape {
        Shape::Rect(r) => {
            let c = r.corners();
            vec![(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
        }
        Shape::Triangle(t) => t.edges().to_vec(),
        Shape::Polygon(p) => p.edges().collect(),
        _ => Vec::new(),
    }
}

// Separating-axis test over the edge normals of both convex vertex loops.
// Inclusive: touching projections count as overlapping.
fn convex_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    let axes = a
        .iter()
        .copied()
        .circular_tuple_windows()
        .chain(b.iter().copied().circular_tuple_windows())
        .map(|(u, v)| (v - u).orthog())
        .filter(|axis| !axis.is_zero());
    for axis in axes {
        let (a_min, a_max) = project(a, axis);
        let (b_min, b_max) = project(b, axis);
        if a_max < b_min || b_max < a_min {
            return false;
        }
    }
    true
}

fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = -f32::MAX;
    for &v in vertices {
        let p = axis.dot(v);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

// Overlap test for solid shapes bounded by polylines, valid for concave
// polygons: any edge-pair crossing means overlap; otherwise one shape may
// contain the other entirely.
fn solid_overlap(a: &Shape, b: &Shape) -> bool {
    if !a.bounding_box().intersects(&b.bounding_box()) {
        return false;
    }
    let a_edges = edges_of(a);
    let b_edges = edges_of(b);
    for &(u, v) in &a_edges {
        for &(s, t) in &b_edges {
            if intersect_segments(u, v, s, t) != SegmentIntersection::None {
                return true;
            }
        }
    }
    a.contains_point(b_edges[0].0) || b.contains_point(a_edges[0].0)
}

/// Determines whether the segments `ab` and `cd` intersect, and where.
///
/// A bounding-range prune on x and y is followed by a cross-product sign
/// test; when the intersection is unique its point is computed by
/// parameterized line evaluation. Collinear overlapping segments report
/// [`SegmentIntersection::Segment`]. Zero-length segments are tolerated and
/// behave as points.
pub fn intersect_segments(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> SegmentIntersection {
    if a.x.max(b.x) < c.x.min(d.x)
        || c.x.max(d.x) < a.x.min(b.x)
        || a.y.max(b.y) < c.y.min(d.y)
        || c.y.max(d.y) < a.y.min(b.y)
    {
        return SegmentIntersection::None;
    }
    let ab = b - a;
    let cd = d - c;
    let denom = ab.cross(cd);
    if denom != 0.0 {
        let t = (c - a).cross(cd) / denom;
        let u = (c - a).cross(ab) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            SegmentIntersection::Point(a + t * ab)
        } else {
            SegmentIntersection::None
        }
    } else if ab.is_zero() && cd.is_zero() {
        if a == c {
            SegmentIntersection::Point(a)
        } else {
            SegmentIntersection::None
        }
    } else if ab.is_zero() {
        point_on_segment(a, c, d)
    } else if cd.is_zero() {
        point_on_segment(c, a, b)
    } else if (c - a).cross(ab) != 0.0 {
        // Parallel but not collinear.
        SegmentIntersection::None
    } else {
        // Collinear: project cd's endpoints onto ab and intersect the
        // parameter ranges.
        let t0 = (c - a).dot(ab) / ab.len_squared();
        let t1 = (d - a).dot(ab) / ab.len_squared();
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi {
            SegmentIntersection::None
        } else if lo == hi {
            SegmentIntersection::Point(a + lo * ab)
        } else {
            SegmentIntersection::Segment
        }
    }
}

fn point_on_segment(p: Vec2, u: Vec2, v: Vec2) -> SegmentIntersection {
    let uv = v - u;
    if (p - u).cross(uv) != 0.0 {
        return SegmentIntersection::None;
    }
    let t = (p - u).dot(uv) / uv.len_squared();
    if (0.0..=1.0).contains(&t) {
        SegmentIntersection::Point(p)
    } else {
        SegmentIntersection::None
    }
}

/// Crops the segment from `start` to `end` to the axis-aligned box spanned by
/// `min` and `max`, assuming `start` lies inside the box.
///
/// Returns the point where the segment exits the box, or `end` unchanged if
/// `end` is itself inside.
#[must_use]
pub fn crop_line_segment(start: Vec2, end: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    let corners = [
        min,
        Vec2 { x: max.x, y: min.y },
        max,
        Vec2 { x: min.x, y: max.y },
    ];
    for (u, v) in corners.iter().copied().circular_tuple_windows() {
        if let SegmentIntersection::Point(p) = intersect_segments(start, end, u, v) {
            return p;
        }
    }
    end
}
