use crate::prelude::*;
use crate::shape::polygon::parity_contains;

/// Which part of a triangle lies closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleFeature {
    Vertex1,
    Vertex2,
    Vertex3,
    Edge12,
    Edge13,
    Edge23,
    Inside,
}

/// A solid triangle with a canonical winding order.
///
/// The constructor reorders `p2`/`p3` if necessary so that all triangles wind
/// the same way (positive cross product of the first two edges, which reads as
/// clockwise in screen coordinates). The three outward unit edge normals and
/// the bounding box are precomputed at construction and never mutated.
///
/// Degenerate (collinear) triangles are tolerated: their edge normals are zero
/// vectors and all queries fall back to treating the triangle as a segment.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(from = "[Vec2; 3]", into = "[Vec2; 3]")]
pub struct Triangle {
    p1: Vec2,
    p2: Vec2,
    p3: Vec2,
    n12: Vec2,
    n13: Vec2,
    n23: Vec2,
    bounds: Rect,
}

impl Triangle {
    /// Creates a new triangle from three vertices in any order.
    pub fn new(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let cross = (p2 - p1).cross(p3 - p1);
        if cross == 0.0 {
            warn!("degenerate triangle: {p1}, {p2}, {p3}");
        }
        let (p2, p3) = if cross < 0.0 { (p3, p2) } else { (p2, p3) };
        Self {
            p1,
            p2,
            p3,
            n12: (p2 - p1).orthog().normed(),
            n13: (p1 - p3).orthog().normed(),
            n23: (p3 - p2).orthog().normed(),
            bounds: Rect::around([p1, p2, p3]),
        }
    }

    pub fn p1(&self) -> Vec2 {
        self.p1
    }
    pub fn p2(&self) -> Vec2 {
        self.p2
    }
    pub fn p3(&self) -> Vec2 {
        self.p3
    }
    /// Outward unit normal of the edge from `p1` to `p2`.
    pub fn normal12(&self) -> Vec2 {
        self.n12
    }
    /// Outward unit normal of the edge from `p1` to `p3`.
    pub fn normal13(&self) -> Vec2 {
        self.n13
    }
    /// Outward unit normal of the edge from `p2` to `p3`.
    pub fn normal23(&self) -> Vec2 {
        self.n23
    }

    pub fn vertices(&self) -> [Vec2; 3] {
        [self.p1, self.p2, self.p3]
    }
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)]
    }
    pub fn centroid(&self) -> Vec2 {
        (self.p1 + self.p2 + self.p3) / 3.0
    }

    /// Solid containment test via the parity ray cast, inclusive of edges per
    /// the parity convention (exact boundary behavior may show the classic
    /// algorithm's minor asymmetry).
    pub fn contains_point(&self, p: Vec2) -> bool {
        parity_contains(&[self.p1, self.p2, self.p3], p)
    }

    /// Classifies which feature of the triangle is closest to `p`.
    ///
    /// Seven cases, checked in order: each vertex (two half-plane dot tests),
    /// then each edge (projection within the edge's extent and outside its
    /// outward half-plane), falling through to `Inside`. The same decision
    /// tree backs [`distance_to`](Triangle::distance_to),
    /// [`closest_point_to`](Triangle::closest_point_to) and
    /// [`outward_normal_to`](Triangle::outward_normal_to).
    pub fn closest_feature(&self, p: Vec2) -> TriangleFeature {
        let (p1, p2, p3) = (self.p1, self.p2, self.p3);
        if (p - p1).dot(p2 - p1) <= 0.0 && (p - p1).dot(p3 - p1) <= 0.0 {
            return TriangleFeature::Vertex1;
        }
        if (p - p2).dot(p1 - p2) <= 0.0 && (p - p2).dot(p3 - p2) <= 0.0 {
            return TriangleFeature::Vertex2;
        }
        if (p - p3).dot(p1 - p3) <= 0.0 && (p - p3).dot(p2 - p3) <= 0.0 {
            return TriangleFeature::Vertex3;
        }
        if (p - p1).dot(self.n12) >= 0.0
            && (p - p1).dot(p2 - p1) >= 0.0
            && (p - p2).dot(p1 - p2) >= 0.0
        {
            return TriangleFeature::Edge12;
        }
        if (p - p1).dot(self.n13) >= 0.0
            && (p - p1).dot(p3 - p1) >= 0.0
            && (p - p3).dot(p1 - p3) >= 0.0
        {
            return TriangleFeature::Edge13;
        }
        if (p - p2).dot(self.n23) >= 0.0
            && (p - p2).dot(p3 - p2) >= 0.0
            && (p - p3).dot(p2 - p3) >= 0.0
        {
            return TriangleFeature::Edge23;
        }
        TriangleFeature::Inside
    }

    /// The point of this solid triangle closest to `p` (which is `p` itself
    /// if `p` is inside).
    #[must_use]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        match self.closest_feature(p) {
            TriangleFeature::Vertex1 => self.p1,
            TriangleFeature::Vertex2 => self.p2,
            TriangleFeature::Vertex3 => self.p3,
            TriangleFeature::Edge12 => p.closest_point_on_line(self.p1, self.p2),
            TriangleFeature::Edge13 => p.closest_point_on_line(self.p1, self.p3),
            TriangleFeature::Edge23 => p.closest_point_on_line(self.p2, self.p3),
            TriangleFeature::Inside => p,
        }
    }

    /// Shortest distance from the triangle to `p`; zero if `p` is inside.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        p.dist(self.closest_point_to(p))
    }

    /// Squared shortest distance from the triangle to `p`.
    #[must_use]
    pub fn distance_squared_to(&self, p: Vec2) -> f32 {
        p.dist_squared(self.closest_point_to(p))
    }

    /// Unit vector pointing from the triangle toward an external point: the
    /// nearest edge's outward normal, or the direction away from the nearest
    /// vertex. Zero vector if `p` is inside.
    #[must_use]
    pub fn outward_normal_to(&self, p: Vec2) -> Vec2 {
        match self.closest_feature(p) {
            TriangleFeature::Vertex1 => (p - self.p1).normed(),
            TriangleFeature::Vertex2 => (p - self.p2).normed(),
            TriangleFeature::Vertex3 => (p - self.p3).normed(),
            TriangleFeature::Edge12 => self.n12,
            TriangleFeature::Edge13 => self.n13,
            TriangleFeature::Edge23 => self.n23,
            TriangleFeature::Inside => Vec2::zero(),
        }
    }

    /// Applies an affine transformation, rebuilding the winding, normals and
    /// bounding box from the transformed vertices.
    #[must_use]
    pub fn transformed(&self, by: &Mat3x3) -> Triangle {
        Triangle::new(*by * self.p1, *by * self.p2, *by * self.p3)
    }
}

// Equality compares vertices only; the remaining fields are derived caches.
impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.p1 == other.p1 && self.p2 == other.p2 && self.p3 == other.p3
    }
}

impl From<[Vec2; 3]> for Triangle {
    fn from(value: [Vec2; 3]) -> Self {
        Triangle::new(value[0], value[1], value[2])
    }
}
impl From<Triangle> for [Vec2; 3] {
    fn from(value: Triangle) -> Self {
        value.vertices()
    }
}

// Wire layout is the three vertices in order; the cached normals and bounding
// box are rebuilt on decode.
impl bincode::Encode for Triangle {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        self.p1.encode(encoder)?;
        self.p2.encode(encoder)?;
        self.p3.encode(encoder)
    }
}
impl<Context> bincode::Decode<Context> for Triangle {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let p1: Vec2 = bincode::Decode::decode(decoder)?;
        let p2: Vec2 = bincode::Decode::decode(decoder)?;
        let p3: Vec2 = bincode::Decode::decode(decoder)?;
        Ok(Triangle::new(p1, p2, p3))
    }
}
bincode::impl_borrow_decode!(Triangle);

impl AxisAlignedExtent for Triangle {
    fn extent(&self) -> Vec2 {
        self.bounds.dimensions()
    }
    fn centre(&self) -> Vec2 {
        self.bounds.centre()
    }
    fn bounding_box(&self) -> Rect {
        self.bounds
    }
}
