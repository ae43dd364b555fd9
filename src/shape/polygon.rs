use crate::prelude::*;

/// Maximum number of edges covered by a single face strip.
pub const FACE_STRIP_SIZE: usize = 20;

/// Parity ray cast: shoot a ray in the +x direction from `p` and flip parity
/// at every edge crossing strictly to the right of `p` (decided by a
/// cross-product side test, avoiding a division). Inclusive of edges up to
/// the classic algorithm's boundary asymmetry.
pub(crate) fn parity_contains(vertices: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    for (u, v) in vertices.iter().copied().circular_tuple_windows() {
        if (u.y > p.y) != (v.y > p.y) {
            let dy = v.y - u.y;
            let cross = (v.x - u.x) * (p.y - u.y) - (p.x - u.x) * dy;
            // The crossing is at x > p.x iff cross and dy have the same sign.
            if cross != 0.0 && (dy > 0.0) == (cross > 0.0) {
                inside = !inside;
            }
        }
    }
    inside
}

/// A contiguous run of polygon edges with its own tight bounding box.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`; a strip covers
/// edges `start..end` where `end` is exclusive and the final strip's last
/// edge wraps around to close the polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStrip {
    start: usize,
    end: usize,
    bounds: Rect,
}

impl FaceStrip {
    pub fn start(&self) -> usize {
        self.start
    }
    pub fn end(&self) -> usize {
        self.end
    }
    pub fn bounding_box(&self) -> Rect {
        self.bounds
    }

    /// Squared distance to the second-closest corner of the strip's bounding
    /// box: an upper bound on the squared distance to the strip's edges,
    /// because the edge chain touches every side of its tight bounding box.
    fn second_closest_corner_dist_squared(&self, p: Vec2) -> f32 {
        let mut ds = self.bounds.corners().map(|c| c.dist_squared(p));
        ds.sort_by(f32::total_cmp);
        ds[1]
    }
}

/// A simple (non-self-intersecting) closed polygon with at least 3 vertices.
///
/// Winding direction is unconstrained but must be consistent for containment
/// tests to be meaningful. The bounding box and, for polygons with at least
/// `2 * FACE_STRIP_SIZE` vertices, the face-strip index are computed at
/// construction and never mutated.
///
/// Equality is cyclic and winding-insensitive: rotating the starting vertex
/// or reversing the vertex order yields an equal polygon.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec2>", into = "Vec<Vec2>")]
pub struct Polygon {
    vertices: Vec<Vec2>,
    bounds: Rect,
    strips: Vec<FaceStrip>,
}

impl Polygon {
    /// Creates a new polygon. Fails if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            bail!("polygon needs at least 3 vertices, got {}", vertices.len());
        }
        Ok(Self::from_vertices(vertices))
    }

    // Callers guarantee at least 3 vertices.
    pub(crate) fn from_vertices(vertices: Vec<Vec2>) -> Self {
        let bounds = Rect::around(vertices.iter().copied());
        let strips = Self::build_strips(&vertices);
        Self {
            vertices,
            bounds,
            strips,
        }
    }

    fn build_strips(vertices: &[Vec2]) -> Vec<FaceStrip> {
        let n = vertices.len();
        if n < 2 * FACE_STRIP_SIZE {
            return Vec::new();
        }
        (0..n)
            .step_by(FACE_STRIP_SIZE)
            .map(|start| {
                let end = (start + FACE_STRIP_SIZE).min(n);
                // The strip's vertices are start..=end, with the final vertex
                // wrapping for the closing edge.
                let bounds = Rect::around(
                    (start..=end).map(|i| vertices[i % n]),
                );
                FaceStrip { start, end, bounds }
            })
            .collect()
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
    pub fn face_strips(&self) -> &[FaceStrip] {
        &self.strips
    }

    /// All edges in order, including the closing edge back to the first
    /// vertex.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    fn edge(&self, i: usize) -> (Vec2, Vec2) {
        (
            self.vertices[i],
            self.vertices[(i + 1) % self.vertices.len()],
        )
    }

    /// Solid containment test via the parity ray cast.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.bounds.contains_point(p) && parity_contains(&self.vertices, p)
    }

    /// Shortest distance from the polygon to `p`; zero if `p` is inside.
    #[must_use]
    pub fn distance_to(&self, p: Vec2) -> f32 {
        self.distance_squared_to(p).sqrt()
    }

    /// Squared shortest distance from the polygon to `p`; zero if `p` is
    /// inside.
    ///
    /// With a face-strip index, strips are filtered by a two-level bound:
    /// each strip's exact bounding-box distance is a lower bound on its edge
    /// distance, and its second-closest bounding-box corner distance is an
    /// upper bound. Only strips whose lower bound does not exceed the best
    /// upper bound (or the best edge distance found so far) are scanned, so
    /// the true closest edge is never skipped.
    #[must_use]
    pub fn distance_squared_to(&self, p: Vec2) -> f32 {
        if self.contains_point(p) {
            return 0.0;
        }
        if self.strips.is_empty() {
            return self
                .edges()
                .map(|(u, v)| p.dist_squared(p.closest_point_on_line(u, v)))
                .fold(f32::MAX, f32::min);
        }

        let best_upper = self
            .strips
            .iter()
            .map(|s| s.second_closest_corner_dist_squared(p))
            .fold(f32::MAX, f32::min);
        let mut order = self
            .strips
            .iter()
            .map(|s| (s.bounds.distance_squared_to(p), s))
            .collect::<Vec<_>>();
        order.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        let mut best = f32::MAX;
        for (lower, strip) in order {
            if lower > best_upper.min(best) {
                break;
            }
            for i in strip.start..strip.end {
                let (u, v) = self.edge(i);
                best = best.min(p.dist_squared(p.closest_point_on_line(u, v)));
            }
        }
        best
    }

    /// The point of this solid polygon closest to `p` (which is `p` itself if
    /// `p` is inside).
    #[must_use]
    pub fn closest_point_to(&self, p: Vec2) -> Vec2 {
        if self.contains_point(p) {
            return p;
        }
        self.edges()
            .map(|(u, v)| p.closest_point_on_line(u, v))
            .min_by(|a, b| p.dist_squared(*a).total_cmp(&p.dist_squared(*b)))
            .unwrap_or(p)
    }

    /// Unit vector pointing from the polygon toward an external point; zero
    /// vector if `p` is inside.
    #[must_use]
    pub fn outward_normal_to(&self, p: Vec2) -> Vec2 {
        (p - self.closest_point_to(p)).normed()
    }

    /// Applies an affine transformation to every vertex, rebuilding the
    /// bounding box and face strips.
    #[must_use]
    pub fn transformed(&self, by: &Mat3x3) -> Polygon {
        Self::from_vertices(self.vertices.iter().map(|&v| *by * v).collect())
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        (0..n).any(|offset| {
            other.vertices[offset] == self.vertices[0]
                && ((0..n).all(|i| self.vertices[i] == other.vertices[(offset + i) % n])
                    || (0..n).all(|i| self.vertices[i] == other.vertices[(offset + n - i) % n]))
        })
    }
}

impl TryFrom<Vec<Vec2>> for Polygon {
    type Error = anyhow::Error;

    fn try_from(value: Vec<Vec2>) -> Result<Self> {
        Polygon::new(value)
    }
}
impl From<Polygon> for Vec<Vec2> {
    fn from(value: Polygon) -> Self {
        value.vertices
    }
}

// Wire layout is an unsigned 16-bit vertex count followed by the vertices;
// the bounding box and face strips are rebuilt on decode.
impl bincode::Encode for Polygon {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        let count = u16::try_from(self.vertices.len()).map_err(|_| {
            bincode::error::EncodeError::OtherString(format!(
                "polygon has too many vertices to serialize: {}",
                self.vertices.len()
            ))
        })?;
        count.encode(encoder)?;
        for v in &self.vertices {
            v.encode(encoder)?;
        }
        Ok(())
    }
}
impl<Context> bincode::Decode<Context> for Polygon {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let count: u16 = bincode::Decode::decode(decoder)?;
        let mut vertices = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            vertices.push(bincode::Decode::decode(decoder)?);
        }
        Polygon::new(vertices)
            .map_err(|e| bincode::error::DecodeError::OtherString(format!("{e:#}")))
    }
}
bincode::impl_borrow_decode!(Polygon);

impl AxisAlignedExtent for Polygon {
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
