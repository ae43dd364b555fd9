//! 2D collision geometry for arena games.
//!
//! Immutable geometric primitives (points, circles, axis-aligned rectangles,
//! triangles, simple polygons, and the whole plane) plus pure query functions
//! over them: pairwise intersection, distance and closest-point queries,
//! outward normals, barycentric conversion, uniform random sampling, and a
//! fixed-format binary wire codec for network replication.
//!
//! Large polygons carry a face-strip index (contiguous runs of edges with
//! tight bounding boxes) that accelerates nearest-edge queries; see
//! [`shape::Polygon`].

pub mod assert;
pub mod barycentric;
pub mod distance;
pub mod intersect;
pub mod linalg;
pub mod sample;
pub mod shape;
pub mod wire;

/// Tolerance used by approximate comparisons ([`linalg::Vec2::almost_eq`] and friends).
pub const EPSILON: f32 = 1e-5;

pub mod prelude {
    #[allow(unused_imports)]
    pub use anyhow::{anyhow, bail, Context, Result};
    #[allow(unused_imports)]
    pub use itertools::Itertools;
    #[allow(unused_imports)]
    pub use tracing::{error, info, warn};

    #[allow(unused_imports)]
    pub use crate::{
        EPSILON,
        linalg::{AlmostEq, AxisAlignedExtent, Mat3x3, Rect, Vec2},
        shape::{Circle, Polygon, Shape, ShapeKind, Triangle},
    };
}
