//! Uniform random point sampling inside shapes.

use crate::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

/// Rejection-sampling attempt limit for triangles and polygons. A simple
/// polygon fills a positive fraction of its bounding box, so hitting this cap
/// in practice means the shape is degenerate (zero area).
pub const SAMPLE_ATTEMPT_CAP: usize = 1_000_000;

/// Draws a point uniformly at random from the interior of `shape`.
///
/// Circles use polar sampling with a square-root radial correction; rects
/// sample each axis independently. Triangles and polygons use rejection
/// sampling in their bounding box, failing after [`SAMPLE_ATTEMPT_CAP`]
/// rejected candidates. `Everything` has no uniform distribution and always
/// fails.
pub fn random_point_in(shape: &Shape, rng: &mut impl Rng) -> Result<Vec2> {
    match shape {
        Shape::Point(p) => Ok(*p),
        Shape::Circle(c) => {
            let theta = rng.gen_range(0.0..TAU);
            let r = c.radius() * rng.gen::<f32>().sqrt();
            Ok(c.centre()
                + Vec2 {
                    x: theta.cos(),
                    y: theta.sin(),
                } * r)
        }
        Shape::Rect(r) => Ok(Vec2 {
            x: rng.gen_range(r.min().x..=r.max().x),
            y: rng.gen_range(r.min().y..=r.max().y),
        }),
        Shape::Triangle(_) | Shape::Polygon(_) => {
            let bb = shape.bounding_box();
            for _ in 0..SAMPLE_ATTEMPT_CAP {
                let candidate = Vec2 {
                    x: rng.gen_range(bb.min().x..=bb.max().x),
                    y: rng.gen_range(bb.min().y..=bb.max().y),
                };
                if shape.contains_point(candidate) {
                    return Ok(candidate);
                }
            }
            bail!(
                "failed to sample a point in {} after {SAMPLE_ATTEMPT_CAP} attempts",
                shape.kind()
            )
        }
        Shape::Everything => bail!("cannot sample a uniform point over the whole plane"),
    }
}
