//! Conversions between cartesian coordinates and barycentric weights
//! relative to a triangle `(v1, v2, v3)`.
//!
//! The weights returned are the amounts of `v2` and `v3`; the amount of `v1`
//! is `1 - amount2 - amount3`. Points outside the triangle are valid and
//! yield weights outside `[0, 1]`. `f64` variants are provided for callers
//! interpolating over large coordinate ranges where `f32` cancellation is
//! visible.

use crate::prelude::*;

/// Expresses `p` in barycentric coordinates, returning `(amount2, amount3)`.
///
/// A zero-area triangle has no barycentric basis; such input is tolerated
/// with a warning and yields `(0, 0)`.
pub fn cartesian_to_barycentric(v1: Vec2, v2: Vec2, v3: Vec2, p: Vec2) -> (f32, f32) {
    let e2 = v2 - v1;
    let e3 = v3 - v1;
    let q = p - v1;
    let denom = e2.cross(e3);
    if denom == 0.0 {
        warn!("degenerate triangle in cartesian_to_barycentric: {v1}, {v2}, {v3}");
        return (0.0, 0.0);
    }
    (q.cross(e3) / denom, e2.cross(q) / denom)
}

/// Reconstructs the cartesian point for the weights `(amount2, amount3)`.
#[must_use]
pub fn barycentric_to_cartesian(v1: Vec2, v2: Vec2, v3: Vec2, amount2: f32, amount3: f32) -> Vec2 {
    v1 + (v2 - v1) * amount2 + (v3 - v1) * amount3
}

/// As [`cartesian_to_barycentric`], computed in `f64`.
pub fn cartesian_to_barycentric_f64(v1: Vec2, v2: Vec2, v3: Vec2, p: Vec2) -> (f64, f64) {
    let (e2x, e2y) = (f64::from(v2.x - v1.x), f64::from(v2.y - v1.y));
    let (e3x, e3y) = (f64::from(v3.x - v1.x), f64::from(v3.y - v1.y));
    let (qx, qy) = (f64::from(p.x - v1.x), f64::from(p.y - v1.y));
    let denom = e2x * e3y - e3x * e2y;
    if denom == 0.0 {
        warn!("degenerate triangle in cartesian_to_barycentric_f64: {v1}, {v2}, {v3}");
        return (0.0, 0.0);
    }
    let amount2 = (qx * e3y - e3x * qy) / denom;
    let amount3 = (e2x * qy - qx * e2y) / denom;
    (amount2, amount3)
}

/// As [`barycentric_to_cartesian`], computed in `f64` before rounding back
/// to `f32` components.
#[must_use]
pub fn barycentric_to_cartesian_f64(
    v1: Vec2,
    v2: Vec2,
    v3: Vec2,
    amount2: f64,
    amount3: f64,
) -> Vec2 {
    let x = f64::from(v1.x)
        + f64::from(v2.x - v1.x) * amount2
        + f64::from(v3.x - v1.x) * amount3;
    let y = f64::from(v1.y)
        + f64::from(v2.y - v1.y) * amount2
        + f64::from(v3.y - v1.y) * amount3;
    Vec2 {
        x: x as f32,
        y: y as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::check_almost_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const V1: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    const V2: Vec2 = Vec2 { x: 5.0, y: 1.0 };
    const V3: Vec2 = Vec2 { x: 1.0, y: 6.0 };

    #[test]
    fn vertices_map_to_unit_weights() {
        assert_eq!(cartesian_to_barycentric(V1, V2, V3, V1), (0.0, 0.0));
        assert_eq!(cartesian_to_barycentric(V1, V2, V3, V2), (1.0, 0.0));
        assert_eq!(cartesian_to_barycentric(V1, V2, V3, V3), (0.0, 1.0));
    }

    #[test]
    fn interior_point_has_weights_in_unit_range() {
        let centroid = (V1 + V2 + V3) / 3.0;
        let (a2, a3) = cartesian_to_barycentric(V1, V2, V3, centroid);
        check_almost_eq!(a2, 1.0 / 3.0);
        check_almost_eq!(a3, 1.0 / 3.0);
    }

    #[test]
    fn exterior_point_has_weights_outside_unit_range() {
        let (a2, a3) = cartesian_to_barycentric(V1, V2, V3, Vec2 { x: 100.0, y: 1.0 });
        assert!(a2 > 1.0);
        check_almost_eq!(a3, 0.0);
    }

    #[test]
    fn roundtrip_random_points() {
        let mut rng = StdRng::seed_from_u64(6_186_915);
        for _ in 0..500 {
            let p = Vec2 {
                x: rng.gen_range(-50.0..50.0),
                y: rng.gen_range(-50.0..50.0),
            };
            let (a2, a3) = cartesian_to_barycentric(V1, V2, V3, p);
            let q = barycentric_to_cartesian(V1, V2, V3, a2, a3);
            assert!(p.almost_eq(q), "{p} != {q}");
        }
    }

    #[test]
    fn degenerate_triangle_yields_zero_weights() {
        // Route the degenerate-input warnings to the test output.
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        // Collinear vertices span no area.
        let c1 = Vec2::zero();
        let c2 = Vec2 { x: 2.0, y: 0.0 };
        let c3 = Vec2 { x: 5.0, y: 0.0 };
        let p = Vec2 { x: 3.0, y: 3.0 };
        assert_eq!(cartesian_to_barycentric(c1, c2, c3, p), (0.0, 0.0));
        assert_eq!(cartesian_to_barycentric_f64(c1, c2, c3, p), (0.0, 0.0));
    }

    #[test]
    fn f64_variant_agrees_with_f32() {
        let mut rng = StdRng::seed_from_u64(915_988);
        for _ in 0..100 {
            let p = Vec2 {
                x: rng.gen_range(-20.0..20.0),
                y: rng.gen_range(-20.0..20.0),
            };
            let (a2, a3) = cartesian_to_barycentric(V1, V2, V3, p);
            let (b2, b3) = cartesian_to_barycentric_f64(V1, V2, V3, p);
            assert!((f64::from(a2) - b2).abs() < 1e-4);
            assert!((f64::from(a3) - b3).abs() < 1e-4);
            let q = barycentric_to_cartesian_f64(V1, V2, V3, b2, b3);
            assert!(p.almost_eq(q), "{p} != {q}");
        }
    }
}
