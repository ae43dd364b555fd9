//! Fixed-format binary codec for geometry values.
//!
//! The wire layout is little-endian IEEE-754 floats in field-declaration
//! order with no framing or padding: `Vec2` is `x, y`; `Circle` is
//! `centre, radius`; `Rect` is `min, max`; `Triangle` is its three vertices
//! in canonical clockwise order (cached normals are rebuilt on decode);
//! `Polygon` is a `u16` vertex count followed by the vertices. A [`Shape`]
//! is prefixed with its `u32` variant tag.

use crate::prelude::*;

fn config() -> impl bincode::config::Config {
    bincode::config::legacy()
}

/// Serializes `value` into its wire byte layout.
pub fn to_wire_bytes<T: bincode::Encode>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::encode_to_vec(value, config())?)
}

/// Deserializes a value from its wire byte layout, consuming the whole
/// buffer. Decoded values pass through their constructors, so invariants
/// (rect ordering, polygon vertex count, triangle winding and caches) are
/// re-established; malformed buffers fail.
pub fn from_wire_bytes<T: bincode::Decode<()>>(bytes: &[u8]) -> Result<T> {
    let (value, read) = bincode::decode_from_slice(bytes, config())?;
    if read != bytes.len() {
        bail!("trailing garbage: decoded {read} of {} bytes", bytes.len());
    }
    Ok(value)
}
