//! Wrap-around plane geometry
//!
//! The plane is `W × H` with opposite edges identified. Two separations exist:
//! - signed: shortest displacement from one point to another, keeps direction
//! - unsigned: per-axis magnitude of the shortest displacement
//!
//! Force directions must come from the signed form. Collision and field
//! sampling only need the unsigned one.

use glam::Vec2;

/// Shortest signed displacement along one axis
#[inline]
fn signed_axis(delta: f32, extent: f32) -> f32 {
    if delta.abs() > extent / 2.0 {
        delta - extent.copysign(delta)
    } else {
        delta
    }
}

/// Shortest unsigned separation along one axis
#[inline]
fn unsigned_axis(delta: f32, extent: f32) -> f32 {
    let delta = delta.abs();
    delta.min(extent - delta)
}

/// Displacement from `from` to `to` along the shortest path around the torus
pub fn signed_delta(from: Vec2, to: Vec2, size: Vec2) -> Vec2 {
    let raw = to - from;
    Vec2::new(signed_axis(raw.x, size.x), signed_axis(raw.y, size.y))
}

/// Per-axis minimum separation between two points, always non-negative
pub fn unsigned_delta(a: Vec2, b: Vec2, size: Vec2) -> Vec2 {
    let raw = b - a;
    Vec2::new(unsigned_axis(raw.x, size.x), unsigned_axis(raw.y, size.y))
}

/// Squared shortest distance between two points on the torus
#[inline]
pub fn distance_squared(a: Vec2, b: Vec2, size: Vec2) -> f32 {
    unsigned_delta(a, b, size).length_squared()
}

/// Wrap a single coordinate onto `[0, extent)`
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let wrapped = (extent + value).rem_euclid(extent);
    // A tiny negative remainder can round up to exactly `extent`
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Wrap a point onto `[0, W) × [0, H)`
#[inline]
pub fn wrap(pos: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(pos.x, size.x), wrap_coord(pos.y, size.y))
}
