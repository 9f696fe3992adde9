//! Semi-implicit Euler integration on the torus

use glam::Vec2;

use super::body::Body;
use super::torus;

/// Advance one body by one frame
///
/// Force updates velocity before velocity updates position. The accumulator
/// is cleared and the position wrapped back onto the plane.
#[inline]
pub fn integrate_body(body: &mut Body, size: Vec2) {
    body.velocity += body.accumulated_force / body.mass;
    body.position += body.velocity;
    body.accumulated_force = Vec2::ZERO;
    body.position = torus::wrap(body.position, size);
}

/// Advance every body by one frame
pub fn integrate(bodies: &mut [Body], size: Vec2) {
    for body in bodies {
        integrate_body(body, size);
    }
}
