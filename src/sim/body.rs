//! Massive body entity
//!
//! Radius is always derived from mass and density; nothing sets it directly.

use glam::Vec2;

use crate::radius_for_mass;

/// Stable identifier for a spawned body
///
/// A merge survivor keeps its handle; the absorbed body's handle goes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// A gravitating body on the torus
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) handle: BodyHandle,
    pub(crate) mass: f32,
    pub(crate) radius: f32,
    pub(crate) velocity: Vec2,
    pub(crate) position: Vec2,
    /// Force summed over the current resolution pass, cleared by the integrator
    pub(crate) accumulated_force: Vec2,
}

impl Body {
    pub fn new(handle: BodyHandle, position: Vec2, velocity: Vec2, mass: f32, density: f32) -> Self {
        Self {
            handle,
            mass,
            radius: radius_for_mass(mass, density),
            velocity,
            position,
            accumulated_force: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn accumulated_force(&self) -> Vec2 {
        self.accumulated_force
    }

    /// Linear momentum `m·v`
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.mass * self.velocity
    }

    /// Add a force to this pass's accumulator
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.accumulated_force += force;
    }

    /// Merge `other` into this body, conserving mass and momentum
    ///
    /// Position is kept; velocity becomes the mass-weighted average and the
    /// radius is rederived from the combined mass.
    pub fn absorb(&mut self, other: &Body, density: f32) {
        let mass = self.mass + other.mass;
        self.velocity = (self.momentum() + other.momentum()) / mass;
        self.mass = mass;
        self.radius = radius_for_mass(mass, density);
    }
}
