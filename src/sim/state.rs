//! Simulation context
//!
//! Owns the body collection, the field grid and the configuration. One
//! `step` per rendered frame; spawning and reset happen between steps.

use glam::Vec2;

use super::body::{Body, BodyHandle};
use super::field::FieldGrid;
use super::integrate::integrate;
use super::resolve::resolve_pairs;
use super::torus;
use crate::config::SimConfig;

/// Summary of one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Frame number this report belongs to (1-based)
    pub frame: u64,
    /// Unordered pairs visited by the resolver
    pub pairs_evaluated: usize,
    /// Bodies absorbed by merges
    pub merges: usize,
    /// Pairs that produced a nonzero force
    pub forces_applied: usize,
    /// Bodies left after the step
    pub bodies: usize,
    /// Whether the field grid was resampled
    pub field_sampled: bool,
}

/// The whole simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    bodies: Vec<Body>,
    field: FieldGrid,
    field_enabled: bool,
    frame: u64,
    next_id: u32,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        let field = FieldGrid::new(&config);
        log::info!(
            "Simulation {}x{} with {}x{} field cells",
            config.width,
            config.height,
            field.columns(),
            field.rows()
        );
        Self {
            config,
            bodies: Vec::new(),
            field,
            field_enabled: false,
            frame: 0,
            next_id: 1,
        }
    }

    /// Add a body; radius is derived from mass, position wrapped onto the plane
    pub fn spawn_body(&mut self, position: Vec2, velocity: Vec2, mass: f32) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;

        let position = torus::wrap(position, self.config.plane_size());
        let body = Body::new(handle, position, velocity, mass, self.config.density);
        log::debug!(
            "Spawned body {} mass {mass} speed {} at {position}",
            handle.0,
            velocity.length()
        );
        self.bodies.push(body);
        handle
    }

    /// Remove every body
    pub fn reset_all(&mut self) {
        log::info!("Reset: removing {} bodies", self.bodies.len());
        self.bodies.clear();
        self.field.clear();
    }

    /// Resolve pairs, integrate, then resample the field if enabled
    pub fn step(&mut self) -> StepReport {
        self.frame += 1;

        let outcome = resolve_pairs(&mut self.bodies, &self.config);
        integrate(&mut self.bodies, self.config.plane_size());
        if self.field_enabled {
            self.field.sample(&self.bodies, &self.config);
        }

        let report = StepReport {
            frame: self.frame,
            pairs_evaluated: outcome.pairs_evaluated,
            merges: outcome.merges,
            forces_applied: outcome.forces_applied,
            bodies: self.bodies.len(),
            field_sampled: self.field_enabled,
        };
        log::trace!("{report:?}");
        report
    }

    /// Recompute the field grid from the current bodies
    pub fn sample_field(&mut self) -> &FieldGrid {
        self.field.sample(&self.bodies, &self.config);
        &self.field
    }

    /// Field grid as of the last sampling pass
    pub fn field(&self) -> &FieldGrid {
        &self.field
    }

    pub fn set_field_enabled(&mut self, enabled: bool) {
        if enabled != self.field_enabled {
            log::info!("Field sampling {}", if enabled { "on" } else { "off" });
        }
        self.field_enabled = enabled;
    }

    pub fn field_enabled(&self) -> bool {
        self.field_enabled
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.iter().find(|b| b.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Steps run since creation
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn total_mass(&self) -> f32 {
        self.bodies.iter().map(Body::mass).sum()
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
