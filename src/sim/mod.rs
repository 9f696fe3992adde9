//! Physics core
//!
//! Everything that moves bodies lives here. Single-threaded and frame-driven:
//! - one `Simulation::step` per frame (resolve pairs, integrate, sample field)
//! - no rendering, input or platform dependencies
//! - the context owns the bodies; nothing else mutates them mid-step

pub mod body;
pub mod field;
pub mod integrate;
pub mod resolve;
pub mod state;
pub mod torus;

pub use body::{Body, BodyHandle};
pub use field::{FieldCell, FieldGrid};
pub use integrate::{integrate, integrate_body};
pub use resolve::{ResolveOutcome, collides, gravitational_force, resolve_pairs};
pub use state::{Simulation, StepReport};
pub use torus::{distance_squared, signed_delta, unsigned_delta, wrap, wrap_coord};
