//! Torus Gravity - N-body gravity on a wrap-around plane
//!
//! Core modules:
//! - `sim`: Physics core (toroidal metric, pairwise merge/force pass, integrator, field grid)
//! - `config`: Simulation constants, loadable from JSON
//! - `web`: Browser binding (wasm32 only)

pub mod config;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SimConfig;
pub use sim::{Body, BodyHandle, FieldCell, FieldGrid, Simulation, StepReport};

/// Default simulation constants
pub mod consts {
    /// Gravitational constant
    pub const G: f32 = 6.67430e-8;
    /// Mass per unit volume used to derive body radius from mass
    pub const DENSITY: f32 = 10_000.0;
    /// Squared separations below this produce no force or field contribution
    pub const MIN_DISTANCE_SQUARED: f32 = 0.1;

    /// Plane dimensions
    pub const PLANE_WIDTH: f32 = 1000.0;
    pub const PLANE_HEIGHT: f32 = 1000.0;

    /// Field grid pitch
    pub const FIELD_CELL_SIZE: f32 = 5.0;
}

/// Radius of a sphere of the given mass at the given density: `cbrt(3m / 4πρ)`
#[inline]
pub fn radius_for_mass(mass: f32, density: f32) -> f32 {
    (3.0 * mass / (4.0 * std::f32::consts::PI * density)).cbrt()
}

/// Mass of a sphere of the given radius at the given density
#[inline]
pub fn mass_for_radius(radius: f32, density: f32) -> f32 {
    4.0 / 3.0 * std::f32::consts::PI * radius.powi(3) * density
}
