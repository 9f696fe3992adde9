//! Torus Gravity headless driver
//!
//! Scatters bodies from a seed and runs the simulation, logging progress.
//!
//! Usage: `torus-gravity [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use torus_gravity::{SimConfig, Simulation, mass_for_radius};

    const DEFAULT_SEED: u64 = 12345;
    const BODY_COUNT: usize = 60;
    const FRAMES: u64 = 600;
    const REPORT_EVERY: u64 = 60;
    /// Mass per unit volume a pointer-drag spawner sizes bodies with
    const SPAWN_DENSITY: f32 = 20_000.0;
    /// Drag length to velocity
    const DRAG_TO_VELOCITY: f32 = 0.01;

    /// Spawn bodies the way a drag gesture would: a held radius and a drag vector
    fn scatter(sim: &mut Simulation, rng: &mut Pcg32, count: usize) {
        let (width, height) = (sim.config().width, sim.config().height);
        for _ in 0..count {
            let position = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
            let drag = Vec2::new(
                rng.random_range(-100.0..100.0),
                rng.random_range(-100.0..100.0),
            );
            let radius = rng.random_range(1.0..6.0);
            sim.spawn_body(
                position,
                drag * DRAG_TO_VELOCITY,
                mass_for_radius(radius, SPAWN_DENSITY),
            );
        }
    }

    pub fn run() {
        env_logger::init();
        log::info!("Torus Gravity (headless) starting...");

        let mut args = std::env::args().skip(1);
        let config = match args.next() {
            Some(path) => SimConfig::load(path),
            None => SimConfig::default(),
        };
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let mut sim = Simulation::new(config);
        let mut rng = Pcg32::seed_from_u64(seed);
        scatter(&mut sim, &mut rng, BODY_COUNT);
        sim.set_field_enabled(true);

        let start_mass = sim.total_mass();
        let mut merges = 0;
        for _ in 0..FRAMES {
            let report = sim.step();
            merges += report.merges;
            if report.frame % REPORT_EVERY == 0 {
                log::info!(
                    "frame {}: {} bodies, {} merges so far, momentum {}, peak field {:.3e}",
                    report.frame,
                    report.bodies,
                    merges,
                    sim.total_momentum(),
                    sim.field().max_strength()
                );
            }
        }

        log::info!(
            "Done: {} bodies left, mass {} (started {})",
            sim.len(),
            sim.total_mass(),
            start_mass
        );
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn scattered(seed: u64) -> Simulation {
            let mut sim = Simulation::default();
            scatter(&mut sim, &mut Pcg32::seed_from_u64(seed), 10);
            sim
        }

        #[test]
        fn test_scatter_is_seeded() {
            let a = scattered(7);
            let b = scattered(7);
            assert_eq!(a.len(), 10);
            assert_eq!(a.bodies(), b.bodies());
            assert_ne!(a.bodies(), scattered(8).bodies());
        }

        #[test]
        fn test_scatter_stays_on_plane() {
            let sim = scattered(DEFAULT_SEED);
            for body in sim.bodies() {
                let p = body.position();
                assert!((0.0..1000.0).contains(&p.x) && (0.0..1000.0).contains(&p.y));
                assert!(body.velocity().x.abs() <= 100.0 * DRAG_TO_VELOCITY);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the `web` module binding, this is just to satisfy the compiler
}
