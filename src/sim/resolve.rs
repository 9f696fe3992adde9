//! Pairwise resolution: merge colliding bodies, accumulate gravity otherwise
//!
//! Every unordered pair `(i, j)`, `i < j`, is visited once per pass. A pair
//! either collides and merges, or contributes an equal and opposite
//! attractive force. Nothing moves here; the integrator runs afterwards.
//!
//! Removal during the pass uses tombstones instead of erasing from the
//! vector, so indices never shift under the loops:
//! - heavier-or-equal `i` absorbs `j`: `j` is marked dead and the inner scan
//!   continues with `i`'s remaining partners
//! - heavier `j` absorbs `i`: `i` is marked dead, its inner scan stops and the
//!   outer scan resumes at the next live body
//!
//! Merged state is visible to every later pair in the same pass. Dead slots
//! are compacted once, after the pass.

use glam::Vec2;

use super::body::Body;
use super::torus;
use crate::config::SimConfig;

/// Counters for one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOutcome {
    /// Unordered pairs visited
    pub pairs_evaluated: usize,
    /// Pairs that collided and merged
    pub merges: usize,
    /// Pairs that produced a nonzero force
    pub forces_applied: usize,
}

/// Whether two bodies overlap, using the shortest toroidal distance
#[inline]
pub fn collides(a: &Body, b: &Body, size: Vec2) -> bool {
    let radii = a.radius + b.radius;
    torus::distance_squared(a.position, b.position, size) <= radii * radii
}

/// Gravitational force on `a` due to `b`, pointing from `a` toward `b`
///
/// Returns zero when the squared separation is below the epsilon guard.
pub fn gravitational_force(a: &Body, b: &Body, config: &SimConfig) -> Vec2 {
    let delta = torus::signed_delta(a.position, b.position, config.plane_size());
    let distance_squared = delta.length_squared();
    if distance_squared < config.min_distance_squared {
        return Vec2::ZERO;
    }

    let magnitude = config.gravitational_constant * a.mass * b.mass / distance_squared;
    delta * (magnitude / distance_squared.sqrt())
}

/// Borrow two distinct bodies mutably, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

/// Run one resolution pass over `bodies`
///
/// Merged-away bodies are removed before returning; survivors keep their
/// relative order.
pub fn resolve_pairs(bodies: &mut Vec<Body>, config: &SimConfig) -> ResolveOutcome {
    let size = config.plane_size();
    let count = bodies.len();
    let mut alive = vec![true; count];
    let mut outcome = ResolveOutcome::default();

    for i in 0..count {
        if !alive[i] {
            continue;
        }
        for j in (i + 1)..count {
            if !alive[j] {
                continue;
            }
            outcome.pairs_evaluated += 1;

            let (a, b) = pair_mut(bodies, i, j);
            if collides(a, b, size) {
                outcome.merges += 1;
                if a.mass >= b.mass {
                    log::debug!("Body {} absorbed body {}", a.handle.0, b.handle.0);
                    a.absorb(b, config.density);
                    alive[j] = false;
                } else {
                    log::debug!("Body {} absorbed body {}", b.handle.0, a.handle.0);
                    b.absorb(a, config.density);
                    alive[i] = false;
                    break;
                }
            } else {
                let force = gravitational_force(a, b, config);
                if force != Vec2::ZERO {
                    outcome.forces_applied += 1;
                }
                a.apply_force(force);
                b.apply_force(-force);
            }
        }
    }

    if outcome.merges > 0 {
        // retain visits elements in order
        let mut alive = alive.into_iter();
        bodies.retain(|_| alive.next().unwrap_or(true));
    }

    outcome
}
