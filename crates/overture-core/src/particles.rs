//! Decorative particle planning.
//!
//! The intro sprinkles a fixed number of short-lived particles across the
//! viewport. This module only plans them (when each spawns, where it lands,
//! how long it lives); rendering and removal are the front end's job.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::IntroConfig;

/// One planned particle.
///
/// `x` and `y` are viewport fractions in `[0, 1)`; the renderer multiplies
/// by the window size so the plan stays resolution-independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpawn {
    /// Unique within one plan; used to remove exactly this particle later
    pub id: u32,
    /// Offset from sequence start at which this particle appears
    pub delay: Duration,
    /// How long the particle stays before removing itself
    pub lifetime: Duration,
    /// Horizontal position as a viewport fraction
    pub x: f32,
    /// Vertical position as a viewport fraction
    pub y: f32,
}

/// Plan the full particle burst for one intro run.
///
/// Exactly `config.particle_count` spawns, staggered `config.spawn_stagger`
/// apart, each with the configured lifetime and a fresh random position.
pub fn spawn_plan(config: &IntroConfig) -> Vec<ParticleSpawn> {
    spawn_plan_with(config, &mut rand::rng())
}

/// [`spawn_plan`] with a caller-supplied RNG, for deterministic tests.
pub fn spawn_plan_with<R: Rng + ?Sized>(config: &IntroConfig, rng: &mut R) -> Vec<ParticleSpawn> {
    (0..config.particle_count)
        .map(|i| ParticleSpawn {
            id: i,
            delay: config.spawn_stagger * i,
            lifetime: config.particle_lifetime,
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
        })
        .collect()
}

/// A fresh random viewport position, used when re-rolling live particles on
/// window resize.
pub fn random_position() -> (f32, f32) {
    let mut rng = rand::rng();
    (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0))
}
