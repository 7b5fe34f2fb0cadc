//! Firework bursts for the win screen.
//!
//! A burst is a set of particles flying out from the centre of the
//! screen. The engine only picks the colours and displacements; how the
//! particles are animated is up to the presenter.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::core::GameRng;

/// Colours a particle can take.
pub const PALETTE: [&str; 3] = ["#ff00ff", "#00ffff", "#f7ff00"];

/// Closest a particle lands to the burst centre.
pub const MIN_DISTANCE: f64 = 50.0;

/// Exclusive upper bound on particle distance.
pub const MAX_DISTANCE: f64 = 250.0;

/// One particle: where it ends up relative to the burst centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub color: &'static str,
    pub dx: f64,
    pub dy: f64,
}

impl Particle {
    /// Distance from the burst centre.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// One frame of fireworks.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FireworkBurst {
    pub particles: Vec<Particle>,
}

impl FireworkBurst {
    /// Scatter `count` particles at uniformly random angles.
    #[must_use]
    pub fn generate(rng: &mut GameRng, count: usize) -> Self {
        let particles = (0..count)
            .map(|_| {
                let color = rng.choose(&PALETTE).copied().unwrap_or(PALETTE[0]);
                let angle = rng.gen_range_f64(0.0..TAU);
                let distance = rng.gen_range_f64(MIN_DISTANCE..MAX_DISTANCE);
                Particle {
                    color,
                    dx: angle.cos() * distance,
                    dy: angle.sin() * distance,
                }
            })
            .collect();

        Self { particles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
