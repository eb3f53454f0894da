//! Decorative background particles

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::particles as defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: defaults::COUNT,
        }
    }
}

/// One floating particle. Percent and seconds, as the stylesheet expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position in `[0, 100)` percent.
    pub left_percent: f32,
    /// Animation delay in `[0, 20)` seconds.
    pub delay_s: f32,
    /// Animation duration in `[20, 30)` seconds.
    pub duration_s: f32,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..defaults::MAX_DELAY_S),
            duration_s: defaults::BASE_DURATION_S
                + rng.random_range(0.0..defaults::DURATION_SPREAD_S),
        }
    }

    /// Horizontal position after `elapsed_s`, looping over the particle's
    /// duration. Used by hosts that animate particles themselves.
    pub fn phase_at(&self, elapsed_s: f32) -> f32 {
        let t = (elapsed_s - self.delay_s).max(0.0);
        (t % self.duration_s) / self.duration_s
    }
}

pub fn generate<R: Rng>(rng: &mut R, cfg: ParticleConfig) -> Vec<Particle> {
    (0..cfg.count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fifty_particles_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(&mut rng, ParticleConfig::default());
        assert_eq!(particles.len(), 50);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left_percent));
            assert!((0.0..20.0).contains(&p.delay_s));
            assert!((20.0..30.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn phase_loops_within_unit_interval() {
        let p = Particle {
            left_percent: 10.0,
            delay_s: 2.0,
            duration_s: 20.0,
        };
        assert_eq!(p.phase_at(0.0), 0.0);
        assert_eq!(p.phase_at(12.0), 0.5);
        assert!(p.phase_at(1_000.0) < 1.0);
    }
}
