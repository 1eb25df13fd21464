use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Milliseconds between pointer-trail bursts.
pub const EMIT_INTERVAL: f64 = 50.0;
/// Fixed simulation step, in milliseconds.
pub const PARTICLE_STEP: f64 = 16.0;

/// The accent hue of a single particle.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ParticleSort {
    Azure,
    Violet,
    Cyan,
    Emerald,
    Amber,
    Rose,
}

impl ParticleSort {
    pub const ALL: [ParticleSort; 6] = [
        ParticleSort::Azure,
        ParticleSort::Violet,
        ParticleSort::Cyan,
        ParticleSort::Emerald,
        ParticleSort::Amber,
        ParticleSort::Rose,
    ];

    pub fn css(&self) -> &'static str {
        match self {
            ParticleSort::Azure => "#3b82f6",
            ParticleSort::Violet => "#8b5cf6",
            ParticleSort::Cyan => "#06b6d4",
            ParticleSort::Emerald => "#10b981",
            ParticleSort::Amber => "#f59e0b",
            ParticleSort::Rose => "#ef4444",
        }
    }
}

pub struct Particle {
    pub position: Point,
    velocity: Point,
    pub size: f64,
    pub sort: ParticleSort,
    age: f64,
    max_life: f64,
}

impl Particle {
    pub fn new(
        position: Point,
        velocity: Point,
        size: f64,
        sort: ParticleSort,
        max_life: f64,
    ) -> Particle {
        Particle {
            position,
            velocity,
            size,
            sort,
            age: 0.0,
            max_life,
        }
    }

    /// Advances the particle by one [`PARTICLE_STEP`].
    pub fn tick(&mut self) {
        self.position = self.position + self.velocity;
        self.age += PARTICLE_STEP;
    }

    /// Fades linearly from `1.0` at birth to `0.0` at the end of life.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age / self.max_life).max(0.0)
    }

    pub fn is_alive(&self) -> bool {
        self.age < self.max_life
    }
}

/// Spawns and advances pointer-trail particles on a fixed clock, so frame
/// pacing never changes how the trail behaves.
pub struct ParticleEmitter {
    rng: ChaCha8Rng,
    particles: Vec<Particle>,
    emit_clock: f64,
    step_clock: f64,
}

impl ParticleEmitter {
    pub fn new(seed: u64) -> ParticleEmitter {
        ParticleEmitter {
            rng: ChaCha8Rng::seed_from_u64(seed),
            particles: Vec::new(),
            emit_clock: 0.0,
            step_clock: 0.0,
        }
    }

    /// Advances the simulation by `delta_ms`, bursting at `origin` whenever
    /// the emit clock wraps while `active`.
    pub fn tick(&mut self, delta_ms: f64, origin: Point, active: bool) {
        self.emit_clock += delta_ms.max(0.0);

        while self.emit_clock >= EMIT_INTERVAL {
            self.emit_clock -= EMIT_INTERVAL;

            if active {
                self.burst(origin);
            }
        }

        self.step_clock += delta_ms.max(0.0);

        while self.step_clock >= PARTICLE_STEP {
            self.step_clock -= PARTICLE_STEP;

            for particle in self.particles.iter_mut() {
                particle.tick();
            }

            self.particles.retain(|particle| particle.is_alive());
        }
    }

    fn burst(&mut self, origin: Point) {
        let count = self.rng.gen_range(1..=3);

        for _ in 0..count {
            let jitter = Point(
                self.rng.gen_range(-10.0..10.0),
                self.rng.gen_range(-10.0..10.0),
            );
            let velocity = Point(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0) - 1.0,
            );
            let sort = ParticleSort::ALL[self.rng.gen_range(0..ParticleSort::ALL.len())];

            self.particles.push(Particle::new(
                origin + jitter,
                velocity,
                self.rng.gen_range(2.0..6.0),
                sort,
                self.rng.gen_range(1000.0..2000.0),
            ));
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_fades_to_zero_and_never_recovers() {
        let mut particle = Particle::new(
            Point(0.0, 0.0),
            Point(0.0, -1.0),
            4.0,
            ParticleSort::Azure,
            1000.0,
        );
        let mut last = particle.opacity();

        assert_eq!(last, 1.0);

        while particle.is_alive() {
            particle.tick();

            let opacity = particle.opacity();

            assert!(opacity < last);
            last = opacity;
        }

        assert_eq!(particle.opacity(), 0.0);

        particle.tick();
        assert_eq!(particle.opacity(), 0.0);
    }

    #[test]
    fn expired_particles_are_dropped() {
        let mut emitter = ParticleEmitter::new(7);

        emitter.tick(200.0, Point(50.0, 50.0), true);
        assert!(!emitter.particles().is_empty());

        // Longest possible life is just under two seconds.
        emitter.tick(2000.0, Point(50.0, 50.0), false);
        assert!(emitter.particles().is_empty());
    }

    #[test]
    fn bursts_follow_the_emit_clock() {
        let mut emitter = ParticleEmitter::new(7);

        emitter.tick(49.0, Point(0.0, 0.0), true);
        assert!(emitter.particles().is_empty());

        emitter.tick(1.0, Point(0.0, 0.0), true);

        let first_burst = emitter.particles().len();
        assert!((1..=3).contains(&first_burst));

        // Ten full intervals with no expiry in range.
        emitter.tick(500.0, Point(0.0, 0.0), true);

        let spawned = emitter.particles().len() - first_burst;
        assert!((10..=30).contains(&spawned));
    }

    #[test]
    fn idle_pointers_spawn_nothing() {
        let mut emitter = ParticleEmitter::new(7);

        emitter.tick(500.0, Point(0.0, 0.0), false);
        assert!(emitter.particles().is_empty());
    }

    #[test]
    fn bursts_jitter_and_drift_within_bounds() {
        let mut emitter = ParticleEmitter::new(11);
        let origin = Point(300.0, 200.0);

        // One burst, then three steps of drift within the same frame.
        emitter.tick(EMIT_INTERVAL, origin, true);
        assert!(!emitter.particles().is_empty());

        for particle in emitter.particles() {
            let offset = particle.position - origin;

            assert!(offset.0.abs() < 10.0 + 3.0);
            assert!(offset.1 > -16.0 && offset.1 < 10.0);
            assert!((2.0..6.0).contains(&particle.size));
        }
    }

    #[test]
    fn seeded_emitters_replay_identically() {
        let mut left = ParticleEmitter::new(99);
        let mut right = ParticleEmitter::new(99);

        for _ in 0..20 {
            left.tick(17.0, Point(10.0, 20.0), true);
            right.tick(17.0, Point(10.0, 20.0), true);
        }

        assert_eq!(left.particles().len(), right.particles().len());

        for (a, b) in left.particles().iter().zip(right.particles()) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.size, b.size);
            assert_eq!(a.sort, b.sort);
        }
    }
}
