/// Largest integration step, in milliseconds. Longer frames are subdivided
/// to keep the integration stable.
const MAX_STEP: f64 = 16.0;

const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

/// A unit-mass damped spring tracking a moving target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(value: f64, stiffness: f64, damping: f64) -> Spring {
        Spring {
            stiffness,
            damping,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Tuning for magnetic hover attraction. Slightly overdamped, so the
    /// element trails the pointer without wobble.
    pub fn magnetic(value: f64) -> Spring {
        Spring::new(value, 200.0, 30.0)
    }

    /// Tuning for card tilt tracking.
    pub fn tilt(value: f64) -> Spring {
        Spring::new(value, 400.0, 30.0)
    }

    /// Tuning for idle float and lift.
    pub fn float(value: f64) -> Spring {
        Spring::new(value, 400.0, 25.0)
    }

    /// Tuning for the pointer glow trail.
    pub fn glow(value: f64) -> Spring {
        Spring::new(value, 500.0, 28.0)
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Teleports the spring, killing any residual motion.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Integrates the spring forward by `delta_ms` with semi-implicit Euler.
    pub fn tick(&mut self, delta_ms: f64) {
        let mut remaining = delta_ms.max(0.0);

        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP) / 1000.0;
            remaining -= MAX_STEP;

            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;

            self.velocity += force * dt;
            self.value += self.velocity * dt;
        }

        if self.settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Whether the spring has come to rest on its target.
    pub fn settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.tick(16.0);
        }
    }

    #[test]
    fn settles_on_its_target() {
        let mut spring = Spring::magnetic(0.0);
        spring.set_target(24.0);

        run(&mut spring, 240);

        assert!(spring.settled());
        assert_eq!(spring.value(), 24.0);
    }

    #[test]
    fn overdamped_attraction_never_overshoots() {
        let mut spring = Spring::magnetic(0.0);
        spring.set_target(24.0);

        for _ in 0..240 {
            spring.tick(16.0);
            assert!(spring.value() <= 24.0 + REST_DELTA);
        }
    }

    #[test]
    fn underdamped_float_overshoots_then_settles() {
        let mut spring = Spring::float(0.0);
        spring.set_target(10.0);

        let mut peak: f64 = 0.0;

        for _ in 0..600 {
            spring.tick(16.0);
            peak = peak.max(spring.value());
        }

        assert!(peak > 10.0 + REST_DELTA);
        assert!(spring.settled());
    }

    #[test]
    fn long_frames_are_subdivided() {
        let mut coarse = Spring::glow(0.0);
        let mut fine = Spring::glow(0.0);

        coarse.set_target(100.0);
        fine.set_target(100.0);

        coarse.tick(160.0);
        run(&mut fine, 10);

        assert!((coarse.value() - fine.value()).abs() < 1e-9);
    }

    #[test]
    fn snapping_kills_motion() {
        let mut spring = Spring::tilt(0.0);
        spring.set_target(15.0);
        run(&mut spring, 3);

        spring.snap_to(0.0);

        assert!(spring.settled());
        assert_eq!(spring.value(), 0.0);
    }
}
