use crate::Easing;

/// A time-bound interpolation between two values.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, easing: Easing) -> Tween {
        Tween {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advances the clock. Ticking past the duration is harmless.
    pub fn tick(&mut self, delta_ms: f64) {
        self.elapsed = (self.elapsed + delta_ms.max(0.0)).min(self.duration);
    }

    pub fn progress(&self) -> f64 {
        if self.duration == 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    /// The interpolated value. Lands on `to` exactly once the duration has
    /// elapsed, with no floating-point residue.
    pub fn value(&self) -> f64 {
        if self.done() {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.ease(self.progress())
        }
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_on_the_target_exactly() {
        let mut tween = Tween::new(0.1, 0.3, 100.0, Easing::InOutCubic);

        for _ in 0..6 {
            tween.tick(16.0);
        }

        assert!(!tween.done());
        tween.tick(16.0);

        assert!(tween.done());
        assert_eq!(tween.value(), 0.3);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new(4.0, 8.0, 0.0, Easing::Linear);

        assert!(tween.done());
        assert_eq!(tween.value(), 8.0);
    }

    #[test]
    fn interpolates_along_the_curve() {
        let mut tween = Tween::new(0.0, 100.0, 200.0, Easing::Linear);

        tween.tick(50.0);
        assert_eq!(tween.value(), 25.0);

        tween.tick(50.0);
        assert_eq!(tween.value(), 50.0);
    }

    #[test]
    fn negative_deltas_do_not_rewind() {
        let mut tween = Tween::new(0.0, 10.0, 100.0, Easing::Linear);

        tween.tick(50.0);
        tween.tick(-25.0);

        assert_eq!(tween.value(), 5.0);
    }
}
