use serde::{Deserialize, Serialize};

/// An easing curve mapping linear progress to displayed progress.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Accelerates in and brakes out. Drives page glides.
    InOutCubic,
    OutCubic,
    /// Brakes out only. Drives entrance reveals.
    OutQuad,
}

impl Easing {
    /// Eases `t`, clamped to `0.0..=1.0` beforehand.
    pub fn ease(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Remaps `value` from the `from` range onto the `to` range, clamping to the
/// ends. Degenerate `from` ranges land on the start of `to`.
pub fn map_range(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    if from.1 == from.0 {
        return to.0;
    }

    let t = ((value - from.0) / (from.1 - from.0)).clamp(0.0, 1.0);
    lerp(to.0, to.1, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_pin_their_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::InOutCubic,
            Easing::OutCubic,
            Easing::OutQuad,
        ] {
            assert_eq!(easing.ease(0.0), 0.0);
            assert_eq!(easing.ease(1.0), 1.0);
        }
    }

    #[test]
    fn curves_increase_monotonically() {
        for easing in [
            Easing::Linear,
            Easing::InOutCubic,
            Easing::OutCubic,
            Easing::OutQuad,
        ] {
            let mut last = 0.0;

            for step in 1..=100 {
                let eased = easing.ease(step as f64 / 100.0);

                assert!(eased >= last, "{easing:?} retreated at step {step}");
                last = eased;
            }
        }
    }

    #[test]
    fn in_out_cubic_is_symmetric_around_its_midpoint() {
        assert!((Easing::InOutCubic.ease(0.5) - 0.5).abs() < 1e-12);

        for step in 0..=50 {
            let t = step as f64 / 100.0;
            let head = Easing::InOutCubic.ease(t);
            let tail = Easing::InOutCubic.ease(1.0 - t);

            assert!((head + tail - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::OutQuad.ease(-1.0), 0.0);
        assert_eq!(Easing::OutQuad.ease(2.0), 1.0);
    }

    #[test]
    fn map_range_clamps_and_degenerates() {
        assert_eq!(map_range(0.15, (0.0, 0.3), (0.0, -100.0)), -50.0);
        assert_eq!(map_range(0.9, (0.0, 0.3), (0.0, -100.0)), -100.0);
        assert_eq!(map_range(-0.1, (0.0, 0.3), (0.0, -100.0)), 0.0);
        assert_eq!(map_range(0.5, (0.2, 0.2), (3.0, 9.0)), 3.0);
    }
}
