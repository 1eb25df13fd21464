use crate::{Easing, Tween};

/// Milliseconds of glide per two pixels of distance.
const GLIDE_PACE: f64 = 2.0;
/// Longest a glide may take, in milliseconds.
const GLIDE_CAP: f64 = 1000.0;

/// The page's vertical scroll position, owned by the app rather than the
/// browser. Wheel input lands immediately; navigation jumps glide along an
/// eased curve.
pub struct ScrollDriver {
    offset: f64,
    limit: f64,
    glide: Option<Tween>,
}

impl ScrollDriver {
    pub fn new() -> ScrollDriver {
        ScrollDriver {
            offset: 0.0,
            limit: 0.0,
            glide: None,
        }
    }

    /// Sets the scrollable extent, the page height minus the viewport
    /// height, and re-clamps the current position.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.offset = self.offset.clamp(0.0, self.limit);
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Linear progress through the page, `0.0` at the top and `1.0` at the
    /// bottom. Pages that fit the viewport report `0.0`.
    pub fn progress(&self) -> f64 {
        if self.limit == 0.0 {
            0.0
        } else {
            self.offset / self.limit
        }
    }

    /// Applies a wheel step. Any active glide is abandoned so the wheel
    /// always wins.
    pub fn scroll_by(&mut self, delta: f64) {
        self.glide = None;
        self.offset = (self.offset + delta).clamp(0.0, self.limit);
    }

    /// Starts an eased glide towards `target`. Short hops take proportionally
    /// less time, capped at [`GLIDE_CAP`].
    pub fn glide_to(&mut self, target: f64) {
        let target = target.clamp(0.0, self.limit);
        let duration = ((target - self.offset).abs() / GLIDE_PACE).min(GLIDE_CAP);

        self.glide = Some(Tween::new(
            self.offset,
            target,
            duration,
            Easing::InOutCubic,
        ));
    }

    pub fn gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn tick(&mut self, delta_ms: f64) {
        if let Some(glide) = self.glide.as_mut() {
            glide.tick(delta_ms);
            self.offset = glide.value();

            if glide.done() {
                self.glide = None;
            }
        }
    }
}

impl Default for ScrollDriver {
    fn default() -> Self {
        ScrollDriver::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> ScrollDriver {
        let mut driver = ScrollDriver::new();
        driver.set_limit(4000.0);
        driver
    }

    #[test]
    fn glides_land_on_the_target_exactly() {
        let mut driver = driver();
        driver.glide_to(1234.5);

        // 617.25px of distance glides for 617.25ms.
        let mut elapsed = 0.0;

        while elapsed < 600.0 {
            driver.tick(16.0);
            elapsed += 16.0;

            assert!(driver.gliding());
            assert!(driver.offset() < 1234.5);
        }

        driver.tick(16.0);

        assert!(!driver.gliding());
        assert_eq!(driver.offset(), 1234.5);
    }

    #[test]
    fn glide_duration_is_capped() {
        let mut driver = driver();
        driver.glide_to(4000.0);

        for _ in 0..62 {
            driver.tick(16.0);
        }

        assert!(driver.gliding());

        driver.tick(16.0);

        assert!(!driver.gliding());
        assert_eq!(driver.offset(), 4000.0);
    }

    #[test]
    fn wheel_input_cancels_glides() {
        let mut driver = driver();
        driver.glide_to(2000.0);
        driver.tick(100.0);

        let mid_glide = driver.offset();
        driver.scroll_by(120.0);

        assert!(!driver.gliding());
        assert_eq!(driver.offset(), mid_glide + 120.0);

        driver.tick(1000.0);
        assert_eq!(driver.offset(), mid_glide + 120.0);
    }

    #[test]
    fn offsets_stay_within_the_page() {
        let mut driver = driver();

        driver.scroll_by(-500.0);
        assert_eq!(driver.offset(), 0.0);

        driver.scroll_by(9000.0);
        assert_eq!(driver.offset(), 4000.0);
        assert_eq!(driver.progress(), 1.0);

        driver.glide_to(-100.0);
        driver.tick(2000.0);
        assert_eq!(driver.offset(), 0.0);
        assert_eq!(driver.progress(), 0.0);
    }

    #[test]
    fn shrinking_the_page_reclamps_the_offset() {
        let mut driver = driver();
        driver.scroll_by(3000.0);

        driver.set_limit(1000.0);
        assert_eq!(driver.offset(), 1000.0);
    }
}
