use crate::{lerp, Easing};

/// Milliseconds an entrance animation runs for.
pub const REVEAL_DURATION: f64 = 600.0;
/// Pixels shaved off both ends of the viewport when judging visibility.
pub const REVEAL_MARGIN: f64 = 50.0;
/// Share of a slice that must be inside the viewport to trigger.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Stagger step for badge rows, in milliseconds.
pub const STAGGER_TIGHT: f64 = 150.0;
/// Stagger step for card grids, in milliseconds.
pub const STAGGER_LOOSE: f64 = 200.0;

/// An entrance animation for a slice of the page. While its slice is in
/// view the slice fades and slides into its resting pose; scrolled back out
/// it retreats, unless built with [`Reveal::once`], which latches on first
/// sight.
pub struct Reveal {
    delay: f64,
    clock: f64,
    in_view: bool,
    latching: bool,
    latched: bool,
}

impl Reveal {
    pub fn new() -> Reveal {
        Reveal {
            delay: 0.0,
            clock: 0.0,
            in_view: false,
            latching: false,
            latched: false,
        }
    }

    /// A reveal which never retreats once it has been seen.
    pub fn once() -> Reveal {
        Reveal {
            latching: true,
            ..Reveal::new()
        }
    }

    /// A latching reveal which idles for `delay_ms` after coming into view,
    /// for staggered grids.
    pub fn delayed(delay_ms: f64) -> Reveal {
        Reveal {
            delay: delay_ms.max(0.0),
            ..Reveal::once()
        }
    }

    /// Whether a slice spanning `top..bottom` on the page shows enough of
    /// itself in a viewport of `height` scrolled to `offset`. The viewport
    /// shrinks by [`REVEAL_MARGIN`] on both ends, and at least
    /// [`REVEAL_THRESHOLD`] of the slice must sit inside what remains.
    pub fn visible(offset: f64, height: f64, top: f64, bottom: f64) -> bool {
        let window_top = offset + REVEAL_MARGIN;
        let window_bottom = offset + height - REVEAL_MARGIN;
        let overlap = (bottom.min(window_bottom) - top.max(window_top)).max(0.0);
        let span = bottom - top;

        span > 0.0 && overlap >= span * REVEAL_THRESHOLD
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
        self.latched |= self.latching && in_view;
    }

    pub fn tick(&mut self, delta_ms: f64) {
        if self.in_view || self.latched {
            self.clock = (self.clock + delta_ms.max(0.0)).min(self.delay + REVEAL_DURATION);
        } else {
            self.clock = (self.clock - delta_ms.max(0.0)).max(0.0);
        }
    }

    /// Eased progress from `0.0` hidden to `1.0` at rest.
    pub fn progress(&self) -> f64 {
        Easing::OutQuad.ease((self.clock - self.delay) / REVEAL_DURATION)
    }

    pub fn done(&self) -> bool {
        self.clock - self.delay >= REVEAL_DURATION
    }

    /// Opacity ramping from `0.7` up to `1.0`.
    pub fn opacity(&self) -> f64 {
        lerp(0.7, 1.0, self.progress())
    }

    /// Downward displacement decaying from `20.0` pixels to none.
    pub fn shift(&self) -> f64 {
        20.0 * (1.0 - self.progress())
    }

    /// Scale ramping from `0.98` up to `1.0`.
    pub fn scale(&self) -> f64 {
        lerp(0.98, 1.0, self.progress())
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Reveal::new()
    }
}

/// Latching reveals for a row or grid, each trailing the previous by
/// `step_ms`.
pub fn staggered(count: usize, step_ms: f64) -> Vec<Reveal> {
    (0..count)
        .map(|index| Reveal::delayed(index as f64 * step_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_the_hidden_pose_out_of_view() {
        let mut reveal = Reveal::new();

        reveal.tick(1000.0);

        assert_eq!(reveal.progress(), 0.0);
        assert_eq!(reveal.opacity(), 0.7);
        assert_eq!(reveal.shift(), 20.0);
        assert_eq!(reveal.scale(), 0.98);
    }

    #[test]
    fn advances_to_rest_without_retreating() {
        let mut reveal = Reveal::new();
        reveal.set_in_view(true);

        let mut last = reveal.progress();

        for _ in 0..37 {
            reveal.tick(16.0);

            let progress = reveal.progress();
            assert!(progress > last);
            last = progress;
        }

        reveal.tick(16.0);

        assert!(reveal.done());
        assert_eq!(reveal.progress(), 1.0);
        assert_eq!(reveal.shift(), 0.0);
        assert!((reveal.opacity() - 1.0).abs() < 1e-12);
        assert!((reveal.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn scrolling_back_out_retreats() {
        let mut reveal = Reveal::new();

        reveal.set_in_view(true);
        reveal.tick(REVEAL_DURATION);
        assert_eq!(reveal.progress(), 1.0);

        reveal.set_in_view(false);
        reveal.tick(REVEAL_DURATION / 2.0);
        assert!(reveal.progress() < 1.0);

        reveal.tick(REVEAL_DURATION);
        assert_eq!(reveal.progress(), 0.0);
    }

    #[test]
    fn latched_reveals_never_retreat() {
        let mut reveal = Reveal::once();

        reveal.set_in_view(true);
        reveal.tick(100.0);

        reveal.set_in_view(false);

        let seen = reveal.progress();
        reveal.tick(1000.0);

        assert!(reveal.progress() >= seen);
        assert!(reveal.done());
    }

    #[test]
    fn visibility_respects_margin_and_threshold() {
        // Viewport of 800px, slice spanning 1000..1600.
        assert!(!Reveal::visible(0.0, 800.0, 1000.0, 1600.0));

        // 60 of 600 pixels inside the shrunk window, exactly the threshold.
        assert!(Reveal::visible(310.0, 800.0, 1000.0, 1600.0));
        assert!(!Reveal::visible(309.0, 800.0, 1000.0, 1600.0));

        // Well inside.
        assert!(Reveal::visible(1100.0, 800.0, 1000.0, 1600.0));

        // Empty slices never trigger.
        assert!(!Reveal::visible(1100.0, 800.0, 1200.0, 1200.0));
    }

    #[test]
    fn staggered_reveals_trail_one_another() {
        let mut reveals = staggered(3, STAGGER_LOOSE);

        for reveal in reveals.iter_mut() {
            reveal.set_in_view(true);
            reveal.tick(300.0);
        }

        assert!(reveals[0].progress() > reveals[1].progress());
        assert!(reveals[1].progress() > 0.0);
        assert_eq!(reveals[2].progress(), 0.0);

        for reveal in reveals.iter_mut() {
            reveal.tick(STAGGER_LOOSE * 2.0 + REVEAL_DURATION);
            assert!(reveal.done());
        }
    }
}
