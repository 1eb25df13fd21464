use shared::{ParticleEmitter, Point, Spring};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::AppContext;
use crate::draw::draw_glow;

/// Radius of the soft halo trailing the pointer.
const GLOW_RADIUS: f64 = 160.0;

/// Pointer-chasing overlay: a burst emitter plus a lagging accent glow.
pub struct ParticleLayer {
    emitter: ParticleEmitter,
    glow: (Spring, Spring),
    fade: Spring,
}

impl ParticleLayer {
    pub fn new(seed: u64) -> ParticleLayer {
        ParticleLayer {
            emitter: ParticleEmitter::new(seed),
            glow: (Spring::glow(0.0), Spring::glow(0.0)),
            fade: Spring::glow(0.0),
        }
    }

    pub fn tick(&mut self, context: &AppContext) {
        let location = context.pointer.location();

        // The trail follows movement; a resting pointer spawns nothing.
        self.emitter.tick(
            context.delta_ms,
            location,
            context.pointer.on_page && context.pointer.moved(),
        );

        self.glow.0.set_target(location.0);
        self.glow.1.set_target(location.1);
        self.fade
            .set_target(if context.pointer.on_page { 1.0 } else { 0.0 });

        self.glow.0.tick(context.delta_ms);
        self.glow.1.tick(context.delta_ms);
        self.fade.tick(context.delta_ms);
    }

    pub fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let fade = self.fade.value().clamp(0.0, 1.0);

        if fade > 0.01 {
            draw_glow(
                context,
                Point(self.glow.0.value(), self.glow.1.value()),
                GLOW_RADIUS,
                app_context.theme.accent_rgb(),
                0.12 * fade,
            )?;
        }

        for particle in self.emitter.particles() {
            context.save();
            context.set_global_alpha(particle.opacity());
            context.set_fill_style(&particle.sort.css().into());
            context.begin_path();
            context.arc(
                particle.position.0,
                particle.position.1,
                particle.size / 2.0,
                0.0,
                std::f64::consts::TAU,
            )?;
            context.fill();
            context.restore();
        }

        Ok(())
    }
}
