use std::f64::consts::TAU;

use shared::{Point, Spring};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{AppContext, Theme};

/// Seconds for one full bob of a floating blob.
const FLOAT_PERIOD: f64 = 9.0;

struct Blob {
    /// Anchor as a fraction of the viewport.
    anchor: Point,
    radius: f64,
    rgb: (u8, u8, u8),
    /// Vertical shift in pixels over the full page scroll.
    drift: f64,
    /// Total rotation in radians over the full page scroll.
    spin: f64,
    phase: f64,
}

const BLOBS: [Blob; 3] = [
    Blob {
        anchor: Point(0.18, 0.25),
        radius: 320.0,
        rgb: (59, 130, 246),
        drift: -200.0,
        spin: TAU,
        phase: 0.0,
    },
    Blob {
        anchor: Point(0.85, 0.45),
        radius: 260.0,
        rgb: (139, 92, 246),
        drift: -100.0,
        spin: 0.0,
        phase: 2.1,
    },
    Blob {
        anchor: Point(0.5, 0.85),
        radius: 380.0,
        rgb: (16, 185, 129),
        drift: -300.0,
        spin: -TAU / 2.0,
        phase: 4.2,
    },
];

/// Fixed backdrop behind every section: three drifting gradient blobs and a
/// pair of glows that chase the pointer.
pub struct Backdrop {
    clock: f64,
    chase: (Spring, Spring),
    fade: Spring,
}

impl Backdrop {
    pub fn new() -> Backdrop {
        Backdrop {
            clock: 0.0,
            chase: (Spring::float(0.0), Spring::float(0.0)),
            fade: Spring::float(0.0),
        }
    }

    pub fn tick(&mut self, context: &AppContext) {
        self.clock += context.delta_ms;

        let location = context.pointer.location();

        self.chase.0.set_target(location.0);
        self.chase.1.set_target(location.1);
        self.fade
            .set_target(if context.pointer.on_page { 1.0 } else { 0.0 });

        self.chase.0.tick(context.delta_ms);
        self.chase.1.tick(context.delta_ms);
        self.fade.tick(context.delta_ms);
    }

    pub fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let progress = app_context.scroll.progress();
        let seconds = self.clock / 1000.0;
        let alpha = match app_context.theme {
            Theme::Dark => 0.16,
            Theme::Light => 0.1,
        };

        for blob in &BLOBS {
            let bob = ((seconds / FLOAT_PERIOD * TAU) + blob.phase).sin() * 18.0;
            let center = Point(
                blob.anchor.0 * app_context.viewport.0,
                blob.anchor.1 * app_context.viewport.1 + progress * blob.drift + bob,
            );

            context.save();
            context.translate(center.0, center.1)?;
            context.rotate(progress * blob.spin)?;

            // Rotation only reads on a non-circular shape.
            context.scale(1.0, 0.78)?;
            draw_soft_disc(context, blob.radius, blob.rgb, alpha)?;

            context.restore();
        }

        let fade = self.fade.value().clamp(0.0, 1.0);

        if fade > 0.01 {
            let chase = Point(self.chase.0.value(), self.chase.1.value());

            for (offset, radius, rgb) in [
                (Point(-60.0, -40.0), 220.0, (59, 130, 246)),
                (Point(80.0, 60.0), 180.0, (139, 92, 246)),
            ] {
                context.save();
                context.translate(chase.0 + offset.0, chase.1 + offset.1)?;
                draw_soft_disc(context, radius, rgb, alpha * 0.75 * fade)?;
                context.restore();
            }
        }

        Ok(())
    }
}

fn draw_soft_disc(
    context: &CanvasRenderingContext2d,
    radius: f64,
    rgb: (u8, u8, u8),
    alpha: f64,
) -> Result<(), JsValue> {
    let gradient = context.create_radial_gradient(0.0, 0.0, 0.0, 0.0, 0.0, radius)?;
    let (r, g, b) = rgb;

    gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, {})", r, g, b, alpha))?;
    gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, 0)", r, g, b))?;

    context.set_fill_style(&gradient);
    context.begin_path();
    context.arc(0.0, 0.0, radius, 0.0, TAU)?;
    context.fill();

    Ok(())
}

impl Default for Backdrop {
    fn default() -> Backdrop {
        Backdrop::new()
    }
}
