use shared::{Content, Point, Reveal, SectionSort, Spring};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{column, draw_heading, in_view, local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use crate::app::{theme, AppContext};
use crate::draw::{draw_cover_image, draw_glow, draw_paragraph, rounded_path, Icon};

const BUTTON_EMAIL: usize = 1;
const BUTTON_CV: usize = 2;

/// Steepest tilt of the photo card, in degrees.
const TILT_RANGE: f64 = 15.0;

/// Introduction copy beside a workspace photo that tilts towards the
/// pointer. The two halves slide in one after the other.
pub struct AboutSection {
    photo_reveal: Reveal,
    text_reveal: Reveal,
    tilt: (Spring, Spring),
    buttons: Vec<ButtonElement>,
    photo_corner: Point,
    photo_size: Point,
    text_corner: Point,
    text_width: f64,
}

impl AboutSection {
    pub fn new() -> AboutSection {
        AboutSection {
            photo_reveal: Reveal::delayed(200.0),
            text_reveal: Reveal::delayed(400.0),
            tilt: (Spring::tilt(0.0), Spring::tilt(0.0)),
            buttons: Vec::new(),
            photo_corner: Point(0.0, 0.0),
            photo_size: Point(0.0, 0.0),
            text_corner: Point(0.0, 0.0),
            text_width: 0.0,
        }
    }
}

/// Rough paragraph height at 15.5px type wrapped to `width`.
fn estimate_copy_height(paragraphs: &[String], width: f64) -> f64 {
    let per_line = (width / 7.3).max(16.0);

    paragraphs
        .iter()
        .map(|paragraph| (paragraph.chars().count() as f64 / per_line).ceil() * 26.0 + 18.0)
        .sum()
}

impl Section for AboutSection {
    fn sort(&self) -> SectionSort {
        SectionSort::About
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let (left, width) = column(viewport);
        let split = viewport.0 >= 820.0;
        let top = 150.0;

        if split {
            self.photo_size = Point(width * 0.44, 340.0);
            self.photo_corner = Point(left, top);
            self.text_corner = Point(left + self.photo_size.0 + 48.0, top);
            self.text_width = width - self.photo_size.0 - 48.0;
        } else {
            self.photo_size = Point(width, 260.0);
            self.photo_corner = Point(left, top);
            self.text_corner = Point(left, top + self.photo_size.1 + 36.0);
            self.text_width = width;
        }

        let copy_height = estimate_copy_height(&content.profile.about, self.text_width);
        let buttons_y = self.text_corner.1 + copy_height + 16.0;
        let stacked = self.text_width < 360.0;

        self.buttons = vec![
            ButtonElement::new(
                Point(self.text_corner.0, buttons_y),
                Point(156.0, 48.0),
                BUTTON_EMAIL,
                ButtonClass::Solid,
                ContentElement::IconLabel(Icon::Mail, "Email Me".to_string()),
            ),
            ButtonElement::new(
                if stacked {
                    Point(self.text_corner.0, buttons_y + 60.0)
                } else {
                    Point(self.text_corner.0 + 172.0, buttons_y)
                },
                Point(176.0, 48.0),
                BUTTON_CV,
                ButtonClass::Outline,
                ContentElement::IconLabel(Icon::ExternalLink, "Download CV".to_string()),
            ),
        ];

        let content_bottom = (self.photo_corner.1 + self.photo_size.1)
            .max(buttons_y + if stacked { 108.0 } else { 48.0 });

        content_bottom + 110.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let visible = in_view(context, SectionSort::About);

        self.photo_reveal.set_in_view(visible);
        self.text_reveal.set_in_view(visible);
        self.photo_reveal.tick(context.delta_ms);
        self.text_reveal.tick(context.delta_ms);

        let pointer = local_pointer(context, SectionSort::About);
        let center = self.photo_corner + self.photo_size * 0.5;

        if pointer.over(self.photo_corner, self.photo_size) {
            let lean = pointer.location() - center;

            self.tilt
                .0
                .set_target((lean.0 / (self.photo_size.0 / 2.0)).clamp(-1.0, 1.0) * TILT_RANGE);
            self.tilt
                .1
                .set_target((lean.1 / (self.photo_size.1 / 2.0)).clamp(-1.0, 1.0) * TILT_RANGE);
        } else {
            self.tilt.0.set_target(0.0);
            self.tilt.1.set_target(0.0);
        }

        self.tilt.0.tick(context.delta_ms);
        self.tilt.1.tick(context.delta_ms);

        let mut event = None;

        for button in self.buttons.iter_mut() {
            if let Some(UIEvent::ButtonClick(value)) = button.tick(&pointer, context.delta_ms) {
                event = match value {
                    BUTTON_EMAIL => Some(SectionEvent::OpenUrl(format!(
                        "mailto:{}",
                        context.content.profile.email
                    ))),
                    BUTTON_CV => Some(SectionEvent::OpenUrl(
                        context.content.profile.cv_url.clone(),
                    )),
                    _ => None,
                };
            }
        }

        event
    }

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let pointer = local_pointer(app_context, SectionSort::About);

        draw_heading(
            context,
            app_context,
            "About Me",
            Point(app_context.viewport.0 / 2.0, 92.0),
            self.photo_reveal.progress(),
        )?;

        let yaw = self.tilt.0.value();
        let pitch = self.tilt.1.value();
        let center = self.photo_corner + self.photo_size * 0.5;

        context.save();
        context.set_global_alpha(self.photo_reveal.opacity());
        context.translate(
            center.0 + yaw * 0.4,
            center.1 + self.photo_reveal.shift() + pitch * 0.4,
        )?;
        // Flat stand-in for a perspective tilt: a slight roll reads the same
        // at this card size.
        context.rotate((yaw * 0.22).to_radians())?;

        let lean = (yaw.abs() + pitch.abs()) / (TILT_RANGE * 2.0);

        if lean > 0.02 {
            draw_glow(
                context,
                Point(0.0, 0.0),
                self.photo_size.0 * 0.7,
                theme.accent_rgb(),
                0.18 * lean,
            )?;
        }

        context.set_fill_style(&theme.surface().into());
        rounded_path(context, self.photo_size * -0.5, self.photo_size, 20.0)?;
        context.fill();

        draw_cover_image(
            context,
            app_context.images.ready(&app_context.content.profile.workspace_photo),
            self.photo_size * -0.5 + Point(10.0, 10.0),
            self.photo_size - Point(20.0, 20.0),
            14.0,
            "Workspace",
            ((30, 41, 59), (59, 130, 246)),
        )?;

        context.restore();

        context.save();
        context.set_global_alpha(self.text_reveal.opacity());
        context.translate(0.0, self.text_reveal.shift())?;

        context.set_font(&theme::font("400", 15.5));
        context.set_fill_style(&theme.muted().into());

        let mut baseline = self.text_corner.1 + 16.0;

        for paragraph in &app_context.content.profile.about {
            baseline = draw_paragraph(
                context,
                paragraph,
                Point(self.text_corner.0, baseline),
                self.text_width,
                26.0,
            )? + 18.0;
        }

        for button in &self.buttons {
            button.draw(context, theme, &pointer, app_context.frame)?;
        }

        context.restore();

        Ok(())
    }
}
