use shared::{Content, Point, SectionSort};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use crate::app::{theme, AppContext};

const BUTTON_SOCIAL: usize = 90;

/// Closing strip with the copyright line and social links.
pub struct FooterSection {
    socials: Vec<ButtonElement>,
}

impl FooterSection {
    pub fn new() -> FooterSection {
        FooterSection {
            socials: Vec::new(),
        }
    }
}

impl Section for FooterSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Footer
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let cx = viewport.0 / 2.0;
        let count = content.profile.socials.len();
        let start = cx - (count as f64 * 60.0 - 16.0) / 2.0;

        self.socials = content
            .profile
            .socials
            .iter()
            .enumerate()
            .map(|(index, social)| {
                ButtonElement::new(
                    Point(start + index as f64 * 60.0, 92.0),
                    Point(44.0, 44.0),
                    BUTTON_SOCIAL + index,
                    ButtonClass::Ghost,
                    ContentElement::Icon(social.icon.into()),
                )
                .with_reach(10.0)
            })
            .collect();

        200.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let pointer = local_pointer(context, SectionSort::Footer);
        let mut event = None;

        for button in self.socials.iter_mut() {
            if let Some(UIEvent::ButtonClick(value)) = button.tick(&pointer, context.delta_ms) {
                event = context
                    .content
                    .profile
                    .socials
                    .get(value - BUTTON_SOCIAL)
                    .map(|social| SectionEvent::OpenUrl(social.url.clone()));
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
        let cx = app_context.viewport.0 / 2.0;
        let pointer = local_pointer(app_context, SectionSort::Footer);

        context.set_stroke_style(&theme.border().into());
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(24.0, 0.5);
        context.line_to(app_context.viewport.0 - 24.0, 0.5);
        context.stroke();

        context.set_font(&theme::font("400", 13.5));
        context.set_fill_style(&theme.muted().into());
        context.set_text_align("center");
        context.fill_text(
            &format!(
                "© 2024 {}. All rights reserved.",
                app_context.content.profile.name
            ),
            cx,
            64.0,
        )?;
        context.set_text_align("left");

        for button in &self.socials {
            button.draw(context, theme, &pointer, app_context.frame)?;
        }

        Ok(())
    }
}
