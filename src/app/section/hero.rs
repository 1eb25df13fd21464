use std::f64::consts::{PI, TAU};

use shared::{map_range, Content, Point, Reveal, SectionSort};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{in_view, local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use crate::app::{theme, AppContext};
use crate::draw::{draw_cover_image, draw_glow, linear_gradient, text_width, Icon};

const BUTTON_VIEW_WORK: usize = 1;
const BUTTON_GET_IN_TOUCH: usize = 2;
const BUTTON_SCROLL_HINT: usize = 3;
const BUTTON_SOCIAL: usize = 10;

/// Full-viewport opening slice with the avatar, headline and primary calls
/// to action. Drifts upward and dims as the page scrolls away from it.
pub struct HeroSection {
    reveal: Reveal,
    buttons: Vec<ButtonElement>,
    socials: Vec<ButtonElement>,
    hint: ButtonElement,
    avatar_center: Point,
    headline_y: f64,
    tagline_y: f64,
    height: f64,
}

impl HeroSection {
    pub fn new() -> HeroSection {
        HeroSection {
            reveal: Reveal::once(),
            buttons: Vec::new(),
            socials: Vec::new(),
            hint: ButtonElement::new(
                Point(0.0, 0.0),
                Point(44.0, 44.0),
                BUTTON_SCROLL_HINT,
                ButtonClass::Ghost,
                ContentElement::Icon(Icon::ArrowDown),
            ),
            avatar_center: Point(0.0, 0.0),
            headline_y: 0.0,
            tagline_y: 0.0,
            height: 0.0,
        }
    }

    /// Upward drift and fade over the first stretch of the page.
    fn parallax(app_context: &AppContext) -> (f64, f64) {
        let progress = app_context.scroll.progress();

        (
            map_range(progress, (0.0, 0.3), (0.0, -100.0)),
            map_range(progress, (0.0, 0.3), (1.0, 0.8)),
        )
    }
}

impl Section for HeroSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Home
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let height = viewport.1.max(640.0);
        let cx = viewport.0 / 2.0;
        let stacked = viewport.0 < 460.0;

        self.height = height;
        self.avatar_center = Point(cx, height * 0.28);
        self.headline_y = self.avatar_center.1 + 128.0;
        self.tagline_y = self.headline_y + 42.0;

        let buttons_y = self.tagline_y + 48.0;

        self.buttons = vec![
            ButtonElement::new(
                if stacked {
                    Point(cx - 90.0, buttons_y)
                } else {
                    Point(cx - 190.0, buttons_y)
                },
                Point(180.0, 52.0),
                BUTTON_VIEW_WORK,
                ButtonClass::Solid,
                ContentElement::Label("View My Work".to_string()),
            ),
            ButtonElement::new(
                if stacked {
                    Point(cx - 90.0, buttons_y + 64.0)
                } else {
                    Point(cx + 10.0, buttons_y)
                },
                Point(180.0, 52.0),
                BUTTON_GET_IN_TOUCH,
                ButtonClass::Outline,
                ContentElement::Label("Get In Touch".to_string()),
            ),
        ];

        let socials_y = if stacked {
            buttons_y + 144.0
        } else {
            buttons_y + 84.0
        };
        let count = content.profile.socials.len();
        let start = cx - (count as f64 * 60.0 - 16.0) / 2.0;

        self.socials = content
            .profile
            .socials
            .iter()
            .enumerate()
            .map(|(index, social)| {
                ButtonElement::new(
                    Point(start + index as f64 * 60.0, socials_y),
                    Point(44.0, 44.0),
                    BUTTON_SOCIAL + index,
                    ButtonClass::Ghost,
                    ContentElement::Icon(social.icon.into()),
                )
                .with_reach(10.0)
            })
            .collect();

        self.hint.set_position(Point(cx - 22.0, height - 76.0));

        height
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        self.reveal.set_in_view(in_view(context, SectionSort::Home));
        self.reveal.tick(context.delta_ms);

        let (shift, _) = HeroSection::parallax(context);
        let pointer = local_pointer(context, SectionSort::Home)
            .teleport(Point(0.0, -(shift + self.reveal.shift())));

        let mut event = None;

        for button in self
            .buttons
            .iter_mut()
            .chain(self.socials.iter_mut())
            .chain(std::iter::once(&mut self.hint))
        {
            if let Some(UIEvent::ButtonClick(value)) = button.tick(&pointer, context.delta_ms) {
                event = match value {
                    BUTTON_VIEW_WORK => Some(SectionEvent::Jump(SectionSort::Projects)),
                    BUTTON_GET_IN_TOUCH => Some(SectionEvent::Jump(SectionSort::Contact)),
                    BUTTON_SCROLL_HINT => Some(SectionEvent::Jump(SectionSort::About)),
                    value => context
                        .content
                        .profile
                        .socials
                        .get(value - BUTTON_SOCIAL)
                        .map(|social| SectionEvent::OpenUrl(social.url.clone())),
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
        let profile = &app_context.content.profile;
        let (shift, fade) = HeroSection::parallax(app_context);
        let pointer = local_pointer(app_context, SectionSort::Home)
            .teleport(Point(0.0, -(shift + self.reveal.shift())));

        context.save();
        context.translate(0.0, shift + self.reveal.shift())?;
        context.set_global_alpha(fade * self.reveal.opacity());

        draw_glow(context, self.avatar_center, 150.0, theme.accent_rgb(), 0.3)?;

        // The ring and portrait spin in together during the entrance.
        let spin = (1.0 - self.reveal.progress()) * -PI;

        context.save();
        context.translate(self.avatar_center.0, self.avatar_center.1)?;
        context.rotate(spin)?;
        context.translate(-self.avatar_center.0, -self.avatar_center.1)?;

        let ring = linear_gradient(
            context,
            self.avatar_center - Point(78.0, 78.0),
            self.avatar_center + Point(78.0, 78.0),
            &[(0.0, theme.accent()), (1.0, theme.accent_alt())],
        )?;

        context.set_stroke_style(&ring);
        context.set_line_width(4.0);
        context.begin_path();
        context.arc(self.avatar_center.0, self.avatar_center.1, 78.0, 0.0, TAU)?;
        context.stroke();

        draw_cover_image(
            context,
            app_context.images.ready(&profile.portrait),
            self.avatar_center - Point(70.0, 70.0),
            Point(140.0, 140.0),
            70.0,
            &profile.name,
            ((59, 130, 246), (139, 92, 246)),
        )?;

        context.restore();

        if (pointer.location() - self.avatar_center).length() < 78.0 {
            let pulse = (app_context.frame % 60) as f64 / 60.0;

            context.set_global_alpha(fade * self.reveal.opacity() * (1.0 - pulse) * 0.6);
            context.set_stroke_style(&theme.accent().into());
            context.set_line_width(2.0);
            context.begin_path();
            context.arc(
                self.avatar_center.0,
                self.avatar_center.1,
                80.0 + pulse * 26.0,
                0.0,
                TAU,
            )?;
            context.stroke();
            context.set_global_alpha(fade * self.reveal.opacity());
        }

        let cx = app_context.viewport.0 / 2.0;
        let headline_size = if app_context.viewport.0 < 640.0 { 34.0 } else { 46.0 };

        context.set_font(&theme::font("700", headline_size));

        let lead = "Hi, I'm ";
        let lead_width = text_width(context, lead);
        let name_width = text_width(context, &profile.name);
        let start = cx - (lead_width + name_width) / 2.0;

        context.set_fill_style(&theme.text().into());
        context.fill_text(lead, start, self.headline_y)?;

        let name_tint = linear_gradient(
            context,
            Point(start + lead_width, self.headline_y),
            Point(start + lead_width + name_width, self.headline_y),
            &[(0.0, theme.accent()), (1.0, theme.accent_alt())],
        )?;

        context.set_fill_style(&name_tint);
        context.fill_text(&profile.name, start + lead_width, self.headline_y)?;

        context.set_font(&theme::font("400", 20.0));
        context.set_fill_style(&theme.muted().into());
        context.set_text_align("center");
        context.fill_text(&profile.tagline, cx, self.tagline_y)?;
        context.set_text_align("left");

        for button in self.buttons.iter().chain(self.socials.iter()) {
            button.draw(context, theme, &pointer, app_context.frame)?;
        }

        // Bouncing scroll cue. The hit area stays put while the glyph bobs.
        let bounce = ((app_context.frame % 90) as f64 / 90.0 * TAU).sin() * 6.0;

        context.save();
        context.translate(0.0, bounce)?;
        self.hint.draw(context, theme, &pointer, app_context.frame)?;
        context.restore();

        context.restore();

        Ok(())
    }
}
