use shared::{staggered, Content, Point, Reveal, SectionSort, Spring, STAGGER_LOOSE};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{column, draw_heading, in_view, local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use crate::app::{theme, AppContext};
use crate::draw::{draw_glow, draw_icon, draw_paragraph, fill_rounded, stroke_rounded, Icon};

const BUTTON_SEND: usize = 80;
const BUTTON_CONNECT: usize = 81;

const CARD_GAP: f64 = 24.0;

struct ChannelCard {
    reveal: Reveal,
    glow: Spring,
    corner: Point,
}

/// Ways to get in touch. Each channel card glows in its own colour under
/// the pointer and opens its link when clicked.
pub struct ContactSection {
    cards: Vec<ChannelCard>,
    send: ButtonElement,
    connect: ButtonElement,
    card_size: Point,
    intro_center: Point,
    intro_width: f64,
}

impl ContactSection {
    pub fn new() -> ContactSection {
        ContactSection {
            cards: Vec::new(),
            send: ButtonElement::new(
                Point(0.0, 0.0),
                Point(170.0, 52.0),
                BUTTON_SEND,
                ButtonClass::Solid,
                ContentElement::IconLabel(Icon::Mail, "Send Email".to_string()),
            ),
            connect: ButtonElement::new(
                Point(0.0, 0.0),
                Point(226.0, 52.0),
                BUTTON_CONNECT,
                ButtonClass::Outline,
                ContentElement::IconLabel(Icon::Linkedin, "Connect on LinkedIn".to_string()),
            ),
            card_size: Point(0.0, 0.0),
            intro_center: Point(0.0, 0.0),
            intro_width: 0.0,
        }
    }
}

impl Section for ContactSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Contact
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let (left, width) = column(viewport);
        let split = viewport.0 >= 820.0;

        self.intro_center = Point(viewport.0 / 2.0, 140.0);
        self.intro_width = width.min(620.0);

        if self.cards.len() != content.channels.len() {
            self.cards = staggered(content.channels.len(), STAGGER_LOOSE)
                .into_iter()
                .map(|reveal| ChannelCard {
                    reveal,
                    glow: Spring::float(0.0),
                    corner: Point(0.0, 0.0),
                })
                .collect();
        }

        let cards_top = 224.0;

        if split {
            let count = self.cards.len().max(1);

            self.card_size = Point(
                (width - (count - 1) as f64 * CARD_GAP) / count as f64,
                190.0,
            );

            for (index, card) in self.cards.iter_mut().enumerate() {
                card.corner = Point(
                    left + index as f64 * (self.card_size.0 + CARD_GAP),
                    cards_top,
                );
            }
        } else {
            self.card_size = Point(width, 170.0);

            for (index, card) in self.cards.iter_mut().enumerate() {
                card.corner = Point(
                    left,
                    cards_top + index as f64 * (self.card_size.1 + CARD_GAP),
                );
            }
        }

        let cards_bottom = self
            .cards
            .iter()
            .map(|card| card.corner.1 + self.card_size.1)
            .fold(cards_top, f64::max);

        let buttons_y = cards_bottom + 56.0;
        let stacked = viewport.0 < 460.0;
        let cx = viewport.0 / 2.0;

        if stacked {
            self.send.set_position(Point(cx - 85.0, buttons_y));
            self.connect.set_position(Point(cx - 113.0, buttons_y + 64.0));
        } else {
            self.send.set_position(Point(cx - 206.0, buttons_y));
            self.connect.set_position(Point(cx - 20.0, buttons_y));
        }

        buttons_y + if stacked { 116.0 } else { 52.0 } + 150.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let visible = in_view(context, SectionSort::Contact);
        let pointer = local_pointer(context, SectionSort::Contact);
        let mut event = None;

        for (card, channel) in self.cards.iter_mut().zip(&context.content.channels) {
            card.reveal.set_in_view(visible);
            card.reveal.tick(context.delta_ms);

            let hovered = pointer.over(card.corner, self.card_size);

            card.glow.set_target(if hovered { 1.0 } else { 0.0 });
            card.glow.tick(context.delta_ms);

            if hovered && pointer.clicked() {
                event = Some(SectionEvent::OpenUrl(channel.url.clone()));
            }
        }

        if let Some(UIEvent::ButtonClick(_)) = self.send.tick(&pointer, context.delta_ms) {
            event = Some(SectionEvent::OpenUrl(format!(
                "mailto:{}",
                context.content.profile.email
            )));
        }

        if let Some(UIEvent::ButtonClick(_)) = self.connect.tick(&pointer, context.delta_ms) {
            event = context
                .content
                .channels
                .iter()
                .find(|channel| channel.icon == shared::IconSort::Linkedin)
                .map(|channel| SectionEvent::OpenUrl(channel.url.clone()));
        }

        event
    }

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let pointer = local_pointer(app_context, SectionSort::Contact);
        let entrance = self
            .cards
            .first()
            .map(|card| card.reveal.progress())
            .unwrap_or_default();

        draw_heading(
            context,
            app_context,
            "Get In Touch",
            Point(app_context.viewport.0 / 2.0, 92.0),
            entrance,
        )?;

        context.set_font(&theme::font("400", 15.0));
        context.set_fill_style(&theme.muted().into());
        context.set_text_align("center");
        draw_paragraph(
            context,
            "I'm always open to discussing new opportunities, interesting projects, \
             or just having a great conversation about web development.",
            self.intro_center,
            self.intro_width,
            24.0,
        )?;
        context.set_text_align("left");

        for (card, channel) in self.cards.iter().zip(&app_context.content.channels) {
            let glow = card.glow.value();
            let center = card.corner + self.card_size * 0.5;

            context.save();
            context.set_global_alpha(card.reveal.opacity());
            context.translate(0.0, card.reveal.shift() - glow * 6.0)?;

            if glow > 0.02 {
                draw_glow(
                    context,
                    center,
                    self.card_size.0.min(320.0),
                    channel.glow,
                    0.22 * glow,
                )?;
            }

            context.set_fill_style(&theme.surface().into());
            fill_rounded(context, card.corner, self.card_size, 18.0)?;

            let (r, g, b) = channel.glow;

            context.set_stroke_style(&if glow > 0.5 {
                format!("rgb({}, {}, {})", r, g, b).into()
            } else {
                theme.border().into()
            });
            context.set_line_width(1.0);
            stroke_rounded(context, card.corner, self.card_size, 18.0)?;

            context.set_fill_style(&format!("rgba({}, {}, {}, 0.16)", r, g, b).into());
            context.begin_path();
            context.arc(
                center.0,
                card.corner.1 + 56.0,
                24.0,
                0.0,
                std::f64::consts::TAU,
            )?;
            context.fill();

            draw_icon(
                context,
                channel.icon.into(),
                Point(center.0, card.corner.1 + 56.0),
                22.0,
                &format!("rgb({}, {}, {})", r, g, b),
            )?;

            context.set_font(&theme::font("600", 16.0));
            context.set_fill_style(&theme.text().into());
            context.set_text_align("center");
            context.fill_text(&channel.label, center.0, card.corner.1 + 108.0)?;

            context.set_font(&theme::font("400", 12.5));
            context.set_fill_style(&theme.muted().into());
            context.fill_text(&channel.detail, center.0, card.corner.1 + 134.0)?;
            context.set_text_align("left");

            context.restore();
        }

        self.send.draw(context, theme, &pointer, app_context.frame)?;
        self.connect
            .draw(context, theme, &pointer, app_context.frame)?;

        Ok(())
    }
}
