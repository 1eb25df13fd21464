use std::f64::consts::TAU;

use shared::{staggered, Content, Point, Reveal, SectionSort, STAGGER_TIGHT};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{column, draw_heading, in_view, Section, SectionEvent};
use crate::app::{theme, AppContext};
use crate::draw::{draw_badge, draw_paragraph, fill_rounded, stroke_rounded, text_width};

/// Milliseconds each badge stays highlighted before the cycle moves on.
const HIGHLIGHT_CYCLE: f64 = 5000.0;

const BADGE_ROW: f64 = 44.0;

struct InfoCard {
    title: &'static str,
    caption: &'static str,
    phase: f64,
}

const INFO_CARDS: [InfoCard; 2] = [
    InfoCard {
        title: "Frontend Development",
        caption: "Building responsive, accessible interfaces with modern component patterns.",
        phase: 0.0,
    },
    InfoCard {
        title: "Backend & Data",
        caption: "Designing APIs and data models that stay fast as products grow.",
        phase: 2.4,
    },
];

/// Badge rows for current and upcoming skills. Badges pop in one by one and
/// a slow cycle keeps one of them lit.
pub struct SkillsSection {
    reveals: Vec<Reveal>,
    clock: f64,
    left: f64,
    width: f64,
    in_use_label_y: f64,
    learning_label_y: f64,
    cards_y: f64,
    card_size: Point,
    stacked_cards: bool,
}

impl SkillsSection {
    pub fn new() -> SkillsSection {
        SkillsSection {
            reveals: Vec::new(),
            clock: 0.0,
            left: 0.0,
            width: 0.0,
            in_use_label_y: 0.0,
            learning_label_y: 0.0,
            cards_y: 0.0,
            card_size: Point(0.0, 0.0),
            stacked_cards: false,
        }
    }
}

/// Badge rows needed for `labels` flowing into `width`, estimated from the
/// label lengths. The draw pass wraps on real text metrics; this only has
/// to be close enough for the section height.
fn estimate_rows(labels: &[String], width: f64) -> f64 {
    let mut rows = 1.0;
    let mut x = 0.0;

    for label in labels {
        let badge = label.chars().count() as f64 * 7.8 + 40.0;

        if x + badge > width && x > 0.0 {
            rows += 1.0;
            x = 0.0;
        }

        x += badge;
    }

    rows
}

impl Section for SkillsSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Skills
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let (left, width) = column(viewport);

        self.left = left;
        self.width = width;

        let total = content.skills.in_use.len() + content.skills.learning.len();

        if self.reveals.len() != total {
            self.reveals = staggered(total, STAGGER_TIGHT);
        }

        self.in_use_label_y = 172.0;

        let in_use_rows = estimate_rows(&content.skills.in_use, width);

        self.learning_label_y = self.in_use_label_y + 36.0 + in_use_rows * BADGE_ROW + 40.0;

        let learning_rows = estimate_rows(&content.skills.learning, width);

        self.cards_y = self.learning_label_y + 36.0 + learning_rows * BADGE_ROW + 56.0;
        self.stacked_cards = viewport.0 < 760.0;

        if self.stacked_cards {
            self.card_size = Point(width, 150.0);
        } else {
            self.card_size = Point((width.min(760.0) - 24.0) / 2.0, 150.0);
        }

        let cards_height = if self.stacked_cards {
            self.card_size.1 * 2.0 + 24.0
        } else {
            self.card_size.1
        };

        self.cards_y + cards_height + 120.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let visible = in_view(context, SectionSort::Skills);

        for reveal in self.reveals.iter_mut() {
            reveal.set_in_view(visible);
            reveal.tick(context.delta_ms);
        }

        self.clock += context.delta_ms;

        None
    }

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let skills = &app_context.content.skills;
        let entrance = self
            .reveals
            .first()
            .map(Reveal::progress)
            .unwrap_or_default();

        draw_heading(
            context,
            app_context,
            "Skills & Technologies",
            Point(app_context.viewport.0 / 2.0, 92.0),
            entrance,
        )?;

        let highlight = if skills.in_use.is_empty() {
            None
        } else {
            Some((self.clock / HIGHLIGHT_CYCLE) as usize % skills.in_use.len())
        };

        let mut reveal_index = 0;

        for (label, badges, lit) in [
            ("Currently Using", &skills.in_use, highlight),
            ("Learning & Exploring", &skills.learning, None),
        ] {
            let label_y = if reveal_index == 0 {
                self.in_use_label_y
            } else {
                self.learning_label_y
            };

            context.set_font(&theme::font("600", 18.0));
            context.set_fill_style(&theme.text().into());
            context.fill_text(label, self.left, label_y)?;

            let mut corner = Point(self.left, label_y + 20.0);

            for (index, badge) in badges.iter().enumerate() {
                context.set_font(&theme::font("500", 13.0));

                let badge_width = text_width(context, badge) + 28.0;

                if corner.0 + badge_width > self.left + self.width && corner.0 > self.left {
                    corner = Point(self.left, corner.1 + BADGE_ROW);
                }

                let reveal = &self.reveals[reveal_index];

                context.save();
                context.set_global_alpha(reveal.opacity() * reveal.progress().max(0.2));
                context.translate(0.0, reveal.shift() * 0.6)?;

                if lit == Some(index) {
                    draw_badge(context, badge, corner, theme.accent(), theme.accent(), "#ffffff")?;
                } else {
                    draw_badge(
                        context,
                        badge,
                        corner,
                        theme.surface(),
                        theme.border(),
                        theme.text(),
                    )?;
                }

                context.restore();

                corner.0 += badge_width + 12.0;
                reveal_index += 1;
            }
        }

        let start = if self.stacked_cards {
            self.left
        } else {
            app_context.viewport.0 / 2.0 - (self.card_size.0 + 12.0)
        };

        for (index, card) in INFO_CARDS.iter().enumerate() {
            let bob = ((app_context.frame as f64 / 150.0) * TAU + card.phase).sin() * 7.0;
            let corner = if self.stacked_cards {
                Point(start, self.cards_y + index as f64 * (self.card_size.1 + 24.0) + bob)
            } else {
                Point(
                    start + index as f64 * (self.card_size.0 + 24.0),
                    self.cards_y + bob,
                )
            };

            context.save();
            context.set_global_alpha(entrance.max(0.2));

            context.set_fill_style(&theme.surface().into());
            fill_rounded(context, corner, self.card_size, 18.0)?;
            context.set_stroke_style(&theme.border().into());
            context.set_line_width(1.0);
            stroke_rounded(context, corner, self.card_size, 18.0)?;

            context.set_fill_style(&theme.accent().into());
            fill_rounded(context, corner + Point(24.0, 30.0), Point(28.0, 4.0), 2.0)?;

            context.set_font(&theme::font("600", 17.0));
            context.set_fill_style(&theme.text().into());
            context.fill_text(card.title, corner.0 + 24.0, corner.1 + 62.0)?;

            context.set_font(&theme::font("400", 13.0));
            context.set_fill_style(&theme.muted().into());
            draw_paragraph(
                context,
                card.caption,
                corner + Point(24.0, 88.0),
                self.card_size.0 - 48.0,
                20.0,
            )?;

            context.restore();
        }

        Ok(())
    }
}
