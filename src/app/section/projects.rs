use shared::{staggered, Content, IconSort, Point, Reveal, SectionSort, Spring, STAGGER_LOOSE};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{column, draw_heading, in_view, local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use crate::app::{theme, AppContext};
use crate::draw::{
    draw_badge, draw_cover_image, draw_glow, draw_paragraph, fill_rounded, stroke_rounded, Icon,
};

const BUTTON_LIVE: usize = 20;
const BUTTON_CODE: usize = 30;
const BUTTON_ALL: usize = 40;

const CARD_HEIGHT: f64 = 430.0;
const CARD_GAP: f64 = 24.0;

struct ProjectCard {
    reveal: Reveal,
    lift: Spring,
    corner: Point,
    buttons: Vec<ButtonElement>,
}

/// Portfolio grid. Cards rise towards the pointer and carry their own
/// live-demo and source buttons.
pub struct ProjectsSection {
    cards: Vec<ProjectCard>,
    view_all: ButtonElement,
    card_size: Point,
    grid_top: f64,
}

impl ProjectsSection {
    pub fn new() -> ProjectsSection {
        ProjectsSection {
            cards: Vec::new(),
            view_all: ButtonElement::new(
                Point(0.0, 0.0),
                Point(208.0, 50.0),
                BUTTON_ALL,
                ButtonClass::Outline,
                ContentElement::IconLabel(Icon::Github, "View All Projects".to_string()),
            ),
            card_size: Point(0.0, 0.0),
            grid_top: 170.0,
        }
    }
}

impl Section for ProjectsSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Projects
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let (left, width) = column(viewport);
        let columns = if viewport.0 >= 1024.0 {
            3
        } else if viewport.0 >= 680.0 {
            2
        } else {
            1
        };

        self.card_size = Point(
            (width - (columns - 1) as f64 * CARD_GAP) / columns as f64,
            CARD_HEIGHT,
        );

        if self.cards.len() != content.projects.len() {
            self.cards = staggered(content.projects.len(), STAGGER_LOOSE)
                .into_iter()
                .map(|reveal| ProjectCard {
                    reveal,
                    lift: Spring::float(0.0),
                    corner: Point(0.0, 0.0),
                    buttons: Vec::new(),
                })
                .collect();
        }

        for (index, card) in self.cards.iter_mut().enumerate() {
            card.corner = Point(
                left + (index % columns) as f64 * (self.card_size.0 + CARD_GAP),
                self.grid_top + (index / columns) as f64 * (CARD_HEIGHT + CARD_GAP),
            );

            let button_width = (self.card_size.0 - 52.0) / 2.0;
            let buttons_y = card.corner.1 + CARD_HEIGHT - 64.0;

            card.buttons = vec![
                ButtonElement::new(
                    Point(card.corner.0 + 20.0, buttons_y),
                    Point(button_width, 44.0),
                    BUTTON_LIVE + index,
                    ButtonClass::Solid,
                    ContentElement::IconLabel(Icon::ExternalLink, "Live Demo".to_string()),
                )
                .with_reach(8.0),
                ButtonElement::new(
                    Point(card.corner.0 + 32.0 + button_width, buttons_y),
                    Point(button_width, 44.0),
                    BUTTON_CODE + index,
                    ButtonClass::Outline,
                    ContentElement::IconLabel(Icon::Github, "Code".to_string()),
                )
                .with_reach(8.0),
            ];
        }

        let rows = self.cards.len().div_ceil(columns);
        let view_all_y = self.grid_top + rows as f64 * (CARD_HEIGHT + CARD_GAP) + 16.0;

        self.view_all
            .set_position(Point(viewport.0 / 2.0 - 104.0, view_all_y));

        view_all_y + 50.0 + 110.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let visible = in_view(context, SectionSort::Projects);
        let pointer = local_pointer(context, SectionSort::Projects);
        let mut event = None;

        for card in self.cards.iter_mut() {
            card.reveal.set_in_view(visible);
            card.reveal.tick(context.delta_ms);

            card.lift.set_target(if pointer.over(card.corner, self.card_size) {
                1.0
            } else {
                0.0
            });
            card.lift.tick(context.delta_ms);

            for button in card.buttons.iter_mut() {
                if let Some(UIEvent::ButtonClick(value)) = button.tick(&pointer, context.delta_ms)
                {
                    let projects = &context.content.projects;

                    event = if value >= BUTTON_CODE {
                        projects
                            .get(value - BUTTON_CODE)
                            .map(|project| SectionEvent::OpenUrl(project.repo_url.clone()))
                    } else {
                        projects
                            .get(value - BUTTON_LIVE)
                            .map(|project| SectionEvent::OpenUrl(project.live_url.clone()))
                    };
                }
            }
        }

        if let Some(UIEvent::ButtonClick(_)) = self.view_all.tick(&pointer, context.delta_ms) {
            event = context
                .content
                .profile
                .socials
                .iter()
                .find(|social| social.icon == IconSort::Github)
                .map(|social| SectionEvent::OpenUrl(social.url.clone()));
        }

        event
    }

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let pointer = local_pointer(app_context, SectionSort::Projects);
        let entrance = self
            .cards
            .first()
            .map(|card| card.reveal.progress())
            .unwrap_or_default();

        draw_heading(
            context,
            app_context,
            "Featured Projects",
            Point(app_context.viewport.0 / 2.0, 92.0),
            entrance,
        )?;

        for (card, project) in self.cards.iter().zip(&app_context.content.projects) {
            let center = card.corner + self.card_size * 0.5;
            let lift = card.lift.value();

            context.save();
            context.set_global_alpha(card.reveal.opacity());
            context.translate(center.0, center.1 + card.reveal.shift() - lift * 8.0)?;

            let scale = card.reveal.scale();
            context.scale(scale, scale)?;

            if lift > 0.02 {
                draw_glow(
                    context,
                    Point(0.0, 0.0),
                    self.card_size.0 * 0.75,
                    theme.accent_rgb(),
                    0.16 * lift,
                )?;
            }

            let corner = self.card_size * -0.5;

            context.set_fill_style(&theme.surface().into());
            fill_rounded(context, corner, self.card_size, 20.0)?;
            context.set_stroke_style(&if lift > 0.5 {
                theme.accent().into()
            } else {
                theme.border().into()
            });
            context.set_line_width(1.0);
            stroke_rounded(context, corner, self.card_size, 20.0)?;

            draw_cover_image(
                context,
                app_context.images.ready(&project.image),
                corner + Point(12.0, 12.0),
                Point(self.card_size.0 - 24.0, 150.0),
                12.0,
                &project.title,
                ((30, 41, 59), (59, 130, 246)),
            )?;

            let mut badge_corner = corner + Point(20.0, 178.0);

            for technology in project.technologies.iter().take(4) {
                let advance = draw_badge(
                    context,
                    technology,
                    badge_corner,
                    theme.background(),
                    theme.border(),
                    theme.muted(),
                )?;

                badge_corner.0 += advance + 8.0;
            }

            context.set_font(&theme::font("600", 19.0));
            context.set_fill_style(&theme.text().into());
            context.fill_text(&project.title, corner.0 + 20.0, corner.1 + 248.0)?;

            context.set_font(&theme::font("400", 13.5));
            context.set_fill_style(&theme.muted().into());
            draw_paragraph(
                context,
                &project.description,
                corner + Point(20.0, 274.0),
                self.card_size.0 - 40.0,
                21.0,
            )?;

            // Buttons are positioned in page space; neutralise the card
            // transform so they land where their hit areas are.
            context.translate(-center.0, -center.1)?;

            for button in &card.buttons {
                button.draw(context, theme, &pointer, app_context.frame)?;
            }

            context.restore();
        }

        self.view_all
            .draw(context, theme, &pointer, app_context.frame)?;

        Ok(())
    }
}
