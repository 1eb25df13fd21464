use shared::{staggered, BlogPost, Content, Point, Reveal, SectionSort, Spring, STAGGER_LOOSE};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{column, draw_heading, draw_meta, in_view, local_pointer, Section, SectionEvent};
use crate::app::ui::{ButtonClass, ButtonElement, ContentElement, UIElement};
use crate::app::{theme, AppContext};
use crate::draw::{
    draw_badge, draw_cover_image, draw_glow, draw_paragraph, fill_rounded, stroke_rounded, Icon,
};

const BUTTON_FEATURED: usize = 50;
const BUTTON_READ: usize = 60;
const BUTTON_ALL_POSTS: usize = 70;

const CARD_HEIGHT: f64 = 390.0;
const CARD_GAP: f64 = 24.0;

struct BlogCard {
    reveal: Reveal,
    lift: Spring,
    corner: Point,
    button: ButtonElement,
}

/// Writing teasers: one featured post rendered wide, the rest in a grid.
/// The cards are previews of content that lives elsewhere, so their buttons
/// animate but stay on the page.
pub struct BlogSection {
    featured_reveal: Reveal,
    featured_lift: Spring,
    featured_corner: Point,
    featured_size: Point,
    featured_split: bool,
    featured_button: ButtonElement,
    cards: Vec<BlogCard>,
    view_all: ButtonElement,
    card_size: Point,
}

impl BlogSection {
    pub fn new() -> BlogSection {
        BlogSection {
            featured_reveal: Reveal::once(),
            featured_lift: Spring::float(0.0),
            featured_corner: Point(0.0, 0.0),
            featured_size: Point(0.0, 0.0),
            featured_split: true,
            featured_button: ButtonElement::new(
                Point(0.0, 0.0),
                Point(190.0, 48.0),
                BUTTON_FEATURED,
                ButtonClass::Solid,
                ContentElement::IconLabel(Icon::ArrowRight, "Read Article".to_string()),
            ),
            cards: Vec::new(),
            view_all: ButtonElement::new(
                Point(0.0, 0.0),
                Point(196.0, 50.0),
                BUTTON_ALL_POSTS,
                ButtonClass::Outline,
                ContentElement::Label("View All Posts".to_string()),
            ),
            card_size: Point(0.0, 0.0),
        }
    }
}

impl Section for BlogSection {
    fn sort(&self) -> SectionSort {
        SectionSort::Blog
    }

    fn measure(&mut self, viewport: Point, content: &Content) -> f64 {
        let (left, width) = column(viewport);

        self.featured_split = viewport.0 >= 820.0;
        self.featured_corner = Point(left, 170.0);
        self.featured_size = Point(width, if self.featured_split { 320.0 } else { 470.0 });

        let text_left = if self.featured_split {
            left + width * 0.42 + 32.0
        } else {
            left + 24.0
        };

        self.featured_button.set_position(Point(
            text_left,
            self.featured_corner.1 + self.featured_size.1 - 76.0,
        ));

        let regulars: Vec<&BlogPost> = content.regular_posts().collect();

        if self.cards.len() != regulars.len() {
            self.cards = staggered(regulars.len(), STAGGER_LOOSE)
                .into_iter()
                .map(|reveal| BlogCard {
                    reveal,
                    lift: Spring::float(0.0),
                    corner: Point(0.0, 0.0),
                    button: ButtonElement::new(
                        Point(0.0, 0.0),
                        Point(124.0, 40.0),
                        BUTTON_READ,
                        ButtonClass::Ghost,
                        ContentElement::IconLabel(Icon::ArrowRight, "Read More".to_string()),
                    ),
                })
                .collect();
        }

        let columns = if viewport.0 >= 820.0 { 2 } else { 1 };

        self.card_size = Point(
            (width - (columns - 1) as f64 * CARD_GAP) / columns as f64,
            CARD_HEIGHT,
        );

        let grid_top = self.featured_corner.1 + self.featured_size.1 + 32.0;

        for (index, card) in self.cards.iter_mut().enumerate() {
            card.corner = Point(
                left + (index % columns) as f64 * (self.card_size.0 + CARD_GAP),
                grid_top + (index / columns) as f64 * (CARD_HEIGHT + CARD_GAP),
            );
            card.button.set_position(Point(
                card.corner.0 + 20.0,
                card.corner.1 + CARD_HEIGHT - 56.0,
            ));
        }

        let rows = self.cards.len().div_ceil(columns);
        let view_all_y = grid_top + rows as f64 * (CARD_HEIGHT + CARD_GAP) + 16.0;

        self.view_all
            .set_position(Point(viewport.0 / 2.0 - 98.0, view_all_y));

        view_all_y + 50.0 + 110.0
    }

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        let visible = in_view(context, SectionSort::Blog);
        let pointer = local_pointer(context, SectionSort::Blog);

        self.featured_reveal.set_in_view(visible);
        self.featured_reveal.tick(context.delta_ms);
        self.featured_lift
            .set_target(if pointer.over(self.featured_corner, self.featured_size) {
                1.0
            } else {
                0.0
            });
        self.featured_lift.tick(context.delta_ms);
        self.featured_button.tick(&pointer, context.delta_ms);

        for card in self.cards.iter_mut() {
            card.reveal.set_in_view(visible);
            card.reveal.tick(context.delta_ms);
            card.lift.set_target(if pointer.over(card.corner, self.card_size) {
                1.0
            } else {
                0.0
            });
            card.lift.tick(context.delta_ms);
            card.button.tick(&pointer, context.delta_ms);
        }

        self.view_all.tick(&pointer, context.delta_ms);

        None
    }

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let pointer = local_pointer(app_context, SectionSort::Blog);

        draw_heading(
            context,
            app_context,
            "Latest Blog Posts",
            Point(app_context.viewport.0 / 2.0, 92.0),
            self.featured_reveal.progress(),
        )?;

        if let Some(post) = app_context.content.featured_post() {
            let lift = self.featured_lift.value();

            context.save();
            context.set_global_alpha(self.featured_reveal.opacity());
            context.translate(0.0, self.featured_reveal.shift() - lift * 6.0)?;

            if lift > 0.02 {
                draw_glow(
                    context,
                    self.featured_corner + self.featured_size * 0.5,
                    self.featured_size.0 * 0.5,
                    theme.accent_rgb(),
                    0.12 * lift,
                )?;
            }

            context.set_fill_style(&theme.surface().into());
            fill_rounded(context, self.featured_corner, self.featured_size, 20.0)?;
            context.set_stroke_style(&theme.border().into());
            context.set_line_width(1.0);
            stroke_rounded(context, self.featured_corner, self.featured_size, 20.0)?;

            let image_size = if self.featured_split {
                Point(self.featured_size.0 * 0.42 - 12.0, self.featured_size.1 - 24.0)
            } else {
                Point(self.featured_size.0 - 24.0, 170.0)
            };

            draw_cover_image(
                context,
                app_context.images.ready(&post.image),
                self.featured_corner + Point(12.0, 12.0),
                image_size,
                14.0,
                &post.title,
                ((30, 41, 59), (139, 92, 246)),
            )?;

            let text_left = if self.featured_split {
                self.featured_corner.0 + self.featured_size.0 * 0.42 + 32.0
            } else {
                self.featured_corner.0 + 24.0
            };
            let text_top = if self.featured_split {
                self.featured_corner.1 + 56.0
            } else {
                self.featured_corner.1 + 214.0
            };
            let text_width = self.featured_corner.0 + self.featured_size.0 - 24.0 - text_left;

            draw_badge(
                context,
                &post.category,
                Point(text_left, text_top - 36.0),
                theme.accent(),
                theme.accent(),
                "#ffffff",
            )?;

            context.set_font(&theme::font("700", 22.0));
            context.set_fill_style(&theme.text().into());
            let after_title = draw_paragraph(
                context,
                &post.title,
                Point(text_left, text_top + 22.0),
                text_width,
                30.0,
            )?;

            context.set_font(&theme::font("400", 14.0));
            context.set_fill_style(&theme.muted().into());
            draw_paragraph(
                context,
                &post.excerpt,
                Point(text_left, after_title + 8.0),
                text_width,
                22.0,
            )?;

            let mut meta = Point(
                text_left,
                self.featured_corner.1 + self.featured_size.1 - 100.0,
            );
            meta.0 += draw_meta(context, app_context, Icon::Calendar, &post.date, meta)? + 18.0;
            draw_meta(context, app_context, Icon::Clock, &post.read_time, meta)?;

            self.featured_button
                .draw(context, theme, &pointer, app_context.frame)?;

            context.restore();
        }

        let regulars: Vec<&BlogPost> = app_context.content.regular_posts().collect();

        for (card, post) in self.cards.iter().zip(regulars) {
            let lift = card.lift.value();

            context.save();
            context.set_global_alpha(card.reveal.opacity());
            context.translate(0.0, card.reveal.shift() - lift * 6.0)?;

            context.set_fill_style(&theme.surface().into());
            fill_rounded(context, card.corner, self.card_size, 18.0)?;
            context.set_stroke_style(&if lift > 0.5 {
                theme.accent().into()
            } else {
                theme.border().into()
            });
            context.set_line_width(1.0);
            stroke_rounded(context, card.corner, self.card_size, 18.0)?;

            draw_cover_image(
                context,
                app_context.images.ready(&post.image),
                card.corner + Point(12.0, 12.0),
                Point(self.card_size.0 - 24.0, 150.0),
                12.0,
                &post.title,
                ((30, 41, 59), (6, 182, 212)),
            )?;

            draw_badge(
                context,
                &post.category,
                card.corner + Point(20.0, 176.0),
                theme.background(),
                theme.border(),
                theme.accent(),
            )?;

            context.set_font(&theme::font("600", 17.0));
            context.set_fill_style(&theme.text().into());
            let after_title = draw_paragraph(
                context,
                &post.title,
                card.corner + Point(20.0, 240.0),
                self.card_size.0 - 40.0,
                24.0,
            )?;

            context.set_font(&theme::font("400", 13.0));
            context.set_fill_style(&theme.muted().into());
            draw_paragraph(
                context,
                &post.excerpt,
                Point(card.corner.0 + 20.0, after_title + 4.0),
                self.card_size.0 - 40.0,
                20.0,
            )?;

            let mut meta = card.corner + Point(20.0, CARD_HEIGHT - 76.0);
            meta.0 += draw_meta(context, app_context, Icon::Calendar, &post.date, meta)? + 18.0;
            draw_meta(context, app_context, Icon::Clock, &post.read_time, meta)?;

            card.button.draw(context, theme, &pointer, app_context.frame)?;

            context.restore();
        }

        self.view_all
            .draw(context, theme, &pointer, app_context.frame)?;

        Ok(())
    }
}
