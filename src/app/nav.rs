use shared::{Point, SectionSort, Spring, COLLAPSE_WIDTH, NAV_HEIGHT};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::section::SectionEvent;
use super::ui::{ButtonClass, ButtonElement, ContentElement, UIElement, UIEvent};
use super::{theme, AppContext, Theme};
use crate::draw::{fill_rounded, Icon};

const BUTTON_LINK: usize = 1;
const BUTTON_THEME: usize = 100;
const BUTTON_BURGER: usize = 101;

/// Row height of one link in the collapsed menu.
const MENU_ROW: f64 = 48.0;

/// The fixed translucent bar across the top: brand, section links with the
/// scroll-spy marker, theme toggle and, on narrow viewports, the burger
/// menu.
pub struct NavBar {
    links: Vec<ButtonElement>,
    theme_button: ButtonElement,
    burger: ButtonElement,
    menu: Spring,
    open: bool,
    collapsed: bool,
}

/// Icon for the theme the toggle would switch to.
fn theme_icon(theme: Theme) -> Icon {
    match theme {
        Theme::Dark => Icon::Sun,
        Theme::Light => Icon::Moon,
    }
}

fn link_width(sort: SectionSort) -> f64 {
    sort.label().chars().count() as f64 * 8.5 + 28.0
}

impl NavBar {
    pub fn new(theme: Theme) -> NavBar {
        let links = SectionSort::NAVIGABLE
            .iter()
            .enumerate()
            .map(|(index, sort)| {
                ButtonElement::new(
                    Point(0.0, 0.0),
                    Point(link_width(*sort), 40.0),
                    BUTTON_LINK + index,
                    ButtonClass::Ghost,
                    ContentElement::Label(sort.label().to_string()),
                )
                .with_reach(10.0)
            })
            .collect();

        NavBar {
            links,
            theme_button: ButtonElement::new(
                Point(0.0, 0.0),
                Point(40.0, 40.0),
                BUTTON_THEME,
                ButtonClass::Ghost,
                ContentElement::Icon(theme_icon(theme)),
            ),
            burger: ButtonElement::new(
                Point(0.0, 0.0),
                Point(40.0, 40.0),
                BUTTON_BURGER,
                ButtonClass::Ghost,
                ContentElement::Icon(Icon::Burger),
            ),
            menu: Spring::float(0.0),
            open: false,
            collapsed: false,
        }
    }

    pub fn relayout(&mut self, viewport: Point) {
        self.collapsed = viewport.0 < COLLAPSE_WIDTH;

        if self.collapsed {
            self.burger.set_position(Point(viewport.0 - 64.0, 12.0));
            self.theme_button
                .set_position(Point(viewport.0 - 112.0, 12.0));

            for (index, link) in self.links.iter_mut().enumerate() {
                link.set_position(Point(24.0, NAV_HEIGHT + 10.0 + index as f64 * MENU_ROW));
            }
        } else {
            self.theme_button
                .set_position(Point(viewport.0 - 64.0, 12.0));

            let mut right = viewport.0 - 76.0;

            for link in self.links.iter_mut().rev() {
                right -= link.size().0 + 6.0;
                link.set_position(Point(right, 12.0));
            }

            self.collapse();
        }
    }

    /// Scroll-spy hook: lights the link of the section under the probe.
    pub fn set_active(&mut self, sort: SectionSort) {
        for (index, link) in self.links.iter_mut().enumerate() {
            link.selected = SectionSort::NAVIGABLE[index] == sort;
        }
    }

    pub fn collapse(&mut self) {
        self.open = false;
        self.burger.set_content(ContentElement::Icon(Icon::Burger));
    }

    /// Swaps the toggle icon after a theme change.
    pub fn refresh_theme(&mut self, theme: Theme) {
        self.theme_button
            .set_content(ContentElement::Icon(theme_icon(theme)));
    }

    pub fn tick(&mut self, context: &AppContext) -> Option<SectionEvent> {
        self.menu.set_target(if self.open && self.collapsed {
            1.0
        } else {
            0.0
        });
        self.menu.tick(context.delta_ms);

        let pointer = &context.pointer;
        let mut event = None;

        if let Some(UIEvent::ButtonClick(_)) = self.theme_button.tick(pointer, context.delta_ms) {
            event = Some(SectionEvent::ToggleTheme);
        }

        if self.collapsed {
            if let Some(UIEvent::ButtonClick(_)) = self.burger.tick(pointer, context.delta_ms) {
                self.open = !self.open;
                self.burger.set_content(ContentElement::Icon(if self.open {
                    Icon::Close
                } else {
                    Icon::Burger
                }));
            }
        }

        if !self.collapsed || self.open {
            let mut jumped = false;

            for link in self.links.iter_mut() {
                if let Some(UIEvent::ButtonClick(value)) = link.tick(pointer, context.delta_ms) {
                    if let Some(sort) = SectionSort::NAVIGABLE.get(value - BUTTON_LINK) {
                        event = Some(SectionEvent::Jump(*sort));
                        jumped = true;
                    }
                }
            }

            if jumped {
                self.collapse();
            }
        }

        event
    }

    pub fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue> {
        let theme = &app_context.theme;
        let pointer = &app_context.pointer;
        let viewport = app_context.viewport;

        context.set_fill_style(&theme.veil().into());
        context.fill_rect(0.0, 0.0, viewport.0, NAV_HEIGHT);

        context.set_stroke_style(&theme.border().into());
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(0.0, NAV_HEIGHT - 0.5);
        context.line_to(viewport.0, NAV_HEIGHT - 0.5);
        context.stroke();

        let name = &app_context.content.profile.name;

        context.set_font(&theme::font("700", 20.0));
        context.set_fill_style(&theme.text().into());
        context.set_text_baseline("middle");
        context.fill_text(name, 24.0, NAV_HEIGHT / 2.0 + 1.0)?;

        context.set_fill_style(&theme.accent().into());
        context.fill_text(
            ".",
            24.0 + crate::draw::text_width(context, name),
            NAV_HEIGHT / 2.0 + 1.0,
        )?;
        context.set_text_baseline("alphabetic");

        self.theme_button
            .draw(context, theme, pointer, app_context.frame)?;

        if self.collapsed {
            self.burger.draw(context, theme, pointer, app_context.frame)?;

            let fade = self.menu.value().clamp(0.0, 1.0);

            if fade > 0.01 {
                let panel = self.links.len() as f64 * MENU_ROW + 16.0;

                context.save();
                context.set_global_alpha(fade);
                context.begin_path();
                context.rect(0.0, NAV_HEIGHT, viewport.0, panel * fade);
                context.clip();

                context.set_fill_style(&theme.veil().into());
                context.fill_rect(0.0, NAV_HEIGHT, viewport.0, panel);

                for link in &self.links {
                    link.draw(context, theme, pointer, app_context.frame)?;
                }

                context.restore();
            }
        } else {
            for link in &self.links {
                link.draw(context, theme, pointer, app_context.frame)?;

                if link.selected {
                    context.set_fill_style(&theme.accent().into());
                    fill_rounded(
                        context,
                        link.position() + Point(link.size().0 / 2.0 - 10.0, 42.0),
                        Point(20.0, 3.0),
                        1.5,
                    )?;
                }
            }
        }

        Ok(())
    }
}
