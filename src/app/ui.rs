use shared::{Point, Spring};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{theme, Pointer, Theme};
use crate::draw::{draw_icon, fill_rounded, stroke_rounded, text_width, Icon};

/// Pull factor towards the pointer while a magnetic element is hovered.
const MAGNET_FACTOR: f64 = 0.3;

pub enum UIEvent {
    ButtonClick(usize),
}

pub trait UIElement {
    fn tick(&mut self, _pointer: &Pointer, _delta_ms: f64) -> Option<UIEvent> {
        None
    }
    fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        theme: &Theme,
        pointer: &Pointer,
        frame: u64,
    ) -> Result<(), JsValue>;
}

pub enum ContentElement {
    Label(String),
    Icon(Icon),
    IconLabel(Icon, String),
}

impl ContentElement {
    /// Draws the content centred on the origin in the given colour.
    fn draw_tinted(
        &self,
        context: &CanvasRenderingContext2d,
        colour: &str,
    ) -> Result<(), JsValue> {
        context.set_fill_style(&colour.into());
        context.set_text_baseline("middle");

        match self {
            ContentElement::Label(text) => {
                context.set_text_align("center");
                context.fill_text(text, 0.0, 1.0)?;
            }
            ContentElement::Icon(icon) => {
                draw_icon(context, *icon, Point(0.0, 0.0), 18.0, colour)?;
            }
            ContentElement::IconLabel(icon, text) => {
                let width = 26.0 + text_width(context, text);

                draw_icon(context, *icon, Point(-width / 2.0 + 9.0, 0.0), 18.0, colour)?;
                context.set_text_align("left");
                context.fill_text(text, -width / 2.0 + 26.0, 1.0)?;
            }
        }

        context.set_text_align("left");
        context.set_text_baseline("alphabetic");

        Ok(())
    }
}

impl UIElement for ContentElement {
    fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        theme: &Theme,
        _pointer: &Pointer,
        _frame: u64,
    ) -> Result<(), JsValue> {
        self.draw_tinted(context, theme.text())
    }
}

#[derive(PartialEq)]
pub enum ButtonClass {
    /// Accent-filled call to action.
    Solid,
    /// Bordered secondary action.
    Outline,
    /// Bare label, used for navigation links.
    Ghost,
}

pub struct ButtonElement {
    position: Point,
    size: Point,
    value: usize,
    class: ButtonClass,
    content: ContentElement,
    pub selected: bool,
    reach: f64,
    drift: (Spring, Spring),
    lift: Spring,
}

impl ButtonElement {
    pub fn new(
        position: Point,
        size: Point,
        value: usize,
        class: ButtonClass,
        content: ContentElement,
    ) -> ButtonElement {
        ButtonElement {
            position,
            size,
            value,
            class,
            content,
            selected: false,
            reach: 18.0,
            drift: (Spring::magnetic(0.0), Spring::magnetic(0.0)),
            lift: Spring::float(0.0),
        }
    }

    /// Caps how far the button may drift towards the pointer.
    pub fn with_reach(mut self, reach: f64) -> ButtonElement {
        self.reach = reach;
        self
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_content(&mut self, content: ContentElement) {
        self.content = content;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Point {
        self.size
    }

    fn hovered(&self, pointer: &Pointer) -> bool {
        pointer.over(self.position, self.size)
    }

    fn clicked(&self, pointer: &Pointer) -> bool {
        self.hovered(pointer) && pointer.clicked()
    }
}

impl UIElement for ButtonElement {
    fn tick(&mut self, pointer: &Pointer, delta_ms: f64) -> Option<UIEvent> {
        let center = self.position + self.size * 0.5;

        if self.hovered(pointer) {
            let mut pull = (pointer.location() - center) * MAGNET_FACTOR;

            if pull.length() > self.reach {
                pull = pull * (self.reach / pull.length());
            }

            self.drift.0.set_target(pull.0);
            self.drift.1.set_target(pull.1);
            self.lift.set_target(1.0);
        } else {
            self.drift.0.set_target(0.0);
            self.drift.1.set_target(0.0);
            self.lift.set_target(0.0);
        }

        self.drift.0.tick(delta_ms);
        self.drift.1.tick(delta_ms);
        self.lift.tick(delta_ms);

        if self.clicked(pointer) {
            Some(UIEvent::ButtonClick(self.value))
        } else {
            None
        }
    }

    fn draw(
        &self,
        context: &CanvasRenderingContext2d,
        theme: &Theme,
        pointer: &Pointer,
        _frame: u64,
    ) -> Result<(), JsValue> {
        let center = self.position + self.size * 0.5;
        let hovered = self.hovered(pointer);

        context.save();

        context.translate(center.0 + self.drift.0.value(), center.1 + self.drift.1.value())?;
        let scale = 1.0 + self.lift.value() * 0.04;
        context.scale(scale, scale)?;

        let corner = self.size * -0.5;

        match self.class {
            ButtonClass::Solid => {
                if hovered {
                    context.set_shadow_color("rgba(59, 130, 246, 0.45)");
                    context.set_shadow_blur(24.0 * self.lift.value());
                }

                if self.selected {
                    context.set_fill_style(&theme.accent_alt().into());
                } else if hovered {
                    context.set_fill_style(&"#60a5fa".into());
                } else {
                    context.set_fill_style(&theme.accent().into());
                }

                fill_rounded(context, corner, self.size, self.size.1 / 2.0)?;

                context.set_shadow_blur(0.0);
                context.set_font(&theme::font("600", 15.0));
                self.content.draw_tinted(context, "#ffffff")?;
            }
            ButtonClass::Outline => {
                if hovered {
                    context.set_fill_style(&"rgba(59, 130, 246, 0.12)".into());
                    fill_rounded(context, corner, self.size, self.size.1 / 2.0)?;
                }

                context.set_stroke_style(&theme.accent().into());
                context.set_line_width(1.5);
                stroke_rounded(context, corner, self.size, self.size.1 / 2.0)?;

                context.set_font(&theme::font("600", 15.0));
                self.content.draw_tinted(context, theme.accent())?;
            }
            ButtonClass::Ghost => {
                let colour = if self.selected {
                    theme.accent()
                } else if hovered {
                    theme.text()
                } else {
                    theme.muted()
                };

                context.set_font(&theme::font("500", 14.0));
                self.content.draw_tinted(context, colour)?;
            }
        }

        context.restore();

        Ok(())
    }
}
