use std::f64::consts::{FRAC_PI_2, PI, TAU};

use shared::Point;
use wasm_bindgen::JsValue;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlImageElement};

use crate::app::theme;

/// Vector glyphs drawn straight onto the canvas.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    ArrowDown,
    ArrowRight,
    Burger,
    Close,
    Sun,
    Moon,
    Calendar,
    Clock,
}

impl From<shared::IconSort> for Icon {
    fn from(sort: shared::IconSort) -> Icon {
        match sort {
            shared::IconSort::Github => Icon::Github,
            shared::IconSort::Linkedin => Icon::Linkedin,
            shared::IconSort::Mail => Icon::Mail,
        }
    }
}

pub fn rounded_path(
    context: &CanvasRenderingContext2d,
    corner: Point,
    size: Point,
    radius: f64,
) -> Result<(), JsValue> {
    let radius = radius.min(size.0 / 2.0).min(size.1 / 2.0);
    let (x, y) = (corner.0, corner.1);
    let (w, h) = (size.0, size.1);

    context.begin_path();
    context.move_to(x + radius, y);
    context.arc_to(x + w, y, x + w, y + h, radius)?;
    context.arc_to(x + w, y + h, x, y + h, radius)?;
    context.arc_to(x, y + h, x, y, radius)?;
    context.arc_to(x, y, x + w, y, radius)?;
    context.close_path();

    Ok(())
}

pub fn fill_rounded(
    context: &CanvasRenderingContext2d,
    corner: Point,
    size: Point,
    radius: f64,
) -> Result<(), JsValue> {
    rounded_path(context, corner, size, radius)?;
    context.fill();

    Ok(())
}

pub fn stroke_rounded(
    context: &CanvasRenderingContext2d,
    corner: Point,
    size: Point,
    radius: f64,
) -> Result<(), JsValue> {
    rounded_path(context, corner, size, radius)?;
    context.stroke();

    Ok(())
}

pub fn text_width(context: &CanvasRenderingContext2d, text: &str) -> f64 {
    context
        .measure_text(text)
        .map(|metrics| metrics.width())
        .unwrap_or_default()
}

/// Word-wraps `text` into `max_width` and returns the baseline below the last line.
pub fn draw_paragraph(
    context: &CanvasRenderingContext2d,
    text: &str,
    corner: Point,
    max_width: f64,
    line_height: f64,
) -> Result<f64, JsValue> {
    let mut line = String::new();
    let mut baseline = corner.1;

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if text_width(context, &candidate) > max_width && !line.is_empty() {
            context.fill_text(&line, corner.0, baseline)?;
            baseline += line_height;
            line = word.to_string();
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() {
        context.fill_text(&line, corner.0, baseline)?;
        baseline += line_height;
    }

    Ok(baseline)
}

/// Pill with a centred label. Returns the pill's width so rows can flow.
pub fn draw_badge(
    context: &CanvasRenderingContext2d,
    label: &str,
    corner: Point,
    fill: &str,
    border: &str,
    colour: &str,
) -> Result<f64, JsValue> {
    context.set_font(&theme::font("500", 13.0));

    let width = text_width(context, label) + 28.0;
    let height = 32.0;

    context.set_fill_style(&fill.into());
    fill_rounded(context, corner, Point(width, height), height / 2.0)?;

    context.set_stroke_style(&border.into());
    context.set_line_width(1.0);
    stroke_rounded(context, corner, Point(width, height), height / 2.0)?;

    context.set_fill_style(&colour.into());
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(label, corner.0 + width / 2.0, corner.1 + height / 2.0 + 1.0)?;
    context.set_text_align("left");
    context.set_text_baseline("alphabetic");

    Ok(width)
}

/// Soft radial glow fading out towards `radius`.
pub fn draw_glow(
    context: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    rgb: (u8, u8, u8),
    alpha: f64,
) -> Result<(), JsValue> {
    let gradient =
        context.create_radial_gradient(center.0, center.1, 0.0, center.0, center.1, radius)?;

    let (r, g, b) = rgb;
    gradient.add_color_stop(0.0, &format!("rgba({}, {}, {}, {})", r, g, b, alpha))?;
    gradient.add_color_stop(0.55, &format!("rgba({}, {}, {}, {})", r, g, b, alpha * 0.4))?;
    gradient.add_color_stop(1.0, &format!("rgba({}, {}, {}, 0)", r, g, b))?;

    context.set_fill_style(&gradient);
    context.begin_path();
    context.arc(center.0, center.1, radius, 0.0, TAU)?;
    context.fill();

    Ok(())
}

pub fn linear_gradient(
    context: &CanvasRenderingContext2d,
    from: Point,
    to: Point,
    stops: &[(f32, &str)],
) -> Result<CanvasGradient, JsValue> {
    let gradient = context.create_linear_gradient(from.0, from.1, to.0, to.1);

    for (offset, colour) in stops {
        gradient.add_color_stop(*offset, colour)?;
    }

    Ok(gradient)
}

/// Cover-fits `image` into the given box, or paints a gradient placeholder
/// with the label's initials while the image has not loaded.
pub fn draw_cover_image(
    context: &CanvasRenderingContext2d,
    image: Option<&HtmlImageElement>,
    corner: Point,
    size: Point,
    radius: f64,
    label: &str,
    rgb: ((u8, u8, u8), (u8, u8, u8)),
) -> Result<(), JsValue> {
    context.save();
    rounded_path(context, corner, size, radius)?;
    context.clip();

    match image {
        Some(image) => {
            let (iw, ih) = (image.natural_width() as f64, image.natural_height() as f64);
            let scale = (size.0 / iw).max(size.1 / ih);
            let (sw, sh) = (size.0 / scale, size.1 / scale);

            context.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                (iw - sw) / 2.0,
                (ih - sh) / 2.0,
                sw,
                sh,
                corner.0,
                corner.1,
                size.0,
                size.1,
            )?;
        }
        None => {
            let ((r0, g0, b0), (r1, g1, b1)) = rgb;
            let gradient = linear_gradient(
                context,
                corner,
                corner + size,
                &[
                    (0.0, &format!("rgb({}, {}, {})", r0, g0, b0)),
                    (1.0, &format!("rgb({}, {}, {})", r1, g1, b1)),
                ],
            )?;

            context.set_fill_style(&gradient);
            context.fill_rect(corner.0, corner.1, size.0, size.1);

            let initials: String = label
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect();

            context.set_fill_style(&"rgba(255, 255, 255, 0.9)".into());
            context.set_font(&theme::font("600", size.1 * 0.25));
            context.set_text_align("center");
            context.set_text_baseline("middle");
            context.fill_text(
                &initials,
                corner.0 + size.0 / 2.0,
                corner.1 + size.1 / 2.0,
            )?;
        }
    }

    context.restore();

    Ok(())
}

pub fn draw_icon(
    context: &CanvasRenderingContext2d,
    icon: Icon,
    center: Point,
    size: f64,
    colour: &str,
) -> Result<(), JsValue> {
    context.save();
    context.translate(center.0, center.1)?;
    context.set_stroke_style(&colour.into());
    context.set_fill_style(&colour.into());
    context.set_line_width((size * 0.09).max(1.5));
    context.set_line_cap("round");
    context.set_line_join("round");

    let s = size / 2.0;

    match icon {
        Icon::Github => {
            let r = s * 0.78;

            context.begin_path();
            context.arc(0.0, s * 0.08, r, 0.0, TAU)?;
            context.fill();

            // Ears poke out of the head circle.
            for flip in [-1.0, 1.0] {
                context.begin_path();
                context.move_to(flip * r * 0.3, -r * 0.75);
                context.line_to(flip * r * 0.75, -r * 1.05);
                context.line_to(flip * r * 0.82, -r * 0.45);
                context.close_path();
                context.fill();
            }
        }
        Icon::Linkedin => {
            stroke_rounded(
                context,
                Point(-s * 0.85, -s * 0.85),
                Point(s * 1.7, s * 1.7),
                s * 0.35,
            )?;

            context.begin_path();
            context.arc(-s * 0.4, -s * 0.38, s * 0.12, 0.0, TAU)?;
            context.fill();

            context.begin_path();
            context.move_to(-s * 0.4, -s * 0.05);
            context.line_to(-s * 0.4, s * 0.45);
            context.move_to(s * 0.02, s * 0.45);
            context.line_to(s * 0.02, -s * 0.05);
            context.move_to(s * 0.02, s * 0.1);
            context.arc_to(s * 0.05, -s * 0.18, s * 0.45, s * 0.0, s * 0.22)?;
            context.line_to(s * 0.45, s * 0.45);
            context.stroke();
        }
        Icon::Mail => {
            stroke_rounded(
                context,
                Point(-s * 0.9, -s * 0.62),
                Point(s * 1.8, s * 1.24),
                s * 0.2,
            )?;

            context.begin_path();
            context.move_to(-s * 0.85, -s * 0.5);
            context.line_to(0.0, s * 0.12);
            context.line_to(s * 0.85, -s * 0.5);
            context.stroke();
        }
        Icon::ExternalLink => {
            context.begin_path();
            context.move_to(s * 0.25, -s * 0.85);
            context.line_to(s * 0.85, -s * 0.85);
            context.line_to(s * 0.85, -s * 0.25);
            context.move_to(s * 0.85, -s * 0.85);
            context.line_to(-s * 0.1, s * 0.1);
            context.stroke();

            context.begin_path();
            context.move_to(s * 0.35, -s * 0.85);
            context.line_to(-s * 0.55, -s * 0.85);
            context.arc_to(-s * 0.85, -s * 0.85, -s * 0.85, -s * 0.55, s * 0.3)?;
            context.line_to(-s * 0.85, s * 0.55);
            context.arc_to(-s * 0.85, s * 0.85, -s * 0.55, s * 0.85, s * 0.3)?;
            context.line_to(s * 0.55, s * 0.85);
            context.arc_to(s * 0.85, s * 0.85, s * 0.85, s * 0.55, s * 0.3)?;
            context.line_to(s * 0.85, -s * 0.35);
            context.stroke();
        }
        Icon::ArrowDown => {
            context.begin_path();
            context.move_to(0.0, -s * 0.8);
            context.line_to(0.0, s * 0.7);
            context.move_to(-s * 0.55, s * 0.15);
            context.line_to(0.0, s * 0.75);
            context.line_to(s * 0.55, s * 0.15);
            context.stroke();
        }
        Icon::ArrowRight => {
            context.begin_path();
            context.move_to(-s * 0.8, 0.0);
            context.line_to(s * 0.7, 0.0);
            context.move_to(s * 0.15, -s * 0.55);
            context.line_to(s * 0.75, 0.0);
            context.line_to(s * 0.15, s * 0.55);
            context.stroke();
        }
        Icon::Burger => {
            context.begin_path();
            for row in [-0.55, 0.0, 0.55] {
                context.move_to(-s * 0.8, s * row);
                context.line_to(s * 0.8, s * row);
            }
            context.stroke();
        }
        Icon::Close => {
            context.begin_path();
            context.move_to(-s * 0.65, -s * 0.65);
            context.line_to(s * 0.65, s * 0.65);
            context.move_to(s * 0.65, -s * 0.65);
            context.line_to(-s * 0.65, s * 0.65);
            context.stroke();
        }
        Icon::Sun => {
            context.begin_path();
            context.arc(0.0, 0.0, s * 0.4, 0.0, TAU)?;
            context.stroke();

            for ray in 0..8 {
                let angle = ray as f64 * PI / 4.0;

                context.begin_path();
                context.move_to(angle.cos() * s * 0.62, angle.sin() * s * 0.62);
                context.line_to(angle.cos() * s * 0.9, angle.sin() * s * 0.9);
                context.stroke();
            }
        }
        Icon::Moon => {
            let r = s * 0.75;

            context.begin_path();
            context.arc(0.0, 0.0, r, -FRAC_PI_2, FRAC_PI_2)?;
            context.arc_with_anticlockwise(-r * 0.35, 0.0, r * 1.06, 1.23, -1.23, true)?;
            context.close_path();
            context.fill();
        }
        Icon::Calendar => {
            stroke_rounded(
                context,
                Point(-s * 0.75, -s * 0.6),
                Point(s * 1.5, s * 1.4),
                s * 0.2,
            )?;

            context.begin_path();
            context.move_to(-s * 0.75, -s * 0.15);
            context.line_to(s * 0.75, -s * 0.15);
            context.move_to(-s * 0.35, -s * 0.85);
            context.line_to(-s * 0.35, -s * 0.45);
            context.move_to(s * 0.35, -s * 0.85);
            context.line_to(s * 0.35, -s * 0.45);
            context.stroke();
        }
        Icon::Clock => {
            context.begin_path();
            context.arc(0.0, 0.0, s * 0.8, 0.0, TAU)?;
            context.stroke();

            context.begin_path();
            context.move_to(0.0, -s * 0.45);
            context.line_to(0.0, 0.0);
            context.line_to(s * 0.35, s * 0.2);
            context.stroke();
        }
    }

    context.restore();

    Ok(())
}
