use shared::{Point, Reveal, SectionSort};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::app::{theme, AppContext, Pointer};
use crate::draw::{fill_rounded, text_width};

/// A request bubbled out of a section or the navigation bar, applied by the
/// app after the whole tick pass.
pub enum SectionEvent {
    Jump(SectionSort),
    OpenUrl(String),
    ToggleTheme,
}

/// One horizontal slice of the page. Sections measure their own height,
/// tick their animations in page space and draw in their own coordinate
/// space, translated so the section's top-left corner is the origin.
pub trait Section {
    fn sort(&self) -> SectionSort;

    /// The section's height at this viewport. Interactive elements are
    /// repositioned here, so the app calls this on every resize.
    fn measure(&mut self, viewport: Point, content: &shared::Content) -> f64;

    fn tick(&mut self, context: &AppContext) -> Option<SectionEvent>;

    fn draw(
        &mut self,
        context: &CanvasRenderingContext2d,
        app_context: &AppContext,
    ) -> Result<(), JsValue>;
}

/// The pointer shifted into a section's coordinate space.
pub fn local_pointer(app_context: &AppContext, sort: SectionSort) -> Pointer {
    let top = app_context.layout.offset_of(sort).unwrap_or_default();

    app_context
        .pointer
        .teleport(Point(0.0, app_context.scroll.offset() - top))
}

/// Whether enough of the section is on screen to run its entrance.
pub fn in_view(app_context: &AppContext, sort: SectionSort) -> bool {
    match app_context.layout.span_of(sort) {
        Some((top, bottom)) => Reveal::visible(
            app_context.scroll.offset(),
            app_context.viewport.1,
            top,
            bottom,
        ),
        None => false,
    }
}

/// Left edge and width of the centred content column.
pub fn column(viewport: Point) -> (f64, f64) {
    let width = (viewport.0 - 48.0).min(1024.0);

    ((viewport.0 - width) / 2.0, width)
}

/// Section heading with the accent bar sweeping in underneath.
pub fn draw_heading(
    context: &CanvasRenderingContext2d,
    app_context: &AppContext,
    title: &str,
    center: Point,
    progress: f64,
) -> Result<(), JsValue> {
    let theme = &app_context.theme;

    context.set_font(&theme::font("700", 32.0));
    context.set_fill_style(&theme.text().into());
    context.set_text_align("center");
    context.fill_text(title, center.0, center.1)?;
    context.set_text_align("left");

    let sweep = 64.0 * progress.clamp(0.0, 1.0);

    if sweep > 0.5 {
        context.set_fill_style(&theme.accent().into());
        fill_rounded(
            context,
            Point(center.0 - sweep / 2.0, center.1 + 16.0),
            Point(sweep, 4.0),
            2.0,
        )?;
    }

    Ok(())
}

/// Meta line with a small icon, such as a date or reading time. Returns the
/// width drawn so entries can flow in a row.
pub fn draw_meta(
    context: &CanvasRenderingContext2d,
    app_context: &AppContext,
    icon: crate::draw::Icon,
    text: &str,
    corner: Point,
) -> Result<f64, JsValue> {
    let theme = &app_context.theme;

    crate::draw::draw_icon(context, icon, corner + Point(7.0, 0.0), 14.0, theme.muted())?;

    context.set_font(&theme::font("400", 13.0));
    context.set_fill_style(&theme.muted().into());
    context.set_text_baseline("middle");
    context.fill_text(text, corner.0 + 20.0, corner.1 + 1.0)?;
    context.set_text_baseline("alphabetic");

    Ok(20.0 + text_width(context, text))
}
