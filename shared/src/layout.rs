use serde::{Deserialize, Serialize};

/// Height of the fixed navigation bar, in CSS pixels.
pub const NAV_HEIGHT: f64 = 64.0;
/// Pixels left clear above a section heading when jumping to it.
pub const JUMP_MARGIN: f64 = 80.0;
/// Offset added to the scroll position when probing for the active section.
pub const PROBE_MARGIN: f64 = 100.0;
/// Viewport width below which the navigation collapses into a burger.
pub const COLLAPSE_WIDTH: f64 = 768.0;

/// One of the page's sections, in top-to-bottom order.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum SectionSort {
    Home,
    About,
    Skills,
    Projects,
    Blog,
    Contact,
    Footer,
}

impl SectionSort {
    pub const ALL: [SectionSort; 7] = [
        SectionSort::Home,
        SectionSort::About,
        SectionSort::Skills,
        SectionSort::Projects,
        SectionSort::Blog,
        SectionSort::Contact,
        SectionSort::Footer,
    ];

    /// Sections listed in the navigation bar. The footer is reachable only
    /// by scrolling.
    pub const NAVIGABLE: [SectionSort; 6] = [
        SectionSort::Home,
        SectionSort::About,
        SectionSort::Skills,
        SectionSort::Projects,
        SectionSort::Blog,
        SectionSort::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectionSort::Home => "Home",
            SectionSort::About => "About",
            SectionSort::Skills => "Skills",
            SectionSort::Projects => "Projects",
            SectionSort::Blog => "Blog",
            SectionSort::Contact => "Contact",
            SectionSort::Footer => "Footer",
        }
    }
}

/// The measured vertical extent of every section, refreshed whenever the
/// viewport or content changes.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    spans: Vec<(SectionSort, f64, f64)>,
}

impl PageLayout {
    pub fn new() -> PageLayout {
        PageLayout { spans: Vec::new() }
    }

    /// Records that `sort` spans `top..top + height` on the page. Sections
    /// are expected to arrive in page order.
    pub fn place(&mut self, sort: SectionSort, top: f64, height: f64) {
        self.spans.retain(|(placed, ..)| *placed != sort);
        self.spans.push((sort, top, top + height.max(0.0)));
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }

    pub fn span_of(&self, sort: SectionSort) -> Option<(f64, f64)> {
        self.spans
            .iter()
            .find(|(placed, ..)| *placed == sort)
            .map(|(_, top, bottom)| (*top, *bottom))
    }

    pub fn offset_of(&self, sort: SectionSort) -> Option<f64> {
        self.span_of(sort).map(|(top, _)| top)
    }

    /// Where a navigation jump to `sort` should land, leaving
    /// [`JUMP_MARGIN`] clear above the heading.
    pub fn jump_target(&self, sort: SectionSort) -> Option<f64> {
        self.offset_of(sort)
            .map(|top| (top - JUMP_MARGIN).max(0.0))
    }

    /// The section under the probe line at a scroll position, used for
    /// navigation highlighting. Gaps between sections report nothing, so
    /// callers keep their previous answer.
    pub fn active_section(&self, offset: f64) -> Option<SectionSort> {
        let probe = offset + PROBE_MARGIN;

        self.spans
            .iter()
            .find(|(_, top, bottom)| probe >= *top && probe < *bottom)
            .map(|(sort, ..)| *sort)
    }

    /// Total page height, the bottom of the lowest section.
    pub fn height(&self) -> f64 {
        self.spans
            .iter()
            .map(|(.., bottom)| *bottom)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        let mut layout = PageLayout::new();
        let mut top = 0.0;

        for (sort, height) in SectionSort::ALL.iter().zip([
            900.0, 800.0, 700.0, 1100.0, 900.0, 600.0, 200.0,
        ]) {
            layout.place(*sort, top, height);
            top += height;
        }

        layout
    }

    #[test]
    fn jump_targets_sit_above_their_headings() {
        let layout = layout();

        assert_eq!(layout.jump_target(SectionSort::About), Some(820.0));
        assert_eq!(layout.jump_target(SectionSort::Skills), Some(1620.0));

        // The top of the page never scrolls to a negative offset.
        assert_eq!(layout.jump_target(SectionSort::Home), Some(0.0));
    }

    #[test]
    fn the_probe_line_selects_the_active_section() {
        let layout = layout();

        assert_eq!(layout.active_section(0.0), Some(SectionSort::Home));

        // 100px shy of the boundary, the probe already crosses it.
        assert_eq!(layout.active_section(800.0), Some(SectionSort::About));
        assert_eq!(layout.active_section(799.0), Some(SectionSort::Home));

        assert_eq!(layout.active_section(5000.0), Some(SectionSort::Footer));
    }

    #[test]
    fn probes_past_the_page_end_report_nothing() {
        let layout = layout();

        assert_eq!(layout.height(), 5200.0);
        assert_eq!(layout.active_section(5200.0), None);
    }

    #[test]
    fn replacing_a_span_keeps_one_entry_per_section() {
        let mut layout = layout();

        layout.place(SectionSort::About, 950.0, 850.0);

        assert_eq!(layout.offset_of(SectionSort::About), Some(950.0));
        assert_eq!(layout.height(), 5200.0);
    }
}
