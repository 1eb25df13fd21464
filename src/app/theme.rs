/// Key under which the picked [`Theme`] persists in local storage.
pub const THEME_KEY: &str = "folio_theme";

/// Colour scheme for the whole page.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Theme {
        match name {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Page backdrop, painted before anything else each frame.
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Dark => "#0f172a",
            Theme::Light => "#f8fafc",
        }
    }

    /// Card and panel fill.
    pub fn surface(&self) -> &'static str {
        match self {
            Theme::Dark => "#1e293b",
            Theme::Light => "#ffffff",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Theme::Dark => "#f1f5f9",
            Theme::Light => "#0f172a",
        }
    }

    pub fn muted(&self) -> &'static str {
        match self {
            Theme::Dark => "#94a3b8",
            Theme::Light => "#475569",
        }
    }

    pub fn border(&self) -> &'static str {
        match self {
            Theme::Dark => "#334155",
            Theme::Light => "#e2e8f0",
        }
    }

    pub fn accent(&self) -> &'static str {
        "#3b82f6"
    }

    pub fn accent_alt(&self) -> &'static str {
        "#8b5cf6"
    }

    /// Translucent bar fill which lets the backdrop glow through.
    pub fn veil(&self) -> &'static str {
        match self {
            Theme::Dark => "rgba(15, 23, 42, 0.85)",
            Theme::Light => "rgba(248, 250, 252, 0.85)",
        }
    }

    /// Accent colour as an `(r, g, b)` triple for gradient stops.
    pub fn accent_rgb(&self) -> (u8, u8, u8) {
        (59, 130, 246)
    }
}

/// Canvas font shorthand at the given size and weight.
pub fn font(weight: &str, size: f64) -> String {
    format!("{} {}px 'Segoe UI', 'Helvetica Neue', Arial, sans-serif", weight, size)
}
