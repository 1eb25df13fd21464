use serde::{Deserialize, Serialize};
use shared::{Content, ContentError, Message, PageLayout, Point, ScrollDriver, SectionSort};
use wasm_bindgen::JsValue;
use web_sys::{
    console, CanvasRenderingContext2d, DomRectReadOnly, KeyboardEvent, MouseEvent, TouchEvent,
    WheelEvent,
};

use super::section::{
    AboutSection, BlogSection, ContactSection, FooterSection, HeroSection, ProjectsSection,
    Section, SectionEvent, SkillsSection,
};
use super::theme::THEME_KEY;
use super::{Backdrop, NavBar, ParticleLayer, Pointer, Theme};
use crate::{assets::ImageBank, window};

/// Errors concerning the [`App`].
#[derive(Debug, Serialize, Deserialize)]
pub struct AppError(String);

impl From<ContentError> for AppError {
    fn from(content_error: ContentError) -> Self {
        AppError(format!("ContentError: {0}", content_error.0))
    }
}

/// Finger travel below which a touch counts as a tap.
const TAP_SLOP: f64 = 8.0;

pub struct AppContext {
    pub pointer: Pointer,
    pub frame: u64,
    pub delta_ms: f64,
    pub viewport: Point,
    pub dpr: f64,
    pub scroll: ScrollDriver,
    pub layout: PageLayout,
    pub content: Content,
    pub theme: Theme,
    pub images: ImageBank,
}

pub struct App {
    app_context: AppContext,
    sections: Vec<Box<dyn Section>>,
    nav: NavBar,
    backdrop: Backdrop,
    trail: ParticleLayer,
    touch_track: Option<Point>,
    touch_travel: f64,
    tap_pending: bool,
}

impl App {
    pub fn new() -> App {
        let theme = App::kv_get(THEME_KEY)
            .map(|name| Theme::from_name(&name))
            .unwrap_or_default();
        let content = Content::catalog();
        let mut images = ImageBank::new();

        if let Err(err) = images.preload(&content) {
            console::warn_1(&err);
        }

        let seed = window()
            .performance()
            .map(|performance| performance.now().to_bits())
            .unwrap_or_default();

        App {
            app_context: AppContext {
                pointer: Pointer::new(),
                frame: 0,
                delta_ms: 0.0,
                viewport: Point(0.0, 0.0),
                dpr: 1.0,
                scroll: ScrollDriver::new(),
                layout: PageLayout::new(),
                content,
                theme,
                images,
            },
            sections: vec![
                Box::new(HeroSection::new()),
                Box::new(AboutSection::new()),
                Box::new(SkillsSection::new()),
                Box::new(ProjectsSection::new()),
                Box::new(BlogSection::new()),
                Box::new(ContactSection::new()),
                Box::new(FooterSection::new()),
            ],
            nav: NavBar::new(theme),
            backdrop: Backdrop::new(),
            trail: ParticleLayer::new(seed),
            touch_track: None,
            touch_travel: 0.0,
            tap_pending: false,
        }
    }

    /// Remeasures every section for the viewport and rebuilds the page map.
    /// Runs on boot, on resize and after content sync.
    pub fn relayout(&mut self, viewport: Point) {
        self.app_context.viewport = viewport;
        self.app_context.dpr = window().device_pixel_ratio();

        let content = &self.app_context.content;
        let heights: Vec<(SectionSort, f64)> = self
            .sections
            .iter_mut()
            .map(|section| (section.sort(), section.measure(viewport, content)))
            .collect();

        self.app_context.layout.clear();

        let mut top = 0.0;

        for (sort, height) in heights {
            self.app_context.layout.place(sort, top, height);
            top += height;
        }

        self.app_context
            .scroll
            .set_limit((top - viewport.1).max(0.0));
        self.nav.relayout(viewport);
    }

    pub fn tick(&mut self, delta_ms: f64) {
        // Tab switches hand rAF a huge delta; a clamp keeps springs stable.
        self.app_context.delta_ms = delta_ms.clamp(0.0, 100.0);
        self.app_context.scroll.tick(self.app_context.delta_ms);

        if let Some(sort) = self
            .app_context
            .layout
            .active_section(self.app_context.scroll.offset())
        {
            self.nav.set_active(sort);
        }

        self.backdrop.tick(&self.app_context);
        self.trail.tick(&self.app_context);

        let mut events = Vec::new();

        if let Some(event) = self.nav.tick(&self.app_context) {
            events.push(event);
        }

        for section in self.sections.iter_mut() {
            if let Some(event) = section.tick(&self.app_context) {
                events.push(event);
            }
        }

        for event in events {
            self.apply(event);
        }

        if self.tap_pending {
            self.app_context.pointer.button = false;
            self.tap_pending = false;
        }
    }

    fn apply(&mut self, event: SectionEvent) {
        match event {
            SectionEvent::Jump(sort) => {
                if let Some(target) = self.app_context.layout.jump_target(sort) {
                    self.app_context.scroll.glide_to(target);
                }

                self.nav.collapse();
            }
            SectionEvent::OpenUrl(url) => {
                if window().open_with_url_and_target(&url, "_blank").is_err() {
                    console::warn_1(&format!("could not open {}", url).into());
                }
            }
            SectionEvent::ToggleTheme => {
                self.app_context.theme = self.app_context.theme.toggled();
                self.nav.refresh_theme(self.app_context.theme);
                App::kv_set(THEME_KEY, self.app_context.theme.name());
            }
        }
    }

    pub fn draw(&mut self, context: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        let app_context = &self.app_context;

        context.set_transform(app_context.dpr, 0.0, 0.0, app_context.dpr, 0.0, 0.0)?;

        context.set_fill_style(&app_context.theme.background().into());
        context.fill_rect(0.0, 0.0, app_context.viewport.0, app_context.viewport.1);

        self.backdrop.draw(context, app_context)?;

        let offset = app_context.scroll.offset();

        for section in self.sections.iter_mut() {
            if let Some((top, bottom)) = app_context.layout.span_of(section.sort()) {
                if bottom < offset || top > offset + app_context.viewport.1 {
                    continue;
                }

                context.save();
                context.translate(0.0, top - offset)?;

                let result = section.draw(context, app_context);

                context.restore();
                result?;
            }
        }

        self.nav.draw(context, app_context)?;
        self.trail.draw(context, app_context)?;

        self.app_context.frame += 1;
        self.app_context.pointer.swap();

        Ok(())
    }

    pub fn on_mouse_down(&mut self, event: MouseEvent) {
        if event.button() == 0 {
            self.app_context.pointer.button = true;
        }
    }

    pub fn on_mouse_up(&mut self, event: MouseEvent) {
        if event.button() == 0 {
            self.app_context.pointer.button = false;
        }
    }

    pub fn on_mouse_move(&mut self, bound: &DomRectReadOnly, event: MouseEvent) {
        self.app_context.pointer.set_location(Point(
            event.client_x() as f64 - bound.left(),
            event.client_y() as f64 - bound.top(),
        ));
        self.app_context.pointer.on_page = true;
    }

    pub fn on_mouse_leave(&mut self) {
        self.app_context.pointer.on_page = false;
    }

    pub fn on_wheel(&mut self, event: WheelEvent) {
        let delta = match event.delta_mode() {
            WheelEvent::DOM_DELTA_LINE => event.delta_y() * 40.0,
            WheelEvent::DOM_DELTA_PAGE => event.delta_y() * self.app_context.viewport.1,
            _ => event.delta_y(),
        };

        self.app_context.scroll.scroll_by(delta);
    }

    pub fn on_touch_start(&mut self, bound: &DomRectReadOnly, event: TouchEvent) {
        if let Some(touch) = event.target_touches().item(0) {
            let location = Point(
                touch.client_x() as f64 - bound.left(),
                touch.client_y() as f64 - bound.top(),
            );

            self.app_context.pointer.set_location(location);
            self.app_context.pointer.on_page = true;
            self.touch_track = Some(location);
            self.touch_travel = 0.0;
        }

        event.prevent_default();
    }

    pub fn on_touch_move(&mut self, bound: &DomRectReadOnly, event: TouchEvent) {
        if let Some(touch) = event.target_touches().item(0) {
            let location = Point(
                touch.client_x() as f64 - bound.left(),
                touch.client_y() as f64 - bound.top(),
            );

            if let Some(previous) = self.touch_track {
                self.touch_travel += (location - previous).length();
                self.app_context.scroll.scroll_by(previous.1 - location.1);
            }

            self.touch_track = Some(location);
            self.app_context.pointer.set_location(location);
        }

        event.prevent_default();
    }

    pub fn on_touch_end(&mut self, _: TouchEvent) {
        // A finger that never strayed presses whatever it rested on. The
        // button releases itself after the next tick.
        if self.touch_track.take().is_some() && self.touch_travel < TAP_SLOP {
            self.app_context.pointer.button = true;
            self.tap_pending = true;
        }

        self.app_context.pointer.on_page = false;
    }

    pub fn on_key_down(&mut self, event: KeyboardEvent) {
        let page = self.app_context.viewport.1 * 0.9;

        match event.code().as_str() {
            "ArrowDown" => self.app_context.scroll.scroll_by(80.0),
            "ArrowUp" => self.app_context.scroll.scroll_by(-80.0),
            "PageDown" | "Space" => self.app_context.scroll.scroll_by(page),
            "PageUp" => self.app_context.scroll.scroll_by(-page),
            "Home" => self.app_context.scroll.glide_to(0.0),
            "End" => self.app_context.scroll.glide_to(f64::MAX),
            _ => (),
        };
    }

    pub fn on_content_response(&mut self, value: JsValue) {
        match serde_wasm_bindgen::from_value(value) {
            Ok(Message::Content(content)) => {
                self.app_context.content = *content;

                if let Err(err) = self.app_context.images.preload(&self.app_context.content) {
                    console::warn_1(&err);
                }

                self.relayout(self.app_context.viewport);
            }
            Ok(Message::ContentError(content_error)) => {
                console::warn_1(&format!("{:?}", AppError::from(content_error)).into());
            }
            Ok(_) => (),
            Err(err) => {
                console::warn_1(&format!("content sync failed: {}", err).into());
            }
        }
    }

    pub fn kv_get(key: &str) -> Option<String> {
        window()
            .local_storage()
            .unwrap_or_default()
            .and_then(|storage| storage.get_item(key).unwrap_or_default())
    }

    pub fn kv_set(key: &str, value: &str) {
        if let Some(storage) = window().local_storage().unwrap_or_default() {
            storage.set_item(key, value).unwrap_or_default();
        }
    }
}
