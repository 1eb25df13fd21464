use std::collections::HashMap;

use shared::Content;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlImageElement;

use crate::document;

/// Image elements keyed by source URL, created up front so draw calls can
/// stay read-only.
///
/// Images decode in the background; callers paint a placeholder until
/// [`ImageBank::ready`] hands the element back.
pub struct ImageBank {
    images: HashMap<String, HtmlImageElement>,
}

impl ImageBank {
    pub fn new() -> ImageBank {
        ImageBank {
            images: HashMap::new(),
        }
    }

    pub fn fetch(&mut self, src: &str) -> Result<(), JsValue> {
        if !self.images.contains_key(src) {
            let image = document()
                .create_element("img")?
                .dyn_into::<HtmlImageElement>()?;

            image.set_src(src);

            self.images.insert(src.to_string(), image);
        }

        Ok(())
    }

    /// Queues every image the page content refers to.
    pub fn preload(&mut self, content: &Content) -> Result<(), JsValue> {
        self.fetch(&content.profile.portrait)?;
        self.fetch(&content.profile.workspace_photo)?;

        for project in &content.projects {
            self.fetch(&project.image)?;
        }

        for post in &content.posts {
            self.fetch(&post.image)?;
        }

        Ok(())
    }

    /// The image once it has fully decoded, [`None`] while pending or broken.
    pub fn ready(&self, src: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(src)
            .filter(|image| image.complete() && image.natural_width() > 0)
    }
}

impl Default for ImageBank {
    fn default() -> ImageBank {
        ImageBank::new()
    }
}
