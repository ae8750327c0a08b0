use std::collections::BTreeSet;

use crate::ImageDescriptor;

/// Glyph shown in place of an image that failed to render.
pub const PLACEHOLDER_GLYPH: &str = "📷";
pub const EMPTY_MESSAGE: &str = "Demonstration images will be available soon";

/// Selection and render-failure state of the demonstration images of one exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    images: Vec<ImageDescriptor>,
    selected: usize,
    failed: BTreeSet<&'static str>,
}

impl Gallery {
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>) -> Self {
        Self {
            images,
            selected: 0,
            failed: BTreeSet::new(),
        }
    }

    /// Replaces the images, e.g. when another exercise is shown.
    pub fn reset(&mut self, images: Vec<ImageDescriptor>) {
        *self = Self::new(images);
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn main(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.selected)
    }

    /// Thumbnails are only offered when there is something to choose from.
    #[must_use]
    pub fn thumbnails(&self) -> &[ImageDescriptor] {
        if self.images.len() > 1 {
            &self.images
        } else {
            &[]
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn mark_failed(&mut self, id: &str) {
        if let Some(image) = self.images.iter().find(|i| i.id == id) {
            self.failed.insert(image.id);
        }
    }

    #[must_use]
    pub fn is_failed(&self, id: &str) -> bool {
        self.failed.contains(id)
    }

    #[must_use]
    pub fn caption(&self) -> Option<String> {
        let image = self.main()?;
        if image.is_fallback {
            return None;
        }
        Some(format!("{} of {}", self.selected + 1, self.images.len()))
    }
}
