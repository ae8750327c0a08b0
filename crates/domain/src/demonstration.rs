use std::fmt;

use log::debug;

use crate::{AssetKey, Catalog, ImageHandle, ImageKey, PositionId};

pub const FALLBACK_ID: &str = "fallback";
pub const FALLBACK_LABEL: &str = "Exercise Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDescriptor {
    pub id: PositionId,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorPosition {
    Position(PositionId),
    Fallback,
}

impl fmt::Display for DescriptorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorPosition::Position(position) => write!(f, "{position}"),
            DescriptorPosition::Fallback => f.write_str(FALLBACK_ID),
        }
    }
}

/// A render-ready demonstration image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Unique within one resolved list.
    pub id: &'static str,
    pub image: ImageHandle,
    pub position: DescriptorPosition,
    pub label: &'static str,
    pub is_fallback: bool,
}

impl ImageDescriptor {
    fn fallback(image: ImageHandle) -> Self {
        Self {
            id: FALLBACK_ID,
            image,
            position: DescriptorPosition::Fallback,
            label: FALLBACK_LABEL,
            is_fallback: true,
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn resolve_asset_key(&self, display_name: &str) -> Option<AssetKey> {
        self.asset_key(display_name)
    }

    #[must_use]
    pub fn list_positions(&self, display_name: &str) -> Vec<PositionDescriptor> {
        let Some(key) = self.resolve_asset_key(display_name) else {
            return vec![];
        };
        self.positions(key)
            .iter()
            .map(|id| PositionDescriptor {
                id: *id,
                label: id.label(),
            })
            .collect()
    }

    #[must_use]
    pub fn has_demonstration(&self, display_name: &str) -> bool {
        !self.list_positions(display_name).is_empty()
    }

    /// Returns the image of `position` if it is declared for the exercise and
    /// backed by the image table.
    #[must_use]
    pub fn image_source(&self, display_name: &str, position: PositionId) -> Option<ImageHandle> {
        let key = self.resolve_asset_key(display_name)?;
        if !self.positions(key).contains(&position) {
            return None;
        }
        self.image(ImageKey::new(key, position)).cloned()
    }

    /// Resolves the demonstration images of an exercise in movement order.
    ///
    /// Positions without an image are left out. If the exercise has no declared
    /// positions, the result consists of the fallback image, if given.
    #[must_use]
    pub fn build_image_descriptors(
        &self,
        display_name: &str,
        fallback: Option<&ImageHandle>,
    ) -> Vec<ImageDescriptor> {
        let positions = self.list_positions(display_name);

        if positions.is_empty() {
            return fallback
                .map(|image| vec![ImageDescriptor::fallback(image.clone())])
                .unwrap_or_default();
        }

        positions
            .into_iter()
            .filter_map(|position| {
                let Some(image) = self.image_source(display_name, position.id) else {
                    debug!(
                        "omitting {} of \"{display_name}\": no image available",
                        position.id
                    );
                    return None;
                };
                Some(ImageDescriptor {
                    id: position.id.id(),
                    image,
                    position: DescriptorPosition::Position(position.id),
                    label: position.label,
                    is_fallback: false,
                })
            })
            .collect()
    }
}

#[must_use]
pub fn resolve_asset_key(display_name: &str) -> Option<AssetKey> {
    Catalog::bundled().resolve_asset_key(display_name)
}

#[must_use]
pub fn list_positions(display_name: &str) -> Vec<PositionDescriptor> {
    Catalog::bundled().list_positions(display_name)
}

#[must_use]
pub fn has_demonstration(display_name: &str) -> bool {
    Catalog::bundled().has_demonstration(display_name)
}

#[must_use]
pub fn image_source(display_name: &str, position: PositionId) -> Option<ImageHandle> {
    Catalog::bundled().image_source(display_name, position)
}

#[must_use]
pub fn build_image_descriptors(
    display_name: &str,
    fallback: Option<&ImageHandle>,
) -> Vec<ImageDescriptor> {
    Catalog::bundled().build_image_descriptors(display_name, fallback)
}
