use std::collections::{BTreeMap, BTreeSet};

use crate::{AssetKey, CatalogError, ImageHandle, ImageKey, PositionId};

/// Read-only lookup tables behind exercise demonstrations.
///
/// Maps exercise display names to asset keys, asset keys to their ordered
/// positions, and image keys to image handles. Position labels are provided by
/// [`PositionId::label`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    assets: BTreeMap<&'static str, AssetKey>,
    positions: BTreeMap<AssetKey, Vec<PositionId>>,
    images: BTreeMap<ImageKey, ImageHandle>,
}

static BUNDLED: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| {
    let catalog = EXERCISE_ASSETS
        .iter()
        .fold(Catalog::empty(), |catalog, (name, key, positions)| {
            catalog.with_exercise(*name, *key, positions)
        });
    DEMONSTRATION_IMAGES
        .iter()
        .fold(catalog, |catalog, (key, path)| {
            catalog.with_image(*key, ImageHandle::Bundled(*path))
        })
});

const EXERCISE_ASSETS: [(&str, AssetKey, &[PositionId]); 5] = [
    (
        "Barbell Bench Press",
        AssetKey::BarbellBenchPress,
        &[PositionId::Start, PositionId::End],
    ),
    (
        "Front and Back Lunges",
        AssetKey::FrontAndBackLunges,
        &[PositionId::Start, PositionId::Mid, PositionId::End],
    ),
    (
        "Barbell Push and Press",
        AssetKey::BarbellPushAndPress,
        &[PositionId::Start, PositionId::Mid, PositionId::End],
    ),
    (
        "Overhead Shoulder Press",
        AssetKey::OverheadShoulderPress,
        &[PositionId::Start, PositionId::End],
    ),
    (
        "Donkey Calf Raise",
        AssetKey::DonkeyCalfRaise,
        &[PositionId::Start, PositionId::End],
    ),
];

const DEMONSTRATION_IMAGES: [(ImageKey, &str); 12] = [
    (
        ImageKey::new(AssetKey::BarbellBenchPress, PositionId::Start),
        "exercises/exercise_demonstration/barbell_bench_press_start_pos.png",
    ),
    (
        ImageKey::new(AssetKey::BarbellBenchPress, PositionId::End),
        "exercises/exercise_demonstration/barbell_bench_press_end_pos.png",
    ),
    (
        ImageKey::new(AssetKey::FrontAndBackLunges, PositionId::Start),
        "exercises/exercise_demonstration/front_and_back_lunges_start_pos.png",
    ),
    (
        ImageKey::new(AssetKey::FrontAndBackLunges, PositionId::Mid),
        "exercises/exercise_demonstration/front_and_back_lunges_mid_pos.png",
    ),
    (
        ImageKey::new(AssetKey::FrontAndBackLunges, PositionId::End),
        "exercises/exercise_demonstration/front_and_back_lunges_end_pos.png",
    ),
    (
        ImageKey::new(AssetKey::BarbellPushAndPress, PositionId::Start),
        "exercises/exercise_demonstration/barbell_push_and_press_start_pos.png",
    ),
    (
        ImageKey::new(AssetKey::BarbellPushAndPress, PositionId::Mid),
        "exercises/exercise_demonstration/barbell_push_and_press_mid_pos.png",
    ),
    (
        ImageKey::new(AssetKey::BarbellPushAndPress, PositionId::End),
        "exercises/exercise_demonstration/barbell_push_and_press_end_pos.png",
    ),
    (
        ImageKey::new(AssetKey::OverheadShoulderPress, PositionId::Start),
        "exercises/exercise_demonstration/overhead_shoulder_press_start_pos.png",
    ),
    (
        ImageKey::new(AssetKey::OverheadShoulderPress, PositionId::End),
        "exercises/exercise_demonstration/overhead_shoulder_press_end_pos.png",
    ),
    (
        ImageKey::new(AssetKey::DonkeyCalfRaise, PositionId::Start),
        "exercises/exercise_demonstration/donkey_calf_raise_start_pos.png",
    ),
    (
        ImageKey::new(AssetKey::DonkeyCalfRaise, PositionId::End),
        "exercises/exercise_demonstration/donkey_calf_raise_end_pos.png",
    ),
];

impl Catalog {
    /// The catalog of demonstration assets shipped with the application.
    #[must_use]
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers an exercise under `name`, replacing any previous entry for the name
    /// and the declared positions of `key`.
    #[must_use]
    pub fn with_exercise(
        mut self,
        name: &'static str,
        key: AssetKey,
        positions: &[PositionId],
    ) -> Self {
        self.assets.insert(name, key);
        self.positions.insert(key, positions.to_vec());
        self
    }

    #[must_use]
    pub fn with_image(mut self, key: ImageKey, image: ImageHandle) -> Self {
        self.images.insert(key, image);
        self
    }

    #[must_use]
    pub fn without_image(mut self, key: ImageKey) -> Self {
        self.images.remove(&key);
        self
    }

    #[must_use]
    pub fn asset_key(&self, name: &str) -> Option<AssetKey> {
        self.assets.get(name).copied()
    }

    /// Declared positions of `key` in movement order, empty if none are declared.
    #[must_use]
    pub fn positions(&self, key: AssetKey) -> &[PositionId] {
        self.positions.get(&key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn image(&self, key: ImageKey) -> Option<&ImageHandle> {
        self.images.get(&key)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.assets.keys().copied()
    }

    /// Checks that every registered exercise declares distinct positions, each
    /// backed by an image, and that no image is left without a declared position.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let keys = self.assets.values().copied().collect::<BTreeSet<_>>();
        let mut declared = BTreeSet::new();

        for key in keys {
            let positions = self.positions(key);

            if positions.is_empty() {
                return Err(CatalogError::NoPositions(key));
            }

            for position in positions {
                let image_key = ImageKey::new(key, *position);

                if !declared.insert(image_key) {
                    return Err(CatalogError::DuplicatePosition(key, *position));
                }

                if !self.images.contains_key(&image_key) {
                    return Err(CatalogError::MissingImage(image_key));
                }
            }
        }

        if let Some(orphan) = self.images.keys().find(|k| !declared.contains(*k)) {
            return Err(CatalogError::OrphanImage(*orphan));
        }

        Ok(())
    }
}
