use crate::{AssetKey, ImageKey, PositionId};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("no positions declared for \"{0}\"")]
    NoPositions(AssetKey),
    #[error("position {1} declared twice for \"{0}\"")]
    DuplicatePosition(AssetKey, PositionId),
    #[error("no image for declared position {0}")]
    MissingImage(ImageKey),
    #[error("image {0} does not belong to a declared position")]
    OrphanImage(ImageKey),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::NoPositions(AssetKey::DonkeyCalfRaise).to_string(),
            "no positions declared for \"donkey_calf_raise\""
        );
        assert_eq!(
            CatalogError::DuplicatePosition(AssetKey::BarbellBenchPress, PositionId::End)
                .to_string(),
            "position end_pos declared twice for \"barbell_bench_press\""
        );
        assert_eq!(
            CatalogError::MissingImage(ImageKey::new(
                AssetKey::FrontAndBackLunges,
                PositionId::Mid
            ))
            .to_string(),
            "no image for declared position front_and_back_lunges_mid_pos"
        );
    }
}
