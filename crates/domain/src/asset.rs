use std::{fmt, str::FromStr};

use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Canonical identifier of the image-asset family of one exercise.
#[derive(
    AsRefStr, EnumIter, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum AssetKey {
    BarbellBenchPress,
    FrontAndBackLunges,
    BarbellPushAndPress,
    OverheadShoulderPress,
    DonkeyCalfRaise,
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A named point in the movement of an exercise.
///
/// The declaration order is the movement order.
#[derive(
    AsRefStr,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
)]
pub enum PositionId {
    #[strum(serialize = "start_pos")]
    Start,
    #[strum(serialize = "mid_pos")]
    Mid,
    #[strum(serialize = "end_pos")]
    End,
}

impl PositionId {
    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PositionId::Start => "Starting Position",
            PositionId::Mid => "Mid Movement",
            PositionId::End => "End Position",
        }
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Key of the image-handle table, rendered as `{asset_key}_{position_id}`.
#[derive(Display, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[display("{asset}_{position}")]
pub struct ImageKey {
    pub asset: AssetKey,
    pub position: PositionId,
}

impl ImageKey {
    #[must_use]
    pub const fn new(asset: AssetKey, position: PositionId) -> Self {
        Self { asset, position }
    }
}

impl FromStr for ImageKey {
    type Err = ImageKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for position in PositionId::iter() {
            if let Some(asset) = s
                .strip_suffix(position.as_ref())
                .and_then(|rest| rest.strip_suffix('_'))
            {
                return AssetKey::from_str(asset)
                    .map(|asset| ImageKey { asset, position })
                    .map_err(|_| ImageKeyError::UnknownAsset(asset.to_string()));
            }
        }
        Err(ImageKeyError::UnknownPosition(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageKeyError {
    #[error("unknown asset key \"{0}\"")]
    UnknownAsset(String),
    #[error("no known position suffix in \"{0}\"")]
    UnknownPosition(String),
}

/// Opaque reference to displayable image data.
///
/// The resolver never interprets the contents of a handle.
#[derive(Display, Clone, Debug, Eq, Hash, PartialEq)]
pub enum ImageHandle {
    /// Asset embedded by the packaging step, addressed by its bundle path.
    #[display("{_0}")]
    Bundled(&'static str),
    /// Image referenced by URL.
    #[display("{_0}")]
    Remote(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(AssetKey::BarbellBenchPress, "barbell_bench_press")]
    #[case(AssetKey::FrontAndBackLunges, "front_and_back_lunges")]
    #[case(AssetKey::BarbellPushAndPress, "barbell_push_and_press")]
    #[case(AssetKey::OverheadShoulderPress, "overhead_shoulder_press")]
    #[case(AssetKey::DonkeyCalfRaise, "donkey_calf_raise")]
    fn test_asset_key_string_form(#[case] key: AssetKey, #[case] expected: &str) {
        assert_eq!(key.to_string(), expected);
        assert_eq!(AssetKey::from_str(expected), Ok(key));
    }

    #[test]
    fn test_position_id_order() {
        assert_eq!(
            PositionId::iter().collect::<Vec<_>>(),
            vec![PositionId::Start, PositionId::Mid, PositionId::End]
        );
    }

    #[rstest]
    #[case(PositionId::Start, "start_pos", "Starting Position")]
    #[case(PositionId::Mid, "mid_pos", "Mid Movement")]
    #[case(PositionId::End, "end_pos", "End Position")]
    fn test_position_id(#[case] position: PositionId, #[case] id: &str, #[case] label: &str) {
        assert_eq!(position.id(), id);
        assert_eq!(position.to_string(), id);
        assert_eq!(position.label(), label);
    }

    #[test]
    fn test_position_id_from_str_invalid() {
        assert!(PositionId::from_str("Start").is_err());
    }

    #[rstest]
    #[case(
        "barbell_bench_press_start_pos",
        Ok(ImageKey::new(AssetKey::BarbellBenchPress, PositionId::Start))
    )]
    #[case(
        "front_and_back_lunges_mid_pos",
        Ok(ImageKey::new(AssetKey::FrontAndBackLunges, PositionId::Mid))
    )]
    #[case(
        "bench_press_end_pos",
        Err(ImageKeyError::UnknownAsset("bench_press".to_string()))
    )]
    #[case(
        "barbell_bench_press",
        Err(ImageKeyError::UnknownPosition("barbell_bench_press".to_string()))
    )]
    fn test_image_key_from_str(#[case] s: &str, #[case] expected: Result<ImageKey, ImageKeyError>) {
        assert_eq!(ImageKey::from_str(s), expected);
    }

    #[test]
    fn test_image_key_display() {
        assert_eq!(
            ImageKey::new(AssetKey::DonkeyCalfRaise, PositionId::End).to_string(),
            "donkey_calf_raise_end_pos"
        );
    }

    #[test]
    fn test_image_handle_display() {
        assert_eq!(
            ImageHandle::Bundled("exercises/a.png").to_string(),
            "exercises/a.png"
        );
        assert_eq!(
            ImageHandle::Remote("https://example.com/a.png".to_string()).to_string(),
            "https://example.com/a.png"
        );
    }
}
