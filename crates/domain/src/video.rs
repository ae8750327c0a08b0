use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Exercise;

pub const PLACEHOLDER_MESSAGE: &str = "Premium video demonstration coming soon";
pub const ERROR_MESSAGE: &str = "Unable to load video";

/// Configuration applied to the player when it is created.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    pub looping: bool,
    pub muted: bool,
    pub volume: f32,
    pub playback_rate: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            looping: false,
            muted: false,
            volume: 1.0,
            playback_rate: 1.0,
        }
    }
}

impl PlayerSettings {
    /// Clamps the volume to [0, 1] and replaces a non-positive playback rate by 1.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            volume: self.volume.clamp(0.0, 1.0),
            playback_rate: if self.playback_rate > 0.0 {
                self.playback_rate
            } else {
                1.0
            },
            ..self
        }
    }
}

/// Status reported by the media player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackStatus {
    Idle,
    Loading,
    ReadyToPlay,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoView {
    /// The exercise has no video.
    Placeholder,
    Player { url: &'static str },
    Failed { url: &'static str },
}

/// Tracks the video of one exercise across player status changes.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoState {
    url: Option<&'static str>,
    settings: PlayerSettings,
    status: PlaybackStatus,
    failed: bool,
}

impl VideoState {
    #[must_use]
    pub fn new(exercise: &Exercise, settings: PlayerSettings) -> Self {
        Self {
            url: exercise.video_url,
            settings: settings.normalized(),
            status: PlaybackStatus::Idle,
            failed: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> PlayerSettings {
        self.settings
    }

    #[must_use]
    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    #[must_use]
    pub fn view(&self) -> VideoView {
        match self.url {
            None => VideoView::Placeholder,
            Some(url) if self.failed => VideoView::Failed { url },
            Some(url) => VideoView::Player { url },
        }
    }

    pub fn on_status_change(&mut self, status: PlaybackStatus) {
        debug!("video status changed: {status:?}");
        match &status {
            PlaybackStatus::Error(error) => {
                warn!("video error: {error}");
                self.failed = true;
            }
            PlaybackStatus::ReadyToPlay => {
                self.failed = false;
            }
            PlaybackStatus::Idle | PlaybackStatus::Loading => {}
        }
        self.status = status;
    }

    /// Clears the failure and returns the URL to load again.
    pub fn retry(&mut self) -> Option<&'static str> {
        let url = self.url?;
        self.failed = false;
        self.status = PlaybackStatus::Loading;
        Some(url)
    }
}
