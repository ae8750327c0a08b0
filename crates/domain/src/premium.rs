//! Premium presentation.
//!
//! Premium is a label shown on advanced exercises together with an upgrade
//! offer. Nothing is locked: accepting the offer only reports the acceptance.

use log::info;

use crate::Exercise;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumFeature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PREMIUM_FEATURES: [PremiumFeature; 6] = [
    PremiumFeature {
        icon: "🎯",
        title: "Advanced Exercises",
        description: "Access to expert-level workouts and techniques",
    },
    PremiumFeature {
        icon: "📊",
        title: "Progress Tracking",
        description: "Detailed analytics and performance insights",
    },
    PremiumFeature {
        icon: "🏆",
        title: "Achievement System",
        description: "Unlock badges and celebrate milestones",
    },
    PremiumFeature {
        icon: "📱",
        title: "Offline Access",
        description: "Download exercises for offline training",
    },
    PremiumFeature {
        icon: "👨‍💼",
        title: "Personal Trainer",
        description: "AI-powered form correction and tips",
    },
    PremiumFeature {
        icon: "🎵",
        title: "Premium Content",
        description: "Exclusive workouts and nutrition guides",
    },
];

/// What happens when the user starts an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAction {
    Begin,
    ShowUpgrade,
}

impl StartAction {
    #[must_use]
    pub fn for_exercise(exercise: &Exercise) -> Self {
        if exercise.is_premium() {
            StartAction::ShowUpgrade
        } else {
            StartAction::Begin
        }
    }
}

/// Visibility of the upgrade offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpgradeOffer {
    visible: bool,
}

impl UpgradeOffer {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Closes the offer and returns whether it was visible when accepted.
    pub fn accept(&mut self) -> bool {
        let accepted = self.visible;
        self.visible = false;
        if accepted {
            info!("upgrade to premium accepted");
        }
        accepted
    }

    /// Applies a start request, opening the offer for premium exercises.
    pub fn start(&mut self, exercise: &Exercise) -> StartAction {
        let action = StartAction::for_exercise(exercise);
        match action {
            StartAction::ShowUpgrade => self.open(),
            StartAction::Begin => info!("starting exercise \"{}\"", exercise.name),
        }
        action
    }
}
