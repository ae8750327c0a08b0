use std::{fmt, str::FromStr};

use derive_more::Deref;
use uuid::Uuid;

use crate::{ImageDescriptor, ImageHandle, build_image_descriptors};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub category: Category,
    /// Set and repetition prescription, e.g. "3 sets x 8-12 reps".
    pub prescription: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub video_url: Option<&'static str>,
    pub avatar_image: ImageHandle,
    pub image: ImageHandle,
    pub primary_muscles: &'static [&'static str],
    pub secondary_muscles: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Exercise {
    /// Demonstration images of the exercise, falling back to its full image.
    #[must_use]
    pub fn demonstration_images(&self) -> Vec<ImageDescriptor> {
        build_image_descriptors(self.name, Some(&self.image))
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.difficulty == Difficulty::Advanced
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    UpperBody,
    LowerBody,
    FullBody,
}

impl Category {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::UpperBody => "Upper Body",
            Category::LowerBody => "Lower Body",
            Category::FullBody => "Full Body",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            _ => Err(DifficultyError::Invalid(s.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Invalid difficulty \"{0}\"")]
    Invalid(String),
}

#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn exercise(id: ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

static EXERCISES: std::sync::LazyLock<Vec<Exercise>> = std::sync::LazyLock::new(|| {
    vec![
        Exercise {
            id: 1.into(),
            name: "Barbell Bench Press",
            category: Category::UpperBody,
            prescription: "3 sets x 8-12 reps",
            description: "A compound exercise targeting chest, shoulders, and triceps",
            difficulty: Difficulty::Intermediate,
            video_url: Some(
                "https://lyftaweb.s3.us-east-2.amazonaws.com/GymvisualMP4/00251201.mp4",
            ),
            avatar_image: ImageHandle::Bundled("exercises/avatars/barbel_bench_press.png"),
            image: ImageHandle::Bundled("exercises/full/barbel_bench_press.png"),
            primary_muscles: &["Pectoralis Major Sternal Head"],
            secondary_muscles: &[
                "Deltoid Anterior",
                "Pectoralis Major Clavicular Head",
                "Triceps Brachii",
            ],
            instructions: &[
                "Grasp the barbell with your hands slightly wider than shoulder-width apart, palms facing towards your feet.",
                "Lift the barbell off the rack and hold it straight over your chest with your arms fully extended.",
                "Slowly lower the barbell to your chest, keeping your elbows at a 90-degree angle as you do so.",
                "Push the barbell back up to the starting position, fully extending your arms but not locking your elbows.",
            ],
            tips: &[
                "Control the Bar: Avoid dropping the bar quickly and bouncing it off your chest.",
                "Avoid Overextending: Stop just short of full extension to keep tension on your muscles.",
            ],
        },
        Exercise {
            id: 2.into(),
            name: "Front and Back Lunges",
            category: Category::LowerBody,
            prescription: "3 sets x 10 reps each leg",
            description: "Dynamic leg exercise for quads, glutes, and hamstrings",
            difficulty: Difficulty::Beginner,
            video_url: Some(
                "https://lyftaweb.s3.us-east-2.amazonaws.com/GymvisualMP4/03361201.mp4",
            ),
            avatar_image: ImageHandle::Bundled("exercises/avatars/front_and_back_lunges.png"),
            image: ImageHandle::Bundled("exercises/full/front_and_back_lunges.png"),
            primary_muscles: &["Gluteus Maximus", "Quadriceps"],
            secondary_muscles: &["Adductor Magnus", "Soleus"],
            instructions: &[
                "Take a step forward with your right foot, keeping your spine tall and your shoulders down.",
                "Lower your body until your right thigh is parallel to the floor and your right knee is directly above your right ankle.",
                "Push back up to the starting position, driving through your right heel.",
                "Repeat the same steps with your left foot forward, alternating legs for the desired number of repetitions.",
            ],
            tips: &[
                "Keep Your Upper Body Straight: Avoid leaning forward or backward as this can cause strain.",
                "Engage Your Core: Your core muscles play a crucial role in maintaining balance during lunges.",
                "Don't Rush: Take your time with each lunge, ensuring proper form and control.",
            ],
        },
        Exercise {
            id: 3.into(),
            name: "Barbell Push and Press",
            category: Category::FullBody,
            prescription: "3 sets x 6-8 reps",
            description: "Explosive movement combining push press and overhead press",
            difficulty: Difficulty::Advanced,
            video_url: Some(
                "https://lyftaweb.s3.us-east-2.amazonaws.com/GymvisualMP4/11651201.mp4",
            ),
            avatar_image: ImageHandle::Bundled("exercises/avatars/barbel_push_and_press.png"),
            image: ImageHandle::Bundled("exercises/full/barbel_push_and_press.png"),
            primary_muscles: &["Deltoid Anterior"],
            secondary_muscles: &[
                "Deltoid Lateral",
                "Pectoralis Major Clavicular Head",
                "Serratus Anterior",
                "Triceps Brachii",
            ],
            instructions: &[
                "Grip the barbell slightly wider than shoulder-width, palms facing forward.",
                "Lift the barbell off the rack and bring it to rest at your collarbone or upper chest.",
                "Brace your core and push the barbell straight up in a smooth motion until your arms are fully extended overhead.",
                "Hold this position for a second, then slowly lower the barbell back down to the starting position.",
            ],
            tips: &[
                "Controlled Movement: Don't rush the exercise. Lift the barbell straight up in a controlled motion.",
                "Appropriate Weight: Choose a weight that is challenging but manageable.",
                "Breathe Properly: Breathe in as you lower the barbell and breathe out as you lift it.",
            ],
        },
        Exercise {
            id: 4.into(),
            name: "Overhead Shoulder Press",
            category: Category::UpperBody,
            prescription: "3 sets x 8-10 reps",
            description: "Shoulder strengthening exercise for deltoids and triceps",
            difficulty: Difficulty::Intermediate,
            video_url: Some(
                "https://lyftaweb.s3.us-east-2.amazonaws.com/GymvisualMP4/12241201.mp4",
            ),
            avatar_image: ImageHandle::Bundled("exercises/avatars/overhead_shoulder_press.png"),
            image: ImageHandle::Bundled("exercises/full/overhead_shoulder_press.png"),
            primary_muscles: &["Deltoid Anterior"],
            secondary_muscles: &[
                "Deltoid Lateral",
                "Pectoralis Major Clavicular Head",
                "Serratus Anterior",
                "Triceps Brachii",
            ],
            instructions: &[
                "Grip the barbell slightly wider than shoulder-width, palms facing forward.",
                "Lift the barbell off the rack and bring it to rest at your collarbone or upper chest.",
                "Brace your core and push the barbell straight up in a smooth motion until your arms are fully extended overhead.",
                "Hold this position for a second, then slowly lower the barbell back down to the starting position.",
            ],
            tips: &[
                "Controlled Movement: Don't rush the exercise. Lift the barbell straight up in a controlled motion.",
                "Appropriate Weight: Choose a weight that is challenging but manageable.",
                "Breathe Properly: Breathe in as you lower the barbell and breathe out as you lift it.",
            ],
        },
        Exercise {
            id: 5.into(),
            name: "Donkey Calf Raise",
            category: Category::LowerBody,
            prescription: "3 sets x 15-20 reps",
            description: "Isolated calf exercise for gastrocnemius and soleus",
            difficulty: Difficulty::Beginner,
            video_url: Some(
                "https://lyftaweb.s3.us-east-2.amazonaws.com/GymvisualMP4/06051201.mp4",
            ),
            avatar_image: ImageHandle::Bundled("exercises/avatars/donkey_calf_raise.png"),
            image: ImageHandle::Bundled("exercises/full/donkey_calf_raise.png"),
            primary_muscles: &["Gastrocnemius"],
            secondary_muscles: &["Soleus"],
            instructions: &[
                "Position your feet shoulder-width apart, with your toes pointing straight ahead or slightly outward.",
                "Slowly raise your heels off the ground, pushing up onto your toes while keeping your core engaged.",
                "Hold the position at the top for a moment, squeezing your calf muscles.",
                "Slowly lower your heels back down to the ground, returning to the starting position.",
            ],
            tips: &[
                "Full Range of Motion: Rise up on your toes as high as possible and lower your heels below the level of the step.",
                "Controlled Movements: The movements should be slow and controlled, both when lifting and lowering.",
                "Weight Selection: Don't overload the barbell. Using too much weight can compromise your form.",
            ],
        },
    ]
});
