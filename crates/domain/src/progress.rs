/// Progress figures derived from counts supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed_exercises: u32,
    pub total_exercises: u32,
    pub weekly_goal: u32,
    pub current_streak: u32,
}

impl Progress {
    /// Completed share of all exercises in whole percent.
    #[must_use]
    pub fn completion(&self) -> u32 {
        percent(self.completed_exercises, self.total_exercises)
    }

    /// Progress towards the weekly goal in whole percent, capped at 100.
    #[must_use]
    pub fn weekly(&self) -> u32 {
        percent(self.completed_exercises, self.weekly_goal).min(100)
    }

    #[must_use]
    pub fn weekly_summary(&self) -> String {
        format!(
            "{} of {} exercises this week",
            self.completed_exercises, self.weekly_goal
        )
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = u64::from(part) * 100;
    let whole = u64::from(whole);
    u32::try_from((part + whole / 2) / whole).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 5, 0)]
    #[case(2, 5, 40)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(5, 5, 100)]
    #[case(3, 0, 0)]
    fn test_completion(#[case] completed: u32, #[case] total: u32, #[case] expected: u32) {
        let progress = Progress {
            completed_exercises: completed,
            total_exercises: total,
            ..Progress::default()
        };
        assert_eq!(progress.completion(), expected);
    }

    #[rstest]
    #[case(0, 3, 0)]
    #[case(2, 3, 67)]
    #[case(3, 3, 100)]
    #[case(5, 3, 100)]
    #[case(1, 0, 0)]
    fn test_weekly(#[case] completed: u32, #[case] goal: u32, #[case] expected: u32) {
        let progress = Progress {
            completed_exercises: completed,
            weekly_goal: goal,
            ..Progress::default()
        };
        assert_eq!(progress.weekly(), expected);
    }

    #[test]
    fn test_weekly_summary() {
        let progress = Progress {
            completed_exercises: 2,
            total_exercises: 5,
            weekly_goal: 3,
            current_streak: 4,
        };
        assert_eq!(progress.weekly_summary(), "2 of 3 exercises this week");
    }
}
