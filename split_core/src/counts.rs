//! Exercise-count policy.
//!
//! Maps (experience, session-duration bucket) to the number of exercises a
//! session should hold. The table is fixed domain knowledge, built once.

use crate::ExperienceLevel;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Session length class used as the second table key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBucket {
    Short,
    Medium,
    Long,
}

impl DurationBucket {
    /// ≤30 min is short, ≤45 min is medium, anything longer is long
    pub fn from_minutes(minutes: u32) -> Self {
        if minutes <= 30 {
            DurationBucket::Short
        } else if minutes <= 45 {
            DurationBucket::Medium
        } else {
            DurationBucket::Long
        }
    }
}

/// Total exercise range plus warm-up and cooldown slots for one session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCounts {
    pub min: u32,
    pub max: u32,
    pub warmup: u32,
    pub cooldown: u32,
}

impl ExerciseCounts {
    const fn new(min: u32, max: u32, warmup: u32, cooldown: u32) -> Self {
        Self {
            min,
            max,
            warmup,
            cooldown,
        }
    }

    /// Main-block range left after warm-up and cooldown
    pub fn main_range(&self) -> (u32, u32) {
        let overhead = self.warmup + self.cooldown;
        (
            self.min.saturating_sub(overhead),
            self.max.saturating_sub(overhead),
        )
    }
}

type CountKey = (ExperienceLevel, DurationBucket);

/// Key used when nothing more specific matches
const FALLBACK_KEY: (ExperienceLevel, DurationBucket) =
    (ExperienceLevel::Intermediate, DurationBucket::Medium);

static COUNT_TABLE: Lazy<HashMap<CountKey, ExerciseCounts>> = Lazy::new(|| {
    use DurationBucket::*;
    use ExperienceLevel::*;

    HashMap::from([
        ((Beginner, Short), ExerciseCounts::new(3, 5, 1, 1)),
        ((Beginner, Medium), ExerciseCounts::new(4, 6, 1, 1)),
        ((Beginner, Long), ExerciseCounts::new(5, 7, 2, 1)),
        ((Intermediate, Short), ExerciseCounts::new(4, 5, 1, 1)),
        ((Intermediate, Medium), ExerciseCounts::new(5, 7, 1, 1)),
        ((Intermediate, Long), ExerciseCounts::new(6, 8, 2, 1)),
        ((Advanced, Short), ExerciseCounts::new(4, 6, 1, 1)),
        ((Advanced, Medium), ExerciseCounts::new(6, 8, 1, 1)),
        ((Advanced, Long), ExerciseCounts::new(7, 10, 2, 2)),
    ])
});

/// Ordered lookup keys: exact match first, then the intermediate/medium default
fn lookup_chain(experience: &ExperienceLevel, bucket: DurationBucket) -> [CountKey; 2] {
    [(experience.clone(), bucket), FALLBACK_KEY]
}

/// Exercise counts for a session of the given experience and length
///
/// Unrecognized experience degrades to intermediate/medium rather than
/// failing; a mis-sized session is preferable to no session.
pub fn exercise_counts(experience: &ExperienceLevel, session_duration_minutes: u32) -> ExerciseCounts {
    let bucket = DurationBucket::from_minutes(session_duration_minutes);

    let chain = lookup_chain(experience, bucket);
    let counts = chain
        .iter()
        .find_map(|key| COUNT_TABLE.get(key))
        .copied()
        .unwrap_or(ExerciseCounts::new(5, 7, 1, 1));

    tracing::debug!(
        "Exercise counts for {} / {:?}: {:?}",
        experience,
        bucket,
        counts
    );
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_buckets() {
        assert_eq!(DurationBucket::from_minutes(20), DurationBucket::Short);
        assert_eq!(DurationBucket::from_minutes(30), DurationBucket::Short);
        assert_eq!(DurationBucket::from_minutes(31), DurationBucket::Medium);
        assert_eq!(DurationBucket::from_minutes(45), DurationBucket::Medium);
        assert_eq!(DurationBucket::from_minutes(46), DurationBucket::Long);
        assert_eq!(DurationBucket::from_minutes(90), DurationBucket::Long);
    }

    #[test]
    fn test_beginner_medium_counts() {
        let counts = exercise_counts(&ExperienceLevel::Beginner, 45);
        assert_eq!(counts, ExerciseCounts::new(4, 6, 1, 1));
    }

    #[test]
    fn test_unknown_experience_falls_back_to_intermediate_medium() {
        let unknown = ExperienceLevel::Other("weekend warrior".into());
        let expected = exercise_counts(&ExperienceLevel::Intermediate, 45);

        // Bucket is ignored on fallback, even for long sessions
        assert_eq!(exercise_counts(&unknown, 90), expected);
        assert_eq!(exercise_counts(&unknown, 20), expected);
    }

    #[test]
    fn test_table_covers_every_known_combination() {
        for exp in [
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
        ] {
            for bucket in [DurationBucket::Short, DurationBucket::Medium, DurationBucket::Long] {
                let counts = COUNT_TABLE
                    .get(&(exp.clone(), bucket))
                    .unwrap_or_else(|| panic!("Missing entry for {:?}/{:?}", exp, bucket));
                assert!(counts.min <= counts.max);
                assert!(
                    counts.min > counts.warmup + counts.cooldown,
                    "No room for main work in {:?}/{:?}",
                    exp,
                    bucket
                );
            }
        }
    }

    #[test]
    fn test_main_range() {
        let counts = ExerciseCounts::new(4, 6, 1, 1);
        assert_eq!(counts.main_range(), (2, 4));

        let tiny = ExerciseCounts::new(1, 1, 1, 1);
        assert_eq!(tiny.main_range(), (0, 0));
    }
}
