//! Activity conflict detection.
//!
//! Classifies hard external activities by keyword to decide which gym
//! patterns a day should avoid. Names are matched word by word, so "Trail Run"
//! is running but "Crunch Pilates" is not. Names the table doesn't know
//! produce no pattern conflict.

use crate::{ConflictTag, Intensity, TimeWindow, WeeklyActivity};
use std::collections::BTreeSet;

/// Activity family keywords and the patterns they load
struct ActivityFamily {
    keywords: &'static [&'static str],
    tags: &'static [ConflictTag],
}

const ACTIVITY_FAMILIES: &[ActivityFamily] = &[
    ActivityFamily {
        keywords: &[
            "run", "runs", "running", "jog", "jogging", "cycle", "cycling", "bike",
            "biking", "spin", "spinning", "football", "soccer", "basketball", "hiit",
            "sprint", "sprints", "sprinting",
        ],
        tags: &[ConflictTag::HeavyLegs, ConflictTag::HeavyHinge],
    },
    ActivityFamily {
        keywords: &[
            "boxing", "kickboxing", "climbing", "bouldering", "swim", "swimming",
            "martial", "mma", "bjj", "jiu", "jitsu", "judo", "karate", "muay",
            "wrestling",
        ],
        tags: &[
            ConflictTag::HeavyPush,
            ConflictTag::HeavyPull,
            ConflictTag::HeavyUpper,
        ],
    },
];

/// Pattern tags implied by an activity name (case-insensitive, whole words)
fn classify_activity(name: &str) -> impl Iterator<Item = ConflictTag> {
    let name = name.to_lowercase();
    let words: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    ACTIVITY_FAMILIES
        .iter()
        .filter(|family| family.keywords.iter().any(|kw| words.contains(kw)))
        .flat_map(|family| family.tags.iter().copied())
        .collect::<Vec<_>>()
        .into_iter()
}

/// Conflict tags for a day given the week's external activities
///
/// Only hard activities generate conflicts. Moderate and low activities
/// never block gym focus here, even though moderate ones still count toward
/// the weekly training frequency in the scheduler.
pub fn day_conflicts(day_index: u8, activities: &[WeeklyActivity]) -> BTreeSet<ConflictTag> {
    let mut conflicts = BTreeSet::new();

    for activity in activities
        .iter()
        .filter(|a| a.day_of_week == day_index && a.intensity == Intensity::Hard)
    {
        conflicts.extend(classify_activity(&activity.name));

        if activity.time_window == TimeWindow::Evening {
            conflicts.insert(ConflictTag::EveningSession);
        }
    }

    if !conflicts.is_empty() {
        tracing::debug!("Day {} conflicts: {:?}", day_index, conflicts);
    }
    conflicts
}

/// True when a day should not receive a fresh gym session
pub fn blocks_gym_session(conflicts: &BTreeSet<ConflictTag>) -> bool {
    conflicts
        .iter()
        .any(|tag| tag.is_heavy() || *tag == ConflictTag::EveningSession)
}
