//! Split selection.
//!
//! Chooses the ordered focus sequence for the week's gym days, either from an
//! explicitly preferred split or from the default table keyed by
//! (gym days needed, experience).

use crate::{ExperienceLevel, Focus};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentinel preference meaning "let the selector decide"
pub const COACH_CHOICE: &str = "coach_choice";

/// Smallest and largest day counts present in the default table
const MIN_TABLE_DAYS: u8 = 2;
const MAX_TABLE_DAYS: u8 = 6;

/// A named focus pattern
#[derive(Clone, Debug)]
pub struct SplitTemplate {
    pub name: &'static str,
    pub focuses: &'static [Focus],
}

/// Where a selection came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SplitSource {
    /// Explicit user preference, by table key
    Preferred(String),
    /// Default table entry actually used
    Default {
        days: u8,
        experience: ExperienceLevel,
    },
    /// Nothing matched; single full-body focus
    Fallback,
}

/// Selected split, sized to the number of gym days needed
#[derive(Clone, Debug)]
pub struct SplitSelection {
    pub name: String,
    pub focuses: Vec<Focus>,
    pub source: SplitSource,
}

impl SplitSelection {
    /// Focus for the nth gym day, cycling through the sequence
    pub fn focus_at(&self, n: usize) -> Focus {
        if self.focuses.is_empty() {
            return Focus::Full;
        }
        self.focuses[n % self.focuses.len()]
    }
}

static PREFERRED_SPLITS: Lazy<HashMap<&'static str, SplitTemplate>> = Lazy::new(|| {
    use Focus::*;

    HashMap::from([
        (
            "push_pull_legs",
            SplitTemplate {
                name: "Push/Pull/Legs",
                focuses: &[Push, Pull, Legs],
            },
        ),
        (
            "upper_lower_full",
            SplitTemplate {
                name: "Upper/Lower/Full",
                focuses: &[Upper, Lower, Full],
            },
        ),
        (
            "upper_lower",
            SplitTemplate {
                name: "Upper/Lower",
                focuses: &[Upper, Lower],
            },
        ),
        (
            "bro_split",
            SplitTemplate {
                name: "Bro Split",
                focuses: &[Chest, Back, Shoulders, Legs, Arms],
            },
        ),
        (
            "full_body",
            SplitTemplate {
                name: "Full Body",
                focuses: &[Full, Full, Full, Full],
            },
        ),
        (
            "strength",
            SplitTemplate {
                name: "Strength (Big Four)",
                focuses: &[Squat, Bench, Deadlift, Overhead],
            },
        ),
        (
            "endurance",
            SplitTemplate {
                name: "Endurance Hybrid",
                focuses: &[CardioStrength, Hiit, CardioStrength],
            },
        ),
    ])
});

type DefaultKey = (u8, ExperienceLevel);

static DEFAULT_SPLITS: Lazy<HashMap<DefaultKey, SplitTemplate>> = Lazy::new(|| {
    use ExperienceLevel::{Advanced, Beginner, Intermediate};
    use Focus::*;

    HashMap::from([
        // 2 days
        ((2, Beginner), SplitTemplate { name: "Full Body", focuses: &[Full, Full] }),
        ((2, Intermediate), SplitTemplate { name: "Upper/Lower", focuses: &[Upper, Lower] }),
        ((2, Advanced), SplitTemplate { name: "Upper/Lower", focuses: &[Upper, Lower] }),
        // 3 days
        ((3, Beginner), SplitTemplate { name: "Upper/Lower/Full", focuses: &[Upper, Lower, Full] }),
        ((3, Intermediate), SplitTemplate { name: "Push/Pull/Legs", focuses: &[Push, Pull, Legs] }),
        ((3, Advanced), SplitTemplate { name: "Push/Pull/Legs", focuses: &[Push, Pull, Legs] }),
        // 4 days
        (
            (4, Beginner),
            SplitTemplate { name: "Upper/Lower", focuses: &[Upper, Lower, Upper, Lower] },
        ),
        (
            (4, Intermediate),
            SplitTemplate { name: "Upper/Lower", focuses: &[Upper, Lower, Upper, Lower] },
        ),
        (
            (4, Advanced),
            SplitTemplate { name: "Push/Pull/Legs + Upper", focuses: &[Push, Pull, Legs, Upper] },
        ),
        // 5 days
        (
            (5, Beginner),
            SplitTemplate {
                name: "Upper/Lower/Full",
                focuses: &[Upper, Lower, Full, Upper, Lower],
            },
        ),
        (
            (5, Intermediate),
            SplitTemplate {
                name: "Push/Pull/Legs + Upper/Lower",
                focuses: &[Push, Pull, Legs, Upper, Lower],
            },
        ),
        (
            (5, Advanced),
            SplitTemplate {
                name: "Body Part Split",
                focuses: &[Chest, Back, Shoulders, Legs, Arms],
            },
        ),
        // 6 days
        (
            (6, Beginner),
            SplitTemplate {
                name: "Upper/Lower/Full x2",
                focuses: &[Upper, Lower, Full, Upper, Lower, Full],
            },
        ),
        (
            (6, Intermediate),
            SplitTemplate {
                name: "Upper/Lower + Push/Pull/Legs + Full",
                focuses: &[Upper, Lower, Push, Pull, Legs, Full],
            },
        ),
        (
            (6, Advanced),
            SplitTemplate {
                name: "Push/Pull/Legs x2",
                focuses: &[Push, Pull, Legs, Push, Pull, Legs],
            },
        ),
    ])
});

/// Keys accepted as a preferred split, sorted
pub fn preferred_split_keys() -> Vec<&'static str> {
    let mut keys: Vec<_> = PREFERRED_SPLITS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

fn normalize_split_key(name: &str) -> String {
    name.trim().to_lowercase().replace(['-', ' ', '/'], "_")
}

/// Ordered default-table lookups: the exact key, then each lower day-count
/// bucket at intermediate, nearest first
fn default_lookup_chain(days: u8, experience: &ExperienceLevel) -> Vec<DefaultKey> {
    let mut chain = vec![(days, experience.clone())];
    let top = days.min(MAX_TABLE_DAYS);
    chain.extend((MIN_TABLE_DAYS..=top).rev().map(|d| (d, ExperienceLevel::Intermediate)));
    chain
}

/// Truncate or pad (repeating the last element) to exactly `len` focuses
fn fit_to_length(focuses: &[Focus], len: usize) -> Vec<Focus> {
    let last = focuses.last().copied().unwrap_or(Focus::Full);
    focuses
        .iter()
        .copied()
        .chain(std::iter::repeat(last))
        .take(len)
        .collect()
}

/// Cycle a sequence to exactly `len` focuses
fn cycle_to_length(focuses: &[Focus], len: usize) -> Vec<Focus> {
    focuses.iter().copied().cycle().take(len).collect()
}

/// Choose the focus sequence for `gym_days_needed` gym sessions
///
/// A recognized `preferred_split` wins regardless of experience and is
/// truncated or padded to length. Otherwise the default table is consulted
/// through its fallback chain, ending at a single full-body focus.
pub fn select_split(
    gym_days_needed: u8,
    experience: &ExperienceLevel,
    preferred_split: Option<&str>,
) -> SplitSelection {
    let len = gym_days_needed.max(1) as usize;

    if let Some(preferred) = preferred_split {
        let key = normalize_split_key(preferred);
        if key != COACH_CHOICE {
            if let Some((table_key, template)) = PREFERRED_SPLITS.get_key_value(key.as_str()) {
                tracing::debug!("Using preferred split '{}'", table_key);
                return SplitSelection {
                    name: template.name.to_string(),
                    focuses: fit_to_length(template.focuses, len),
                    source: SplitSource::Preferred(table_key.to_string()),
                };
            }
            tracing::warn!(
                "Unknown preferred split '{}', falling back to automatic selection",
                preferred
            );
        }
    }

    let found = default_lookup_chain(gym_days_needed, experience)
        .into_iter()
        .find_map(|key| DEFAULT_SPLITS.get(&key).map(|template| (key, template)));

    match found {
        Some(((days, table_experience), template)) => {
            tracing::debug!(
                "Default split for {} days / {}: {} (table entry {} days / {})",
                gym_days_needed,
                experience,
                template.name,
                days,
                table_experience
            );
            SplitSelection {
                name: format!(
                    "{} {}-Day {}",
                    experience.title(),
                    gym_days_needed,
                    template.name
                ),
                focuses: cycle_to_length(template.focuses, len),
                source: SplitSource::Default {
                    days,
                    experience: table_experience,
                },
            }
        }
        None => {
            tracing::debug!("No default split for {} days, using full body", gym_days_needed);
            SplitSelection {
                name: format!("{} {}-Day Full Body", experience.title(), gym_days_needed),
                focuses: vec![Focus::Full; len],
                source: SplitSource::Fallback,
            }
        }
    }
}
