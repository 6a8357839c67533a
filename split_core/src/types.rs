//! Core domain types for the weekly split planner.
//!
//! This module defines the fundamental types used throughout the system:
//! - Planner input (experience, activities, availability)
//! - Day focuses and conflict tags
//! - Day plans and the weekly template

use crate::{Result, ValidationError};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in a planning week (index 0 = Sunday).
pub const DAYS_IN_WEEK: u8 = 7;

/// Sunday-first weekday lookup for day indices.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Map a Sunday-first day index to a `Weekday`, or `None` when out of range
pub fn weekday_for_index(day_index: u8) -> Option<Weekday> {
    WEEKDAYS.get(day_index as usize).copied()
}

// ============================================================================
// Experience
// ============================================================================

/// Training experience tier
///
/// Free text from onboarding: anything unrecognized is kept as `Other` and
/// treated like intermediate by the lookup tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Other(String),
}

impl ExperienceLevel {
    /// Parse an experience string, never failing
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "novice" => ExperienceLevel::Beginner,
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" | "expert" => ExperienceLevel::Advanced,
            other => ExperienceLevel::Other(other.to_string()),
        }
    }

    pub fn is_beginner(&self) -> bool {
        matches!(self, ExperienceLevel::Beginner)
    }

    /// Short label for split names ("Beginner", "Intermediate", ...)
    pub fn title(&self) -> &str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Other(_) => "General",
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(s: String) -> Self {
        ExperienceLevel::parse(&s)
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        level.to_string()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceLevel::Beginner => write!(f, "beginner"),
            ExperienceLevel::Intermediate => write!(f, "intermediate"),
            ExperienceLevel::Advanced => write!(f, "advanced"),
            ExperienceLevel::Other(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// Weekly Activities
// ============================================================================

/// Part of the day an external activity occupies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    Morning,
    Afternoon,
    Evening,
}

/// How demanding an external activity is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    Hard,
}

impl Intensity {
    /// Hard and moderate activities count toward the weekly frequency
    pub fn counts_as_training(self) -> bool {
        matches!(self, Intensity::Moderate | Intensity::Hard)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Moderate => write!(f, "moderate"),
            Intensity::Hard => write!(f, "hard"),
        }
    }
}

/// A fixed weekly commitment outside the gym (sport practice, class)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyActivity {
    pub name: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u8,
    pub time_window: TimeWindow,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Planner Input
// ============================================================================

/// One user's constraints for a single planning week
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitPlannerInput {
    /// Desired training days per week, including external activities (1..=7)
    pub frequency: u8,
    pub experience: ExperienceLevel,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injuries: Option<String>,
    pub session_duration_minutes: u32,
    #[serde(default)]
    pub weekly_activities: Vec<WeeklyActivity>,
    /// Days the user can physically get to a gym (used when the schedule is fixed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gym_days_available: Option<Vec<u8>>,
    #[serde(default = "default_schedule_flexibility")]
    pub schedule_flexibility: bool,
    /// Named split, or "coach_choice" to defer to the selector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_split: Option<String>,
}

fn default_schedule_flexibility() -> bool {
    true
}

impl SplitPlannerInput {
    /// Minimal input with defaults for everything but the core knobs
    pub fn new(frequency: u8, experience: ExperienceLevel, session_duration_minutes: u32) -> Self {
        Self {
            frequency,
            experience,
            goals: Vec::new(),
            equipment: Vec::new(),
            injuries: None,
            session_duration_minutes,
            weekly_activities: Vec::new(),
            gym_days_available: None,
            schedule_flexibility: true,
            preferred_split: None,
        }
    }

    /// Check the range invariants the scheduler relies on
    pub fn validate(&self) -> Result<()> {
        if !(1..=DAYS_IN_WEEK).contains(&self.frequency) {
            return Err(ValidationError::FrequencyOutOfRange(self.frequency).into());
        }
        if self.session_duration_minutes == 0 {
            return Err(ValidationError::NonPositiveSessionDuration.into());
        }
        if let Some(activity) = self
            .weekly_activities
            .iter()
            .find(|a| a.day_of_week >= DAYS_IN_WEEK)
        {
            return Err(ValidationError::ActivityDayOutOfRange {
                name: activity.name.clone(),
                day: activity.day_of_week,
            }
            .into());
        }
        if let Some(day) = self
            .gym_days_available
            .iter()
            .flatten()
            .find(|d| **d >= DAYS_IN_WEEK)
        {
            return Err(ValidationError::AvailableDayOutOfRange(*day).into());
        }
        if !self.schedule_flexibility
            && self
                .gym_days_available
                .as_ref()
                .is_some_and(|days| days.is_empty())
        {
            return Err(ValidationError::NoAvailableGymDays.into());
        }
        Ok(())
    }
}

// ============================================================================
// Focus and Conflict Tags
// ============================================================================

/// Muscle-group or movement theme assigned to a day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Upper,
    Lower,
    Full,
    Push,
    Pull,
    Legs,
    Chest,
    Back,
    Shoulders,
    Arms,
    Squat,
    Bench,
    Deadlift,
    Overhead,
    CardioStrength,
    Hiit,
    Cardio,
    Recovery,
    Rest,
    ExternalActivity,
}

impl Focus {
    /// Every focus value, sentinels included
    pub const ALL: [Focus; 20] = [
        Focus::Upper,
        Focus::Lower,
        Focus::Full,
        Focus::Push,
        Focus::Pull,
        Focus::Legs,
        Focus::Chest,
        Focus::Back,
        Focus::Shoulders,
        Focus::Arms,
        Focus::Squat,
        Focus::Bench,
        Focus::Deadlift,
        Focus::Overhead,
        Focus::CardioStrength,
        Focus::Hiit,
        Focus::Cardio,
        Focus::Recovery,
        Focus::Rest,
        Focus::ExternalActivity,
    ];

    /// Parse a focus name; unknown names fall back to `Full`
    pub fn from_name(s: &str) -> Self {
        let key = s.trim().to_lowercase();
        Focus::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == key)
            .unwrap_or(Focus::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Focus::Upper => "upper",
            Focus::Lower => "lower",
            Focus::Full => "full",
            Focus::Push => "push",
            Focus::Pull => "pull",
            Focus::Legs => "legs",
            Focus::Chest => "chest",
            Focus::Back => "back",
            Focus::Shoulders => "shoulders",
            Focus::Arms => "arms",
            Focus::Squat => "squat",
            Focus::Bench => "bench",
            Focus::Deadlift => "deadlift",
            Focus::Overhead => "overhead",
            Focus::CardioStrength => "cardio_strength",
            Focus::Hiit => "hiit",
            Focus::Cardio => "cardio",
            Focus::Recovery => "recovery",
            Focus::Rest => "rest",
            Focus::ExternalActivity => "external_activity",
        }
    }

    /// True when a fresh gym session is generated for this focus
    pub fn is_gym_session(self) -> bool {
        !matches!(self, Focus::Rest | Focus::ExternalActivity)
    }

    /// Focuses whose primary stress lands on the legs or hinge
    pub fn is_leg_dominant(self) -> bool {
        matches!(
            self,
            Focus::Lower | Focus::Legs | Focus::Squat | Focus::Deadlift
        )
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Reason a day is unsuitable for certain gym work
///
/// `GymWorkout` blocks the whole day and is only emitted on
/// external-activity days.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictTag {
    HeavyLegs,
    HeavyHinge,
    HeavyPush,
    HeavyPull,
    HeavyUpper,
    EveningSession,
    GymWorkout,
}

impl ConflictTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictTag::HeavyLegs => "heavy_legs",
            ConflictTag::HeavyHinge => "heavy_hinge",
            ConflictTag::HeavyPush => "heavy_push",
            ConflictTag::HeavyPull => "heavy_pull",
            ConflictTag::HeavyUpper => "heavy_upper",
            ConflictTag::EveningSession => "evening_session",
            ConflictTag::GymWorkout => "gym_workout",
        }
    }

    /// Pattern-specific tags (`heavy_*`)
    pub fn is_heavy(self) -> bool {
        matches!(
            self,
            ConflictTag::HeavyLegs
                | ConflictTag::HeavyHinge
                | ConflictTag::HeavyPush
                | ConflictTag::HeavyPull
                | ConflictTag::HeavyUpper
        )
    }
}

impl fmt::Display for ConflictTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Inclusive min/max range of exercise counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// One day of the weekly template
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 0 = Sunday .. 6 = Saturday
    pub day_index: u8,
    pub focus: Focus,
    pub exercise_count: CountRange,
    pub warmup_count: u32,
    pub main_count: CountRange,
    pub cooldown_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_patterns: Vec<ConflictTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DayPlan {
    /// A day with no gym content and all counts zeroed
    pub fn empty(day_index: u8, focus: Focus) -> Self {
        Self {
            day_index,
            focus,
            exercise_count: CountRange::default(),
            warmup_count: 0,
            main_count: CountRange::default(),
            cooldown_count: 0,
            avoid_patterns: Vec::new(),
            notes: None,
        }
    }

    pub fn weekday(&self) -> Option<Weekday> {
        weekday_for_index(self.day_index)
    }

    pub fn is_gym_day(&self) -> bool {
        self.focus.is_gym_session()
    }
}

/// Scheduling rules handed to downstream generators
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyConstraints {
    pub max_consecutive_heavy_days: u32,
    pub avoid_same_primary_pattern: bool,
    pub respect_activity_conflicts: bool,
}

/// Per-session minute allocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBudget {
    pub warmup_minutes: u32,
    pub main_work_minutes: u32,
    pub cooldown_minutes: u32,
    pub transition_time_per_exercise: u32,
}

/// Full output for one planning week
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    pub split_name: String,
    /// Exactly seven entries, index 0 = Sunday
    pub days: Vec<DayPlan>,
    pub constraints: WeeklyConstraints,
    pub time_budget: TimeBudget,
}

impl WeeklyTemplate {
    /// Days with a generated gym session
    pub fn gym_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days.iter().filter(|d| d.is_gym_day())
    }

    /// Days consumed by a fixed external activity
    pub fn activity_days(&self) -> impl Iterator<Item = &DayPlan> {
        self.days
            .iter()
            .filter(|d| d.focus == Focus::ExternalActivity)
    }

    /// Gym days plus external-activity days
    pub fn training_day_count(&self) -> usize {
        self.gym_days().count() + self.activity_days().count()
    }

    pub fn day(&self, day_index: u8) -> Option<&DayPlan> {
        self.days.get(day_index as usize)
    }
}
