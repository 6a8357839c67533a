//! Weekly scheduler.
//!
//! Turns one `SplitPlannerInput` into a seven-day `WeeklyTemplate`:
//! 1. Count hard/moderate activity days toward the weekly frequency
//! 2. Select the focus sequence for the remaining gym days
//! 3. Size sessions from the exercise-count policy
//! 4. Build a candidate pool free of activity days and conflicts
//! 5. Spread gym days evenly over the pool
//! 6. Emit one `DayPlan` per weekday
//!
//! The whole computation is pure: no clock, no randomness, no I/O.

use crate::conflicts::{blocks_gym_session, day_conflicts};
use crate::{
    exercise_counts, select_split, weekday_for_index, ConflictTag, CountRange, DayPlan,
    ExerciseCounts, ExperienceLevel, Focus, Result, SplitPlannerInput, TimeBudget,
    WeeklyActivity, WeeklyConstraints, WeeklyTemplate, DAYS_IN_WEEK,
};
use std::collections::BTreeSet;

/// Generate the weekly template for a validated input
///
/// Returns `Error::Validation` when the input breaks a range invariant;
/// every other irregularity (unknown experience, unknown split name,
/// an exhausted day pool) degrades to a documented default.
pub fn generate_weekly_template(input: &SplitPlannerInput) -> Result<WeeklyTemplate> {
    input.validate()?;

    let activity_days = training_activity_days(&input.weekly_activities);
    let gym_days_needed = input
        .frequency
        .saturating_sub(activity_days.len() as u8)
        .max(1);

    tracing::debug!(
        "Frequency {} with {} activity day(s): {} gym day(s) needed",
        input.frequency,
        activity_days.len(),
        gym_days_needed
    );

    let split = select_split(
        gym_days_needed,
        &input.experience,
        input.preferred_split.as_deref(),
    );
    let counts = exercise_counts(&input.experience, input.session_duration_minutes);

    let conflicts: Vec<BTreeSet<ConflictTag>> = (0..DAYS_IN_WEEK)
        .map(|day| day_conflicts(day, &input.weekly_activities))
        .collect();

    let pool = candidate_pool(input, &activity_days, &conflicts);
    let training_days = distribute_days(&pool, gym_days_needed as usize);

    tracing::debug!("Candidate pool {:?}, training days {:?}", pool, training_days);

    let mut days = Vec::with_capacity(DAYS_IN_WEEK as usize);
    let mut focus_index = 0;

    for day in 0..DAYS_IN_WEEK {
        let plan = if activity_days.contains(&day) {
            external_activity_day(day, &input.weekly_activities)
        } else if training_days.contains(&day) {
            let focus = split.focus_at(focus_index);
            focus_index += 1;
            gym_day(day, focus, &counts)
        } else {
            DayPlan::empty(day, Focus::Rest)
        };
        days.push(plan);
    }

    let template = WeeklyTemplate {
        split_name: split.name,
        days,
        constraints: weekly_constraints(&input.experience),
        time_budget: time_budget(&input.experience, input.session_duration_minutes),
    };

    tracing::info!(
        "Planned '{}': {} gym day(s), {} activity day(s)",
        template.split_name,
        template.gym_days().count(),
        template.activity_days().count()
    );

    Ok(template)
}

/// Distinct days holding a hard or moderate external activity
fn training_activity_days(activities: &[WeeklyActivity]) -> BTreeSet<u8> {
    activities
        .iter()
        .filter(|a| a.intensity.counts_as_training())
        .map(|a| a.day_of_week)
        .collect()
}

/// Days eligible for a fresh gym session, in ascending order
///
/// Starts from the whole week (flexible schedule) or the user's available
/// days, then drops activity days and conflicted days. When a fixed schedule
/// leaves nothing, the same filter is applied to the whole week; activity
/// days are only reinstated when every day holds one.
fn candidate_pool(
    input: &SplitPlannerInput,
    activity_days: &BTreeSet<u8>,
    conflicts: &[BTreeSet<ConflictTag>],
) -> Vec<u8> {
    let base: Vec<u8> = match (&input.gym_days_available, input.schedule_flexibility) {
        (Some(available), false) => available
            .iter()
            .copied()
            .collect::<BTreeSet<u8>>()
            .into_iter()
            .collect(),
        _ => (0..DAYS_IN_WEEK).collect(),
    };

    let filtered = usable_days(base.iter().copied(), activity_days, conflicts);
    if !filtered.is_empty() {
        return filtered;
    }

    let whole_week = usable_days(0..DAYS_IN_WEEK, activity_days, conflicts);
    if !whole_week.is_empty() {
        tracing::warn!(
            "No usable day among {:?}, widening to {:?}",
            base,
            whole_week
        );
        return whole_week;
    }

    tracing::warn!("Every day holds an activity, falling back to {:?}", base);
    base
}

fn usable_days(
    days: impl IntoIterator<Item = u8>,
    activity_days: &BTreeSet<u8>,
    conflicts: &[BTreeSet<ConflictTag>],
) -> Vec<u8> {
    days.into_iter()
        .filter(|day| !activity_days.contains(day))
        .filter(|day| !blocks_gym_session(&conflicts[*day as usize]))
        .collect()
}

/// Pick `count` roughly evenly spaced days from the pool
fn distribute_days(pool: &[u8], count: usize) -> Vec<u8> {
    if count == 0 || pool.is_empty() {
        return Vec::new();
    }

    if count <= pool.len() {
        let step = pool.len() / count;
        (0..count)
            .map(|i| pool[(i * step).min(pool.len() - 1)])
            .collect()
    } else {
        pool.to_vec()
    }
}

fn external_activity_day(day: u8, activities: &[WeeklyActivity]) -> DayPlan {
    let descriptions: Vec<String> = activities
        .iter()
        .filter(|a| a.day_of_week == day && a.intensity.counts_as_training())
        .map(|a| match &a.notes {
            Some(notes) => format!("{} ({}) - {}", a.name, a.intensity, notes),
            None => format!("{} ({})", a.name, a.intensity),
        })
        .collect();

    let verb = if descriptions.len() > 1 { "count" } else { "counts" };
    let weekday = weekday_for_index(day)
        .map(|w| format!("{}: ", w))
        .unwrap_or_default();

    let mut plan = DayPlan::empty(day, Focus::ExternalActivity);
    plan.avoid_patterns = vec![ConflictTag::GymWorkout];
    plan.notes = Some(format!(
        "{}{} {} as training",
        weekday,
        descriptions.join(", "),
        verb
    ));
    plan
}

fn gym_day(day: u8, focus: Focus, counts: &ExerciseCounts) -> DayPlan {
    let (main_min, main_max) = counts.main_range();

    DayPlan {
        day_index: day,
        focus,
        exercise_count: CountRange {
            min: counts.min,
            max: counts.max,
        },
        warmup_count: counts.warmup,
        main_count: CountRange {
            min: main_min,
            max: main_max,
        },
        cooldown_count: counts.cooldown,
        avoid_patterns: Vec::new(),
        notes: None,
    }
}

fn time_budget(experience: &ExperienceLevel, session_duration_minutes: u32) -> TimeBudget {
    let beginner = experience.is_beginner();
    let warmup_minutes = if beginner { 8 } else { 6 };
    let cooldown_minutes = if beginner { 5 } else { 4 };

    TimeBudget {
        warmup_minutes,
        main_work_minutes: session_duration_minutes.saturating_sub(warmup_minutes + cooldown_minutes),
        cooldown_minutes,
        transition_time_per_exercise: if beginner { 2 } else { 1 },
    }
}

fn weekly_constraints(experience: &ExperienceLevel) -> WeeklyConstraints {
    WeeklyConstraints {
        max_consecutive_heavy_days: if experience.is_beginner() { 2 } else { 3 },
        avoid_same_primary_pattern: true,
        respect_activity_conflicts: true,
    }
}
