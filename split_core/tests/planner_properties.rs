//! Property tests for the weekly scheduler.
//!
//! These tests verify invariants that must hold for any valid input:
//! - Seven ordered days
//! - Frequency accounting across gym and activity days, flexible or fixed
//! - Zeroed counts on non-gym days
//! - Determinism
//! - Hard activity conflicts respected
//! - Formatter output for every day

use proptest::prelude::*;
use split_core::{
    format_constraints, format_constraints_with_context, generate_weekly_template,
    preferred_split_keys, CountRange, Error, ExperienceLevel, Intensity, SplitPlannerInput,
    TimeWindow, ValidationError, WeeklyActivity,
};
use std::collections::BTreeSet;

const ACTIVITY_NAMES: &[&str] = &[
    "Football",
    "Running",
    "Boxing",
    "Climbing",
    "Swimming",
    "Yoga",
    "Choir",
    "Cycling",
];

fn experience_strategy() -> impl Strategy<Value = ExperienceLevel> {
    prop_oneof![
        Just(ExperienceLevel::Beginner),
        Just(ExperienceLevel::Intermediate),
        Just(ExperienceLevel::Advanced),
        "[a-z]{3,10}".prop_map(|s| ExperienceLevel::parse(&s)),
    ]
}

fn activity_strategy() -> impl Strategy<Value = WeeklyActivity> {
    (
        prop::sample::select(ACTIVITY_NAMES),
        0u8..7,
        prop_oneof![
            Just(TimeWindow::Morning),
            Just(TimeWindow::Afternoon),
            Just(TimeWindow::Evening)
        ],
        prop_oneof![
            Just(Intensity::Low),
            Just(Intensity::Moderate),
            Just(Intensity::Hard)
        ],
    )
        .prop_map(|(name, day, window, intensity)| WeeklyActivity {
            name: name.to_string(),
            day_of_week: day,
            time_window: window,
            intensity,
            notes: None,
        })
}

fn preferred_split_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("coach_choice".to_string())),
        prop::sample::select(preferred_split_keys()).prop_map(|k| Some(k.to_string())),
        Just(Some("made_up_split".to_string())),
    ]
}

fn input_strategy() -> impl Strategy<Value = SplitPlannerInput> {
    (
        1u8..=7,
        experience_strategy(),
        1u32..=120,
        prop::collection::vec(activity_strategy(), 0..4),
        any::<bool>(),
        prop::collection::btree_set(0u8..7, 1..=7),
        preferred_split_strategy(),
    )
        .prop_map(
            |(frequency, experience, duration, activities, flexible, available, preferred)| {
                let mut input = SplitPlannerInput::new(frequency, experience, duration);
                input.weekly_activities = activities;
                input.schedule_flexibility = flexible;
                input.gym_days_available = Some(available.into_iter().collect());
                input.preferred_split = preferred;
                input
            },
        )
}

fn training_activity_days(input: &SplitPlannerInput) -> BTreeSet<u8> {
    input
        .weekly_activities
        .iter()
        .filter(|a| a.intensity.counts_as_training())
        .map(|a| a.day_of_week)
        .collect()
}

fn activity_day_count(input: &SplitPlannerInput) -> usize {
    training_activity_days(input).len()
}

proptest! {
    #[test]
    fn always_seven_ordered_days(input in input_strategy()) {
        let template = generate_weekly_template(&input).unwrap();

        prop_assert_eq!(template.days.len(), 7);
        for (i, day) in template.days.iter().enumerate() {
            prop_assert_eq!(day.day_index as usize, i);
        }
    }

    #[test]
    fn frequency_is_accounted_for(input in input_strategy()) {
        let activity_days = activity_day_count(&input);
        prop_assume!(input.schedule_flexibility);
        prop_assume!(activity_days < input.frequency as usize);

        let template = generate_weekly_template(&input).unwrap();

        prop_assert_eq!(template.activity_days().count(), activity_days);
        prop_assert_eq!(template.training_day_count(), input.frequency as usize);
    }

    #[test]
    fn fixed_schedule_frequency_is_accounted_for(
        frequency in 1u8..=7,
        experience in experience_strategy(),
        activities in prop::collection::vec(activity_strategy(), 0..4),
        available in prop::collection::btree_set(0u8..7, 1..=7),
    ) {
        let mut input = SplitPlannerInput::new(frequency, experience, 45);
        input.weekly_activities = activities;

        let activity_days = training_activity_days(&input);
        prop_assume!(activity_days.len() < frequency as usize);

        // Top up the available days until enough of them are activity-free
        let gym_days_needed = frequency as usize - activity_days.len();
        let mut available = available;
        for day in (0u8..7).filter(|d| !activity_days.contains(d)) {
            if available.iter().filter(|d| !activity_days.contains(d)).count() >= gym_days_needed {
                break;
            }
            available.insert(day);
        }

        input.schedule_flexibility = false;
        input.gym_days_available = Some(available.iter().copied().collect());

        let template = generate_weekly_template(&input).unwrap();

        prop_assert_eq!(template.gym_days().count(), gym_days_needed);
        prop_assert_eq!(template.training_day_count(), frequency as usize);
        for day in template.gym_days() {
            prop_assert!(available.contains(&day.day_index));
        }
    }

    #[test]
    fn fixed_schedule_always_trains(input in input_strategy()) {
        let mut input = input;
        input.schedule_flexibility = false;

        let template = generate_weekly_template(&input).unwrap();

        prop_assert!(template.training_day_count() >= 1);
        if activity_day_count(&input) < 7 {
            prop_assert!(template.gym_days().count() >= 1);
        }
    }

    #[test]
    fn non_gym_days_are_zeroed(input in input_strategy()) {
        let template = generate_weekly_template(&input).unwrap();

        for day in template.days.iter().filter(|d| !d.is_gym_day()) {
            prop_assert_eq!(day.exercise_count, CountRange::default());
            prop_assert_eq!(day.main_count, CountRange::default());
            prop_assert_eq!(day.warmup_count, 0);
            prop_assert_eq!(day.cooldown_count, 0);
        }
    }

    #[test]
    fn planning_is_deterministic(input in input_strategy()) {
        let first = generate_weekly_template(&input).unwrap();
        let second = generate_weekly_template(&input.clone()).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn hard_running_day_never_gets_leg_work(
        frequency in 1u8..=6,
        experience in experience_strategy(),
        duration in 20u32..=90,
        preferred in preferred_split_strategy(),
    ) {
        let mut input = SplitPlannerInput::new(frequency, experience, duration);
        input.preferred_split = preferred;
        input.weekly_activities = vec![WeeklyActivity {
            name: "Running".into(),
            day_of_week: 3,
            time_window: TimeWindow::Morning,
            intensity: Intensity::Hard,
            notes: None,
        }];

        let template = generate_weekly_template(&input).unwrap();
        let wednesday = template.day(3).unwrap();

        prop_assert!(!(wednesday.is_gym_day() && wednesday.focus.is_leg_dominant()));
    }

    #[test]
    fn every_day_formats(input in input_strategy()) {
        let template = generate_weekly_template(&input).unwrap();

        for day in &template.days {
            let text = format_constraints(day, &input.experience);
            prop_assert!(!text.is_empty());
            let text = format_constraints_with_context(day, &input);
            prop_assert!(!text.is_empty());
        }
    }
}

#[test]
fn out_of_range_inputs_are_rejected() {
    for frequency in [0u8, 8, 200] {
        let input = SplitPlannerInput::new(frequency, ExperienceLevel::Beginner, 45);
        assert!(matches!(
            generate_weekly_template(&input),
            Err(Error::Validation(ValidationError::FrequencyOutOfRange(f))) if f == frequency
        ));
    }
}

#[test]
fn empty_fixed_schedule_is_rejected() {
    let mut input = SplitPlannerInput::new(3, ExperienceLevel::Beginner, 45);
    input.schedule_flexibility = false;
    input.gym_days_available = Some(vec![]);

    assert!(matches!(
        generate_weekly_template(&input),
        Err(Error::Validation(ValidationError::NoAvailableGymDays))
    ));
}

#[test]
fn concurrent_planning_matches_sequential() {
    let mut input = SplitPlannerInput::new(4, ExperienceLevel::Intermediate, 45);
    input.weekly_activities = vec![WeeklyActivity {
        name: "Football".into(),
        day_of_week: 5,
        time_window: TimeWindow::Evening,
        intensity: Intensity::Hard,
        notes: None,
    }];

    let expected = generate_weekly_template(&input).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = input.clone();
            std::thread::spawn(move || generate_weekly_template(&input).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
