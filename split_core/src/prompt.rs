//! Prompt constraint formatting.
//!
//! Renders a `DayPlan` as the steering block handed to the external exercise
//! generator. Output is plain text, one directive per line.

use crate::{DayPlan, ExperienceLevel, Focus, SplitPlannerInput};
use std::fmt::Write;

/// Natural-language description for a day's focus
pub fn focus_description(focus: Focus) -> &'static str {
    match focus {
        Focus::Upper => "UPPER BODY focus: chest, back, shoulders, arms. Minimal or no leg exercises.",
        Focus::Lower => "LOWER BODY focus: quads, hamstrings, glutes, calves. Minimal upper body work.",
        Focus::Full => "FULL BODY focus: one or two compound movements per major pattern (squat, hinge, push, pull).",
        Focus::Push => "PUSH focus: chest, shoulders, triceps. No pulling or leg-dominant exercises.",
        Focus::Pull => "PULL focus: back, rear delts, biceps. No pressing or leg-dominant exercises.",
        Focus::Legs => "LEGS focus: squats, lunges, hinges, calves. No upper body pressing or pulling.",
        Focus::Chest => "CHEST focus: presses and flyes from multiple angles. Triceps finishers allowed.",
        Focus::Back => "BACK focus: vertical and horizontal pulls, rows, lat work. Biceps finishers allowed.",
        Focus::Shoulders => "SHOULDERS focus: overhead pressing, lateral and rear delt work, upper traps.",
        Focus::Arms => "ARMS focus: biceps and triceps isolation, forearm and grip work.",
        Focus::Squat => "SQUAT focus: a heavy squat variation first, then quad and glute accessories.",
        Focus::Bench => "BENCH focus: a heavy bench press variation first, then chest and triceps accessories.",
        Focus::Deadlift => "DEADLIFT focus: a heavy deadlift variation first, then posterior chain accessories.",
        Focus::Overhead => "OVERHEAD focus: a heavy overhead press variation first, then shoulder and upper back accessories.",
        Focus::CardioStrength => "CARDIO-STRENGTH focus: circuits of compound lifts with short rest to keep heart rate elevated.",
        Focus::Hiit => "HIIT focus: short high-intensity intervals with full-body movements and timed rest.",
        Focus::Cardio => "CARDIO focus: steady-state or tempo conditioning work. No heavy lifting.",
        Focus::Recovery => "RECOVERY focus: mobility, light stretching and low-intensity movement only.",
        Focus::Rest => "REST DAY: do not generate a workout. Light walking or gentle mobility at most.",
        Focus::ExternalActivity => "EXTERNAL ACTIVITY DAY: the user already trains today. Do not generate a gym workout.",
    }
}

/// Description for a focus given by name; unknown names use the full-body text
pub fn focus_description_for_name(name: &str) -> &'static str {
    focus_description(Focus::from_name(name))
}

fn experience_guidance(experience: &ExperienceLevel) -> &'static str {
    match experience {
        ExperienceLevel::Beginner => {
            "Experience: beginner. Prefer machines, dumbbells and simple compound lifts with moderate loads; avoid complex barbell technique."
        }
        ExperienceLevel::Advanced => {
            "Experience: advanced. Heavy compound work and intensity techniques (drop sets, supersets) are allowed."
        }
        ExperienceLevel::Intermediate | ExperienceLevel::Other(_) => {
            "Experience: intermediate. Free-weight compounds with progressive overload and a few isolation movements."
        }
    }
}

/// Constraint block for one day
pub fn format_constraints(day: &DayPlan, experience: &ExperienceLevel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", focus_description(day.focus));

    if day.is_gym_day() {
        let _ = writeln!(
            out,
            "Exercises: {}-{} total ({} warm-up, {}-{} main, {} cooldown).",
            day.exercise_count.min,
            day.exercise_count.max,
            day.warmup_count,
            day.main_count.min,
            day.main_count.max,
            day.cooldown_count
        );
        let _ = writeln!(out, "{}", experience_guidance(experience));
    }

    if !day.avoid_patterns.is_empty() {
        let tags: Vec<&str> = day.avoid_patterns.iter().map(|t| t.as_str()).collect();
        let _ = writeln!(out, "Avoid: {}.", tags.join(", "));
    }

    if let Some(ref notes) = day.notes {
        let _ = writeln!(out, "Notes: {}", notes);
    }

    out
}

/// Constraint block for one day plus the user's equipment, goals and injuries
pub fn format_constraints_with_context(day: &DayPlan, input: &SplitPlannerInput) -> String {
    let mut out = format_constraints(day, &input.experience);

    if !day.is_gym_day() {
        return out;
    }

    if !input.equipment.is_empty() {
        let _ = writeln!(out, "Available equipment only: {}.", input.equipment.join(", "));
    }
    if !input.goals.is_empty() {
        let _ = writeln!(out, "Goals: {}.", input.goals.join(", "));
    }
    if let Some(injuries) = input.injuries.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = writeln!(
            out,
            "Injuries/limitations: {}. Choose exercises that do not aggravate them.",
            injuries.trim()
        );
    }
    let _ = writeln!(
        out,
        "Session length: {} minutes.",
        input.session_duration_minutes
    );

    out
}
