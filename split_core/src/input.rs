//! Planner input loader.
//!
//! Reads a `SplitPlannerInput` from a JSON file produced by the onboarding
//! backend. The planner itself never touches the filesystem.

use crate::{Result, SplitPlannerInput};
use std::path::Path;

/// Load and validate a planner input from a JSON file
///
/// Unlike optional signals, the input is mandatory: missing files and
/// malformed JSON are errors.
pub fn load_planner_input(path: &Path) -> Result<SplitPlannerInput> {
    let contents = std::fs::read_to_string(path)?;
    let input: SplitPlannerInput = serde_json::from_str(&contents)?;
    input.validate()?;

    tracing::debug!(
        "Loaded planner input from {:?}: frequency {}, {} activities",
        path,
        input.frequency,
        input.weekly_activities.len()
    );

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ExperienceLevel, Intensity, TimeWindow};

    #[test]
    fn test_load_planner_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("input.json");

        let json = r#"{
            "frequency": 4,
            "experience": "intermediate",
            "session_duration_minutes": 45,
            "goals": ["muscle_gain"],
            "weekly_activities": [
                {"name": "Football", "day_of_week": 5, "time_window": "evening", "intensity": "hard"}
            ]
        }"#;
        std::fs::write(&path, json).unwrap();

        let input = load_planner_input(&path).unwrap();
        assert_eq!(input.frequency, 4);
        assert_eq!(input.experience, ExperienceLevel::Intermediate);
        assert_eq!(input.weekly_activities[0].time_window, TimeWindow::Evening);
        assert_eq!(input.weekly_activities[0].intensity, Intensity::Hard);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(matches!(load_planner_input(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        assert!(matches!(load_planner_input(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_out_of_range_input_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("input.json");
        std::fs::write(
            &path,
            r#"{"frequency": 0, "experience": "beginner", "session_duration_minutes": 30}"#,
        )
        .unwrap();

        assert!(matches!(load_planner_input(&path), Err(Error::Validation(_))));
    }
}
