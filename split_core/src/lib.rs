#![forbid(unsafe_code)]

//! Core domain model and planning logic for the weekly split planner.
//!
//! This crate provides:
//! - Domain types (planner input, day plans, weekly templates)
//! - Exercise-count policy and split tables
//! - Activity conflict detection
//! - The weekly scheduler
//! - Prompt constraint formatting for the exercise generator

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod input;
pub mod counts;
pub mod conflicts;
pub mod split;
pub mod scheduler;
pub mod prompt;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::Config;
pub use input::load_planner_input;
pub use counts::{exercise_counts, DurationBucket, ExerciseCounts};
pub use conflicts::day_conflicts;
pub use split::{preferred_split_keys, select_split, SplitSelection, SplitSource};
pub use scheduler::generate_weekly_template;
pub use prompt::{format_constraints, format_constraints_with_context};
