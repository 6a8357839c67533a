use clap::{Parser, Subcommand};
use split_core::config::OutputFormat;
use split_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "splitplan")]
#[command(about = "Weekly training split planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a training week
    Plan {
        /// Planner input as JSON (flags below are ignored when given)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Training days per week, including external activities (1-7)
        #[arg(long)]
        frequency: Option<u8>,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        experience: Option<String>,

        /// Session length in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Preferred split (see `splitplan splits`), or coach_choice
        #[arg(long)]
        split: Option<String>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print the exercise-generator constraints for one day
    Prompt {
        /// Planner input as JSON
        #[arg(long)]
        input: PathBuf,

        /// Day index (0 = Sunday .. 6 = Saturday)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..7))]
        day: u8,
    },

    /// List preferred split names
    Splits,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    split_core::logging::init(cli.verbose);

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Plan {
            input,
            frequency,
            experience,
            duration,
            split,
            format,
        } => {
            let planner_input = match input {
                Some(path) => load_planner_input(&path)?,
                None => input_from_flags(&config, frequency, experience, duration, split),
            };
            cmd_plan(&planner_input, format.unwrap_or(config.output.format))
        }
        Commands::Prompt { input, day } => cmd_prompt(&input, day),
        Commands::Splits => {
            cmd_splits();
            Ok(())
        }
    }
}

fn input_from_flags(
    config: &Config,
    frequency: Option<u8>,
    experience: Option<String>,
    duration: Option<u32>,
    split: Option<String>,
) -> SplitPlannerInput {
    let defaults = &config.defaults;

    let mut input = SplitPlannerInput::new(
        frequency.unwrap_or(defaults.frequency),
        experience
            .map(|e| ExperienceLevel::parse(&e))
            .unwrap_or_else(|| defaults.experience.clone()),
        duration.unwrap_or(defaults.session_duration_minutes),
    );
    input.schedule_flexibility = defaults.schedule_flexibility;
    input.preferred_split = split;
    input
}

fn cmd_plan(input: &SplitPlannerInput, format: OutputFormat) -> Result<()> {
    let template = generate_weekly_template(input)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&template)?),
        OutputFormat::Text => display_template(&template),
    }

    Ok(())
}

fn cmd_prompt(path: &Path, day: u8) -> Result<()> {
    let input = load_planner_input(path)?;
    let template = generate_weekly_template(&input)?;

    let plan = template
        .day(day)
        .ok_or_else(|| Error::Config(format!("Day {} not in template", day)))?;

    tracing::debug!("Formatting constraints for day {} ({})", day, plan.focus);
    print!("{}", format_constraints_with_context(plan, &input));
    Ok(())
}

fn cmd_splits() {
    for key in preferred_split_keys() {
        println!("{}", key);
    }
    println!("{}", split_core::split::COACH_CHOICE);
}

fn display_template(template: &WeeklyTemplate) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", template.split_name);
    println!("╰─────────────────────────────────────────╯");
    println!();

    for day in &template.days {
        let weekday = day
            .weekday()
            .map(|w| w.to_string())
            .unwrap_or_else(|| day.day_index.to_string());

        if day.is_gym_day() {
            println!(
                "  {}  {:<18} {}-{} exercises ({} warm-up, {} cooldown)",
                weekday,
                day.focus,
                day.exercise_count.min,
                day.exercise_count.max,
                day.warmup_count,
                day.cooldown_count
            );
        } else {
            println!("  {}  {}", weekday, day.focus);
        }

        if let Some(ref notes) = day.notes {
            println!("       → {}", notes);
        }
    }

    let budget = &template.time_budget;
    println!();
    println!(
        "  Time: {} min warm-up, {} min main work, {} min cooldown, {} min per transition",
        budget.warmup_minutes,
        budget.main_work_minutes,
        budget.cooldown_minutes,
        budget.transition_time_per_exercise
    );
    println!(
        "  Max consecutive heavy days: {}",
        template.constraints.max_consecutive_heavy_days
    );
    println!();
}
