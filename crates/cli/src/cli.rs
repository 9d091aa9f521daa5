use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gymplan_domain::{Equipment, ExerciseID, Goal, Muscle, Profile};

/// Weekly gym plan generator
#[derive(Debug, Parser)]
#[command(name = "gymplan", version, about)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to gymplan.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "gymplan_domain=debug"
    #[arg(short = 'l', long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the exercises of the catalog
    Catalog {
        /// List the distinct primary muscles instead
        #[arg(long)]
        muscles: bool,
    },

    /// List the exercise ids eligible for a profile in priority order
    Shortlist {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Generate, validate and repair a plan
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Shuffle the shortlist with this seed before generating
        #[arg(long)]
        seed: Option<u64>,

        /// Write the plan to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a plan against a profile
    Validate {
        #[command(flatten)]
        plan: PlanArgs,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Replace one exercise of a day by a similar one
    Swap {
        #[command(flatten)]
        edit: EditArgs,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Remove one exercise from a day
    Remove {
        #[command(flatten)]
        edit: EditArgs,
    },

    /// Export a plan as CSV, Markdown or PDF
    Export {
        #[command(flatten)]
        plan: PlanArgs,

        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,

        /// Write the export to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a plan
    Explain {
        #[command(flatten)]
        plan: PlanArgs,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Answer a question about a plan
    Ask {
        #[command(flatten)]
        plan: PlanArgs,

        #[command(flatten)]
        profile: ProfileArgs,

        question: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Markdown,
    Pdf,
}

#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Plan file as written by `generate`
    #[arg(short, long = "plan")]
    pub path: PathBuf,
}

impl PlanArgs {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[command(flatten)]
    pub plan: PlanArgs,

    /// Day index, starting at 0
    #[arg(short, long)]
    pub day: usize,

    /// Exercise id, e.g. exrx:BBBenchPress
    #[arg(short, long)]
    pub exercise: String,

    /// Write the changed plan to this file instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Profile from a JSON file, overridden by individual options.
#[derive(Debug, Default, Args)]
pub struct ProfileArgs {
    /// Profile JSON file
    #[arg(long = "profile")]
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub goal: Option<Goal>,

    #[arg(long)]
    pub days: Option<u32>,

    #[arg(long)]
    pub minutes: Option<u32>,

    #[arg(long)]
    pub max_exercises: Option<u32>,

    #[arg(long)]
    pub sets: Option<u32>,

    #[arg(long)]
    pub reps: Option<u32>,

    #[arg(long)]
    pub rest: Option<u32>,

    #[arg(long)]
    pub supersets: bool,

    #[arg(long)]
    pub progressive_overload: bool,

    /// Allowed equipment (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub equipment: Vec<Equipment>,

    /// Excluded equipment (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_equipment: Vec<Equipment>,

    /// Emphasized muscles (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub emphasis: Vec<String>,

    /// Excluded muscles (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_muscles: Vec<String>,

    /// Excluded exercise ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude_exercises: Vec<String>,
}

impl ProfileArgs {
    pub fn load(&self) -> Result<Profile> {
        let mut profile = match &self.file {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read profile {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("failed to parse profile {}", path.display()))?
            }
            None => Profile::default(),
        };

        if let Some(goal) = self.goal {
            profile.goal = goal;
        }
        for (value, field) in [
            (self.days, &mut profile.days_per_week),
            (self.minutes, &mut profile.session_minutes_cap),
            (self.max_exercises, &mut profile.max_exercises_per_day),
            (self.sets, &mut profile.default_sets),
            (self.reps, &mut profile.default_reps),
            (self.rest, &mut profile.rest_seconds),
        ] {
            if let Some(value) = value {
                *field = value;
            }
        }
        profile.supersets_enabled |= self.supersets;
        profile.progressive_overload |= self.progressive_overload;
        profile
            .allowed_equipment
            .extend(self.equipment.iter().copied());
        profile
            .blacklisted_equipment
            .extend(self.exclude_equipment.iter().copied());
        for muscle in &self.emphasis {
            profile = profile.emphasize(muscle.as_str());
        }
        profile
            .blacklisted_muscles
            .extend(self.exclude_muscles.iter().map(|m| Muscle::new(m)));
        profile.blacklisted_exercise_ids.extend(
            self.exclude_exercises
                .iter()
                .map(|id| ExerciseID::from(id.trim())),
        );

        profile.validate().context("invalid profile")?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    fn profile_args(args: &[&str]) -> ProfileArgs {
        let cli = Cli::try_parse_from([&["gymplan", "shortlist"][..], args].concat()).unwrap();
        match cli.command {
            Command::Shortlist { profile } => profile,
            command => panic!("unexpected command {command:?}"),
        }
    }

    #[test]
    fn test_profile_args_defaults() {
        assert_eq!(profile_args(&[]).load().unwrap(), Profile::default());
    }

    #[test]
    fn test_profile_args_options() {
        let profile = profile_args(&[
            "--goal",
            "strength",
            "--days",
            "4",
            "--max-exercises",
            "6",
            "--equipment",
            "barbell,Dumbbell",
            "--exclude-equipment",
            "machines",
            "--emphasis",
            "Chest,glutes",
            "--exclude-muscles",
            "lower_back",
            "--exclude-exercises",
            "exrx:BBSquat",
            "--supersets",
        ])
        .load()
        .unwrap();

        assert_eq!(
            profile,
            Profile {
                goal: Goal::Strength,
                days_per_week: 4,
                max_exercises_per_day: 6,
                supersets_enabled: true,
                allowed_equipment: BTreeSet::from([Equipment::Barbell, Equipment::Dumbbell]),
                blacklisted_equipment: BTreeSet::from([Equipment::Machines]),
                blacklisted_muscles: BTreeSet::from([Muscle::new("lower_back")]),
                blacklisted_exercise_ids: BTreeSet::from(["exrx:BBSquat".into()]),
                ..Profile::default()
            }
            .emphasize("chest")
            .emphasize("glutes")
        );
    }

    #[test]
    fn test_profile_args_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            serde_json::to_string(&Profile {
                days_per_week: 2,
                rest_seconds: 120,
                ..Profile::default()
            })
            .unwrap(),
        )
        .unwrap();

        let profile = profile_args(&["--profile", path.to_str().unwrap(), "--days", "5"])
            .load()
            .unwrap();

        assert_eq!(profile.days_per_week, 5);
        assert_eq!(profile.rest_seconds, 120);
    }

    #[test]
    fn test_profile_args_invalid() {
        assert!(profile_args(&["--days", "9"]).load().is_err());
        assert!(
            Cli::try_parse_from(["gymplan", "shortlist", "--equipment", "rowing_machine"]).is_err()
        );
    }
}
