use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use gymplan_domain::{
    Catalog, ExerciseID, Plan, PlanAdvisor, PlanAssistant, Service, export, remove_exercise,
};
use log::{info, warn};

use crate::cli::{Command, EditArgs, Format, PlanArgs};

pub fn run<A: PlanAssistant + PlanAdvisor>(
    command: Command,
    service: &Service<A>,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Catalog { muscles } => list_catalog(service.catalog(), muscles, out),
        Command::Shortlist { profile } => {
            let profile = profile.load()?;
            for id in service.shortlist(&profile) {
                writeln!(out, "{id}")?;
            }
            Ok(())
        }
        Command::Generate {
            profile,
            seed,
            output,
        } => {
            let profile = profile.load()?;
            let outcome = service.generate(&profile, seed)?;
            for issue in &outcome.report.issues {
                warn!("{}: {}", issue.code, issue.message);
            }
            info!(
                "{} plan with {} exercises from {} allowed ({} validations, {} repairs)",
                outcome
                    .plan
                    .source()
                    .map_or_else(|| "unknown".to_string(), |s| s.to_string()),
                outcome.plan.exercise_count(),
                outcome.allowed_ids.len(),
                outcome.validations,
                outcome.repairs
            );
            write_plan(&outcome.plan, output.as_deref(), out)
        }
        Command::Validate { plan, profile } => {
            let report = service.validate_plan(&profile.load()?, &read_plan(&plan)?);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(())
        }
        Command::Swap { edit, profile } => {
            let profile = profile.load()?;
            let plan = read_plan(&edit.plan)?;
            let swapped = service.replace(&profile, &plan, edit.day, &exercise_id(&edit))?;
            write_edit(&swapped, &edit, out)
        }
        Command::Remove { edit } => {
            let plan = read_plan(&edit.plan)?;
            let removed = remove_exercise(&plan, edit.day, &exercise_id(&edit))?;
            write_edit(&removed, &edit, out)
        }
        Command::Export {
            plan,
            format,
            output,
        } => {
            let plan = read_plan(&plan)?;
            let data = match format {
                Format::Csv => export::to_csv(&plan),
                Format::Markdown => export::to_markdown(&plan).into_bytes(),
                Format::Pdf => export::to_pdf(&plan),
            };
            match output {
                Some(path) => std::fs::write(&path, data)
                    .with_context(|| format!("failed to write {}", path.display())),
                None => Ok(out.write_all(&data)?),
            }
        }
        Command::Explain { plan, profile } => {
            let summary = service.explain(&profile.load()?, &read_plan(&plan)?);
            writeln!(out, "{}", summary.overall)?;
            writeln!(out)?;
            for line in &summary.day_summaries {
                writeln!(out, "{line}")?;
            }
            if !summary.reasons.is_empty() {
                writeln!(out)?;
                writeln!(out, "Why this plan:")?;
                for reason in &summary.reasons {
                    writeln!(out, "- {reason}")?;
                }
            }
            Ok(())
        }
        Command::Ask {
            plan,
            profile,
            question,
        } => {
            let answer = service.answer(&profile.load()?, &read_plan(&plan)?, &question)?;
            writeln!(out, "{answer}")?;
            Ok(())
        }
    }
}

fn list_catalog(catalog: &Catalog, muscles: bool, out: &mut impl Write) -> Result<()> {
    if muscles {
        for muscle in catalog.muscles() {
            writeln!(out, "{muscle}")?;
        }
        return Ok(());
    }
    for exercise in catalog.iter() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            exercise.id,
            exercise.name,
            join(&exercise.primary_muscles),
            join(&exercise.equipment)
        )?;
    }
    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn exercise_id(edit: &EditArgs) -> ExerciseID {
    ExerciseID::from(edit.exercise.trim())
}

fn read_plan(args: &PlanArgs) -> Result<Plan> {
    let path = args.path();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("failed to parse plan {}", path.display()))
}

fn write_plan(plan: &Plan, path: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write plan {}", path.display()))?;
            info!("plan written to {}", path.display());
            Ok(())
        }
        None => Ok(writeln!(out, "{json}")?),
    }
}

fn write_edit(plan: &Plan, edit: &EditArgs, out: &mut impl Write) -> Result<()> {
    let path: PathBuf = edit
        .output
        .clone()
        .unwrap_or_else(|| edit.plan.path().to_path_buf());
    write_plan(plan, Some(&path), out)
}
