#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::{Context, Result};
use clap::Parser;
use gymplan_assistant::Assistant;
use gymplan_domain::{Catalog, Offline, Service};
use log::{debug, info};

mod cli;
mod commands;
mod settings;

use cli::Cli;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(level) = &cli.log_level {
        settings.log_level.clone_from(level);
    }
    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .init();
    debug!(
        "up to {} repair iterations, shortlist of {} exercises",
        settings.max_repair_iterations, settings.max_allowed_exercises
    );

    let loaded;
    let catalog = match &settings.catalog_path {
        Some(path) => {
            loaded = Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            info!("loaded {} exercises from {}", loaded.len(), path.display());
            &loaded
        }
        None => Catalog::builtin(),
    };

    let mut out = std::io::stdout().lock();
    match Assistant::from_settings(&settings.llm).context("failed to create assistant")? {
        Some(assistant) => {
            info!("using remote assistant {}", settings.llm.model);
            let service = Service::new(catalog, assistant, settings.planner());
            commands::run(cli.command, &service, &mut out)
        }
        None => {
            info!("no API key configured, planning locally");
            let service = Service::new(catalog, Offline, settings.planner());
            commands::run(cli.command, &service, &mut out)
        }
    }
}
