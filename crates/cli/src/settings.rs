use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use gymplan_assistant::LlmSettings;
use gymplan_domain::{DEFAULT_SHORTLIST_CAP, PlannerSettings};
use log::debug;
use serde::{Deserialize, Serialize};

pub const FILE_NAME: &str = "gymplan.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub max_repair_iterations: u32,
    pub max_allowed_exercises: usize,
    /// Catalog JSON file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub llm: LlmSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_repair_iterations: 2,
            max_allowed_exercises: DEFAULT_SHORTLIST_CAP,
            catalog_path: None,
            log_level: "info".to_string(),
            llm: LlmSettings::default(),
        }
    }
}

impl Settings {
    /// Reads `path`, or `gymplan.toml` in the working directory if present, and applies
    /// overrides from the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::read(path)?,
            None if Path::new(FILE_NAME).exists() => Self::read(Path::new(FILE_NAME))?,
            None => Self::default(),
        };
        settings.with_env(|key| std::env::var(key).ok())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("failed to parse settings {}", path.display()))?;
        debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Overrides values by the variables returned from `var`.
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(api_key) = var("GROQ_API_KEY") {
            self.llm.api_key = Some(api_key);
        }
        if let Some(model) = var("GROQ_MODEL") {
            self.llm.model = model;
        }
        if let Some(temperature) = parse(&var, "GROQ_TEMPERATURE")? {
            self.llm.temperature = temperature;
        }
        if let Some(iterations) = parse(&var, "MAX_REPAIR_ITERATIONS")? {
            self.max_repair_iterations = iterations;
        }
        if let Some(cap) = parse(&var, "MAX_ALLOWED_EXERCISES")? {
            self.max_allowed_exercises = cap;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(self)
    }

    #[must_use]
    pub fn planner(&self) -> PlannerSettings {
        PlannerSettings {
            max_repair_iterations: self.max_repair_iterations,
            max_shortlist: self.max_allowed_exercises,
        }
    }
}

fn parse<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .with_context(|| format!("invalid value for {key}: {value}"))
        })
        .transpose()
}
