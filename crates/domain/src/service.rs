use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    AssistantError, Catalog, DEFAULT_SHORTLIST_CAP, Exercise, ExerciseID, Issue, Plan, PlanError,
    PlanSource, PlanSummary, Profile, QuestionError, ValidationReport, answer_locally,
    check_question, generate_local_plan, shortlist, summarize_plan, swap_exercise, top_up_days,
    validate_plan,
};

/// Remote counterpart of the local generator, validator and repair step.
pub trait PlanAssistant {
    fn generate_plan(
        &self,
        profile: &Profile,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError>;
    fn validate_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
    ) -> Result<ValidationReport, AssistantError>;
    fn repair_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
        allowed: &[&Exercise],
        issues: &[Issue],
    ) -> Result<Plan, AssistantError>;
}

/// Remote operations on a finished plan.
pub trait PlanAdvisor {
    fn explain_plan(&self, profile: &Profile, plan: &Plan) -> Result<PlanSummary, AssistantError>;
    fn answer_question(
        &self,
        profile: &Profile,
        plan: &Plan,
        question: &str,
    ) -> Result<String, AssistantError>;
    fn replace_exercise(
        &self,
        profile: &Profile,
        plan: &Plan,
        day_index: usize,
        target: &ExerciseID,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError>;
}

impl<T: PlanAssistant + ?Sized> PlanAssistant for &T {
    fn generate_plan(
        &self,
        profile: &Profile,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError> {
        (**self).generate_plan(profile, allowed)
    }

    fn validate_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
    ) -> Result<ValidationReport, AssistantError> {
        (**self).validate_plan(profile, plan)
    }

    fn repair_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
        allowed: &[&Exercise],
        issues: &[Issue],
    ) -> Result<Plan, AssistantError> {
        (**self).repair_plan(profile, plan, allowed, issues)
    }
}

impl<T: PlanAdvisor + ?Sized> PlanAdvisor for &T {
    fn explain_plan(&self, profile: &Profile, plan: &Plan) -> Result<PlanSummary, AssistantError> {
        (**self).explain_plan(profile, plan)
    }

    fn answer_question(
        &self,
        profile: &Profile,
        plan: &Plan,
        question: &str,
    ) -> Result<String, AssistantError> {
        (**self).answer_question(profile, plan, question)
    }

    fn replace_exercise(
        &self,
        profile: &Profile,
        plan: &Plan,
        day_index: usize,
        target: &ExerciseID,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError> {
        (**self).replace_exercise(profile, plan, day_index, target, allowed)
    }
}

/// Assistant used when no remote service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl PlanAssistant for Offline {
    fn generate_plan(&self, _: &Profile, _: &[&Exercise]) -> Result<Plan, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    fn validate_plan(&self, _: &Profile, _: &Plan) -> Result<ValidationReport, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    fn repair_plan(
        &self,
        _: &Profile,
        _: &Plan,
        _: &[&Exercise],
        _: &[Issue],
    ) -> Result<Plan, AssistantError> {
        Err(AssistantError::Unavailable)
    }
}

impl PlanAdvisor for Offline {
    fn explain_plan(&self, _: &Profile, _: &Plan) -> Result<PlanSummary, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    fn answer_question(&self, _: &Profile, _: &Plan, _: &str) -> Result<String, AssistantError> {
        Err(AssistantError::Unavailable)
    }

    fn replace_exercise(
        &self,
        _: &Profile,
        _: &Plan,
        _: usize,
        _: &ExerciseID,
        _: &[&Exercise],
    ) -> Result<Plan, AssistantError> {
        Err(AssistantError::Unavailable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    pub max_repair_iterations: u32,
    pub max_shortlist: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            max_repair_iterations: 2,
            max_shortlist: DEFAULT_SHORTLIST_CAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    pub plan: Plan,
    pub report: ValidationReport,
    pub allowed_ids: Vec<ExerciseID>,
    pub repairs: u32,
    pub validations: u32,
}

pub struct Service<'a, A> {
    catalog: &'a Catalog,
    assistant: A,
    settings: PlannerSettings,
}

macro_rules! log_on_error {
    ($func: expr, $action: literal) => {{
        match $func {
            Ok(value) => Some(value),
            Err(AssistantError::Unavailable) => {
                debug!("assistant unavailable to {}, using local fallback", $action);
                None
            }
            Err(err) => {
                warn!("failed to {} remotely, using local fallback: {err}", $action);
                None
            }
        }
    }};
}

impl<'a, A> Service<'a, A> {
    pub fn new(catalog: &'a Catalog, assistant: A, settings: PlannerSettings) -> Self {
        Self {
            catalog,
            assistant,
            settings,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub fn shortlist(&self, profile: &Profile) -> Vec<ExerciseID> {
        shortlist(self.catalog, profile, self.settings.max_shortlist)
    }
}

impl<A: PlanAssistant> Service<'_, A> {
    /// Shortlists, generates and validates a plan, repairing it while validation fails and
    /// iterations remain.
    ///
    /// A plan that still fails validation after the last repair is returned with its report.
    pub fn generate(&self, profile: &Profile, seed: Option<u64>) -> Result<PlanOutcome, PlanError> {
        let mut allowed_ids = self.shortlist(profile);
        if allowed_ids.is_empty() {
            return Err(PlanError::NoExercisesAvailable);
        }
        if let Some(seed) = seed {
            allowed_ids.shuffle(&mut StdRng::seed_from_u64(seed));
        }

        let mut plan = self.generate_plan(profile, &allowed_ids)?;
        let mut report = self.validate_plan(profile, &plan);
        let mut validations = 1;
        let mut repairs = 0;
        while !report.ok && repairs < self.settings.max_repair_iterations {
            plan = self.repair_plan(profile, plan, &allowed_ids, &report.issues);
            repairs += 1;
            report = self.validate_plan(profile, &plan);
            validations += 1;
        }

        if report.ok {
            info!("generated plan after {repairs} repairs");
        } else {
            warn!(
                "plan still has {} issues after {repairs} repairs",
                report.issues.len()
            );
        }
        Ok(PlanOutcome {
            plan,
            report,
            allowed_ids,
            repairs,
            validations,
        })
    }

    pub fn generate_plan(
        &self,
        profile: &Profile,
        allowed_ids: &[ExerciseID],
    ) -> Result<Plan, PlanError> {
        let allowed = self.catalog.resolve(allowed_ids);
        let plan = match log_on_error!(
            self.assistant.generate_plan(profile, &allowed),
            "generate plan"
        ) {
            Some(plan) => plan.with_source(PlanSource::Llm),
            None => generate_local_plan(self.catalog, profile, allowed_ids)?,
        };
        Ok(top_up_days(
            self.catalog,
            profile,
            allowed_ids,
            plan.deduplicated(),
        ))
    }

    #[must_use]
    pub fn validate_plan(&self, profile: &Profile, plan: &Plan) -> ValidationReport {
        log_on_error!(
            self.assistant.validate_plan(profile, plan),
            "validate plan"
        )
        .unwrap_or_else(|| validate_plan(profile, plan))
    }

    /// Falls back to returning the plan unchanged.
    #[must_use]
    pub fn repair_plan(
        &self,
        profile: &Profile,
        plan: Plan,
        allowed_ids: &[ExerciseID],
        issues: &[Issue],
    ) -> Plan {
        if issues.is_empty() {
            return plan;
        }
        let allowed = self.catalog.resolve(allowed_ids);
        match log_on_error!(
            self.assistant
                .repair_plan(profile, &plan, &allowed, issues),
            "repair plan"
        ) {
            Some(repaired) => repaired.with_source(PlanSource::Llm).deduplicated(),
            None => plan,
        }
    }
}

impl<A: PlanAdvisor> Service<'_, A> {
    #[must_use]
    pub fn explain(&self, profile: &Profile, plan: &Plan) -> PlanSummary {
        match log_on_error!(self.assistant.explain_plan(profile, plan), "explain plan") {
            Some(mut summary) => {
                if summary.reasons.is_empty() {
                    summary.reasons = crate::summary::reasons(profile, plan);
                }
                summary
            }
            None => summarize_plan(profile, plan),
        }
    }

    pub fn answer(
        &self,
        profile: &Profile,
        plan: &Plan,
        question: &str,
    ) -> Result<String, QuestionError> {
        let question = check_question(question)?;
        Ok(log_on_error!(
            self.assistant.answer_question(profile, plan, question),
            "answer question"
        )
        .map(|answer| answer.trim().to_string())
        .filter(|answer| !answer.is_empty())
        .unwrap_or_else(|| answer_locally(plan, question)))
    }

    /// Replaces one exercise, falling back to swapping in a similar shortlisted exercise.
    pub fn replace(
        &self,
        profile: &Profile,
        plan: &Plan,
        day_index: usize,
        target: &ExerciseID,
    ) -> Result<Plan, PlanError> {
        plan.day(day_index)?;
        let allowed_ids = self.shortlist(profile);
        let allowed = self.catalog.resolve(&allowed_ids);
        match log_on_error!(
            self.assistant
                .replace_exercise(profile, plan, day_index, target, &allowed),
            "replace exercise"
        ) {
            Some(replaced) => Ok(replaced.with_source(PlanSource::Llm).deduplicated()),
            None => swap_exercise(plan, day_index, target, &allowed),
        }
    }
}
