use gymplan_domain::{
    AssistantError, Exercise, ExerciseID, Issue, Plan, PlanAdvisor, PlanAssistant, PlanSummary,
    Profile, ValidationReport,
};
use serde_json::{Value, json};

use crate::{
    Client, LlmError, LlmSettings, prompts,
    response::{AnswerResponse, PlanResponse, ReportResponse, SummaryResponse},
    schema,
};

const VALIDATION_TEMPERATURE: f64 = 0.0;

pub struct Assistant {
    client: Client,
    temperature: f64,
}

impl Assistant {
    /// Returns `None` if no API key is configured.
    pub fn from_settings(settings: &LlmSettings) -> Result<Option<Self>, LlmError> {
        let Some(api_key) = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        else {
            return Ok(None);
        };
        Ok(Some(Self {
            client: Client::new(api_key, settings)?,
            temperature: settings.temperature,
        }))
    }
}

/// Exercise details sent to the model.
#[must_use]
pub fn allowed_exercises(allowed: &[&Exercise]) -> Value {
    allowed
        .iter()
        .map(|exercise| {
            json!({
                "id": exercise.id,
                "name": exercise.name,
                "exrx_url": exercise.external_link,
                "primary_muscles": exercise.primary_muscles,
                "function": exercise.function,
                "equipment": exercise.equipment,
                "type": exercise.kind,
            })
        })
        .collect()
}

impl PlanAssistant for Assistant {
    fn generate_plan(
        &self,
        profile: &Profile,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError> {
        let response: PlanResponse = self.client.chat_json(
            prompts::GENERATE_PLAN,
            &json!({
                "PROFILE": profile,
                "ALLOWED_EXERCISES": allowed_exercises(allowed),
            }),
            &schema::plan_response(),
            self.temperature,
        )?;
        Ok(response.into())
    }

    fn validate_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
    ) -> Result<ValidationReport, AssistantError> {
        let response: ReportResponse = self.client.chat_json(
            prompts::VALIDATE_PLAN,
            &json!({ "PROFILE": profile, "PLAN": plan }),
            &schema::validation_report(),
            VALIDATION_TEMPERATURE,
        )?;
        Ok(response.into())
    }

    fn repair_plan(
        &self,
        profile: &Profile,
        plan: &Plan,
        allowed: &[&Exercise],
        issues: &[Issue],
    ) -> Result<Plan, AssistantError> {
        let response: PlanResponse = self.client.chat_json(
            prompts::REPAIR_PLAN,
            &json!({
                "PROFILE": profile,
                "PLAN": plan,
                "ALLOWED_EXERCISES": allowed_exercises(allowed),
                "ISSUES": issues,
            }),
            &schema::plan_response(),
            self.temperature,
        )?;
        Ok(response.into())
    }
}

impl PlanAdvisor for Assistant {
    fn explain_plan(&self, profile: &Profile, plan: &Plan) -> Result<PlanSummary, AssistantError> {
        let response: SummaryResponse = self.client.chat_json(
            prompts::EXPLAIN_PLAN,
            &json!({ "PROFILE": profile, "PLAN": plan }),
            &schema::plan_summary(),
            self.temperature,
        )?;
        Ok(response.into())
    }

    fn answer_question(
        &self,
        profile: &Profile,
        plan: &Plan,
        question: &str,
    ) -> Result<String, AssistantError> {
        let response: AnswerResponse = self.client.chat_json(
            prompts::ANSWER_QUESTION,
            &json!({ "PROFILE": profile, "PLAN": plan, "QUESTION": question }),
            &schema::answer(),
            self.temperature,
        )?;
        Ok(response.answer)
    }

    fn replace_exercise(
        &self,
        profile: &Profile,
        plan: &Plan,
        day_index: usize,
        target: &ExerciseID,
        allowed: &[&Exercise],
    ) -> Result<Plan, AssistantError> {
        let response: PlanResponse = self.client.chat_json(
            prompts::REPLACE_EXERCISE,
            &json!({
                "PROFILE": profile,
                "PLAN": plan,
                "ALLOWED_EXERCISES": allowed_exercises(allowed),
                "day_index": day_index,
                "replace_exercise_id": target,
            }),
            &schema::plan_response(),
            self.temperature,
        )?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use gymplan_domain::{IssueCode, Muscle};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::{
        data::{BENCH_PRESS, PLAN, PLAN_RESPONSE, PROFILE, SQUAT},
        server::{Response, serve},
    };

    fn assistant(base_url: &str) -> Assistant {
        Assistant::from_settings(&LlmSettings {
            api_key: Some("secret".to_string()),
            base_url: base_url.to_string(),
            ..LlmSettings::default()
        })
        .unwrap()
        .unwrap()
    }

    fn user_payload(body: &Value) -> Value {
        serde_json::from_str(body["messages"][1]["content"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_from_settings_without_api_key() {
        assert!(
            Assistant::from_settings(&LlmSettings::default())
                .unwrap()
                .is_none()
        );
        assert!(
            Assistant::from_settings(&LlmSettings {
                api_key: Some("  ".to_string()),
                ..LlmSettings::default()
            })
            .unwrap()
            .is_none()
        );
    }

    #[test]
    fn test_allowed_exercises() {
        assert_eq!(
            allowed_exercises(&[&*BENCH_PRESS]),
            json!([{
                "id": "exrx:BBBenchPress",
                "name": "Barbell Bench Press",
                "exrx_url": "https://exrx.net/WeightExercises/PectoralSternal/BBBenchPress",
                "primary_muscles": ["chest", "triceps"],
                "function": "horizontal_push",
                "equipment": ["barbell"],
                "type": "compound",
            }])
        );
    }

    #[test]
    fn test_generate_plan() {
        let server = serve(vec![Response::content(PLAN_RESPONSE)]);

        let plan = assistant(&server.url())
            .generate_plan(&PROFILE, &[&*BENCH_PRESS, &*SQUAT])
            .unwrap();

        assert_eq!(plan.days, PLAN.days);
        let requests = server.requests();
        let payload = user_payload(&requests[0]);
        assert_eq!(payload["PROFILE"]["days_per_week"], json!(1));
        assert_eq!(
            payload["ALLOWED_EXERCISES"],
            allowed_exercises(&[&*BENCH_PRESS, &*SQUAT])
        );
    }

    #[test]
    fn test_validate_plan() {
        let server = serve(vec![Response::content(
            r#"{"ok": true, "issues": [{"code": "MUSCLE_UNDERCOVERED", "message": "No quads."}]}"#,
        )]);

        let report = assistant(&server.url())
            .validate_plan(&PROFILE, &PLAN)
            .unwrap();

        assert_eq!(
            report,
            ValidationReport {
                ok: false,
                issues: vec![Issue::new(IssueCode::MuscleUndercovered, "No quads.")]
            }
        );
        let payload = user_payload(&server.requests()[0]);
        assert_eq!(
            payload["PLAN"]["days"][0]["exercises"][0]["id"],
            json!("exrx:BBBenchPress")
        );
    }

    #[test]
    fn test_repair_plan() {
        let server = serve(vec![Response::content(PLAN_RESPONSE)]);
        let issues = [Issue::new(
            IssueCode::DayCountMismatch,
            "Day count does not match profile.",
        )];

        let plan = assistant(&server.url())
            .repair_plan(&PROFILE, &PLAN, &[&*BENCH_PRESS], &issues)
            .unwrap();

        assert_eq!(plan.days.len(), 1);
        let payload = user_payload(&server.requests()[0]);
        assert_eq!(
            payload["ISSUES"],
            json!([{
                "code": "DAY_COUNT_MISMATCH",
                "message": "Day count does not match profile.",
            }])
        );
    }

    #[test]
    fn test_explain_plan() {
        let server = serve(vec![Response::content(
            r#"{"overall": "Solid.", "day_summaries": ["Day 1: Chest"]}"#,
        )]);

        let summary = assistant(&server.url())
            .explain_plan(&PROFILE, &PLAN)
            .unwrap();

        assert_eq!(
            summary,
            PlanSummary {
                overall: "Solid.".to_string(),
                day_summaries: vec!["Day 1: Chest".to_string()],
                reasons: vec![],
            }
        );
    }

    #[test]
    fn test_answer_question() {
        let server = serve(vec![Response::content(r#"{"answer": "Day 1."}"#)]);

        assert_eq!(
            assistant(&server.url())
                .answer_question(&PROFILE, &PLAN, "Which day trains chest?")
                .unwrap(),
            "Day 1."
        );
        let payload = user_payload(&server.requests()[0]);
        assert_eq!(payload["QUESTION"], json!("Which day trains chest?"));
    }

    #[test]
    fn test_replace_exercise() {
        let server = serve(vec![Response::content(PLAN_RESPONSE)]);

        let plan = assistant(&server.url())
            .replace_exercise(
                &PROFILE,
                &PLAN,
                0,
                &"exrx:BBSquat".into(),
                &[&*BENCH_PRESS],
            )
            .unwrap();

        assert_eq!(
            plan.days[0].exercises[0].primary_muscles[0],
            Muscle::new("chest")
        );
        let payload = user_payload(&server.requests()[0]);
        assert_eq!(payload["day_index"], json!(0));
        assert_eq!(payload["replace_exercise_id"], json!("exrx:BBSquat"));
    }

    #[test]
    fn test_answer_question_with_unknown_property() {
        let server = serve(vec![Response::content(
            r#"{"answer": "Day 1", "injected": "x"}"#,
        )]);

        let result =
            assistant(&server.url()).answer_question(&PROFILE, &PLAN, "Which day trains chest?");

        assert!(matches!(result, Err(AssistantError::Other(_))));
        assert_eq!(server.requests().len(), 1);
    }

    #[test]
    fn test_generate_plan_with_nonconforming_plan() {
        let mut response: Value = serde_json::from_str(PLAN_RESPONSE).unwrap();
        response["plan"]["days"][0]
            .as_object_mut()
            .unwrap()
            .remove("supersets");
        response["plan"]["meta"] = json!({ "source": "bogus" });
        let server = serve(vec![Response::content(&response.to_string())]);

        let result = assistant(&server.url()).generate_plan(&PROFILE, &[&*BENCH_PRESS]);

        assert!(matches!(result, Err(AssistantError::Other(_))));
        assert_eq!(server.requests().len(), 1);
    }

    #[test]
    fn test_explain_plan_with_reasons() {
        let server = serve(vec![Response::content(
            r#"{"overall": "Solid.", "day_summaries": [], "reasons": ["Balanced."]}"#,
        )]);

        assert!(
            assistant(&server.url())
                .explain_plan(&PROFILE, &PLAN)
                .is_err()
        );
    }

    #[test]
    fn test_unreachable_service() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let result = assistant(&format!("http://127.0.0.1:{port}")).generate_plan(&PROFILE, &[]);

        assert!(matches!(result, Err(AssistantError::Other(_))));
    }
}
