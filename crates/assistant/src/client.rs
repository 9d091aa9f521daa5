use std::{thread, time::Duration};

use log::{debug, warn};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};

use crate::{LlmError, schema::Schema};

pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Delay before the single retry of a transient failure.
pub const RETRY_DELAY: Duration = Duration::from_millis(500);
const MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Blocking client for an OpenAI-compatible chat completions endpoint.
pub struct Client {
    http: reqwest::blocking::Client,
    url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl Client {
    pub fn new(api_key: &str, settings: &LlmSettings) -> Result<Self, LlmError> {
        let timeout = Duration::from_millis(settings.timeout_ms);
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            url: format!(
                "{}/chat/completions",
                settings.base_url.trim_end_matches('/')
            ),
            api_key: api_key.to_string(),
            model: settings.model.clone(),
            timeout,
        })
    }

    /// Sends `payload` and parses the message content of the response as `T`.
    ///
    /// Transient failures are retried once after [`RETRY_DELAY`]. Responses that do not parse
    /// are not retried.
    pub fn chat_json<T: DeserializeOwned>(
        &self,
        system: &str,
        payload: &Value,
        schema: &Schema,
        temperature: f64,
    ) -> Result<T, LlmError> {
        let body = request_body(&self.model, system, payload, schema, temperature);
        let mut attempt = 1;
        loop {
            match self.send(&body) {
                Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        "{} request failed, retrying in {}ms: {err}",
                        schema.name,
                        RETRY_DELAY.as_millis()
                    );
                    thread::sleep(RETRY_DELAY);
                    attempt += 1;
                }
                result => {
                    debug!("{} request finished after {attempt} attempts", schema.name);
                    return result
                        .and_then(|content| serde_json::from_str(&content).map_err(LlmError::from));
                }
            }
        }
    }

    fn send(&self, body: &Value) -> Result<String, LlmError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|err| self.transport_error(err))?;
        let status = response.status();
        let text = response.text().map_err(|err| self.transport_error(err))?;
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                message: text,
            });
        }
        message_content(&text)
    }

    fn transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::Timeout(self.timeout)
        } else {
            LlmError::Network(err)
        }
    }
}

#[must_use]
pub fn request_body(
    model: &str,
    system: &str,
    payload: &Value,
    schema: &Schema,
    temperature: f64,
) -> Value {
    json!({
        "model": model,
        "temperature": temperature,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": payload.to_string() },
        ],
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": schema.name,
                "schema": schema.schema,
                "strict": true,
            },
        },
    })
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

fn message_content(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| LlmError::InvalidResponse("empty response content".to_string()))
}
