#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Plan generation, validation and repair backed by a structured-output chat model.

mod assistant;
mod client;
mod error;
mod prompts;
mod response;
pub mod schema;

pub use assistant::{Assistant, allowed_exercises};
pub use client::{
    Client, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS, LlmSettings,
    RETRY_DELAY, request_body,
};
pub use error::LlmError;
