//! Resume parser: turns raw resume text into a validated `ResumeOutput` via the model provider.

use anyhow::Context;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmError, ModelProvider};
use crate::models::resume::ResumeOutput;
use crate::resumes::prompts::RESUME_PARSE_PROMPT_TEMPLATE;

/// JSON Schema of `ResumeOutput`, pretty-printed for embedding in the prompt.
pub fn output_json_schema() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ResumeOutput);
    serde_json::to_string_pretty(&schema).context("Failed to serialize resume output schema")
}

/// Builds the extraction prompt. The resume text is inserted verbatim.
pub fn build_prompt(resume_text: &str) -> anyhow::Result<String> {
    let json_schema = output_json_schema()?;
    Ok(RESUME_PARSE_PROMPT_TEMPLATE
        .replace("{json_schema}", &json_schema)
        .replace("{resume_text}", resume_text))
}

/// Parses the provider's reply and validates it against the output shape.
/// A missing required field or a wrong type is an error, never a default.
pub fn parse_provider_reply(text: &str) -> Result<ResumeOutput, LlmError> {
    let text = strip_json_fences(text);
    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Extracts structured resume data from raw text.
///
/// Every provider-side failure (transport, non-JSON reply, schema mismatch)
/// collapses into `AppError::Provider`; the cause only reaches the log.
pub async fn parse_resume(
    resume_text: &str,
    provider: &dyn ModelProvider,
) -> Result<ResumeOutput, AppError> {
    if resume_text.trim().is_empty() {
        warn!("Empty resume text forwarded to model provider");
    }

    let prompt = build_prompt(resume_text)?;

    let reply = provider
        .generate_json(&prompt)
        .await
        .map_err(|e| AppError::Provider(format!("Resume extraction call failed: {e}")))?;

    parse_provider_reply(&reply)
        .map_err(|e| AppError::Provider(format!("Resume extraction returned invalid output: {e}")))
}
