// src/vacancy/generator.rs
//! Text generation: vacancy descriptions from structured attributes, and
//! resume-vs-vacancy evaluation reports.
//!
//! Unlike extraction, failures here - an unreadable template or a failed
//! service call - propagate to the caller, where the web layer answers 500.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::service_client::{ChatMessage, CompletionClient};
use crate::vacancy::types::GenerationFields;

const GENERATION_TEMPERATURE: f32 = 0.7;

const GENERATE_INSTRUCTION: &str = "Write a vacancy description with the following parameters:";

// Templates are re-read on every call so edits take effect without a restart.
async fn read_template(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read prompt template: {}", path.display()))
}

fn render_fields(fields: &GenerationFields) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate a vacancy description from `fields`, using the system-role text
/// at `template_path` verbatim.
pub async fn generate_vacancy_description(
    client: &dyn CompletionClient,
    fields: &GenerationFields,
    template_path: &Path,
) -> Result<String> {
    let system_content = read_template(template_path).await?;
    let user_content = format!("{}\n{}", GENERATE_INSTRUCTION, render_fields(fields));

    let messages = [
        ChatMessage::system(system_content),
        ChatMessage::user(user_content),
    ];

    let completion = client.complete(&messages, GENERATION_TEMPERATURE).await?;
    completion.into_content()
}

/// Compare a resume against a vacancy and return the generated report.
pub async fn evaluate_resume(
    client: &dyn CompletionClient,
    vacancy: &str,
    resume: &str,
    template_path: &Path,
) -> Result<String> {
    let system_content = read_template(template_path).await?;
    let user_content = format!(
        "Vacancy:\n{vacancy}\n\nResume:\n{resume}\n\n\
         Compare the resume against the vacancy and produce a report by criteria."
    );

    let messages = [
        ChatMessage::system(system_content),
        ChatMessage::user(user_content),
    ];

    let completion = client.complete(&messages, GENERATION_TEMPERATURE).await?;
    completion.into_content()
}
