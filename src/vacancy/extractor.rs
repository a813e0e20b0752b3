// src/vacancy/extractor.rs
//! Structured extraction: free-form job description in, validated `Vacancy`
//! (or a structured failure payload) out.
//!
//! Every failure on this path - transport, JSON syntax, schema validation -
//! is converted into an `ExtractionFailure`. Nothing propagates to the
//! caller as a fault; the generation path in `generator.rs` deliberately
//! behaves differently.

use anyhow::Result;
use tracing::debug;

use crate::core::service_client::{ChatMessage, CompletionClient};
use crate::vacancy::types::{ExtractionFailure, ExtractionOutcome, Vacancy};

const EXTRACTION_TEMPERATURE: f32 = 0.0;

fn extraction_prompt(description: &str) -> String {
    format!(
        "Extract the following structured JSON fields from the job description:\n\
         \n\
         - job_title\n\
         - company\n\
         - location\n\
         - employment_type\n\
         - experience_level\n\
         - skills\n\
         - salary\n\
         - description\n\
         - requirements\n\
         - responsibilities\n\
         \n\
         Job description:\n\
         {description}\n\
         \n\
         Respond only with valid JSON following the schema."
    )
}

/// Strips a fenced-code wrapper the service sometimes puts around JSON.
/// Tolerates plain output and a missing closing fence; does not try to
/// handle every fence variant.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

async fn fetch_content(client: &dyn CompletionClient, description: &str) -> Result<String> {
    let messages = [ChatMessage::user(extraction_prompt(description))];
    let completion = client.complete(&messages, EXTRACTION_TEMPERATURE).await?;
    completion.into_content()
}

/// Extract a structured vacancy from `description` via one deterministic
/// completion call.
pub async fn parse_vacancy(client: &dyn CompletionClient, description: &str) -> ExtractionOutcome {
    let content = match fetch_content(client, description).await {
        Ok(content) => content,
        Err(e) => {
            return ExtractionOutcome::Failed(ExtractionFailure::service_error(format!("{e:#}")))
        }
    };

    let stripped = strip_code_fences(&content);
    debug!("Completion content after fence stripping: {}", stripped);

    match serde_json::from_str::<Vacancy>(stripped) {
        Ok(vacancy) => {
            debug!("Parsed vacancy: {:?}", vacancy);
            ExtractionOutcome::Parsed(vacancy)
        }
        Err(e) => ExtractionOutcome::Failed(ExtractionFailure::invalid_output(
            e.to_string(),
            stripped.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service_client::{Completion, CompletionChoice};
    use async_trait::async_trait;

    struct ScriptedClient {
        content: Option<String>,
    }

    impl ScriptedClient {
        fn replies(content: &str) -> Self {
            Self {
                content: Some(content.to_string()),
            }
        }

        fn fails() -> Self {
            Self { content: None }
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _temperature: f32,
        ) -> Result<Completion> {
            match &self.content {
                Some(content) => Ok(Completion {
                    choices: vec![CompletionChoice {
                        message: ChatMessage::assistant(content.clone()),
                    }],
                }),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    const FULL_REPLY: &str = r#"
    {
      "job_title": "Senior Python Developer",
      "company": "TechSolutions",
      "location": "remote",
      "employment_type": null,
      "experience_level": "senior",
      "skills": ["Python", "Django", "REST API", "PostgreSQL", "Git"],
      "salary": "200000-250000",
      "description": "Develop and maintain web applications.",
      "requirements": ["Git proficiency", "team player"],
      "responsibilities": ["develop web applications", "design architecture"]
    }
    "#;

    fn parsed(outcome: ExtractionOutcome) -> Vacancy {
        match outcome {
            ExtractionOutcome::Parsed(vacancy) => vacancy,
            ExtractionOutcome::Failed(failure) => {
                panic!("expected a vacancy, got failure: {}", failure.error_message)
            }
        }
    }

    fn failed(outcome: ExtractionOutcome) -> ExtractionFailure {
        match outcome {
            ExtractionOutcome::Failed(failure) => failure,
            ExtractionOutcome::Parsed(vacancy) => {
                panic!("expected a failure, got vacancy: {:?}", vacancy)
            }
        }
    }

    #[tokio::test]
    async fn test_parse_vacancy_success() {
        let client = ScriptedClient::replies(FULL_REPLY);
        let vacancy = parsed(parse_vacancy(&client, "dummy text").await);

        assert_eq!(vacancy.job_title, "Senior Python Developer");
        assert_eq!(vacancy.company, "TechSolutions");
        assert_eq!(vacancy.employment_type, None);
        assert!(vacancy.skills.contains(&"Python".to_string()));
    }

    #[tokio::test]
    async fn test_parse_vacancy_defaults_for_omitted_fields() {
        let client = ScriptedClient::replies(
            r#"{"job_title":"Senior Python Developer","company":"TechSolutions","skills":["Python","Django"]}"#,
        );
        let vacancy = parsed(parse_vacancy(&client, "dummy text").await);

        assert_eq!(vacancy.job_title, "Senior Python Developer");
        assert_eq!(vacancy.company, "TechSolutions");
        assert_eq!(vacancy.skills, vec!["Python", "Django"]);
        assert_eq!(vacancy.location, None);
        assert_eq!(vacancy.salary, None);
        assert!(vacancy.requirements.is_empty());
        assert!(vacancy.responsibilities.is_empty());
    }

    #[tokio::test]
    async fn test_parse_vacancy_strips_code_fences() {
        let fenced = format!("```json\n{}\n```", FULL_REPLY.trim());
        let client = ScriptedClient::replies(&fenced);
        let vacancy = parsed(parse_vacancy(&client, "dummy text").await);

        assert_eq!(vacancy.job_title, "Senior Python Developer");
    }

    #[tokio::test]
    async fn test_parse_vacancy_invalid_json() {
        let client = ScriptedClient::replies("INVALID_JSON");
        let failure = failed(parse_vacancy(&client, "dummy text").await);

        assert!(failure.parse_error);
        assert!(failure.error_message.contains("expected value"));
        assert_eq!(failure.raw_output.as_deref(), Some("INVALID_JSON"));
    }

    #[tokio::test]
    async fn test_parse_vacancy_missing_required_field() {
        let client = ScriptedClient::replies(r#"{"company":"TechSolutions"}"#);
        let failure = failed(parse_vacancy(&client, "dummy text").await);

        assert!(failure.parse_error);
        assert!(failure.error_message.contains("job_title"));
        assert_eq!(
            failure.raw_output.as_deref(),
            Some(r#"{"company":"TechSolutions"}"#)
        );
    }

    #[tokio::test]
    async fn test_parse_vacancy_service_failure() {
        let client = ScriptedClient::fails();
        let failure = failed(parse_vacancy(&client, "dummy text").await);

        assert!(failure.parse_error);
        assert!(failure.error_message.contains("connection refused"));
        assert_eq!(failure.raw_output, None);
    }

    #[tokio::test]
    async fn test_parse_vacancy_is_deterministic() {
        let client = ScriptedClient::replies(FULL_REPLY);
        let first = parsed(parse_vacancy(&client, "dummy text").await);
        let second = parsed(parse_vacancy(&client, "dummy text").await);

        assert_eq!(first, second);
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("{}"), "{}");
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
        // missing closing fence is tolerated
        assert_eq!(strip_code_fences("```json\n{}"), "{}");
    }
}
