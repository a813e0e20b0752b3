// src/vacancy/types.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Structured vacancy record extracted from a free-form job description.
///
/// `job_title` and `company` must be present in the service output; the
/// remaining fields default to `None` or an empty list when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// Returned in place of a `Vacancy` when the service reply could not be
/// parsed or validated, or when the service call itself failed.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionFailure {
    pub parse_error: bool,
    pub error_message: String,
    pub raw_output: Option<String>,
}

impl ExtractionFailure {
    /// Failure with the offending service output attached.
    pub fn invalid_output(error_message: String, raw_output: String) -> Self {
        Self {
            parse_error: true,
            error_message,
            raw_output: Some(raw_output),
        }
    }

    /// Failure before any output was available (transport or service error).
    pub fn service_error(error_message: String) -> Self {
        Self {
            parse_error: true,
            error_message,
            raw_output: None,
        }
    }
}

/// The two-outcome contract of extraction. Serialized untagged: a success is
/// the flattened vacancy record, a failure is the `parse_error` payload, both
/// carried over HTTP 200.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Parsed(Vacancy),
    Failed(ExtractionFailure),
}

/// Attributes to render into a generated description. Insertion order is
/// preserved so the prompt text is reproducible for the same request body.
pub type GenerationFields = IndexMap<String, String>;
