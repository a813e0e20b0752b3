// src/vacancy/mod.rs
//! Vacancy intelligence: structured extraction, description generation and
//! resume evaluation on top of the completion service.

pub mod extractor;
pub mod generator;
pub mod types;

pub use extractor::parse_vacancy;
pub use generator::{evaluate_resume, generate_vacancy_description};
pub use types::{ExtractionFailure, ExtractionOutcome, GenerationFields, Vacancy};
