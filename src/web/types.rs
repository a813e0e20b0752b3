// src/web/types.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub description: String,
}

#[derive(Deserialize)]
pub struct EvaluateRequest {
    pub vacancy: String,
    pub resume: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub vacancy_description: String,
}

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub evaluation: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String) -> Self {
        Self {
            success: false,
            error,
            error_code,
        }
    }
}

pub struct ServerConfig {
    pub prompts_dir: PathBuf,
}

impl ServerConfig {
    pub fn vacancy_template_path(&self) -> PathBuf {
        self.prompts_dir.join("system_vacancy.md")
    }

    pub fn evaluate_template_path(&self) -> PathBuf {
        self.prompts_dir.join("system_evaluate.md")
    }
}
