// src/core/config_manager.rs
//! Unified configuration management - everything is read from the environment
//! once at process start

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_PROMPTS_DIR: &str = "prompts";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub service: ServiceConfig,
    pub prompts_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl ConfigManager {
    /// Load all configurations
    pub fn load() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let model =
            std::env::var("COMPLETION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let prompts_path = std::env::var("PROMPTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_PROMPTS_DIR));
        let prompts_path = Self::resolve_path(&prompts_path)?;

        info!("Completion service base URL: {}", api_base);
        info!("Completion model: {}", model);
        info!("Prompt templates: {}", prompts_path.display());

        Ok(Self {
            service: ServiceConfig {
                api_key,
                api_base,
                model,
            },
            prompts_path,
        })
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}
