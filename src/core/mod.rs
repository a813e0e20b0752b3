// src/core/mod.rs
//! Core services shared by every endpoint

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::ServiceClient;
