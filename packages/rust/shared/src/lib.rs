//! Shared types, error model, and configuration for AgriGuide.
//!
//! This crate is the foundation depended on by all other AgriGuide crates.
//! It provides:
//! - [`AgriGuideError`] — the unified error type
//! - Domain types ([`Subject`], [`SubjectKind`], [`GuideRecord`], [`GuideSection`])
//! - Configuration ([`AppConfig`], config loading, API-key resolution)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, GeminiConfig, config_dir, config_file_path, endpoint_url,
    init_config, load_config, load_config_from, resolve_api_key,
};
pub use error::{AgriGuideError, Result};
pub use types::{GuideRecord, GuideSection, Subject, SubjectKind};
