#![deny(missing_docs)]

//! # Shared Arguments
//!
//! Argument groups reused by several commands.

use apidoc_core::config::DEFAULT_REQUIRED_PATHS;
use apidoc_core::{load_document, AppError, AppResult, ValidationRules};
use serde_json::Value;
use std::path::PathBuf;

/// Location of the description document.
#[derive(clap::Args, Debug, Clone)]
pub struct SpecArgs {
    /// Path to the OpenAPI document (YAML or JSON).
    #[clap(long, env = "APIDOC_SPEC", default_value = "openapi.yaml")]
    pub spec: PathBuf,
}

impl SpecArgs {
    /// Loads and parses the document.
    pub fn load(&self) -> AppResult<Value> {
        if !self.spec.exists() {
            return Err(AppError::General(format!(
                "OpenAPI file not found: {:?}",
                self.spec
            )));
        }
        log::info!("Loading OpenAPI document from {:?}", self.spec);
        load_document(&self.spec)
    }

    /// File name used in user-facing messages.
    pub fn display_name(&self) -> String {
        self.spec
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.spec.display().to_string())
    }
}

/// Structural validation settings.
#[derive(clap::Args, Debug, Clone)]
pub struct RulesArgs {
    /// Route that must exist under `paths`. Repeat or comma-separate.
    #[clap(
        long = "required-path",
        env = "APIDOC_REQUIRED_PATHS",
        value_delimiter = ',',
        default_values_t = DEFAULT_REQUIRED_PATHS.map(String::from)
    )]
    pub required_paths: Vec<String>,
}

impl RulesArgs {
    /// Builds the validation rules.
    pub fn rules(&self) -> ValidationRules {
        ValidationRules::default().required_paths(self.required_paths.iter().cloned())
    }
}

/// Helper to parse "key=value" arguments.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}
