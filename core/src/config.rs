#![deny(missing_docs)]

//! # Configuration
//!
//! Tunables shared by the validator and the request builder.

/// Version prefix a document must declare in its `openapi` field.
pub const SUPPORTED_VERSION_PREFIX: &str = "3.";

/// Endpoints the generated console relies on.
pub const DEFAULT_REQUIRED_PATHS: [&str; 3] = ["/now", "/secnow", "/validate"];

/// Origin used to resolve relative previews. Never rendered.
pub const PLACEHOLDER_ORIGIN: &str = "http://example.local";

/// Header argument attached to previews that carry a body.
pub const JSON_CONTENT_TYPE_HEADER: &str = "-H \"content-type: application/json\"";

/// Rules applied by [`crate::oas::validation::validate_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Prefix the `openapi` version string must start with.
    pub version_prefix: String,
    /// Routes that must be present under `paths`.
    pub required_paths: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            version_prefix: SUPPORTED_VERSION_PREFIX.to_string(),
            required_paths: DEFAULT_REQUIRED_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

impl ValidationRules {
    /// Replaces the required route list.
    pub fn required_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the accepted version prefix.
    pub fn version_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.version_prefix = prefix.into();
        self
    }
}
