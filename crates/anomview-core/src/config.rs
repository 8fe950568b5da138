//! Where the analysis service lives, and how its URLs are built.

use crate::models::{AlgorithmChoice, FileIdentifier};

/// Base used when nothing is configured: the dev host's forwarding prefix.
pub const DEFAULT_API_BASE: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Build from an optional compile-time value, e.g. `option_env!(..)`.
    pub fn from_build_env(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v.trim()),
            _ => Self::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn upload_url(&self) -> String {
        format!("{}/upload", self.base)
    }

    pub fn results_url(&self, file_id: &FileIdentifier, algorithm: AlgorithmChoice) -> String {
        format!(
            "{}/results/{}?algorithm={}",
            self.base,
            urlencoding::encode(file_id.as_str()),
            urlencoding::encode(algorithm.wire_name())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:5002/");
        assert_eq!(config.upload_url(), "http://localhost:5002/upload");
    }

    #[test]
    fn test_results_url_encodes_segments() {
        let config = ApiConfig::default();
        let url = config.results_url(&"q3 sales.csv".into(), AlgorithmChoice::IsolationForest);
        assert_eq!(url, "/api/results/q3%20sales.csv?algorithm=Isolation%20Forest");
    }

    #[test]
    fn test_blank_build_value_falls_back() {
        assert_eq!(ApiConfig::from_build_env(Some("  ")), ApiConfig::default());
        assert_eq!(ApiConfig::from_build_env(None).base(), "/api");
        assert_eq!(
            ApiConfig::from_build_env(Some("https://svc.example")).base(),
            "https://svc.example"
        );
    }
}
