//! State of one mounted results view.

use crate::error::Result;
use crate::models::AlgorithmChoice;
use crate::normalize::{normalize, NormalizedResult};
use crate::payload::ResultPayload;

/// `Idle -> Loading -> {Displayed, ErrorShown}`. The last two are terminal;
/// a fresh fetch needs a fresh view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Displayed(Box<NormalizedResult>),
    ErrorShown(String),
}

impl ViewState {
    /// Mounting starts the fetch.
    pub fn mount(&mut self) {
        if matches!(self, ViewState::Idle) {
            *self = ViewState::Loading;
        }
    }

    /// Settle a pending fetch. Ignored unless loading.
    pub fn resolve(&mut self, outcome: Result<ResultPayload>) {
        if !matches!(self, ViewState::Loading) {
            tracing::debug!("ignoring late result for a settled view");
            return;
        }
        *self = match outcome {
            Ok(payload) => ViewState::Displayed(Box::new(normalize(&payload))),
            Err(e) => ViewState::ErrorShown(e.to_string()),
        };
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ViewState::Displayed(_) | ViewState::ErrorShown(_))
    }

    /// Text of the error display, e.g. `Error: File not found`.
    pub fn error_text(&self) -> Option<String> {
        match self {
            ViewState::ErrorShown(message) => Some(format!("Error: {}", message)),
            _ => None,
        }
    }

    /// Heading above the view. The error display stands alone.
    pub fn headline(&self, algorithm: AlgorithmChoice) -> Option<&'static str> {
        match self {
            ViewState::ErrorShown(_) => None,
            _ => Some(algorithm.headline()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnomviewError;
    use serde_json::json;

    fn payload() -> ResultPayload {
        ResultPayload::from_value(AlgorithmChoice::KMeans, json!({ "num_anomalies": 1 })).unwrap()
    }

    #[test]
    fn test_happy_path() {
        let mut state = ViewState::default();
        state.mount();
        assert_eq!(state, ViewState::Loading);
        state.resolve(Ok(payload()));
        assert!(matches!(state, ViewState::Displayed(ref r) if r.statistics.num_anomalies == 1));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_error_path() {
        let mut state = ViewState::default();
        state.mount();
        state.resolve(Err(AnomviewError::results("x")));
        assert_eq!(state, ViewState::ErrorShown("x".into()));
        assert_eq!(state.error_text().as_deref(), Some("Error: x"));
        assert_eq!(state.headline(AlgorithmChoice::KMeans), None);
    }

    #[test]
    fn test_headline_outside_errors() {
        let mut state = ViewState::default();
        state.mount();
        assert_eq!(
            state.headline(AlgorithmChoice::OneClassSvm),
            Some("One-Class SVM: Anomaly Detection Overview")
        );
        state.resolve(Ok(payload()));
        assert!(state.headline(AlgorithmChoice::KMeans).is_some());
    }

    #[test]
    fn test_terminal_states_stay_put() {
        let mut state = ViewState::ErrorShown("x".into());
        state.mount();
        state.resolve(Ok(payload()));
        assert_eq!(state, ViewState::ErrorShown("x".into()));

        let mut idle = ViewState::Idle;
        idle.resolve(Ok(payload()));
        assert_eq!(idle, ViewState::Idle);
    }
}
