//! Raw result payloads as the analysis service sends them.
//!
//! Every field is defaulted: a missing array reads as empty and a missing
//! number as zero, so a partial payload still renders.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::chart::AxisValue;
use crate::error::{AnomviewError, Result};
use crate::models::AlgorithmChoice;

/// Fields every algorithm reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PayloadSummary {
    pub num_anomalies: u64,
    pub anomaly_indices: Vec<i64>,
    pub threshold: Option<f64>,
    pub anomaly_percentage: f64,
    pub avg_anomaly_score: f64,
    pub max_anomaly_score: f64,
    pub min_anomaly_score: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KMeansDetail {
    #[serde(deserialize_with = "label_text")]
    pub x_label: String,
    #[serde(deserialize_with = "label_text")]
    pub y_label: String,
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    pub clusters: Vec<i64>,
}

/// Scores split by the model's verdict.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScoreSplit {
    pub normal_scores: Vec<f64>,
    pub anomalous_scores: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnomalyInstances {
    pub instances: Vec<AxisValue>,
    pub anomalous_scores: Vec<f64>,
    pub anomalous_indices: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IsolationForestDetail {
    pub chart_data: ScoreSplit,
    pub chart_data_anomaly: AnomalyInstances,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActualPredicted {
    pub actual: Vec<f64>,
    pub predicted: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OneClassSvmDetail {
    pub previous_chart_data: ScoreSplit,
    pub scatter_chart_data: ActualPredicted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PayloadDetail {
    KMeans(KMeansDetail),
    IsolationForest(IsolationForestDetail),
    OneClassSvm(OneClassSvmDetail),
}

/// A successful response for one (file, algorithm) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPayload {
    pub algorithm: AlgorithmChoice,
    pub summary: PayloadSummary,
    pub detail: PayloadDetail,
}

impl ResultPayload {
    /// Read a response body. A truthy top-level `error` wins over any data.
    pub fn from_value(algorithm: AlgorithmChoice, value: Value) -> Result<Self> {
        if let Some(message) = error_message(&value) {
            return Err(AnomviewError::results(message));
        }
        let summary: PayloadSummary = serde_json::from_value(value.clone())?;
        let detail = match algorithm {
            AlgorithmChoice::KMeans => PayloadDetail::KMeans(serde_json::from_value(value)?),
            AlgorithmChoice::IsolationForest => {
                PayloadDetail::IsolationForest(serde_json::from_value(value)?)
            }
            AlgorithmChoice::OneClassSvm => {
                PayloadDetail::OneClassSvm(serde_json::from_value(value)?)
            }
        };
        Ok(Self {
            algorithm,
            summary,
            detail,
        })
    }

    pub fn from_json(algorithm: AlgorithmChoice, body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(algorithm, value)
    }
}

/// The `error` field of a body, when it is set to something truthy.
pub fn error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Column names arrive as strings, but numeric headers are possible.
fn label_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
