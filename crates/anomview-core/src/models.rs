//! Data models for anomview.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AnomviewError;

/// Extensions the analysis service can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileExtension {
    Csv,
    Xlsx,
}

impl FileExtension {
    /// Match a filename suffix case-insensitively.
    pub fn from_filename(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".csv") {
            Some(FileExtension::Csv)
        } else if lower.ends_with(".xlsx") {
            Some(FileExtension::Xlsx)
        } else {
            None
        }
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileExtension::Csv => write!(f, "csv"),
            FileExtension::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// What the browser reports about a picked file before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A file that passed the upload gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    /// Size in bytes, always in `(0, MAX_UPLOAD_BYTES]`.
    pub size: u64,
    pub extension: FileExtension,
}

/// Opaque token the service returns for an uploaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct FileIdentifier(String);

impl FileIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileIdentifier {
    fn from(v: &str) -> Self {
        FileIdentifier(v.to_string())
    }
}

impl From<String> for FileIdentifier {
    fn from(v: String) -> Self {
        FileIdentifier(v)
    }
}

/// The three detection methods the service offers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlgorithmChoice {
    #[serde(rename = "K-Means")]
    KMeans,
    #[serde(rename = "Isolation Forest")]
    IsolationForest,
    #[serde(rename = "One-Class SVM")]
    OneClassSvm,
}

impl AlgorithmChoice {
    pub const ALL: [AlgorithmChoice; 3] = [
        AlgorithmChoice::KMeans,
        AlgorithmChoice::IsolationForest,
        AlgorithmChoice::OneClassSvm,
    ];

    /// Name sent as the `algorithm` query parameter.
    pub fn wire_name(self) -> &'static str {
        match self {
            AlgorithmChoice::KMeans => "K-Means",
            AlgorithmChoice::IsolationForest => "Isolation Forest",
            AlgorithmChoice::OneClassSvm => "One-Class SVM",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AlgorithmChoice::KMeans => "A clustering algorithm that groups data into k clusters.",
            AlgorithmChoice::IsolationForest => {
                "An algorithm that detects anomalies using an isolation-based approach."
            }
            AlgorithmChoice::OneClassSvm => {
                "A classification algorithm designed for anomaly detection in datasets."
            }
        }
    }

    /// Heading of the results screen.
    pub fn headline(self) -> &'static str {
        match self {
            AlgorithmChoice::KMeans => "K-Means Algorithm: Anomaly Detection Overview",
            AlgorithmChoice::IsolationForest => "Isolation Forest: Anomaly Detection Overview",
            AlgorithmChoice::OneClassSvm => "One-Class SVM: Anomaly Detection Overview",
        }
    }

    /// Stem used when naming exported files, e.g. `KMeans`.
    pub fn export_stem(self) -> &'static str {
        match self {
            AlgorithmChoice::KMeans => "KMeans",
            AlgorithmChoice::IsolationForest => "IsolationForest",
            AlgorithmChoice::OneClassSvm => "OneClassSVM",
        }
    }
}

impl std::fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for AlgorithmChoice {
    type Err = AnomviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmChoice::ALL
            .into_iter()
            .find(|a| a.wire_name() == s)
            .ok_or_else(|| AnomviewError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(FileExtension::from_filename("data.CSV"), Some(FileExtension::Csv));
        assert_eq!(FileExtension::from_filename("Book1.XlSx"), Some(FileExtension::Xlsx));
        assert_eq!(FileExtension::from_filename("data.xls"), None);
        assert_eq!(FileExtension::from_filename("csv"), None);
    }

    #[test]
    fn test_algorithm_wire_names_round_trip() {
        for algo in AlgorithmChoice::ALL {
            assert_eq!(algo.wire_name().parse::<AlgorithmChoice>().unwrap(), algo);
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.wire_name()));
        }
        assert!("k-means".parse::<AlgorithmChoice>().is_err());
    }
}
