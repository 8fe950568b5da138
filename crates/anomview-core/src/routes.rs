//! The three screens and their URLs.

use crate::error::{AnomviewError, Result};
use crate::models::{AlgorithmChoice, FileIdentifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Upload,
    SelectAlgorithm {
        file_id: FileIdentifier,
    },
    Results {
        file_id: FileIdentifier,
        algorithm: AlgorithmChoice,
    },
}

impl Route {
    /// Where a successful upload leads.
    pub fn after_upload(file_id: FileIdentifier) -> Self {
        Route::SelectAlgorithm { file_id }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Upload => "/".to_string(),
            Route::SelectAlgorithm { file_id } => {
                format!("/select-algorithm/{}", urlencoding::encode(file_id.as_str()))
            }
            Route::Results { file_id, algorithm } => format!(
                "/results/{}?algorithm={}",
                urlencoding::encode(file_id.as_str()),
                urlencoding::encode(algorithm.wire_name())
            ),
        }
    }

    /// Parse a path with optional query, e.g. `/results/a.csv?algorithm=K-Means`.
    pub fn parse(url: &str) -> Result<Self> {
        let (path, query) = match url.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (url, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Route::Upload,
            ["select-algorithm", id] => Route::SelectAlgorithm {
                file_id: decode_segment(id, url)?,
            },
            ["results", id] => {
                let algorithm = query
                    .and_then(|q| query_param(q, "algorithm"))
                    .transpose()?;
                Route::Results {
                    file_id: decode_segment(id, url)?,
                    algorithm: algorithm_from_query(algorithm.as_deref())?,
                }
            }
            _ => return Err(AnomviewError::InvalidRoute(url.to_string())),
        };
        tracing::debug!(url, ?route, "parsed route");
        Ok(route)
    }
}

/// Resolve the already-decoded `algorithm` query value.
pub fn algorithm_from_query(value: Option<&str>) -> Result<AlgorithmChoice> {
    match value {
        Some(name) => name.parse(),
        None => Err(AnomviewError::UnknownAlgorithm(String::new())),
    }
}

/// `.` and `..` never name a file.
fn decode_segment(segment: &str, url: &str) -> Result<FileIdentifier> {
    match urlencoding::decode(segment) {
        Ok(s) if s != "." && s != ".." => Ok(FileIdentifier::new(s.into_owned())),
        _ => Err(AnomviewError::InvalidRoute(url.to_string())),
    }
}

fn query_param(query: &str, key: &str) -> Option<Result<String>> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        (k == key).then(|| {
            urlencoding::decode(&v.replace('+', " "))
                .map(|s| s.into_owned())
                .map_err(|_| AnomviewError::InvalidRoute(query.to_string()))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_segments_are_not_identifiers() {
        for url in [
            "/results/..?algorithm=K-Means",
            "/results/%2e%2e?algorithm=K-Means",
            "/select-algorithm/%2E",
        ] {
            assert!(matches!(Route::parse(url), Err(AnomviewError::InvalidRoute(_))), "{}", url);
        }
        assert!(Route::parse("/results/..data.csv?algorithm=K-Means").is_ok());
    }

    #[test]
    fn test_upload_leads_to_selection() {
        let route = Route::after_upload("abc123".into());
        assert_eq!(route.path(), "/select-algorithm/abc123");
    }

    #[test]
    fn test_results_path_round_trips() {
        for algorithm in AlgorithmChoice::ALL {
            let route = Route::Results {
                file_id: "my data.xlsx".into(),
                algorithm,
            };
            assert_eq!(Route::parse(&route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_parse_accepts_plus_and_extra_params() {
        let route = Route::parse("/results/abc?lang=en&algorithm=Isolation+Forest").unwrap();
        assert_eq!(
            route,
            Route::Results {
                file_id: "abc".into(),
                algorithm: AlgorithmChoice::IsolationForest
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(Route::parse("/settings"), Err(AnomviewError::InvalidRoute(_))));
        assert!(matches!(
            Route::parse("/results/abc?algorithm=DBSCAN"),
            Err(AnomviewError::UnknownAlgorithm(ref a)) if a == "DBSCAN"
        ));
        assert!(matches!(
            Route::parse("/results/abc"),
            Err(AnomviewError::UnknownAlgorithm(_))
        ));
        assert_eq!(Route::parse("/").unwrap(), Route::Upload);
    }
}
