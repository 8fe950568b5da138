//! Integration tests for anomview-core: the path a user walks, from
//! picking a file to a rendered results view.

use anomview_core::transport::{interpret_results, interpret_upload};
use anomview_core::{
    AlgorithmChoice, ChartKind, FileCandidate, Route, UploadGate, ViewState,
};
use serde_json::json;

fn results_view(algorithm: AlgorithmChoice, status: u16, body: &serde_json::Value) -> ViewState {
    let mut state = ViewState::default();
    state.mount();
    state.resolve(interpret_results(algorithm, status, &body.to_string()));
    state
}

#[test]
fn test_upload_to_selection_route() {
    let mut gate = UploadGate::new();
    assert!(gate.select(Some(FileCandidate::new("meters.csv", 2048))));
    assert_eq!(gate.submission().unwrap().name, "meters.csv");

    let outcome = interpret_upload(200, r#"{"message":"File uploaded successfully","filename":"abc123"}"#);
    gate.finish_upload(&outcome);
    let route = Route::after_upload(outcome.unwrap());
    assert_eq!(route.path(), "/select-algorithm/abc123");
    assert!(gate.held().is_none());
}

#[test]
fn test_upload_error_is_shown_verbatim() {
    let mut gate = UploadGate::new();
    gate.select(Some(FileCandidate::new("meters.csv", 2048)));
    let outcome = interpret_upload(400, r#"{"error":"Too large"}"#);
    gate.finish_upload(&outcome);
    assert_eq!(gate.message(), Some("Too large"));
}

#[test]
fn test_selection_to_results_route() {
    let route = Route::Results {
        file_id: "abc123".into(),
        algorithm: AlgorithmChoice::OneClassSvm,
    };
    assert_eq!(route.path(), "/results/abc123?algorithm=One-Class%20SVM");
}

#[test]
fn test_error_payload_suppresses_charts_for_every_algorithm() {
    for algorithm in AlgorithmChoice::ALL {
        let state = results_view(
            algorithm,
            200,
            &json!({ "error": "x", "x_values": [1.0], "chart_data": {}, "previous_chart_data": {} }),
        );
        assert_eq!(state, ViewState::ErrorShown("x".into()), "{algorithm}");
    }
}

#[test]
fn test_kmeans_view() {
    let body = json!({
        "x_label": "kwh",
        "y_label": "cost",
        "x_values": [1.0, 2.0, 3.0, 4.0],
        "y_values": [1.5, 2.5, 3.5, 4.5],
        "clusters": [0, 1, 0, 2],
        "num_anomalies": 1,
        "anomaly_indices": [3],
        "threshold": 2.75,
        "anomaly_percentage": 25.0,
        "avg_anomaly_score": 3.14159,
        "max_anomaly_score": 3.14159,
        "min_anomaly_score": 3.14159,
        "anomalies_per_cluster": { "0": 0, "1": 0, "2": 1 }
    });
    let ViewState::Displayed(result) = results_view(AlgorithmChoice::KMeans, 200, &body) else {
        panic!("expected results to display");
    };

    assert_eq!(result.statistics.anomaly_percentage, "25.00");
    assert_eq!(result.statistics.avg_anomaly_score, "3.1416");
    assert_eq!(result.statistics.threshold.as_deref(), Some("2.7500"));
    assert_eq!(result.statistics.joined_indices(), "3");

    let kinds: Vec<_> = result.charts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [ChartKind::Scatter, ChartKind::Line]);
    assert_eq!(result.charts[0].series.len(), 3);
    for series in &result.charts[0].series {
        let cluster: i64 = series.label.trim_start_matches("Cluster ").parse().unwrap();
        let expected = [0i64, 1, 0, 2].iter().filter(|c| **c == cluster).count();
        assert_eq!(series.point_count(), expected);
    }
}

#[test]
fn test_isolation_forest_view_tolerates_missing_blocks() {
    let body = json!({
        "num_anomalies": 0,
        "anomaly_indices": [],
        "anomaly_percentage": 0,
        "avg_anomaly_score": 0,
        "max_anomaly_score": 0,
        "min_anomaly_score": 0
    });
    let ViewState::Displayed(result) = results_view(AlgorithmChoice::IsolationForest, 200, &body)
    else {
        panic!("expected results to display");
    };
    assert_eq!(result.charts.len(), 2);
    assert!(result.charts.iter().all(|c| c.series.iter().all(|s| s.point_count() == 0)));
    assert_eq!(result.statistics.threshold, None);
}

#[test]
fn test_not_found_from_service() {
    let state = results_view(AlgorithmChoice::KMeans, 404, &json!({ "error": "File not found" }));
    assert_eq!(state.error_text().as_deref(), Some("Error: File not found"));
}

#[test]
fn test_gateway_failure_uses_generic_message() {
    let mut state = ViewState::default();
    state.mount();
    state.resolve(interpret_results(AlgorithmChoice::OneClassSvm, 502, "Bad Gateway"));
    assert_eq!(state.error_text().as_deref(), Some("Error: Failed to fetch results."));
}
