//! Turn result payloads into statistics and chart-ready series.
//!
//! Each algorithm has one [`Normalizer`]; [`AlgorithmChoice::normalizer`]
//! is the dispatch table. Normalizers are pure and never touch the
//! payload's anomaly index list.

use std::collections::HashSet;

use serde::Serialize;

use crate::chart::{cluster_color, AxisValue, ChartKind, ChartSeries, ChartSpec};
use crate::models::AlgorithmChoice;
use crate::payload::{
    IsolationForestDetail, KMeansDetail, OneClassSvmDetail, PayloadDetail, PayloadSummary,
    ResultPayload,
};

/// Summary numbers ready for the statistics panel.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Statistics {
    pub num_anomalies: u64,
    /// Two decimals, no percent sign.
    pub anomaly_percentage: String,
    /// Four decimals.
    pub avg_anomaly_score: String,
    pub max_anomaly_score: String,
    pub min_anomaly_score: String,
    pub threshold: Option<String>,
    /// Indices exactly as received.
    pub anomaly_indices: Vec<i64>,
}

impl Statistics {
    pub fn from_summary(summary: &PayloadSummary) -> Self {
        Self {
            num_anomalies: summary.num_anomalies,
            anomaly_percentage: fixed(summary.anomaly_percentage, 2),
            avg_anomaly_score: fixed(summary.avg_anomaly_score, 4),
            max_anomaly_score: fixed(summary.max_anomaly_score, 4),
            min_anomaly_score: fixed(summary.min_anomaly_score, 4),
            threshold: summary.threshold.map(|t| fixed(t, 4)),
            anomaly_indices: summary.anomaly_indices.clone(),
        }
    }

    /// Indices joined for the textual listing.
    pub fn joined_indices(&self) -> String {
        self.anomaly_indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Fixed-point text with halves rounded away from zero: 0.125 -> "0.13".
fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    format!("{:.*}", digits, (value * scale).round() / scale)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NormalizedResult {
    pub algorithm: AlgorithmChoice,
    pub statistics: Statistics,
    pub charts: Vec<ChartSpec>,
}

pub trait Normalizer: Send + Sync {
    /// Charts for this algorithm, or `None` if the payload belongs to
    /// another one.
    fn charts(&self, summary: &PayloadSummary, detail: &PayloadDetail) -> Option<Vec<ChartSpec>>;
}

pub struct KMeansNormalizer;
pub struct IsolationForestNormalizer;
pub struct OneClassSvmNormalizer;

impl AlgorithmChoice {
    pub fn normalizer(self) -> &'static dyn Normalizer {
        match self {
            AlgorithmChoice::KMeans => &KMeansNormalizer,
            AlgorithmChoice::IsolationForest => &IsolationForestNormalizer,
            AlgorithmChoice::OneClassSvm => &OneClassSvmNormalizer,
        }
    }
}

/// Normalize with the payload's own algorithm.
pub fn normalize(payload: &ResultPayload) -> NormalizedResult {
    let charts = payload
        .algorithm
        .normalizer()
        .charts(&payload.summary, &payload.detail)
        .unwrap_or_else(|| {
            tracing::warn!(algorithm = %payload.algorithm, "payload detail does not match algorithm");
            Vec::new()
        });
    tracing::debug!(
        algorithm = %payload.algorithm,
        charts = charts.len(),
        anomalies = payload.summary.num_anomalies,
        "normalized results"
    );
    NormalizedResult {
        algorithm: payload.algorithm,
        statistics: Statistics::from_summary(&payload.summary),
        charts,
    }
}

// ─── K-Means ─────────────────────────────────────────────────────────────────

impl Normalizer for KMeansNormalizer {
    fn charts(&self, summary: &PayloadSummary, detail: &PayloadDetail) -> Option<Vec<ChartSpec>> {
        let PayloadDetail::KMeans(d) = detail else {
            return None;
        };
        Some(vec![
            cluster_scatter(d),
            anomaly_line(d, &summary.anomaly_indices),
        ])
    }
}

/// One series per cluster label, in order of first appearance.
fn cluster_scatter(d: &KMeansDetail) -> ChartSpec {
    let mut chart = ChartSpec::new(
        ChartKind::Scatter,
        "K-Means Clustering Results",
        d.x_label.clone(),
        d.y_label.clone(),
    );
    let points: Vec<(f64, f64, i64)> = d
        .x_values
        .iter()
        .zip(&d.y_values)
        .zip(&d.clusters)
        .map(|((x, y), c)| (*x, *y, *c))
        .collect();

    let mut seen = HashSet::new();
    for &(_, _, cluster) in &points {
        if !seen.insert(cluster) {
            continue;
        }
        let mut series = ChartSeries::new(format!("Cluster {}", cluster), cluster_color(cluster));
        for &(x, y, _) in points.iter().filter(|p| p.2 == cluster) {
            series.push(x, Some(y));
        }
        chart.series.push(series);
    }
    chart
}

/// The y value at each anomaly position, nothing elsewhere.
fn anomaly_line(d: &KMeansDetail, anomaly_indices: &[i64]) -> ChartSpec {
    let flagged: HashSet<i64> = anomaly_indices.iter().copied().collect();
    let mut series = ChartSeries::new("Anomalies", "red").with_marker_size(5);
    for i in 0..d.x_values.len() {
        let y = if flagged.contains(&(i as i64)) {
            d.y_values.get(i).copied()
        } else {
            None
        };
        series.push(format!("Point {}", i + 1), y);
    }
    ChartSpec::new(ChartKind::Line, "Anomaly Data Points", "Data Points", "Values")
        .with_series(series)
}

// ─── Isolation Forest ────────────────────────────────────────────────────────

impl Normalizer for IsolationForestNormalizer {
    fn charts(&self, _summary: &PayloadSummary, detail: &PayloadDetail) -> Option<Vec<ChartSpec>> {
        let PayloadDetail::IsolationForest(d) = detail else {
            return None;
        };
        Some(vec![score_histogram(d), anomaly_scatter(d)])
    }
}

fn score_histogram(d: &IsolationForestDetail) -> ChartSpec {
    let samples = |label: &str, color: &str, scores: &[f64]| {
        let mut s = ChartSeries::new(label, color);
        s.x = scores.iter().map(|v| AxisValue::Number(*v)).collect();
        s
    };
    ChartSpec::new(
        ChartKind::Histogram,
        "Isolation Forest Anomaly Scores",
        "Anomaly Score",
        "Sample Count",
    )
    .with_series(samples("Normal Samples", "lightgreen", &d.chart_data.normal_scores))
    .with_series(samples("Anomalous Samples", "orange", &d.chart_data.anomalous_scores))
}

/// Anomalous instances only: x is the instance label, y its score.
fn anomaly_scatter(d: &IsolationForestDetail) -> ChartSpec {
    let block = &d.chart_data_anomaly;
    let mut series = ChartSeries::new("Anomalous Samples", "red").with_marker_size(4);
    for (k, &idx) in block.anomalous_indices.iter().enumerate() {
        let instance = usize::try_from(idx).ok().and_then(|i| block.instances.get(i));
        if let (Some(x), Some(&y)) = (instance, block.anomalous_scores.get(k)) {
            series.push(x.clone(), Some(y));
        }
    }
    ChartSpec::new(
        ChartKind::Scatter,
        "Anomaly Scatter Plot",
        "Instance Index",
        "Anomaly Score",
    )
    .with_series(series)
}

// ─── One-Class SVM ───────────────────────────────────────────────────────────

impl Normalizer for OneClassSvmNormalizer {
    fn charts(&self, _summary: &PayloadSummary, detail: &PayloadDetail) -> Option<Vec<ChartSpec>> {
        let PayloadDetail::OneClassSvm(d) = detail else {
            return None;
        };
        Some(vec![score_bars(d), actual_vs_predicted(d)])
    }
}

fn score_bars(d: &OneClassSvmDetail) -> ChartSpec {
    let bars = |label: &str, color: &str, prefix: &str, scores: &[f64]| {
        let mut s = ChartSeries::new(label, color);
        for (i, v) in scores.iter().enumerate() {
            s.push(format!("{} {}", prefix, i + 1), Some(*v));
        }
        s
    };
    let split = &d.previous_chart_data;
    ChartSpec::new(
        ChartKind::Bar,
        "One-Class SVM Anomaly Scores",
        "Samples",
        "Anomaly Score",
    )
    .y_from_zero()
    .with_series(bars("Normal Scores", "lightgreen", "Normal Sample", &split.normal_scores))
    .with_series(bars("Anomalous Scores", "orange", "Anomaly", &split.anomalous_scores))
}

fn actual_vs_predicted(d: &OneClassSvmDetail) -> ChartSpec {
    let indexed = |label: &str, color: &str, size: u32, values: &[f64]| {
        let mut s = ChartSeries::new(label, color).with_marker_size(size);
        for (i, v) in values.iter().enumerate() {
            s.push(i + 1, Some(*v));
        }
        s
    };
    let data = &d.scatter_chart_data;
    ChartSpec::new(
        ChartKind::Scatter,
        "Scatter Chart",
        "Sample Index",
        "Consumption Value",
    )
    .y_from_zero()
    .with_series(indexed("Actual Consumption", "blue", 5, &data.actual))
    .with_series(indexed("Predicted Consumption", "red", 7, &data.predicted))
}
