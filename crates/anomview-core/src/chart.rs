//! Chart-ready series, independent of any plotting library.

use serde::{Deserialize, Serialize};

/// Colors assigned to clusters by `cluster_id mod 6`.
pub const CLUSTER_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    Line,
    Bar,
    /// Series carry raw samples in `x`; the renderer bins them.
    Histogram,
}

/// A value on the x axis: numeric, or a category label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Label(String),
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Number(v)
    }
}

impl From<usize> for AxisValue {
    fn from(v: usize) -> Self {
        AxisValue::Number(v as f64)
    }
}

impl From<String> for AxisValue {
    fn from(v: String) -> Self {
        AxisValue::Label(v)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub x: Vec<AxisValue>,
    /// `None` marks a position with no point. Empty for histograms.
    pub y: Vec<Option<f64>>,
    pub marker_size: Option<u32>,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            x: Vec::new(),
            y: Vec::new(),
            marker_size: None,
        }
    }

    pub fn with_marker_size(mut self, size: u32) -> Self {
        self.marker_size = Some(size);
        self
    }

    pub fn push(&mut self, x: impl Into<AxisValue>, y: Option<f64>) {
        self.x.push(x.into());
        self.y.push(y);
    }

    /// Number of positions that actually hold a point.
    pub fn point_count(&self) -> usize {
        if self.y.is_empty() {
            self.x.len()
        } else {
            self.y.iter().filter(|v| v.is_some()).count()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y_from_zero: bool,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            y_from_zero: false,
            series: Vec::new(),
        }
    }

    pub fn y_from_zero(mut self) -> Self {
        self.y_from_zero = true;
        self
    }

    pub fn with_series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }
}

/// Palette color for a cluster label; negative labels wrap too.
pub fn cluster_color(cluster: i64) -> &'static str {
    CLUSTER_PALETTE[cluster.rem_euclid(CLUSTER_PALETTE.len() as i64) as usize]
}
