//! anomview-core: everything the anomview client decides without a browser.
//!
//! The service does the detection. This crate validates what gets
//! uploaded, reads what comes back, and turns it into statistics and
//! chart series; the frontend only performs IO and draws.

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod gate;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod routes;
pub mod transport;
pub mod view;

pub use chart::{AxisValue, ChartKind, ChartSeries, ChartSpec};
pub use config::ApiConfig;
pub use error::{AnomviewError, GateError};
pub use gate::UploadGate;
pub use models::{AlgorithmChoice, FileCandidate, FileIdentifier, UploadedFile};
pub use normalize::{normalize, NormalizedResult, Normalizer, Statistics};
pub use payload::ResultPayload;
pub use routes::Route;
pub use view::ViewState;
