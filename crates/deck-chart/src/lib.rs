//! Chart overlays and dataset assembly
//!
//! Pure, deterministic transforms from a price series to what a chart
//! renders: SMA/EMA overlay math, visible-window slicing by date range,
//! X-axis label thinning, forecast chart joining, and the key-metrics
//! summary. No I/O and no side effects; rendering itself lives with the
//! caller.

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod overlay;

// Re-export main types for convenience
pub use dataset::{
    chart_data, forecast_chart_data, ChartData, Dataset, DateRange, SeriesKind,
    MIN_OVERLAY_POINTS, OVERLAY_WINDOW,
};
pub use error::{ChartError, Result};
pub use metrics::{key_metrics, KeyMetrics};
pub use overlay::{exponential_moving_average, simple_moving_average};
