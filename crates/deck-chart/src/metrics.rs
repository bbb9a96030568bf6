//! Key metrics over a loaded price series

use deck_api::PriceBar;

/// Summary figures shown alongside the price chart
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetrics {
    /// Highest high over the loaded series
    pub high: f64,
    /// Lowest low over the loaded series
    pub low: f64,
    /// Mean daily volume, rounded to the nearest share
    pub avg_volume: u64,
}

/// Compute the 52-week style high/low and average volume for the series the
/// screen has loaded; `None` when there are no bars
pub fn key_metrics(bars: &[PriceBar]) -> Option<KeyMetrics> {
    if bars.is_empty() {
        return None;
    }

    let high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    let total_volume: u64 = bars.iter().map(|b| b.volume).sum();
    let avg_volume = (total_volume as f64 / bars.len() as f64).round() as u64;

    Some(KeyMetrics {
        high,
        low,
        avg_volume,
    })
}
