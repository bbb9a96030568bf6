//! Chart dataset assembly
//!
//! Turns a price series into the label/series bundle a chart renders. The
//! visible window comes from the date-range selector; overlays are gated on
//! having at least [`MIN_OVERLAY_POINTS`] visible points and the shorter SMA
//! output is left-padded by repeating its first computed value so every
//! series spans the same X axis. The padding is a deliberate display choice
//! carried over from the existing charts; omitting the first W-1 points would
//! change the expected chart shape.

use crate::error::{ChartError, Result};
use crate::overlay::{exponential_moving_average, simple_moving_average};
use chrono::{Datelike, NaiveDate};
use deck_api::{ForecastPoint, PriceBar};
use serde::Serialize;

/// Window used for both SMA and EMA overlays
pub const OVERLAY_WINDOW: usize = 10;

/// Minimum visible price points before any overlay is computed
pub const MIN_OVERLAY_POINTS: usize = 10;

/// Historical bars included in a forecast chart
const FORECAST_HISTORY_POINTS: usize = 10;

/// Predicted points included in a forecast chart
const FORECAST_PREDICTION_POINTS: usize = 5;

/// Date-range selector for the price chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    OneWeek,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
    TenYears,
    Max,
}

impl DateRange {
    /// How many of the most recent bars the chart shows for this range
    pub fn visible_points(&self) -> usize {
        match self {
            DateRange::OneWeek => 7,
            DateRange::OneMonth => 15,
            DateRange::ThreeMonths => 30,
            DateRange::SixMonths => 45,
            DateRange::OneYear => 60,
            DateRange::FiveYears => 100,
            DateRange::TenYears => 150,
            DateRange::Max => 200,
        }
    }

    /// Selector spelling shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::OneWeek => "1W",
            DateRange::OneMonth => "1M",
            DateRange::ThreeMonths => "3M",
            DateRange::SixMonths => "6M",
            DateRange::OneYear => "1Y",
            DateRange::FiveYears => "5Y",
            DateRange::TenYears => "10Y",
            DateRange::Max => "MAX",
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DateRange {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "1W" => Ok(DateRange::OneWeek),
            "1M" => Ok(DateRange::OneMonth),
            "3M" => Ok(DateRange::ThreeMonths),
            "6M" => Ok(DateRange::SixMonths),
            "1Y" => Ok(DateRange::OneYear),
            "5Y" => Ok(DateRange::FiveYears),
            "10Y" => Ok(DateRange::TenYears),
            "MAX" => Ok(DateRange::Max),
            other => Err(ChartError::UnknownRange(other.to_string())),
        }
    }
}

/// Which series a dataset carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Price,
    Sma,
    Ema,
}

impl SeriesKind {
    /// Legend label for this series
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Price => "Price",
            SeriesKind::Sma => "SMA 10",
            SeriesKind::Ema => "EMA 10",
        }
    }
}

/// One plottable series
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub kind: SeriesKind,
    pub values: Vec<f64>,
}

/// Labels plus series, every series as long as `labels`
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Number of visible points on the X axis
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there is anything to plot
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Assemble the price chart for the last `range.visible_points()` bars, with
/// optional SMA/EMA overlays.
///
/// Overlays are produced only when at least [`MIN_OVERLAY_POINTS`] points are
/// visible, regardless of the toggles.
pub fn chart_data(bars: &[PriceBar], range: DateRange, show_sma: bool, show_ema: bool) -> ChartData {
    let visible = last_n(bars, range.visible_points());
    let closes: Vec<f64> = visible.iter().map(|b| b.close).collect();

    let interval = label_interval(closes.len());
    let labels = visible
        .iter()
        .enumerate()
        .map(|(i, bar)| thinned_label(&bar.date, i, interval))
        .collect();

    let mut datasets = vec![Dataset {
        kind: SeriesKind::Price,
        values: closes.clone(),
    }];

    if show_sma && closes.len() >= MIN_OVERLAY_POINTS {
        let sma = simple_moving_average(&closes, OVERLAY_WINDOW);
        datasets.push(Dataset {
            kind: SeriesKind::Sma,
            values: left_pad(&sma, closes.len()),
        });
    }

    if show_ema && closes.len() >= MIN_OVERLAY_POINTS {
        datasets.push(Dataset {
            kind: SeriesKind::Ema,
            values: exponential_moving_average(&closes, OVERLAY_WINDOW),
        });
    }

    ChartData { labels, datasets }
}

/// Assemble the forecast chart: the last 10 historical bars joined with the
/// first 5 predicted points, labels on every 2nd point.
pub fn forecast_chart_data(bars: &[PriceBar], predictions: &[ForecastPoint]) -> ChartData {
    let history = last_n(bars, FORECAST_HISTORY_POINTS);
    let predicted = &predictions[..predictions.len().min(FORECAST_PREDICTION_POINTS)];

    let joined: Vec<(&str, f64)> = history
        .iter()
        .map(|b| (b.date.as_str(), b.close))
        .chain(predicted.iter().map(|p| (p.date.as_str(), p.price)))
        .collect();

    let labels = joined
        .iter()
        .enumerate()
        .map(|(i, (date, _))| thinned_label(date, i, 2))
        .collect();

    ChartData {
        labels,
        datasets: vec![Dataset {
            kind: SeriesKind::Price,
            values: joined.iter().map(|(_, v)| *v).collect(),
        }],
    }
}

/// Every how many points a label is shown: more visible data, fewer labels
fn label_interval(visible: usize) -> usize {
    (visible / 5).max(1)
}

fn thinned_label(date: &str, index: usize, interval: usize) -> String {
    if index % interval == 0 {
        month_day_label(date)
    } else {
        String::new()
    }
}

/// Compact `M/D` form of a bar date; unparsable dates fall back to the raw
/// string rather than dropping the label
fn month_day_label(date: &str) -> String {
    let head = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(d) => format!("{}/{}", d.month(), d.day()),
        Err(_) => date.to_string(),
    }
}

fn last_n(bars: &[PriceBar], n: usize) -> &[PriceBar] {
    &bars[bars.len().saturating_sub(n)..]
}

/// Repeat the first value until `series` spans `target_len` points
fn left_pad(series: &[f64], target_len: usize) -> Vec<f64> {
    let Some(&first) = series.first() else {
        return Vec::new();
    };

    let mut padded = vec![first; target_len.saturating_sub(series.len())];
    padded.extend_from_slice(series);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(closes: &[f64]) -> Vec<PriceBar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                date: format!("2024-03-{:02}", i + 1),
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1_000,
            })
            .collect()
    }

    #[test]
    fn test_range_visible_points_mapping() {
        let expected = [
            (DateRange::OneWeek, 7),
            (DateRange::OneMonth, 15),
            (DateRange::ThreeMonths, 30),
            (DateRange::SixMonths, 45),
            (DateRange::OneYear, 60),
            (DateRange::FiveYears, 100),
            (DateRange::TenYears, 150),
            (DateRange::Max, 200),
        ];
        for (range, points) in expected {
            assert_eq!(range.visible_points(), points);
            assert_eq!(range.as_str().parse::<DateRange>().unwrap(), range);
        }
    }

    #[test]
    fn test_no_overlays_below_minimum_points() {
        let bars = bars(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let chart = chart_data(&bars, DateRange::OneWeek, true, true);

        assert_eq!(chart.len(), 7);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].kind, SeriesKind::Price);
    }

    #[test]
    fn test_overlays_toggle_independently() {
        let closes: Vec<f64> = (1..=15).map(f64::from).collect();
        let bars = bars(&closes);

        let chart = chart_data(&bars, DateRange::OneMonth, true, false);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[1].kind, SeriesKind::Sma);

        let chart = chart_data(&bars, DateRange::OneMonth, false, true);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[1].kind, SeriesKind::Ema);
    }

    #[test]
    fn test_sma_left_padding_preserves_alignment() {
        let closes: Vec<f64> = (1..=15).map(f64::from).collect();
        let bars = bars(&closes);
        let chart = chart_data(&bars, DateRange::OneMonth, true, false);

        let sma = &chart.datasets[1].values;
        assert_eq!(sma.len(), 15);
        // First computed mean of 1..=10 is 5.5, repeated over the pad
        for value in &sma[..9] {
            assert!((value - 5.5).abs() < 1e-9);
        }
        assert!((sma[9] - 5.5).abs() < 1e-9);
        assert!((sma[14] - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_visible_window_is_last_n_bars() {
        let closes: Vec<f64> = (1..=40).map(f64::from).collect();
        let bars = bars(&closes);
        let chart = chart_data(&bars, DateRange::OneMonth, false, false);

        assert_eq!(chart.len(), 15);
        assert_eq!(chart.datasets[0].values[0], 26.0);
        assert_eq!(*chart.datasets[0].values.last().unwrap(), 40.0);
    }

    #[test]
    fn test_label_thinning() {
        let closes: Vec<f64> = (1..=15).map(f64::from).collect();
        let bars = bars(&closes);
        let chart = chart_data(&bars, DateRange::OneMonth, false, false);

        // 15 points -> every 3rd label
        assert_eq!(chart.labels[0], "3/1");
        assert_eq!(chart.labels[1], "");
        assert_eq!(chart.labels[2], "");
        assert_eq!(chart.labels[3], "3/4");
    }

    #[test]
    fn test_label_fallback_for_unparsable_date() {
        assert_eq!(month_day_label("2024-03-05"), "3/5");
        assert_eq!(month_day_label("2024-03-05T00:00:00"), "3/5");
        assert_eq!(month_day_label("whenever"), "whenever");
    }

    #[test]
    fn test_forecast_chart_joins_history_and_predictions() {
        let closes: Vec<f64> = (1..=20).map(f64::from).collect();
        let bars = bars(&closes);
        let predictions: Vec<ForecastPoint> = (1..=8)
            .map(|i| ForecastPoint {
                date: format!("2024-04-{i:02}"),
                price: 100.0 + f64::from(i),
            })
            .collect();

        let chart = forecast_chart_data(&bars, &predictions);
        assert_eq!(chart.len(), 15);
        assert_eq!(chart.datasets[0].values[0], 11.0);
        assert_eq!(*chart.datasets[0].values.last().unwrap(), 105.0);
        // Every 2nd label
        assert!(!chart.labels[0].is_empty());
        assert!(chart.labels[1].is_empty());
    }

    #[test]
    fn test_empty_series_produces_empty_chart() {
        let chart = chart_data(&[], DateRange::OneMonth, true, true);
        assert!(chart.is_empty());
        assert_eq!(chart.datasets.len(), 1);
        assert!(chart.datasets[0].values.is_empty());
    }
}
