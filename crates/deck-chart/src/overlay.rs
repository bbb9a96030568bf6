//! Moving-average overlay math
//!
//! Pure transforms of a closing-price sequence into overlay series. Output
//! shapes are load-bearing for chart alignment and must not change: SMA
//! produces `N - W + 1` values (the caller pads for display), EMA produces a
//! full-length series seeded with the first observed price.

/// Arithmetic mean over each full window of `window` consecutive prices.
///
/// Returns `prices.len() - window + 1` values; empty when the input is
/// shorter than the window (or the window is zero).
pub fn simple_moving_average(prices: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || prices.len() < window {
        return Vec::new();
    }

    prices
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Exponentially weighted average with smoothing `k = 2 / (window + 1)`.
///
/// Returns one value per input price. The series is seeded with the first
/// price; an SMA seed would shift every subsequent value and break overlay
/// compatibility.
pub fn exponential_moving_average(prices: &[f64], window: usize) -> Vec<f64> {
    let Some(&first) = prices.first() else {
        return Vec::new();
    };

    let k = 2.0 / (window as f64 + 1.0);
    let mut ema = Vec::with_capacity(prices.len());
    ema.push(first);

    for &price in &prices[1..] {
        let prev = ema[ema.len() - 1];
        ema.push(price * k + prev * (1.0 - k));
    }

    ema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{a} != {e}");
        }
    }

    #[test]
    fn test_sma_means_of_consecutive_triples() {
        let sma = simple_moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_close(&sma, &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_sma_window_equal_to_length() {
        let sma = simple_moving_average(&[2.0, 4.0], 2);
        assert_close(&sma, &[3.0]);
    }

    #[test]
    fn test_sma_short_input_is_empty() {
        assert!(simple_moving_average(&[1.0, 2.0], 3).is_empty());
        assert!(simple_moving_average(&[], 3).is_empty());
        assert!(simple_moving_average(&[1.0], 0).is_empty());
    }

    #[test]
    fn test_ema_first_price_seed() {
        // k = 2/3: [10, 20*2/3 + 10/3, 30*2/3 + 16.667/3]
        let ema = exponential_moving_average(&[10.0, 20.0, 30.0], 2);
        assert_close(&ema, &[10.0, 16.667, 25.556]);
    }

    #[test]
    fn test_ema_full_length_output() {
        let prices = [5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let ema = exponential_moving_average(&prices, 10);
        assert_eq!(ema.len(), prices.len());
        assert_eq!(ema[0], prices[0]);
    }

    #[test]
    fn test_ema_empty_input() {
        assert!(exponential_moving_average(&[], 10).is_empty());
    }

    #[test]
    fn test_ema_constant_series_is_constant() {
        let ema = exponential_moving_average(&[42.0; 8], 3);
        assert!(ema.iter().all(|&v| (v - 42.0).abs() < 1e-12));
    }
}
