//! Command-line surface
//!
//! Each screen of the app is a subcommand with statically typed arguments;
//! period, forecast-method, and date-range selectors parse into their closed
//! enum sets rather than travelling as free-form strings.

use clap::{Parser, Subcommand};
use deck_api::{ForecastMethod, Period};
use deck_chart::DateRange;

#[derive(Parser, Debug)]
#[command(name = "stockdeck")]
#[command(about = "Terminal client for the Stock Analysis backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recently viewed stocks with current quotes
    Recent,

    /// Remove a stock from the recent list
    Remove {
        /// Ticker symbol to remove
        ticker: String,
    },

    /// Search stocks by ticker symbol or company name
    Search {
        /// Search query
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show recent searches
    History {
        /// Clear the search history instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Stock overview: quote, price chart, key metrics, news
    View {
        /// Ticker symbol (e.g. AAPL)
        ticker: String,

        /// Historical span to fetch
        #[arg(long, default_value = "1y")]
        period: Period,

        /// Chart date range (1W, 1M, 3M, 6M, 1Y, 5Y, 10Y, MAX)
        #[arg(long, default_value = "1M")]
        range: DateRange,

        /// Overlay a 10-point simple moving average
        #[arg(long)]
        sma: bool,

        /// Overlay a 10-point exponential moving average
        #[arg(long)]
        ema: bool,
    },

    /// Generate a server-side forecast
    Forecast {
        /// Ticker symbol
        ticker: String,

        /// Forecasting method (linear, polynomial, arima)
        #[arg(long, default_value = "linear")]
        method: ForecastMethod,

        /// Historical span the model trains on
        #[arg(long, default_value = "1y")]
        period: Period,
    },

    /// News articles with sentiment for a ticker
    News {
        /// Ticker symbol
        ticker: String,

        /// Historical span to cover
        #[arg(long, default_value = "1y")]
        period: Period,
    },

    /// AI direction prediction for a ticker
    Predict {
        /// Ticker symbol
        ticker: String,
    },

    /// AI backtest: how well the prediction model has done historically
    Backtest {
        /// Ticker symbol
        ticker: String,
    },
}
