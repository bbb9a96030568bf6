//! stockdeck - terminal client for the Stock Analysis backend
//!
//! # Usage
//!
//! ```bash
//! # Point at the backend (default: http://127.0.0.1:8000)
//! export STOCKDECK_API_URL="http://192.168.1.111:8000"
//!
//! stockdeck search apple
//! stockdeck view AAPL --range 3M --sma --ema
//! stockdeck recent
//! stockdeck predict AAPL
//! ```

mod cli;
mod context;
mod render;
mod screens;

use clap::Parser;
use cli::{Cli, Command};
use context::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deck_utils::init_tracing();

    let cli = Cli::parse();
    let app = App::from_env()?;

    match cli.command {
        Command::Recent => screens::home::run(&app).await,
        Command::Remove { ticker } => screens::home::remove(&app, &ticker).await,
        Command::Search { query } => screens::search::run(&app, &query.join(" ")).await,
        Command::History { clear } => screens::search::history(&app, clear).await,
        Command::View {
            ticker,
            period,
            range,
            sma,
            ema,
        } => screens::detail::view(&app, &ticker, period, range, sma, ema).await,
        Command::Forecast {
            ticker,
            method,
            period,
        } => screens::detail::forecast(&app, &ticker, method, period).await,
        Command::News { ticker, period } => screens::detail::news(&app, &ticker, period).await,
        Command::Predict { ticker } => screens::detail::predict(&app, &ticker).await,
        Command::Backtest { ticker } => screens::detail::backtest(&app, &ticker).await,
    }
}
