//! Stock detail screens: overview, forecast, news, AI prediction/backtest

use crate::context::App;
use crate::render::{format_table, heading};
use anyhow::{anyhow, Result};
use deck_api::{ForecastMethod, LlmBacktest, LlmPrediction, NewsArticle, Period, StockData};
use deck_chart::{chart_data, forecast_chart_data, key_metrics, ChartData, DateRange};
use deck_utils::{format_change, format_number, format_price, format_time_ago, format_volume};

/// Overview: quote card, price chart with optional overlays, key metrics,
/// and the latest news.
///
/// Stock data and news load concurrently and are joined before anything
/// renders; the news leg degrades to an empty list on failure, so only a
/// stock-data failure aborts the screen.
pub async fn view(
    app: &App,
    ticker: &str,
    period: Period,
    range: DateRange,
    show_sma: bool,
    show_ema: bool,
) -> Result<()> {
    let news_leg = async {
        match app.api.news(ticker, period).await {
            Ok(articles) => Ok(articles),
            Err(e) => {
                tracing::warn!(ticker, error = %e, "news fetch failed, continuing without articles");
                Ok(Vec::new())
            }
        }
    };

    let (stock, news) = tokio::try_join!(app.api.stock_data(ticker, period), news_leg)
        .map_err(|e| anyhow!("Failed to load stock data: {e}"))?;

    // A successful view is the selection moment; refresh the recent list
    if let Err(e) = app.store.record_stock_view(&stock.ticker, &stock.name).await {
        tracing::warn!(ticker = %stock.ticker, error = %e, "failed to record stock view");
    }

    print_quote_card(&stock);

    println!("\n{}", heading(&format!("Price Chart ({range})")));
    let chart = chart_data(&stock.data, range, show_sma, show_ema);
    if chart.is_empty() {
        println!("No price history available");
    } else {
        print_chart(&chart);
    }

    if let Some(metrics) = key_metrics(&stock.data) {
        println!("{}", heading("Key Metrics"));
        println!("52W High    {}", format_price(metrics.high, &stock.currency));
        println!("52W Low     {}", format_price(metrics.low, &stock.currency));
        println!("Avg Volume  {}", format_volume(metrics.avg_volume));
        println!();
    }

    println!("{}", heading("News"));
    print_news(&news);

    Ok(())
}

/// Forecast tab: server-side prediction series with quality chips
pub async fn forecast(
    app: &App,
    ticker: &str,
    method: ForecastMethod,
    period: Period,
) -> Result<()> {
    let stock = app
        .api
        .stock_data(ticker, period)
        .await
        .map_err(|e| anyhow!("Failed to load stock data: {e}"))?;
    let forecast = app
        .api
        .forecast(ticker, method, period)
        .await
        .map_err(|e| anyhow!("Failed to load forecast: {e}"))?;

    println!("{}", heading(&format!("{} Forecast for {}", title_case(&forecast.method), stock.ticker)));
    let chart = forecast_chart_data(&stock.data, &forecast.predictions);
    print_chart(&chart);

    if let Some(accuracy) = forecast.accuracy {
        print!("Accuracy: {}  ", percent(accuracy));
        if let Some(confidence) = forecast.confidence {
            print!("Confidence: {}", percent(confidence));
        }
        println!();
    }

    Ok(())
}

/// News tab
pub async fn news(app: &App, ticker: &str, period: Period) -> Result<()> {
    let articles = match app.api.news(ticker, period).await {
        Ok(articles) => articles,
        Err(e) => {
            tracing::warn!(ticker, error = %e, "news fetch failed");
            Vec::new()
        }
    };

    println!("{}", heading(&format!("News for {}", ticker.to_uppercase())));
    print_news(&articles);
    Ok(())
}

/// AI tab: direction prediction
pub async fn predict(app: &App, ticker: &str) -> Result<()> {
    let prediction = app
        .api
        .llm_predict(ticker)
        .await
        .map_err(|e| anyhow!("Failed to get AI prediction: {e}"))?;

    print_prediction(&prediction);
    Ok(())
}

/// AI tab: retrospective backtest
pub async fn backtest(app: &App, ticker: &str) -> Result<()> {
    let backtest = app
        .api
        .llm_backtest(ticker)
        .await
        .map_err(|e| anyhow!("Failed to run backtest: {e}"))?;

    print_backtest(&backtest);
    Ok(())
}

fn print_quote_card(stock: &StockData) {
    println!("{}  {}", stock.ticker, stock.name);
    println!(
        "{}  {}  [{}]",
        format_price(stock.current_price, &stock.currency),
        format_change(stock.change, stock.change_percent),
        stock.market_state,
    );
}

fn print_chart(chart: &ChartData) {
    let headers: Vec<&str> = std::iter::once("Date")
        .chain(chart.datasets.iter().map(|d| d.kind.label()))
        .collect();

    let rows: Vec<Vec<String>> = (0..chart.len())
        .map(|i| {
            std::iter::once(chart.labels[i].clone())
                .chain(chart.datasets.iter().map(|d| format_number(d.values[i], 2)))
                .collect()
        })
        .collect();

    print!("{}", format_table(&headers, &rows));
    println!();
}

fn print_news(articles: &[NewsArticle]) {
    if articles.is_empty() {
        println!("No news available");
        return;
    }

    for article in articles {
        println!(
            "[{}] {}",
            sentiment_label(article.sentiment),
            article.title
        );
        println!("    {}", article.description);
        println!(
            "    {} - {}",
            article.source,
            format_time_ago(&article.published_at)
        );
        println!();
    }
}

fn print_prediction(prediction: &LlmPrediction) {
    println!("{}", heading("AI Prediction"));
    println!(
        "{}  ({} confidence)",
        prediction.prediction.to_string().to_uppercase(),
        percent(prediction.confidence),
    );
    println!(
        "Current price: {}",
        format_price(prediction.current_price, &prediction.currency)
    );

    println!("\nTechnical Indicators");
    for (label, value) in prediction.technical_indicators.entries() {
        let shown = value.map_or_else(|| "N/A".to_string(), |v| format_number(v, 2));
        println!("  {label:<16} {shown}");
    }

    let summary = &prediction.analysis_summary;
    for (title, text) in [
        ("Trend", &summary.trend_analysis),
        ("Momentum", &summary.momentum_analysis),
        ("Volume", &summary.volume_analysis),
        ("News", &summary.news_analysis),
        ("Market Context", &summary.market_context),
    ] {
        println!("\n{title}: {text}");
    }
    println!();
}

fn print_backtest(backtest: &LlmBacktest) {
    println!("{}", heading(&format!("Backtest Results for {}", backtest.ticker)));
    println!(
        "Period: {}  ({} to {})",
        backtest.period, backtest.backtest_date_range.start, backtest.backtest_date_range.end
    );

    println!("\nPerformance");
    println!("  Accuracy   {}", percent(backtest.accuracy));
    println!("  Precision  {}", percent(backtest.precision));
    println!("  Recall     {}", percent(backtest.recall));
    println!("  F1 Score   {}", percent(backtest.f1_score));

    println!("\nPrediction Statistics");
    println!("  Total predictions    {}", backtest.total_predictions);
    println!("  Correct predictions  {}", backtest.correct_predictions);
    println!("  Average confidence   {}", percent(backtest.average_confidence));

    println!("\nPrediction Distribution");
    println!("  Up       {}", backtest.prediction_distribution.up);
    println!("  Neutral  {}", backtest.prediction_distribution.neutral);
    println!("  Down     {}", backtest.prediction_distribution.down);

    if !backtest.confusion_matrix.is_empty() {
        println!("\nConfusion Matrix (rows: actual, columns: predicted)");
        let headers: Vec<&str> = std::iter::once("")
            .chain(backtest.class_labels.iter().map(String::as_str))
            .collect();
        let rows: Vec<Vec<String>> = backtest
            .confusion_matrix
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let label = backtest
                    .class_labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| i.to_string());
                std::iter::once(label)
                    .chain(row.iter().map(ToString::to_string))
                    .collect()
            })
            .collect();
        print!("{}", format_table(&headers, &rows));
    }

    if !backtest.optimization_tips.is_empty() {
        println!("\nOptimization Tips");
        for tip in &backtest.optimization_tips {
            println!("  - {tip}");
        }
    }
    println!();
}

/// Sentiment bucket for a scored article; unscored articles read as neutral
fn sentiment_label(sentiment: Option<f64>) -> &'static str {
    match sentiment {
        Some(score) if score > 0.1 => "Positive",
        Some(score) if score < -0.1 => "Negative",
        _ => "Neutral",
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
