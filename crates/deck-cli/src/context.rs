//! Application context: API client, history store, quote cache

use anyhow::{Context as _, Result};
use deck_api::{ApiClient, ApiConfig, QuoteCache};
use deck_store::{FileStorage, HistoryStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a screen needs to run
pub struct App {
    pub api: ApiClient,
    pub store: HistoryStore,
    pub quotes: QuoteCache,
}

impl App {
    /// Build the context from the environment: `STOCKDECK_API_URL` for the
    /// backend, `STOCKDECK_DATA_DIR` for local state (default `~/.stockdeck`)
    pub fn from_env() -> Result<Self> {
        let config = ApiConfig::from_env()?;
        let quotes = QuoteCache::new(config.quote_cache_ttl);
        let api = ApiClient::new(config)?;
        let store = HistoryStore::new(Arc::new(FileStorage::new(data_dir()?)));

        Ok(Self { api, store, quotes })
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("STOCKDECK_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let home = std::env::var_os("HOME")
        .context("HOME is not set; set STOCKDECK_DATA_DIR to choose a data directory")?;
    Ok(PathBuf::from(home).join(".stockdeck"))
}
