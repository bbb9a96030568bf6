//! Local persistence for user interaction history
//!
//! Tracks recently viewed stocks and recent search queries in durable local
//! storage so they survive restarts. Lists are most-recent-first, capped
//! (20 stocks / 10 queries), de-duplicated by move-to-front, and persisted on
//! every mutation. Reads never fail the caller: a missing or unreadable blob
//! renders as an empty list.
//!
//! The storage substrate is pluggable via the [`Storage`] trait; the shipped
//! backends are [`FileStorage`] (one JSON file per key) and [`MemoryStorage`].

pub mod error;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use error::{Result, StoreError};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{
    HistoryStore, RecentStock, MAX_RECENT_STOCKS, MAX_SEARCH_HISTORY, RECENT_STOCKS_KEY,
    SEARCH_HISTORY_KEY,
};
