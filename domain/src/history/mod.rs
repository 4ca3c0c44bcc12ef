//! Bounded per-session history of generated images.

mod cache;

pub use cache::{HISTORY_CAPACITY, HistoryCache, HistoryEntry};
