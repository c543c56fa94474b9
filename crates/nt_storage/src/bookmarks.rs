use std::sync::Arc;

use nt_core::{Article, KeyValueStore, Result};
use serde_json::Value;

pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Saved articles, persisted as one JSON array under [`BOOKMARKS_KEY`].
///
/// The store keeps no copy of its own: every call re-reads the persisted
/// list, and every mutation writes the full updated list back before
/// returning. No two entries share a url.
#[derive(Clone)]
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
}

impl BookmarkStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Bookmarks in insertion order. Absent, unreadable or corrupt state
    /// reads as an empty list.
    pub fn list(&self) -> Vec<Article> {
        let raw = match self.store.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "[Bookmarks] Failed to read bookmarks, using none");
                return Vec::new();
            }
        };
        let entries = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                tracing::warn!("[Bookmarks] Persisted bookmarks are not a list, using none");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "[Bookmarks] Persisted bookmarks are corrupt, using none");
                return Vec::new();
            }
        };
        // One undecodable entry must not cost the others.
        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Article>(entry) {
                Ok(article) => Some(article),
                Err(e) => {
                    tracing::warn!(error = %e, "[Bookmarks] Skipping undecodable bookmark");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.list().iter().any(|b| b.url == url)
    }

    /// Append `article` unless its url is already saved. Returns whether the
    /// list changed; a duplicate is a silent no-op.
    pub fn add(&self, article: &Article) -> Result<bool> {
        article.validate()?;
        let mut bookmarks = self.list();
        if bookmarks.iter().any(|b| b.url == article.url) {
            tracing::debug!(url = %article.url, "[Bookmarks] Already bookmarked");
            return Ok(false);
        }
        bookmarks.push(article.clone());
        self.persist(&bookmarks)?;
        tracing::info!(url = %article.url, total = bookmarks.len(), "[Bookmarks] Added");
        Ok(true)
    }

    /// Drop the entry with `url`, if any, and persist the result. Returns
    /// whether an entry was removed.
    pub fn remove(&self, url: &str) -> Result<bool> {
        let mut bookmarks = self.list();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.url != url);
        self.persist(&bookmarks)?;
        let removed = bookmarks.len() != before;
        if removed {
            tracing::info!(url, total = bookmarks.len(), "[Bookmarks] Removed");
        }
        Ok(removed)
    }

    fn persist(&self, bookmarks: &[Article]) -> Result<()> {
        let json = serde_json::to_string(bookmarks)?;
        self.store.set(BOOKMARKS_KEY, &json).map_err(|e| {
            tracing::warn!(error = %e, "[Bookmarks] Failed to persist bookmarks");
            e
        })
    }
}
