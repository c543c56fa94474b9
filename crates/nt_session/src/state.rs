use std::sync::Arc;

use nt_core::{Article, ArticleFetcher, Error, KeyValueStore, Language, Result};
use nt_storage::{BookmarkStore, PreferenceStore, Preferences};

use crate::collection::{ArticleCollection, FetchStatus, Generation};
use crate::filter::FilterState;

/// A fetch that has been issued but not yet run. It owns everything it needs
/// so it can be moved onto another task and its outcome sent back.
pub struct PendingFetch {
    generation: Generation,
    language: Language,
    fetcher: Arc<dyn ArticleFetcher>,
}

impl PendingFetch {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub async fn resolve(self) -> FetchOutcome {
        let articles = self.fetcher.fetch_articles(self.language).await;
        FetchOutcome {
            generation: self.generation,
            language: self.language,
            articles,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: Generation,
    pub language: Language,
    pub articles: Vec<Article>,
}

/// Application context: the article collection, the filter, the bookmark
/// store and the persisted preferences, wired to their collaborators.
pub struct Session {
    fetcher: Arc<dyn ArticleFetcher>,
    bookmarks: BookmarkStore,
    preference_store: PreferenceStore,
    preferences: Preferences,
    collection: ArticleCollection,
    filter: FilterState,
    trending: Vec<Article>,
}

impl Session {
    /// Load preferences from `store`. Nothing is fetched until [`Session::mount`].
    pub fn new(fetcher: Arc<dyn ArticleFetcher>, store: Arc<dyn KeyValueStore>) -> Self {
        let preference_store = PreferenceStore::new(store.clone());
        let preferences = preference_store.load();
        tracing::debug!(
            language = %preferences.language,
            dark_mode = preferences.dark_mode,
            "Session opened"
        );
        Self {
            fetcher,
            bookmarks: BookmarkStore::new(store),
            preference_store,
            preferences,
            collection: ArticleCollection::new(),
            filter: FilterState::default(),
            trending: Vec::new(),
        }
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn language(&self) -> Language {
        self.preferences.language
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode
    }

    pub fn status(&self) -> FetchStatus {
        self.collection.status()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn articles(&self) -> &[Article] {
        self.collection.articles()
    }

    /// Initial population of the collection.
    pub async fn mount(&mut self) -> usize {
        self.refresh().await
    }

    /// Issue a fetch for the current language, superseding any in flight.
    pub fn start_fetch(&mut self) -> PendingFetch {
        let generation = self.collection.begin_fetch();
        tracing::debug!(
            generation = generation.value(),
            language = %self.preferences.language,
            "Fetch issued"
        );
        PendingFetch {
            generation,
            language: self.preferences.language,
            fetcher: self.fetcher.clone(),
        }
    }

    /// Install a fetch outcome if it belongs to the latest fetch issued.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        let applied = self
            .collection
            .complete_fetch(outcome.generation, outcome.articles);
        if applied {
            tracing::info!(
                language = %outcome.language,
                articles = self.collection.len(),
                "Collection updated"
            );
        }
        applied
    }

    /// Fetch for the current language and install the result.
    pub async fn refresh(&mut self) -> usize {
        let pending = self.start_fetch();
        let outcome = pending.resolve().await;
        self.apply(outcome);
        self.collection.len()
    }

    /// Replace the collection directly, e.g. from a cached list.
    pub fn set_collection(&mut self, articles: Vec<Article>) -> usize {
        self.collection.set_collection(articles)
    }

    /// Switch language and refetch. Selecting the current language does
    /// nothing. Returns whether a fetch ran.
    pub async fn set_language(&mut self, language: Language) -> Result<bool> {
        if language == self.preferences.language {
            return Ok(false);
        }
        self.preference_store.save_language(language)?;
        self.preferences.language = language;
        tracing::info!("🌍 Language set to {} ({})", language, language.display_name());
        self.refresh().await;
        Ok(true)
    }

    /// Flip the theme flag once it has been persisted; returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let dark_mode = !self.preferences.dark_mode;
        self.preference_store.save_dark_mode(dark_mode)?;
        self.preferences.dark_mode = dark_mode;
        Ok(dark_mode)
    }

    pub fn set_search_term(&mut self, search_term: impl Into<String>) {
        self.filter.search_term = search_term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
    }

    pub fn filtered_articles(&self) -> Vec<&Article> {
        self.collection.filtered(&self.filter)
    }

    pub fn is_bookmarked(&self, url: &str) -> bool {
        self.bookmarks.contains(url)
    }

    pub fn bookmarks(&self) -> Vec<Article> {
        self.bookmarks.list()
    }

    pub fn bookmark_store(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    /// Save or unsave the article with `url` and return the new bookmarked
    /// state. The state only changes once the write has been persisted.
    pub fn toggle_bookmark(&self, url: &str) -> Result<bool> {
        if self.bookmarks.contains(url) {
            self.bookmarks.remove(url)?;
            return Ok(false);
        }
        let article = self
            .collection
            .find(url)
            .or_else(|| self.trending.iter().find(|a| a.url == url))
            .ok_or_else(|| Error::NotFound(url.to_string()))?;
        self.bookmarks.add(article)?;
        Ok(true)
    }

    /// Trending articles. They are kept for bookmark lookups but never enter
    /// the collection.
    pub async fn trending(&mut self) -> &[Article] {
        let articles = self.fetcher.fetch_trending().await;
        self.trending = articles
            .into_iter()
            .filter(|article| article.validate().is_ok())
            .collect();
        &self.trending
    }
}
