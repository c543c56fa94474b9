use nt_core::Article;

use crate::filter::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
}

/// Tag carried by each fetch request; only the latest one issued may
/// replace the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The currently fetched articles plus the bookkeeping for in-flight fetches.
#[derive(Debug, Default)]
pub struct ArticleCollection {
    articles: Vec<Article>,
    status: FetchStatus,
    latest: u64,
}

impl ArticleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn find(&self, url: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.url == url)
    }

    /// Replace the working set. Records without a usable url are dropped;
    /// returns how many were kept.
    pub fn set_collection(&mut self, articles: Vec<Article>) -> usize {
        let total = articles.len();
        self.articles = articles
            .into_iter()
            .filter(|article| match article.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Rejecting article: {}", e);
                    false
                }
            })
            .collect();
        if self.articles.len() != total {
            tracing::info!(
                kept = self.articles.len(),
                rejected = total - self.articles.len(),
                "Collection replaced"
            );
        }
        self.articles.len()
    }

    /// Issue the next generation and enter `Loading`.
    pub fn begin_fetch(&mut self) -> Generation {
        self.latest += 1;
        self.status = FetchStatus::Loading;
        Generation(self.latest)
    }

    pub fn is_latest(&self, generation: Generation) -> bool {
        generation.0 == self.latest
    }

    /// Install the result of the fetch tagged `generation`. Results of
    /// superseded fetches are discarded and leave the status untouched.
    pub fn complete_fetch(&mut self, generation: Generation, articles: Vec<Article>) -> bool {
        if !self.is_latest(generation) {
            tracing::debug!(
                stale = generation.0,
                latest = self.latest,
                "Discarding superseded fetch"
            );
            return false;
        }
        self.set_collection(articles);
        self.status = FetchStatus::Idle;
        true
    }

    pub fn filtered(&self, filter: &FilterState) -> Vec<&Article> {
        filter.apply(&self.articles)
    }
}
