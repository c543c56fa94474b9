// Shared fixtures for the session integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nt_core::{Article, ArticleFetcher, Language};
use tokio::sync::Notify;

/// Two well-formed articles per language plus one without a url.
pub fn articles_for(language: Language) -> Vec<Article> {
    let code = language.code();
    vec![
        Article::new(format!("http://{}/cats", code), format!("Cats ({})", code))
            .with_source("BBC News"),
        Article::new(format!("http://{}/dogs", code), "Dogs").with_source("ESPN"),
        Article::new("", "Broken record"),
    ]
}

pub fn trending_articles() -> Vec<Article> {
    vec![Article::new("http://trending/1", "Trending story").with_source("The Hindu")]
}

/// Records every call and answers immediately.
#[derive(Default)]
pub struct MockFetcher {
    calls: Mutex<Vec<Language>>,
    trending_calls: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<Language> {
        self.calls.lock().unwrap().clone()
    }

    pub fn trending_calls(&self) -> usize {
        self.trending_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleFetcher for MockFetcher {
    async fn fetch_articles(&self, language: Language) -> Vec<Article> {
        self.calls.lock().unwrap().push(language);
        articles_for(language)
    }

    async fn fetch_trending(&self) -> Vec<Article> {
        self.trending_calls.fetch_add(1, Ordering::SeqCst);
        trending_articles()
    }
}

/// English fetches block until `release` is called; others answer at once.
#[derive(Default)]
pub struct GatedFetcher {
    gate: Notify,
}

impl GatedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl ArticleFetcher for GatedFetcher {
    async fn fetch_articles(&self, language: Language) -> Vec<Article> {
        if language == Language::En {
            self.gate.notified().await;
        }
        articles_for(language)
    }

    async fn fetch_trending(&self) -> Vec<Article> {
        Vec::new()
    }
}
