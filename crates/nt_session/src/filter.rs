use nt_core::Article;

/// Category value that disables source filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Sources offered by the category selector: (filter value, label).
pub const KNOWN_CATEGORIES: &[(&str, &str)] = &[
    ("bbc news", "BBC News"),
    ("espn", "ESPN"),
    ("the hindu", "The Hindu"),
    ("al jazeera english", "Al Jazeera"),
];

/// Search term and category selected by the user. Session scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        matches(article, &self.search_term.to_lowercase(), &self.category.to_lowercase())
    }

    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        filtered_view(articles, &self.search_term, &self.category)
    }
}

/// Articles whose title contains `search_term` and whose source name equals
/// `category`, both compared after lowercasing, in collection order.
///
/// An empty term matches every title; `"all"` matches every source,
/// including a missing one.
pub fn filtered_view<'a>(
    articles: &'a [Article],
    search_term: &str,
    category: &str,
) -> Vec<&'a Article> {
    let term = search_term.to_lowercase();
    let category = category.to_lowercase();
    articles
        .iter()
        .filter(|article| matches(article, &term, &category))
        .collect()
}

fn matches(article: &Article, term: &str, category: &str) -> bool {
    if !article.title.to_lowercase().contains(term) {
        return false;
    }
    category == ALL_CATEGORIES
        || article
            .source
            .as_ref()
            .is_some_and(|source| source.name.to_lowercase() == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Article> {
        vec![
            Article::new("http://1", "Cats").with_source("BBC News"),
            Article::new("http://2", "Dogs").with_source("ESPN"),
        ]
    }

    fn urls(view: Vec<&Article>) -> Vec<&str> {
        view.into_iter().map(|a| a.url.as_str()).collect()
    }

    #[test]
    fn test_search_and_category() {
        let articles = sample();
        assert_eq!(urls(filtered_view(&articles, "cat", "all")), vec!["http://1"]);
        assert_eq!(urls(filtered_view(&articles, "", "espn")), vec!["http://2"]);
        assert!(filtered_view(&articles, "xyz", "all").is_empty());
        assert_eq!(
            urls(filtered_view(&articles, "", "all")),
            vec!["http://1", "http://2"]
        );
    }

    #[test]
    fn test_case_insensitive() {
        let articles = sample();
        assert_eq!(
            filtered_view(&articles, "CAT", "all"),
            filtered_view(&articles, "cat", "all")
        );
        assert_eq!(urls(filtered_view(&articles, "dogs", "ESPN")), vec!["http://2"]);
    }

    #[test]
    fn test_substring_not_fuzzy() {
        let articles = sample();
        assert!(filtered_view(&articles, "cts", "all").is_empty());
        assert!(filtered_view(&articles, "", "bbc").is_empty());
    }

    #[test]
    fn test_missing_source_only_matches_all() {
        let articles = vec![Article::new("http://3", "Orphan")];
        assert_eq!(filtered_view(&articles, "", "all").len(), 1);
        assert!(filtered_view(&articles, "", "unknown source").is_empty());
        assert!(filtered_view(&articles, "", "espn").is_empty());
    }

    #[test]
    fn test_deterministic_order() {
        let mut articles = sample();
        articles.push(Article::new("http://4", "More cats").with_source("BBC News"));
        let first = urls(filtered_view(&articles, "cats", "bbc news"));
        let second = urls(filtered_view(&articles, "cats", "bbc news"));
        assert_eq!(first, vec!["http://1", "http://4"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_state() {
        let articles = sample();
        let state = FilterState::default();
        assert_eq!(state.apply(&articles).len(), 2);
        assert!(FilterState::new("DOG", "Espn").matches(&articles[1]));
        assert!(!FilterState::new("dog", "bbc news").matches(&articles[1]));
    }
}
