use nt_core::{Article, Language};
use nt_storage::Preferences;

pub const NO_NEWS: &str = "📭 No news found. Try different filters or search!";
pub const NO_TRENDING: &str = "No trending news available.";
pub const NO_BOOKMARKS: &str =
    "No Bookmarks Saved\nGo to the news section and save articles to your list to read later.";

pub fn article_card(article: &Article, bookmarked: bool) -> String {
    let mut lines = Vec::new();
    let badge = if bookmarked { "🔖 " } else { "" };
    lines.push(format!("{}{}", badge, article.title));
    if !article.summary.is_empty() {
        lines.push(format!("   {}", article.summary));
    }
    if let Some(sentiment) = article.sentiment {
        lines.push(format!("   [{} Sentiment]", sentiment));
    }
    let date = article.display_date();
    if date.is_empty() {
        lines.push(format!("   {}", article.source_name()));
    } else {
        lines.push(format!("   {} • {}", article.source_name(), date));
    }
    lines.push(format!("   {}", article.url));
    lines.join("\n")
}

/// Cards separated by blank lines, or `empty` when there is nothing to show.
pub fn article_list<'a>(
    articles: impl IntoIterator<Item = &'a Article>,
    is_bookmarked: impl Fn(&str) -> bool,
    empty: &str,
) -> String {
    let cards: Vec<String> = articles
        .into_iter()
        .map(|article| article_card(article, is_bookmarked(&article.url)))
        .collect();
    if cards.is_empty() {
        empty.to_string()
    } else {
        cards.join("\n\n")
    }
}

pub fn preferences(prefs: &Preferences) -> String {
    let languages: Vec<String> = Language::ALL
        .iter()
        .map(|lang| {
            let marker = if *lang == prefs.language { "*" } else { " " };
            format!("  {} {} ({})", marker, lang.code(), lang.display_name())
        })
        .collect();
    format!(
        "Theme: {}\nLanguage:\n{}",
        if prefs.dark_mode { "dark" } else { "light" },
        languages.join("\n")
    )
}
