use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use nt_client::config::DEFAULT_BASE_URL;
use nt_client::{init_logging, ClientConfig, SummarizerClient};
use nt_core::{ArticleFetcher, Error, Language, Result};
use nt_session::{Session, ALL_CATEGORIES, KNOWN_CATEGORIES};
use nt_storage::DEFAULT_STATE_FILE;
use tracing::info;

mod render;

const TOO_LARGE: &str = "Duration is too large";

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    /// Accepts `90`, `45s`, `2m`, `1h15m30s`. A bare number is seconds.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut seen_number = false;

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
                continue;
            }
            let num: u64 = current_number
                .parse()
                .map_err(|_| format!("Expected a number before '{}'", c))?;
            let seconds = match c {
                's' => Some(num),
                'm' => num.checked_mul(60),
                'h' => num.checked_mul(3600),
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            total_seconds = seconds
                .and_then(|seconds| total_seconds.checked_add(seconds))
                .ok_or_else(|| TOO_LARGE.to_string())?;
            current_number.clear();
            seen_number = true;
        }

        if !current_number.is_empty() {
            let seconds = current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
            total_seconds = total_seconds
                .checked_add(seconds)
                .ok_or_else(|| TOO_LARGE.to_string())?;
            seen_number = true;
        }

        if !seen_number {
            return Err("Duration must include a number".to_string());
        }
        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse machine-summarized news", long_about = None)]
struct Cli {
    /// Base url of the summarization service
    #[arg(long, env = "NT_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,
    /// Request timeout (e.g. 30s, 2m)
    #[arg(long, env = "NT_API_TIMEOUT", default_value = "30s")]
    timeout: HumanDuration,
    /// Where bookmarks and preferences are kept: file or memory
    #[arg(long, default_value = "file")]
    storage: String,
    /// State file used by the file storage
    #[arg(long, default_value = DEFAULT_STATE_FILE)]
    state_file: PathBuf,
    /// Ask the service for untranslated summaries
    #[arg(long)]
    no_translate: bool,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Show summarized headlines
    News {
        /// Switch to this language first (remembered)
        #[arg(long, value_enum)]
        lang: Option<Language>,
        /// Only titles containing this text
        #[arg(long, default_value = "")]
        search: String,
        /// Only this source, e.g. "bbc news", "espn", "the hindu", "al jazeera english"
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
    },
    /// Show trending headlines
    Trending,
    /// Saved articles
    Bookmarks {
        #[command(subcommand)]
        command: Option<BookmarkCommands>,
    },
    /// Save or unsave an article by url
    Bookmark {
        url: String,
        #[arg(long, value_enum)]
        lang: Option<Language>,
    },
    /// Theme and language
    Prefs {
        #[command(subcommand)]
        command: Option<PrefsCommands>,
    },
}

#[derive(clap::Subcommand, Debug)]
enum BookmarkCommands {
    List,
    Remove { url: String },
}

#[derive(clap::Subcommand, Debug)]
enum PrefsCommands {
    Show,
    /// Toggle the dark theme
    DarkMode,
    Language {
        #[arg(value_enum)]
        language: Language,
    },
}

/// Fetch the collection in `lang` (or the stored language).
async fn load_news(session: &mut Session, lang: Option<Language>) -> Result<()> {
    let fetched = match lang {
        Some(lang) => session.set_language(lang).await?,
        None => false,
    };
    if !fetched {
        session.mount().await;
    }
    Ok(())
}

fn known_category(category: &str) -> bool {
    category.eq_ignore_ascii_case(ALL_CATEGORIES)
        || KNOWN_CATEGORIES
            .iter()
            .any(|(value, _)| value.eq_ignore_ascii_case(category))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ClientConfig::new(&cli.api_url)?
        .with_timeout(cli.timeout.0)
        .with_translate(!cli.no_translate);
    let fetcher: Arc<dyn ArticleFetcher> = Arc::new(SummarizerClient::new(config)?);
    let store = nt_storage::create_storage(&cli.storage, Some(cli.state_file.as_path()))?;
    let mut session = Session::new(fetcher, store);

    match cli.command {
        Commands::News {
            lang,
            search,
            category,
        } => {
            if !known_category(&category) {
                info!("Category '{}' is not one of the listed sources", category);
            }
            load_news(&mut session, lang).await?;
            session.set_search_term(search);
            session.set_category(category);
            let articles = session.filtered_articles();
            println!(
                "{}",
                render::article_list(articles, |url| session.is_bookmarked(url), render::NO_NEWS)
            );
        }
        Commands::Trending => {
            let articles = session.trending().await.to_vec();
            println!(
                "{}",
                render::article_list(&articles, |url| session.is_bookmarked(url), render::NO_TRENDING)
            );
        }
        Commands::Bookmarks { command } => match command.unwrap_or(BookmarkCommands::List) {
            BookmarkCommands::List => {
                let bookmarks = session.bookmarks();
                println!("{}", render::article_list(&bookmarks, |_| true, render::NO_BOOKMARKS));
            }
            BookmarkCommands::Remove { url } => {
                if session.bookmark_store().remove(&url)? {
                    println!("Removed bookmark {}", url);
                } else {
                    println!("{} was not bookmarked", url);
                }
            }
        },
        Commands::Bookmark { url, lang } => {
            let saved = if session.is_bookmarked(&url) {
                session.toggle_bookmark(&url)?
            } else {
                load_news(&mut session, lang).await?;
                match session.toggle_bookmark(&url) {
                    Err(Error::NotFound(_)) => {
                        session.trending().await;
                        session.toggle_bookmark(&url)?
                    }
                    other => other?,
                }
            };
            if saved {
                println!("📌 Bookmarked {}", url);
            } else {
                println!("🔴 Removed bookmark {}", url);
            }
        }
        Commands::Prefs { command } => match command.unwrap_or(PrefsCommands::Show) {
            PrefsCommands::Show => println!("{}", render::preferences(&session.preferences())),
            PrefsCommands::DarkMode => {
                let dark_mode = session.toggle_dark_mode()?;
                println!("Theme: {}", if dark_mode { "dark" } else { "light" });
            }
            PrefsCommands::Language { language } => {
                if session.set_language(language).await? {
                    println!(
                        "Language: {} ({}), {} articles fetched",
                        language,
                        language.display_name(),
                        session.articles().len()
                    );
                } else {
                    println!("Language already {}", language);
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_human_duration() {
        assert_eq!("45".parse::<HumanDuration>().unwrap().0, Duration::from_secs(45));
        assert_eq!("2m".parse::<HumanDuration>().unwrap().0, Duration::from_secs(120));
        assert_eq!(
            "1h15m30s".parse::<HumanDuration>().unwrap().0,
            Duration::from_secs(4530)
        );
        assert!("".parse::<HumanDuration>().is_err());
        assert!("5d".parse::<HumanDuration>().is_err());
        assert!("m".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615h".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s1s".parse::<HumanDuration>().is_err());
        assert!("18446744073709551615s1".parse::<HumanDuration>().is_err());
    }

    #[test]
    fn test_parse_news_command() {
        let cli = Cli::try_parse_from([
            "nt", "--storage", "memory", "news", "--lang", "hi", "--category", "espn",
        ])
        .unwrap();
        match cli.command {
            Commands::News { lang, search, category } => {
                assert_eq!(lang, Some(Language::Hi));
                assert_eq!(search, "");
                assert_eq!(category, "espn");
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["nt", "news", "--lang", "fr"]).is_err());
    }

    #[test]
    fn test_known_category() {
        assert!(known_category("all"));
        assert!(known_category("ESPN"));
        assert!(!known_category("cnn"));
    }
}
