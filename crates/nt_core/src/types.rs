use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Shown in place of a missing source name.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// The summarization service fills missing links with this placeholder.
const URL_PLACEHOLDER: &str = "#";

/// One summarized news item. `url` is the identity key: two records are the
/// same article iff their urls are byte-for-byte equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_sentiment"
    )]
    pub sentiment: Option<Sentiment>,
}

impl Article {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source = Some(Source { name: name.into() });
        self
    }

    /// Reject records that cannot be identified: an empty url or the
    /// service's `#` placeholder.
    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() || url == URL_PLACEHOLDER {
            return Err(Error::MalformedRecord(format!(
                "article '{}' has no url",
                self.title
            )));
        }
        Ok(())
    }

    pub fn source_name(&self) -> &str {
        match &self.source {
            Some(source) if !source.name.is_empty() => &source.name,
            _ => UNKNOWN_SOURCE,
        }
    }

    pub fn published_date(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.published_at.trim()).ok()
    }

    /// `YYYY-MM-DD`, or an empty string when the timestamp does not parse.
    pub fn display_date(&self) -> String {
        self.published_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// Publisher of an article. Accepts `{"name": "..."}` or a bare string on
/// the wire and always writes the object form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SourceRepr")]
pub struct Source {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    Name(String),
    Object {
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<SourceRepr> for Source {
    fn from(repr: SourceRepr) -> Self {
        match repr {
            SourceRepr::Name(name) => Self { name },
            SourceRepr::Object { name } => Self {
                name: name.unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = Error;

    /// Tolerates decorations such as `"🟢 Positive"`.
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim_start_matches(|c: char| !c.is_alphabetic()).trim();
        [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
            .into_iter()
            .find(|sentiment| sentiment.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::MalformedRecord(format!("unknown sentiment '{}'", s)))
    }
}

fn null_as_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn lenient_sentiment<'de, D>(deserializer: D) -> std::result::Result<Option<Sentiment>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// UI language; selects the translation the remote service applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Mr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Mr => "mr",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Mr => "मराठी",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}
