//! Row normalization from raw CSV fields to the typed `Post` struct

use serde::Deserialize;

/// Raw CSV row as read from the dataset.
///
/// Every column is optional: a missing column or a short row leaves the
/// field as an empty string, which coerces to zero / empty text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub niche_category: String,
    pub hook_style: String,
    pub trending_sound_used: String,
    pub video_duration_seconds: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub shares: String,
    pub saves_or_favorites: String,
}

/// One short-video post with engagement counters
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub niche_category: String,
    pub hook_style: String,
    pub trending_sound_used: i64,
    pub video_duration_seconds: f64,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub saves_or_favorites: i64,
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Csv(err)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Csv(e) => write!(f, "CSV error: {}", e),
            LoadError::InvalidNumber { line, column, value } => write!(
                f,
                "line {}: column '{}' is not a number: {:?}",
                line, column, value
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::InvalidNumber { .. } => None,
        }
    }
}

/// Strip whitespace and thousands separators. `None` means blank.
fn clean_number(value: &str) -> Option<String> {
    let cleaned = value.trim().replace(',', "");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Parse a float field; blank is zero.
pub fn parse_float(value: &str) -> Option<f64> {
    match clean_number(value) {
        None => Some(0.0),
        Some(s) => s.parse::<f64>().ok(),
    }
}

/// Parse an integer field through a float, truncating toward zero ("3.0" -> 3).
pub fn parse_int(value: &str) -> Option<i64> {
    match clean_number(value) {
        None => Some(0),
        Some(s) => {
            let parsed = s.parse::<f64>().ok()?;
            if parsed.is_finite() {
                Some(parsed.trunc() as i64)
            } else {
                None
            }
        }
    }
}

impl Post {
    /// Coerce a raw row into a `Post`. `line` is only used for error reporting.
    pub fn from_raw(raw: &RawPost, line: u64) -> Result<Self, LoadError> {
        let int_field = |column: &'static str, value: &str| {
            parse_int(value).ok_or_else(|| LoadError::InvalidNumber {
                line,
                column,
                value: value.to_string(),
            })
        };

        let video_duration_seconds =
            parse_float(&raw.video_duration_seconds).ok_or_else(|| LoadError::InvalidNumber {
                line,
                column: "video_duration_seconds",
                value: raw.video_duration_seconds.clone(),
            })?;

        Ok(Post {
            niche_category: raw.niche_category.trim().to_string(),
            hook_style: raw.hook_style.trim().to_string(),
            trending_sound_used: int_field("trending_sound_used", &raw.trending_sound_used)?,
            video_duration_seconds,
            views: int_field("views", &raw.views)?,
            likes: int_field("likes", &raw.likes)?,
            comments: int_field("comments", &raw.comments)?,
            shares: int_field("shares", &raw.shares)?,
            saves_or_favorites: int_field("saves_or_favorites", &raw.saves_or_favorites)?,
        })
    }

    /// Whether the post used a trending sound
    pub fn uses_trending_sound(&self) -> bool {
        self.trending_sound_used == 1
    }
}
