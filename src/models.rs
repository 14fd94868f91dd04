use crate::notification::Notification;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JokeKind {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "twopart")]
    TwoPart,
}

impl JokeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JokeKind::Single => "single",
            JokeKind::TwoPart => "twopart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JokeKind::Single => "Single",
            JokeKind::TwoPart => "Two-part",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JokeRecord {
    pub id: i64,
    pub text: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: JokeKind,
    pub date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokeFlags {
    #[serde(default)]
    pub explicit: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiJoke {
    #[serde(rename = "type", default)]
    pub kind: JokeKind,
    #[serde(default)]
    pub setup: Option<String>,
    #[serde(default)]
    pub delivery: Option<String>,
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub flags: JokeFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Safe,
    Explicit,
}

impl Rating {
    pub fn from_explicit(explicit: bool) -> Self {
        if explicit { Rating::Explicit } else { Rating::Safe }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Content {
    #[default]
    Placeholder,
    // `text` is rendered with its line breaks; `plain` is what the joke area
    // reads back as text, which copy, share and favorites use.
    Joke {
        text: String,
        plain: String,
    },
    Error,
}

impl Content {
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            Content::Joke { plain, .. } => Some(plain),
            Content::Placeholder | Content::Error => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Display {
    pub content: Content,
    pub category: Option<String>,
    pub kind: Option<String>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryItem {
    pub id: i64,
    pub category: String,
    pub preview: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: JokeKind,
}

// UTF-16 units, like `String.prototype.substring`.
const PREVIEW_UNITS: usize = 50;

impl From<&JokeRecord> for HistoryItem {
    fn from(record: &JokeRecord) -> Self {
        let units: Vec<u16> = record.text.encode_utf16().take(PREVIEW_UNITS).collect();
        let head = String::from_utf16_lossy(&units);
        Self {
            id: record.id,
            category: record.category.clone(),
            preview: format!("{head}..."),
            date: record.date.clone(),
            kind: record.kind,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetView {
    pub display: Display,
    pub count: i64,
    pub history: Vec<HistoryItem>,
    pub favorited: bool,
    pub loading: bool,
    pub notification: Option<Notification>,
}

#[derive(Debug, Deserialize, Default)]
pub struct JokeRequest {
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ClearQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub view: WidgetView,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub url: String,
}
