use crate::errors::{ClipboardError, FetchError, WidgetError};
use crate::favorites::favorite_key;
use crate::jokeapi::normalize_category;
use crate::markup::compose;
use crate::models::{ApiJoke, Content, Display, HistoryItem, JokeRecord, Rating, WidgetView};
use crate::notification::{Level, Notifier};
use crate::storage::Storage;
use crate::store::WidgetStore;
use chrono::{DateTime, Local, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tracing::{error, warn};

pub const MSG_LOADED: &str = "New joke loaded!";
pub const MSG_FETCH_FAILED: &str = "Failed to fetch joke. Please try again.";
pub const MSG_PREVIOUS: &str = "Previous joke loaded!";
pub const MSG_FAVORITED: &str = "Added to favorites!";
pub const MSG_UNFAVORITED: &str = "Removed from favorites";
pub const MSG_COPIED: &str = "Joke copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy joke";
pub const MSG_CLEARED: &str = "History cleared!";

pub const SHARE_BASE: &str = "https://twitter.com/intent/tweet";
pub const SHARE_HASHTAGS: &str = "#Jokes #Funny";

// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Default)]
pub struct Handoff {
    pub text: Option<String>,
}

impl Clipboard for Handoff {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

// Counts as in flight until dropped, whether or not the fetch completes.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    category: String,
    in_flight: Arc<AtomicUsize>,
}

impl FetchTicket {
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Drop for FetchTicket {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Failed,
    Superseded,
}

pub struct Controller<S> {
    store: WidgetStore<S>,
    display: Display,
    notifier: Notifier,
    generation: u64,
    in_flight: Arc<AtomicUsize>,
}

impl<S: Storage> Controller<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: WidgetStore::load(storage),
            display: Display::default(),
            notifier: Notifier::default(),
            generation: 0,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn store(&self) -> &WidgetStore<S> {
        &self.store
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn begin_fetch(&mut self, category: &str) -> FetchTicket {
        self.generation += 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        FetchTicket {
            generation: self.generation,
            category: normalize_category(category),
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub async fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<ApiJoke, FetchError>,
        now: DateTime<Utc>,
    ) -> Result<FetchOutcome, WidgetError> {
        if ticket.generation != self.generation {
            warn!(
                category = %ticket.category,
                "dropping response superseded by a newer request"
            );
            return Ok(FetchOutcome::Superseded);
        }

        let composed = result.and_then(|joke| compose(&joke).map(|composed| (joke, composed)));
        let (joke, composed) = match composed {
            Ok(pair) => pair,
            Err(err) => {
                error!("Error fetching joke: {err}");
                self.display.content = Content::Error;
                self.notifier.show(Level::Error, MSG_FETCH_FAILED, now);
                return Ok(FetchOutcome::Failed);
            }
        };

        let category = joke
            .category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ticket.category.clone());

        self.display = Display {
            content: Content::Joke {
                text: composed.text.clone(),
                plain: composed.plain,
            },
            category: Some(category.clone()),
            kind: Some(joke.kind.label().to_string()),
            rating: Some(Rating::from_explicit(joke.flags.explicit)),
        };

        self.store
            .record(JokeRecord {
                id: now.timestamp_millis(),
                text: composed.text,
                category,
                kind: joke.kind,
                date: format_date(now),
            })
            .await?;

        self.notifier.show(Level::Success, MSG_LOADED, now);
        Ok(FetchOutcome::Loaded)
    }

    // Rating slot keeps its value.
    pub fn show_history(&mut self, id: i64, now: DateTime<Utc>) -> Result<(), WidgetError> {
        let record = self
            .store
            .find(id)
            .cloned()
            .ok_or(WidgetError::HistoryEntryNotFound(id))?;

        // Line breaks come back as `<br>`, so they do not survive as text.
        self.display.content = Content::Joke {
            plain: record.text.replace('\n', ""),
            text: record.text,
        };
        self.display.category = Some(record.category);
        self.display.kind = Some(record.kind.as_str().to_string());
        self.notifier.show(Level::Info, MSG_PREVIOUS, now);
        Ok(())
    }

    pub async fn clear_history(
        &mut self,
        confirmed: bool,
        now: DateTime<Utc>,
    ) -> Result<(), WidgetError> {
        if !confirmed {
            return Err(WidgetError::ConfirmationRequired);
        }
        self.store.clear_history().await?;
        self.notifier.show(Level::Info, MSG_CLEARED, now);
        Ok(())
    }

    pub fn displayed_text(&self) -> Option<&str> {
        self.display.content.plain_text()
    }

    pub async fn toggle_favorite(&mut self, now: DateTime<Utc>) -> Result<bool, WidgetError> {
        let key = favorite_key(self.displayed_text().ok_or(WidgetError::NothingDisplayed)?);
        let favorite = self.store.toggle_favorite(&key).await?;
        if favorite {
            self.notifier.show(Level::Success, MSG_FAVORITED, now);
        } else {
            self.notifier.show(Level::Info, MSG_UNFAVORITED, now);
        }
        Ok(favorite)
    }

    pub fn copy(
        &mut self,
        clipboard: &mut dyn Clipboard,
        now: DateTime<Utc>,
    ) -> Result<String, WidgetError> {
        let text = self
            .displayed_text()
            .ok_or(WidgetError::NothingDisplayed)?
            .to_string();
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.notifier.show(Level::Success, MSG_COPIED, now);
                Ok(text)
            }
            Err(err) => {
                self.notifier.show(Level::Error, MSG_COPY_FAILED, now);
                Err(err.into())
            }
        }
    }

    pub fn share_url(&self) -> Option<String> {
        let text = self.displayed_text()?;
        let message = format!("{text} {SHARE_HASHTAGS}");
        Some(format!(
            "{SHARE_BASE}?text={}",
            utf8_percent_encode(&message, URI_COMPONENT)
        ))
    }

    pub fn view(&self, now: DateTime<Utc>) -> WidgetView {
        let favorited = self
            .displayed_text()
            .is_some_and(|text| self.store.is_favorite(&favorite_key(text)));

        WidgetView {
            display: self.display.clone(),
            count: self.store.count(),
            history: self.store.history().iter().map(HistoryItem::from).collect(),
            favorited,
            loading: self.loading(),
            notification: self.notifier.active(now).cloned(),
        }
    }
}

fn format_date(now: DateTime<Utc>) -> String {
    now.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}
