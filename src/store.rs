use crate::errors::StorageError;
use crate::models::JokeRecord;
use crate::storage::Storage;
use serde::de::DeserializeOwned;
use tracing::error;

pub const HISTORY_KEY: &str = "jokesHistory";
pub const COUNT_KEY: &str = "jokeCount";
pub const FAVORITES_KEY: &str = "favorites";
pub const HISTORY_LIMIT: usize = 10;

pub struct WidgetStore<S> {
    storage: S,
    history: Vec<JokeRecord>,
    count: i64,
    favorites: Vec<String>,
}

impl<S: Storage> WidgetStore<S> {
    pub fn load(storage: S) -> Self {
        let history: Vec<JokeRecord> = read_json(&storage, HISTORY_KEY);
        let favorites: Vec<String> = read_json(&storage, FAVORITES_KEY);
        let count = storage
            .get(COUNT_KEY)
            .map(|raw| parse_leading_int(&raw))
            .unwrap_or(0);

        Self {
            storage,
            history,
            count,
            favorites,
        }
    }

    pub fn history(&self) -> &[JokeRecord] {
        &self.history
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn find(&self, id: i64) -> Option<&JokeRecord> {
        self.history.iter().find(|record| record.id == id)
    }

    pub async fn record(&mut self, joke: JokeRecord) -> Result<(), StorageError> {
        self.history.insert(0, joke);
        self.history.truncate(HISTORY_LIMIT);
        self.count = self.count.saturating_add(1);

        self.storage
            .set(HISTORY_KEY, serde_json::to_string(&self.history)?);
        self.storage.set(COUNT_KEY, self.count.to_string());
        self.storage.flush().await
    }

    pub async fn clear_history(&mut self) -> Result<(), StorageError> {
        self.history.clear();
        self.storage.remove(HISTORY_KEY);
        self.storage.flush().await
    }

    pub fn is_favorite(&self, key: &str) -> bool {
        self.favorites.iter().any(|fav| fav == key)
    }

    pub async fn toggle_favorite(&mut self, key: &str) -> Result<bool, StorageError> {
        let now_favorite = if self.is_favorite(key) {
            self.favorites.retain(|fav| fav != key);
            false
        } else {
            self.favorites.push(key.to_string());
            true
        };
        self.storage
            .set(FAVORITES_KEY, serde_json::to_string(&self.favorites)?);
        self.storage.flush().await?;
        Ok(now_favorite)
    }
}

fn read_json<T: DeserializeOwned + Default>(storage: &impl Storage, key: &str) -> T {
    let Some(raw) = storage.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            error!("failed to parse stored {key}: {err}");
            T::default()
        }
    }
}

// Same reading as `parseInt(raw) || 0`: optional sign, leading digits.
fn parse_leading_int(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    let value: i64 = digits.parse().unwrap_or(0);
    if negative { -value } else { value }
}
