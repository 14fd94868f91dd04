use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const NOTIFICATION_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    // Page restarts its timer when this changes.
    pub seq: u64,
    pub level: Level,
    pub message: String,
    pub duration_ms: i64,
    #[serde(skip)]
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    seq: u64,
}

impl Notifier {
    pub fn show(&mut self, level: Level, message: impl Into<String>, now: DateTime<Utc>) {
        self.seq += 1;
        self.current = Some(Notification {
            seq: self.seq,
            level,
            message: message.into(),
            duration_ms: NOTIFICATION_MS,
            shown_at: now,
        });
    }

    pub fn active(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now - n.shown_at < Duration::milliseconds(n.duration_ms))
    }
}
