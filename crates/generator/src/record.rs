//! The log record model: levels, source subsystems, and the record itself.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Level {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "ERROR")]
    Error,
}

impl Level {
    /// All levels, in severity order.
    pub const ALL: [Level; 3] = [Level::Info, Level::Warning, Level::Error];

    /// The wire/display name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical subsystem a record is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    #[serde(rename = "AuthService")]
    Auth,
    #[serde(rename = "DatabaseService")]
    Database,
    #[serde(rename = "APIGateway")]
    ApiGateway,
    #[serde(rename = "CacheService")]
    Cache,
    #[serde(rename = "NotificationService")]
    Notification,
    #[serde(rename = "UserService")]
    User,
    #[serde(rename = "AnalyticsService")]
    Analytics,
}

impl Source {
    /// All source subsystems.
    pub const ALL: [Source; 7] = [
        Source::Auth,
        Source::Database,
        Source::ApiGateway,
        Source::Cache,
        Source::Notification,
        Source::User,
        Source::Analytics,
    ];

    /// The wire/display name of the source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Auth => "AuthService",
            Source::Database => "DatabaseService",
            Source::ApiGateway => "APIGateway",
            Source::Cache => "CacheService",
            Source::Notification => "NotificationService",
            Source::User => "UserService",
            Source::Analytics => "AnalyticsService",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthesized log record.
///
/// Records are constructed by [`crate::RecordGenerator`], consumed exactly
/// once by the delivery pipeline, and never mutated or reused. The timestamp
/// is generation metadata, stamped at construction; it is not part of the
/// wire payload.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub source: Source,
    pub message: &'static str,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Create a record stamped with the current wall-clock time.
    pub fn new(level: Level, source: Source, message: &'static str) -> Self {
        Self {
            level,
            source,
            message,
            timestamp: Local::now(),
        }
    }

    /// The timestamp in RFC 3339 form (date + time + UTC offset), sortable
    /// and human readable.
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
