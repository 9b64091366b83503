//! HTTP delivery of log records and outcome classification.

use logship_generator::{Level, LogRecord, Source};
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// Wire payload for one record.
///
/// Exactly three string fields; the timestamp is generation metadata and is
/// not transmitted, the receiving side stamps arrival time itself.
#[derive(Debug, Serialize)]
pub struct LogPayload<'a> {
    pub level: Level,
    pub message: &'a str,
    pub source: Source,
}

impl<'a> LogPayload<'a> {
    pub fn from_record(record: &'a LogRecord) -> Self {
        Self {
            level: record.level,
            message: record.message,
            source: record.source,
        }
    }
}

/// Outcome of one transmission attempt.
///
/// Send failures are data consumed by the delivery loop, not errors to
/// propagate: the loop logs a diagnostic and moves on either way.
#[derive(Debug)]
pub enum SendOutcome {
    /// The endpoint accepted the record (HTTP 200 or 201).
    Delivered(StatusCode),
    /// The endpoint answered with any other status.
    Rejected(StatusCode),
    /// The request never completed (connection refused, DNS, I/O error).
    TransportFailed(reqwest::Error),
}

impl SendOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SendOutcome::Delivered(_))
    }
}

/// Sender performing one POST per record to a fixed ingestion endpoint.
pub struct LogSender {
    client: Client,
    endpoint: String,
}

impl LogSender {
    /// Create a sender for the given endpoint URL.
    ///
    /// No request timeout is configured: a hung connection blocks the
    /// pipeline until the transport gives up on its own.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL records are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform a single transmission attempt for the record.
    ///
    /// The response body is ignored; only the status code matters. Success
    /// is strictly 200 or 201.
    pub async fn send(&self, record: &LogRecord) -> SendOutcome {
        let payload = LogPayload::from_record(record);

        match self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK || status == StatusCode::CREATED {
                    SendOutcome::Delivered(status)
                } else {
                    SendOutcome::Rejected(status)
                }
            }
            Err(e) => SendOutcome::TransportFailed(e),
        }
    }
}
