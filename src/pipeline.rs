//! The paced delivery loop.

use crate::sender::{LogSender, SendOutcome};
use logship_generator::RecordGenerator;
use std::time::Duration;
use tracing::{error, info, warn};

/// Number of message characters shown in a progress line.
const PREVIEW_CHARS: usize = 40;

/// Counters from a delivery run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Iterations performed (generate + send).
    pub attempted: u64,
    /// Records accepted by the endpoint (HTTP 200 or 201).
    pub delivered: u64,
    /// Records answered with any other status.
    pub rejected: u64,
    /// Requests that never completed.
    pub transport_failures: u64,
    /// Whether the loop stopped early on a shutdown signal.
    pub interrupted: bool,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} attempted, {} delivered, {} rejected, {} transport failures",
            self.attempted, self.delivered, self.rejected, self.transport_failures
        )
    }
}

/// Pipeline driving a bounded, paced sequence of generate-and-send cycles.
///
/// Strictly sequential: the next record is not generated until the current
/// transmission attempt has completed, and at most one request is in flight.
/// A failed send never changes pacing or later iterations; the only way the
/// loop stops before `count` iterations is the shutdown signal.
pub struct DeliveryPipeline {
    generator: RecordGenerator,
    sender: LogSender,
    count: u64,
    interval: Duration,
}

impl DeliveryPipeline {
    pub fn new(
        generator: RecordGenerator,
        sender: LogSender,
        count: u64,
        interval: Duration,
    ) -> Self {
        Self {
            generator,
            sender,
            count,
            interval,
        }
    }

    /// Run the delivery loop to completion or until `shutdown` fires.
    ///
    /// Each iteration emits one progress line on stdout; failing iterations
    /// additionally emit one diagnostic via tracing. The pause between
    /// iterations is skipped after the final one.
    pub async fn run(mut self, mut shutdown: tokio::sync::broadcast::Receiver<()>) -> RunSummary {
        let mut summary = RunSummary::default();

        for i in 1..=self.count {
            let record = self.generator.generate();
            let outcome = self.sender.send(&record).await;
            summary.attempted += 1;

            match &outcome {
                SendOutcome::Delivered(_) => summary.delivered += 1,
                SendOutcome::Rejected(status) => {
                    summary.rejected += 1;
                    warn!(
                        "Ingestion endpoint returned status {status} for record {i}/{}",
                        self.count
                    );
                }
                SendOutcome::TransportFailed(e) => {
                    summary.transport_failures += 1;
                    error!("Failed to deliver record {i}/{}: {e}", self.count);
                }
            }

            println!(
                "[{i}/{}] Sent: [{}] {} - {}",
                self.count,
                record.level,
                record.source,
                preview(record.message)
            );

            if i < self.count {
                tokio::select! {
                    _ = shutdown.recv() => {
                        info!("Delivery interrupted after {i} of {} records", self.count);
                        summary.interrupted = true;
                        break;
                    }
                    _ = tokio::time::sleep(self.interval) => {}
                }
            }
        }

        summary
    }
}

/// First [`PREVIEW_CHARS`] characters of the message, with the truncation
/// marker appended whether or not anything was cut.
fn preview(message: &str) -> String {
    let head: String = message.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_messages() {
        let message = "a".repeat(60);
        let p = preview(&message);
        assert_eq!(p, format!("{}...", "a".repeat(40)));
    }

    #[test]
    fn test_preview_marks_short_messages_too() {
        assert_eq!(preview("short test"), "short test...");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let message = "é".repeat(50);
        let p = preview(&message);
        assert_eq!(p, format!("{}...", "é".repeat(40)));
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            attempted: 5,
            delivered: 3,
            rejected: 1,
            transport_failures: 1,
            interrupted: false,
        };
        assert_eq!(
            summary.to_string(),
            "5 attempted, 3 delivered, 1 rejected, 1 transport failures"
        );
    }
}
