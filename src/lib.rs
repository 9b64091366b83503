//! logship library
//!
//! Generates synthetic log records and ships them one at a time, at a fixed
//! pace, to an HTTP log-ingestion endpoint. Useful for exercising or
//! demonstrating a downstream log-collection API without real traffic.
//!
//! Record synthesis lives in the `logship-generator` crate; this crate adds
//! the HTTP sender with outcome classification ([`sender`]) and the paced
//! sequential delivery loop ([`pipeline`]).

pub mod config;
pub mod pipeline;
pub mod sender;

pub use pipeline::{DeliveryPipeline, RunSummary};
pub use sender::{LogSender, SendOutcome};
