//! Synthetic log record generation for logship.
//!
//! This crate produces random, internally-consistent log records: a level,
//! a source subsystem, a message drawn from the catalog pools, and a
//! construction timestamp. INFO messages are specific to the chosen source;
//! WARNING and ERROR messages come from level-wide pools shared by all
//! sources.

pub mod catalog;
pub mod generator;
pub mod record;

pub use generator::RecordGenerator;
pub use record::{Level, LogRecord, Source};
