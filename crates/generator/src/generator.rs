//! The record generator: uniform random selection over the catalog.

use crate::catalog::{info_messages, ERROR_MESSAGES, WARNING_MESSAGES};
use crate::record::{Level, LogRecord, Source};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Generator producing one random, internally-consistent log record per call.
///
/// Level and source are chosen uniformly and independently. The message is
/// conditioned on the level: ERROR and WARNING draw from level-wide pools,
/// INFO draws from the pool belonging to the chosen source.
///
/// The generator owns its RNG. [`RecordGenerator::with_seed`] gives a
/// deterministic sequence for reproducible runs and tests.
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed (same seed = same records).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate the next record.
    ///
    /// Cannot fail: every pool is a fixed non-empty table.
    pub fn generate(&mut self) -> LogRecord {
        let level = *Level::ALL.choose(&mut self.rng).unwrap();
        let source = *Source::ALL.choose(&mut self.rng).unwrap();

        let message = match level {
            Level::Error => ERROR_MESSAGES.choose(&mut self.rng).copied().unwrap(),
            Level::Warning => WARNING_MESSAGES.choose(&mut self.rng).copied().unwrap(),
            Level::Info => info_messages(source).choose(&mut self.rng).copied().unwrap(),
        };

        LogRecord::new(level, source, message)
    }
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_error_messages_come_from_error_pool() {
        let mut generator = RecordGenerator::with_seed(42);
        let mut seen_errors = 0;
        for _ in 0..1000 {
            let record = generator.generate();
            if record.level == Level::Error {
                seen_errors += 1;
                assert!(
                    ERROR_MESSAGES.contains(&record.message),
                    "{:?} not in error pool (source {})",
                    record.message,
                    record.source
                );
            }
        }
        assert!(seen_errors > 0);
    }

    #[test]
    fn test_warning_messages_come_from_warning_pool() {
        let mut generator = RecordGenerator::with_seed(42);
        let mut seen_warnings = 0;
        for _ in 0..1000 {
            let record = generator.generate();
            if record.level == Level::Warning {
                seen_warnings += 1;
                assert!(
                    WARNING_MESSAGES.contains(&record.message),
                    "{:?} not in warning pool (source {})",
                    record.message,
                    record.source
                );
            }
        }
        assert!(seen_warnings > 0);
    }

    #[test]
    fn test_info_messages_match_their_source() {
        let mut generator = RecordGenerator::with_seed(7);
        let mut seen_info = 0;
        for _ in 0..1000 {
            let record = generator.generate();
            if record.level == Level::Info {
                seen_info += 1;
                // Message must belong to the record's own source pool.
                assert!(
                    info_messages(record.source).contains(&record.message),
                    "{:?} leaked across sources (got source {})",
                    record.message,
                    record.source
                );
            }
        }
        assert!(seen_info > 0);
    }

    #[test]
    fn test_levels_and_sources_are_roughly_uniform() {
        let mut generator = RecordGenerator::with_seed(42);
        let mut level_counts: HashMap<Level, u32> = HashMap::new();
        let mut source_counts: HashMap<Source, u32> = HashMap::new();

        const SAMPLES: u32 = 10_000;
        for _ in 0..SAMPLES {
            let record = generator.generate();
            *level_counts.entry(record.level).or_default() += 1;
            *source_counts.entry(record.source).or_default() += 1;
        }

        // Uniform over 3 levels: expected ~3333 each. Allow a wide margin so
        // the seeded run stays comfortably inside it.
        for level in Level::ALL {
            let count = *level_counts.get(&level).unwrap_or(&0);
            assert!(
                (2900..=3800).contains(&count),
                "level {level} appeared {count} times out of {SAMPLES}"
            );
        }

        // Uniform over 7 sources: expected ~1428 each.
        for source in Source::ALL {
            let count = *source_counts.get(&source).unwrap_or(&0);
            assert!(
                (1150..=1750).contains(&count),
                "source {source} appeared {count} times out of {SAMPLES}"
            );
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = RecordGenerator::with_seed(42);
        let mut gen2 = RecordGenerator::with_seed(42);

        for _ in 0..100 {
            let r1 = gen1.generate();
            let r2 = gen2.generate();
            assert_eq!(r1.level, r2.level);
            assert_eq!(r1.source, r2.source);
            assert_eq!(r1.message, r2.message);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut gen1 = RecordGenerator::with_seed(1);
        let mut gen2 = RecordGenerator::with_seed(2);

        let same = (0..100)
            .filter(|_| {
                let r1 = gen1.generate();
                let r2 = gen2.generate();
                r1.level == r2.level && r1.source == r2.source && r1.message == r2.message
            })
            .count();
        assert!(same < 100, "different seeds produced identical sequences");
    }
}
