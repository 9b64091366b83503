//! Static message catalog.
//!
//! The pools are fixed configuration, not runtime state. ERROR and WARNING
//! pools are level-wide: failures and resource-pressure warnings are generic
//! infrastructure signals that occur across subsystems. INFO pools are
//! per-source, since informational events are domain-specific.

use crate::record::Source;

/// Level-wide error messages, independent of source.
pub const ERROR_MESSAGES: &[&str] = &[
    "Connection timeout",
    "Service unavailable",
    "Database error: Connection refused",
    "Invalid authentication token",
    "Request validation failed",
    "Internal server error",
    "Resource not found",
    "Permission denied",
];

/// Level-wide warning messages, independent of source.
pub const WARNING_MESSAGES: &[&str] = &[
    "High CPU usage detected",
    "Memory usage approaching limit",
    "Network latency elevated",
    "Database connection slow",
    "Cache miss rate high",
    "Deprecated API endpoint used",
    "SSL certificate expiring soon",
];

const AUTH_INFO: &[&str] = &[
    "User authentication successful",
    "Session token generated",
    "Login attempt from new device",
    "Token refresh completed",
    "User registration processed",
];

const DATABASE_INFO: &[&str] = &[
    "Database connection pool running at 80% capacity",
    "Query execution time exceeded threshold",
    "Connection timeout detected",
    "Slow query logged",
    "Index rebuild scheduled",
];

const API_GATEWAY_INFO: &[&str] = &[
    "Request routed to service instance",
    "Rate limit threshold approaching",
    "API version deprecated",
    "Load balanced across 3 instances",
    "Circuit breaker opened for service",
];

const CACHE_INFO: &[&str] = &[
    "Cache hit ratio: 92%",
    "Cache invalidation triggered",
    "Memory usage: 65%",
    "Cache synchronization completed",
    "Eviction policy applied",
];

const NOTIFICATION_INFO: &[&str] = &[
    "Email notification sent successfully",
    "SMS delivery confirmed",
    "Push notification queued",
    "Failed notification retry scheduled",
    "Notification batch processed",
];

const USER_INFO: &[&str] = &[
    "User profile updated",
    "Preference settings changed",
    "Password reset initiated",
    "User deactivation requested",
    "Account migration started",
];

const ANALYTICS_INFO: &[&str] = &[
    "Event tracked successfully",
    "User session duration: 3600s",
    "Conversion event recorded",
    "Analytics batch job running",
    "Real-time metrics updated",
];

/// The INFO message pool specific to the given source.
pub fn info_messages(source: Source) -> &'static [&'static str] {
    match source {
        Source::Auth => AUTH_INFO,
        Source::Database => DATABASE_INFO,
        Source::ApiGateway => API_GATEWAY_INFO,
        Source::Cache => CACHE_INFO,
        Source::Notification => NOTIFICATION_INFO,
        Source::User => USER_INFO,
        Source::Analytics => ANALYTICS_INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_non_empty() {
        assert!(!ERROR_MESSAGES.is_empty());
        assert!(!WARNING_MESSAGES.is_empty());
        for source in Source::ALL {
            assert!(!info_messages(source).is_empty());
        }
    }

    #[test]
    fn test_info_pools_are_distinct_per_source() {
        // Every source has its own pool; no two sources share a pool.
        for (i, a) in Source::ALL.iter().enumerate() {
            for b in Source::ALL.iter().skip(i + 1) {
                assert_ne!(
                    info_messages(*a).as_ptr(),
                    info_messages(*b).as_ptr(),
                    "{a} and {b} share an INFO pool"
                );
            }
        }
    }
}
