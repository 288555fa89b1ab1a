use std::time::{SystemTime, UNIX_EPOCH};

use dashmap::DashMap;

use crate::core::usecases::ports::RateLimiter;

/// In-memory fixed-window limiter keyed by `(key, route, window_index)`
/// (spec §4.9). Single-process only — the spec calls this out as the
/// supported default for unauthenticated traffic, not a distributed limiter.
#[derive(Debug, Default)]
pub struct FixedWindowRateLimiter {
    counts: DashMap<(String, String, i64), u32>,
}

impl FixedWindowRateLimiter {
    pub fn new() -> Self {
        Self { counts: DashMap::new() }
    }
}

impl RateLimiter for FixedWindowRateLimiter {
    fn check_and_record(&self, key: &str, route: &str, limit: u32, window_seconds: i64) -> bool {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs() as i64).unwrap_or(0);
        let window_index = now / window_seconds.max(1);
        let slot = (key.to_string(), route.to_string(), window_index);

        let mut entry = self.counts.entry(slot).or_insert(0);
        *entry += 1;
        let allowed = *entry <= limit;

        drop(entry);
        if window_index % 64 == 0 {
            self.counts.retain(|(_, _, idx), _| *idx >= window_index - 1);
        }

        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_limit_then_blocks() {
        let limiter = FixedWindowRateLimiter::new();
        for _ in 0..3 {
            assert!(limiter.check_and_record("1.2.3.4", "/api/login", 3, 900));
        }
        assert!(!limiter.check_and_record("1.2.3.4", "/api/login", 3, 900));
    }

    #[test]
    fn tracks_distinct_keys_independently() {
        let limiter = FixedWindowRateLimiter::new();
        assert!(limiter.check_and_record("1.2.3.4", "/api/login", 1, 900));
        assert!(limiter.check_and_record("5.6.7.8", "/api/login", 1, 900));
        assert!(!limiter.check_and_record("1.2.3.4", "/api/login", 1, 900));
    }
}
