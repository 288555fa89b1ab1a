/// Contract for per-IP, per-route request throttling (spec §4.9). An
/// external collaborator (spec §1 Out of scope) — this crate ships an
/// in-memory fixed-window default suitable for a single process.
///
/// Storage failures must fail open: a limiter implementation that cannot
/// determine the current count should return `true` (allowed) rather than
/// propagate an error, per spec §7's explicit policy choice.
pub trait RateLimiter: Send + Sync {
    /// Returns `true` if the request at (`key`, `route`) is within limits,
    /// recording this attempt as a side effect.
    fn check_and_record(&self, key: &str, route: &str, limit: u32, window_seconds: i64) -> bool;
}
