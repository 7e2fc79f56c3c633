//! Synchronous retry with fixed backoff
//!
//! Purely blocking: the calling thread sleeps between attempts. There is
//! no exponential backoff, jitter, or cancellation; a caller wanting a
//! deadline must race this helper against one at a higher level.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// Run `operation`, retrying up to `max_retries` further times on failure
///
/// The operation runs once up front; each retry sleeps for exactly
/// `backoff` first. The first success returns immediately without
/// consuming remaining retries. Every failed retry attempt is logged
/// with its index and error, then execution moves on to the next
/// attempt; the last observed error is returned once attempts are
/// exhausted.
///
/// # Errors
///
/// Returns the error from the final attempt when the initial call and
/// all retries fail.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tracery_util::retry_with_backoff;
///
/// let mut attempts = 0;
/// let result: Result<u32, String> = retry_with_backoff(2, Duration::from_millis(1), || {
///     attempts += 1;
///     if attempts < 2 {
///         Err("not ready".to_string())
///     } else {
///         Ok(attempts)
///     }
/// });
/// assert_eq!(result, Ok(2));
/// ```
pub fn retry_with_backoff<T, E, F>(
    max_retries: u32,
    backoff: Duration,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Display,
{
    let mut result = operation();
    if result.is_ok() {
        return result;
    }

    for attempt in 0..max_retries {
        thread::sleep(backoff);
        result = operation();
        match &result {
            Ok(_) => break,
            Err(error) => {
                tracing::error!(target: "tracery", attempt, error = %error, "retry attempt failed");
            }
        }
    }

    result
}
