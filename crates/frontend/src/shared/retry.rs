//! Retry with exponential backoff around fallible async operations.
//!
//! Ошибки промежуточных попыток только логируются, наружу уходит ошибка
//! последней попытки.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Bounded retry policy: `max_attempts` tries, waiting `base_delay * 2^n`
/// after the n-th failed attempt (n starting at 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay before the attempt that follows failed attempt `failed_attempt` (0-based)
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        self.base_delay
            .checked_mul(2u32.saturating_pow(failed_attempt))
            .unwrap_or(Duration::MAX)
    }
}

/// Suspends the current task without blocking the event loop.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer backed sleeper
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutSleeper;

#[async_trait(?Send)]
impl Sleeper for TimeoutSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Runs `operation` until it succeeds or the policy's attempts are used up.
pub async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    operation_name: &str,
    mut operation: F,
) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt + 1 < max_attempts => {
                let delay = policy.delay_after(attempt);
                log::warn!(
                    "{}: attempt {}/{} failed: {}; retrying in {:?}",
                    operation_name,
                    attempt + 1,
                    max_attempts,
                    e,
                    delay
                );
                sleeper.sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!(
                    "{}: giving up after {} attempts: {}",
                    operation_name,
                    max_attempts,
                    e
                );
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::cell::RefCell;

    /// Records requested delays and returns immediately
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub delays: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.delays.borrow_mut().push(duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingSleeper;
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_after(0), Duration::from_secs(1));
        assert_eq!(policy.delay_after(1), Duration::from_secs(2));
        assert_eq!(policy.delay_after(2), Duration::from_secs(4));
    }

    #[test]
    fn test_failing_operation_waits_one_then_two_seconds() {
        let sleeper = RecordingSleeper::default();
        let calls = Cell::new(0);

        let result: Result<(), String> = block_on(with_retry(
            &RetryPolicy::default(),
            &sleeper,
            "list tables",
            || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move { Err(format!("failure #{}", n)) }
            },
        ));

        assert_eq!(result, Err("failure #3".to_string()));
        assert_eq!(calls.get(), 3);
        assert_eq!(
            *sleeper.delays.borrow(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[test]
    fn test_stops_on_first_success() {
        let sleeper = RecordingSleeper::default();
        let calls = Cell::new(0);

        let result = block_on(with_retry(
            &RetryPolicy::default(),
            &sleeper,
            "connect",
            || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 2 {
                        Err("Server error".to_string())
                    } else {
                        Ok("Connected")
                    }
                }
            },
        ));

        assert_eq!(result, Ok("Connected"));
        assert_eq!(calls.get(), 2);
        assert_eq!(*sleeper.delays.borrow(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn test_zero_attempts_still_runs_once() {
        let sleeper = RecordingSleeper::default();
        let policy = RetryPolicy {
            max_attempts: 0,
            base_delay: Duration::from_secs(1),
        };
        let calls = Cell::new(0);

        let result: Result<(), String> = block_on(with_retry(&policy, &sleeper, "health", || {
            calls.set(calls.get() + 1);
            async { Err("down".to_string()) }
        }));

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
        assert!(sleeper.delays.borrow().is_empty());
    }
}
