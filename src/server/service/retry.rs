//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing database operations with automatic
//! retry logic and exponential backoff. It integrates with the error system to determine
//! which errors are retryable.

use std::time::Duration;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// Provides exponential backoff retry behavior with configurable max attempts and initial
/// backoff duration. The generic state type `T` persists between retry attempts so an
/// operation can remember work it already completed; most services use `()`.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let mut ctx: RetryContext<()> = RetryContext::new();
/// let db = db.clone();
///
/// ctx.execute_with_retry("get applicant profile for user ID abc", |_| {
///     let db = db.clone();
///
///     Box::pin(async move {
///         let profile_repo = ProfileRepository::new(&db);
///
///         Ok(profile_repo.get("abc").await?)
///     })
/// }).await?;
/// ```
pub struct RetryContext<T> {
    /// State carried between attempts
    state: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in milliseconds (doubles with each retry)
    initial_backoff_ms: u64,
}

impl<T> RetryContext<T>
where
    T: Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_MS: u64 = 1000;

    /// Creates a new retry context with 3 max attempts and 1 second initial backoff.
    pub fn new() -> Self {
        Self::with_config(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INITIAL_BACKOFF_MS)
    }

    /// Creates a retry context with custom attempt limit and initial backoff.
    ///
    /// # Arguments
    /// - `max_attempts` - Total attempts including the first, clamped to at least 1
    /// - `initial_backoff_ms` - Delay before the first retry, doubled for each further retry
    pub fn with_config(max_attempts: u32, initial_backoff_ms: u64) -> Self {
        Self {
            state: T::default(),
            max_attempts: max_attempts.max(1),
            initial_backoff_ms,
        }
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Runs the provided async operation up to `max_attempts` times, retrying on transient
    /// failures. Errors are evaluated using `to_retry_strategy()` to determine if they are
    /// retryable or permanent failures.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "review applicant abc")
    /// - `operation` - Async function that receives the mutable retry state and returns `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.state).await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff_ms = self.initial_backoff_ms * 2_u64.pow(attempt_count - 1);
                        let backoff = Duration::from_millis(backoff_ms);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl<T: Default> Default for RetryContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
