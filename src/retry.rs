// src/retry.rs

use std::future::Future;
use std::time::Duration;

use crate::providers::ProviderError;

pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 2000;

/// Runs a provider call, retrying only overload failures with a fixed
/// delay. Anything else propagates on the first attempt; a still-failing
/// overload propagates after the last attempt.
pub async fn with_retries<T, F, Fut>(mut op: F) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < MAX_ATTEMPTS => {
                eprintln!(
                    "[retry] Model overloaded, retrying... ({} attempts left)",
                    MAX_ATTEMPTS - attempt
                );
                tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS)).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn overloaded() -> ProviderError {
        ProviderError::Overloaded {
            status: 503,
            body: "The model is overloaded".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_three_attempts_on_persistent_overload() {
        let calls = AtomicU32::new(0);
        let result: Result<String, _> = with_retries(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(overloaded()) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(matches!(result, Err(ProviderError::Overloaded { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_on_third_attempt_after_two_overloads() {
        let calls = AtomicU32::new(0);
        let result = with_retries(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(overloaded())
                } else {
                    Ok("done".to_string())
                }
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.unwrap(), "done");
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_error_fails_on_first_attempt() {
        let calls = AtomicU32::new(0);
        let result: Result<String, _> = with_retries(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(ProviderError::Api {
                    status: 400,
                    body: "bad request".to_string(),
                })
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(ProviderError::Api { status: 400, .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn missing_credential_is_never_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<String, _> = with_retries(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(ProviderError::MissingCredential("API Key")) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(ProviderError::MissingCredential(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_makes_one_attempt() {
        let calls = AtomicU32::new(0);
        let result = with_retries(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(42u32) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.unwrap(), 42);
    }
}
