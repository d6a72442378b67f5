use async_trait::async_trait;
use std::time::Duration;

use crate::core::generation::{GenerationError, GenerationRequest, TextGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Doubled after every failed attempt.
    pub initial_backoff: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            attempt_timeout: Duration::from_secs(30),
        }
    }
}

/// Wraps a generator with per-attempt timeouts and backoff on transient failures.
pub struct RetryingGenerator<G> {
    inner: G,
    policy: RetryPolicy,
}

impl<G: TextGenerator> RetryingGenerator<G> {
    pub fn new(inner: G, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn attempt(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        match tokio::time::timeout(self.policy.attempt_timeout, self.inner.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout(self.policy.attempt_timeout)),
        }
    }
}

#[async_trait]
impl<G: TextGenerator> TextGenerator for RetryingGenerator<G> {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut backoff = self.policy.initial_backoff;
        let mut attempts = 0;

        loop {
            attempts += 1;
            match self.attempt(request).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempts < max_attempts => {
                    log::warn!("Generation attempt {}/{} failed: {}. Retrying in {:?}", attempts, max_attempts, e, backoff);
                    tokio::time::sleep(backoff).await;
                    backoff = backoff.saturating_mul(2);
                }
                Err(e) => {
                    if attempts > 1 {
                        log::error!("Generation failed after {} attempts: {}", attempts, e);
                    }
                    return Err(e);
                }
            }
        }
    }
}
