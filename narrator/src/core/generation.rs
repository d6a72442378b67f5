use async_trait::async_trait;
use thiserror::Error;

/// One call to the text-generation service.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system: String,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Generation service unreachable: {0}")]
    Connection(String),

    #[error("Generation service rate limited: {0}")]
    RateLimited(String),

    #[error("Generation service error {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Unusable generation response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// Whether another attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Connection(_) | Self::RateLimited(_) => true,
            Self::Service { status, .. } => *status >= 500,
            Self::InvalidResponse(_) => false,
        }
    }
}

/// The single seam to the external text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}
