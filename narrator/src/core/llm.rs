use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::config::LlmConfig;
use crate::core::generation::{GenerationError, GenerationRequest, TextGenerator};

/// OpenAI-compatible chat completion client.
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GenerationError::Connection(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn request_body(&self, request: &GenerationRequest) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": request.system
                },
                {
                    "role": "user",
                    "content": request.user
                }
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": false
        })
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let body = self.request_body(request);

        // Assume api_url is like "http://localhost:1234/v1"
        let url = format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'));

        log::info!("Sending LLM request to {} (max_tokens={}, temperature={})", url, request.max_tokens, request.temperature);
        log::debug!("LLM request body: {}", body);

        let mut builder = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let res = match builder.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                log::warn!("LLM request to {} timed out", url);
                return Err(GenerationError::Timeout(Duration::from_secs(self.config.timeout_secs)));
            }
            Err(e) => {
                log::warn!("Failed to connect to LLM at {}: {}", url, e);
                return Err(GenerationError::Connection(e.to_string()));
            }
        };

        let status = res.status();
        if !status.is_success() {
            let error_text = res.text().await.unwrap_or_default();
            log::error!("LLM Error {}: {}", status, error_text);
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(GenerationError::RateLimited(error_text));
            }
            return Err(GenerationError::Service { status: status.as_u16(), message: error_text });
        }

        let response_json: Value = match res.json().await {
            Ok(v) => v,
            Err(e) if e.is_timeout() => {
                return Err(GenerationError::Timeout(Duration::from_secs(self.config.timeout_secs)));
            }
            Err(e) => return Err(GenerationError::InvalidResponse(e.to_string())),
        };
        log::debug!("Received LLM response: {}", response_json);

        extract_content(&response_json)
    }
}

/// Pulls `choices[0].message.content` out of a chat completion.
fn extract_content(response_json: &Value) -> Result<String, GenerationError> {
    let mut content = response_json["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            log::warn!("Unexpected LLM response format: {:?}", response_json);
            GenerationError::InvalidResponse("missing choices[0].message.content".into())
        })?;

    // Strip <think> tags if present
    if let Some(idx) = content.find("</think>") {
        content = content[idx + "</think>".len()..].to_string();
    }

    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(GenerationError::InvalidResponse("empty completion".into()));
    }
    Ok(content)
}
