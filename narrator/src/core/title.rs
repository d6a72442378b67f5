use crate::core::generation::{GenerationRequest, TextGenerator};
use crate::core::model::non_blank;
use crate::core::parser::{clean_title, DEFAULT_TITLE};

const TITLE_SYSTEM: &str = "Tu es un expert en titres accrocheurs pour des récits de voyage. \
Propose un seul titre court (moins de 10 mots), évocateur et sans point final. \
Réponds uniquement avec le titre, sans guillemets ni explication.";

pub const TITLE_TEMPERATURE: f32 = 0.8;
pub const TITLE_MAX_TOKENS: u32 = 50;
const EXCERPT_CHARS: usize = 500;

pub fn build_title_request(body: &str) -> GenerationRequest {
    let excerpt: String = body.trim().chars().take(EXCERPT_CHARS).collect();
    GenerationRequest {
        system: TITLE_SYSTEM.to_string(),
        user: format!("Trouve un titre pour ce récit de voyage :\n\n{}", excerpt),
        max_tokens: TITLE_MAX_TOKENS,
        temperature: TITLE_TEMPERATURE,
    }
}

/// Derives a title for `body`. Never fails: degrades to `fallback`, then [`DEFAULT_TITLE`].
pub async fn generate_title(generator: &dyn TextGenerator, body: &str, fallback: Option<&str>) -> String {
    let fallback = non_blank(fallback).unwrap_or(DEFAULT_TITLE).to_string();

    let request = build_title_request(body);
    match generator.generate(&request).await {
        Ok(text) => {
            let first_line = text.trim().lines().next().unwrap_or_default();
            let title = clean_title(first_line);
            if title.is_empty() {
                log::warn!("Title generation returned nothing usable, keeping '{}'", fallback);
                fallback
            } else {
                title
            }
        }
        Err(e) => {
            log::warn!("Title generation failed: {}. Keeping '{}'", e, fallback);
            fallback
        }
    }
}
