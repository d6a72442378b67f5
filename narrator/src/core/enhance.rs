use crate::core::generation::{GenerationRequest, TextGenerator};
use crate::core::model::{non_blank, PhotoRef};

pub const ENHANCE_TEMPERATURE: f32 = 0.6;
pub const ENHANCE_MAX_TOKENS: u32 = 2000;
const MAX_ENHANCE_PHOTOS: usize = 5;

const ENHANCE_SYSTEM: &str = "Tu es un écrivain de voyage qui enrichit des récits existants. \
Intègre naturellement les détails des photos dans le texte, sans changer le ton ni la langue du récit \
et sans ajouter de titre. Réponds uniquement avec le récit enrichi.";

fn describe_photo(photo: &PhotoRef) -> String {
    let label = photo.label().unwrap_or("sans légende");
    match non_blank(photo.location.as_deref()) {
        Some(location) => format!("Photo: {} à {}", label, location),
        None => format!("Photo: {}", label),
    }
}

pub fn build_enhance_request(body: &str, photos: &[PhotoRef]) -> GenerationRequest {
    let details = photos
        .iter()
        .take(MAX_ENHANCE_PHOTOS)
        .map(describe_photo)
        .collect::<Vec<_>>()
        .join("\n");

    GenerationRequest {
        system: ENHANCE_SYSTEM.to_string(),
        user: format!(
            "Voici un récit de voyage :\n\n{}\n\n\
            Voici des détails sur les photos du voyage :\n{}\n\n\
            Réécris le récit en y intégrant naturellement ces détails.",
            body.trim(),
            details
        ),
        max_tokens: ENHANCE_MAX_TOKENS,
        temperature: ENHANCE_TEMPERATURE,
    }
}

/// Weaves photo details into an existing body. Never fails: returns `body` unchanged on any problem.
pub async fn enhance_story(generator: &dyn TextGenerator, body: &str, photos: &[PhotoRef]) -> String {
    if photos.is_empty() {
        return body.to_string();
    }

    let request = build_enhance_request(body, photos);
    match generator.generate(&request).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            log::warn!("Enhancement returned empty text, keeping original story");
            body.to_string()
        }
        Err(e) => {
            log::warn!("Story enhancement failed: {}. Keeping original story", e);
            body.to_string()
        }
    }
}
