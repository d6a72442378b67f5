use std::sync::Arc;

use crate::core::config::Config;
use crate::core::context::build_context;
use crate::core::enhance::enhance_story;
use crate::core::generation::{GenerationError, TextGenerator};
use crate::core::llm::LlmClient;
use crate::core::model::{GeneratedStory, PhotoRef, StoryRequest};
use crate::core::prompt::compose;
use crate::core::retry::RetryingGenerator;
use crate::core::story::assemble_story;
use crate::core::title::generate_title;

/// Entry points of the narrative pipeline. Stateless apart from the shared generator.
#[derive(Clone)]
pub struct Narrator {
    llm: Arc<dyn TextGenerator>,
}

impl Narrator {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    /// LLM client from config, wrapped in the configured retry policy.
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let client = LlmClient::new(config.llm.clone())?;
        Ok(Self::new(Arc::new(RetryingGenerator::new(client, config.retry_policy()))))
    }

    pub async fn generate_story(&self, request: &StoryRequest) -> Result<GeneratedStory, GenerationError> {
        let trip = request.trip_context.as_ref();
        let settings = &request.settings;

        let context = build_context(trip, &request.photos, settings.language);
        let generation = compose(&context, settings, request.custom_prompt.as_deref());

        log::info!(
            "Generating {:?}/{:?}/{:?} story for '{}' ({} photos)",
            settings.style,
            settings.mood,
            settings.length,
            trip.map(|t| t.title.as_str()).unwrap_or("-"),
            request.photos.len()
        );

        let raw = match self.llm.generate(&generation).await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Story generation failed: {}", e);
                return Err(e);
            }
        };

        let story = assemble_story(trip, &request.photos, settings, &raw);
        log::info!("Story '{}' ready: {} words, {} highlights", story.title, story.word_count, story.highlights.len());
        Ok(story)
    }

    pub async fn enhance_story(&self, body: &str, photos: &[PhotoRef]) -> String {
        enhance_story(self.llm.as_ref(), body, photos).await
    }

    pub async fn generate_title(&self, body: &str, fallback: Option<&str>) -> String {
        generate_title(self.llm.as_ref(), body, fallback).await
    }
}
