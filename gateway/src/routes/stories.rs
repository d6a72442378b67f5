use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use narrator::core::generation::GenerationError;
use narrator::core::model::{EnhanceRequest, GeneratedStory, StoryRequest, TitleRequest};
use serde::Serialize;
use serde_json::json;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct TitleResponse {
    pub title: String,
}

/// Generation failure surfaced to the HTTP caller.
#[derive(Debug)]
pub struct ApiError(GenerationError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GenerationError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn generate_story(
    State(state): State<AppState>,
    Json(payload): Json<StoryRequest>,
) -> Result<Json<GeneratedStory>, ApiError> {
    match state.narrator.generate_story(&payload).await {
        Ok(story) => Ok(Json(story)),
        Err(e) => {
            tracing::error!("story generation failed: {}", e);
            Err(ApiError(e))
        }
    }
}

pub async fn enhance_story(
    State(state): State<AppState>,
    Json(payload): Json<EnhanceRequest>,
) -> Json<EnhanceResponse> {
    let content = state.narrator.enhance_story(&payload.body, &payload.photos).await;
    Json(EnhanceResponse { content })
}

pub async fn generate_title(
    State(state): State<AppState>,
    Json(payload): Json<TitleRequest>,
) -> Json<TitleResponse> {
    let title = state
        .narrator
        .generate_title(&payload.body, payload.fallback_title.as_deref())
        .await;
    Json(TitleResponse { title })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use narrator::core::generation::{GenerationRequest, TextGenerator};
    use narrator::core::model::{PhotoRef, StorySettings, TripContext};
    use narrator::core::narrator::Narrator;
    use std::sync::Arc;
    use std::time::Duration;

    struct Reply(Result<&'static str, fn() -> GenerationError>);

    #[async_trait]
    impl TextGenerator for Reply {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    fn state(reply: Reply) -> AppState {
        AppState { narrator: Narrator::new(Arc::new(reply)) }
    }

    fn story_request(include_photos: bool) -> StoryRequest {
        StoryRequest {
            trip_context: Some(TripContext { title: "Lisbonne".into(), ..Default::default() }),
            photos: vec![PhotoRef { id: "p1".into(), url: "/p1.jpg".into(), ..Default::default() }],
            settings: StorySettings { include_photos, ..Default::default() },
            custom_prompt: None,
        }
    }

    #[tokio::test]
    async fn generate_returns_story() {
        let state = state(Reply(Ok("Fado et tramways\nUne soirée magique dans l'Alfama.")));
        let Json(story) = generate_story(State(state), Json(story_request(true))).await.unwrap();
        assert_eq!(story.title, "Fado et tramways");
        assert_eq!(story.word_count, 5);
        assert_eq!(story.photos.len(), 1);
        assert_eq!(story.highlights.len(), 1);
    }

    #[tokio::test]
    async fn generate_maps_failures_to_gateway_errors() {
        let state_down = state(Reply(Err(|| GenerationError::Connection("down".into()))));
        let err = generate_story(State(state_down), Json(story_request(false))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);

        let state_slow = state(Reply(Err(|| GenerationError::Timeout(Duration::from_secs(30)))));
        let err = generate_story(State(state_slow), Json(story_request(false))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[tokio::test]
    async fn enhance_degrades_to_original_body() {
        let state = state(Reply(Err(|| GenerationError::RateLimited("quota".into()))));
        let payload = EnhanceRequest {
            body: "Le récit.".into(),
            photos: vec![PhotoRef { id: "p".into(), url: "/p.jpg".into(), caption: Some("Tram 28".into()), ..Default::default() }],
        };
        let Json(response) = enhance_story(State(state), Json(payload)).await;
        assert_eq!(response.content, "Le récit.");
    }

    #[tokio::test]
    async fn title_uses_generation_or_fallback() {
        let ok = state(Reply(Ok("Lisbonne au crépuscule")));
        let payload = TitleRequest { body: "Le récit.".into(), fallback_title: None };
        let Json(response) = generate_title(State(ok), Json(payload)).await;
        assert_eq!(response.title, "Lisbonne au crépuscule");

        let down = state(Reply(Err(|| GenerationError::Connection("down".into()))));
        let payload = TitleRequest { body: "Le récit.".into(), fallback_title: Some("Lisbonne".into()) };
        let Json(response) = generate_title(State(down), Json(payload)).await;
        assert_eq!(response.title, "Lisbonne");
    }
}
