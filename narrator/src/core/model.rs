use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Narrative,
    Diary,
    Blog,
    Social,
    Formal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Adventurous,
    Romantic,
    Peaceful,
    Exciting,
    Nostalgic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

// Unrecognized lengths fall back to medium instead of failing the request.
impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "short" => Length::Short,
            "medium" => Length::Medium,
            "long" => Length::Long,
            other => {
                log::warn!("Unknown story length '{}', using medium", other);
                Length::Medium
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    French,
    English,
}

/// User-chosen configuration for a single generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorySettings {
    pub style: Style,
    pub mood: Mood,
    pub length: Length,
    pub include_photos: bool,
    pub include_map: bool,
    pub include_stats: bool,
    pub focus_points: Vec<String>,
    pub personal_touch: bool,
    pub language: Language,
}

impl Default for StorySettings {
    fn default() -> Self {
        Self {
            style: Style::default(),
            mood: Mood::default(),
            length: Length::default(),
            include_photos: true,
            include_map: false,
            include_stats: false,
            focus_points: Vec::new(),
            personal_touch: false,
            language: Language::default(),
        }
    }
}

/// Trip facts supplied by the album/trip store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripContext {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRef {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
}

impl PhotoRef {
    /// Caption if present, otherwise the uploaded file name.
    pub fn label(&self) -> Option<&str> {
        non_blank(self.caption.as_deref()).or_else(|| non_blank(self.original_name.as_deref()))
    }
}

/// Photo summary attached to a story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPhoto {
    pub id: String,
    pub url: String,
    pub caption: String,
    pub location: Option<String>,
}

impl From<&PhotoRef> for StoryPhoto {
    fn from(photo: &PhotoRef) -> Self {
        Self {
            id: photo.id.clone(),
            url: photo.url.clone(),
            caption: photo.label().unwrap_or_default().to_string(),
            location: photo.location.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedStory {
    pub id: String,
    pub title: String,
    pub content: String,
    pub settings: StorySettings,
    pub generated_at: DateTime<Utc>,
    pub word_count: usize,
    /// Minutes, at 200 words per minute.
    pub reading_time: usize,
    pub highlights: Vec<String>,
    pub photos: Vec<StoryPhoto>,
}

/// Input of the story generation entry point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    #[serde(default)]
    pub trip_context: Option<TripContext>,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
    #[serde(default)]
    pub settings: StorySettings,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceRequest {
    pub body: String,
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRequest {
    pub body: String,
    #[serde(default)]
    pub fallback_title: Option<String>,
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
