use crate::core::highlights::extract_highlights;
use crate::core::metrics::measure;
use crate::core::model::{non_blank, GeneratedStory, PhotoRef, StoryPhoto, StorySettings, TripContext};
use crate::core::parser::{parse_response, DEFAULT_TITLE};

/// Photos attached to a story, at most.
pub const MAX_STORY_PHOTOS: usize = 6;

pub fn fallback_title(trip: Option<&TripContext>) -> &str {
    trip.and_then(|t| non_blank(Some(t.title.as_str()))).unwrap_or(DEFAULT_TITLE)
}

/// Turns a raw generation into the story record.
pub fn assemble_story(
    trip: Option<&TripContext>,
    photos: &[PhotoRef],
    settings: &StorySettings,
    raw: &str,
) -> GeneratedStory {
    let parsed = parse_response(raw, fallback_title(trip));
    let metrics = measure(&parsed.body);
    let highlights = extract_highlights(&parsed.body);

    let photos = if settings.include_photos {
        photos.iter().take(MAX_STORY_PHOTOS).map(StoryPhoto::from).collect()
    } else {
        Vec::new()
    };

    GeneratedStory {
        id: uuid::Uuid::new_v4().to_string(),
        title: parsed.title,
        content: parsed.body,
        settings: settings.clone(),
        generated_at: chrono::Utc::now(),
        word_count: metrics.word_count,
        reading_time: metrics.reading_time,
        highlights,
        photos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<PhotoRef> {
        (0..n)
            .map(|i| PhotoRef {
                id: format!("p{}", i),
                url: format!("/p{}.jpg", i),
                caption: Some(format!("Photo {}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn no_photos_when_disabled() {
        let settings = StorySettings { include_photos: false, ..Default::default() };
        let story = assemble_story(None, &photos(12), &settings, "Titre\nCorps.");
        assert!(story.photos.is_empty());
    }

    #[test]
    fn attaches_at_most_six_photos_in_order() {
        let story = assemble_story(None, &photos(12), &StorySettings::default(), "Titre\nCorps.");
        assert_eq!(story.photos.len(), MAX_STORY_PHOTOS);
        assert_eq!(story.photos[0].id, "p0");
        assert_eq!(story.photos[5].caption, "Photo 5");
    }

    #[test]
    fn metrics_and_highlights_follow_the_parsed_body() {
        let raw = "Lumières de Tokyo\nC'était un voyage magnifique. Il faisait froid.";
        let story = assemble_story(None, &[], &StorySettings::default(), raw);
        assert_eq!(story.title, "Lumières de Tokyo");
        assert_eq!(story.content, "C'était un voyage magnifique. Il faisait froid.");
        assert_eq!(story.word_count, 7);
        assert_eq!(story.reading_time, 1);
        assert_eq!(story.highlights, vec!["C'était un voyage magnifique.".to_string()]);
    }

    #[test]
    fn title_falls_back_to_trip_then_default() {
        let trip = TripContext { title: "Tokyo".into(), ..Default::default() };
        let story = assemble_story(Some(&trip), &[], &StorySettings::default(), "Une phrase.");
        assert_eq!(story.title, "Tokyo");

        let untitled = TripContext { title: "  ".into(), ..Default::default() };
        let story = assemble_story(Some(&untitled), &[], &StorySettings::default(), "");
        assert_eq!(story.title, DEFAULT_TITLE);
        assert_eq!(story.word_count, 0);
        assert!(story.highlights.is_empty());
    }

    #[test]
    fn each_story_gets_a_fresh_id() {
        let a = assemble_story(None, &[], &StorySettings::default(), "x");
        let b = assemble_story(None, &[], &StorySettings::default(), "x");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_camel_case() {
        let story = assemble_story(None, &photos(1), &StorySettings::default(), "Titre\nCorps.");
        let json = serde_json::to_value(&story).unwrap();
        assert!(json.get("wordCount").is_some());
        assert!(json.get("readingTime").is_some());
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["settings"]["includePhotos"], true);
        assert_eq!(json["photos"][0]["caption"], "Photo 0");
    }
}
