//! Prompt composition for the first-pass story generation.
//!
//! The system instruction depends only on [`StorySettings`]; trip facts go in
//! the user prompt. Every enum axis maps to its wording through one lookup
//! function so the full vocabulary is visible in one place.

use crate::core::generation::GenerationRequest;
use crate::core::model::{non_blank, Language, Length, Mood, StorySettings, Style};

pub const STORY_TEMPERATURE: f32 = 0.7;

const PREAMBLE: &str = "Voici les informations sur le voyage à raconter :";
const CLOSING: &str = "Raconte maintenant ce voyage sous la forme d'une histoire captivante, en respectant le format demandé.";

fn style_description(style: Style) -> &'static str {
    match style {
        Style::Narrative => "un récit narratif immersif, raconté comme une histoire avec un début, un milieu et une fin",
        Style::Diary => "une page de journal intime, écrite à la première personne, jour après jour",
        Style::Blog => "un article de blog de voyage vivant, avec des conseils pratiques et des anecdotes",
        Style::Social => "un post pour les réseaux sociaux, court, rythmé et engageant",
        Style::Formal => "un compte rendu de voyage élégant et soigné, au style littéraire",
    }
}

fn mood_description(mood: Mood) -> &'static str {
    match mood {
        Mood::Adventurous => "aventureux, plein d'énergie et de découvertes",
        Mood::Romantic => "romantique, tendre et poétique",
        Mood::Peaceful => "paisible, contemplatif et serein",
        Mood::Exciting => "palpitant, dynamique et enthousiaste",
        Mood::Nostalgic => "nostalgique, empreint de souvenirs et d'émotion",
    }
}

fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::French => "Écris l'histoire en français.",
        Language::English => "Write the story in English.",
    }
}

impl Length {
    /// Word-count target quoted verbatim in the system instruction.
    pub fn word_band(self) -> &'static str {
        match self {
            Length::Short => "200 à 300 mots",
            Length::Medium => "400 à 600 mots",
            Length::Long => "800 à 1200 mots",
        }
    }

    /// Output ceiling handed to the generation service.
    pub fn max_tokens(self) -> u32 {
        match self {
            Length::Short => 400,
            Length::Medium => 800,
            Length::Long => 1500,
        }
    }
}

pub fn build_system_instruction(settings: &StorySettings) -> String {
    let mut prompt = String::new();

    prompt.push_str("Tu es un écrivain de voyage talentueux qui transforme des souvenirs en histoires.\n");
    prompt.push_str(&format!("Style : {}.\n", style_description(settings.style)));
    prompt.push_str(&format!("Ton : {}.\n", mood_description(settings.mood)));
    prompt.push_str(&format!("Longueur : environ {}.\n", settings.length.word_band()));
    if settings.personal_touch {
        prompt.push_str("Ajoute une touche personnelle : émotions, impressions et réflexions du voyageur.\n");
    }
    prompt.push_str(language_instruction(settings.language));
    prompt.push('\n');
    prompt.push_str(
        "Format : la première ligne contient uniquement le titre de l'histoire, sans point final. \
         Le récit commence à la ligne suivante. N'utilise pas de Markdown.",
    );

    prompt
}

pub fn build_user_prompt(context: &str, settings: &StorySettings, custom_prompt: Option<&str>) -> String {
    let mut sections = vec![PREAMBLE.to_string()];

    if !context.trim().is_empty() {
        sections.push(context.trim().to_string());
    }

    let focus: Vec<&str> = settings
        .focus_points
        .iter()
        .filter_map(|p| non_blank(Some(p.as_str())))
        .collect();
    if !focus.is_empty() {
        sections.push(format!("Points à mettre en avant : {}", focus.join(", ")));
    }

    if let Some(custom) = non_blank(custom_prompt) {
        sections.push(format!("Instructions supplémentaires : {}", custom));
    }

    sections.push(CLOSING.to_string());
    sections.join("\n\n")
}

/// Full request for the first generation pass.
pub fn compose(context: &str, settings: &StorySettings, custom_prompt: Option<&str>) -> GenerationRequest {
    GenerationRequest {
        system: build_system_instruction(settings),
        user: build_user_prompt(context, settings, custom_prompt),
        max_tokens: settings.length.max_tokens(),
        temperature: STORY_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [Style; 5] = [Style::Narrative, Style::Diary, Style::Blog, Style::Social, Style::Formal];
    const MOODS: [Mood; 5] = [Mood::Adventurous, Mood::Romantic, Mood::Peaceful, Mood::Exciting, Mood::Nostalgic];
    const LENGTHS: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    #[test]
    fn system_instruction_always_quotes_the_length_band() {
        for style in STYLES {
            for mood in MOODS {
                for length in LENGTHS {
                    for personal_touch in [false, true] {
                        let settings = StorySettings { style, mood, length, personal_touch, ..Default::default() };
                        let system = build_system_instruction(&settings);
                        assert!(system.contains(length.word_band()), "{:?}/{:?}/{:?}", style, mood, length);
                        assert!(system.contains(style_description(style)));
                        assert!(system.contains(mood_description(mood)));
                    }
                }
            }
        }
    }

    #[test]
    fn bands_and_ceilings() {
        assert_eq!(Length::Short.word_band(), "200 à 300 mots");
        assert_eq!(Length::Medium.word_band(), "400 à 600 mots");
        assert_eq!(Length::Long.word_band(), "800 à 1200 mots");
        assert_eq!(Length::Short.max_tokens(), 400);
        assert_eq!(Length::Medium.max_tokens(), 800);
        assert_eq!(Length::Long.max_tokens(), 1500);
        assert_eq!(Length::default().max_tokens(), 800);
    }

    #[test]
    fn personal_touch_and_language_change_the_instruction() {
        let plain = build_system_instruction(&StorySettings::default());
        assert!(!plain.contains("touche personnelle"));
        assert!(plain.contains("Écris l'histoire en français."));

        let settings = StorySettings { personal_touch: true, language: Language::English, ..Default::default() };
        let system = build_system_instruction(&settings);
        assert!(system.contains("touche personnelle"));
        assert!(system.contains("Write the story in English."));
    }

    #[test]
    fn user_prompt_sections_in_order() {
        let settings = StorySettings {
            focus_points: vec!["la gastronomie".into(), "  ".into(), "les temples".into()],
            ..Default::default()
        };
        let user = build_user_prompt("Voyage : Kyoto", &settings, Some("Parle du train"));
        assert_eq!(
            user,
            format!(
                "{}\n\nVoyage : Kyoto\n\nPoints à mettre en avant : la gastronomie, les temples\n\n\
                 Instructions supplémentaires : Parle du train\n\n{}",
                PREAMBLE, CLOSING
            )
        );
    }

    #[test]
    fn omitted_sections_leave_no_gaps() {
        let user = build_user_prompt("", &StorySettings::default(), Some("   "));
        assert_eq!(user, format!("{}\n\n{}", PREAMBLE, CLOSING));
        assert!(!user.contains("\n\n\n"));
    }

    #[test]
    fn system_instruction_ignores_trip_data() {
        let settings = StorySettings::default();
        let a = compose("Voyage : Tokyo", &settings, None);
        let b = compose("Voyage : Lima", &settings, Some("plus court"));
        assert_eq!(a.system, b.system);
        assert_ne!(a.user, b.user);
    }

    #[test]
    fn unrecognized_length_composes_with_default_ceiling() {
        let settings: StorySettings = serde_json::from_str(r#"{"length":"epic"}"#).unwrap();
        let request = compose("ctx", &settings, None);
        assert_eq!(request.max_tokens, 800);
        assert!(request.system.contains("400 à 600 mots"));
    }

    #[test]
    fn compose_carries_fixed_generation_parameters() {
        let settings = StorySettings { length: Length::Long, ..Default::default() };
        let request = compose("ctx", &settings, None);
        assert_eq!(request.max_tokens, 1500);
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
    }
}
