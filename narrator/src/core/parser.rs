use regex::Regex;
use std::sync::LazyLock;

/// Used when neither the model nor the trip supplies a title.
pub const DEFAULT_TITLE: &str = "Mon voyage";

/// Title candidates at or beyond this many characters are treated as prose.
const MAX_TITLE_CHARS: usize = 100;

static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:titre|title)\s*:\s*").expect("valid title prefix pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStory {
    pub title: String,
    pub body: String,
}

/// Splits raw model output into a title line and a body.
///
/// The first non-blank line becomes the title when it is short and holds no
/// period. A story that opens with a short period-free sentence and no title
/// line is therefore misread as titled; that ambiguity is accepted.
pub fn parse_response(raw: &str, fallback_title: &str) -> ParsedStory {
    let fallback = if fallback_title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        fallback_title.trim().to_string()
    };

    let trimmed = raw.trim();
    let (first_line, rest) = match trimmed.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (trimmed, ""),
    };

    if looks_like_title(first_line) {
        let title = clean_title(first_line);
        if !title.is_empty() {
            return ParsedStory { title, body: rest.trim().to_string() };
        }
    }

    ParsedStory { title: fallback, body: trimmed.to_string() }
}

fn looks_like_title(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.chars().count() < MAX_TITLE_CHARS && !line.contains('.')
}

/// Removes label prefixes, markdown emphasis and wrapping quotes from a title.
pub fn clean_title(raw: &str) -> String {
    let title = raw.trim().trim_start_matches('#').replace("**", "").replace("__", "");
    let title = strip_wrapping(&title);
    let title = TITLE_PREFIX.replace(title, "");
    strip_wrapping(&title).to_string()
}

fn strip_wrapping(text: &str) -> &str {
    text.trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '«' | '»' | '“' | '”' | '*' | '_'))
        .trim()
}
