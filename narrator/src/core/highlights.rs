use regex::Regex;
use std::sync::LazyLock;

pub const MAX_HIGHLIGHTS: usize = 5;
const MIN_SENTENCE_CHARS: usize = 10;
const MAX_HIGHLIGHT_CHARS: usize = 150;

/// Superlative and emotional vocabulary, French first.
const VOCABULARY: &[&str] = &[
    "incroyable", "incroyables", "magnifique", "magnifiques", "extraordinaire", "extraordinaires",
    "inoubliable", "inoubliables", "merveilleux", "merveilleuse", "merveilleuses", "superbe", "superbes",
    "fantastique", "fantastiques", "époustouflant", "époustouflante", "époustouflants", "époustouflantes",
    "splendide", "splendides", "magique", "magiques", "exceptionnel", "exceptionnelle", "sublime", "sublimes",
    "émerveillé", "émerveillée", "émerveillés", "émerveillement", "féerique",
    "meilleur", "meilleure", "meilleurs", "meilleures", "plus beau", "plus belle", "plus beaux", "plus belles",
    "amazing", "incredible", "beautiful", "unforgettable", "breathtaking", "wonderful", "magical",
    "stunning", "spectacular", "best",
];

static VOCABULARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = VOCABULARY.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("valid vocabulary pattern")
});

/// Sentence-like units, terminal punctuation kept.
fn sentences(body: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        let is_end = matches!(c, '.' | '!' | '?');
        let next_is_end = matches!(chars.peek(), Some(&('.' | '!' | '?')));
        if is_end && !next_is_end {
            out.push(current.trim().to_string());
            current.clear();
        }
    }
    if !current.trim().is_empty() {
        out.push(current.trim().to_string());
    }

    out.retain(|s| text_len(s) >= MIN_SENTENCE_CHARS);
    out
}

/// Length of a sentence without its closing punctuation.
fn text_len(sentence: &str) -> usize {
    sentence.trim_end_matches(['.', '!', '?']).trim().chars().count()
}

/// Emotionally salient sentences, in body order, at most [`MAX_HIGHLIGHTS`].
pub fn extract_highlights(body: &str) -> Vec<String> {
    sentences(body)
        .into_iter()
        .filter(|s| text_len(s) < MAX_HIGHLIGHT_CHARS && VOCABULARY_PATTERN.is_match(s))
        .take(MAX_HIGHLIGHTS)
        .collect()
}
