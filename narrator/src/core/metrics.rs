pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoryMetrics {
    pub word_count: usize,
    pub reading_time: usize,
}

pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Minutes needed to read `words` words, rounded up.
pub fn reading_time(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

pub fn measure(body: &str) -> StoryMetrics {
    let word_count = word_count(body);
    StoryMetrics { word_count, reading_time: reading_time(word_count) }
}
