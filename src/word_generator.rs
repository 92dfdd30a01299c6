use crate::language::{Language, PhrasePool};
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// Default minimum number of words in a generated practice text
pub const DEFAULT_MIN_WORDS: usize = 300;

/// Largest accepted minimum word count; larger requests are clamped
pub const MAX_MIN_WORDS: usize = 10_000;

/// Normalize a requested minimum word count into `1..=MAX_MIN_WORDS`
pub fn clamp_min_words(min_words: usize) -> usize {
    min_words.clamp(1, MAX_MIN_WORDS)
}

/// Configuration for practice text generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordGenConfig {
    pub language: Language,
    pub min_words: usize,
}

impl Default for WordGenConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

/// The target words of one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeText {
    words: Vec<String>,
}

impl PracticeText {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, idx: usize) -> Option<&str> {
        self.words.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<&str> for PracticeText {
    fn from(text: &str) -> Self {
        Self::new(text.split_whitespace().map(str::to_string).collect())
    }
}

impl fmt::Display for PracticeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.iter().join(" "))
    }
}

/// Handles practice text generation from a phrase pool
pub struct WordGenerator<'a> {
    pool: &'a PhrasePool,
    config: WordGenConfig,
}

impl<'a> WordGenerator<'a> {
    pub fn new(pool: &'a PhrasePool, config: WordGenConfig) -> Self {
        Self { pool, config }
    }

    /// Generate a practice text of at least `min_words` words, unless the
    /// pool for the language is empty. `min_words` is capped at [`MAX_MIN_WORDS`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> PracticeText {
        let min_words = self.config.min_words.min(MAX_MIN_WORDS);
        PracticeText::new(self.pool.sample_words(self.config.language, min_words, rng))
    }
}

/// Convenience wrapper around [`WordGenerator`] returning the joined text
pub fn generate_text<R: Rng + ?Sized>(
    pool: &PhrasePool,
    language: Language,
    min_words: usize,
    rng: &mut R,
) -> String {
    WordGenerator::new(
        pool,
        WordGenConfig {
            language,
            min_words,
        },
    )
    .generate(rng)
    .to_string()
}
