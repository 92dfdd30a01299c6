use super::core::{Language, PhrasePool};
use rand::{seq::SliceRandom, Rng};

impl PhrasePool {
    /// Pick one sentence of `language` uniformly at random, with replacement.
    /// Returns `None` when the language has no sentences.
    pub fn random_sentence<R: Rng + ?Sized>(
        &self,
        language: Language,
        rng: &mut R,
    ) -> Option<&str> {
        self.sentences(language).choose(rng).map(String::as_str)
    }

    /// Sample sentences until at least `min_words` words have accumulated.
    ///
    /// Stops early on an empty pool or a sentence without words, so the
    /// result may hold fewer than `min_words` words in that case.
    pub fn sample_words<R: Rng + ?Sized>(
        &self,
        language: Language,
        min_words: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut words = Vec::new();
        while words.len() < min_words {
            let Some(sentence) = self.random_sentence(language, rng) else {
                break;
            };
            let before = words.len();
            words.extend(sentence.split_whitespace().map(str::to_string));
            if words.len() == before {
                break;
            }
        }
        words
    }
}
