use crate::{
    history::{CompletedResult, History},
    language::{Language, PhrasePool},
    scoring::ScoreSnapshot,
    word_generator::{PracticeText, WordGenConfig, WordGenerator, DEFAULT_MIN_WORDS},
};
use chrono::Local;
use clap::ValueEnum;
use rand::{rngs::StdRng, Rng};
use tracing::{debug, info, trace};

/// Selectable session lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, strum_macros::Display)]
pub enum TestDuration {
    #[value(name = "15")]
    #[strum(to_string = "15s")]
    Fifteen,
    #[default]
    #[value(name = "30")]
    #[strum(to_string = "30s")]
    Thirty,
    #[value(name = "60")]
    #[strum(to_string = "60s")]
    Sixty,
}

impl TestDuration {
    pub const ALL: [TestDuration; 3] = [
        TestDuration::Fifteen,
        TestDuration::Thirty,
        TestDuration::Sixty,
    ];

    pub fn secs(&self) -> u32 {
        match self {
            TestDuration::Fifteen => 15,
            TestDuration::Thirty => 30,
            TestDuration::Sixty => 60,
        }
    }

    pub fn from_secs(secs: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.secs() == secs)
    }

    /// Next duration in ascending order, wrapping around
    pub fn next(&self) -> TestDuration {
        match self {
            TestDuration::Fifteen => TestDuration::Thirty,
            TestDuration::Thirty => TestDuration::Sixty,
            TestDuration::Sixty => TestDuration::Fifteen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub language: Language,
    pub duration: TestDuration,
    pub min_words: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            duration: TestDuration::default(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub language: Language,
    pub duration: TestDuration,
    pub time_remaining_secs: u32,
    pub running: bool,
    pub practice_text: PracticeText,
    pub confirmed_words: Vec<String>,
    pub pending_input: String,
}

impl SessionState {
    fn fresh(language: Language, duration: TestDuration, practice_text: PracticeText) -> Self {
        Self {
            language,
            duration,
            time_remaining_secs: duration.secs(),
            running: false,
            practice_text,
            confirmed_words: Vec::new(),
            pending_input: String::new(),
        }
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

/// Display classification of a target word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    ConfirmedCorrect,
    ConfirmedIncorrect,
    Current,
    Untouched,
}

/// Owns one timed typing session at a time plus the recent results.
///
/// All mutation goes through the methods below; the host calls them from
/// its event loop one event at a time.
#[derive(Debug)]
pub struct SessionController<R: Rng = StdRng> {
    pool: PhrasePool,
    rng: R,
    min_words: usize,
    state: SessionState,
    history: History,
}

impl<R: Rng> SessionController<R> {
    pub fn new(pool: PhrasePool, config: SessionConfig, mut rng: R) -> Self {
        let practice_text = generate(&pool, config.language, config.min_words, &mut rng);
        debug!(
            language = config.language.code(),
            duration = config.duration.secs(),
            words = practice_text.len(),
            "session created"
        );
        Self {
            pool,
            rng,
            min_words: config.min_words,
            state: SessionState::fresh(config.language, config.duration, practice_text),
            history: History::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pool(&self) -> &PhrasePool {
        &self.pool
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn practice_text(&self) -> &PracticeText {
        &self.state.practice_text
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn duration(&self) -> TestDuration {
        self.state.duration
    }

    pub fn phase(&self) -> Phase {
        if self.state.running {
            Phase::Running
        } else if self.state.time_remaining_secs == 0 {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn has_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Handle a typed character. Whitespace commits the pending word.
    /// Returns whether the state changed.
    pub fn type_char(&mut self, c: char) -> bool {
        if c.is_whitespace() {
            return self.commit_word();
        }
        if self.has_finished() {
            return false;
        }
        self.state.pending_input.push(c);
        self.on_input_changed();
        true
    }

    /// Remove the last pending character
    pub fn backspace(&mut self) -> bool {
        if self.has_finished() || self.state.pending_input.pop().is_none() {
            return false;
        }
        self.on_input_changed();
        true
    }

    /// Replace the whole pending input, as a text field would
    pub fn set_input(&mut self, value: &str) -> bool {
        if self.has_finished() || self.state.pending_input == value {
            return false;
        }
        self.state.pending_input = value.to_string();
        self.on_input_changed();
        true
    }

    /// Commit the trimmed pending input as the next confirmed word.
    /// Blank input and input past the end of the text are ignored.
    pub fn commit_word(&mut self) -> bool {
        if self.has_finished() {
            return false;
        }
        let word = self.state.pending_input.trim();
        if word.is_empty() {
            return false;
        }
        if self.state.confirmed_words.len() >= self.state.practice_text.len() {
            return false;
        }

        let word = word.to_string();
        trace!(index = self.state.confirmed_words.len(), word = %word, "word confirmed");
        self.state.confirmed_words.push(word);
        self.state.pending_input.clear();
        true
    }

    /// Advance the countdown by one second. Returns the recorded result on
    /// the tick that ends the session, `None` otherwise.
    pub fn on_tick(&mut self) -> Option<CompletedResult> {
        if !self.state.running || self.state.time_remaining_secs == 0 {
            return None;
        }

        self.state.time_remaining_secs -= 1;
        if self.state.time_remaining_secs > 0 {
            return None;
        }

        self.state.running = false;
        let result = self.completed_result();
        info!(
            language = result.language.code(),
            duration = result.duration_secs,
            wpm = result.wpm,
            accuracy = result.accuracy,
            correct = result.correct_words,
            typed = result.confirmed_words,
            "session finished"
        );
        self.history.record(result.clone());
        Some(result)
    }

    pub fn set_duration(&mut self, duration: TestDuration) {
        self.restart(self.state.language, duration);
    }

    pub fn set_language(&mut self, language: Language) {
        self.restart(language, self.state.duration);
    }

    pub fn reset(&mut self) {
        self.restart(self.state.language, self.state.duration);
    }

    pub fn score(&self) -> ScoreSnapshot {
        ScoreSnapshot::compute(
            &self.state.confirmed_words,
            self.state.practice_text.words(),
            self.state.duration.secs(),
            self.state.time_remaining_secs,
        )
    }

    /// Index of the next word to type, or `None` once every word is confirmed
    pub fn current_word_index(&self) -> Option<usize> {
        let idx = self.state.confirmed_words.len();
        (idx < self.state.practice_text.len()).then_some(idx)
    }

    pub fn word_state(&self, idx: usize) -> WordState {
        let confirmed = &self.state.confirmed_words;
        match confirmed.get(idx) {
            Some(typed) => {
                if self.state.practice_text.word(idx) == Some(typed.as_str()) {
                    WordState::ConfirmedCorrect
                } else {
                    WordState::ConfirmedIncorrect
                }
            }
            None if idx == confirmed.len() => WordState::Current,
            None => WordState::Untouched,
        }
    }

    /// Every target word paired with its classification
    pub fn word_states(&self) -> impl Iterator<Item = (&str, WordState)> + '_ {
        self.state
            .practice_text
            .words()
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.as_str(), self.word_state(idx)))
    }

    fn on_input_changed(&mut self) {
        if !self.state.running && self.state.time_remaining_secs == self.state.duration.secs() {
            debug!(duration = self.state.duration.secs(), "timer started");
            self.state.running = true;
        }
    }

    fn restart(&mut self, language: Language, duration: TestDuration) {
        let practice_text = generate(&self.pool, language, self.min_words, &mut self.rng);
        debug!(
            language = language.code(),
            duration = duration.secs(),
            words = practice_text.len(),
            "session reset"
        );
        self.state = SessionState::fresh(language, duration, practice_text);
    }

    fn completed_result(&self) -> CompletedResult {
        let score = self.score();
        let finished_at = Local::now();
        CompletedResult {
            id: finished_at.timestamp_millis(),
            finished_at,
            language: self.state.language,
            duration_secs: self.state.duration.secs(),
            wpm: score.wpm,
            accuracy: score.accuracy,
            correct_words: score.correct_words,
            confirmed_words: score.confirmed_words,
        }
    }
}

fn generate<R: Rng>(
    pool: &PhrasePool,
    language: Language,
    min_words: usize,
    rng: &mut R,
) -> PracticeText {
    WordGenerator::new(
        pool,
        WordGenConfig {
            language,
            min_words,
        },
    )
    .generate(rng)
}
