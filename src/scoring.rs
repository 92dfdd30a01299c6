/// Live score derived from a session; never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSnapshot {
    pub correct_words: usize,
    pub confirmed_words: usize,
    pub wpm: u32,
    pub accuracy: u32,
}

impl ScoreSnapshot {
    pub fn compute<S: AsRef<str>, T: AsRef<str>>(
        confirmed: &[S],
        target: &[T],
        duration_secs: u32,
        remaining_secs: u32,
    ) -> Self {
        let correct_words = count_correct(confirmed, target);
        let confirmed_words = confirmed.len();
        Self {
            correct_words,
            confirmed_words,
            wpm: wpm(confirmed_words, duration_secs, remaining_secs),
            accuracy: accuracy(correct_words, confirmed_words),
        }
    }
}

/// Number of positions where the confirmed word equals the target word exactly
pub fn count_correct<S: AsRef<str>, T: AsRef<str>>(confirmed: &[S], target: &[T]) -> usize {
    confirmed
        .iter()
        .zip(target)
        .filter(|(typed, expected)| typed.as_ref() == expected.as_ref())
        .count()
}

/// Confirmed words per minute of elapsed time, rounded. Zero until a second has elapsed.
pub fn wpm(confirmed_words: usize, duration_secs: u32, remaining_secs: u32) -> u32 {
    let elapsed = duration_secs.saturating_sub(remaining_secs);
    if elapsed == 0 {
        return 0;
    }

    let minutes = elapsed as f64 / 60.0;
    (confirmed_words as f64 / minutes).round() as u32
}

/// Rounded percentage of correct words; zero when nothing was confirmed
pub fn accuracy(correct_words: usize, confirmed_words: usize) -> u32 {
    match confirmed_words {
        0 => 0,
        total => ((correct_words as f64 / total as f64) * 100.0).round() as u32,
    }
}
