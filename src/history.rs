use crate::language::Language;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of completed results kept in memory
pub const HISTORY_CAPACITY: usize = 5;

/// Snapshot of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedResult {
    /// Creation time in milliseconds since the Unix epoch
    pub id: i64,
    pub finished_at: DateTime<Local>,
    pub language: Language,
    pub duration_secs: u32,
    pub wpm: u32,
    pub accuracy: u32,
    pub correct_words: usize,
    pub confirmed_words: usize,
}

/// Recent results, newest first, bounded to [`HISTORY_CAPACITY`].
/// Lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<CompletedResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: CompletedResult) {
        self.entries.push_front(result);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn latest(&self) -> Option<&CompletedResult> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompletedResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn average_wpm(&self) -> Option<f64> {
        match self.entries.len() {
            0 => None,
            count => Some(self.entries.iter().map(|r| r.wpm as f64).sum::<f64>() / count as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_wpm(wpm: u32) -> CompletedResult {
        let finished_at = Local::now();
        CompletedResult {
            id: finished_at.timestamp_millis(),
            finished_at,
            language: Language::En,
            duration_secs: 30,
            wpm,
            accuracy: 100,
            correct_words: 0,
            confirmed_words: 0,
        }
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();

        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert_eq!(history.average_wpm(), None);
    }

    #[test]
    fn test_newest_first() {
        let mut history = History::new();
        history.record(result_with_wpm(10));
        history.record(result_with_wpm(20));

        assert_eq!(history.latest().map(|r| r.wpm), Some(20));
        let wpms: Vec<u32> = history.iter().map(|r| r.wpm).collect();
        assert_eq!(wpms, vec![20, 10]);
    }

    #[test]
    fn test_bounded_to_capacity() {
        let mut history = History::new();
        for wpm in 1..=12 {
            history.record(result_with_wpm(wpm));
            assert!(history.len() <= HISTORY_CAPACITY);
            assert_eq!(history.latest().map(|r| r.wpm), Some(wpm));
        }

        let wpms: Vec<u32> = history.iter().map(|r| r.wpm).collect();
        assert_eq!(wpms, vec![12, 11, 10, 9, 8]);
    }

    #[test]
    fn test_average_wpm() {
        let mut history = History::new();
        history.record(result_with_wpm(40));
        history.record(result_with_wpm(50));
        history.record(result_with_wpm(63));

        assert_eq!(history.average_wpm(), Some(51.0));
    }
}
