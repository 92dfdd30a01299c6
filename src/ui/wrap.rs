use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap: split word indices into lines no wider than `width`
/// display columns, counting one space between words. A word wider than
/// the line gets a line of its own.
pub fn wrap_words<S: AsRef<str>>(words: &[S], width: usize) -> Vec<Range<usize>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut line_width = 0;

    for (idx, word) in words.iter().enumerate() {
        let w = word.as_ref().width();
        if idx > start && line_width + 1 + w > width {
            lines.push(start..idx);
            start = idx;
            line_width = w;
        } else if idx == start {
            line_width = w;
        } else {
            line_width += 1 + w;
        }
    }
    if start < words.len() {
        lines.push(start..words.len());
    }
    lines
}

/// Line holding word `idx`, if any
pub fn line_of(lines: &[Range<usize>], idx: usize) -> Option<usize> {
    lines.iter().position(|line| line.contains(&idx))
}

/// First line to show so that `focus` stays visible in a window of
/// `height` lines, keeping one line of already-typed context above it.
pub fn scroll_offset(focus: usize, height: usize, total: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(height);
    focus.saturating_sub(1).min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        let lines = wrap_words(&["ab", "cd", "ef"], 8);
        assert_eq!(lines, vec![0..3]);
    }

    #[test]
    fn test_wrap_breaks_at_width() {
        // "ab cd" is 5 wide, adding " ef" would make 8
        let lines = wrap_words(&["ab", "cd", "ef", "gh"], 7);
        assert_eq!(lines, vec![0..2, 2..4]);
    }

    #[test]
    fn test_wrap_long_word_alone() {
        let lines = wrap_words(&["a", "abcdefghij", "b"], 4);
        assert_eq!(lines, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // accented letters are one column each
        let lines = wrap_words(&["già", "più"], 7);
        assert_eq!(lines, vec![0..2]);
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_words::<&str>(&[], 10).is_empty());
    }

    #[test]
    fn test_line_of() {
        let lines = vec![0..2, 2..5];
        assert_eq!(line_of(&lines, 0), Some(0));
        assert_eq!(line_of(&lines, 4), Some(1));
        assert_eq!(line_of(&lines, 5), None);
    }

    #[test]
    fn test_scroll_offset_keeps_context() {
        assert_eq!(scroll_offset(0, 3, 10), 0);
        assert_eq!(scroll_offset(1, 3, 10), 0);
        assert_eq!(scroll_offset(4, 3, 10), 3);
        // never scroll past the last full window
        assert_eq!(scroll_offset(9, 3, 10), 7);
        assert_eq!(scroll_offset(5, 0, 10), 0);
    }
}
