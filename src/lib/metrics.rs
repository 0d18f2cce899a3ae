//! # Input Metrics
//!
//! Derived display metrics for the current text input: word count, character
//! count and how full the input is relative to the configured character cap.
//! Everything here is a pure function of its inputs.

use std::borrow::Cow;

/// Default character cap applied to input text before it is sent to a model.
pub const DEFAULT_MAX_CHARS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMetrics {
    pub word_count: usize,
    pub char_count: usize,
    /// Saturating percentage of the cap consumed by the input, in `[0, 100]`.
    pub fullness_percent: u8,
}

/// Recomputes metrics from the raw input text.
///
/// Counts are in characters (Unicode scalar values), not bytes, so multibyte
/// input is measured the same way the cap is applied.
pub fn compute_metrics(text: &str, max_chars: usize) -> InputMetrics {
    let char_count = text.chars().count();
    let word_count = text.split_whitespace().count();

    let fullness_percent = match max_chars {
        0 if char_count == 0 => 0,
        0 => 100,
        cap => (char_count.saturating_mul(100) / cap).min(100) as u8,
    };

    InputMetrics {
        word_count,
        char_count,
        fullness_percent,
    }
}

/// Clamps the input to the first `max_chars` characters.
///
/// Over-long input is silently corrected rather than rejected; callers are
/// expected to surface a non-fatal warning to the user.
pub fn clamp_input(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().take(max_chars).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_zero_counts() {
        let metrics = compute_metrics("", DEFAULT_MAX_CHARS);
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.char_count, 0);
        assert_eq!(metrics.fullness_percent, 0);
    }

    #[test]
    fn test_word_count_splits_on_whitespace() {
        let metrics = compute_metrics("  one\ttwo \n three  ", DEFAULT_MAX_CHARS);
        assert_eq!(metrics.word_count, 3);
    }

    #[test]
    fn test_fullness_percent_uses_floor() {
        assert_eq!(compute_metrics(&"a".repeat(512), 1024).fullness_percent, 50);
        // 1023/1024 is 99.9%; floor, not round
        assert_eq!(compute_metrics(&"a".repeat(1023), 1024).fullness_percent, 99);
        assert_eq!(compute_metrics(&"a".repeat(1024), 1024).fullness_percent, 100);
    }

    #[test]
    fn test_fullness_percent_saturates_at_100() {
        let metrics = compute_metrics(&"a".repeat(5000), 1024);
        assert_eq!(metrics.fullness_percent, 100);
        assert_eq!(metrics.char_count, 5000);
    }

    #[test]
    fn test_fullness_percent_always_in_range() {
        for len in [0usize, 1, 10, 1023, 1024, 1025, 100_000] {
            let metrics = compute_metrics(&"x".repeat(len), 1024);
            assert!(
                metrics.fullness_percent <= 100,
                "fullness for len {} was {}",
                len,
                metrics.fullness_percent
            );
        }
    }

    #[test]
    fn test_char_count_is_chars_not_bytes() {
        let metrics = compute_metrics("héllo wörld", 1024);
        assert_eq!(metrics.char_count, 11);
        assert_eq!(metrics.word_count, 2);
    }

    #[test]
    fn test_clamp_keeps_short_input_borrowed() {
        let input = "short note";
        assert!(matches!(
            clamp_input(input, DEFAULT_MAX_CHARS),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_clamp_truncates_to_exact_prefix() {
        let input = "a".repeat(2000);
        let clamped = clamp_input(&input, 1024);
        assert_eq!(clamped.chars().count(), 1024);
        assert_eq!(clamped.as_ref(), &input[..1024]);
    }

    #[test]
    fn test_clamp_respects_char_boundaries() {
        let input = "é".repeat(10);
        let clamped = clamp_input(&input, 4);
        assert_eq!(clamped.chars().count(), 4);
        assert_eq!(clamped.as_ref(), "éééé");
    }
}
