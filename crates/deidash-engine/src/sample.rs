use deidash_types::ContractRecord;
use rand::Rng;
use std::borrow::Cow;

use crate::filter::FilteredView;

pub const DEFAULT_SAMPLE_SIZE: usize = 5;
pub const DEFAULT_WORD_LIMIT: usize = 500;
pub const TRUNCATION_MARKER: &str = "...";

/// Up to `count` distinct rows drawn uniformly without replacement.
pub fn sample_rows<'a, R>(view: &FilteredView<'a>, count: usize, rng: &mut R) -> Vec<&'a ContractRecord>
where
    R: Rng + ?Sized,
{
    let amount = count.min(view.len());
    rand::seq::index::sample(rng, view.len(), amount)
        .into_iter()
        .map(|index| view.rows()[index])
        .collect()
}

/// Keep the first `limit` whitespace-separated words, appending the marker
/// when anything was dropped. Text within the limit is returned untouched.
pub fn truncate_words(text: &str, limit: usize) -> Cow<'_, str> {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(limit).collect();

    if words.next().is_none() {
        return Cow::Borrowed(text);
    }

    let mut truncated = kept.join(" ");
    truncated.push_str(TRUNCATION_MARKER);
    Cow::Owned(truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_words_over_limit() {
        let text = vec!["word"; 501].join(" ");
        let truncated = truncate_words(&text, 500);

        assert!(truncated.ends_with("word..."));
        assert_eq!(truncated.trim_end_matches("...").split_whitespace().count(), 500);
    }

    #[test]
    fn test_truncate_words_at_limit_is_untouched() {
        let text = vec!["word"; 500].join("  ");
        assert!(matches!(truncate_words(&text, 500), Cow::Borrowed(t) if t == text));
    }

    #[test]
    fn test_truncate_words_normalizes_whitespace_only_when_cut() {
        assert_eq!(truncate_words("a\n b\tc d", 3), "a b c...");
        assert_eq!(truncate_words("a\n b", 3), "a\n b");
        assert_eq!(truncate_words("", 3), "");
    }
}
