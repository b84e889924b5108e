use super::WordCounting;

pub fn count(text: &str, counting: WordCounting) -> usize {
    match counting {
        WordCounting::Whitespace => text.split_whitespace().count(),
        WordCounting::StrWordCount => str_word_count(text),
        WordCounting::Unicode => words_count::count(text).words,
    }
}

/// Counts words the way PHP's `str_word_count` does in the C locale: a word
/// is a run of ASCII letters, `'` and `-`. A leading `'` or `-` and a
/// trailing `-` of the whole text do not count.
fn str_word_count(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();

    if matches!(bytes.first(), Some(b'\'' | b'-')) {
        start = 1;
    }
    if end > start && bytes[end - 1] == b'-' {
        end -= 1;
    }

    let mut words = 0;
    let mut in_word = false;
    for &byte in &bytes[start..end] {
        if byte.is_ascii_alphabetic() || byte == b'\'' || byte == b'-' {
            if !in_word {
                words += 1;
            }
            in_word = true;
        } else {
            in_word = false;
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_counting() {
        assert_eq!(count("", WordCounting::Whitespace), 0);
        assert_eq!(count("   \n\t ", WordCounting::Whitespace), 0);
        assert_eq!(count("Hello world", WordCounting::Whitespace), 2);
        assert_eq!(count("  spaced\tout\nwords  ", WordCounting::Whitespace), 3);
        assert_eq!(count("R2-D2 isn't 42", WordCounting::Whitespace), 3);
    }

    #[test]
    fn test_str_word_count() {
        assert_eq!(count("", WordCounting::StrWordCount), 0);
        assert_eq!(count("Hello world", WordCounting::StrWordCount), 2);
        assert_eq!(count("isn't well-known", WordCounting::StrWordCount), 2);
        // Digits split words and are never counted themselves.
        assert_eq!(count("R2-D2 isn't 42", WordCounting::StrWordCount), 3);
        assert_eq!(count("fred123barney", WordCounting::StrWordCount), 2);
    }

    #[test]
    fn test_str_word_count_edges() {
        assert_eq!(count("'quoted", WordCounting::StrWordCount), 1);
        assert_eq!(count("-", WordCounting::StrWordCount), 0);
        assert_eq!(count("'-", WordCounting::StrWordCount), 0);
        assert_eq!(count("word -", WordCounting::StrWordCount), 1);
        // A lone hyphen in the middle still counts.
        assert_eq!(count("a - b", WordCounting::StrWordCount), 3);
    }

    #[test]
    fn test_str_word_count_non_ascii() {
        // Multi-byte letters are not alphabetic in the C locale.
        assert_eq!(count("café au lait", WordCounting::StrWordCount), 3);
        assert_eq!(count("żółw", WordCounting::StrWordCount), 1);
        assert_eq!(count("東京", WordCounting::StrWordCount), 0);
    }

    #[test]
    fn test_unicode_counting() {
        assert_eq!(count("", WordCounting::Unicode), 0);
        assert_eq!(count("Hello world", WordCounting::Unicode), 2);
        let text = "東京タワー";
        assert!(count(text, WordCounting::Unicode) > count(text, WordCounting::Whitespace));
    }
}
