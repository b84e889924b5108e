use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

use super::ShortcodeMatching;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Tag { quote: Option<char>, depth: usize },
    Comment { start: usize },
}

/// Removes markup the way PHP's `strip_tags` does.
///
/// - `<` followed by whitespace is kept as text, a trailing `<` is dropped
/// - quoted attribute values may contain `>`
/// - `<!-- ... -->` comments are dropped as a whole
/// - an unterminated tag swallows the rest of the input
///
/// Tags are replaced by nothing, so `<p>one</p><p>two</p>` becomes `onetwo`.
pub fn strip_tags(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut state = State::Text;

    for (index, c) in text.char_indices() {
        state = match state {
            State::Text => {
                if c != '<' {
                    output.push(c);
                    State::Text
                } else if text[index..].starts_with("<!--") {
                    State::Comment { start: index }
                } else if text[index + 1..]
                    .chars()
                    .next()
                    .map_or(false, char::is_whitespace)
                {
                    output.push(c);
                    State::Text
                } else {
                    State::Tag {
                        quote: None,
                        depth: 0,
                    }
                }
            }
            State::Tag {
                quote: Some(quote),
                depth,
            } => State::Tag {
                quote: (c != quote).then_some(quote),
                depth,
            },
            State::Tag { quote: None, depth } => match c {
                '"' | '\'' => State::Tag {
                    quote: Some(c),
                    depth,
                },
                '<' => State::Tag {
                    quote: None,
                    depth: depth + 1,
                },
                '>' if depth > 0 => State::Tag {
                    quote: None,
                    depth: depth - 1,
                },
                '>' => State::Text,
                _ => state,
            },
            State::Comment { start } => {
                // The `--` of the opening `<!--` counts, so `<!-->` is closed.
                if c == '>' && index >= start + 4 && text[..index].ends_with("--") {
                    State::Text
                } else {
                    state
                }
            }
        };
    }

    output
}

fn greedy_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[.*\]").expect("Invalid shortcode pattern"))
}

fn per_shortcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[.*?\]").expect("Invalid shortcode pattern"))
}

/// Removes bracketed shortcodes such as `[gallery ids=1,2]`.
///
/// With [`ShortcodeMatching::Greedy`] everything from the first `[` to the
/// last `]` of a line goes, including any prose between two shortcodes.
/// Matches never cross a line break.
pub fn strip_shortcodes(text: &str, matching: ShortcodeMatching) -> Cow<'_, str> {
    let pattern = match matching {
        ShortcodeMatching::Greedy => greedy_pattern(),
        ShortcodeMatching::PerShortcode => per_shortcode_pattern(),
    };

    pattern.replace_all(text, "")
}
