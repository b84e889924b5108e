pub mod sanitize;
pub mod word_counter;

pub use sanitize::{strip_shortcodes, strip_tags};

/// How fast we are reading, in words per minute.
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Which shortcode pattern is removed before counting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortcodeMatching {
    /// `\[.*\]`, first `[` to last `]` on a line. Keeps already stored
    /// values comparable.
    #[default]
    Greedy,
    /// `\[.*?\]`, every shortcode on its own. Prose between two shortcodes
    /// is counted.
    PerShortcode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordCounting {
    #[default]
    Whitespace,
    StrWordCount,
    Unicode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatorOptions {
    pub shortcodes: ShortcodeMatching,
    pub words: WordCounting,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    options: EstimatorOptions,
}

impl Estimator {
    pub fn new(options: EstimatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EstimatorOptions {
        self.options
    }

    /// Body text with markup and shortcodes removed.
    pub fn sanitize(&self, body: &str) -> String {
        let body = strip_tags(body);
        strip_shortcodes(&body, self.options.shortcodes).into_owned()
    }

    pub fn word_count(&self, body: &str) -> usize {
        word_counter::count(&self.sanitize(body), self.options.words)
    }

    /// Minutes needed to read `body`. Never negative, `0.0` for empty text.
    pub fn estimate(&self, body: &str) -> f64 {
        let word_count = self.word_count(body);
        let read_time = word_count as f64 / WORDS_PER_MINUTE;

        tracing::trace!(
            "Estimated {} words, {} minutes of reading.",
            word_count,
            read_time
        );
        read_time
    }
}

/// Estimates with the default options.
pub fn calculate(body: &str) -> f64 {
    Estimator::default().estimate(body)
}
