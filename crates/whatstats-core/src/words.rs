use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::LanguageProfile;

/// Lowercase form with combining marks stripped, so "não" and "nao"
/// compare equal.
fn fold_diacritics(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Turns message text into word-cloud candidates. The profile is normalized
/// once at construction; the per-message path lowercases the text a single
/// time and reuses it for every check.
pub struct WordExtractor {
    media_markers: Vec<String>,
    stopwords: HashSet<String>,
}

impl WordExtractor {
    pub fn new(profile: &LanguageProfile) -> Self {
        Self {
            media_markers: profile
                .media_markers
                .iter()
                .map(|marker| marker.to_lowercase())
                .collect(),
            stopwords: profile
                .stopwords
                .iter()
                .map(|word| fold_diacritics(&word.to_lowercase()))
                .collect(),
        }
    }

    /// Words this message contributes to the frequency table. Attachment
    /// placeholders and link-bearing messages contribute nothing at all.
    pub fn words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        if self
            .media_markers
            .iter()
            .any(|marker| lowered.contains(marker.as_str()))
        {
            return Vec::new();
        }
        if lowered.contains("http://") || lowered.contains("https://") {
            return Vec::new();
        }

        lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| self.keep(token))
            .map(str::to_string)
            .collect()
    }

    fn keep(&self, token: &str) -> bool {
        if token.chars().count() < 3 {
            return false;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        !self.stopwords.contains(&fold_diacritics(token))
    }
}
