use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Letters only, followed by an optional run of trailing punctuation.
    static ref KEYWORD_RE: Regex = Regex::new(r"^(\p{Alphabetic}+)[.,?:;!]*$").expect("valid regex");
}

/// Words that are never indexed. Membership is checked against the already
/// lower-cased, punctuation-stripped form of a token.
#[derive(Debug, Default, Clone)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, word: impl Into<String>) -> bool { self.words.insert(word.into()) }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

impl<S: Into<String>> Extend<S> for NoiseWords {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

/// Turn a raw token into a keyword: lowercase, strip trailing `. , ? : ; !`,
/// then require letters only and reject noise words.
///
/// Returns `None` for anything that is not a keyword; rejection is routine
/// filtering, not an error.
pub fn normalize(word: &str, noise: &NoiseWords) -> Option<String> {
    let lowered = word.to_lowercase();
    let caps = KEYWORD_RE.captures(&lowered)?;
    let keyword = caps.get(1)?.as_str();
    if noise.contains(keyword) { return None; }
    Some(keyword.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_punctuation() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("Word!!", &noise).as_deref(), Some("word"));
        assert_eq!(normalize("word?!?!", &noise).as_deref(), Some("word"));
        assert_eq!(normalize("end.", &noise).as_deref(), Some("end"));
    }

    #[test]
    fn rejects_non_letters() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("a1b", &noise), None);
        assert_eq!(normalize("ab3cd!!", &noise), None);
        assert_eq!(normalize("word-", &noise), None);
        assert_eq!(normalize("\"quoted", &noise), None);
        assert_eq!(normalize("it's", &noise), None);
    }

    #[test]
    fn leading_and_embedded_punctuation_reject() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("!word", &noise), None);
        assert_eq!(normalize("wo.rd", &noise), None);
        assert_eq!(normalize("word!a", &noise), None);
    }

    #[test]
    fn empty_and_punctuation_only() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("", &noise), None);
        assert_eq!(normalize("?!.", &noise), None);
    }

    #[test]
    fn noise_words_rejected_after_stripping() {
        let noise: NoiseWords = ["the", "and"].into_iter().collect();
        assert_eq!(normalize("The", &noise), None);
        assert_eq!(normalize("and,", &noise), None);
        assert_eq!(normalize("andes", &noise).as_deref(), Some("andes"));
    }

    #[test]
    fn non_ascii_letters_are_letters() {
        let noise = NoiseWords::new();
        assert_eq!(normalize("Café!", &noise).as_deref(), Some("café"));
    }
}
