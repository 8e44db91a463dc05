use crate::scramble::RandomSource;
use std::fmt::{self, Write};

/// Phrases used when nothing was piped in or passed as an argument
pub(crate) const DEFAULT_PHRASES: &[&str] = &["Hello, World!", "Hello, from scram", "This is a test", "Cheers! 🍻"];

/// The text an animation converges towards.
///
/// Stored as characters rather than bytes so multi-byte characters scramble as a single unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Phrase(Vec<char>);

impl Phrase {
    pub(crate) fn chars(&self) -> &[char] {
        &self.0
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Self(text.chars().collect())
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| f.write_char(*ch))
    }
}

/// Pick the phrase to animate.
///
/// Piped input wins over the positional argument; empty values count as absent. When neither
/// provides anything one of [`DEFAULT_PHRASES`] is picked, unless `allow_default` is off in which
/// case the phrase is empty.
pub(crate) fn resolve<R: RandomSource + ?Sized>(
    piped: Option<String>,
    positional: Option<&str>,
    allow_default: bool,
    rng: &mut R,
) -> Phrase {
    let explicit = piped
        .filter(|text| !text.is_empty())
        .or_else(|| positional.filter(|text| !text.is_empty()).map(String::from));
    match explicit {
        Some(text) => Phrase::from(text.as_str()),
        None if allow_default => Phrase::from(DEFAULT_PHRASES[rng.next_index(DEFAULT_PHRASES.len())]),
        None => Phrase::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scramble::ScriptedSource;
    use rstest::rstest;

    #[rstest]
    #[case::piped_wins(Some("from pipe"), Some("from arg"), "from pipe")]
    #[case::empty_pipe_falls_back(Some(""), Some("from arg"), "from arg")]
    #[case::argument(None, Some("from arg"), "from arg")]
    #[case::multiline_pipe(Some("one\ntwo"), None, "one\ntwo")]
    fn explicit_phrase(#[case] piped: Option<&str>, #[case] positional: Option<&str>, #[case] expected: &str) {
        let mut rng = ScriptedSource::new([0]);
        let phrase = resolve(piped.map(String::from), positional, true, &mut rng);
        assert_eq!(phrase.to_string(), expected);
        assert_eq!(rng.consumed(), 0);
    }

    #[rstest]
    #[case(0, "Hello, World!")]
    #[case(3, "Cheers! 🍻")]
    fn default_phrase(#[case] index: usize, #[case] expected: &str) {
        let mut rng = ScriptedSource::new([index]);
        let phrase = resolve(None, Some(""), true, &mut rng);
        assert_eq!(phrase.to_string(), expected);
    }

    #[test]
    fn default_disabled() {
        let mut rng = ScriptedSource::new([0]);
        let phrase = resolve(Some(String::new()), None, false, &mut rng);
        assert_eq!(phrase, Phrase::default());
    }

    #[test]
    fn counts_characters_not_bytes() {
        let phrase = Phrase::from("Cheers! 🍻");
        assert_eq!(phrase.len(), 9);
    }
}
