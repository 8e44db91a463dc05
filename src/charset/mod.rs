mod classes;

use crate::phrase::Phrase;
use crate::scramble::RandomSource;
use classes::CharacterClass;
use itertools::Itertools;
use strum::IntoEnumIterator;

/// The character classes requested for the pool, before the phrase is merged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CharacterClasses {
    /// Include letters and the digits 0-8
    pub alpha: bool,
    /// Include digits
    pub numeric: bool,
    /// Include punctuation and symbols
    pub special: bool,
    /// Include every class, ignoring the individual flags
    pub all: bool,
    /// Use this string verbatim, ignoring every other flag
    pub custom: Option<String>,
}

impl CharacterClasses {
    /// Resolve the requested classes into the base string of the pool.
    ///
    /// A non-empty custom string wins over `all`, which wins over the individual classes.
    pub(crate) fn base_chars(&self) -> String {
        if let Some(custom) = self.custom.as_deref().filter(|custom| !custom.is_empty()) {
            return custom.to_string();
        }
        self.selected().map(CharacterClass::chars).collect()
    }

    /// A short human readable description of where the base characters come from.
    pub(crate) fn describe(&self) -> String {
        match self.custom.as_deref() {
            Some(custom) if !custom.is_empty() => "custom".to_string(),
            _ => self.selected().join("+"),
        }
    }

    fn selected(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::iter().filter(move |class| self.all || self.includes(*class))
    }

    fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Alpha => self.alpha,
            CharacterClass::Numeric => self.numeric,
            CharacterClass::Special => self.special,
        }
    }
}

/// The characters a scrambled frame is sampled from.
///
/// Every character of the phrase the pool was built for is guaranteed to be in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CharacterPool(Vec<char>);

impl CharacterPool {
    /// Build the pool for a phrase out of the requested classes.
    ///
    /// Phrase characters missing from the base set are appended in order of first appearance.
    pub(crate) fn build(phrase: &Phrase, classes: &CharacterClasses) -> Self {
        let mut chars: Vec<char> = classes.base_chars().chars().collect();
        for ch in phrase.chars() {
            if !chars.contains(ch) {
                chars.push(*ch);
            }
        }
        Self(chars)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    /// Whether a frame sampled from this pool can break across lines.
    pub(crate) fn has_line_breaks(&self) -> bool {
        self.contains('\n')
    }

    /// Pick a character uniformly at random.
    ///
    /// Panics if the pool is empty.
    pub(crate) fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> char {
        self.0[rng.next_index(self.0.len())]
    }
}

impl From<&str> for CharacterPool {
    fn from(chars: &str) -> Self {
        Self(chars.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::classes::{ALPHA_CHARS, NUMBER_CHARS, SPECIAL_CHARS};
    use crate::phrase::DEFAULT_PHRASES;
    use rstest::rstest;

    fn pool_string(pool: &CharacterPool) -> String {
        pool.0.iter().collect()
    }

    #[test]
    fn numeric_pool_appends_missing_phrase_chars() {
        let classes = CharacterClasses { numeric: true, ..Default::default() };
        let pool = CharacterPool::build(&Phrase::from("xyz"), &classes);
        assert_eq!(pool_string(&pool), "0123456789xyz");
    }

    #[test]
    fn custom_overrides_all() {
        let classes = CharacterClasses { all: true, custom: Some("XY".into()), ..Default::default() };
        let pool = CharacterPool::build(&Phrase::from("YZ"), &classes);
        assert_eq!(pool_string(&pool), "XYZ");
    }

    #[test]
    fn all_overrides_individual_classes() {
        let classes = CharacterClasses { all: true, numeric: true, ..Default::default() };
        assert_eq!(classes.base_chars(), format!("{ALPHA_CHARS}{NUMBER_CHARS}{SPECIAL_CHARS}"));
        assert_eq!(classes.describe(), "alpha+numeric+special");
    }

    #[test]
    fn empty_custom_falls_through() {
        let classes =
            CharacterClasses { special: true, custom: Some(String::new()), ..Default::default() };
        assert_eq!(classes.base_chars(), SPECIAL_CHARS);
        assert_eq!(classes.describe(), "special");
    }

    #[test]
    fn phrase_chars_already_present_are_not_duplicated() {
        let classes = CharacterClasses { alpha: true, ..Default::default() };
        let pool = CharacterPool::build(&Phrase::from("abc9"), &classes);
        assert_eq!(pool_string(&pool), format!("{ALPHA_CHARS}9"));
    }

    #[test]
    fn base_duplicates_are_kept() {
        let classes = CharacterClasses { custom: Some("aab".into()), ..Default::default() };
        let pool = CharacterPool::build(&Phrase::from("ba"), &classes);
        assert_eq!(pool_string(&pool), "aab");
    }

    #[test]
    fn no_classes_uses_phrase_only() {
        let pool = CharacterPool::build(&Phrase::from("hello"), &CharacterClasses::default());
        assert_eq!(pool_string(&pool), "helo");
    }

    #[rstest]
    #[case::plain_phrase("ab", None, false)]
    #[case::multiline_phrase("a\nb", None, true)]
    #[case::custom_newline("ab", Some("x\n"), true)]
    fn line_breaks(#[case] phrase: &str, #[case] custom: Option<&str>, #[case] expected: bool) {
        let classes = CharacterClasses { custom: custom.map(String::from), ..Default::default() };
        let pool = CharacterPool::build(&Phrase::from(phrase), &classes);
        assert_eq!(pool.has_line_breaks(), expected);
    }

    #[test]
    fn nothing_requested_gives_empty_pool() {
        let pool = CharacterPool::build(&Phrase::default(), &CharacterClasses::default());
        assert!(pool.is_empty());
        assert_eq!(CharacterClasses::default().describe(), "");
    }

    #[rstest]
    #[case::none(CharacterClasses::default())]
    #[case::alpha(CharacterClasses { alpha: true, ..Default::default() })]
    #[case::numeric_special(CharacterClasses { numeric: true, special: true, ..Default::default() })]
    #[case::all(CharacterClasses { all: true, ..Default::default() })]
    #[case::custom(CharacterClasses { custom: Some("01".into()), ..Default::default() })]
    fn every_phrase_char_is_in_pool(#[case] classes: CharacterClasses) {
        let alphabet: Vec<char> = "aZ 9!\n🍻é漢".chars().collect();
        let mut rng = fastrand::Rng::with_seed(7);
        let mut phrases: Vec<String> = DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect();
        for _ in 0..50 {
            let len = rng.usize(0..20);
            phrases.push((0..len).map(|_| alphabet[rng.usize(..alphabet.len())]).collect());
        }

        for phrase in phrases {
            let phrase = Phrase::from(phrase.as_str());
            let pool = CharacterPool::build(&phrase, &classes);
            for ch in phrase.chars() {
                assert!(pool.contains(*ch), "{ch:?} missing from pool for {phrase:?}");
            }
        }
    }
}
