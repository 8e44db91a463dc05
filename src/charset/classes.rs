use strum::{Display, EnumIter};

/// Letters plus the digits 0-8, the historical `-a` set
pub(crate) const ALPHA_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ012345678";

/// Decimal digits
pub(crate) const NUMBER_CHARS: &str = "0123456789";

/// Punctuation and symbols
pub(crate) const SPECIAL_CHARS: &str = "!@#$%^&*(){}[]|\\;:'\",.<>/?`~";

/// A built-in group of characters that can seed the pool.
///
/// Iteration order is the order classes are concatenated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum CharacterClass {
    Alpha,
    Numeric,
    Special,
}

impl CharacterClass {
    pub(crate) fn chars(self) -> &'static str {
        match self {
            Self::Alpha => ALPHA_CHARS,
            Self::Numeric => NUMBER_CHARS,
            Self::Special => SPECIAL_CHARS,
        }
    }
}
