//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."
//!
//! Combining two fragments yields a complex selector. Ordering and singleton
//! rules apply within one compound selector only, so nothing is validated
//! across the combinator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::EnumIter;
use trellis_common::warning::warn_once;

use crate::error::ParseCombinatorError;
use crate::fragment::Fragment;

/// The four combinators that may join two compound selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's token as written between the two selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up a combinator by its token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Combinator {
    type Err = ParseCombinatorError;

    /// Accepts either the token or a descriptive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(combinator) = Self::from_token(s) {
            return Ok(combinator);
        }
        match s {
            "descendant" => Ok(Self::Descendant),
            "child" => Ok(Self::Child),
            "next-sibling" | "adjacent" | "adjacent-sibling" | "sibling" => Ok(Self::NextSibling),
            "subsequent-sibling" | "general-sibling" => Ok(Self::SubsequentSibling),
            other => Err(ParseCombinatorError(other.to_string())),
        }
    }
}

/// Join two fragments: `left + ' ' + combinator + ' ' + right`.
///
/// The result carries no component kinds and is marked as combined, so
/// appending components to it fails with
/// [`SelectorError::UnsupportedOperation`](crate::SelectorError::UnsupportedOperation).
/// It can still be combined further.
#[must_use]
pub fn combine(left: &Fragment, combinator: Combinator, right: &Fragment) -> Fragment {
    join(left, combinator.token(), right)
}

/// Join two fragments with an arbitrary token.
///
/// The token is spliced through unchanged. Anything other than the four
/// combinator tokens is accepted but reported once through
/// [`warn_once`].
#[must_use]
pub fn combine_token(left: &Fragment, token: &str, right: &Fragment) -> Fragment {
    if Combinator::from_token(token).is_none() {
        warn_once(
            "combinator",
            &format!("non-standard combinator token '{token}' passed through unchanged"),
        );
    }
    join(left, token, right)
}

fn join(left: &Fragment, token: &str, right: &Fragment) -> Fragment {
    let (left, right) = (left.as_str(), right.as_str());
    let mut text = String::with_capacity(left.len() + token.len() + right.len() + 2);
    text.push_str(left);
    text.push(' ');
    text.push_str(token);
    text.push(' ');
    text.push_str(right);
    Fragment::combined(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_token_round_trip() {
        for combinator in Combinator::iter() {
            assert_eq!(Combinator::from_token(combinator.token()), Some(combinator));
            assert_eq!(combinator.to_string(), combinator.token());
        }
    }

    #[test]
    fn test_from_str_names() {
        assert_eq!("child".parse(), Ok(Combinator::Child));
        assert_eq!("adjacent".parse(), Ok(Combinator::NextSibling));
        assert_eq!("sibling".parse(), Ok(Combinator::NextSibling));
        assert_eq!("general-sibling".parse(), Ok(Combinator::SubsequentSibling));
        assert_eq!(" ".parse(), Ok(Combinator::Descendant));
        assert_eq!(
            ">>".parse::<Combinator>(),
            Err(ParseCombinatorError(">>".to_string()))
        );
    }
}
