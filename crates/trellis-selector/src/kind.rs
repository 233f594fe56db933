//! Component kinds and their canonical order.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "If it contains a type selector or universal selector, that selector must
//! come first in the sequence. Only one type selector or universal selector
//! is allowed in the sequence."
//!
//! This crate enforces a stricter, fixed order over every kind, so a
//! compound selector always reads element, id, classes, attributes,
//! pseudo-classes, then the pseudo-element.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::error::ParseKindError;

/// One kind of simple selector that can be appended to a fragment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl ComponentKind {
    /// Every kind, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the canonical order (element = 0).
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Element, id and pseudo-element may appear at most once per fragment.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Splice `value` into the selector syntax for this kind.
    ///
    /// The value is opaque text and is not checked against CSS identifier
    /// rules.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

impl FromStr for ComponentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "element" | "type" | "tag" => Ok(Self::Element),
            "id" => Ok(Self::Id),
            "class" => Ok(Self::Class),
            "attr" | "attribute" => Ok(Self::Attribute),
            "pseudo-class" | "pseudoClass" => Ok(Self::PseudoClass),
            "pseudo-element" | "pseudoElement" => Ok(Self::PseudoElement),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
