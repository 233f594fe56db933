//! Errors raised while assembling a selector.
//!
//! All of these are usage errors detected at the offending call. No partial
//! fragment is ever produced alongside an error.

use thiserror::Error;

use crate::kind::ComponentKind;

/// Convenience alias for results carrying a [`SelectorError`].
pub type Result<T> = std::result::Result<T, SelectorError>;

/// A component could not be appended to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors),
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors),
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// A compound selector names at most one element type, one id and one
    /// pseudo-element.
    #[error(
        "element, id and pseudo-element may occur at most once in a selector \
         (found a second {kind})"
    )]
    DuplicateSingletonComponent {
        /// The singleton kind that was appended twice.
        kind: ComponentKind,
    },

    /// The component would land after one that must come later.
    #[error(
        "selector components must appear in the order element, id, class, \
         attribute, pseudo-class, pseudo-element ({kind} cannot follow {after})"
    )]
    OutOfOrderComponent {
        /// The kind being appended.
        kind: ComponentKind,
        /// The highest-ordered kind already present in the fragment.
        after: ComponentKind,
    },

    /// Components cannot be appended onto a fragment produced by `combine`.
    #[error("cannot append a {kind} to a combined selector; build it before combining")]
    UnsupportedOperation {
        /// The kind whose append was refused.
        kind: ComponentKind,
    },
}

impl SelectorError {
    /// The component kind the failing append tried to add.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match *self {
            Self::DuplicateSingletonComponent { kind }
            | Self::OutOfOrderComponent { kind, .. }
            | Self::UnsupportedOperation { kind } => kind,
        }
    }
}

/// A string did not name a component kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selector component '{0}' (expected element, id, class, attr, pseudo-class or pseudo-element)")]
pub struct ParseKindError(pub String);

/// A string did not name one of the four combinators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown combinator '{0}' (expected ' ', '>', '+' or '~')")]
pub struct ParseCombinatorError(pub String);
