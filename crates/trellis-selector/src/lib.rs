//! Fluent CSS selector builder for the Trellis toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element components
//!   - At most one element, id and pseudo-element per compound selector
//!   - Components kept in canonical order, checked at every append
//!
//! - **Combinators** ([§ 16](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!
//! Component values are opaque text: they are spliced in with the right
//! punctuation and never validated.
//!
//! # Not Implemented
//!
//! - Universal selector and namespaces
//! - Parsing selector strings back into fragments
//! - Specificity and matching against a document

/// Starting points for selector chains.
pub mod builder;
/// Combinator composition per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Error types.
pub mod error;
/// Immutable selector fragments.
pub mod fragment;
/// Component kinds and their canonical order.
pub mod kind;

// Re-exports for convenience
pub use builder::{
    Selector, append, attr, class, element, id, pseudo_class, pseudo_element, stringify,
};
pub use combinator::{Combinator, combine, combine_token};
pub use error::{ParseCombinatorError, ParseKindError, Result, SelectorError};
pub use fragment::Fragment;
pub use kind::ComponentKind;
