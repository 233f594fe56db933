//! Immutable selector fragments.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! A [`Fragment`] is a compound selector under construction: the text built
//! so far plus the kinds that produced it. Appending never touches the
//! receiver, it returns a fresh fragment, so a fragment can be branched into
//! several chains and shared across threads freely.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, SelectorError};
use crate::kind::ComponentKind;

/// An immutable, possibly partial, selector.
///
/// Every fragment reachable through the public API satisfies two
/// invariants:
/// - element, id and pseudo-element each appear at most once in
///   `used_kinds`;
/// - `used_kinds` never decreases in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    text: String,
    used_kinds: Vec<ComponentKind>,
    combined: bool,
}

impl Fragment {
    /// The empty starting fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            used_kinds: Vec::new(),
            combined: false,
        }
    }

    /// Result of joining two compound selectors with a combinator.
    pub(crate) const fn combined(text: String) -> Self {
        Self {
            text,
            used_kinds: Vec::new(),
            combined: true,
        }
    }

    /// Append one component of `kind`, formatted from `value`.
    ///
    /// Checks run in this order: appending onto a combined selector, a
    /// repeated singleton kind, then canonical order. Nothing is built
    /// unless all three pass.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::UnsupportedOperation`] if `self` came from
    ///   [`combine`](crate::combine).
    /// - [`SelectorError::DuplicateSingletonComponent`] if `kind` is element,
    ///   id or pseudo-element and is already present.
    /// - [`SelectorError::OutOfOrderComponent`] if a kind that sorts after
    ///   `kind` is already present.
    pub fn append(&self, kind: ComponentKind, value: &str) -> Result<Self> {
        if self.combined {
            return Err(SelectorError::UnsupportedOperation { kind });
        }

        if kind.is_singleton() && self.used_kinds.contains(&kind) {
            return Err(SelectorError::DuplicateSingletonComponent { kind });
        }

        if let Some(after) = self
            .used_kinds
            .iter()
            .copied()
            .filter(|used| used.order() > kind.order())
            .max()
        {
            return Err(SelectorError::OutOfOrderComponent { kind, after });
        }

        let formatted = kind.format(value);
        let mut text = String::with_capacity(self.text.len() + formatted.len());
        text.push_str(&self.text);
        text.push_str(&formatted);

        let mut used_kinds = Vec::with_capacity(self.used_kinds.len() + 1);
        used_kinds.extend_from_slice(&self.used_kinds);
        used_kinds.push(kind);

        Ok(Self {
            text,
            used_kinds,
            combined: false,
        })
    }

    /// Append a type selector: `div`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn element(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::Element, value)
    }

    /// Append an id selector: `#main`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn id(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::Id, value)
    }

    /// Append a class selector: `.container`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn class(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::Class, value)
    }

    /// Append an attribute selector. `value` is the bracket contents,
    /// e.g. `href$=".png"`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn attr(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::Attribute, value)
    }

    /// Append a pseudo-class: `:focus`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn pseudo_class(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::before`.
    ///
    /// # Errors
    ///
    /// See [`Fragment::append`].
    pub fn pseudo_element(&self, value: &str) -> Result<Self> {
        self.append(ComponentKind::PseudoElement, value)
    }

    /// The accumulated selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Borrow the accumulated selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Kinds appended so far, in append order. Empty for combined fragments.
    #[must_use]
    pub fn used_kinds(&self) -> &[ComponentKind] {
        &self.used_kinds
    }

    /// Whether this fragment was produced by a combinator.
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty() && self.used_kinds.is_empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Fragment> for String {
    fn from(fragment: Fragment) -> Self {
        fragment.text
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_records_kind() {
        let fragment = Fragment::new().class("a").unwrap().class("b").unwrap();
        assert_eq!(
            fragment.used_kinds(),
            [ComponentKind::Class, ComponentKind::Class]
        );
        assert_eq!(fragment.as_str(), ".a.b");
    }

    #[test]
    fn test_out_of_order_reports_highest_kind() {
        let fragment = Fragment::new()
            .class("a")
            .unwrap()
            .pseudo_class("hover")
            .unwrap();
        assert_eq!(
            fragment.id("x"),
            Err(SelectorError::OutOfOrderComponent {
                kind: ComponentKind::Id,
                after: ComponentKind::PseudoClass,
            })
        );
    }

    #[test]
    fn test_duplicate_checked_before_order() {
        // `#a.b` then `#c` is both a duplicate id and out of order.
        let fragment = Fragment::new().id("a").unwrap().class("b").unwrap();
        assert_eq!(
            fragment.id("c"),
            Err(SelectorError::DuplicateSingletonComponent {
                kind: ComponentKind::Id
            })
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(Fragment::new().is_empty());
        assert!(Fragment::default().is_empty());
        assert!(!Fragment::new().element("p").unwrap().is_empty());
    }
}
