//! Entry points that start a chain from the empty fragment.
//!
//! Each function here is the same operation as the like-named method on
//! [`Fragment`], applied to [`Fragment::new()`]:
//!
//! ```
//! use trellis_selector::id;
//!
//! let selector = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), trellis_selector::SelectorError>(())
//! ```

use crate::combinator::{self, Combinator};
use crate::error::Result;
use crate::fragment::Fragment;
use crate::kind::ComponentKind;

/// Start a selector with a component of `kind`.
///
/// # Errors
///
/// Never fails on the empty fragment; the `Result` matches
/// [`Fragment::append`] so the call composes with `?`.
pub fn append(kind: ComponentKind, value: &str) -> Result<Fragment> {
    Fragment::new().append(kind, value)
}

/// Start a selector with a type selector: `div`.
///
/// # Errors
///
/// See [`append`].
pub fn element(value: &str) -> Result<Fragment> {
    append(ComponentKind::Element, value)
}

/// Start a selector with an id selector: `#main`.
///
/// # Errors
///
/// See [`append`].
pub fn id(value: &str) -> Result<Fragment> {
    append(ComponentKind::Id, value)
}

/// Start a selector with a class selector: `.container`.
///
/// # Errors
///
/// See [`append`].
pub fn class(value: &str) -> Result<Fragment> {
    append(ComponentKind::Class, value)
}

/// Start a selector with an attribute selector: `[lang|=en]`.
///
/// # Errors
///
/// See [`append`].
pub fn attr(value: &str) -> Result<Fragment> {
    append(ComponentKind::Attribute, value)
}

/// Start a selector with a pseudo-class: `:root`.
///
/// # Errors
///
/// See [`append`].
pub fn pseudo_class(value: &str) -> Result<Fragment> {
    append(ComponentKind::PseudoClass, value)
}

/// Start a selector with a pseudo-element: `::selection`.
///
/// # Errors
///
/// See [`append`].
pub fn pseudo_element(value: &str) -> Result<Fragment> {
    append(ComponentKind::PseudoElement, value)
}

/// The accumulated text of `fragment`; `""` for the empty fragment.
#[must_use]
pub fn stringify(fragment: &Fragment) -> String {
    fragment.stringify()
}

/// The builder as a type, for callers that prefer `Selector::element(..)`
/// over the free functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector;

impl Selector {
    /// See [`element`](fn@element).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn element(value: &str) -> Result<Fragment> {
        element(value)
    }

    /// See [`id`](fn@id).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn id(value: &str) -> Result<Fragment> {
        id(value)
    }

    /// See [`class`](fn@class).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn class(value: &str) -> Result<Fragment> {
        class(value)
    }

    /// See [`attr`](fn@attr).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn attr(value: &str) -> Result<Fragment> {
        attr(value)
    }

    /// See [`pseudo_class`](fn@pseudo_class).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn pseudo_class(value: &str) -> Result<Fragment> {
        pseudo_class(value)
    }

    /// See [`pseudo_element`](fn@pseudo_element).
    ///
    /// # Errors
    ///
    /// See [`append`].
    pub fn pseudo_element(value: &str) -> Result<Fragment> {
        pseudo_element(value)
    }

    /// See [`combinator::combine`].
    #[must_use]
    pub fn combine(left: &Fragment, combinator: Combinator, right: &Fragment) -> Fragment {
        combinator::combine(left, combinator, right)
    }

    /// See [`stringify`](fn@stringify).
    #[must_use]
    pub fn stringify(fragment: &Fragment) -> String {
        stringify(fragment)
    }
}
