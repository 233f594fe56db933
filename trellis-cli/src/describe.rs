//! Step descriptions: the command-line spelling of a selector chain.
//!
//! A step is `kind=value`, e.g. `element=div` or `pseudo-class=nth-child(2n)`.
//! Only the first `=` separates the kind from the value, so attribute steps
//! such as `attr=href$=".png"` keep their operator. Steps in one compound are
//! separated by whitespace outside parentheses, brackets and quotes, so
//! `pseudo-class=not(.a, .b)` stays a single step.

use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use trellis_common::warning::warn_once;
use trellis_selector::{Combinator, ComponentKind, Fragment, combine};

/// One `kind=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Which component the step appends.
    pub kind: ComponentKind,
    /// Raw value, spliced in unvalidated.
    pub value: String,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| anyhow!("step '{s}' is not of the form kind=value"))?;
        let kind = kind
            .trim()
            .parse::<ComponentKind>()
            .with_context(|| format!("in step '{s}'"))?;
        if value.is_empty() {
            warn_once("cli", &format!("step '{s}' has an empty value"));
        }
        Ok(Self {
            kind,
            value: value.to_string(),
        })
    }
}

/// Fold steps over the empty fragment, stopping at the first rejected one.
pub fn build(steps: &[Step]) -> Result<Fragment> {
    steps.iter().try_fold(Fragment::new(), |fragment, step| {
        fragment
            .append(step.kind, &step.value)
            .with_context(|| format!("cannot append {}={}", step.kind, step.value))
    })
}

/// Split a description into steps at whitespace outside `()`, `[]` and quotes.
fn split_steps(description: &str) -> Vec<&str> {
    let mut steps = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = None;

    for (i, c) in description.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ws) if ws.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    steps.push(&description[begin..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        steps.push(&description[begin..]);
    }
    steps
}

/// Parse a compound description into steps and build it.
pub fn build_compound(description: &str) -> Result<Fragment> {
    if description.trim().is_empty() {
        warn_once("cli", "empty compound selector in combination");
    }
    let steps = split_steps(description)
        .into_iter()
        .map(str::parse::<Step>)
        .collect::<Result<Vec<Step>>>()?;
    build(&steps)
}

/// Build `compound (combinator compound)*` from alternating arguments.
pub fn build_complex(parts: &[String]) -> Result<Fragment> {
    let Some((first, rest)) = parts.split_first() else {
        bail!("nothing to combine");
    };
    let pairs = rest.chunks_exact(2);
    if rest.is_empty() || !pairs.remainder().is_empty() {
        let count = parts.len();
        bail!("expected COMPOUND (COMBINATOR COMPOUND)..., got {count} argument(s)");
    }

    let mut selector = build_compound(first)?;
    for pair in pairs {
        let combinator = pair[0]
            .parse::<Combinator>()
            .context("combinators must be one of ' ', '>', '+', '~'")?;
        let right = build_compound(&pair[1])?;
        selector = combine(&selector, combinator, &right);
    }
    Ok(selector)
}
