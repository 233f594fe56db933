//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector crate for pass-through input it cannot vouch for
//! (non-standard combinator tokens) and by the CLI.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed with ANSI colors.
static COLOR: AtomicBool = AtomicBool::new(true);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("combinator", "non-standard combinator token '>>'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if !should_print {
        return;
    }

    let line = format!("[Trellis {component}] ⚠ {message}");
    if COLOR.load(Ordering::Relaxed) {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{line}");
    }
}

/// Returns `true` if this exact warning has already been emitted.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Enable or disable colored warning output.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        assert!(!has_warned("test", "first sighting"));
        warn_once("test", "first sighting");
        assert!(has_warned("test", "first sighting"));
        // A second call is a no-op but must not disturb the record.
        warn_once("test", "first sighting");
        assert!(has_warned("test", "first sighting"));
    }

    #[test]
    fn test_components_are_distinct() {
        warn_once("left", "shared message");
        assert!(has_warned("left", "shared message"));
        assert!(!has_warned("right", "shared message"));
    }
}
