//! Parse-error warnings with colored terminal output.
//!
//! The tokenizers, the tree builder and the cascade all recover from bad
//! input instead of failing. Each recovery is reported here, once per
//! distinct message, so a malformed page does not flood stderr.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Every `[component] message` key printed so far.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Report a recoverable problem (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("HTML Tokenizer", "unexpected character in tag open state");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Wren {component}] ⚠ {message}").yellow());
    }
}

/// Forget all recorded warnings (call before loading a new page).
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

/// Number of distinct warnings recorded since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Whether a warning with exactly this component and message was recorded.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    warned().as_ref().is_some_and(|set| set.contains(&key))
}
