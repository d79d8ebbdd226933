//! Noise normalization.
//!
//! Query fragments and attribute text both go through the same stripping so
//! that formatting never affects matching: `New York`, `new-york` and
//! `(new)/york` all normalize to `newyork`.

use std::borrow::Cow;

/// Characters removed before comparison.
pub const NOISE_CHARS: &[char] = &[' ', '-', '(', ')', '/', '\\'];

/// Returns `true` if `c` is a formatting character.
pub fn is_noise(c: char) -> bool {
    NOISE_CHARS.contains(&c)
}

/// Removes every noise character, borrowing when there is nothing to remove.
pub fn strip_noise(text: &str) -> Cow<'_, str> {
    if text.contains(is_noise) {
        Cow::Owned(text.chars().filter(|c| !is_noise(*c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Lowercases and strips noise.
pub fn normalize(text: &str) -> String {
    strip_noise(&text.to_lowercase()).into_owned()
}
