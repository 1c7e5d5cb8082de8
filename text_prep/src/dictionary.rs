// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

/// The words after which [`Builtin`] requests a non-breaking space.
///
/// Entries are lowercase and sorted by their UTF-8 bytes so that membership can be tested with a
/// binary search.
pub const BUILTIN_WORDS: &[&str] = &[
    "&", "+", "-", "/", "<", "=", ">", "a", "about", "all", "am", "an", "and", "any", "are", "as",
    "at", "be", "but", "by", "can", "do", "dr.", "each", "fig.", "for", "from", "had", "has", "he",
    "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "mr.", "mrs.", "ms.",
    "my", "no", "no.", "nor", "not", "of", "on", "onto", "or", "our", "over", "p.", "per", "pp.",
    "she", "so", "st.", "than", "that", "the", "their", "then", "these", "they", "this", "those",
    "to", "up", "us", "via", "vol.", "vs.", "was", "we", "what", "who", "with", "yet", "you",
    "your", "~", "§", "×", "–", "—",
];

/// A set of words that should not end a line.
///
/// Implementations store lowercase entries. [`contains`](Self::contains) is only ever called with
/// an already lowercased candidate; [`matches`](Self::matches) performs the lowercasing.
pub trait Dictionary {
    /// Returns `true` if `word` (already lowercase) is a member of this dictionary.
    fn contains(&self, word: &str) -> bool;

    /// Returns `true` if `word` is a member of this dictionary, ignoring case.
    ///
    /// Only the candidate is case-folded; punctuation and diacritics are compared as-is.
    ///
    /// ```
    /// use text_prep::{Builtin, Dictionary};
    ///
    /// assert!(Builtin.matches("The"));
    /// assert!(!Builtin.matches("the,"));
    /// ```
    fn matches(&self, word: &str) -> bool {
        self.contains(&lowercase(word))
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// The built-in dictionary of short English words and symbols, see [`BUILTIN_WORDS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Builtin;

impl Dictionary for Builtin {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        BUILTIN_WORDS.binary_search(&word).is_ok()
    }
}

/// Lowercases `word`, borrowing when it is already lowercase ASCII.
pub(crate) fn lowercase(word: &str) -> Cow<'_, str> {
    if word.bytes().all(|b| b.is_ascii() && !b.is_ascii_uppercase()) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}
