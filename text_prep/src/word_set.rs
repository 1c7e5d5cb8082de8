// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashSet;

use crate::dictionary::{BUILTIN_WORDS, Dictionary, lowercase};

/// Kinds of errors that can occur when parsing a word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseWordListErrorKind {
    /// An entry between two commas (or before the first comma) was empty.
    EmptyToken,
    /// An entry contained whitespace between its characters.
    InteriorWhitespace,
}

/// Error returned by [`WordSet::parse_list`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseWordListError {
    kind: ParseWordListErrorKind,
    at: usize,
}

impl ParseWordListError {
    const fn new(kind: ParseWordListErrorKind, at: usize) -> Self {
        Self { kind, at }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseWordListErrorKind {
        self.kind
    }

    /// Returns the byte offset of the start of the offending entry.
    pub const fn byte_offset(self) -> usize {
        self.at
    }
}

impl fmt::Display for ParseWordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseWordListErrorKind::EmptyToken => "empty entry in word list",
            ParseWordListErrorKind::InteriorWhitespace => "whitespace inside word list entry",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseWordListError {}

/// An owned, hash-set backed [`Dictionary`].
///
/// Words are lowercased when inserted, so lookups through [`Dictionary::matches`] stay
/// case-insensitive regardless of how the words were supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<Box<str>>,
}

impl WordSet {
    /// Creates an empty word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a word set holding a copy of [`BUILTIN_WORDS`].
    ///
    /// This is a starting point for extending the built-in dictionary.
    ///
    /// ```
    /// use text_prep::{BUILTIN_WORDS, Dictionary, WordSet};
    ///
    /// let mut words = WordSet::builtin();
    /// assert_eq!(words.len(), BUILTIN_WORDS.len());
    /// words.insert("Le");
    /// assert!(words.matches("le"));
    /// ```
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().copied())
    }

    /// Creates a word set from `words`, skipping the ones [`insert`](Self::insert) rejects.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Parses a comma separated list of words.
    ///
    /// Whitespace around each entry is ignored, and a trailing comma is allowed. Entries must be
    /// non-empty and must not contain whitespace. Repeated entries are kept once.
    ///
    /// ```
    /// use text_prep::{Dictionary, ParseWordListErrorKind, WordSet};
    ///
    /// let words = WordSet::parse_list("a, The , +,").unwrap();
    /// assert_eq!(words.len(), 3);
    /// assert!(words.contains("the"));
    ///
    /// let err = WordSet::parse_list("a,,b").unwrap_err();
    /// assert_eq!(err.kind(), ParseWordListErrorKind::EmptyToken);
    /// assert_eq!(err.byte_offset(), 2);
    /// ```
    pub fn parse_list(s: &str) -> Result<Self, ParseWordListError> {
        let mut set = Self::new();
        let mut start = 0;
        let mut entries = s.split(',').peekable();
        while let Some(entry) = entries.next() {
            let offset = start;
            start += entry.len() + 1;
            let word = entry.trim();
            if word.is_empty() {
                // Only the entry after a trailing comma may be empty.
                if entries.peek().is_none() && offset != 0 {
                    break;
                }
                return Err(ParseWordListError::new(
                    ParseWordListErrorKind::EmptyToken,
                    offset,
                ));
            }
            if word.contains(char::is_whitespace) {
                return Err(ParseWordListError::new(
                    ParseWordListErrorKind::InteriorWhitespace,
                    offset,
                ));
            }
            if !set.insert(word) {
                log::debug!("ignoring repeated word list entry {word:?} at byte {offset}");
            }
        }
        Ok(set)
    }

    /// Adds `word` (lowercased) to the set.
    ///
    /// Empty words and words containing whitespace are skipped, since text is split on
    /// whitespace before lookup and they could never match.
    ///
    /// Returns `false` if the word was skipped or the set already contained it.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || word.contains(char::is_whitespace) {
            log::debug!("ignoring word {word:?}: empty or contains whitespace");
            return false;
        }
        self.words.insert(lowercase(word).into())
    }

    /// Returns the number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the (lowercase) words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(|word| &**word)
    }
}

impl Dictionary for WordSet {
    #[inline]
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
