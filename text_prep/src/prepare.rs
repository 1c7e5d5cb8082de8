// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use smallvec::SmallVec;

use crate::dictionary::{Builtin, Dictionary};

/// The non-breaking space character (U+00A0).
///
/// Useful when composing strings by hand, outside of [`prepare_string`].
pub const NBSP: char = '\u{a0}';

/// [`NBSP`] as a string slice.
pub const NBSP_STR: &str = "\u{a0}";

/// How a word is joined to whatever follows it on its line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Joint {
    /// Nothing follows.
    End,
    /// An ordinary, breakable space.
    Space,
    /// A non-breaking space, even when nothing follows.
    NoBreak,
}

/// Replaces the space after every [`Builtin`] dictionary word with a non-breaking space.
///
/// The text is processed line by line (lines are separated by `'\n'`). Within a line, words are
/// separated by runs of whitespace, which are collapsed to a single space. A word that is in the
/// dictionary (compared case-insensitively) is joined to the rest of the line with [`NBSP`]
/// instead. This also happens for the last word of a line, leaving a trailing [`NBSP`].
///
/// ```
/// use text_prep::prepare_string;
///
/// assert_eq!(prepare_string(""), "");
/// assert_eq!(prepare_string("a + b"), "a\u{a0}+\u{a0}b");
/// assert_eq!(prepare_string("A   cat"), "A\u{a0}cat");
/// assert_eq!(prepare_string("cat a"), "cat a\u{a0}");
/// ```
pub fn prepare_string(text: &str) -> String {
    prepare_string_with(text, Builtin)
}

/// Like [`prepare_string`], using `dictionary` instead of the [`Builtin`] one.
///
/// ```
/// use text_prep::{WordSet, prepare_string_with};
///
/// let words = WordSet::from_words(["le", "la"]);
/// assert_eq!(prepare_string_with("Le chat a", &words), "Le\u{a0}chat a");
/// ```
pub fn prepare_string_with<D: Dictionary>(text: &str, dictionary: D) -> String {
    let mut out = String::with_capacity(text.len());
    prepare_string_into(text, dictionary, &mut out);
    out
}

/// Like [`prepare_string_with`], appending the result to `out`.
pub fn prepare_string_into<D: Dictionary>(text: &str, dictionary: D, out: &mut String) {
    for (index, line) in text.split('\n').enumerate() {
        if index != 0 {
            out.push('\n');
        }
        prepare_line(line, &dictionary, out);
    }
}

fn prepare_line<D: Dictionary>(line: &str, dictionary: &D, out: &mut String) {
    let words: SmallVec<[&str; 16]> = line.split_whitespace().collect();

    // Walk from the right. Whether a word ends the line is only known once everything to its
    // right has been accumulated.
    let mut joints: SmallVec<[Joint; 16]> = SmallVec::with_capacity(words.len());
    for word in words.iter().rev() {
        let joint = if dictionary.matches(word) {
            Joint::NoBreak
        } else if joints.is_empty() {
            Joint::End
        } else {
            Joint::Space
        };
        joints.push(joint);
    }

    for (word, joint) in words.iter().zip(joints.iter().rev()) {
        out.push_str(word);
        match joint {
            Joint::End => {}
            Joint::Space => out.push(' '),
            Joint::NoBreak => out.push(NBSP),
        }
    }
}
