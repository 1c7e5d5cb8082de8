// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeps short words from being stranded at the end of a wrapped line.
//!
//! [`prepare_string`] rewrites text so that the space following a short word (an article,
//! preposition, pronoun, or a token such as `+` or `&`) becomes a non-breaking space
//! ([`NBSP`]). Layout engines will not wrap at a non-breaking space, so the short word always
//! travels to the next line together with the word that follows it.
//!
//! The set of short words is a [`Dictionary`]. [`Builtin`] is used by default; callers that need
//! a different set can build a [`WordSet`] and use [`prepare_string_with`].
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use text_prep::{NBSP, prepare_string};
//!
//! assert_eq!(prepare_string("a cat"), format!("a{NBSP}cat"));
//! assert_eq!(prepare_string("line one\nline two"), "line one\nline two");
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod dictionary;
mod prepare;
mod word_set;

pub use dictionary::{BUILTIN_WORDS, Builtin, Dictionary};
pub use prepare::{NBSP, NBSP_STR, prepare_string, prepare_string_into, prepare_string_with};
pub use word_set::{ParseWordListError, ParseWordListErrorKind, WordSet};
