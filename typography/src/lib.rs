// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typography helpers for UI text.
//!
//! - [`text_prep`] inserts non-breaking spaces after short words so they are never stranded at
//!   the end of a wrapped line.
//! - [`figma_style`] derives style attributes from design tool measurements.
//! - `typography` re-exports both and bridges them to a host UI framework through
//!   [`TextRenderer`].
//!
//! ## Scope
//!
//! Nothing here lays out or draws text. The host framework does that; this crate only produces
//! the strings and [`StyleAttribute`]s it consumes.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use typography::{StyleAttribute, StyleProps, TextRenderer, prepared_paragraph};
//! use typography::text_style_from_figma;
//!
//! /// Renders to a string, standing in for a real UI framework.
//! struct Html;
//!
//! impl TextRenderer for Html {
//!     type Node = String;
//!
//!     fn text(&mut self, text: &str) -> String {
//!         text.replace('\u{a0}', "&nbsp;")
//!     }
//!
//!     fn paragraph(&mut self, attrs: &[StyleAttribute], children: Vec<String>) -> String {
//!         let gap = match attrs.first() {
//!             Some(StyleAttribute::Spacing(gap)) => *gap,
//!             _ => 0,
//!         };
//!         format!("<p data-gap=\"{gap}\">{}</p>", children.concat())
//!     }
//! }
//!
//! let style = text_style_from_figma(&StyleProps::new("Inter", 16, 24));
//! let html = prepared_paragraph(&mut Html, &style, "Meet a friend");
//! assert_eq!(html, "<p data-gap=\"8\">Meet a&nbsp;friend</p>");
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

mod render;

pub use figma_style;
pub use text_prep;

pub use render::{TextRenderer, prepared_paragraph, prepared_text};

pub use figma_style::{
    FontFamilyName, FontStack, FontWeight, GenericFamily, Region, StyleAttribute, StyleProps,
    TextStyle, paragraph_attrs, text_style_from_figma,
};
pub use text_prep::{Dictionary, NBSP, WordSet, prepare_string, prepare_string_with};
