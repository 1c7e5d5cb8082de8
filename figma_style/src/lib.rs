// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text style attributes derived from design tool measurements.
//!
//! Design tools such as Figma describe text with a font family, a weight style name, a font size
//! and a line height in pixels, and a letter spacing given as a percentage of the font size.
//! UI styling layers usually want something slightly different: an absolute letter spacing, and,
//! when they lack a line-height attribute, a paragraph spacing that inserts the same vertical gap
//! between wrapped lines.
//!
//! [`text_style_from_figma`] performs that mapping from [`StyleProps`] to a [`TextStyle`], a list
//! of [`StyleAttribute`]s plus the derived paragraph spacing. [`paragraph_attrs`] flattens a
//! [`TextStyle`] for use on a paragraph container.
//!
//! No validation takes place: the mapping is total, and sizes that make no sense (for example a
//! line height smaller than the font size) produce equally odd, but well-formed, attributes.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use figma_style::{FontStack, FontWeight, Region, StyleAttribute, StyleProps};
//! use figma_style::{paragraph_attrs, text_style_from_figma};
//!
//! let props = StyleProps::new(FontStack::parse("Inter, sans-serif").unwrap(), 16, 24)
//!     .weight(FontWeight::SEMI_BOLD)
//!     .letter_spacing_percent(-2.5)
//!     .region(Region::Heading(1));
//! let style = text_style_from_figma(&props);
//!
//! assert_eq!(style.paragraph_spacing(), 8);
//! assert_eq!(style.attrs()[3], StyleAttribute::LetterSpacing(-0.4));
//! assert_eq!(style.attrs().last(), Some(&StyleAttribute::Region(Region::Heading(1))));
//!
//! let attrs = paragraph_attrs(&style);
//! assert_eq!(attrs[0], StyleAttribute::Spacing(8));
//! assert_eq!(&attrs[1..], style.attrs());
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

mod attribute;
mod family;
mod region;
mod text_style;
mod weight;


pub use attribute::StyleAttribute;
pub use family::{
    FontFamilyName, FontStack, GenericFamily, ParseFontStackError, ParseFontStackErrorKind,
};
pub use region::Region;
pub use text_style::{StyleProps, TextStyle, paragraph_attrs, text_style_from_figma};
pub use weight::{FontWeight, ParseFontWeightError, ParseFontWeightErrorKind};
