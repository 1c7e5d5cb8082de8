// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// Kinds of errors that can occur when parsing a font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFontWeightErrorKind {
    /// The style name is not a known weight.
    UnknownStyle,
    /// A numeric weight outside of `1..=1000`.
    OutOfRange,
}

/// Error returned by [`FontWeight::from_figma_style`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFontWeightError {
    kind: ParseFontWeightErrorKind,
}

impl ParseFontWeightError {
    const fn new(kind: ParseFontWeightErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseFontWeightErrorKind {
        self.kind
    }
}

impl fmt::Display for ParseFontWeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self.kind {
            ParseFontWeightErrorKind::UnknownStyle => "unknown font weight style name",
            ParseFontWeightErrorKind::OutOfRange => "font weight out of range 1..=1000",
        })
    }
}

impl core::error::Error for ParseFontWeightError {}

/// Visual weight of a font, on the usual scale from 1 to 1000.
///
/// The styling layer treats the weight as opaque; it is passed through to
/// [`StyleAttribute::FontWeight`](crate::StyleAttribute::FontWeight) unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100, also called "hairline".
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 400. This is the default value.
    pub const REGULAR: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900, also called "heavy".
    pub const BLACK: Self = Self(900);

    /// Creates a new weight value.
    pub const fn new(weight: u16) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses the weight part of a design tool font style name.
    ///
    /// Style names are matched ignoring ASCII case, spaces, hyphens and underscores, so
    /// `"SemiBold"`, `"Semi Bold"` and `"semi-bold"` are all the same weight. A trailing `Italic`
    /// or `Oblique` is ignored; on its own it means [`FontWeight::REGULAR`]. A plain number is
    /// accepted as long as it is in `1..=1000`.
    ///
    /// ```
    /// use figma_style::{FontWeight, ParseFontWeightErrorKind};
    ///
    /// assert_eq!(FontWeight::from_figma_style("Semi Bold"), Ok(FontWeight::SEMI_BOLD));
    /// assert_eq!(FontWeight::from_figma_style("Bold Italic"), Ok(FontWeight::BOLD));
    /// assert_eq!(FontWeight::from_figma_style("Italic"), Ok(FontWeight::REGULAR));
    /// assert_eq!(FontWeight::from_figma_style("450"), Ok(FontWeight::new(450)));
    /// assert_eq!(
    ///     FontWeight::from_figma_style("Condensed").unwrap_err().kind(),
    ///     ParseFontWeightErrorKind::UnknownStyle
    /// );
    /// ```
    pub fn from_figma_style(s: &str) -> Result<Self, ParseFontWeightError> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u16>()
                .ok()
                .filter(|weight| (1..=1000).contains(weight))
                .map(Self)
                .ok_or(ParseFontWeightError::new(
                    ParseFontWeightErrorKind::OutOfRange,
                ));
        }

        let mut words: SmallVec<[&str; 4]> = s.split_whitespace().collect();
        if words.last().is_some_and(|last| {
            last.eq_ignore_ascii_case("italic") || last.eq_ignore_ascii_case("oblique")
        }) {
            words.pop();
        }

        let mut key = String::with_capacity(s.len());
        for word in &words {
            key.extend(
                word.chars()
                    .filter(|c| !matches!(c, '-' | '_'))
                    .map(|c| c.to_ascii_lowercase()),
            );
        }

        Ok(match key.as_str() {
            "thin" | "hairline" => Self::THIN,
            "extralight" | "ultralight" => Self::EXTRA_LIGHT,
            "light" => Self::LIGHT,
            "" | "regular" | "normal" | "book" => Self::REGULAR,
            "medium" => Self::MEDIUM,
            "semibold" | "demibold" => Self::SEMI_BOLD,
            "bold" => Self::BOLD,
            "extrabold" | "ultrabold" => Self::EXTRA_BOLD,
            "black" | "heavy" => Self::BLACK,
            _ => {
                return Err(ParseFontWeightError::new(
                    ParseFontWeightErrorKind::UnknownStyle,
                ));
            }
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            100 => "Thin",
            200 => "ExtraLight",
            300 => "Light",
            400 => "Regular",
            500 => "Medium",
            600 => "SemiBold",
            700 => "Bold",
            800 => "ExtraBold",
            900 => "Black",
            weight => return write!(f, "{weight}"),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{FontWeight, ParseFontWeightErrorKind};

    #[test]
    fn style_names_ignore_case_and_separators() {
        for name in ["SemiBold", "Semi Bold", "semi-bold", "SEMI_BOLD", "Demibold"] {
            assert_eq!(FontWeight::from_figma_style(name), Ok(FontWeight::SEMI_BOLD));
        }
        assert_eq!(FontWeight::from_figma_style("Extra Light"), Ok(FontWeight::EXTRA_LIGHT));
        assert_eq!(FontWeight::from_figma_style("Heavy Oblique"), Ok(FontWeight::BLACK));
    }

    #[test]
    fn numbers_must_be_in_range() {
        assert_eq!(FontWeight::from_figma_style("1000"), Ok(FontWeight::new(1000)));
        for value in ["0", "1001", "99999"] {
            assert_eq!(
                FontWeight::from_figma_style(value).unwrap_err().kind(),
                ParseFontWeightErrorKind::OutOfRange
            );
        }
    }

    #[test]
    fn empty_name_is_regular() {
        assert_eq!(FontWeight::from_figma_style("  "), Ok(FontWeight::REGULAR));
        assert_eq!(FontWeight::default(), FontWeight::REGULAR);
    }

    #[test]
    fn display_uses_style_names() {
        assert_eq!(FontWeight::SEMI_BOLD.to_string(), "SemiBold");
        assert_eq!(FontWeight::new(450).to_string(), "450");
    }
}
