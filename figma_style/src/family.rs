// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font families and fallback stacks.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Kinds of errors that can occur when parsing a font stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFontStackErrorKind {
    /// An entry between two commas (or before the first comma) was empty.
    EmptyEntry,
    /// A quoted family name was missing a closing quote.
    UnterminatedString,
    /// Something other than a comma followed a quoted family name.
    InvalidSyntax,
}

/// Error returned by [`FontStack::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFontStackError {
    kind: ParseFontStackErrorKind,
    at: usize,
    span: Option<(usize, usize)>,
}

impl ParseFontStackError {
    const fn new(kind: ParseFontStackErrorKind, at: usize) -> Self {
        Self {
            kind,
            at,
            span: None,
        }
    }

    /// Returns the error kind.
    pub const fn kind(self) -> ParseFontStackErrorKind {
        self.kind
    }

    /// Returns the byte offset into the source where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.at
    }

    /// Returns the byte span (start, end) of the offending token, if available.
    pub const fn byte_span(self) -> Option<(usize, usize)> {
        self.span
    }
}

impl fmt::Display for ParseFontStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseFontStackErrorKind::EmptyEntry => "empty entry in font stack",
            ParseFontStackErrorKind::UnterminatedString => "unterminated string in font stack",
            ParseFontStackErrorKind::InvalidSyntax => "invalid font stack syntax",
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseFontStackError {}

/// Generic font families understood by the styling layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericFamily {
    /// A font with serifs.
    Serif,
    /// A font without serifs.
    SansSerif,
    /// A font where all glyphs have the same advance.
    Monospace,
}

impl GenericFamily {
    /// Parses a CSS generic family keyword, ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        [Self::Serif, Self::SansSerif, Self::Monospace]
            .into_iter()
            .find(|family| family.keyword().eq_ignore_ascii_case(s))
    }

    /// Returns the CSS keyword for this family.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }
}

impl fmt::Display for GenericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single entry of a [`FontStack`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamilyName {
    /// A font family referred to by name, such as `"Inter"`.
    Named(Cow<'static, str>),
    /// A generic font family.
    Generic(GenericFamily),
}

impl FontFamilyName {
    /// Creates a named font family from a static string.
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// Creates a named font family, also called a typeface.
    pub fn typeface(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Named(name.into())
    }
}

impl From<GenericFamily> for FontFamilyName {
    fn from(family: GenericFamily) -> Self {
        Self::Generic(family)
    }
}

impl fmt::Display for FontFamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => {
                if name.contains(|c: char| c.is_whitespace() || c == ',')
                    || GenericFamily::parse(name).is_some()
                {
                    write!(f, "{name:?}")
                } else {
                    f.write_str(name)
                }
            }
            Self::Generic(family) => fmt::Display::fmt(family, f),
        }
    }
}

/// An ordered list of font families, in fallback priority.
///
/// The first family is preferred; later families are used when earlier ones are unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontStack {
    families: Vec<FontFamilyName>,
}

impl FontStack {
    /// Creates an empty font stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fallback family.
    pub fn push(mut self, family: impl Into<FontFamilyName>) -> Self {
        self.families.push(family.into());
        self
    }

    /// Returns the families in fallback order.
    pub fn families(&self) -> &[FontFamilyName] {
        &self.families
    }

    /// Returns the number of families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Returns `true` if the stack has no families.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Parses a comma separated, CSS-like list of font families.
    ///
    /// Quoted names (with `'` or `"`) are always named families and keep their inner whitespace.
    /// Unquoted `serif`, `sans-serif` and `monospace` are generic families. A trailing comma is
    /// allowed; empty entries are not.
    ///
    /// ```
    /// use figma_style::{FontFamilyName, FontStack, GenericFamily, ParseFontStackErrorKind};
    ///
    /// let stack = FontStack::parse("Inter, 'Helvetica Neue', sans-serif").unwrap();
    /// assert_eq!(
    ///     stack.families(),
    ///     [
    ///         FontFamilyName::named("Inter"),
    ///         FontFamilyName::named("Helvetica Neue"),
    ///         FontFamilyName::Generic(GenericFamily::SansSerif),
    ///     ]
    /// );
    ///
    /// let err = FontStack::parse("Inter,,serif").unwrap_err();
    /// assert_eq!(err.kind(), ParseFontStackErrorKind::EmptyEntry);
    /// assert_eq!(err.byte_offset(), 6);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseFontStackError> {
        let bytes = s.as_bytes();
        let len = bytes.len();
        let skip_whitespace = |mut pos: usize| {
            while pos < len && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            pos
        };

        let mut families = Vec::new();
        let mut pos = skip_whitespace(0);
        loop {
            if pos == len {
                if families.is_empty() {
                    return Err(ParseFontStackError::new(
                        ParseFontStackErrorKind::EmptyEntry,
                        pos,
                    ));
                }
                break;
            }
            match bytes[pos] {
                quote @ (b'"' | b'\'') => {
                    let start = pos;
                    let Some(close) = bytes[start + 1..].iter().position(|b| *b == quote) else {
                        let mut err = ParseFontStackError::new(
                            ParseFontStackErrorKind::UnterminatedString,
                            start,
                        );
                        err.span = Some((start, len));
                        return Err(err);
                    };
                    let end = start + 1 + close;
                    families.push(FontFamilyName::Named(Cow::Owned(String::from(
                        &s[start + 1..end],
                    ))));
                    pos = skip_whitespace(end + 1);
                    if pos < len && bytes[pos] != b',' {
                        return Err(ParseFontStackError::new(
                            ParseFontStackErrorKind::InvalidSyntax,
                            pos,
                        ));
                    }
                }
                b',' => {
                    return Err(ParseFontStackError::new(
                        ParseFontStackErrorKind::EmptyEntry,
                        pos,
                    ));
                }
                _ => {
                    let end = bytes[pos..]
                        .iter()
                        .position(|b| *b == b',')
                        .map_or(len, |offset| pos + offset);
                    let name = s[pos..end].trim();
                    if name.is_empty() {
                        return Err(ParseFontStackError::new(
                            ParseFontStackErrorKind::EmptyEntry,
                            pos,
                        ));
                    }
                    families.push(match GenericFamily::parse(name) {
                        Some(generic) => FontFamilyName::Generic(generic),
                        None => FontFamilyName::Named(Cow::Owned(String::from(name))),
                    });
                    pos = end;
                }
            }
            if pos < len {
                // Consume the comma.
                pos = skip_whitespace(pos + 1);
            }
        }
        Ok(Self { families })
    }
}

impl From<FontFamilyName> for FontStack {
    fn from(family: FontFamilyName) -> Self {
        Self {
            families: alloc::vec![family],
        }
    }
}

impl From<GenericFamily> for FontStack {
    fn from(family: GenericFamily) -> Self {
        FontFamilyName::Generic(family).into()
    }
}

impl From<&'static str> for FontStack {
    fn from(name: &'static str) -> Self {
        FontFamilyName::named(name).into()
    }
}

impl FromIterator<FontFamilyName> for FontStack {
    fn from_iter<I: IntoIterator<Item = FontFamilyName>>(iter: I) -> Self {
        Self {
            families: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FontStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, family) in self.families.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{family}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{FontFamilyName, FontStack, GenericFamily, ParseFontStackErrorKind};

    #[test]
    fn generic_keywords_ignore_case() {
        assert_eq!(GenericFamily::parse(" Sans-Serif "), Some(GenericFamily::SansSerif));
        assert_eq!(GenericFamily::parse("cursive"), None);
    }

    #[test]
    fn quoted_generic_keyword_is_named() {
        let stack = FontStack::parse("\"monospace\", monospace").unwrap();
        assert_eq!(
            stack.families(),
            [
                FontFamilyName::named("monospace"),
                FontFamilyName::Generic(GenericFamily::Monospace),
            ]
        );
    }

    #[test]
    fn quoted_name_preserves_inner_whitespace() {
        let stack = FontStack::parse("'  Times New Roman  '").unwrap();
        assert_eq!(stack.families(), [FontFamilyName::named("  Times New Roman  ")]);
    }

    #[test]
    fn unquoted_name_keeps_inner_spaces() {
        let stack = FontStack::parse("  Helvetica Neue ,Arial").unwrap();
        assert_eq!(
            stack.families(),
            [FontFamilyName::named("Helvetica Neue"), FontFamilyName::named("Arial")]
        );
    }

    #[test]
    fn trailing_comma_is_ok() {
        let stack = FontStack::parse("Inter, ").unwrap();
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn empty_source_is_rejected() {
        let err = FontStack::parse("   ").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::EmptyEntry);
        assert_eq!(err.byte_offset(), 3);
    }

    #[test]
    fn leading_comma_is_rejected() {
        let err = FontStack::parse(", Inter").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::EmptyEntry);
        assert_eq!(err.byte_offset(), 0);
    }

    #[test]
    fn unicode_whitespace_entry_is_empty() {
        let err = FontStack::parse("Inter,\u{a0},serif").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::EmptyEntry);
        assert_eq!(err.byte_offset(), 6);

        let err = FontStack::parse("Inter, \u{2003}").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::EmptyEntry);
        assert_eq!(err.byte_offset(), 7);
    }

    #[test]
    fn unterminated_string_reports_span() {
        let err = FontStack::parse("Inter, 'Roboto").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::UnterminatedString);
        assert_eq!(err.byte_offset(), 7);
        assert_eq!(err.byte_span(), Some((7, 14)));
    }

    #[test]
    fn quoted_name_must_be_followed_by_comma() {
        let err = FontStack::parse("'Times New Roman' serif").unwrap_err();
        assert_eq!(err.kind(), ParseFontStackErrorKind::InvalidSyntax);
        assert_eq!(err.byte_offset(), 18);
    }

    #[test]
    fn display_quotes_when_needed() {
        let stack = FontStack::new()
            .push(FontFamilyName::named("Inter"))
            .push(FontFamilyName::named("Helvetica Neue"))
            .push(FontFamilyName::named("serif"))
            .push(GenericFamily::Serif);
        assert_eq!(stack.to_string(), "Inter, \"Helvetica Neue\", \"serif\", serif");
    }
}
