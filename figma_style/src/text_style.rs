// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{FontStack, FontWeight, Region, StyleAttribute};

/// Text measurements as read from a design tool.
///
/// The fields are public so that props can be written as a struct literal; [`StyleProps::new`]
/// and the chained setters are a shorthand for the common case.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleProps {
    /// Font families, in fallback priority.
    pub font_family: FontStack,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font size in pixels. Expected to be positive.
    pub font_size_px: i32,
    /// Line height in pixels: the total vertical space taken by one line. Expected to be
    /// positive.
    pub line_height_px: i32,
    /// Letter spacing as a percentage of the font size. May be negative.
    pub letter_spacing_percent: f32,
    /// Semantic region, if any.
    pub region: Option<Region>,
}

impl StyleProps {
    /// Creates props with a regular weight, no letter spacing and no region.
    pub fn new(font_family: impl Into<FontStack>, font_size_px: i32, line_height_px: i32) -> Self {
        Self {
            font_family: font_family.into(),
            font_weight: FontWeight::REGULAR,
            font_size_px,
            line_height_px,
            letter_spacing_percent: 0.0,
            region: None,
        }
    }

    /// Sets the font weight.
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Sets the letter spacing, as a percentage of the font size.
    pub fn letter_spacing_percent(mut self, percent: f32) -> Self {
        self.letter_spacing_percent = percent;
        self
    }

    /// Sets the semantic region.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

/// Style attributes derived from [`StyleProps`] by [`text_style_from_figma`].
///
/// A `TextStyle` cannot be changed once built. Use [`attrs`](Self::attrs) on text elements and
/// [`paragraph_attrs`](Self::paragraph_attrs) on paragraph containers.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    attrs: SmallVec<[StyleAttribute; 5]>,
    paragraph_spacing: i64,
}

impl TextStyle {
    /// Returns the text attributes: family, weight, size, letter spacing and, if present, region.
    pub fn attrs(&self) -> &[StyleAttribute] {
        &self.attrs
    }

    /// Returns the paragraph spacing in pixels: line height minus font size.
    ///
    /// This is neither clamped nor wrapped, so it is negative when the line height is smaller than
    /// the font size, and exact for any pair of `i32` measurements.
    pub fn paragraph_spacing(&self) -> i64 {
        self.paragraph_spacing
    }

    /// Returns the paragraph spacing as a [`StyleAttribute::Spacing`].
    pub fn spacing_attr(&self) -> StyleAttribute {
        StyleAttribute::Spacing(self.paragraph_spacing)
    }

    /// See [`paragraph_attrs`].
    pub fn paragraph_attrs(&self) -> Vec<StyleAttribute> {
        let mut out = Vec::with_capacity(self.attrs.len() + 1);
        out.push(self.spacing_attr());
        out.extend(self.attrs.iter().cloned());
        out
    }
}

/// Derives a [`TextStyle`] from design tool measurements.
///
/// - Letter spacing is converted from a percentage of the font size to pixels.
/// - A region is appended as the last attribute when present, and omitted otherwise.
/// - Paragraph spacing is `line_height_px - font_size_px`.
///
/// Nothing is validated; odd measurements produce odd attributes.
///
/// ```
/// use figma_style::{FontStack, StyleAttribute, StyleProps, text_style_from_figma};
///
/// let style = text_style_from_figma(&StyleProps::new("Inter", 16, 24));
/// assert_eq!(style.paragraph_spacing(), 8);
/// assert_eq!(style.attrs()[2], StyleAttribute::FontSize(16));
/// assert_eq!(style.attrs()[3], StyleAttribute::LetterSpacing(0.0));
/// ```
pub fn text_style_from_figma(props: &StyleProps) -> TextStyle {
    if props.font_size_px <= 0 || props.line_height_px <= 0 {
        log::debug!(
            "non-positive text measurements passed through: font size {}px, line height {}px",
            props.font_size_px,
            props.line_height_px
        );
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "Pixel font sizes are far below the range where f32 loses integer precision."
    )]
    let font_size = props.font_size_px as f32;
    let letter_spacing = font_size * (props.letter_spacing_percent / 100.0);

    let mut attrs = SmallVec::new();
    attrs.push(StyleAttribute::FontFamily(props.font_family.clone()));
    attrs.push(StyleAttribute::FontWeight(props.font_weight));
    attrs.push(StyleAttribute::FontSize(props.font_size_px));
    attrs.push(StyleAttribute::LetterSpacing(letter_spacing));
    if let Some(region) = &props.region {
        attrs.push(StyleAttribute::Region(region.clone()));
    }

    TextStyle {
        attrs,
        paragraph_spacing: i64::from(props.line_height_px) - i64::from(props.font_size_px),
    }
}

/// Returns the attributes for a paragraph container: [`StyleAttribute::Spacing`] first, then
/// [`TextStyle::attrs`] in order.
///
/// Spacing comes first so that any attribute of the style itself takes precedence over it.
pub fn paragraph_attrs(style: &TextStyle) -> Vec<StyleAttribute> {
    style.paragraph_attrs()
}
