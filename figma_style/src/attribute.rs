// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{FontStack, FontWeight, Region};

/// A single style attribute, as consumed by the host styling layer.
///
/// This crate produces attributes but never interprets them. When a host applies a list of
/// attributes, later entries override earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleAttribute {
    /// Font family stack.
    FontFamily(FontStack),
    /// Font weight.
    FontWeight(FontWeight),
    /// Font size in pixels.
    FontSize(i32),
    /// Extra spacing between letters, in pixels.
    LetterSpacing(f32),
    /// Semantic region.
    Region(Region),
    /// Vertical spacing between the lines of a paragraph, in pixels.
    Spacing(i64),
}

impl From<FontStack> for StyleAttribute {
    fn from(stack: FontStack) -> Self {
        Self::FontFamily(stack)
    }
}

impl From<FontWeight> for StyleAttribute {
    fn from(weight: FontWeight) -> Self {
        Self::FontWeight(weight)
    }
}

impl From<Region> for StyleAttribute {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}
