// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

/// The semantic role of a piece of text, used for accessibility markup.
///
/// A region does not change how text looks. It tells the host framework which semantic element
/// (for example an `<h2>` or a landmark) to emit for the styled text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// A heading of the given level, where `1` is the top level.
    Heading(u8),
    /// The main content of a page.
    MainContent,
    /// A navigation landmark.
    Navigation,
    /// A footer landmark.
    Footer,
    /// Complementary content.
    Aside,
    /// A text description for assistive technology.
    Description(Cow<'static, str>),
    /// A live region whose changes are announced politely.
    Announce,
    /// A live region whose changes are announced immediately.
    AnnounceUrgently,
}
