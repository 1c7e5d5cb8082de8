// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility types shared across tests.

use typography::{NBSP, StyleAttribute, TextRenderer};

/// Replaces every `_` in `s` with a non-breaking space, to keep expectations readable.
pub(crate) fn nb(s: &str) -> String {
    s.replace('_', &NBSP.to_string())
}

/// A host node, as built by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
    Text(String),
    Paragraph(Vec<StyleAttribute>, Vec<Node>),
}

/// A [`TextRenderer`] that builds a plain tree of everything it was asked to render.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) texts: Vec<String>,
}

impl TextRenderer for Recorder {
    type Node = Node;

    fn text(&mut self, text: &str) -> Node {
        self.texts.push(text.to_owned());
        Node::Text(text.to_owned())
    }

    fn paragraph(&mut self, attrs: &[StyleAttribute], children: Vec<Node>) -> Node {
        Node::Paragraph(attrs.to_vec(), children)
    }
}
