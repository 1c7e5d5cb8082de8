// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use figma_style::{StyleAttribute, TextStyle};
use text_prep::prepare_string;

/// The parts of a host UI framework that prepared text is handed to.
///
/// Implement this for the framework's element builder. `Node` is whatever the framework uses for
/// a renderable element; it is never inspected here.
pub trait TextRenderer {
    /// A renderable element.
    type Node;

    /// Creates a text element from `text`.
    fn text(&mut self, text: &str) -> Self::Node;

    /// Creates a paragraph container styled with `attrs`, holding `children`.
    ///
    /// Later attributes in `attrs` override earlier ones.
    fn paragraph(&mut self, attrs: &[StyleAttribute], children: Vec<Self::Node>) -> Self::Node;
}

/// Runs [`prepare_string`] over `text` and hands the result to `renderer`.
pub fn prepared_text<R: TextRenderer + ?Sized>(renderer: &mut R, text: &str) -> R::Node {
    renderer.text(&prepare_string(text))
}

/// Creates a paragraph styled with [`TextStyle::paragraph_attrs`], holding `text` prepared by
/// [`prepared_text`].
pub fn prepared_paragraph<R: TextRenderer + ?Sized>(
    renderer: &mut R,
    style: &TextStyle,
    text: &str,
) -> R::Node {
    let child = prepared_text(renderer, text);
    renderer.paragraph(&style.paragraph_attrs(), vec![child])
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use figma_style::{StyleAttribute, StyleProps, text_style_from_figma};

    use super::{TextRenderer, prepared_paragraph, prepared_text};

    #[derive(Debug, PartialEq)]
    enum Node {
        Text(String),
        Paragraph(Vec<StyleAttribute>, Vec<Node>),
    }

    #[derive(Default)]
    struct Recorder {
        calls: usize,
    }

    impl TextRenderer for Recorder {
        type Node = Node;

        fn text(&mut self, text: &str) -> Node {
            self.calls += 1;
            Node::Text(text.into())
        }

        fn paragraph(&mut self, attrs: &[StyleAttribute], children: Vec<Node>) -> Node {
            self.calls += 1;
            Node::Paragraph(attrs.to_vec(), children)
        }
    }

    #[test]
    fn prepared_text_renders_prepared_string() {
        let mut renderer = Recorder::default();
        let node = prepared_text(&mut renderer, "a cat");
        assert_eq!(node, Node::Text("a\u{a0}cat".into()));
        assert_eq!(renderer.calls, 1);
    }

    #[test]
    fn prepared_paragraph_wraps_text_with_paragraph_attrs() {
        let mut renderer = Recorder::default();
        let style = text_style_from_figma(&StyleProps::new("Inter", 20, 28));
        let node = prepared_paragraph(&mut renderer, &style, "the end");
        assert_eq!(
            node,
            Node::Paragraph(
                style.paragraph_attrs(),
                alloc::vec![Node::Text("the\u{a0}end".into())]
            )
        );
        assert_eq!(renderer.calls, 2);
    }
}
