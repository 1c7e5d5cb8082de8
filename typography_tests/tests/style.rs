// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style mapping tests.

use typography::figma_style::ParseFontStackErrorKind;
use typography::{
    FontFamilyName, FontStack, FontWeight, GenericFamily, Region, StyleAttribute, StyleProps,
    paragraph_attrs, text_style_from_figma,
};

fn heading_props() -> StyleProps {
    StyleProps::new(FontStack::parse("'Playfair Display', serif").unwrap(), 32, 40)
        .weight(FontWeight::from_figma_style("Bold").unwrap())
        .letter_spacing_percent(-1.0)
}

#[test]
fn style_body_text_measurements() {
    let props = StyleProps::new("Inter", 16, 24);
    let style = text_style_from_figma(&props);
    assert_eq!(style.paragraph_spacing(), 8);
    assert_eq!(
        style.attrs(),
        [
            StyleAttribute::FontFamily(FontStack::from("Inter")),
            StyleAttribute::FontWeight(FontWeight::REGULAR),
            StyleAttribute::FontSize(16),
            StyleAttribute::LetterSpacing(0.0),
        ]
    );
}

#[test]
fn style_heading_measurements() {
    let style = text_style_from_figma(&heading_props());
    assert_eq!(style.paragraph_spacing(), 8);
    assert_eq!(
        style.attrs()[0],
        StyleAttribute::FontFamily(
            FontStack::new()
                .push(FontFamilyName::named("Playfair Display"))
                .push(GenericFamily::Serif)
        )
    );
    assert_eq!(style.attrs()[1], StyleAttribute::FontWeight(FontWeight::BOLD));
    assert_eq!(style.attrs()[3], StyleAttribute::LetterSpacing(-0.32));
}

#[test]
fn style_region_adds_exactly_one_attribute() {
    for region in [
        Region::Heading(1),
        Region::Navigation,
        Region::Footer,
        Region::Aside,
        Region::Announce,
        Region::AnnounceUrgently,
    ] {
        let without = text_style_from_figma(&heading_props());
        let with = text_style_from_figma(&heading_props().region(region.clone()));
        assert_eq!(with.attrs().len(), without.attrs().len() + 1);
        assert_eq!(with.attrs().last(), Some(&StyleAttribute::Region(region)));
        assert_eq!(with.paragraph_spacing(), without.paragraph_spacing());
    }
}

#[test]
fn style_tight_line_height_is_negative_spacing() {
    let style = text_style_from_figma(&StyleProps::new("Inter", 24, 20));
    assert_eq!(style.paragraph_spacing(), -4);
    assert_eq!(paragraph_attrs(&style)[0], StyleAttribute::Spacing(-4));
}

#[test]
fn style_paragraph_attrs_order() {
    let style = text_style_from_figma(&heading_props().region(Region::Heading(2)));
    let attrs = paragraph_attrs(&style);
    assert_eq!(attrs[0], StyleAttribute::Spacing(8));
    assert_eq!(&attrs[1..], style.attrs());
}

#[test]
fn style_font_stack_errors() {
    let err = FontStack::parse("Inter, \"Roboto").unwrap_err();
    assert_eq!(err.kind(), ParseFontStackErrorKind::UnterminatedString);
    assert_eq!(err.byte_offset(), 7);
    assert_eq!(err.to_string(), "unterminated string in font stack at byte 7");
}

#[test]
fn style_font_stack_display() {
    let stack = FontStack::parse("Inter,'SF Pro Text',monospace").unwrap();
    assert_eq!(stack.to_string(), "Inter, \"SF Pro Text\", monospace");
}
