//! End-to-end conversion tests.

use horizon_richtext::markup::MarkupError;
use horizon_richtext::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Character offset of the first occurrence of `needle`.
fn offset_of(doc: &RichTextDocument, needle: &str) -> usize {
    let byte = doc
        .text()
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {:?}", doc.text()));
    doc.text()[..byte].chars().count()
}

/// Every span in bounds; any two spans nested or disjoint; paragraph spans
/// never overlap.
fn assert_well_formed(doc: &RichTextDocument) {
    let len = doc.len_chars();
    let ranges: Vec<Span<()>> = doc
        .character_spans()
        .iter()
        .map(|s| Span::new(s.start, s.end, ()))
        .chain(doc.paragraph_spans().iter().map(|s| Span::new(s.start, s.end, ())))
        .collect();

    for span in &ranges {
        assert!(span.start <= span.end && span.end <= len, "{span:?} out of bounds ({len})");
    }
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            assert!(
                a.is_disjoint(b) || a.encloses(b) || b.encloses(a),
                "{a:?} and {b:?} overlap"
            );
        }
    }
    for pair in doc.paragraph_spans().windows(2) {
        assert!(pair[0].end <= pair[1].start, "paragraph spans overlap");
    }
}

#[test]
fn whitespace_collapses_and_line_breaks_vanish() {
    let doc = convert("a   b\nc");
    assert_eq!(doc.text(), "a bc");
    assert!(doc.character_spans().is_empty());
    assert!(doc.paragraph_spans().is_empty());
}

#[test]
fn unrecognized_tags_produce_no_spans() {
    let doc = convert("<big>big</big>  <font color=\"red\">font</font>\n<tt>mono</tt>");
    assert_eq!(doc.text(), "big fontmono");
    assert!(doc.character_spans().is_empty());
    assert!(doc.paragraph_spans().is_empty());
}

#[test]
fn nested_alignment_keeps_outer_paragraph() {
    let doc = convert(r#"<div align="center"><div align="right">x</div></div>"#);
    assert_eq!(doc.text(), "x");
    assert_eq!(doc.paragraph_spans().len(), 1);
    let span = &doc.paragraph_spans()[0];
    assert_eq!((span.start, span.end), (0, 1));
    assert_eq!(span.style.text_align, Some(TextAlign::Center));
}

#[test]
fn lower_alpha_list() {
    let doc = convert(
        r#"<ol style="list-style-type:lower-alpha"><li>x</li><li>y</li><li>z</li></ol>"#,
    );
    assert_eq!(doc.text(), "a. x\nb. y\nc. z");
    let indent = doc.paragraph_spans()[0].style.text_indent.unwrap();
    assert_eq!((indent.first_line, indent.rest), (20.0, 32.0));
}

#[test]
fn start_attribute_and_implied_item_ends() {
    let doc = convert(r#"<ol start="3"><li>a<li>b</ol>"#);
    assert_eq!(doc.text(), "3. a\n4. b");
}

#[test]
fn bullets_at_every_depth() {
    let doc = convert("<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li></ul>");
    assert_eq!(doc.text(), "• a\n• b\n• c");
    // Only the outermost list owns a paragraph span.
    assert_eq!(doc.paragraph_spans().len(), 1);
}

#[test]
fn nested_lists_count_independently() {
    let doc = convert("<ol><li>a<ol><li>x</li><li>y</li></ol></li><li>b</li></ol>");
    assert_eq!(doc.text(), "1. a\n1. x\n2. y\n2. b");
}

#[test]
fn square_bullets() {
    let doc = convert(r#"<ul type="square"><li>a</li></ul>"#);
    assert_eq!(doc.text(), "▪ a");
}

#[test]
fn headings_break_around_content() {
    let doc = convert("intro<h1>Title</h1>body");
    assert_eq!(doc.text(), "intro\n\nTitle\n\nbody");
    let span = &doc.character_spans()[0];
    assert_eq!(doc.span_text(span), Some("Title"));
    assert_eq!(span.style.font_weight, Some(FontWeight::BOLD));
    assert_eq!(span.style.font_size, Some(32.0));
}

#[test]
fn heading_at_document_start() {
    let doc = convert("<h4>T</h4>");
    assert_eq!(doc.text(), "\nT\n\n");
    let span = &doc.character_spans()[0];
    assert_eq!((span.start, span.end), (1, 2));
    assert_eq!(span.style.font_weight, Some(FontWeight::SEMI_BOLD));
}

#[test]
fn scripts_shift_the_baseline() {
    let doc = convert("H<sub>2</sub>O x<sup>2</sup>");
    assert_eq!(doc.text(), "H2O x2");

    let sub = doc.character_style_at(1);
    assert_eq!(sub.font_size, Some(10.0));
    assert_eq!(sub.baseline_shift, Some(BaselineShift(-0.2)));

    let sup = doc.character_style_at(5);
    assert_eq!(sup.baseline_shift, Some(BaselineShift(0.4)));
}

#[test]
fn links_need_href() {
    let doc = convert(r#"<a href="https://example.com">link</a> <a name="x">anchor</a>"#);
    assert_eq!(doc.character_spans().len(), 1);
    let style = doc.character_spans()[0].style;
    assert_eq!(style.color, Some(Color::BLUE));
    assert_eq!(style.decoration, Some(TextDecoration::Underline));
}

#[test]
fn inline_style_overrides_element_style() {
    let doc = convert(r#"<u style="text-decoration:none">x</u><b style="color:red">y</b>"#);
    assert_eq!(doc.character_spans()[0].style.decoration, Some(TextDecoration::None));
    let bold = doc.character_spans()[1].style;
    assert_eq!(bold.font_weight, Some(FontWeight::BOLD));
    assert_eq!(bold.color, Some(Color::RED));
}

#[test]
fn italics_family() {
    let doc = convert("<em>a</em><i>b</i><cite>c</cite><dfn>d</dfn>");
    assert_eq!(doc.character_spans().len(), 4);
    for span in doc.character_spans() {
        assert_eq!(span.style, CharacterStyle::new().italic());
    }
}

#[test]
fn nested_styles_nest() {
    let doc = convert("<b>a<i>b<u>c</u></i>d</b>");
    assert_eq!(doc.text(), "abcd");
    let ranges: Vec<(usize, usize)> =
        doc.character_spans().iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(ranges, [(0, 4), (1, 3), (2, 3)]);
    assert_well_formed(&doc);

    let c = doc.character_style_at(2);
    assert_eq!(c.font_weight, Some(FontWeight::BOLD));
    assert_eq!(c.font_style, Some(FontStyle::Italic));
    assert_eq!(c.decoration, Some(TextDecoration::Underline));
}

#[test]
fn image_becomes_placeholder() {
    let doc = convert(r#"a<img src="x.png"/>b<img alt="no source">"#);
    assert_eq!(doc.text(), "a\n\u{FFFC}b");
    let span = &doc.character_spans()[0];
    assert_eq!((span.start, span.end), (2, 3));
    assert_eq!(span.style.font_size, Some(30.0));
}

#[test]
fn line_breaks() {
    assert_eq!(convert("a<br>b<br/>c").text(), "a\nb\nc");
    assert_eq!(convert("a</br>b").text(), "a\nb");
}

#[test]
fn paragraph_margins() {
    assert_eq!(convert("a<p>b</p><p>c</p>").text(), "a\nb\nc");
    assert_eq!(convert("a<div>b</div>").text(), "a\nb");
    assert_eq!(convert("a<span>b</span>").text(), "ab");
}

#[test]
fn blockquote_closes_its_style() {
    let doc = convert("<blockquote>quote</blockquote>after");
    assert_eq!(doc.text(), "quoteafter");
    let italic = &doc.character_spans()[0];
    assert_eq!(doc.span_text(italic), Some("quote"));
    let para = &doc.paragraph_spans()[0];
    assert_eq!(doc.span_text(para), Some("quote"));
    assert_eq!(para.style.text_indent, Some(TextIndent::new(16.0, 16.0)));
}

#[test]
fn stray_and_unclosed_tags_are_absorbed() {
    init_logging();
    let doc = convert("</i>a<b>b</u>c");
    assert_eq!(doc.text(), "abc");
    let span = &doc.character_spans()[0];
    assert_eq!((span.start, span.end), (1, 3));
    assert_well_formed(&doc);
}

#[test]
fn entities_are_decoded() {
    let doc = convert("&quot;Z&quot; &amp; &lt;tag&gt;&nbsp;&#x4E2D;");
    assert_eq!(doc.text(), "\"Z\" & <tag>\u{00A0}中");
}

#[test]
fn deep_nesting_converts_without_a_limit() {
    let html = format!("{}x{}", "<span>".repeat(600), "</span>".repeat(600));
    let doc = convert(&html);
    assert_eq!(doc.text(), "x");
    assert!(doc.character_spans().is_empty());

    let html = format!("{}x{}", "<b>".repeat(600), "</b>".repeat(600));
    let doc = convert(&html);
    assert_eq!(doc.text(), "x");
    assert_eq!(doc.character_spans().len(), 600);
    assert_well_formed(&doc);
}

#[test]
fn too_deep_yields_empty_document() {
    init_logging();
    let options = ConvertOptions::default().with_max_depth(3);
    let html = "<b><i><u><s>x</s></u></i></b>";

    let doc = convert_with_options(html, &options);
    assert!(doc.is_empty());

    let err = try_convert(html, &options).unwrap_err();
    assert_eq!(err, ConvertError::Markup(MarkupError::TooDeep { limit: 3 }));
}

#[test]
fn custom_options() {
    let options = ConvertOptions::default()
        .with_link_color(Color::RED)
        .with_list_indent(4.0, 8.0);
    let doc = convert_with_options(r##"<ul><li><a href="#">x</a></li></ul>"##, &options);
    assert_eq!(doc.character_spans()[0].style.color, Some(Color::RED));
    assert_eq!(
        doc.paragraph_spans()[0].style.text_indent,
        Some(TextIndent::new(4.0, 8.0))
    );
}

#[test]
fn privacy_policy_document() {
    init_logging();
    let doc = convert(include_str!("fixtures/privacy.html"));
    assert_well_formed(&doc);

    // Centered heading
    let title = doc
        .paragraph_spans()
        .iter()
        .find(|s| doc.span_text(*s) == Some("Privacy Policy"))
        .expect("title paragraph");
    assert_eq!(title.style.text_align, Some(TextAlign::Center));
    let title_style = doc.character_style_at(offset_of(&doc, "Privacy Policy"));
    assert_eq!(title_style.font_size, Some(32.0));

    // Scripts
    let water = offset_of(&doc, "H2O");
    assert_eq!(doc.character_style_at(water + 1).baseline_shift, Some(BaselineShift(-0.2)));
    assert!(doc.text().contains("x2+2y+y2 = 15"));

    // Entities and colored decorations
    assert!(doc.text().contains("\"Z Reader\" respects and protects the privacy of every user."));
    let del = doc.character_style_at(offset_of(&doc, "and protects"));
    assert_eq!(del.decoration, Some(TextDecoration::LineThrough));
    assert_eq!(del.color, Some(Color::from_rgb8(0xFF, 0xAA, 0xFF)));
    assert_eq!(del.background, Some(Color::RED));
    let ins = doc.character_style_at(offset_of(&doc, "privacy of every user"));
    assert_eq!(ins.decoration, Some(TextDecoration::Underline));
    assert_eq!(ins.color, Some(Color::from_rgb8(0xFA, 0xEB, 0xD7)));
    assert!(doc.text().contains("尊重并保护"));

    // Styled heading
    let scope = doc.character_style_at(offset_of(&doc, "1. Scope"));
    assert_eq!(scope.font_weight, Some(FontWeight::SEMI_BOLD));
    assert_eq!(scope.color, Some(Color::from_rgb8(230, 12, 222)));
    assert_eq!(scope.background, Some(Color::from_rgb8(0xFF, 0x22, 0x33)));

    // Inline colors inside list items
    let strike = doc.character_style_at(offset_of(&doc, "the network service"));
    assert_eq!(strike.color, Some(Color::from_rgba8(230, 12, 222, 76)));
    let under = doc.character_style_at(offset_of(&doc, "the platform pages"));
    assert_eq!(under.color, Some(Color::from_argb(0x3030_FF20)));
    assert!(doc.character_style_at(offset_of(&doc, "the application")).is_empty());
    let link = doc.character_style_at(offset_of(&doc, "The application"));
    assert_eq!(link.color, Some(Color::BLUE));
    let covered = doc.character_style_at(offset_of(&doc, "You agree"));
    assert_eq!(covered.color, Some(Color::BLUE));

    // Bullets and nested numbering
    assert!(doc.text().contains("• When you use"));
    assert!(doc.text().contains("• The application"));
    assert!(doc.text().contains("1. Keywords entered in search;"));
    assert!(doc.text().contains("2. Measures taken"));

    // Shadows: first entry only, missing radius defaulted
    let keywords = doc.character_style_at(offset_of(&doc, "Keywords"));
    let shadow = keywords.shadow.expect("shadow");
    assert_eq!((shadow.offset_x, shadow.offset_y, shadow.blur_radius), (5.5, 5.0, 5.0));
    assert_eq!(shadow.color, Some(Color::RED));
    assert_eq!(keywords.color, Some(Color::from_rgb8(0xFF, 0x33, 0x22)));
    let measures = doc.character_style_at(offset_of(&doc, "Measures"));
    let shadow = measures.shadow.expect("shadow");
    assert_eq!(shadow.blur_radius, Shadow::DEFAULT_BLUR_RADIUS);
    assert_eq!(measures.color, Some(Color::from_argb(0x88AA_AA22)));

    // Image placeholder
    let glyph = offset_of(&doc, "\u{FFFC}");
    assert_eq!(doc.character_style_at(glyph).font_size, Some(30.0));

    // Alphabetic list
    assert!(doc.text().contains("a. With your prior consent;"));
    assert!(doc.text().contains("b. When required by law;"));
    assert!(doc.text().contains("c. To resolve disputes."));

    // Title, outer bullet list, alphabetic list
    assert_eq!(doc.paragraph_spans().len(), 3);
}

const GENERATED_TAGS: &[&str] = &[
    "p", "div", "span", "b", "strong", "em", "i", "cite", "dfn", "blockquote", "a", "u", "ins",
    "del", "s", "strike", "sup", "sub", "h1", "h3", "h6", "img", "ol", "ul", "li", "br", "big",
    "font", "style",
];

const GENERATED_ATTRIBUTES: &[&str] = &[
    "",
    r#" align="center""#,
    r#" align="right""#,
    r##" style="color:#f00;text-align:justify""##,
    r#" style="text-shadow:1px 2px rgb(0,0,255), 3px 3px red""#,
    r#" style="list-style-type:lower-alpha""#,
    r#" href="x" src="y.png""#,
    r#" type="A" start="27""#,
];

const GENERATED_TEXT: &[&str] = &["x", "  ", "\n", "héllo", "中文", "&amp;", "&nbsp;", "<", "a b"];

/// A random, mostly tag-balanced fragment with stray and unclosed tags mixed in.
fn generated_html(rng: &mut StdRng) -> String {
    let mut html = String::new();
    let mut open: Vec<&str> = Vec::new();

    for _ in 0..rng.gen_range(1..40) {
        match rng.gen_range(0..10) {
            0..=3 => {
                let tag = *GENERATED_TAGS.choose(rng).unwrap();
                let attrs = *GENERATED_ATTRIBUTES.choose(rng).unwrap();
                html.push_str(&format!("<{tag}{attrs}>"));
                open.push(tag);
            }
            4..=5 => {
                if let Some(tag) = open.pop() {
                    html.push_str(&format!("</{tag}>"));
                }
            }
            6 => {
                let tag = *GENERATED_TAGS.choose(rng).unwrap();
                html.push_str(&format!("</{tag}>"));
            }
            _ => html.push_str(GENERATED_TEXT.choose(rng).unwrap()),
        }
    }

    html
}

#[test]
fn generated_inputs_stay_well_formed() {
    let mut rng = StdRng::seed_from_u64(0x5EED_0001);
    for _ in 0..500 {
        let html = generated_html(&mut rng);
        let doc = try_convert(&html, &ConvertOptions::default())
            .unwrap_or_else(|e| panic!("{html:?} failed: {e}"));
        assert_well_formed(&doc);
    }
}
