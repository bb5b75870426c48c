//! Convert an HTML file and print the resulting text and style ranges.
//!
//! Run with: cargo run -p horizon-richtext --example convert_html [path/to/file.html]
//!
//! Without an argument a bundled sample document is converted.

use std::env;
use std::fs;
use std::process::ExitCode;

use horizon_richtext::prelude::*;

const SAMPLE: &str = include_str!("../tests/fixtures/privacy.html");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let html = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(html) => html,
            Err(e) => {
                eprintln!("failed to read {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.to_string(),
    };

    let doc = match try_convert(&html, &ConvertOptions::default()) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("conversion failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("=== Text ({} chars) ===", doc.len_chars());
    println!("{}", doc.text());

    println!();
    println!("=== Paragraph spans ===");
    for span in doc.paragraph_spans() {
        println!(
            "{:>5}..{:<5} {:?} {:?}",
            span.start,
            span.end,
            span.style,
            doc.span_text(span).unwrap_or_default()
        );
    }

    println!();
    println!("=== Character spans ===");
    for span in doc.character_spans() {
        println!("{:>5}..{:<5} {}", span.start, span.end, describe(&span.style));
    }

    ExitCode::SUCCESS
}

fn describe(style: &CharacterStyle) -> String {
    let mut parts = Vec::new();
    if let Some(weight) = style.font_weight {
        parts.push(format!("weight={}", weight.value()));
    }
    if style.font_style == Some(FontStyle::Italic) {
        parts.push("italic".to_string());
    }
    if let Some(decoration) = style.decoration {
        parts.push(format!("decoration={decoration:?}"));
    }
    if let Some(color) = style.color {
        parts.push(format!("color={color}"));
    }
    if let Some(color) = style.background {
        parts.push(format!("background={color}"));
    }
    if let Some(size) = style.font_size {
        parts.push(format!("size={size}"));
    }
    if let Some(shift) = style.baseline_shift {
        parts.push(format!("shift={}", shift.0));
    }
    if let Some(shadow) = style.shadow {
        parts.push(format!(
            "shadow=({}, {}, {})",
            shadow.offset_x, shadow.offset_y, shadow.blur_radius
        ));
    }
    parts.join(" ")
}
