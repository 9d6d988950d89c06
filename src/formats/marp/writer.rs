//! Marp Markdown output

use core::fmt::Write as _;

use super::{
    layout::{DIVIDER_CLASS, LEAD_CLASS},
    segment::CODE_FENCE,
};
use crate::{
    config::CodecConfig,
    models::{Block, BlockKind, Deck, Layout, Slide},
};

const SLIDE_SEPARATOR: &str = "\n---\n\n";
/// Marker for a slide that would otherwise write as nothing
const PLACEHOLDER_CLASS: &str = "blank";

pub fn write_deck(deck: &Deck, config: &CodecConfig) -> String {
    let mut out = String::new();
    write_frontmatter(&mut out, deck);

    let slides = deck
        .all_slides()
        .map(|slide| write_slide(slide, config))
        .collect::<Vec<_>>();
    out.push_str(&slides.join(SLIDE_SEPARATOR));

    log::debug!("wrote {} slide(s), {} byte(s)", slides.len(), out.len());
    out
}

fn write_frontmatter(out: &mut String, deck: &Deck) {
    out.push_str("---\nmarp: true\n");

    let theme = deck.theme.as_ref();
    if let Some(theme) = theme
        && !theme.name.is_empty()
    {
        let _ = writeln!(out, "theme: {}", theme.name);
    }

    out.push_str("paginate: true\n");

    if let Some(style) = theme.and_then(|theme| theme.custom_value("style"))
        && !style.is_empty()
    {
        out.push_str("style: |\n");
        for line in style.lines() {
            if !line.starts_with([' ', '\t']) {
                out.push_str("  ");
            }
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str("---\n\n");
}

pub fn write_slide(slide: &Slide, config: &CodecConfig) -> String {
    let mut out = String::new();

    let class = match slide.layout {
        Layout::Section => Some(DIVIDER_CLASS),
        Layout::Title => Some(LEAD_CLASS),
        _ => None,
    };
    if let Some(class) = class {
        let _ = writeln!(out, "<!-- _class: {class} -->");
        if config.emit_paginate_directive {
            out.push_str("<!-- _paginate: false -->\n");
        }
        out.push('\n');
    }

    if slide.has_notes() {
        out.push_str("<!--\n");
        for note in &slide.notes {
            out.push_str(&note.text);
            out.push('\n');
        }
        out.push_str("-->\n\n");
    }

    if slide.has_title() {
        let _ = writeln!(out, "# {}", slide.title);
    }
    if !slide.subtitle.is_empty() {
        let _ = writeln!(out, "## {}", slide.subtitle);
    }
    if slide.has_title() || !slide.subtitle.is_empty() {
        out.push('\n');
    }

    let indent = " ".repeat(config.indent());
    for block in &slide.body {
        write_block(&mut out, block, &indent);
    }

    if out.trim().is_empty() {
        let _ = writeln!(out, "<!-- _class: {PLACEHOLDER_CLASS} -->");
    }
    out
}

fn write_block(out: &mut String, block: &Block, indent: &str) {
    let nesting = || indent.repeat(block.level as usize);

    match block.kind {
        BlockKind::Bullet => {
            let _ = writeln!(out, "{}- {}", nesting(), block.text);
        }
        BlockKind::Numbered => {
            let _ = writeln!(out, "{}1. {}", nesting(), block.text);
        }
        BlockKind::Paragraph => {
            out.push('\n');
            out.push_str(&block.text);
            out.push('\n');
        }
        BlockKind::Code => {
            let _ = write!(
                out,
                "\n{CODE_FENCE}{}\n{}\n{CODE_FENCE}\n",
                block.lang, block.text
            );
        }
        BlockKind::Image => {
            let _ = writeln!(out, "![{}]({})", block.alt, block.url);
        }
        BlockKind::Quote => {
            let _ = writeln!(out, "> {}", block.text);
        }
        BlockKind::Heading => {
            let _ = writeln!(out, "{} {}", "#".repeat(block.level.max(1) as usize), block.text);
        }
    }
}
