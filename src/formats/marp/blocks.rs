//! Line scanner turning slide content into title, subtitle and body blocks

use core::iter::Peekable;
use std::sync::LazyLock;

use regex::Regex;

use super::segment::CODE_FENCE;
use crate::models::{Block, Blocks};

const HTML_STARTERS: [&str; 5] = ["<div", "<section", "<script", "<ol", "<table"];

static HTML_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(div|section|script|table|ol|ul)\b").expect("html open regex")
});
static HTML_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</(div|section|script|table|ol|ul)>").expect("html close regex")
});
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("numbered regex"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image regex"));

/// What a slide's residual content turned into
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlideContent {
    pub title: String,
    pub subtitle: String,
    pub body: Blocks,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Default,
    InCode {
        lang: String,
        code: Vec<String>,
    },
    InHtml {
        depth: usize,
        html: Vec<String>,
    },
}

/// Scan `content` line by line.
///
/// `indent_width` is the number of spaces per list nesting level; a tab
/// counts as one full level.
pub fn parse_content(content: &str, indent_width: usize) -> SlideContent {
    BlockParser::new(indent_width).run(content.lines())
}

struct BlockParser {
    indent_width: usize,
    state: State,
    paragraph: Vec<String>,
    out: SlideContent,
}

impl BlockParser {
    fn new(indent_width: usize) -> Self {
        Self {
            indent_width,
            state: State::Default,
            paragraph: Vec::new(),
            out: SlideContent::default(),
        }
    }

    fn run<'a>(mut self, lines: impl Iterator<Item = &'a str>) -> SlideContent {
        let mut lines = lines.peekable();

        while let Some(line) = lines.next() {
            self.state = match core::mem::take(&mut self.state) {
                State::InCode { lang, mut code } => {
                    if line.trim().starts_with(CODE_FENCE) {
                        self.out.body.push(Block::code(code.join("\n"), lang));
                        State::Default
                    } else {
                        code.push(line.to_string());
                        State::InCode { lang, code }
                    }
                }
                State::InHtml { depth, mut html } => {
                    html.push(line.to_string());
                    let depth = (depth + html_opens(line)).saturating_sub(html_closes(line));
                    if depth == 0 {
                        self.close_html(html);
                        State::Default
                    } else {
                        State::InHtml { depth, html }
                    }
                }
                State::Default => self.default_line(line, &mut lines),
            };
        }

        self.finish()
    }

    fn default_line<'a, I>(&mut self, line: &'a str, lines: &mut Peekable<I>) -> State
    where
        I: Iterator<Item = &'a str>,
    {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return State::Default;
        }

        if let Some(lang) = trimmed.strip_prefix(CODE_FENCE) {
            self.flush_paragraph();
            return State::InCode {
                lang: lang.trim().to_string(),
                code: Vec::new(),
            };
        }

        if is_html_start(trimmed) {
            self.flush_paragraph();
            let html = vec![line.to_string()];
            let depth = html_opens(line).saturating_sub(html_closes(line));
            if depth == 0 {
                self.close_html(html);
                return State::Default;
            }
            return State::InHtml { depth, html };
        }

        if let Some(text) = trimmed.strip_prefix("# ") {
            self.flush_paragraph();
            if self.out.title.is_empty() {
                self.out.title = text.to_string();
            } else {
                self.out.body.push(Block::heading(text, 1));
            }
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            self.flush_paragraph();
            if self.out.title.is_empty() {
                self.out.title = text.to_string();
            } else if self.out.subtitle.is_empty() {
                self.out.subtitle = text.to_string();
            } else {
                self.out.body.push(Block::heading(text, 2));
            }
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            self.push(Block::heading(text, 3));
        } else if let Some(text) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let level = self.indent_level(line);
            self.push(Block::bullet(text.trim(), level));
        } else if let Some(caps) = NUMBERED.captures(trimmed) {
            let level = self.indent_level(line);
            self.push(Block::numbered(&caps[2], level));
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            self.push(Block::quote(text));
        } else if trimmed.starts_with("![")
            && let Some(caps) = IMAGE.captures(trimmed)
        {
            self.push(Block::image(&caps[2], &caps[1]));
        } else if trimmed.starts_with('|') {
            let mut table = vec![line];
            while let Some(next) = lines.next_if(|l| l.trim().starts_with('|')) {
                table.push(next);
            }
            self.push(Block::paragraph(table.join("\n")));
        } else {
            self.paragraph.push(trimmed.to_string());
        }

        State::Default
    }

    fn push(&mut self, block: Block) {
        self.flush_paragraph();
        self.out.body.push(block);
    }

    fn flush_paragraph(&mut self) {
        if !self.paragraph.is_empty() {
            let text = self.paragraph.join("\n");
            self.paragraph.clear();
            self.out.body.push(Block::paragraph(text));
        }
    }

    fn close_html(&mut self, html: Vec<String>) {
        log::trace!("html block closed after {} line(s)", html.len());
        self.out.body.push(Block::paragraph(html.join("\n")));
    }

    fn finish(mut self) -> SlideContent {
        self.flush_paragraph();
        match core::mem::take(&mut self.state) {
            State::Default => {}
            State::InCode { lang, code } => {
                log::warn!("code fence is never closed, keeping {} line(s)", code.len());
                self.out.body.push(Block::code(code.join("\n"), lang));
            }
            State::InHtml { html, .. } => {
                log::warn!("html block is never closed, keeping {} line(s)", html.len());
                self.close_html(html);
            }
        }
        self.out
    }

    fn indent_level(&self, line: &str) -> u32 {
        indent_level(line, self.indent_width)
    }
}

/// Nesting level from leading whitespace
pub fn indent_level(line: &str, indent_width: usize) -> u32 {
    let width = indent_width.max(1);
    let spaces: usize = line
        .chars()
        .map_while(|c| match c {
            ' ' => Some(1),
            '\t' => Some(width),
            _ => None,
        })
        .sum();
    u32::try_from(spaces / width).unwrap_or(u32::MAX)
}

fn is_html_start(trimmed: &str) -> bool {
    HTML_STARTERS
        .iter()
        .any(|starter| trimmed.starts_with(starter))
}

fn html_opens(line: &str) -> usize {
    HTML_OPEN.find_iter(line).count()
}

fn html_closes(line: &str) -> usize {
    HTML_CLOSE.find_iter(line).count()
}
