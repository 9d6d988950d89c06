//! Per-slide comment directives and speaker notes

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use super::layout::{DIVIDER_CLASS, LEAD_CLASS};

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--\s*(_\w+)\s*:\s*(.+?)\s*-->").expect("directive regex"));
static NOTE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--\s*\n(.*?)\n\s*-->").expect("note regex"));
static PAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[PAUSE:\d+\]").expect("pause regex"));
static BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<break\s+time="\d+ms"\s*/?>"#).expect("break regex"));

/// One slide fragment split into directives, notes and remaining content
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawSlide {
    /// Keys keep their leading underscore, e.g. `_class`
    pub directives: HashMap<String, String>,
    /// Cleaned note text, empty notes already dropped
    pub notes: Vec<String>,
    pub content: String,
}

impl RawSlide {
    pub fn class(&self) -> Option<&str> {
        self.directives.get("_class").map(String::as_str)
    }

    pub fn is_divider(&self) -> bool {
        self.class() == Some(DIVIDER_CLASS)
    }

    pub fn is_lead(&self) -> bool {
        self.class() == Some(LEAD_CLASS)
    }

    /// Whether this fragment opens a new section
    pub fn opens_section(&self) -> bool {
        self.is_divider() || self.is_lead()
    }
}

/// Pull directives and notes out of a raw fragment.
///
/// A multi-line comment mentioning `<script` is not a note and stays in the
/// content untouched.
pub fn extract(raw: &str) -> RawSlide {
    let mut slide = RawSlide::default();

    for caps in DIRECTIVE.captures_iter(raw) {
        slide
            .directives
            .insert(caps[1].to_string(), caps[2].to_string());
    }
    let remaining = DIRECTIVE.replace_all(raw, "");

    let remaining = NOTE_BLOCK.replace_all(&remaining, |caps: &regex::Captures<'_>| {
        let body = &caps[1];
        if body.contains("<script") {
            return caps[0].to_string();
        }
        let note = clean_note_text(body);
        if !note.is_empty() {
            slide.notes.push(note);
        }
        String::new()
    });

    slide.content = remaining.trim().to_string();
    slide
}

/// Strip pacing markers and fold the note into a single line
pub fn clean_note_text(text: &str) -> String {
    let text = PAUSE.replace_all(text, "");
    let text = BREAK.replace_all(&text, "");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
