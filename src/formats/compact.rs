//! Compact line-oriented projection of decks and change sets
//!
//! One element per line, each line led by a keyword. Output is not meant to
//! be parsed back.

use core::{fmt::Write as _, time::Duration};

use crate::models::{
    Audio, AudioSource, Block, BlockKind, ChangeOp, Deck, Diff, Section, Slide, SlideInfo,
};

#[derive(Debug, Clone)]
pub struct CompactEncoder {
    indent: String,
}

impl Default for CompactEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }

    #[must_use]
    pub fn encode_deck(&self, deck: &Deck) -> String {
        let mut out = String::new();
        line(&mut out, "", "deck", &deck.title);

        let meta = &deck.meta;
        for (key, value) in [
            ("author", &meta.author),
            ("date", &meta.date),
            ("description", &meta.description),
        ] {
            if !value.is_empty() {
                line(&mut out, "", &format!("meta {key}"), value);
            }
        }
        if !meta.keywords.is_empty() {
            line(&mut out, "", "meta keywords", &meta.keywords.join(", "));
        }

        for section in &deck.sections {
            out.push('\n');
            self.section(&mut out, section);
        }
        out
    }

    /// A single slide with no leading indentation
    #[must_use]
    pub fn encode_slide(&self, slide: &Slide) -> String {
        let mut out = String::new();
        self.slide(&mut out, slide, "");
        out
    }

    #[must_use]
    pub fn encode_slide_list(&self, slides: &[SlideInfo]) -> String {
        let mut out = String::new();
        for info in slides {
            let _ = write!(out, "slide {} {}", info.id, info.layout);
            if !info.title.is_empty() {
                out.push(' ');
                out.push_str(&escape(&info.title));
            }
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn encode_diff(&self, diff: &Diff) -> String {
        let mut out = String::new();
        line(&mut out, "", "plan deck", &diff.deck_id);

        for change in &diff.changes {
            let marker = match change.op {
                ChangeOp::Add => "+",
                ChangeOp::Remove => "-",
                ChangeOp::Update => "~",
                ChangeOp::Move => ">",
            };
            line(&mut out, "", marker, &change.path);
            if let Some(old) = &change.old_value {
                line(&mut out, &self.indent, "-", old);
            }
            if let Some(new) = &change.new_value {
                line(&mut out, &self.indent, "+", new);
            }
        }
        out
    }

    fn section(&self, out: &mut String, section: &Section) {
        let _ = write!(out, "section {}", section.id);
        if !section.title.is_empty() {
            out.push(' ');
            out.push_str(&escape(&section.title));
        }
        out.push('\n');

        if let Some(audio) = &section.audio {
            let _ = writeln!(out, "{}{}", self.indent, audio_line(audio));
        }

        for slide in &section.slides {
            self.slide(out, slide, &self.indent);
        }
    }

    fn slide(&self, out: &mut String, slide: &Slide, indent: &str) {
        let _ = writeln!(out, "{indent}slide {} {}", slide.id, slide.layout);
        let inner = format!("{indent}{}", self.indent);

        if slide.has_title() {
            line(out, &inner, "title", &slide.title);
        }
        if !slide.subtitle.is_empty() {
            line(out, &inner, "subtitle", &slide.subtitle);
        }
        for block in &slide.body {
            let _ = writeln!(out, "{inner}{}", block_line(block));
        }
        for note in &slide.notes {
            line(out, &inner, "note", &note.text);
        }
        if let Some(audio) = &slide.audio {
            let _ = writeln!(out, "{inner}{}", audio_line(audio));
        }
        if let Some(transition) = &slide.transition {
            line(out, &inner, "transition", transition);
        }
        if let Some(background) = &slide.background {
            line(out, &inner, "background", background);
        }
    }
}

fn line(out: &mut String, indent: &str, keyword: &str, value: &str) {
    let _ = writeln!(out, "{indent}{keyword} {}", escape(value));
}

/// Keeps multi-line text on one output line
fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
}

fn block_line(block: &Block) -> String {
    let text = escape(&block.text);
    match block.kind {
        BlockKind::Bullet => format!("{}bullet {text}", nesting(block.level)),
        BlockKind::Numbered => format!("{}numbered {text}", nesting(block.level)),
        BlockKind::Paragraph => format!("para {text}"),
        BlockKind::Code if block.lang.is_empty() => format!("code {text}"),
        BlockKind::Code => format!("code {} {text}", block.lang),
        BlockKind::Image if block.alt.is_empty() => format!("image {}", block.url),
        BlockKind::Image => format!("image {} {}", block.url, escape(&block.alt)),
        BlockKind::Quote => format!("quote {text}"),
        BlockKind::Heading if block.level == 0 => format!("heading {text}"),
        BlockKind::Heading => format!("heading {} {text}", block.level),
    }
}

/// Extra indentation for nested list items
fn nesting(level: u32) -> String {
    "  ".repeat(level as usize)
}

fn audio_line(audio: &Audio) -> String {
    let mut out = format!("audio {}", audio.source);
    match audio.source {
        AudioSource::File => {
            out.push(' ');
            out.push_str(&audio.path);
        }
        AudioSource::Url => {
            out.push(' ');
            out.push_str(&audio.url);
        }
        AudioSource::Tts | AudioSource::Notes => {
            if !audio.voice.is_empty() {
                out.push_str(" voice=");
                out.push_str(&audio.voice);
            }
        }
    }
    if !audio.duration.is_zero() {
        out.push_str(" duration=");
        out.push_str(&format_duration(audio.duration));
    }
    out
}

/// Render like `1h2m3s`, `2m30s`, `1.5s` or `250ms`
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let nanos = duration.subsec_nanos();

    if total == 0 {
        return match nanos {
            0 => "0s".to_string(),
            n if n < 1_000 => format!("{n}ns"),
            n if n < 1_000_000 => format!("{}µs", with_fraction(n / 1_000, n % 1_000, 3)),
            n => format!("{}ms", with_fraction(n / 1_000_000, n % 1_000_000, 6)),
        };
    }

    let hours = total / 3600;
    let minutes = total / 60 % 60;
    let seconds = with_fraction(u32::try_from(total % 60).unwrap_or(0), nanos, 9);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn with_fraction(whole: u32, fraction: u32, digits: usize) -> String {
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:0digits$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
