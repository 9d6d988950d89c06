#![allow(clippy::match_wildcard_for_single_variants)]

use core::{fmt, str::FromStr, time::Duration};
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

pub type Blocks = Vec<Block>;

/// Implements `as_str`, `all`, `Display` and `FromStr` for a fieldless enum
/// whose variants have a fixed wire name.
macro_rules! impl_wire_names {
    ($ty:ident { $($variant:ident => $name:literal),* $(,)? }) => {
        impl $ty {
            /// Wire name of this value
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Every recognized value, in declaration order
            #[must_use]
            pub fn all() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DeckError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)*
                    _ => Err(DeckError::unknown_value(stringify!($ty), s)),
                }
            }
        }
    };
}

/// Visual arrangement of a slide
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Title,
    #[default]
    TitleBody,
    TitleTwoCol,
    Section,
    Blank,
    Image,
    Comparison,
}

impl_wire_names!(Layout {
    Title => "title",
    TitleBody => "title_body",
    TitleTwoCol => "title_two_col",
    Section => "section",
    Blank => "blank",
    Image => "image",
    Comparison => "comparison",
});

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Bullet,
    Numbered,
    Code,
    Image,
    Quote,
    Heading,
}

impl_wire_names!(BlockKind {
    Paragraph => "paragraph",
    Bullet => "bullet",
    Numbered => "numbered",
    Code => "code",
    Image => "image",
    Quote => "quote",
    Heading => "heading",
});

/// A unit of slide content.
///
/// Only the fields relevant to `kind` are populated: `level` is the nesting
/// depth for bullets and numbered items and the heading level for headings,
/// `lang` belongs to code blocks, `url`/`alt` to images.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Block {
    pub kind: BlockKind,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lang: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Block {
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn bullet(text: impl Into<String>, level: u32) -> Self {
        Self {
            kind: BlockKind::Bullet,
            text: text.into(),
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn numbered(text: impl Into<String>, level: u32) -> Self {
        Self {
            kind: BlockKind::Numbered,
            text: text.into(),
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn code(code: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Code,
            text: code.into(),
            lang: lang.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Image,
            url: url.into(),
            alt: alt.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn quote(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Quote,
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn heading(text: impl Into<String>, level: u32) -> Self {
        Self {
            kind: BlockKind::Heading,
            text: text.into(),
            level,
            ..Self::default()
        }
    }

    /// Bullets and numbered items
    #[must_use]
    pub const fn is_list_item(&self) -> bool {
        matches!(self.kind, BlockKind::Bullet | BlockKind::Numbered)
    }
}

macro_rules! impl_kind_predicates {
    ($($variant:ident),* $(,)?) => {
        impl Block {
            paste::paste! {
                $(
                    #[must_use]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        self.kind == BlockKind::$variant
                    }
                )*
            }
        }
    };
}

impl_kind_predicates!(Paragraph, Bullet, Numbered, Code, Image, Quote, Heading);

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum AudioSource {
    /// Pre-recorded audio file
    #[default]
    File,
    /// Remote audio URL
    Url,
    /// Synthesized from an explicit script
    Tts,
    /// Synthesized from the owning slide's speaker notes
    Notes,
}

impl_wire_names!(AudioSource {
    File => "file",
    Url => "url",
    Tts => "tts",
    Notes => "notes",
});

impl AudioSource {
    #[must_use]
    pub const fn needs_tts(&self) -> bool {
        matches!(self, Self::Tts | Self::Notes)
    }
}

/// Audio attachment for a slide or a whole section
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Audio {
    pub source: AudioSource,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub script: String,
    #[serde(default, skip_serializing_if = "Duration::is_zero")]
    pub duration: Duration,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub voice: String,
}

impl Audio {
    #[must_use]
    pub fn file(path: impl Into<String>, duration: Duration) -> Self {
        Self {
            source: AudioSource::File,
            path: path.into(),
            duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn url(url: impl Into<String>, duration: Duration) -> Self {
        Self {
            source: AudioSource::Url,
            url: url.into(),
            duration,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tts(script: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            source: AudioSource::Tts,
            script: script.into(),
            voice: voice.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_notes(voice: impl Into<String>) -> Self {
        Self {
            source: AudioSource::Notes,
            voice: voice.into(),
            ..Self::default()
        }
    }

    /// Whether the payload for this source kind is present.
    ///
    /// Notes-derived audio always counts as having content; its script is
    /// computed later from the slide's notes.
    #[must_use]
    pub fn has_content(&self) -> bool {
        match self.source {
            AudioSource::File => !self.path.is_empty(),
            AudioSource::Url => !self.url.is_empty(),
            AudioSource::Tts => !self.script.is_empty(),
            AudioSource::Notes => true,
        }
    }
}

/// Presentation-wide styling
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Theme {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub primary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secondary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub background: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font: String,
    /// Backend-specific settings such as an embedded stylesheet
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, String>,
}

impl Theme {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: "#2196F3".to_string(),
            secondary: "#FFC107".to_string(),
            background: "#FFFFFF".to_string(),
            font: "sans-serif".to_string(),
            custom: HashMap::new(),
        }
    }

    #[must_use]
    pub fn dark_theme() -> Self {
        Self {
            name: "dark".to_string(),
            primary: "#90CAF9".to_string(),
            secondary: "#FFE082".to_string(),
            background: "#121212".to_string(),
            font: "sans-serif".to_string(),
            custom: HashMap::new(),
        }
    }

    #[must_use]
    pub fn custom_value(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    pub fn set_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.insert(key.into(), value.into());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom: HashMap<String, String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Slide {
    pub id: String,
    pub layout: Layout,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Blocks,
    /// Speaker notes, one paragraph block per note comment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Blocks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Slide {
    #[must_use]
    pub fn new(id: impl Into<String>, layout: Layout) -> Self {
        Self {
            id: id.into(),
            layout,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    #[must_use]
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Speaker notes joined one per line
    #[must_use]
    pub fn notes_text(&self) -> String {
        self.notes
            .iter()
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn bullet_count(&self) -> usize {
        self.body.iter().filter(|block| block.is_list_item()).count()
    }

    fn audio_duration(&self) -> Duration {
        self.audio
            .as_ref()
            .map_or(Duration::ZERO, |audio| audio.duration)
    }
}

/// A named run of consecutive slides
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub slides: Vec<Slide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn find_slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    /// Section-level audio duration when set, otherwise the sum of the
    /// slides' audio durations
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        if let Some(audio) = &self.audio
            && !audio.duration.is_zero()
        {
            return audio.duration;
        }
        self.slides.iter().map(Slide::audio_duration).sum()
    }

    #[must_use]
    pub fn has_audio(&self) -> bool {
        self.audio.is_some() || self.slides.iter().any(|slide| slide.audio.is_some())
    }
}

/// A complete presentation
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Deck {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Deck {
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(Section::slide_count).sum()
    }

    /// Every slide in deck order
    pub fn all_slides(&self) -> impl Iterator<Item = &Slide> {
        self.sections.iter().flat_map(|section| section.slides.iter())
    }

    #[must_use]
    pub fn find_slide(&self, id: &str) -> Option<&Slide> {
        self.all_slides().find(|slide| slide.id == id)
    }

    pub fn find_slide_mut(&mut self, id: &str) -> Option<&mut Slide> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.slides.iter_mut())
            .find(|slide| slide.id == id)
    }

    #[must_use]
    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Look up a slide, reporting a missing id as an error
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::SlideNotFound`] if no slide has the given id
    pub fn slide(&self, id: &str) -> DeckResult<&Slide> {
        self.find_slide(id)
            .ok_or_else(|| DeckError::slide_not_found(id))
    }

    /// Look up a section, reporting a missing id as an error
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::SectionNotFound`] if no section has the given id
    pub fn section(&self, id: &str) -> DeckResult<&Section> {
        self.find_section(id)
            .ok_or_else(|| DeckError::section_not_found(id))
    }

    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.sections.iter().map(Section::total_duration).sum()
    }

    /// One summary row per slide, in deck order
    #[must_use]
    pub fn slide_infos(&self) -> Vec<SlideInfo> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.slides.iter().map(|slide| SlideInfo {
                    id: slide.id.clone(),
                    section_id: section.id.clone(),
                    title: slide.title.clone(),
                    layout: slide.layout,
                })
            })
            .collect()
    }
}

/// Summary of one slide for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Record)]
pub struct SlideInfo {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub layout: Layout,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOp {
    #[default]
    Add,
    Remove,
    Update,
    Move,
}

impl_wire_names!(ChangeOp {
    Add => "add",
    Remove => "remove",
    Update => "update",
    Move => "move",
});

/// A single modification in a change set.
///
/// Values are carried pre-rendered; the compact renderer prints them as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Change {
    pub op: ChangeOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl Change {
    #[must_use]
    pub fn add(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: ChangeOp::Add,
            path: path.into(),
            new_value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn remove(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op: ChangeOp::Remove,
            path: path.into(),
            old_value: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn update(
        path: impl Into<String>,
        old_value: impl Into<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self {
            op: ChangeOp::Update,
            path: path.into(),
            old_value: Some(old_value.into()),
            new_value: Some(new_value.into()),
            ..Self::default()
        }
    }

    /// A move from `from_path` to `to_path`
    #[must_use]
    pub fn moved(from_path: impl Into<String>, to_path: impl Into<String>) -> Self {
        Self {
            op: ChangeOp::Move,
            path: from_path.into(),
            new_value: Some(to_path.into()),
            ..Self::default()
        }
    }
}

/// Changes between two states of one deck
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, uniffi::Record)]
pub struct Diff {
    pub deck_id: String,
    pub changes: Vec<Change>,
}

impl Diff {
    #[must_use]
    pub fn new(deck_id: impl Into<String>) -> Self {
        Self {
            deck_id: deck_id.into(),
            changes: Vec::new(),
        }
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn count_by_op(&self) -> HashMap<ChangeOp, usize> {
        let mut counts = HashMap::new();
        for change in &self.changes {
            *counts.entry(change.op).or_insert(0) += 1;
        }
        counts
    }

    fn filter_by_op(&self, op: ChangeOp) -> Vec<&Change> {
        self.changes.iter().filter(|c| c.op == op).collect()
    }
}

macro_rules! impl_op_filters {
    ($($variant:ident),* $(,)?) => {
        impl Diff {
            paste::paste! {
                $(
                    #[must_use]
                    pub fn [<$variant:snake _changes>](&self) -> Vec<&Change> {
                        self.filter_by_op(ChangeOp::$variant)
                    }
                )*
            }
        }
    };
}

impl_op_filters!(Add, Remove, Update, Move);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_deck() -> Deck {
        let mut intro = Section::new("section-0", "Intro");
        intro.slides.push(Slide {
            title: "Welcome".into(),
            ..Slide::new("s0-0", Layout::Title)
        });
        intro.slides.push(Slide {
            audio: Some(Audio::file("a.mp3", Duration::from_secs(30))),
            ..Slide::new("s0-1", Layout::TitleBody)
        });

        let mut outro = Section::new("section-1", "Outro");
        outro.audio = Some(Audio::url("https://x/a.mp3", Duration::from_secs(90)));
        outro.slides.push(Slide {
            audio: Some(Audio::file("b.mp3", Duration::from_secs(5))),
            ..Slide::new("s1-0", Layout::Section)
        });

        Deck {
            title: "Welcome".into(),
            sections: vec![intro, outro],
            ..Deck::default()
        }
    }

    #[test]
    fn deck_counts_and_lookups() {
        let deck = sample_deck();
        assert_eq!(deck.slide_count(), 3);
        assert_eq!(deck.all_slides().count(), 3);
        assert_eq!(deck.find_slide("s1-0").map(|s| s.layout), Some(Layout::Section));
        assert!(deck.find_slide("missing").is_none());
        assert_eq!(deck.find_section("section-1").map(|s| s.title.as_str()), Some("Outro"));

        let infos = deck.slide_infos();
        assert_eq!(infos.len(), 3);
        assert_eq!(infos[2].section_id, "section-1");
        assert_eq!(infos[0].title, "Welcome");
    }

    #[test]
    fn missing_slide_is_reported() {
        let deck = sample_deck();
        let err = deck.slide("s9-9").unwrap_err();
        assert!(matches!(err, DeckError::SlideNotFound(ref id) if id == "s9-9"));
        assert!(deck.section("nope").is_err());
    }

    #[test]
    fn section_duration_prefers_section_audio() {
        let deck = sample_deck();
        assert_eq!(deck.sections[0].total_duration(), Duration::from_secs(30));
        assert_eq!(deck.sections[1].total_duration(), Duration::from_secs(90));
        assert_eq!(deck.total_duration(), Duration::from_secs(120));
        assert!(deck.sections[0].has_audio());
    }

    #[test]
    fn audio_content_depends_on_source() {
        assert!(Audio::file("x.mp3", Duration::ZERO).has_content());
        assert!(!Audio::file("", Duration::ZERO).has_content());
        assert!(!Audio::tts("", "en-US").has_content());
        assert!(Audio::from_notes("").has_content());
        assert!(AudioSource::Notes.needs_tts());
        assert!(!AudioSource::Url.needs_tts());
    }

    #[test]
    fn block_constructors_leave_unrelated_fields_empty() {
        let image = Block::image("a.png", "Alt");
        assert!(image.is_image());
        assert!(image.text.is_empty());
        assert_eq!(image.level, 0);

        let code = Block::code("fn main() {}", "rust");
        assert!(code.is_code());
        assert!(code.url.is_empty());
        assert!(Block::numbered("x", 1).is_list_item());
        assert!(!Block::quote("x").is_list_item());
    }

    #[test]
    fn slide_helpers() {
        let slide = Slide {
            title: "T".into(),
            body: vec![Block::bullet("a", 0), Block::numbered("b", 1), Block::paragraph("c")],
            notes: vec![Block::paragraph("one"), Block::paragraph("two")],
            ..Slide::new("s", Layout::TitleBody)
        };
        assert!(slide.has_title());
        assert!(slide.has_body());
        assert!(slide.has_notes());
        assert_eq!(slide.bullet_count(), 2);
        assert_eq!(slide.notes_text(), "one\ntwo");
    }

    #[test]
    fn wire_names_round_trip() {
        for layout in Layout::all() {
            assert_eq!(layout.as_str().parse::<Layout>().unwrap(), layout);
        }
        assert_eq!(Layout::TitleTwoCol.to_string(), "title_two_col");
        assert!("diagonal".parse::<Layout>().is_err());
        assert_eq!("move".parse::<ChangeOp>().unwrap(), ChangeOp::Move);
        assert_eq!(BlockKind::all().len(), 7);
    }

    #[test]
    fn theme_custom_values() {
        let mut theme = Theme::named("agentplexus");
        assert_eq!(theme.custom_value("style"), None);
        theme.set_custom("style", ".x{}");
        assert_eq!(theme.custom_value("style"), Some(".x{}"));
        assert_eq!(Theme::dark_theme().background, "#121212");
    }

    #[test]
    fn diff_filters_by_op() {
        let mut diff = Diff::new("d");
        diff.push(Change::add("sections/0", "new"));
        diff.push(Change::update("title", "a", "b"));
        diff.push(Change::update("sections/0/title", "c", "d"));
        diff.push(Change::moved("sections/0/slides/1", "sections/1/slides/0"));

        assert_eq!(diff.len(), 4);
        assert_eq!(diff.update_changes().len(), 2);
        assert_eq!(diff.remove_changes().len(), 0);
        assert_eq!(diff.count_by_op().get(&ChangeOp::Add), Some(&1));
        assert_eq!(
            diff.move_changes()[0].new_value.as_deref(),
            Some("sections/1/slides/0")
        );
    }

    #[test]
    fn layout_serializes_snake_case() {
        let json = serde_json::to_string(&Layout::TitleTwoCol).unwrap();
        assert_eq!(json, "\"title_two_col\"");
    }
}
