//! Marp Markdown codec
//!
//! Reading runs frontmatter, segmentation, directive extraction, section
//! grouping and block parsing in that order. Malformed input degrades into a
//! sparser deck and never fails.

use crate::{
    config::CodecConfig,
    formats::{DeckSerialization, file_stem},
    models::{Block, Deck, Meta, Section, Slide, Theme},
};

pub mod blocks;
pub mod directives;
pub mod frontmatter;
pub mod layout;
pub mod sections;
pub mod segment;
pub mod writer;

use directives::RawSlide;
use frontmatter::Frontmatter;
use sections::SectionGroup;

#[derive(Debug, Default, Clone)]
pub struct MarpFormat {
    config: CodecConfig,
}

impl MarpFormat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Parse Marp Markdown into a deck. The deck id is left empty.
    #[must_use]
    pub fn parse(&self, content: &str) -> Deck {
        let (frontmatter, body) = frontmatter::split_frontmatter(content);
        if !frontmatter.marp && !frontmatter.theme.is_empty() {
            log::debug!("frontmatter sets a theme without `marp: true`");
        }

        let fragments = segment::split_slides(body);
        let fragment_count = fragments.len();
        let raw = fragments
            .iter()
            .map(|fragment| directives::extract(fragment))
            .collect::<Vec<_>>();

        let groups = sections::group_sections(
            raw,
            &self.config.default_section_title,
            &self.config.untitled_section_title,
        );
        let deck = self.build_deck(frontmatter, groups);

        log::debug!(
            "parsed {fragment_count} fragment(s) into {} section(s), {} slide(s)",
            deck.sections.len(),
            deck.slide_count()
        );
        deck
    }

    /// Write a deck back as Marp Markdown
    #[must_use]
    pub fn encode(&self, deck: &Deck) -> String {
        writer::write_deck(deck, &self.config)
    }

    fn build_deck(&self, frontmatter: Frontmatter, groups: Vec<SectionGroup>) -> Deck {
        let Frontmatter {
            theme,
            style,
            custom,
            ..
        } = frontmatter;

        let theme = (!theme.is_empty()).then(|| {
            let mut theme = Theme::named(theme);
            if !style.is_empty() {
                theme.set_custom("style", style);
            }
            theme
        });

        let sections = groups
            .into_iter()
            .enumerate()
            .map(|(i, group)| {
                let mut section = Section::new(format!("section-{i}"), group.title);
                section.slides = group
                    .slides
                    .into_iter()
                    .enumerate()
                    .map(|(j, raw)| self.to_slide(raw, i, j))
                    .collect();
                section
            })
            .collect::<Vec<_>>();

        let title = sections
            .first()
            .and_then(|section| section.slides.first())
            .map(|slide| slide.title.clone())
            .unwrap_or_default();

        Deck {
            id: String::new(),
            title,
            meta: Meta {
                custom,
                ..Meta::default()
            },
            sections,
            theme,
        }
    }

    fn to_slide(&self, raw: RawSlide, section: usize, position: usize) -> Slide {
        let content = blocks::parse_content(&raw.content, self.config.indent());
        let layout = layout::classify(raw.class(), &raw.content);

        Slide {
            title: content.title,
            subtitle: content.subtitle,
            body: content.body,
            notes: raw.notes.into_iter().map(Block::paragraph).collect(),
            ..Slide::new(format!("s{section}-{position}"), layout)
        }
    }
}

impl DeckSerialization for MarpFormat {
    fn deserialize(&self, data: &[u8], id_hint: Option<&str>) -> Deck {
        let input = String::from_utf8_lossy(data);
        let mut deck = self.parse(&input);

        deck.id = id_hint
            .map(file_stem)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        deck
    }

    fn serialize(&self, deck: &Deck) -> Vec<u8> {
        self.encode(deck).into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::models::{BlockKind, Layout};

    const SAMPLE: &str = r#"---
marp: true
theme: agentplexus
paginate: true
style: |
  .columns {
    display: flex;
    gap: 40px;
  }
---

<!-- _class: lead -->
<!-- _paginate: false -->

<!--
Welcome to the presentation.
[PAUSE:1000]
This is the introduction.
-->

# My Presentation
## A Subtitle Here

**Built with AI**

---

# The Problem

Building AI applications requires:

- **Multiple LLM providers** for redundancy
- **Different APIs** with incompatible formats
- Code duplication for error handling

---

<!-- _class: section-divider -->
<!-- _paginate: false -->

<!--
Section 2: Architecture. <break time="600ms"/>
Let's explore the design.
-->

# Section 2
## Architecture

Understanding the system design

---

<!--
The architecture uses a modular approach.
[PAUSE:1500]
Each component is independent.
-->

# Modular Design

```go
func main() {
    fmt.Println("Hello")
}
```

---

# Two Column Layout

<div class="columns">
<div class="column-left">

**Left Side**
- Item A
- Item B

</div>
<div class="column-right">

**Right Side**
- Item C
- Item D

</div>
</div>

---

# Data Table

| Feature | Status |
|---------|--------|
| Auth | Done |
| API | WIP |

---

# With Image

![Architecture diagram](./images/arch.png)

> This is a blockquote

---

<!-- _class: section-divider -->

# Section 3
## Conclusion

Final thoughts

---

# Thank You

1. Check the repo
2. Star on GitHub
3. Submit PRs
"#;

    fn sample() -> Deck {
        MarpFormat::new().parse(SAMPLE)
    }

    #[test]
    fn test_parse_sample_structure() {
        let deck = sample();

        assert_eq!(deck.title, "My Presentation");
        assert_eq!(deck.id, "");
        assert_eq!(deck.slide_count(), 9);

        let titles: Vec<_> = deck.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A Subtitle Here", "Architecture", "Conclusion"]);

        let ids: Vec<_> = deck.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["section-0", "section-1", "section-2"]);

        let theme = deck.theme.as_ref().unwrap();
        assert_eq!(theme.name, "agentplexus");
        assert!(theme.custom_value("style").unwrap().contains(".columns"));
    }

    #[test]
    fn test_parse_sample_slides() {
        let deck = sample();

        let first = &deck.sections[0].slides[0];
        assert_eq!(first.id, "s0-0");
        assert_eq!(first.layout, Layout::Title);
        assert_eq!(first.subtitle, "A Subtitle Here");
        assert_eq!(
            first.notes_text(),
            "Welcome to the presentation. This is the introduction."
        );

        let problem = deck.find_slide("s0-1").unwrap();
        assert_eq!(problem.title, "The Problem");
        assert_eq!(problem.bullet_count(), 3);

        let divider = deck.find_slide("s1-0").unwrap();
        assert_eq!(divider.layout, Layout::Section);
        assert_eq!(divider.title, "Section 2");
        assert_eq!(
            divider.notes_text(),
            "Section 2: Architecture. Let's explore the design."
        );

        let code = deck.find_slide("s1-1").unwrap();
        assert_eq!(
            code.body,
            vec![Block::code("func main() {\n    fmt.Println(\"Hello\")\n}", "go")]
        );

        let columns = deck.find_slide("s1-2").unwrap();
        assert_eq!(columns.layout, Layout::TitleTwoCol);
        assert_eq!(columns.body.len(), 1);
        assert!(columns.body[0].text.ends_with("</div>\n</div>"));

        let table = deck.find_slide("s1-3").unwrap();
        assert!(table.body[0].text.starts_with("| Feature | Status |"));

        let image = deck.find_slide("s1-4").unwrap();
        assert_eq!(image.body[0], Block::image("./images/arch.png", "Architecture diagram"));
        assert_eq!(image.body[1], Block::quote("This is a blockquote"));

        let thanks = deck.find_slide("s2-1").unwrap();
        assert_eq!(thanks.title, "Thank You");
        assert!(thanks.body.iter().all(|b| b.kind == BlockKind::Numbered));
        assert_eq!(thanks.body.len(), 3);
    }

    #[test]
    fn test_unknown_frontmatter_keys_go_to_meta() {
        let deck = MarpFormat::new().parse("---\nmarp: true\nheader: Acme\n---\n# Hi");
        assert_eq!(deck.meta.custom.get("header").map(String::as_str), Some("Acme"));
        assert!(deck.theme.is_none());
    }

    #[test]
    fn test_style_without_theme_is_dropped() {
        let deck = MarpFormat::new().parse("---\nstyle: |\n  h1 {}\n---\n# Hi");
        assert!(deck.theme.is_none());
    }

    #[test]
    fn test_empty_input() {
        let deck = MarpFormat::new().parse("");
        assert!(deck.sections.is_empty());
        assert_eq!(deck.slide_count(), 0);
        assert_eq!(deck.title, "");
    }

    #[test]
    fn test_unterminated_frontmatter_is_body() {
        let deck = MarpFormat::new().parse("---\ntheme: gaia\n# Slide one");
        assert!(deck.theme.is_none());
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_configured_section_titles() {
        let format = MarpFormat::with_config(CodecConfig {
            default_section_title: "Opening".into(),
            untitled_section_title: "Unnamed".into(),
            ..CodecConfig::default()
        });
        let deck =
            format.parse("# Intro\n---\n<!-- _class: section-divider -->\n\n<div>x</div>");

        let titles: Vec<_> = deck.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Opening", "Unnamed"]);
    }

    #[test]
    fn test_zero_indent_config_uses_default_width() {
        let format = MarpFormat::with_config(CodecConfig {
            indent_width: 0,
            ..CodecConfig::default()
        });
        let deck = format.parse("# List\n- top\n    - nested");

        let body = &deck.sections[0].slides[0].body;
        assert_eq!(body, &vec![Block::bullet("top", 0), Block::bullet("nested", 1)]);
        assert!(format.encode(&deck).contains("\n    - nested\n"));
    }

    #[test]
    fn test_structural_round_trip_of_sample() {
        let format = MarpFormat::new();
        let first = format.parse(SAMPLE);
        let second = format.parse(&format.encode(&first));

        assert_eq!(second.title, first.title);
        assert_eq!(second.sections.len(), first.sections.len());
        assert_eq!(second.slide_count(), first.slide_count());
        assert_eq!(second.theme, first.theme);
        for (a, b) in first.all_slides().zip(second.all_slides()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_deserialize_sets_id_from_hint() {
        let format = MarpFormat::new();
        let deck = format.deserialize(b"# Hello", Some("decks/intro.md"));
        assert_eq!(deck.id, "intro");
        assert_eq!(deck.title, "Hello");

        let deck = format.deserialize(b"# Hello", None);
        assert_eq!(deck.id.len(), 36);
    }

    #[test]
    fn test_deserialize_tolerates_invalid_utf8() {
        let deck = MarpFormat::new().deserialize(b"# Caf\xff\n- item", Some("x.md"));
        assert!(deck.title.starts_with("Caf"));
        assert_eq!(deck.slide_count(), 1);
    }

    #[test]
    fn test_serialize_emits_frontmatter() {
        let bytes = MarpFormat::new().serialize(&sample());
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("---\nmarp: true\ntheme: agentplexus\npaginate: true\nstyle: |\n"));
        assert!(text.contains("<!-- _class: lead -->"));
        assert!(text.contains("<!-- _class: section-divider -->"));
    }

    fn word() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9]{0,8}"
    }

    fn fragment() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(""), Just("section-divider"), Just("lead")],
            proptest::option::of(word()),
            proptest::collection::vec((word(), 0u32..3), 0..4),
            proptest::option::of(word()),
            proptest::option::of(word()),
        )
            .prop_map(|(class, title, bullets, paragraph, note)| {
                let mut out = String::new();
                if !class.is_empty() {
                    out.push_str(&format!("<!-- _class: {class} -->\n\n"));
                }
                if let Some(note) = note {
                    out.push_str(&format!("<!--\n{note}\n[PAUSE:100]\n-->\n\n"));
                }
                if let Some(title) = title {
                    out.push_str(&format!("# {title}\n\n"));
                }
                for (text, level) in bullets {
                    out.push_str(&format!("{}- {text}\n", "    ".repeat(level as usize)));
                }
                if let Some(paragraph) = paragraph {
                    out.push_str(&format!("\n{paragraph}\n"));
                }
                out
            })
    }

    proptest! {
        #[test]
        fn parse_never_panics(input in any::<String>()) {
            let _ = MarpFormat::new().parse(&input);
        }

        #[test]
        fn parse_encode_parse_keeps_structure(
            fragments in proptest::collection::vec(fragment(), 0..8),
            theme in proptest::option::of(word()),
        ) {
            let mut source = String::from("---\nmarp: true\n");
            if let Some(theme) = theme {
                source.push_str(&format!("theme: {theme}\n"));
            }
            source.push_str("---\n\n");
            source.push_str(&fragments.join("\n---\n\n"));

            let format = MarpFormat::new();
            let first = format.parse(&source);
            let second = format.parse(&format.encode(&first));

            prop_assert_eq!(&second.title, &first.title);
            prop_assert_eq!(second.sections.len(), first.sections.len());
            prop_assert_eq!(second.slide_count(), first.slide_count());
        }
    }
}
