#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::needless_pass_by_value)]

uniffi::setup_scaffolding!();

pub mod config;
pub mod error;
pub mod ffi;
pub mod formats;
pub mod models;
pub mod repo;

pub use config::CodecConfig;
// Re-export common error types for convenience
pub use error::{
    ConfigError, ConfigResult, DeckError, DeckResult, SerializationError, SerializationResult,
    SlidedeckError, SlidedeckResult, StorageError, StorageResult,
};
pub use formats::{CompactEncoder, DeckSerialization, MarpFormat, OutputFormat};
pub use models::{
    Audio, AudioSource, Block, BlockKind, Change, ChangeOp, Deck, Diff, Layout, Meta, Section,
    Slide, SlideInfo, Theme,
};

/// Parse Marp Markdown with the default options
#[must_use]
#[uniffi::export]
pub fn parse(text: &str) -> Deck {
    MarpFormat::new().parse(text)
}

/// Write a deck as Marp Markdown with the default options
#[must_use]
#[uniffi::export]
pub fn encode(deck: Deck) -> String {
    MarpFormat::new().encode(&deck)
}

/// Compact projection of a deck
#[must_use]
#[uniffi::export]
pub fn encode_deck(deck: Deck) -> String {
    CompactEncoder::new().encode_deck(&deck)
}

/// Compact projection of a change set
#[must_use]
#[uniffi::export]
pub fn encode_diff(diff: Diff) -> String {
    CompactEncoder::new().encode_diff(&diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segmenter_ignores_separator_in_code() {
        let deck = parse("# S\n\n```\nfoo\n---\nbar\n```\n");
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.title, "S");
    }

    #[test]
    fn two_column_markup_upgrades_layout() {
        let deck = parse("# Compare\n\n<div class=\"columns\">\n<div>A</div>\n<div>B</div>\n</div>");
        assert_eq!(deck.sections[0].slides[0].layout, Layout::TitleTwoCol);
    }

    #[test]
    fn free_functions_round_trip() {
        let deck = parse("---\nmarp: true\n---\n# One\n---\n<!-- _class: section-divider -->\n# Section 2\n## Two");
        let again = parse(&encode(deck.clone()));

        assert_eq!(again.title, deck.title);
        assert_eq!(again.sections.len(), 2);
        assert_eq!(again.slide_count(), deck.slide_count());
        assert!(encode_deck(deck).contains("section section-1 Two\n"));
        assert_eq!(encode_diff(Diff::new("x")), "plan deck x\n");
    }
}
