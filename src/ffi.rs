//! `UniFFI` bindings for the slide codec
//!
//! [`SlideCodec`] holds the most recently parsed deck so foreign callers can
//! query it without shipping the whole record back and forth.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    config::CodecConfig,
    error::{ConfigError, DeckError, SerializationError},
    formats::{CompactEncoder, MarpFormat, OutputFormat, render_deck},
    models::{Deck, Diff, Slide, SlideInfo},
};

#[derive(Debug, uniffi::Object)]
pub struct SlideCodec {
    format: MarpFormat,
    deck: Mutex<Deck>,
}

#[uniffi::export]
impl SlideCodec {
    /// Codec with the default dialect options
    #[uniffi::constructor]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    #[uniffi::constructor]
    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            format: MarpFormat::with_config(config),
            deck: Mutex::new(Deck::default()),
        }
    }

    /// Codec configured from a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed
    #[uniffi::constructor]
    pub fn from_toml(source: String) -> Result<Self, ConfigError> {
        Ok(Self::with_config(CodecConfig::from_toml_str(&source)?))
    }

    /// Parse Marp Markdown, keep it as the current deck and return it
    pub fn parse(&self, text: &str) -> Deck {
        let deck = self.format.parse(text);
        *self.current() = deck.clone();
        deck
    }

    /// Replace the current deck
    pub fn load(&self, deck: Deck) {
        *self.current() = deck;
    }

    pub fn deck(&self) -> Deck {
        self.current().clone()
    }

    /// Write `deck` as Marp Markdown
    pub fn encode(&self, deck: Deck) -> String {
        self.format.encode(&deck)
    }

    /// Write the current deck as Marp Markdown
    pub fn encode_current(&self) -> String {
        self.format.encode(&self.current())
    }

    pub fn encode_compact(&self) -> String {
        CompactEncoder::new().encode_deck(&self.current())
    }

    /// Compact rendering of one slide of the current deck
    ///
    /// # Errors
    ///
    /// Returns an error if no slide has the id
    pub fn encode_slide(&self, slide_id: &str) -> Result<String, DeckError> {
        let deck = self.current();
        Ok(CompactEncoder::new().encode_slide(deck.slide(slide_id)?))
    }

    pub fn encode_diff(&self, diff: Diff) -> String {
        CompactEncoder::new().encode_diff(&diff)
    }

    /// # Errors
    ///
    /// Returns an error if JSON encoding fails
    pub fn render(&self, format: OutputFormat) -> Result<String, SerializationError> {
        render_deck(&self.current(), format)
    }

    /// # Errors
    ///
    /// Returns an error if JSON encoding fails
    pub fn render_json(&self) -> Result<String, SerializationError> {
        self.render(OutputFormat::Json)
    }

    /// # Errors
    ///
    /// Returns an error if no slide has the id
    pub fn find_slide(&self, slide_id: &str) -> Result<Slide, DeckError> {
        self.current().slide(slide_id).cloned()
    }

    pub fn slide_count(&self) -> u32 {
        u32::try_from(self.current().slide_count()).unwrap_or(u32::MAX)
    }

    pub fn slide_infos(&self) -> Vec<SlideInfo> {
        self.current().slide_infos()
    }

    pub fn title(&self) -> String {
        self.current().title.clone()
    }
}

impl SlideCodec {
    fn current(&self) -> MutexGuard<'_, Deck> {
        self.deck.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SlideCodec {
    fn default() -> Self {
        Self::new()
    }
}
