use core::{fmt::Debug, str::FromStr};

use serde::Serialize;

use crate::{
    error::{SerializationError, SerializationResult},
    models::{Deck, Diff, Slide, SlideInfo},
};

pub mod compact;
pub mod marp;

pub use compact::CompactEncoder;
pub use marp::MarpFormat;

pub trait DeckSerialization: Send + Sync + Debug {
    /// Deserialize bytes into a Deck
    fn deserialize(&self, data: &[u8], id_hint: Option<&str>) -> Deck;

    /// Serialize a Deck into bytes
    fn serialize(&self, deck: &Deck) -> Vec<u8>;
}

/// Projection used when handing a deck to an external consumer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum OutputFormat {
    /// Line-oriented compact notation
    #[default]
    Compact,
    /// Pretty-printed JSON of the model
    Json,
}

impl FromStr for OutputFormat {
    type Err = SerializationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "toon" | "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(SerializationError::unsupported_format(s)),
        }
    }
}

/// File name without directories or extension, used as a deck id
#[must_use]
pub fn file_stem(path: &str) -> String {
    let name = path
        .rsplit_once(['/', '\\'])
        .map_or(path, |(_, name)| name);

    match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> SerializationResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a whole deck
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn render_deck(deck: &Deck, format: OutputFormat) -> SerializationResult<String> {
    match format {
        OutputFormat::Compact => Ok(CompactEncoder::new().encode_deck(deck)),
        OutputFormat::Json => to_json(deck),
    }
}

/// Render a single slide
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn render_slide(slide: &Slide, format: OutputFormat) -> SerializationResult<String> {
    match format {
        OutputFormat::Compact => Ok(CompactEncoder::new().encode_slide(slide)),
        OutputFormat::Json => to_json(slide),
    }
}

/// Render a slide listing
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn render_slide_list(slides: &[SlideInfo], format: OutputFormat) -> SerializationResult<String> {
    match format {
        OutputFormat::Compact => Ok(CompactEncoder::new().encode_slide_list(slides)),
        OutputFormat::Json => to_json(slides),
    }
}

/// Render a change set
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn render_diff(diff: &Diff, format: OutputFormat) -> SerializationResult<String> {
    match format {
        OutputFormat::Compact => Ok(CompactEncoder::new().encode_diff(diff)),
        OutputFormat::Json => to_json(diff),
    }
}
