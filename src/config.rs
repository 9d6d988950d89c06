//! Codec options for the Marp Markdown dialect

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// Options for reading and writing Marp Markdown.
///
/// The defaults reproduce the dialect as authored by hand; override them
/// only to match decks produced by other tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(default)]
pub struct CodecConfig {
    /// Title of the implicit section holding slides before the first divider
    pub default_section_title: String,
    /// Title of a divider section whose slide carries no heading
    pub untitled_section_title: String,
    /// Spaces per list nesting level
    pub indent_width: u32,
    /// Emit `<!-- _paginate: false -->` after divider and lead markers
    pub emit_paginate_directive: bool,
}

const DEFAULT_INDENT: usize = 4;

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            default_section_title: "default".to_string(),
            untitled_section_title: "untitled".to_string(),
            indent_width: 4,
            emit_paginate_directive: true,
        }
    }
}

impl CodecConfig {
    /// Load options from a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError::ParseFailed`] for malformed TOML
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Indentation width as a `usize`; zero falls back to the default of 4
    #[must_use]
    pub fn indent(&self) -> usize {
        match usize::try_from(self.indent_width) {
            Ok(0) | Err(_) => DEFAULT_INDENT,
            Ok(width) => width,
        }
    }
}
