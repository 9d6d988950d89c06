use std::sync::Arc;

use crate::{
    error::{SlidedeckResult, StorageError},
    formats::DeckSerialization,
    models::{Deck, Slide, SlideInfo},
    repo::StorageProvider,
};

const DEFAULT_DECK_FILE: &str = "presentation.md";

/// Decks stored as files behind a caller-supplied provider
#[derive(Debug)]
pub struct DeckRepository {
    provider: Box<dyn StorageProvider>,
    format: Arc<dyn DeckSerialization>,
}

impl DeckRepository {
    pub fn new(provider: Box<dyn StorageProvider>, format: Arc<dyn DeckSerialization>) -> Self {
        Self { provider, format }
    }

    /// Read and parse the deck at `path`; its id is the file stem
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadFailed`] when the provider has nothing at `path`
    pub fn load(&self, path: &str) -> SlidedeckResult<Deck> {
        let Some(bytes) = self.provider.read(path) else {
            log::warn!("could not read deck at {path}");
            return Err(StorageError::read_failed(path).into());
        };
        Ok(self.format.deserialize(&bytes, Some(path)))
    }

    /// Serialize `deck` to `path`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] when the provider refuses the write
    pub fn save(&mut self, path: &str, deck: &Deck) -> SlidedeckResult<()> {
        let data = self.format.serialize(deck);
        if self.provider.write(path, &data) {
            Ok(())
        } else {
            log::warn!("could not write deck to {path}");
            Err(StorageError::write_failed(path).into())
        }
    }

    /// Save `deck` under a path derived from its id and return that path
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] when the provider refuses the write
    pub fn create(&mut self, deck: &Deck) -> SlidedeckResult<String> {
        let path = if deck.id.is_empty() {
            DEFAULT_DECK_FILE.to_string()
        } else {
            format!("{}.md", deck.id)
        };
        self.save(&path, deck)?;
        Ok(path)
    }

    /// # Errors
    ///
    /// Fails if the deck cannot be read or has no slide with `slide_id`
    pub fn get_slide(&self, path: &str, slide_id: &str) -> SlidedeckResult<Slide> {
        let deck = self.load(path)?;
        Ok(deck.slide(slide_id)?.clone())
    }

    /// # Errors
    ///
    /// Fails if the deck cannot be read
    pub fn list_slides(&self, path: &str) -> SlidedeckResult<Vec<SlideInfo>> {
        Ok(self.load(path)?.slide_infos())
    }

    /// Every path the provider knows about
    pub fn list_decks(&self) -> Vec<String> {
        self.provider.list()
    }
}
