//! Store-backed collection views for binders, decks and banlists.
//!
//! Each view is a lightweight wrapper borrowing the SDK, reading and
//! writing the collection's single store key as a whole JSON array.
//! Saves upsert by entity id; last write wins.

use crate::config;
use crate::error::Result;
use crate::models::banlist::Banlist;
use crate::models::binder::Binder;
use crate::models::deck::Deck;
use crate::CollectionSdk;

// ---------------------------------------------------------------------------
// BinderStore
// ---------------------------------------------------------------------------

/// View over the persisted binder collection.
pub struct BinderStore<'a> {
    sdk: &'a CollectionSdk,
}

impl<'a> BinderStore<'a> {
    pub(crate) fn new(sdk: &'a CollectionSdk) -> Self {
        Self { sdk }
    }

    pub fn list(&self) -> Result<Vec<Binder>> {
        self.sdk.load_list(config::KEY_BINDERS)
    }

    pub fn get(&self, id: &str) -> Result<Option<Binder>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    /// Insert or replace the binder with the same id.
    pub fn save(&self, binder: &Binder) -> Result<()> {
        let mut binders = self.list()?;
        match binders.iter_mut().find(|b| b.id == binder.id) {
            Some(existing) => *existing = binder.clone(),
            None => binders.push(binder.clone()),
        }
        self.sdk.save_list(config::KEY_BINDERS, &binders)
    }

    /// Delete by id. Returns false when no such binder existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut binders = self.list()?;
        let before = binders.len();
        binders.retain(|b| b.id != id);
        if binders.len() == before {
            return Ok(false);
        }
        self.sdk.save_list(config::KEY_BINDERS, &binders)?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// DeckStore
// ---------------------------------------------------------------------------

/// View over the persisted deck collection.
pub struct DeckStore<'a> {
    sdk: &'a CollectionSdk,
}

impl<'a> DeckStore<'a> {
    pub(crate) fn new(sdk: &'a CollectionSdk) -> Self {
        Self { sdk }
    }

    pub fn list(&self) -> Result<Vec<Deck>> {
        self.sdk.load_list(config::KEY_DECKS)
    }

    pub fn get(&self, id: &str) -> Result<Option<Deck>> {
        Ok(self.list()?.into_iter().find(|d| d.id == id))
    }

    /// Insert or replace the deck with the same id.
    ///
    /// Illegal decks are persistable; legality is advisory and checked
    /// separately.
    pub fn save(&self, deck: &Deck) -> Result<()> {
        let mut decks = self.list()?;
        match decks.iter_mut().find(|d| d.id == deck.id) {
            Some(existing) => *existing = deck.clone(),
            None => decks.push(deck.clone()),
        }
        self.sdk.save_list(config::KEY_DECKS, &decks)
    }

    /// Delete by id. Returns false when no such deck existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut decks = self.list()?;
        let before = decks.len();
        decks.retain(|d| d.id != id);
        if decks.len() == before {
            return Ok(false);
        }
        self.sdk.save_list(config::KEY_DECKS, &decks)?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// BanlistStore
// ---------------------------------------------------------------------------

/// View over the persisted banlist collection.
pub struct BanlistStore<'a> {
    sdk: &'a CollectionSdk,
}

impl<'a> BanlistStore<'a> {
    pub(crate) fn new(sdk: &'a CollectionSdk) -> Self {
        Self { sdk }
    }

    pub fn list(&self) -> Result<Vec<Banlist>> {
        self.sdk.load_list(config::KEY_BANLISTS)
    }

    pub fn get(&self, id: &str) -> Result<Option<Banlist>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    /// The active banlist for a rule format, if any.
    pub fn active_for_format(&self, format_type: &str) -> Result<Option<Banlist>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|b| b.is_active && b.format_type.eq_ignore_ascii_case(format_type)))
    }

    /// Insert or replace the banlist with the same id.
    pub fn save(&self, banlist: &Banlist) -> Result<()> {
        let mut banlists = self.list()?;
        match banlists.iter_mut().find(|b| b.id == banlist.id) {
            Some(existing) => *existing = banlist.clone(),
            None => banlists.push(banlist.clone()),
        }
        self.sdk.save_list(config::KEY_BANLISTS, &banlists)
    }

    /// Delete by id. Returns false when no such banlist existed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut banlists = self.list()?;
        let before = banlists.len();
        banlists.retain(|b| b.id != id);
        if banlists.len() == before {
            return Ok(false);
        }
        self.sdk.save_list(config::KEY_BANLISTS, &banlists)?;
        Ok(true)
    }
}
