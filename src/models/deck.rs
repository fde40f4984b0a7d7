//! Decks: a named triple of main/extra/side card lists.
//!
//! The same card id may appear in more than one section; the quantity "used"
//! for ownership and banlist purposes is the sum across all three.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::card::CardId;

// ---------------------------------------------------------------------------
// DeckSection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeckSection {
    Main,
    Extra,
    Side,
}

// ---------------------------------------------------------------------------
// DeckEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckEntry {
    pub card_id: CardId,
    pub quantity: u32,
}

impl DeckEntry {
    pub fn new(card_id: CardId, quantity: u32) -> Self {
        DeckEntry { card_id, quantity }
    }
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub format: Option<String>,
    #[serde(default)]
    pub main: Vec<DeckEntry>,
    #[serde(default)]
    pub extra: Vec<DeckEntry>,
    #[serde(default)]
    pub side: Vec<DeckEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Deck {
    /// Create an empty deck with a fresh id, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Deck {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            format: None,
            main: Vec::new(),
            extra: Vec::new(),
            side: Vec::new(),
            tags: Vec::new(),
            notes: None,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn section(&self, section: DeckSection) -> &[DeckEntry] {
        match section {
            DeckSection::Main => &self.main,
            DeckSection::Extra => &self.extra,
            DeckSection::Side => &self.side,
        }
    }

    fn section_mut(&mut self, section: DeckSection) -> &mut Vec<DeckEntry> {
        match section {
            DeckSection::Main => &mut self.main,
            DeckSection::Extra => &mut self.extra,
            DeckSection::Side => &mut self.side,
        }
    }

    /// Number of cards in a section, counting quantities.
    pub fn section_total(&self, section: DeckSection) -> u32 {
        self.section(section).iter().map(|e| e.quantity).sum()
    }

    /// Total copies of a card used across main, extra and side.
    pub fn copies_used(&self, card_id: CardId) -> u32 {
        self.main
            .iter()
            .chain(self.extra.iter())
            .chain(self.side.iter())
            .filter(|e| e.card_id == card_id)
            .map(|e| e.quantity)
            .sum()
    }

    /// All distinct card ids appearing in any section.
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self
            .main
            .iter()
            .chain(self.extra.iter())
            .chain(self.side.iter())
            .map(|e| e.card_id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Add copies of a card to a section, merging with an existing entry.
    /// Stamps `modified_at`.
    pub fn add_card(&mut self, section: DeckSection, card_id: CardId, quantity: u32) {
        let entries = self.section_mut(section);
        match entries.iter_mut().find(|e| e.card_id == card_id) {
            Some(entry) => entry.quantity += quantity,
            None => entries.push(DeckEntry::new(card_id, quantity)),
        }
        self.modified_at = Utc::now();
    }

    /// Set the exact quantity of a card in a section; 0 removes the entry.
    /// Stamps `modified_at`.
    pub fn set_quantity(&mut self, section: DeckSection, card_id: CardId, quantity: u32) {
        let entries = self.section_mut(section);
        if quantity == 0 {
            entries.retain(|e| e.card_id != card_id);
        } else {
            match entries.iter_mut().find(|e| e.card_id == card_id) {
                Some(entry) => entry.quantity = quantity,
                None => entries.push(DeckEntry::new(card_id, quantity)),
            }
        }
        self.modified_at = Utc::now();
    }

    /// Remove a card from a section entirely. Stamps `modified_at` when an
    /// entry existed.
    pub fn remove_card(&mut self, section: DeckSection, card_id: CardId) -> bool {
        let entries = self.section_mut(section);
        let before = entries.len();
        entries.retain(|e| e.card_id != card_id);
        if entries.len() != before {
            self.modified_at = Utc::now();
            true
        } else {
            false
        }
    }
}
