//! Binders: named, owned-card inventories.
//!
//! A binder entry is keyed solely by card id — set code and rarity are
//! attributes of the entry, not part of its identity. `quantity` is the total
//! owned count for that card across printings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::card::CardId;

// ---------------------------------------------------------------------------
// BinderEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinderEntry {
    pub card_id: CardId,
    pub quantity: u32,
    pub set_code: Option<String>,
    pub rarity: Option<String>,
    pub condition: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BinderEntry {
    pub fn new(card_id: CardId, quantity: u32) -> Self {
        BinderEntry {
            card_id,
            quantity,
            set_code: None,
            rarity: None,
            condition: None,
            notes: None,
            tags: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Binder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binder {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub entries: Vec<BinderEntry>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Binder {
    /// Create an empty binder with a fresh id, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Binder {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            entries: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Total owned copies of a card, 0 when absent.
    pub fn quantity_of(&self, card_id: CardId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.card_id == card_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// Add an entry, merging quantities when the card already has one.
    ///
    /// Attributes (set code, rarity, ...) of an existing entry are kept;
    /// only the quantity is increased. Stamps `modified_at`.
    pub fn add_entry(&mut self, entry: BinderEntry) {
        match self.entries.iter_mut().find(|e| e.card_id == entry.card_id) {
            Some(existing) => existing.quantity += entry.quantity,
            None => self.entries.push(entry),
        }
        self.modified_at = Utc::now();
    }

    /// Replace the entry for a card wholesale. Stamps `modified_at`.
    ///
    /// Returns false (and leaves the binder untouched) when no entry for
    /// the card exists.
    pub fn update_entry(&mut self, entry: BinderEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.card_id == entry.card_id) {
            Some(existing) => {
                *existing = entry;
                self.modified_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Remove the entry for a card. Stamps `modified_at` when one existed.
    pub fn remove_entry(&mut self, card_id: CardId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.card_id != card_id);
        if self.entries.len() != before {
            self.modified_at = Utc::now();
            true
        } else {
            false
        }
    }

    /// Total number of cards across all entries.
    pub fn total_cards(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }
}
