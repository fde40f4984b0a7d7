//! Banlists: per-card restriction levels for a rule format.
//!
//! A card absent from a banlist is unrestricted and capped only by the
//! universal three-copy rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::UNIVERSAL_COPY_CAP;
use crate::models::card::CardId;

// ---------------------------------------------------------------------------
// Restriction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Restriction {
    Forbidden,
    Limited,
    SemiLimited,
    Whitelisted,
}

impl Restriction {
    /// Maximum legal copies under this restriction.
    ///
    /// Whitelisted is informational; the cap stays at the universal three.
    pub fn max_copies(&self) -> u32 {
        match self {
            Restriction::Forbidden => 0,
            Restriction::Limited => 1,
            Restriction::SemiLimited => 2,
            Restriction::Whitelisted => UNIVERSAL_COPY_CAP,
        }
    }
}

// ---------------------------------------------------------------------------
// BanlistEntry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanlistEntry {
    pub card_id: CardId,
    pub restriction: Restriction,
}

// ---------------------------------------------------------------------------
// Banlist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Rule format this banlist applies to (e.g. "TCG", "OCG", "Custom").
    pub format_type: String,
    pub is_official: bool,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entries: Vec<BanlistEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banlist {
    /// Create an empty banlist with a fresh id, stamped with the current time.
    pub fn new(name: impl Into<String>, format_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Banlist {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            format_type: format_type.into(),
            is_official: false,
            is_active: false,
            start_date: None,
            end_date: None,
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Restriction for a card, `None` when unrestricted.
    pub fn restriction_of(&self, card_id: CardId) -> Option<Restriction> {
        self.entries
            .iter()
            .find(|e| e.card_id == card_id)
            .map(|e| e.restriction)
    }

    /// Maximum legal copies of a card under this banlist.
    pub fn max_copies(&self, card_id: CardId) -> u32 {
        self.restriction_of(card_id)
            .map(|r| r.max_copies())
            .unwrap_or(UNIVERSAL_COPY_CAP)
    }

    /// Set or replace the restriction for a card. Stamps `updated_at`.
    pub fn set_restriction(&mut self, card_id: CardId, restriction: Restriction) {
        match self.entries.iter_mut().find(|e| e.card_id == card_id) {
            Some(entry) => entry.restriction = restriction,
            None => self.entries.push(BanlistEntry {
                card_id,
                restriction,
            }),
        }
        self.updated_at = Utc::now();
    }

    /// Drop the restriction for a card, returning it to unrestricted.
    /// Stamps `updated_at` when an entry existed.
    pub fn remove_restriction(&mut self, card_id: CardId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.card_id != card_id);
        if self.entries.len() != before {
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }
}
