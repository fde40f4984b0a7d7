//! Card metadata as served by the external catalog.
//!
//! Cards are read-only to this crate: ownership and deck membership are keyed
//! by id, and metadata is only consulted for type-dependent rules and for
//! annotating exports. The raw type vocabulary from the catalog is open
//! ("Effect Monster", "Pendulum Effect Fusion Monster", ...); it is collapsed
//! into the closed [`CardType`] enum once, at catalog ingestion, so everything
//! downstream works over a finite type.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable numeric card identifier (the game's 8-digit passcode).
pub type CardId = u32;

// ---------------------------------------------------------------------------
// CardType — closed classification of the open catalog vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    NormalMonster,
    EffectMonster,
    RitualMonster,
    FusionMonster,
    SynchroMonster,
    XyzMonster,
    LinkMonster,
    PendulumMonster,
    Spell,
    Trap,
    Unknown,
}

impl CardType {
    /// Classify a raw catalog type string into the closed enum.
    ///
    /// Extra-deck keywords win over Pendulum: "Pendulum Effect Fusion
    /// Monster" is a Fusion monster for placement purposes.
    pub fn classify(raw: &str) -> CardType {
        if raw.contains("Fusion") {
            CardType::FusionMonster
        } else if raw.contains("Synchro") {
            CardType::SynchroMonster
        } else if raw.contains("XYZ") || raw.contains("Xyz") {
            CardType::XyzMonster
        } else if raw.contains("Link") {
            CardType::LinkMonster
        } else if raw.contains("Ritual") && raw.contains("Monster") {
            CardType::RitualMonster
        } else if raw.contains("Pendulum") {
            CardType::PendulumMonster
        } else if raw.contains("Normal") && raw.contains("Monster") {
            CardType::NormalMonster
        } else if raw.contains("Monster") {
            CardType::EffectMonster
        } else if raw.contains("Spell") {
            CardType::Spell
        } else if raw.contains("Trap") {
            CardType::Trap
        } else {
            CardType::Unknown
        }
    }

    /// Whether this type belongs to the extra deck.
    pub fn is_extra_deck(&self) -> bool {
        matches!(
            self,
            CardType::FusionMonster
                | CardType::SynchroMonster
                | CardType::XyzMonster
                | CardType::LinkMonster
        )
    }
}

// ---------------------------------------------------------------------------
// CardPrinting — one (set, rarity) printing of a card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPrinting {
    pub set_code: String,
    pub set_name: String,
    pub rarity: String,
    pub price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// The raw catalog type string, kept for display.
    #[serde(rename = "type")]
    pub type_field: String,
    /// The classified type, decided at ingestion.
    pub card_type: CardType,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    /// Level, rank or link value depending on the monster kind.
    pub level: Option<u32>,
    pub attribute: Option<String>,
    pub race: Option<String>,
    #[serde(default)]
    pub printings: Vec<CardPrinting>,
    /// Banlist status keyed by rule format (e.g. "TCG" -> "Limited").
    #[serde(default)]
    pub banlist_status: HashMap<String, String>,
}

impl Card {
    /// Build a card from catalog data, classifying the raw type string.
    pub fn new(id: CardId, name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        let type_field = raw_type.into();
        let card_type = CardType::classify(&type_field);
        Card {
            id,
            name: name.into(),
            type_field,
            card_type,
            attack: None,
            defense: None,
            level: None,
            attribute: None,
            race: None,
            printings: Vec::new(),
            banlist_status: HashMap::new(),
        }
    }
}
