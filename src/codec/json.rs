//! Full-fidelity JSON interchange.
//!
//! The only format required to round-trip exactly: `decode(encode(x)) == x`
//! for every model field, timestamps included (RFC3339 both ways). Also
//! defines the bulk backup document used by export-all / import-all.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::banlist::Banlist;
use crate::models::binder::Binder;
use crate::models::deck::Deck;

use super::ImportResult;

pub const BACKUP_VERSION: &str = "1.0.0";

// ---------------------------------------------------------------------------
// Single-entity encode/decode
// ---------------------------------------------------------------------------

pub fn encode_binder(binder: &Binder) -> Result<String> {
    Ok(serde_json::to_string_pretty(binder)?)
}

pub fn encode_deck(deck: &Deck) -> Result<String> {
    Ok(serde_json::to_string_pretty(deck)?)
}

pub fn encode_banlist(banlist: &Banlist) -> Result<String> {
    Ok(serde_json::to_string_pretty(banlist)?)
}

pub fn decode_binder(text: &str) -> ImportResult<Binder> {
    decode_entity(text, "binder")
}

pub fn decode_deck(text: &str) -> ImportResult<Deck> {
    decode_entity(text, "deck")
}

pub fn decode_banlist(text: &str) -> ImportResult<Banlist> {
    decode_entity(text, "banlist")
}

fn decode_entity<T: DeserializeOwned>(text: &str, kind: &str) -> ImportResult<T> {
    match serde_json::from_str(text) {
        Ok(entity) => ImportResult::success(entity),
        Err(e) => ImportResult::failure(vec![format!("Malformed {} JSON: {}", kind, e)]),
    }
}

// ---------------------------------------------------------------------------
// Bulk backup document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    #[serde(default)]
    pub binders: Vec<Binder>,
    #[serde(default)]
    pub decks: Vec<Deck>,
    #[serde(default)]
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub data: BackupData,
}

impl BackupDocument {
    pub fn new(binders: Vec<Binder>, decks: Vec<Deck>, config: serde_json::Value) -> Self {
        BackupDocument {
            version: BACKUP_VERSION.to_string(),
            timestamp: Utc::now(),
            data: BackupData {
                binders,
                decks,
                config,
            },
        }
    }
}

pub fn encode_backup(backup: &BackupDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(backup)?)
}

pub fn decode_backup(text: &str) -> ImportResult<BackupDocument> {
    decode_entity(text, "backup")
}
