//! Import/export facade over the codec layer and the persistent store.
//!
//! Exports load an entity by id (hard `NotFound` when absent) and delegate
//! to the matching codec; imports decode first and only touch the store on
//! a successful decode. The bulk restore materializes the entire new state
//! in memory before the first write, so a malformed document leaves the
//! store untouched.

use crate::codec::json::BackupDocument;
use crate::codec::{self, ImportResult};
use crate::config;
use crate::error::{Result, YgoBinderError};
use crate::models::banlist::Banlist;
use crate::models::binder::Binder;
use crate::models::deck::{Deck, DeckSection};
use crate::CollectionSdk;

// ---------------------------------------------------------------------------
// Formats and export payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckExportFormat {
    Ydk,
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderExportFormat {
    Csv,
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanlistExportFormat {
    Lflist,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckImportFormat {
    Ydk,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderImportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanlistImportFormat {
    Lflist,
    Json,
}

// Case-insensitive name parsing for callers mapping user input or file
// extensions to a format. "txt" and "text" both name the plain-text export.

impl std::str::FromStr for DeckExportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ydk" => Ok(DeckExportFormat::Ydk),
            "json" => Ok(DeckExportFormat::Json),
            "txt" | "text" => Ok(DeckExportFormat::Text),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown deck export format '{}'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for BinderExportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(BinderExportFormat::Csv),
            "json" => Ok(BinderExportFormat::Json),
            "txt" | "text" => Ok(BinderExportFormat::Text),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown binder export format '{}'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for BanlistExportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lflist" => Ok(BanlistExportFormat::Lflist),
            "json" => Ok(BanlistExportFormat::Json),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown banlist export format '{}'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for DeckImportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ydk" => Ok(DeckImportFormat::Ydk),
            "json" => Ok(DeckImportFormat::Json),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown deck import format '{}'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for BinderImportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(BinderImportFormat::Csv),
            "json" => Ok(BinderImportFormat::Json),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown binder import format '{}'",
                s
            ))),
        }
    }
}

impl std::str::FromStr for BanlistImportFormat {
    type Err = YgoBinderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lflist" => Ok(BanlistImportFormat::Lflist),
            "json" => Ok(BanlistImportFormat::Json),
            _ => Err(YgoBinderError::InvalidArgument(format!(
                "Unknown banlist import format '{}'",
                s
            ))),
        }
    }
}

/// An encoded export together with its suggested filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: String,
}

/// Counts of what a bulk restore applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
    pub binders: usize,
    pub decks: usize,
}

// ---------------------------------------------------------------------------
// Interchange
// ---------------------------------------------------------------------------

/// Import/export interface bound to the SDK's store and catalog.
pub struct Interchange<'a> {
    sdk: &'a CollectionSdk,
}

impl<'a> Interchange<'a> {
    pub(crate) fn new(sdk: &'a CollectionSdk) -> Self {
        Self { sdk }
    }

    // -- Export ------------------------------------------------------------

    pub fn export_deck(&self, id: &str, format: DeckExportFormat) -> Result<ExportFile> {
        let deck = self
            .sdk
            .decks()
            .get(id)?
            .ok_or_else(|| YgoBinderError::NotFound(format!("Deck not found: {}", id)))?;

        let (contents, ext) = match format {
            DeckExportFormat::Ydk => (codec::ydk::encode(&deck), "ydk"),
            DeckExportFormat::Json => (codec::json::encode_deck(&deck)?, "json"),
            DeckExportFormat::Text => {
                let options = codec::text::TextExportOptions {
                    catalog: Some(self.sdk.catalog()),
                    ..Default::default()
                };
                (codec::text::encode_deck(&deck, &options), "txt")
            }
        };
        Ok(ExportFile {
            filename: format!("{}.{}", sanitize_filename(&deck.name), ext),
            contents,
        })
    }

    pub fn export_binder(&self, id: &str, format: BinderExportFormat) -> Result<ExportFile> {
        let binder = self
            .sdk
            .binders()
            .get(id)?
            .ok_or_else(|| YgoBinderError::NotFound(format!("Binder not found: {}", id)))?;

        let (contents, ext) = match format {
            BinderExportFormat::Csv => (codec::csv::encode(&binder)?, "csv"),
            BinderExportFormat::Json => (codec::json::encode_binder(&binder)?, "json"),
            BinderExportFormat::Text => {
                let options = codec::text::TextExportOptions {
                    catalog: Some(self.sdk.catalog()),
                    ..Default::default()
                };
                (codec::text::encode_binder(&binder, &options), "txt")
            }
        };
        Ok(ExportFile {
            filename: format!("{}.{}", sanitize_filename(&binder.name), ext),
            contents,
        })
    }

    pub fn export_banlist(&self, id: &str, format: BanlistExportFormat) -> Result<ExportFile> {
        let banlist = self
            .sdk
            .banlists()
            .get(id)?
            .ok_or_else(|| YgoBinderError::NotFound(format!("Banlist not found: {}", id)))?;

        let (contents, ext) = match format {
            BanlistExportFormat::Lflist => (
                codec::lflist::encode(&banlist, Some(self.sdk.catalog())),
                "lflist.conf",
            ),
            BanlistExportFormat::Json => (codec::json::encode_banlist(&banlist)?, "json"),
        };
        Ok(ExportFile {
            filename: format!("{}.{}", sanitize_filename(&banlist.name), ext),
            contents,
        })
    }

    // -- Import ------------------------------------------------------------

    /// Decode a deck document and, on success, persist it.
    ///
    /// With `merge_into` set, the decoded entries are merged into that
    /// existing deck (quantities summed per card per section); the target
    /// must exist. Otherwise the decoded deck is stored as a new entity
    /// (decoded YDK text has no id of its own; a fresh one is generated at
    /// construction).
    pub fn import_deck(
        &self,
        text: &str,
        format: DeckImportFormat,
        merge_into: Option<&str>,
    ) -> Result<ImportResult<Deck>> {
        let mut result = match format {
            DeckImportFormat::Ydk => codec::ydk::decode(text, "Imported Deck"),
            DeckImportFormat::Json => codec::json::decode_deck(text),
        };
        let Some(decoded) = result.entity.take() else {
            return Ok(result);
        };

        let stored = match merge_into {
            Some(target_id) => {
                let mut target = self.sdk.decks().get(target_id)?.ok_or_else(|| {
                    YgoBinderError::NotFound(format!("Merge target deck not found: {}", target_id))
                })?;
                for section in [DeckSection::Main, DeckSection::Extra, DeckSection::Side] {
                    for entry in decoded.section(section).to_vec() {
                        target.add_card(section, entry.card_id, entry.quantity);
                    }
                }
                target
            }
            None => decoded,
        };
        self.sdk.decks().save(&stored)?;

        result.entity = Some(stored);
        Ok(result)
    }

    /// Decode a binder document and, on success, persist it.
    ///
    /// Merge semantics mirror [`import_deck`](Self::import_deck): quantities
    /// are summed per card id, attributes of existing entries are kept.
    pub fn import_binder(
        &self,
        text: &str,
        format: BinderImportFormat,
        merge_into: Option<&str>,
    ) -> Result<ImportResult<Binder>> {
        let mut result = match format {
            BinderImportFormat::Csv => codec::csv::decode(text, "Imported Binder"),
            BinderImportFormat::Json => codec::json::decode_binder(text),
        };
        let Some(decoded) = result.entity.take() else {
            return Ok(result);
        };

        let stored = match merge_into {
            Some(target_id) => {
                let mut target = self.sdk.binders().get(target_id)?.ok_or_else(|| {
                    YgoBinderError::NotFound(format!(
                        "Merge target binder not found: {}",
                        target_id
                    ))
                })?;
                for entry in decoded.entries {
                    target.add_entry(entry);
                }
                target
            }
            None => decoded,
        };
        self.sdk.binders().save(&stored)?;

        result.entity = Some(stored);
        Ok(result)
    }

    /// Decode a banlist document and, on success, persist it.
    pub fn import_banlist(
        &self,
        text: &str,
        format: BanlistImportFormat,
    ) -> Result<ImportResult<Banlist>> {
        let result = match format {
            BanlistImportFormat::Lflist => codec::lflist::decode(text, "Imported Banlist"),
            BanlistImportFormat::Json => codec::json::decode_banlist(text),
        };
        if let Some(banlist) = &result.entity {
            self.sdk.banlists().save(banlist)?;
        }
        Ok(result)
    }

    // -- Bulk --------------------------------------------------------------

    /// Serialize binders, decks and app config as one backup document.
    ///
    /// The encoded document is also stored under the latest-backup key.
    pub fn export_all(&self) -> Result<String> {
        let binders = self.sdk.binders().list()?;
        let decks = self.sdk.decks().list()?;
        let app_config = self.sdk.app_config()?;

        let backup = BackupDocument::new(binders, decks, app_config);
        let text = codec::json::encode_backup(&backup)?;
        self.sdk
            .store()
            .borrow_mut()
            .set(config::KEY_LATEST_BACKUP, &text)?;
        Ok(text)
    }

    /// Restore binders, decks and app config from a backup document.
    ///
    /// The document is decoded and checked fully in memory before the first
    /// store write; a document that fails to decode performs zero writes.
    /// The store itself has no transactions, so a crash between the writes
    /// can still leave a partial restore behind.
    pub fn import_all(&self, text: &str) -> Result<ImportResult<RestoreSummary>> {
        let decoded = codec::json::decode_backup(text);
        let Some(backup) = decoded.entity else {
            return Ok(ImportResult {
                success: false,
                entity: None,
                errors: decoded.errors,
                warnings: decoded.warnings,
            });
        };

        let mut warnings = decoded.warnings;
        if backup.version != codec::json::BACKUP_VERSION {
            warnings.push(format!(
                "Backup version {} differs from supported {}",
                backup.version,
                codec::json::BACKUP_VERSION
            ));
        }

        let summary = RestoreSummary {
            binders: backup.data.binders.len(),
            decks: backup.data.decks.len(),
        };
        let binders_text = serde_json::to_string(&backup.data.binders)?;
        let decks_text = serde_json::to_string(&backup.data.decks)?;
        let config_text = if backup.data.config.is_null() {
            "{}".to_string()
        } else {
            serde_json::to_string(&backup.data.config)?
        };

        // All serialization succeeded; now issue the writes.
        let mut store = self.sdk.store().borrow_mut();
        store.set(config::KEY_BINDERS, &binders_text)?;
        store.set(config::KEY_DECKS, &decks_text)?;
        store.set(config::KEY_APP_CONFIG, &config_text)?;

        Ok(ImportResult::success(summary).with_warnings(warnings))
    }
}

// ---------------------------------------------------------------------------
// Filename sanitization
// ---------------------------------------------------------------------------

/// Fold an entity name into a filesystem-safe stem.
///
/// Alphanumerics, spaces, hyphens and underscores survive; everything else
/// becomes an underscore, runs of spaces/underscores collapse to one, and
/// the stem is capped at 50 characters.
pub fn sanitize_filename(name: &str) -> String {
    let source = if name.trim().is_empty() { "unnamed" } else { name };

    let mut out = String::with_capacity(source.len());
    let mut pending_sep = false;
    for c in source.chars() {
        if c.is_alphanumeric() || c == '-' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    // Cap counts characters, not bytes, so multi-byte names keep their
    // full 50.
    let capped: String = out.chars().take(50).collect();
    let trimmed = capped.trim_matches('_');
    if trimmed.is_empty() {
        "unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}
