//! Core engine for a browser-local Yu-Gi-Oh card collection manager.
//!
//! Maintains binders (owned-card inventories) and decks (constrained
//! selections from those binders), checks deck legality against banlists,
//! and imports/exports collections across deck-list (`.ydk`), CSV, plain
//! text, `.lflist.conf` and JSON formats.
//!
//! # Quick start
//!
//! ```no_run
//! use ygobinder::{CollectionSdk, MemoryCatalog, MemoryStore};
//!
//! let sdk = CollectionSdk::builder()
//!     .store(MemoryStore::new())
//!     .catalog(MemoryCatalog::default())
//!     .build()
//!     .unwrap();
//!
//! // Persist a deck
//! let deck = ygobinder::Deck::new("Blue-Eyes");
//! sdk.decks().save(&deck).unwrap();
//!
//! // Export it as a deck list
//! let file = sdk
//!     .interchange()
//!     .export_deck(&deck.id, ygobinder::DeckExportFormat::Ydk)
//!     .unwrap();
//! assert!(file.filename.ends_with(".ydk"));
//! ```

pub mod catalog;
pub mod codec;
pub mod collections;
pub mod config;
pub mod error;
pub mod interchange;
pub mod legality;
pub mod models;
pub mod store;

pub use catalog::{CardCatalog, MemoryCatalog};
pub use codec::ImportResult;
pub use error::{Result, YgoBinderError};
pub use interchange::{
    BanlistExportFormat, BanlistImportFormat, BinderExportFormat, BinderImportFormat,
    DeckExportFormat, DeckImportFormat, ExportFile, Interchange, RestoreSummary,
};
pub use legality::{can_place, validate, CardCount, ValidationReport};
pub use models::{
    Banlist, BanlistEntry, Binder, BinderEntry, Card, CardId, CardPrinting, CardType, Deck,
    DeckEntry, DeckSection, Restriction,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::cell::RefCell;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

// ---------------------------------------------------------------------------
// CollectionSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CollectionSdk`] instance.
///
/// The store and catalog are explicit handles: there is no ambient global
/// state, so tests can isolate themselves with a [`MemoryStore`] and a
/// seeded [`MemoryCatalog`].
pub struct CollectionSdkBuilder {
    store: Option<Box<dyn KeyValueStore>>,
    catalog: Option<Box<dyn CardCatalog>>,
}

impl Default for CollectionSdkBuilder {
    fn default() -> Self {
        Self {
            store: None,
            catalog: None,
        }
    }
}

impl CollectionSdkBuilder {
    /// Set the persistent key-value store.
    ///
    /// Defaults to a [`FileStore`] rooted at the platform data directory.
    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Set the card catalog collaborator.
    ///
    /// Defaults to an empty [`MemoryCatalog`]; every lookup then misses and
    /// type-dependent validation degrades to warnings.
    pub fn catalog(mut self, catalog: impl CardCatalog + 'static) -> Self {
        self.catalog = Some(Box::new(catalog));
        self
    }

    /// Build the SDK, running a data migration step if the stored
    /// `dataVersion` is older than the current one.
    pub fn build(self) -> Result<CollectionSdk> {
        let store = match self.store {
            Some(store) => store,
            None => Box::new(FileStore::new(None)?),
        };
        let catalog = self
            .catalog
            .unwrap_or_else(|| Box::new(MemoryCatalog::default()));

        let sdk = CollectionSdk {
            store: RefCell::new(store),
            catalog,
        };
        sdk.migrate_if_needed()?;
        Ok(sdk)
    }
}

// ---------------------------------------------------------------------------
// CollectionSdk
// ---------------------------------------------------------------------------

/// The main entry point: owns the store and catalog handles and exposes
/// domain interfaces as lightweight borrowing wrappers.
///
/// Created via [`CollectionSdk::builder()`].
pub struct CollectionSdk {
    store: RefCell<Box<dyn KeyValueStore>>,
    catalog: Box<dyn CardCatalog>,
}

impl CollectionSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CollectionSdkBuilder {
        CollectionSdkBuilder::default()
    }

    // -- Domain accessors --------------------------------------------------

    /// Access the persisted binder collection.
    pub fn binders(&self) -> collections::BinderStore<'_> {
        collections::BinderStore::new(self)
    }

    /// Access the persisted deck collection.
    pub fn decks(&self) -> collections::DeckStore<'_> {
        collections::DeckStore::new(self)
    }

    /// Access the persisted banlist collection.
    pub fn banlists(&self) -> collections::BanlistStore<'_> {
        collections::BanlistStore::new(self)
    }

    /// Access the import/export facade.
    pub fn interchange(&self) -> Interchange<'_> {
        Interchange::new(self)
    }

    /// Validate a deck against a binder and banlist under a rule format.
    ///
    /// Thin forwarding wrapper over [`legality::validate`] that supplies
    /// the SDK's catalog.
    pub fn validate_deck(
        &self,
        deck: &Deck,
        binder: &Binder,
        banlist: &Banlist,
        rule_format: &str,
    ) -> ValidationReport {
        legality::validate(deck, binder, banlist, rule_format, self.catalog.as_ref())
    }

    // -- Collaborator access -----------------------------------------------

    pub fn catalog(&self) -> &dyn CardCatalog {
        self.catalog.as_ref()
    }

    pub(crate) fn store(&self) -> &RefCell<Box<dyn KeyValueStore>> {
        &self.store
    }

    /// The app config record, `null` when none has been stored.
    pub fn app_config(&self) -> Result<serde_json::Value> {
        match self.store.borrow().get(config::KEY_APP_CONFIG)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(serde_json::Value::Null),
        }
    }

    /// Replace the app config record.
    pub fn set_app_config(&self, value: &serde_json::Value) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.store.borrow_mut().set(config::KEY_APP_CONFIG, &text)
    }

    /// The most recent bulk backup written by
    /// [`Interchange::export_all`], if any.
    pub fn latest_backup(&self) -> Result<Option<String>> {
        self.store.borrow().get(config::KEY_LATEST_BACKUP)
    }

    // -- Collection record helpers -----------------------------------------

    pub(crate) fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.borrow().get(key)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    pub(crate) fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.store.borrow_mut().set(key, &text)
    }

    // -- Migration ---------------------------------------------------------

    /// Stamp or upgrade the stored `dataVersion`.
    ///
    /// Version 1 records differ from version 2 only by fields that now
    /// carry serde defaults, so the upgrade is a re-stamp; future bumps get
    /// their migration steps here.
    fn migrate_if_needed(&self) -> Result<()> {
        let stored = self.store.borrow().get(config::KEY_DATA_VERSION)?;
        match stored.as_deref() {
            Some(v) if v == config::DATA_VERSION => Ok(()),
            Some(old) => {
                eprintln!(
                    "Migrating stored data from version {} to {}",
                    old,
                    config::DATA_VERSION
                );
                self.store
                    .borrow_mut()
                    .set(config::KEY_DATA_VERSION, config::DATA_VERSION)
            }
            None => self
                .store
                .borrow_mut()
                .set(config::KEY_DATA_VERSION, config::DATA_VERSION),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CollectionSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let binders = self.binders().list().map(|b| b.len()).unwrap_or(0);
        let decks = self.decks().list().map(|d| d.len()).unwrap_or(0);
        let banlists = self.banlists().list().map(|b| b.len()).unwrap_or(0);
        write!(
            f,
            "CollectionSdk(binders={}, decks={}, banlists={})",
            binders, decks, banlists
        )
    }
}
