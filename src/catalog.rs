//! Card catalog adapter.
//!
//! The catalog is an external collaborator: given a card id it returns
//! metadata or a not-found signal. Lookups may be partial — callers must
//! tolerate misses and degrade (structural rules are id-keyed and keep
//! working; only type-dependent rules are suppressed for unresolved ids).

use std::collections::HashMap;

use crate::error::Result;
use crate::models::card::{Card, CardId};

// ---------------------------------------------------------------------------
// CardCatalog
// ---------------------------------------------------------------------------

/// Read-only card metadata lookup.
///
/// `resolve` returns `Ok(None)` for an unknown id; `Err` is reserved for
/// the collaborator itself failing (backing store unreachable, corrupt
/// data), not for missing cards.
pub trait CardCatalog {
    fn resolve(&self, card_id: CardId) -> Result<Option<Card>>;

    /// Resolve a batch of ids without failing the whole batch on misses.
    ///
    /// Every requested id appears in the result map; unresolvable ids map
    /// to `None`.
    fn resolve_many(&self, ids: &[CardId]) -> Result<HashMap<CardId, Option<Card>>> {
        let mut out = HashMap::with_capacity(ids.len());
        for &id in ids {
            out.insert(id, self.resolve(id)?);
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// MemoryCatalog
// ---------------------------------------------------------------------------

/// In-memory catalog backed by a map of cards.
///
/// Serves as the seedable catalog for tests and for applications that load
/// their card database up front.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    cards: HashMap<CardId, Card>,
}

impl MemoryCatalog {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        MemoryCatalog {
            cards: cards.into_iter().map(|c| (c.id, c)).collect(),
        }
    }

    /// Insert or replace a card.
    pub fn insert(&mut self, card: Card) {
        self.cards.insert(card.id, card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardCatalog for MemoryCatalog {
    fn resolve(&self, card_id: CardId) -> Result<Option<Card>> {
        Ok(self.cards.get(&card_id).cloned())
    }
}
