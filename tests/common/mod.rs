//! Shared test fixtures for the ygobinder integration tests.
//!
//! Provides a small seeded catalog of well-known cards plus helpers for
//! building decks of a given size and binders that own everything a deck
//! uses.

#![allow(dead_code)]

use ygobinder::{
    Banlist, Binder, BinderEntry, Card, CardId, CollectionSdk, Deck, DeckSection, MemoryCatalog,
    MemoryStore,
};

pub const BLUE_EYES: CardId = 89631139; // Normal Monster
pub const DARK_MAGICIAN: CardId = 46986414; // Normal Monster
pub const BLUE_EYES_ULTIMATE: CardId = 23995346; // Fusion Monster
pub const STARDUST_DRAGON: CardId = 44508094; // Synchro Monster
pub const UTOPIA: CardId = 84013237; // XYZ Monster
pub const DECODE_TALKER: CardId = 1861629; // Link Monster
pub const DARK_HOLE: CardId = 53129443; // Spell Card
pub const MIRROR_FORCE: CardId = 44095762; // Trap Card
pub const POT_OF_GREED: CardId = 55144522; // Spell Card

/// Filler main-deck ids start here; none of them resolve in the catalog.
pub const FILLER_BASE: CardId = 1_000_000;

pub fn sample_catalog() -> MemoryCatalog {
    let mut blue_eyes = Card::new(BLUE_EYES, "Blue-Eyes White Dragon", "Normal Monster");
    blue_eyes.attack = Some(3000);
    blue_eyes.defense = Some(2500);
    blue_eyes.level = Some(8);
    blue_eyes.attribute = Some("LIGHT".to_string());
    blue_eyes.race = Some("Dragon".to_string());

    MemoryCatalog::new([
        blue_eyes,
        Card::new(DARK_MAGICIAN, "Dark Magician", "Normal Monster"),
        Card::new(
            BLUE_EYES_ULTIMATE,
            "Blue-Eyes Ultimate Dragon",
            "Fusion Monster",
        ),
        Card::new(STARDUST_DRAGON, "Stardust Dragon", "Synchro Monster"),
        Card::new(UTOPIA, "Number 39: Utopia", "XYZ Monster"),
        Card::new(DECODE_TALKER, "Decode Talker", "Link Monster"),
        Card::new(DARK_HOLE, "Dark Hole", "Spell Card"),
        Card::new(MIRROR_FORCE, "Mirror Force", "Trap Card"),
        Card::new(POT_OF_GREED, "Pot of Greed", "Spell Card"),
    ])
}

/// A deck whose main section holds `n` distinct filler cards, one copy each.
pub fn deck_with_main(n: u32) -> Deck {
    let mut deck = Deck::new("Test Deck");
    for i in 0..n {
        deck.add_card(DeckSection::Main, FILLER_BASE + i, 1);
    }
    deck
}

/// A binder owning exactly what the deck uses, copy for copy.
pub fn binder_covering(deck: &Deck) -> Binder {
    let mut binder = Binder::new("Test Binder");
    for card_id in deck.card_ids() {
        binder.add_entry(BinderEntry::new(card_id, deck.copies_used(card_id)));
    }
    binder
}

pub fn empty_banlist() -> Banlist {
    Banlist::new("Test Banlist", "TCG")
}

/// An SDK over a fresh in-memory store and the sample catalog.
pub fn memory_sdk() -> CollectionSdk {
    CollectionSdk::builder()
        .store(MemoryStore::new())
        .catalog(sample_catalog())
        .build()
        .unwrap()
}
