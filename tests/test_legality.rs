//! Legality engine tests: size bounds, ownership, the universal copy cap,
//! banlist tiers and section placement.

mod common;

use common::*;
use ygobinder::{
    can_place, validate, Banlist, BinderEntry, CardCount, CardType, DeckSection, MemoryCatalog,
    Restriction,
};

fn has_error_containing(errors: &[String], needle: &str) -> bool {
    errors.iter().any(|e| e.contains(needle))
}

// ---------------------------------------------------------------------------
// Size boundaries
// ---------------------------------------------------------------------------

#[test]
fn main_deck_of_39_is_too_small() {
    let deck = deck_with_main(39);
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "at least 40"));
}

#[test]
fn main_deck_of_40_passes_size_check() {
    let deck = deck_with_main(40);
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn main_deck_of_60_passes_size_check() {
    let deck = deck_with_main(60);
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn main_deck_of_61_is_too_large() {
    let deck = deck_with_main(61);
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "at most 60"));
}

#[test]
fn extra_deck_of_16_is_too_large() {
    let mut deck = deck_with_main(40);
    for i in 0..16 {
        deck.add_card(DeckSection::Extra, FILLER_BASE + 10_000 + i, 1);
    }
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(has_error_containing(&report.errors, "Extra deck"));
}

#[test]
fn side_deck_of_16_is_too_large() {
    let mut deck = deck_with_main(40);
    for i in 0..16 {
        deck.add_card(DeckSection::Side, FILLER_BASE + 20_000 + i, 1);
    }
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(has_error_containing(&report.errors, "Side deck"));
}

// ---------------------------------------------------------------------------
// Ownership and the universal copy cap
// ---------------------------------------------------------------------------

#[test]
fn deck_using_more_copies_than_owned_is_invalid() {
    // Scenario A: main = 42 cards with 12345 x3, binder owns 12345 x2.
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, 12345, 3);

    let mut binder = binder_covering(&deck);
    let mut entry = BinderEntry::new(12345, 2);
    entry.set_code = Some("LOB-001".to_string());
    assert!(binder.update_entry(entry));

    let report = validate(
        &deck,
        &binder,
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "12345"));
    assert!(has_error_containing(&report.errors, "owns 2"));
}

#[test]
fn copies_summed_across_sections_for_ownership() {
    let mut deck = deck_with_main(40);
    deck.add_card(DeckSection::Side, FILLER_BASE, 1); // also 1 copy in main

    let mut binder = binder_covering(&deck);
    assert!(binder.update_entry(BinderEntry::new(FILLER_BASE, 1)));

    let report = validate(
        &deck,
        &binder,
        &empty_banlist(),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(has_error_containing(&report.errors, "owns 1"));
}

#[test]
fn fourth_copy_never_validates() {
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, DARK_HOLE, 3);
    deck.add_card(DeckSection::Side, DARK_HOLE, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &sample_catalog(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "exceeds the limit of 3"));
    assert!(has_error_containing(&report.errors, "1 over"));
}

// ---------------------------------------------------------------------------
// Banlist tiers
// ---------------------------------------------------------------------------

fn banlist_with(card_id: u32, restriction: Restriction) -> Banlist {
    let mut banlist = empty_banlist();
    banlist.set_restriction(card_id, restriction);
    banlist
}

#[test]
fn forbidden_card_reported() {
    // Scenario B: 99999 forbidden, one copy anywhere.
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Side, 99999, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(99999, Restriction::Forbidden),
        "TCG",
        &MemoryCatalog::default(),
    );
    assert!(!report.is_valid);
    assert_eq!(
        report.forbidden_cards,
        vec![CardCount {
            card_id: 99999,
            quantity: 1
        }]
    );
}

#[test]
fn limited_card_allows_one_copy() {
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, POT_OF_GREED, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(POT_OF_GREED, Restriction::Limited),
        "TCG",
        &sample_catalog(),
    );
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
    assert!(report.limit_violations.is_empty());
}

#[test]
fn limited_card_with_two_copies_violates() {
    let mut deck = deck_with_main(38);
    deck.add_card(DeckSection::Main, POT_OF_GREED, 2);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(POT_OF_GREED, Restriction::Limited),
        "TCG",
        &sample_catalog(),
    );
    assert!(!report.is_valid);
    assert_eq!(
        report.limit_violations,
        vec![CardCount {
            card_id: POT_OF_GREED,
            quantity: 2
        }]
    );
}

#[test]
fn semi_limited_card_with_three_copies_violates() {
    let mut deck = deck_with_main(37);
    deck.add_card(DeckSection::Main, MIRROR_FORCE, 3);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(MIRROR_FORCE, Restriction::SemiLimited),
        "TCG",
        &sample_catalog(),
    );
    assert!(!report.is_valid);
    assert_eq!(
        report.semi_limit_violations,
        vec![CardCount {
            card_id: MIRROR_FORCE,
            quantity: 3
        }]
    );
}

#[test]
fn whitelisted_card_at_three_copies_is_fine() {
    let mut deck = deck_with_main(37);
    deck.add_card(DeckSection::Main, DARK_HOLE, 3);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(DARK_HOLE, Restriction::Whitelisted),
        "TCG",
        &sample_catalog(),
    );
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn banlist_format_mismatch_warns_but_still_applies() {
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, 99999, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &banlist_with(99999, Restriction::Forbidden),
        "OCG",
        &MemoryCatalog::default(),
    );
    assert!(report.warnings.iter().any(|w| w.contains("OCG")));
    assert!(!report.forbidden_cards.is_empty());
}

// ---------------------------------------------------------------------------
// Section placement
// ---------------------------------------------------------------------------

#[test]
fn can_place_extra_deck_types() {
    for t in [
        CardType::FusionMonster,
        CardType::SynchroMonster,
        CardType::XyzMonster,
        CardType::LinkMonster,
    ] {
        assert!(can_place(t, DeckSection::Extra));
        assert!(!can_place(t, DeckSection::Main));
        assert!(!can_place(t, DeckSection::Side));
    }
}

#[test]
fn can_place_main_deck_types() {
    for t in [
        CardType::NormalMonster,
        CardType::EffectMonster,
        CardType::RitualMonster,
        CardType::PendulumMonster,
        CardType::Spell,
        CardType::Trap,
        CardType::Unknown,
    ] {
        assert!(can_place(t, DeckSection::Main));
        assert!(can_place(t, DeckSection::Side));
        assert!(!can_place(t, DeckSection::Extra));
    }
}

#[test]
fn fusion_monster_in_main_deck_is_an_error() {
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, BLUE_EYES_ULTIMATE, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &sample_catalog(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "Blue-Eyes Ultimate Dragon"));
}

#[test]
fn fusion_monster_in_extra_deck_is_legal() {
    let mut deck = deck_with_main(40);
    deck.add_card(DeckSection::Extra, BLUE_EYES_ULTIMATE, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &sample_catalog(),
    );
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn normal_monster_in_extra_deck_is_an_error() {
    let mut deck = deck_with_main(40);
    deck.add_card(DeckSection::Extra, BLUE_EYES, 1);

    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &sample_catalog(),
    );
    assert!(!report.is_valid);
    assert!(has_error_containing(&report.errors, "extra"));
}

// ---------------------------------------------------------------------------
// Degradation and idempotence
// ---------------------------------------------------------------------------

#[test]
fn catalog_miss_warns_and_skips_placement_only() {
    // Filler ids never resolve; structural rules must still run.
    let deck = deck_with_main(40);
    let report = validate(
        &deck,
        &binder_covering(&deck),
        &empty_banlist(),
        "TCG",
        &sample_catalog(),
    );
    assert!(report.is_valid);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("not found in catalog")));
}

#[test]
fn validation_is_idempotent() {
    let mut deck = deck_with_main(39);
    deck.add_card(DeckSection::Main, 12345, 3);
    let binder = binder_covering(&deck);
    let banlist = banlist_with(12345, Restriction::Limited);
    let catalog = sample_catalog();

    let first = validate(&deck, &binder, &banlist, "TCG", &catalog);
    let second = validate(&deck, &binder, &banlist, "TCG", &catalog);
    assert_eq!(first, second);
}
