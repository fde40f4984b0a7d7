//! Deck legality engine.
//!
//! `validate` is a pure function of the deck, the binder (ownership bound),
//! the banlist (restriction bound) and the rule format: it mutates nothing
//! and is idempotent. Structural and quantity rules are id-keyed and always
//! run; type-dependent rules (section placement) degrade to warnings when
//! the catalog cannot resolve a card.

use serde::{Deserialize, Serialize};

use crate::catalog::CardCatalog;
use crate::config::{
    EXTRA_DECK_MAX, MAIN_DECK_MAX, MAIN_DECK_MIN, SIDE_DECK_MAX, UNIVERSAL_COPY_CAP,
};
use crate::models::banlist::{Banlist, Restriction};
use crate::models::binder::Binder;
use crate::models::card::{CardId, CardType};
use crate::models::deck::{Deck, DeckSection};

// ---------------------------------------------------------------------------
// ValidationReport
// ---------------------------------------------------------------------------

/// A card id together with the quantity that triggered a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCount {
    pub card_id: CardId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub forbidden_cards: Vec<CardCount>,
    pub limit_violations: Vec<CardCount>,
    pub semi_limit_violations: Vec<CardCount>,
}

impl ValidationReport {
    fn new() -> Self {
        ValidationReport {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            forbidden_cards: Vec::new(),
            limit_violations: Vec::new(),
            semi_limit_violations: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Section placement
// ---------------------------------------------------------------------------

/// Whether a card of the given type may occupy the given deck section.
///
/// Independent of quantities, so a UI can gray out invalid drop targets
/// before attempting a mutation. Extra takes exactly the extra-deck monster
/// types; Main and Side take everything else. `Unknown` is treated as a
/// main-deck type.
pub fn can_place(card_type: CardType, section: DeckSection) -> bool {
    match section {
        DeckSection::Extra => card_type.is_extra_deck(),
        DeckSection::Main | DeckSection::Side => !card_type.is_extra_deck(),
    }
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// Validate a deck against a binder, a banlist and a rule format.
///
/// Validation failures never block saving a deck; the report is advisory
/// for "tournament-legal" status. Warnings never flip `is_valid`.
pub fn validate(
    deck: &Deck,
    binder: &Binder,
    banlist: &Banlist,
    rule_format: &str,
    catalog: &dyn CardCatalog,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !banlist.format_type.eq_ignore_ascii_case(rule_format) {
        report.warnings.push(format!(
            "Banlist '{}' targets format {}, not {}",
            banlist.name, banlist.format_type, rule_format
        ));
    }

    check_sizes(deck, &mut report);

    let ids = deck.card_ids();
    let resolved = match catalog.resolve_many(&ids) {
        Ok(map) => Some(map),
        Err(e) => {
            report.warnings.push(format!(
                "Card catalog unavailable ({}); type-dependent checks skipped",
                e
            ));
            None
        }
    };

    for &card_id in &ids {
        let used = deck.copies_used(card_id);

        // Ownership bound from the binder.
        let owned = binder.quantity_of(card_id);
        if used > owned {
            report.errors.push(format!(
                "Card {}: deck uses {} copies but binder owns {}",
                card_id, used, owned
            ));
        }

        // Universal copy cap, independent of any banlist.
        if used > UNIVERSAL_COPY_CAP {
            report.errors.push(format!(
                "Card {}: {} copies exceeds the limit of {} ({} over)",
                card_id,
                used,
                UNIVERSAL_COPY_CAP,
                used - UNIVERSAL_COPY_CAP
            ));
        }

        check_restriction(card_id, used, banlist, &mut report);

        // Section placement needs the card's type.
        match resolved.as_ref().map(|m| m.get(&card_id)) {
            Some(Some(Some(card))) => {
                check_placement(deck, card_id, card.card_type, &card.name, &mut report);
            }
            Some(_) => {
                report.warnings.push(format!(
                    "Card {} not found in catalog; placement check skipped",
                    card_id
                ));
            }
            None => {} // catalog unavailable, already warned once
        }
    }

    report.is_valid = report.errors.is_empty();
    report
}

fn check_sizes(deck: &Deck, report: &mut ValidationReport) {
    let main = deck.section_total(DeckSection::Main);
    let extra = deck.section_total(DeckSection::Extra);
    let side = deck.section_total(DeckSection::Side);

    if main < MAIN_DECK_MIN {
        report.errors.push(format!(
            "Main deck must contain at least {} cards (has {})",
            MAIN_DECK_MIN, main
        ));
    }
    if main > MAIN_DECK_MAX {
        report.errors.push(format!(
            "Main deck must contain at most {} cards (has {})",
            MAIN_DECK_MAX, main
        ));
    }
    if extra > EXTRA_DECK_MAX {
        report.errors.push(format!(
            "Extra deck must contain at most {} cards (has {})",
            EXTRA_DECK_MAX, extra
        ));
    }
    if side > SIDE_DECK_MAX {
        report.errors.push(format!(
            "Side deck must contain at most {} cards (has {})",
            SIDE_DECK_MAX, side
        ));
    }
}

fn check_restriction(
    card_id: CardId,
    used: u32,
    banlist: &Banlist,
    report: &mut ValidationReport,
) {
    let count = CardCount { card_id, quantity: used };
    match banlist.restriction_of(card_id) {
        Some(Restriction::Forbidden) if used > 0 => {
            report.forbidden_cards.push(count);
            report
                .errors
                .push(format!("Card {} is Forbidden ({} copies in deck)", card_id, used));
        }
        Some(Restriction::Limited) if used > 1 => {
            report.limit_violations.push(count);
            report.errors.push(format!(
                "Card {} is Limited to 1 copy ({} in deck)",
                card_id, used
            ));
        }
        Some(Restriction::SemiLimited) if used > 2 => {
            report.semi_limit_violations.push(count);
            report.errors.push(format!(
                "Card {} is Semi-Limited to 2 copies ({} in deck)",
                card_id, used
            ));
        }
        // Whitelisted is informational; the universal cap already applies.
        _ => {}
    }
}

fn check_placement(
    deck: &Deck,
    card_id: CardId,
    card_type: CardType,
    name: &str,
    report: &mut ValidationReport,
) {
    for section in [DeckSection::Main, DeckSection::Extra, DeckSection::Side] {
        let present = deck
            .section(section)
            .iter()
            .any(|e| e.card_id == card_id && e.quantity > 0);
        if present && !can_place(card_type, section) {
            report.errors.push(format!(
                "{} (card {}) cannot be placed in the {} deck",
                name,
                card_id,
                match section {
                    DeckSection::Main => "main",
                    DeckSection::Extra => "extra",
                    DeckSection::Side => "side",
                }
            ));
        }
    }
}
