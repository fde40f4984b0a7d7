//! The deck-list line format (`.ydk`).
//!
//! Three delimited sections: `#main`, `#extra` and `!side`. Body lines are
//! decimal card ids, one line per copy. Leading `#`-prefixed lines that are
//! not section markers are comments. Decoding tallies ids globally per
//! section rather than by run length, so non-contiguous repeats of the same
//! id still merge into a single entry.

use std::collections::BTreeMap;

use crate::models::card::CardId;
use crate::models::deck::{Deck, DeckSection};

use super::ImportResult;

const SIGNATURE: &str = "#created by ygobinder";

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode a deck as deck-list text.
///
/// Emits a signature comment plus name/description/format comment lines,
/// then the three sections with each id repeated once per copy.
pub fn encode(deck: &Deck) -> String {
    let mut out = String::new();
    out.push_str(SIGNATURE);
    out.push('\n');
    out.push_str(&format!("# Deck: {}\n", deck.name));
    if let Some(desc) = &deck.description {
        out.push_str(&format!("# Description: {}\n", desc));
    }
    if let Some(format) = &deck.format {
        out.push_str(&format!("# Format: {}\n", format));
    }

    out.push_str("#main\n");
    write_section(&mut out, deck, DeckSection::Main);
    out.push_str("#extra\n");
    write_section(&mut out, deck, DeckSection::Extra);
    out.push_str("!side\n");
    write_section(&mut out, deck, DeckSection::Side);
    out
}

fn write_section(out: &mut String, deck: &Deck, section: DeckSection) {
    for entry in deck.section(section) {
        for _ in 0..entry.quantity {
            out.push_str(&entry.card_id.to_string());
            out.push('\n');
        }
    }
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode deck-list text into a deck named `name`.
///
/// Fails (success=false) when the text contains no section marker at all or
/// yields zero usable entries; stray non-numeric lines and unknown markers
/// are skipped with a warning.
pub fn decode(text: &str, name: &str) -> ImportResult<Deck> {
    let mut warnings = Vec::new();
    let mut current: Option<DeckSection> = None;
    let mut seen_marker = false;
    // BTreeMap keeps decoded entries in a stable id order.
    let mut tallies: [BTreeMap<CardId, u32>; 3] =
        [BTreeMap::new(), BTreeMap::new(), BTreeMap::new()];

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "#main" => {
                current = Some(DeckSection::Main);
                seen_marker = true;
                continue;
            }
            "#extra" => {
                current = Some(DeckSection::Extra);
                seen_marker = true;
                continue;
            }
            "!side" => {
                current = Some(DeckSection::Side);
                seen_marker = true;
                continue;
            }
            _ => {}
        }

        if line.starts_with('#') {
            // Comment (header signature, deck name, ...) — ignored.
            continue;
        }
        if line.starts_with('!') {
            warnings.push(format!("Line {}: unknown marker '{}'", lineno + 1, line));
            continue;
        }

        match line.parse::<CardId>() {
            Ok(card_id) => match current {
                Some(section) => {
                    *tallies[section_index(section)].entry(card_id).or_insert(0) += 1;
                }
                None => {
                    warnings.push(format!(
                        "Line {}: card id {} before any section marker",
                        lineno + 1,
                        card_id
                    ));
                }
            },
            Err(_) => {
                warnings.push(format!("Line {}: not a card id: '{}'", lineno + 1, line));
            }
        }
    }

    if !seen_marker {
        return ImportResult::failure(vec![
            "No section marker (#main, #extra or !side) found".to_string(),
        ])
        .with_warnings(warnings);
    }
    if tallies.iter().all(|t| t.is_empty()) {
        return ImportResult::failure(vec!["No card ids found in any section".to_string()])
            .with_warnings(warnings);
    }

    let mut deck = Deck::new(name);
    for (section, tally) in [DeckSection::Main, DeckSection::Extra, DeckSection::Side]
        .into_iter()
        .zip(tallies.into_iter())
    {
        for (card_id, quantity) in tally {
            deck.add_card(section, card_id, quantity);
        }
    }

    ImportResult::success(deck).with_warnings(warnings)
}

fn section_index(section: DeckSection) -> usize {
    match section {
        DeckSection::Main => 0,
        DeckSection::Extra => 1,
        DeckSection::Side => 2,
    }
}
