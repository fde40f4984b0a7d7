//! Banlist interchange in the `.lflist.conf` format.
//!
//! A `!<name>` header line, optional `--StartDate` / `--EndDate` metadata,
//! then `#forbidden`, `#limited`, `#semi-limited` and `#whitelist` (or
//! `$whitelist`) sections with body lines of the form
//! `<card id> <limit> --<card name>`. Malformed body lines are skipped with
//! a warning.

use chrono::{DateTime, NaiveDate, Utc};

use crate::catalog::CardCatalog;
use crate::models::banlist::{Banlist, Restriction};
use crate::models::card::CardId;

use super::ImportResult;

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Encode a banlist as `.lflist.conf` text.
///
/// Card names in the trailing `--` comments come from the catalog when one
/// is given, degrading to `Unknown Card <id>` on a miss.
pub fn encode(banlist: &Banlist, catalog: Option<&dyn CardCatalog>) -> String {
    let mut lines = vec![format!("!{}", banlist.name)];

    if let Some(start) = banlist.start_date {
        lines.push(format!("--StartDate {}", start.format("%Y-%m-%d")));
    }
    if let Some(end) = banlist.end_date {
        lines.push(format!("--EndDate {}", end.format("%Y-%m-%d")));
    }

    for (marker, restriction, limit) in [
        ("#forbidden", Restriction::Forbidden, 0u32),
        ("#limited", Restriction::Limited, 1),
        ("#semi-limited", Restriction::SemiLimited, 2),
        ("#whitelist", Restriction::Whitelisted, 3),
    ] {
        let cards: Vec<CardId> = banlist
            .entries
            .iter()
            .filter(|e| e.restriction == restriction)
            .map(|e| e.card_id)
            .collect();
        if cards.is_empty() {
            continue;
        }
        lines.push(marker.to_string());
        for card_id in cards {
            lines.push(format!("{} {} --{}", card_id, limit, card_name(catalog, card_id)));
        }
    }

    lines.join("\n")
}

fn card_name(catalog: Option<&dyn CardCatalog>, card_id: CardId) -> String {
    if let Some(catalog) = catalog {
        if let Ok(Some(card)) = catalog.resolve(card_id) {
            return card.name;
        }
    }
    format!("Unknown Card {}", card_id)
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode `.lflist.conf` text into a banlist.
///
/// `fallback_name` is used when the text carries no `!<name>` header.
/// Fails (success=false) when zero entries were recovered.
pub fn decode(text: &str, fallback_name: &str) -> ImportResult<Banlist> {
    let mut warnings = Vec::new();
    let mut banlist = Banlist::new(fallback_name, "Custom");
    let mut named = false;
    let mut current: Option<Restriction> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('!') {
            if !named {
                banlist.name = name.trim().to_string();
                named = true;
            }
            continue;
        }

        if let Some(date) = line.strip_prefix("--StartDate") {
            banlist.start_date = parse_date(date, lineno, &mut warnings);
            continue;
        }
        if let Some(date) = line.strip_prefix("--EndDate") {
            banlist.end_date = parse_date(date, lineno, &mut warnings);
            continue;
        }

        match line {
            "#forbidden" => {
                current = Some(Restriction::Forbidden);
                continue;
            }
            "#limited" => {
                current = Some(Restriction::Limited);
                continue;
            }
            "#semi-limited" => {
                current = Some(Restriction::SemiLimited);
                continue;
            }
            "#whitelist" | "$whitelist" => {
                current = Some(Restriction::Whitelisted);
                continue;
            }
            _ => {}
        }

        // Remaining comments and metadata are skipped.
        if line.starts_with('#') || line.starts_with("--") || line.starts_with('$') {
            continue;
        }

        let Some(restriction) = current else {
            warnings.push(format!("Line {}: entry before any section", lineno + 1));
            continue;
        };

        // Body format: "<card id> <limit> --<card name>".
        let mut parts = line.splitn(3, ' ');
        let id = parts.next().unwrap_or("").parse::<CardId>();
        let limit = parts.next().map(|p| p.parse::<u32>());
        match (id, limit) {
            (Ok(card_id), Some(Ok(_))) => banlist.set_restriction(card_id, restriction),
            _ => warnings.push(format!("Line {}: malformed entry '{}'", lineno + 1, line)),
        }
    }

    if banlist.entries.is_empty() {
        return ImportResult::failure(vec!["No banlist entries found".to_string()])
            .with_warnings(warnings);
    }

    ImportResult::success(banlist).with_warnings(warnings)
}

fn parse_date(raw: &str, lineno: usize, warnings: &mut Vec<String>) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
        Err(_) => {
            warnings.push(format!("Line {}: unparseable date '{}'", lineno + 1, raw));
            None
        }
    }
}
