//! Human-readable plain-text export. One-way: there is no decoder.
//!
//! Output is deterministic for a fixed export timestamp, which callers pass
//! through [`TextExportOptions`] (defaulting to now).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::catalog::CardCatalog;
use crate::models::binder::Binder;
use crate::models::deck::{Deck, DeckSection};

// ---------------------------------------------------------------------------
// TextExportOptions
// ---------------------------------------------------------------------------

pub struct TextExportOptions<'a> {
    /// Timestamp stamped into the export header.
    pub exported_at: DateTime<Utc>,
    /// Catalog for annotating lines with card names; lookups that miss
    /// degrade to the bare card id.
    pub catalog: Option<&'a dyn CardCatalog>,
}

impl Default for TextExportOptions<'_> {
    fn default() -> Self {
        TextExportOptions {
            exported_at: Utc::now(),
            catalog: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

/// Render a binder as human-readable text.
pub fn encode_binder(binder: &Binder, options: &TextExportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Binder: {} ===\n", binder.name));
    if let Some(desc) = &binder.description {
        out.push_str(&format!("Description: {}\n", desc));
    }
    out.push_str(&format!(
        "Exported: {}\n",
        options
            .exported_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!("Total cards: {}\n\n", binder.total_cards()));

    for entry in &binder.entries {
        let set = entry
            .set_code
            .as_deref()
            .map(|s| format!(" ({})", s))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}x {}{}\n",
            entry.quantity,
            card_label(options, entry.card_id),
            set
        ));
    }
    out
}

/// Render a deck as human-readable text, section by section.
pub fn encode_deck(deck: &Deck, options: &TextExportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== Deck: {} ===\n", deck.name));
    if let Some(desc) = &deck.description {
        out.push_str(&format!("Description: {}\n", desc));
    }
    if let Some(format) = &deck.format {
        out.push_str(&format!("Format: {}\n", format));
    }
    out.push_str(&format!(
        "Exported: {}\n",
        options
            .exported_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    for (title, section) in [
        ("Main Deck", DeckSection::Main),
        ("Extra Deck", DeckSection::Extra),
        ("Side Deck", DeckSection::Side),
    ] {
        out.push_str(&format!(
            "\n{} ({} cards):\n",
            title,
            deck.section_total(section)
        ));
        for entry in deck.section(section) {
            out.push_str(&format!(
                "{}x {}\n",
                entry.quantity,
                card_label(options, entry.card_id)
            ));
        }
    }
    out
}

/// Card name from the catalog when resolvable, `Card ID <id>` otherwise.
fn card_label(options: &TextExportOptions, card_id: u32) -> String {
    if let Some(catalog) = options.catalog {
        if let Ok(Some(card)) = catalog.resolve(card_id) {
            return card.name;
        }
    }
    format!("Card ID {}", card_id)
}
