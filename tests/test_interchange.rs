//! Interchange facade tests: export/import through the store, merge
//! targets, filename suggestions and bulk backup/restore atomicity.

mod common;

use common::*;
use ygobinder::{
    Banlist, BanlistExportFormat, Binder, BinderEntry, BinderImportFormat, Deck, DeckExportFormat,
    DeckImportFormat, DeckSection, Restriction, YgoBinderError,
};

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn export_deck_as_ydk_suggests_sanitized_filename() {
    let sdk = memory_sdk();
    let mut deck = Deck::new("Blue-Eyes / Dragons!");
    deck.add_card(DeckSection::Main, BLUE_EYES, 3);
    sdk.decks().save(&deck).unwrap();

    let file = sdk
        .interchange()
        .export_deck(&deck.id, DeckExportFormat::Ydk)
        .unwrap();
    assert_eq!(file.filename, "Blue-Eyes_Dragons.ydk");
    assert!(file.contents.contains("#main"));
}

#[test]
fn export_missing_deck_is_not_found() {
    let sdk = memory_sdk();
    let err = sdk
        .interchange()
        .export_deck("nope", DeckExportFormat::Json)
        .unwrap_err();
    assert!(matches!(err, YgoBinderError::NotFound(_)));
}

#[test]
fn export_binder_text_resolves_names_through_catalog() {
    let sdk = memory_sdk();
    let mut binder = Binder::new("Trades");
    binder.add_entry(BinderEntry::new(DARK_MAGICIAN, 2));
    sdk.binders().save(&binder).unwrap();

    let file = sdk
        .interchange()
        .export_binder(&binder.id, ygobinder::BinderExportFormat::Text)
        .unwrap();
    assert!(file.contents.contains("2x Dark Magician"));
}

#[test]
fn export_banlist_as_lflist() {
    let sdk = memory_sdk();
    let mut banlist = Banlist::new("TCG list", "TCG");
    banlist.set_restriction(POT_OF_GREED, Restriction::Forbidden);
    sdk.banlists().save(&banlist).unwrap();

    let file = sdk
        .interchange()
        .export_banlist(&banlist.id, BanlistExportFormat::Lflist)
        .unwrap();
    assert!(file.filename.ends_with(".lflist.conf"));
    assert!(file.contents.contains("#forbidden"));
}

#[test]
fn filename_cap_counts_characters_not_bytes() {
    use ygobinder::interchange::sanitize_filename;

    // Two bytes per character; a byte-based cap would cut this at 25.
    let name: String = std::iter::repeat('é').take(60).collect();
    let stem = sanitize_filename(&name);
    assert_eq!(stem.chars().count(), 50);
}

#[test]
fn export_formats_parse_from_names() {
    assert_eq!("YDK".parse::<DeckExportFormat>().unwrap(), DeckExportFormat::Ydk);
    assert_eq!(
        "text".parse::<DeckExportFormat>().unwrap(),
        DeckExportFormat::Text
    );
    assert_eq!(
        "lflist".parse::<BanlistExportFormat>().unwrap(),
        BanlistExportFormat::Lflist
    );
    assert_eq!(
        "csv".parse::<BinderImportFormat>().unwrap(),
        BinderImportFormat::Csv
    );

    let err = "docx".parse::<DeckExportFormat>().unwrap_err();
    assert!(matches!(err, YgoBinderError::InvalidArgument(_)));
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[test]
fn import_ydk_persists_a_new_deck() {
    let sdk = memory_sdk();
    let result = sdk
        .interchange()
        .import_deck("#main\n111\n111\n#extra\n222\n", DeckImportFormat::Ydk, None)
        .unwrap();
    assert!(result.success);

    let imported = result.entity.unwrap();
    let stored = sdk.decks().get(&imported.id).unwrap().unwrap();
    assert_eq!(stored.copies_used(111), 2);
    assert_eq!(stored.copies_used(222), 1);
}

#[test]
fn import_failure_writes_nothing() {
    let sdk = memory_sdk();
    let result = sdk
        .interchange()
        .import_deck("no markers here\n", DeckImportFormat::Ydk, None)
        .unwrap();
    assert!(!result.success);
    assert!(sdk.decks().list().unwrap().is_empty());
}

#[test]
fn import_deck_into_merge_target_sums_quantities() {
    let sdk = memory_sdk();
    let mut deck = Deck::new("Target");
    deck.add_card(DeckSection::Main, 111, 1);
    sdk.decks().save(&deck).unwrap();

    let result = sdk
        .interchange()
        .import_deck("#main\n111\n333\n", DeckImportFormat::Ydk, Some(&deck.id))
        .unwrap();
    assert!(result.success);

    let merged = sdk.decks().get(&deck.id).unwrap().unwrap();
    assert_eq!(merged.copies_used(111), 2);
    assert_eq!(merged.copies_used(333), 1);
}

#[test]
fn import_with_missing_merge_target_is_not_found() {
    let sdk = memory_sdk();
    let err = sdk
        .interchange()
        .import_deck("#main\n111\n", DeckImportFormat::Ydk, Some("ghost"))
        .unwrap_err();
    assert!(matches!(err, YgoBinderError::NotFound(_)));
}

#[test]
fn import_binder_csv_merges_into_existing_binder() {
    let sdk = memory_sdk();
    let mut binder = Binder::new("Owned");
    binder.add_entry(BinderEntry::new(1, 1));
    sdk.binders().save(&binder).unwrap();

    let result = sdk
        .interchange()
        .import_binder(
            "Card ID,Quantity\n1,2\n7,1\n",
            BinderImportFormat::Csv,
            Some(&binder.id),
        )
        .unwrap();
    assert!(result.success);

    let merged = sdk.binders().get(&binder.id).unwrap().unwrap();
    assert_eq!(merged.quantity_of(1), 3);
    assert_eq!(merged.quantity_of(7), 1);
}

// ---------------------------------------------------------------------------
// Bulk backup / restore
// ---------------------------------------------------------------------------

#[test]
fn export_all_then_import_all_restores_collections() {
    let sdk = memory_sdk();
    let binder = Binder::new("b");
    let deck = Deck::new("d");
    sdk.binders().save(&binder).unwrap();
    sdk.decks().save(&deck).unwrap();
    sdk.set_app_config(&serde_json::json!({"theme": "dark"}))
        .unwrap();

    let backup = sdk.interchange().export_all().unwrap();
    assert_eq!(sdk.latest_backup().unwrap().unwrap(), backup);

    // Restore into a fresh SDK.
    let other = memory_sdk();
    let result = other.interchange().import_all(&backup).unwrap();
    assert!(result.success);
    let summary = result.entity.unwrap();
    assert_eq!(summary.binders, 1);
    assert_eq!(summary.decks, 1);

    assert_eq!(other.binders().get(&binder.id).unwrap().unwrap(), binder);
    assert_eq!(other.decks().get(&deck.id).unwrap().unwrap(), deck);
    assert_eq!(other.app_config().unwrap()["theme"], "dark");
}

#[test]
fn import_all_of_malformed_document_touches_nothing() {
    let sdk = memory_sdk();
    let binder = Binder::new("keep me");
    sdk.binders().save(&binder).unwrap();

    let result = sdk.interchange().import_all("{broken").unwrap();
    assert!(!result.success);

    // Existing state survives untouched.
    let binders = sdk.binders().list().unwrap();
    assert_eq!(binders.len(), 1);
    assert_eq!(binders[0], binder);
}

#[test]
fn import_all_warns_on_unknown_backup_version() {
    let sdk = memory_sdk();
    let text = r#"{"version":"9.9.9","timestamp":"2026-01-01T00:00:00Z","data":{"binders":[],"decks":[],"config":null}}"#;
    let result = sdk.interchange().import_all(text).unwrap();
    assert!(result.success);
    assert!(result.warnings.iter().any(|w| w.contains("9.9.9")));
}
