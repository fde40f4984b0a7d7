use std::path::PathBuf;

/// Version stamp written to the store under [`KEY_DATA_VERSION`].
///
/// Bumped whenever the stored record layout changes; the SDK compares it
/// against the stored value at build time to decide whether a migration
/// step must run before first use.
pub const DATA_VERSION: &str = "2";

/// The game's universal per-card ownership cap, independent of any banlist.
pub const UNIVERSAL_COPY_CAP: u32 = 3;

/// Main deck size bounds (inclusive).
pub const MAIN_DECK_MIN: u32 = 40;
pub const MAIN_DECK_MAX: u32 = 60;

/// Extra and side deck size caps.
pub const EXTRA_DECK_MAX: u32 = 15;
pub const SIDE_DECK_MAX: u32 = 15;

// -- Logical store keys -----------------------------------------------------

pub const KEY_BINDERS: &str = "binders";
pub const KEY_DECKS: &str = "decks";
pub const KEY_BANLISTS: &str = "banlists";
pub const KEY_CARD_CACHE: &str = "card_cache";
pub const KEY_APP_CONFIG: &str = "app_config";
pub const KEY_SYNC_STATUS: &str = "sync_status";
pub const KEY_LATEST_BACKUP: &str = "latest_backup";
pub const KEY_DATA_VERSION: &str = "dataVersion";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("ygobinder")
    } else {
        PathBuf::from(".ygobinder-data")
    }
}
