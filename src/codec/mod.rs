//! Bidirectional converters between in-memory entities and textual formats.
//!
//! Every codec is a pair of pure functions: `encode` produces text, `decode`
//! returns an [`ImportResult`]. No codec panics or returns `Err` for a
//! malformed input document — all failure is collected into `errors`, and
//! decoding continues past bad records wherever possible.

pub mod csv;
pub mod json;
pub mod lflist;
pub mod text;
pub mod ydk;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ImportResult
// ---------------------------------------------------------------------------

/// Outcome of decoding a document.
///
/// `success` is false whenever zero usable entries were recovered or a
/// mandatory structural element (section marker, required CSV header) is
/// missing; in that case `entity` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult<T> {
    pub success: bool,
    pub entity: Option<T>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl<T> ImportResult<T> {
    pub fn success(entity: T) -> Self {
        ImportResult {
            success: true,
            entity: Some(entity),
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        ImportResult {
            success: false,
            entity: None,
            errors,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}
