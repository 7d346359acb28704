//! Input ad records

use serde::{Deserialize, Serialize};

/// One aircraft-sale advertisement: an opaque identifier plus its text body.
///
/// The identifier comes from the external loader (a spreadsheet row id,
/// typically) and is carried through to every output record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    /// Opaque ad identifier from the source table
    pub id: String,

    /// Raw advertisement text
    pub description: String,
}

impl Ad {
    /// Create a new ad record
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}
