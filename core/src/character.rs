use serde::{Deserialize, Serialize};

use crate::game_data::display_class_name;

/// One character as it appears in the bundled roster file.
///
/// Field names in the JSON use the export's title-cased headers, hence the
/// serde renames. Records are immutable once loaded; every derived view is
/// recomputed from them rather than updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "Character")]
    pub name: String,
    #[serde(rename = "Level")]
    pub level: u32,
    #[serde(rename = "Class ID")]
    pub class_id: i64,
    /// Sort key only. Not required to be unique.
    #[serde(rename = "Rank")]
    pub rank: i64,
    /// Raw realm string as exported. Casing and punctuation vary between
    /// exports, so comparisons go through [`crate::realm::normalize_realm`].
    #[serde(rename = "Realm")]
    pub realm: String,
}

/// A roster table row with the class id resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRow {
    pub rank: i64,
    pub name: String,
    pub level: u32,
    pub class_name: String,
    pub realm: String,
}

impl CharacterRow {
    pub fn from_record(record: &CharacterRecord) -> Self {
        Self {
            rank: record.rank,
            name: record.name.clone(),
            level: record.level,
            class_name: display_class_name(record.class_id),
            realm: record.realm.clone(),
        }
    }
}
