pub mod formatting;

use serde::{Deserialize, Serialize};

/// One slice of the class-distribution chart: resolved class name and
/// how many filtered characters belong to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSlice {
    pub class_name: String,
    pub count: usize,
}

/// One bar of the realm-population chart. Realm names are the raw strings
/// from the data, not normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealmBar {
    pub realm: String,
    pub count: usize,
}

/// The realm with the highest average character level across the whole roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRealm {
    pub realm: String,
    pub avg_level: f64,
}

impl TopRealm {
    /// True when the scan never advanced past the starting sentinel
    /// (empty roster, or every realm averaging exactly zero).
    pub fn is_unset(&self) -> bool {
        self.realm.is_empty()
    }
}

impl Default for TopRealm {
    fn default() -> Self {
        Self { realm: String::new(), avg_level: 0.0 }
    }
}
