//! Realm name normalization and the realm filter.
//!
//! Realm strings come from exports with inconsistent casing and punctuation
//! ("Silvermoon", "silver moon", "Silver-Moon" are all the same realm). The
//! normalized form is the single source of truth for realm equality; raw
//! strings are what the user sees and selects.

/// Normalize a realm name for comparison: lower-case, drop spaces and hyphens.
///
/// Total over all inputs. Two realm strings refer to the same realm iff their
/// normalized forms are equal.
pub fn normalize_realm(realm: &str) -> String {
    realm
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// The active realm selection.
///
/// The selector widget feeds back either the reserved sentinel `"all"` or one
/// of the raw realm strings offered by [`crate::roster::distinct_realms`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RealmFilter {
    #[default]
    All,
    Realm(String),
}

impl RealmFilter {
    /// Reserved selector value meaning "no filter".
    pub const ALL: &'static str = "all";

    /// Parse a selector value. The sentinel is matched literally, before any
    /// normalization, so a realm whose raw name happens to normalize to
    /// `"all"` is still selectable.
    pub fn parse(selection: &str) -> Self {
        if selection == Self::ALL {
            Self::All
        } else {
            Self::Realm(selection.to_string())
        }
    }

    /// Whether a record with the given raw realm passes this filter.
    pub fn matches(&self, realm: &str) -> bool {
        match self {
            Self::All => true,
            Self::Realm(selected) => normalize_realm(realm) == normalize_realm(selected),
        }
    }
}
