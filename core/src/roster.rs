//! Roster ordering, filtering, and realm enumeration.

use hashbrown::HashSet;

use crate::character::CharacterRecord;
use crate::realm::RealmFilter;

/// Sort records ascending by rank.
///
/// The sort is stable: records with equal ranks keep their input order. The
/// input slice is never mutated; a fresh vec is returned.
pub fn sort_by_rank(records: &[CharacterRecord]) -> Vec<CharacterRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.rank);
    sorted
}

/// Sort ascending by rank, then restrict to the selected realm.
///
/// With [`RealmFilter::All`] the full sorted sequence is returned. A filter
/// matching no records yields an empty vec, not an error.
pub fn sort_and_filter(records: &[CharacterRecord], filter: &RealmFilter) -> Vec<CharacterRecord> {
    let sorted = sort_by_rank(records);
    match filter {
        RealmFilter::All => sorted,
        RealmFilter::Realm(_) => sorted
            .into_iter()
            .filter(|r| filter.matches(&r.realm))
            .collect(),
    }
}

/// Every raw realm string appearing in the roster, first-seen order, no
/// duplicates. Raw strings only: these are what the selector offers, and the
/// filter normalizes at comparison time.
pub fn distinct_realms(records: &[CharacterRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut realms = Vec::new();
    for record in records {
        if seen.insert(record.realm.as_str()) {
            realms.push(record.realm.clone());
        }
    }
    realms
}
