//! Aggregate statistics over the roster.
//!
//! Two distinct scopes, kept deliberately separate:
//! - the class distribution runs over the *filtered* set and changes with the
//!   realm selector,
//! - the realm statistics run over the *full* roster so the user can compare
//!   realms regardless of the current selection.

use hashbrown::HashMap;

use armory_types::{ClassSlice, RealmBar, TopRealm};

use crate::character::CharacterRecord;
use crate::game_data::display_class_name;

/// Count characters per class id over an already-filtered roster.
///
/// Entries are in first-appearance order so downstream chart output is
/// deterministic. The counts sum to the length of the input.
pub fn class_distribution(filtered: &[CharacterRecord]) -> Vec<(i64, usize)> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for record in filtered {
        match index.get(&record.class_id) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.class_id, counts.len());
                counts.push((record.class_id, 1));
            }
        }
    }
    counts
}

/// Class distribution with ids resolved to display names, ready for the
/// distribution chart. Unknown ids resolve to `Unknown (<id>)`.
pub fn class_distribution_slices(filtered: &[CharacterRecord]) -> Vec<ClassSlice> {
    class_distribution(filtered)
        .into_iter()
        .map(|(class_id, count)| ClassSlice {
            class_name: display_class_name(class_id),
            count,
        })
        .collect()
}

/// Per-realm statistics over the full, unfiltered roster.
#[derive(Debug, Clone, Default)]
pub struct RealmStats {
    /// Character count per raw realm string (exact grouping, no
    /// normalization).
    pub population: HashMap<String, usize>,
    /// Arithmetic mean level per raw realm string. A realm appears here only
    /// if it has at least one record, so the denominator is always >= 1.
    pub average_level: HashMap<String, f64>,
    /// Population chart rows, sorted descending by count. Ties keep
    /// first-appearance order.
    pub population_chart: Vec<RealmBar>,
    /// The realm with the strictly highest average level. Scan starts from an
    /// empty-name / 0.0 sentinel and only a strictly greater average replaces
    /// the incumbent, so the first realm encountered wins ties.
    pub top_realm: TopRealm,
}

/// Compute [`RealmStats`] in a single pass over the roster.
pub fn realm_stats(records: &[CharacterRecord]) -> RealmStats {
    // Accumulate in first-appearance order; iteration order of the result
    // maps must not influence the tie-breaks below.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut accum: Vec<(String, u64, usize)> = Vec::new();
    for record in records {
        match index.get(record.realm.as_str()) {
            Some(&i) => {
                accum[i].1 += u64::from(record.level);
                accum[i].2 += 1;
            }
            None => {
                index.insert(record.realm.as_str(), accum.len());
                accum.push((record.realm.clone(), u64::from(record.level), 1));
            }
        }
    }

    let mut population = HashMap::new();
    let mut average_level = HashMap::new();
    let mut top_realm = TopRealm::default();
    let mut chart: Vec<RealmBar> = Vec::with_capacity(accum.len());

    for (realm, level_sum, count) in accum {
        let avg = level_sum as f64 / count as f64;
        if avg > top_realm.avg_level {
            top_realm = TopRealm { realm: realm.clone(), avg_level: avg };
        }
        population.insert(realm.clone(), count);
        average_level.insert(realm.clone(), avg);
        chart.push(RealmBar { realm, count });
    }

    // Stable sort keeps first-appearance order for equal counts.
    chart.sort_by(|a, b| b.count.cmp(&a.count));

    RealmStats {
        population,
        average_level,
        population_chart: chart,
        top_realm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, level: u32, class_id: i64, rank: i64, realm: &str) -> CharacterRecord {
        CharacterRecord {
            name: name.to_string(),
            level,
            class_id,
            rank,
            realm: realm.to_string(),
        }
    }

    #[test]
    fn test_distribution_counts_sum_to_input_len() {
        let records = vec![
            record("A", 60, 1, 1, "Silvermoon"),
            record("B", 60, 8, 2, "Silvermoon"),
            record("C", 60, 1, 3, "Silvermoon"),
            record("D", 60, 11, 4, "Silvermoon"),
        ];
        let counts = class_distribution(&records);
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_distribution_first_seen_order() {
        let records = vec![
            record("A", 60, 8, 1, "Silvermoon"),
            record("B", 60, 1, 2, "Silvermoon"),
            record("C", 60, 8, 3, "Silvermoon"),
        ];
        assert_eq!(class_distribution(&records), [(8, 2), (1, 1)]);
    }

    #[test]
    fn test_distribution_empty_input() {
        assert!(class_distribution(&[]).is_empty());
        assert!(class_distribution_slices(&[]).is_empty());
    }

    #[test]
    fn test_distribution_slices_resolve_names() {
        let records = vec![
            record("A", 60, 1, 1, "Silvermoon"),
            record("B", 60, 999, 2, "Silvermoon"),
        ];
        let slices = class_distribution_slices(&records);
        assert_eq!(slices[0].class_name, "Warrior");
        assert_eq!(slices[0].count, 1);
        assert_eq!(slices[1].class_name, "Unknown (999)");
    }

    #[test]
    fn test_population_groups_raw_strings_exactly() {
        // Population grouping is on the raw string, normalization is only for
        // the filter.
        let records = vec![
            record("A", 10, 1, 1, "Silvermoon"),
            record("B", 20, 1, 2, "silver moon"),
            record("C", 30, 1, 3, "Silvermoon"),
        ];
        let stats = realm_stats(&records);
        assert_eq!(stats.population["Silvermoon"], 2);
        assert_eq!(stats.population["silver moon"], 1);
    }

    #[test]
    fn test_average_level_per_realm() {
        let records = vec![
            record("A", 10, 1, 1, "Silvermoon"),
            record("B", 20, 1, 2, "Silvermoon"),
            record("C", 60, 1, 3, "Stormrage"),
        ];
        let stats = realm_stats(&records);
        assert_eq!(stats.average_level["Silvermoon"], 15.0);
        assert_eq!(stats.average_level["Stormrage"], 60.0);
    }

    #[test]
    fn test_top_realm_strict_greater_tie_break() {
        // X and Y both average 10.0; X is encountered first and strict `>`
        // means Y never replaces it.
        let records = vec![
            record("A", 10, 1, 1, "X"),
            record("B", 10, 1, 2, "Y"),
        ];
        let stats = realm_stats(&records);
        assert_eq!(stats.top_realm.realm, "X");
        assert_eq!(stats.top_realm.avg_level, 10.0);
    }

    #[test]
    fn test_top_realm_sentinel_on_empty_roster() {
        let stats = realm_stats(&[]);
        assert!(stats.top_realm.is_unset());
        assert_eq!(stats.top_realm.avg_level, 0.0);
    }

    #[test]
    fn test_population_chart_sorted_descending() {
        let records = vec![
            record("A", 10, 1, 1, "Quiet"),
            record("B", 10, 1, 2, "Busy"),
            record("C", 10, 1, 3, "Busy"),
            record("D", 10, 1, 4, "Busy"),
            record("E", 10, 1, 5, "Middling"),
            record("F", 10, 1, 6, "Middling"),
        ];
        let stats = realm_stats(&records);
        let order: Vec<&str> = stats
            .population_chart
            .iter()
            .map(|b| b.realm.as_str())
            .collect();
        assert_eq!(order, ["Busy", "Middling", "Quiet"]);
    }

    #[test]
    fn test_population_chart_ties_keep_first_seen_order() {
        let records = vec![
            record("A", 10, 1, 1, "Second"),
            record("B", 10, 1, 2, "First"),
        ];
        // Both count 1; "Second" appeared first in the roster.
        let stats = realm_stats(&records);
        let order: Vec<&str> = stats
            .population_chart
            .iter()
            .map(|b| b.realm.as_str())
            .collect();
        assert_eq!(order, ["Second", "First"]);
    }
}
