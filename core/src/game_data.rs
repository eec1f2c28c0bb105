//! Static game data tables.
//!
//! The class table is fixed configuration, not roster data: it never changes
//! at runtime and unknown ids must render as a placeholder instead of failing.

use phf::phf_map;

/// Class id to display name, per the game's class enumeration.
static CLASS_NAMES: phf::Map<i64, &'static str> = phf_map! {
    1_i64 => "Warrior",
    2_i64 => "Paladin",
    3_i64 => "Hunter",
    4_i64 => "Rogue",
    5_i64 => "Priest",
    6_i64 => "Death Knight",
    7_i64 => "Shaman",
    8_i64 => "Mage",
    9_i64 => "Warlock",
    10_i64 => "Monk",
    11_i64 => "Druid",
    12_i64 => "Demon Hunter",
    13_i64 => "Evoker",
};

/// Look up a class name by id.
pub fn class_name(class_id: i64) -> Option<&'static str> {
    CLASS_NAMES.get(&class_id).copied()
}

/// Resolve a class id to a display name, falling back to `Unknown (<id>)`
/// for ids outside the table.
pub fn display_class_name(class_id: i64) -> String {
    match class_name(class_id) {
        Some(name) => name.to_string(),
        None => format!("Unknown ({class_id})"),
    }
}
