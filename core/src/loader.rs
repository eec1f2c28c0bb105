//! Roster file loading.
//!
//! The roster ships as a single JSON array of character records, parsed once
//! at startup. The loader assumes well-typed fields; data-quality problems
//! surface as parse errors here rather than inside the derivation layer.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::character::CharacterRecord;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a roster from a JSON file on disk.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<CharacterRecord>, LoaderError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let records = parse_roster(&contents)?;
    tracing::info!(count = records.len(), path = %path.display(), "loaded roster");
    Ok(records)
}

/// Parse a roster from a JSON string.
pub fn parse_roster(json: &str) -> Result<Vec<CharacterRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roster_json_shape() {
        let json = r#"[
            {"Character": "Aelthis", "Level": 70, "Class ID": 8, "Rank": 3, "Realm": "Silvermoon"},
            {"Character": "Borrin", "Level": 60, "Class ID": 1, "Rank": 1, "Realm": "Aerie Peak"}
        ]"#;
        let records = parse_roster(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Aelthis");
        assert_eq!(records[0].class_id, 8);
        assert_eq!(records[1].realm, "Aerie Peak");
        assert_eq!(records[1].rank, 1);
    }

    #[test]
    fn test_parse_empty_roster() {
        assert!(parse_roster("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_records() {
        // Non-numeric level is a loader-level failure, never a derivation one.
        let json = r#"[{"Character": "X", "Level": "max", "Class ID": 1, "Rank": 1, "Realm": "Y"}]"#;
        assert!(parse_roster(json).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_roster("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
    }
}
