//! Core DictStore implementation

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::StoreError;

/// A single dictionary entry
///
/// `term` is the identity key: required, non-empty, unique within a
/// collection. The remaining fields default to empty strings so files
/// written by hand may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The word or phrase being defined (identity key)
    pub term: String,
    /// Definition or main explanation
    #[serde(default)]
    pub definition: String,
    /// Category or subject area
    #[serde(default)]
    pub category: String,
    /// Usage example or supplementary note
    #[serde(default)]
    pub example: String,
}

impl Record {
    /// Create a record with just a term; other fields empty
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: String::new(),
            category: String::new(),
            example: String::new(),
        }
    }
}

/// File-backed dictionary store
///
/// Owns the path to a single JSON file holding the full ordered collection.
/// Single writer assumed; concurrent external modification between a load
/// and a save is a lost-update race this store does not guard against.
pub struct DictStore {
    /// Path to the backing JSON file
    path: PathBuf,
}

impl DictStore {
    /// Create a store backed by the given file path
    ///
    /// Nothing is created or read here; a missing file is a valid empty
    /// dictionary until the first save.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "Opened dictionary store");
        Self { path }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection from the backing file
    ///
    /// A missing file yields an empty collection. A file that exists but
    /// does not parse as a record array is a `Format` error; it never
    /// degrades to an empty collection, since saving over a corrupt but
    /// recoverable file would destroy it.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Backing file absent, empty collection");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<Record> = serde_json::from_str(&content).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;

        debug!(count = records.len(), "Loaded dictionary");
        Ok(records)
    }

    /// Overwrite the backing file with the full collection, preserving order
    ///
    /// The parent directory is created if absent. The write is not atomic:
    /// a partial-write failure may leave the prior content damaged.
    pub fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(records).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(count = records.len(), path = %self.path.display(), "Saved dictionary");
        Ok(())
    }

    /// Append a record if its term is valid and not already registered
    ///
    /// Strips surrounding whitespace from all four fields, validates the
    /// term is non-empty, loads the current collection, rejects an exact
    /// case-sensitive term collision, then appends and persists. Returns
    /// the updated collection on success. On any error nothing is written.
    pub fn insert(&self, candidate: Record) -> Result<Vec<Record>, StoreError> {
        // Trim before validation and the duplicate scan, so a padded
        // term can neither pass validation nor dodge an existing entry
        let candidate = Record {
            term: candidate.term.trim().to_string(),
            definition: candidate.definition.trim().to_string(),
            category: candidate.category.trim().to_string(),
            example: candidate.example.trim().to_string(),
        };

        if candidate.term.is_empty() {
            return Err(StoreError::EmptyTerm);
        }

        let mut records = self.load()?;

        if records.iter().any(|r| r.term == candidate.term) {
            return Err(StoreError::Duplicate {
                term: candidate.term,
            });
        }

        records.push(candidate);
        self.save(&records)?;

        info!(
            term = %records.last().map(|r| r.term.as_str()).unwrap_or(""),
            count = records.len(),
            "Registered entry"
        );
        Ok(records)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> DictStore {
        DictStore::open(temp.path().join("dictionary.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let records = store.load().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_insert_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let dog = Record {
            term: "dog".to_string(),
            definition: "canine".to_string(),
            category: "animal".to_string(),
            example: "a dog barks".to_string(),
        };
        store.insert(dog.clone()).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records, vec![dog]);
    }

    #[test]
    fn test_insert_duplicate_rejected_and_disk_unchanged() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut cat = Record::new("cat");
        cat.definition = "animal".to_string();
        store.insert(cat.clone()).unwrap();

        let mut second = Record::new("cat");
        second.definition = "feline".to_string();
        let err = store.insert(second).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { ref term } if term == "cat"));

        // Disk still holds the original record only
        let records = store.load().unwrap();
        assert_eq!(records, vec![cat]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.insert(Record::new("Run")).unwrap();
        store.insert(Record::new("run")).unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_insert_padded_term_is_still_a_duplicate() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.insert(Record::new("cat")).unwrap();

        let err = store.insert(Record::new(" cat ")).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { ref term } if term == "cat"));

        let terms: Vec<String> = store.load().unwrap().into_iter().map(|r| r.term).collect();
        assert_eq!(terms, vec!["cat"]);
    }

    #[test]
    fn test_insert_strips_whitespace_from_all_fields() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store
            .insert(Record {
                term: "  dog  ".to_string(),
                definition: " canine ".to_string(),
                category: "\tanimal".to_string(),
                example: "a dog barks \n".to_string(),
            })
            .unwrap();

        let records = store.load().unwrap();
        assert_eq!(
            records,
            vec![Record {
                term: "dog".to_string(),
                definition: "canine".to_string(),
                category: "animal".to_string(),
                example: "a dog barks".to_string(),
            }]
        );
    }

    #[test]
    fn test_insert_empty_term_rejected_without_write() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let err = store.insert(Record::new("")).unwrap_err();
        assert!(matches!(err, StoreError::EmptyTerm));

        let err = store.insert(Record::new("   ")).unwrap_err();
        assert!(matches!(err, StoreError::EmptyTerm));

        assert!(!store.path().exists());
    }

    #[test]
    fn test_insert_appends_at_end_in_order() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        for term in ["alpha", "beta", "gamma"] {
            store.insert(Record::new(term)).unwrap();
        }

        let terms: Vec<String> = store.load().unwrap().into_iter().map(|r| r.term).collect();
        assert_eq!(terms, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_load_corrupt_file_is_format_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dictionary.json");
        fs::write(&path, "{ not a json array").unwrap();

        let store = DictStore::open(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Format { .. }));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dictionary.json");
        fs::write(&path, r#"[{"term": "bare"}]"#).unwrap();

        let records = DictStore::open(&path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "bare");
        assert_eq!(records[0].definition, "");
        assert_eq!(records[0].category, "");
        assert_eq!(records[0].example, "");
    }

    #[test]
    fn test_save_serializes_empty_fields_explicitly() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(&[Record::new("bare")]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"definition\""));
        assert!(content.contains("\"category\""));
        assert!(content.contains("\"example\""));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let store = DictStore::open(temp.path().join("nested").join("dir").join("dictionary.json"));

        store.save(&[Record::new("word")]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }
}
