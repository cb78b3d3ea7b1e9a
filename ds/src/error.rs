//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, writing, or mutating the dictionary
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Term is required and must not be empty")]
    EmptyTerm,

    #[error("Term '{term}' is already registered")]
    Duplicate { term: String },

    #[error("File {path} is not a valid dictionary: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize dictionary for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<i32>>("not json").unwrap_err()
    }

    #[test]
    fn test_duplicate_message_names_term() {
        let err = StoreError::Duplicate {
            term: "cat".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("cat"));
        assert!(msg.contains("already registered"));
    }

    #[test]
    fn test_format_and_serialize_messages_point_the_right_way() {
        let path = PathBuf::from("/data/dictionary.json");

        // Read side: the file's content is at fault
        let err = StoreError::Format {
            path: path.clone(),
            source: json_error(),
        };
        assert!(err.to_string().contains("not a valid dictionary"));

        // Write side: encoding failed before anything touched the file
        let err = StoreError::Serialize {
            path,
            source: json_error(),
        };
        assert!(err.to_string().contains("Failed to serialize"));
    }
}
