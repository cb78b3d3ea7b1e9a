//! DictStore - file-backed personal dictionary
//!
//! Stores term/definition/category/example records as a single JSON array
//! on disk and answers scoped case-insensitive substring searches over
//! them. The store enforces term uniqueness on insert; search is a pure
//! function of the loaded collection.
//!
//! # Data layout
//!
//! ```text
//! dictionary.json
//! [
//!   {"term": "...", "definition": "...", "category": "...", "example": "..."},
//!   ...
//! ]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use dictstore::{DictStore, Record, SearchScope, search};
//!
//! let store = DictStore::open("dictionary.json");
//! let records = store.insert(Record::new("run"))?;
//! let hits = search(&records, "run", SearchScope::Term);
//! ```

pub mod cli;
pub mod config;
mod error;
mod query;
mod store;

pub use error::StoreError;
pub use query::{SearchScope, search};
pub use store::{DictStore, Record};
