// Public fallible APIs in this crate share one concrete error contract (`OntoError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod builder;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod identifier;
pub mod ingest;
pub mod jsonl;
pub mod log;
pub mod models;
pub mod namespace;
pub mod prune;
pub mod registry;
pub mod row;

pub use config::ConvertConfig;
pub use convert::{Conversion, Converter};
pub use document::{DictionaryDocument, DocumentHeader};
pub use error::{OntoError, Result};
pub use identifier::IdentifierStrategy;
pub use log::ConversionLog;
pub use prune::ReferencePolicy;
pub use row::OntologyRow;
