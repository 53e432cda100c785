use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure accessing speed profile file {path:?}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("speed profile table must have 4 columns, found {0}")]
    SchemaMismatch(usize),
    #[error("missing entry in speed profile table at row {row}, column {column}")]
    IncompleteRow { row: usize, column: usize },
    #[error("speed profile table entry at row {row}, column {column} is not a valid number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("exactly one access type must be selected, found {0}")]
    NoAccessTypeSelected(usize),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
