use thiserror::Error;

use crate::model::TaxonomyError;

#[derive(Error, Debug)]
pub enum TaxonomyCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid input: {0}")]
    InputError(String),
    #[error("failure building taxonomy: {source}")]
    TaxonomyError {
        #[from]
        source: TaxonomyError,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure processing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
}
