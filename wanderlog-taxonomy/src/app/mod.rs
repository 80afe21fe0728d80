mod taxonomy_app;
mod taxonomy_cli_error;

pub use taxonomy_app::{ConfigFormat, TaxonomyApp, TaxonomyOperation};
pub use taxonomy_cli_error::TaxonomyCliError;
