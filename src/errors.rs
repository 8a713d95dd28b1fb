use thiserror::Error;

/// Errors raised at the data boundary (I/O and structural validation of
/// imported records). The pricing engine itself never errors: degenerate
/// interactive input (bad weights, unparseable override text) degrades to a
/// safe default instead, so a statement is always generable.
#[derive(Debug, Error)]
pub enum BillingError {
    // IO-related.
    #[error("error reading file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("invalid CSV format")]
    InvalidCsv(#[from] csv::Error),

    #[error("invalid manifest JSON")]
    InvalidManifestJson(#[from] serde_json::Error),

    #[error("invalid item type: '{value}'")]
    InvalidItemType { value: String },

    #[error("invalid weight: '{value}'")]
    InvalidWeight { value: String },
}
