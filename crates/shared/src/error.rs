use thiserror::Error;

/// Construction-time failure of a classification scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSchemeError {
    #[error("classification scheme has no buckets")]
    Empty,
    #[error("classification field name is empty")]
    EmptyField,
    #[error("bucket at position {index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("duplicate bucket label '{label}'")]
    DuplicateLabel { label: String },
    #[error("more than one open-low bucket ('{first}' and '{second}')")]
    MultipleOpenLow { first: String, second: String },
    #[error("open-low bucket '{label}' must be first but is at position {index}")]
    OpenLowNotFirst { label: String, index: usize },
    #[error("bucket '{label}' has min {min_value} above max {max_value}")]
    InvertedRange {
        label: String,
        min_value: i64,
        max_value: i64,
    },
    #[error("bucket '{label}' overlaps or precedes '{previous}' (min {min_value} < previous max {previous_max})")]
    OutOfOrder {
        label: String,
        previous: String,
        min_value: i64,
        previous_max: i64,
    },
}
