//! Error types for the Solana ETL pipeline

use {
    std::num::ParseIntError,
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a whole `flatten` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("block aborted: {0}")]
    Record(RecordError),

    #[error("block slot {0} does not fit in a signed 64-bit integer")]
    BlockSlotOutOfRange(u64),

    #[error("block {slot} timestamp {timestamp}s does not fit in microseconds")]
    BlockTimestampOverflow { slot: u64, timestamp: i64 },
}

/// A single account or token entity that could not be converted into a record.
///
/// `group_index` is the position of the transaction group inside the block and
/// `entity_index` the position of the entity inside that group, both counted
/// over the raw input (null slots included) so they point back at the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("group {group_index} entity {entity_index} ({pubkey}): field `{field}` = {raw_value:?}: {kind}")]
pub struct RecordError {
    pub group_index: usize,
    pub entity_index: usize,
    pub pubkey: String,
    pub field: &'static str,
    pub raw_value: String,
    pub kind: RecordErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordErrorKind {
    #[error("invalid unsigned integer: {0}")]
    InvalidInteger(#[source] ParseIntError),

    #[error("explicit sign is not allowed in an unsigned integer")]
    SignedInteger,

    #[error("timestamp {0}s overflows microseconds")]
    TimestampOverflow(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_display_names_field_and_value() {
        let source = "abc".parse::<u64>().unwrap_err();
        let err = RecordError {
            group_index: 2,
            entity_index: 5,
            pubkey: "Vote111111111111111111111111111111111111111".to_string(),
            field: "token_amount",
            raw_value: "abc".to_string(),
            kind: RecordErrorKind::InvalidInteger(source),
        };

        let message = err.to_string();
        assert!(message.contains("group 2 entity 5"));
        assert!(message.contains("`token_amount`"));
        assert!(message.contains("\"abc\""));
    }

    #[test]
    fn test_normalize_error_converts_into_crate_error() {
        let err: Error = NormalizeError::BlockTimestampOverflow {
            slot: 7,
            timestamp: i64::MAX,
        }
        .into();
        assert!(matches!(err, Error::Normalize(_)));
        assert!(err.to_string().starts_with("Normalization error: block 7"));
    }
}
