pub mod config;
pub mod errors;
pub mod records;
pub mod types;
pub mod utils;

pub use config::{NormalizerConfig, ParseErrorPolicy};
pub use errors::{Error, NormalizeError, RecordError, RecordErrorKind, Result};
pub use records::{
    AccountRecord, AuthorizedVoterRecord, CreatorRecord, DataRecord, EpochCreditRecord,
    PriorVoterRecord, SubRecord, TimestampRecord, TokenRecord, VoteRecord,
};
pub use types::{
    AccountsData, EtlBlock, RawAccount, RawAuthorizedVoter, RawCreator, RawData, RawEpochCredit,
    RawLastTimestamp, RawPriorVoter, RawToken, RawVote, TableContext, UnixTimestamp,
};
