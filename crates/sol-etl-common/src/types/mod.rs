//! Raw block snapshot types
//!
//! These mirror the nested, optional-heavy shape produced by the upstream
//! decoder. Nothing here is normalized; see `crate::records` for the flat rows.

pub mod account;
pub mod block;
pub mod token;

pub use account::{
    RawAccount, RawAuthorizedVoter, RawData, RawEpochCredit, RawLastTimestamp,
    RawPriorVoter, RawVote,
};
pub use block::{AccountsData, EtlBlock, TableContext, UnixTimestamp};
pub use token::{RawCreator, RawToken};
