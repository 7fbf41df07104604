//! Flat output records
//!
//! The field set, nullability and nested row shape of these types is the wire
//! contract with the storage writer. Every nested list carries at least one
//! row; an all-`None` row (the type's `Default`) stands in for missing data.

pub mod account;
pub mod token;

pub use account::{
    AccountRecord, AuthorizedVoterRecord, DataRecord, EpochCreditRecord, PriorVoterRecord,
    TimestampRecord, VoteRecord,
};
pub use token::{CreatorRecord, TokenRecord};

/// Implemented by every nested sub-record so callers can tell a placeholder
/// row from a real one.
pub trait SubRecord: Default + PartialEq {
    fn is_placeholder(&self) -> bool {
        *self == Self::default()
    }
}
