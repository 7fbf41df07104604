//! Block and transaction group types

use {
    super::{account::RawAccount, token::RawToken},
    serde::{Deserialize, Serialize},
};

/// Timestamp in whole seconds, as emitted by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnixTimestamp {
    pub timestamp: i64,
}

impl From<i64> for UnixTimestamp {
    fn from(timestamp: i64) -> Self {
        Self { timestamp }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableContext {
    pub block_hash: String,
    #[serde(default)]
    pub block_timestamp: Option<UnixTimestamp>,
}

/// One block's worth of account and token observations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EtlBlock {
    pub slot: u64,
    pub table_context: TableContext,
    /// Transaction groups, in block order.
    #[serde(default)]
    pub accounts: Vec<AccountsData>,
}

/// Entities observed in a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsData {
    #[serde(default)]
    pub tx_signature: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Option<RawAccount>>,
    #[serde(default)]
    pub tokens: Vec<Option<RawToken>>,
}

impl EtlBlock {
    pub fn account_count(&self) -> usize {
        self.accounts
            .iter()
            .map(|group| group.accounts.iter().flatten().count())
            .sum()
    }

    pub fn token_count(&self) -> usize {
        self.accounts
            .iter()
            .map(|group| group.tokens.iter().flatten().count())
            .sum()
    }
}
