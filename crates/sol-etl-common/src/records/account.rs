use {
    super::SubRecord,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub block_slot: Option<i64>,
    /// Microseconds.
    pub block_timestamp: Option<i64>,
    pub block_hash: Option<String>,
    pub tx_signature: Option<String>,
    /// Microseconds.
    pub retrieval_timestamp: Option<i64>,

    pub pubkey: Option<String>,
    pub executable: Option<bool>,
    pub lamports: Option<u64>,
    pub owner: Option<String>,
    pub rent_epoch: Option<i64>,
    pub program: Option<String>,
    pub space: Option<u64>,
    pub account_type: Option<String>,
    pub is_native: Option<bool>,
    pub mint: Option<String>,
    pub state: Option<String>,
    pub token_amount: Option<u64>,
    pub token_amount_decimals: Option<u32>,
    pub program_data: Option<String>,

    pub authorized_voters: Vec<AuthorizedVoterRecord>,
    pub authorized_withdrawer: Option<String>,
    pub prior_voters: Vec<PriorVoterRecord>,
    pub node_pubkey: Option<String>,
    pub commission: Option<u32>,
    pub epoch_credits: Vec<EpochCreditRecord>,
    pub votes: Vec<VoteRecord>,
    pub root_slot: Option<u64>,
    pub last_timestamp: Vec<TimestampRecord>,
    pub data: Vec<DataRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedVoterRecord {
    pub authorized_voter: Option<String>,
    pub epoch: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorVoterRecord {
    pub authorized_pubkey: Option<String>,
    pub epoch_of_last_authorized_switch: Option<i64>,
    pub target_epoch: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochCreditRecord {
    pub credits: Option<u64>,
    pub epoch: Option<u64>,
    pub previous_credits: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub confirmation_count: Option<u32>,
    pub slot: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRecord {
    /// Microseconds.
    pub timestamp: Option<i64>,
    pub slot: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRecord {
    pub raw: Option<String>,
    pub encoding: Option<String>,
}

impl SubRecord for AuthorizedVoterRecord {}
impl SubRecord for PriorVoterRecord {}
impl SubRecord for EpochCreditRecord {}
impl SubRecord for VoteRecord {}
impl SubRecord for TimestampRecord {}
impl SubRecord for DataRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placeholder_serializes_as_nulls() {
        let value = serde_json::to_value(PriorVoterRecord::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "authorized_pubkey": null,
                "epoch_of_last_authorized_switch": null,
                "target_epoch": null,
            })
        );
    }

    #[test]
    fn test_is_placeholder() {
        assert!(VoteRecord::default().is_placeholder());
        assert!(!VoteRecord { confirmation_count: Some(0), slot: None }.is_placeholder());
    }
}
