//! Raw account state types
//!
//! Account states arrive with every parser-specific field optional: a plain
//! system account only carries the base fields, token accounts add mint and
//! amount, vote accounts add voters, credits and votes.

use {
    super::block::UnixTimestamp,
    serde::{Deserialize, Serialize},
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAccount {
    pub pubkey: String,
    pub executable: bool,
    pub lamports: u64,
    pub owner: Option<String>,
    pub rent_epoch: Option<u32>,
    pub program: Option<String>,
    pub space: Option<u64>,
    pub account_type: Option<String>,
    pub is_native: Option<bool>,
    pub mint: Option<String>,
    pub state: Option<String>,
    /// Base-10 token amount; an empty string means "not reported".
    pub token_amount: Option<String>,
    pub token_amount_decimals: Option<u32>,
    pub program_data: Option<String>,

    pub authorized_voters: Vec<Option<RawAuthorizedVoter>>,
    pub authorized_withdrawer: Option<String>,
    pub prior_voters: Vec<Option<RawPriorVoter>>,
    pub node_pubkey: Option<String>,
    pub commission: Option<u32>,
    pub epoch_credits: Vec<Option<RawEpochCredit>>,
    /// `None` and `Some(vec![])` are distinct: only a present list enables
    /// epoch-credit flattening.
    pub votes: Option<Vec<Option<RawVote>>>,
    pub root_slot: Option<u64>,
    pub last_timestamp: Option<RawLastTimestamp>,

    pub data: Option<RawData>,
    pub retrieval_timestamp: Option<UnixTimestamp>,
}

impl Debug for RawAccount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RawAccount")
            .field("pubkey", &self.pubkey)
            .field("lamports", &self.lamports)
            .field("owner", &self.owner)
            .field("executable", &self.executable)
            .field("rent_epoch", &self.rent_epoch)
            .field("account_type", &self.account_type)
            .field("token_amount", &self.token_amount)
            .field("authorized_voters_count", &self.authorized_voters.len())
            .field("prior_voters_count", &self.prior_voters.len())
            .field("epoch_credits_count", &self.epoch_credits.len())
            .field("votes_count", &self.votes.as_ref().map(Vec::len))
            .field("data_len", &self.data.as_ref().map_or(0, |d| d.raw.len()))
            .field("retrieval_timestamp", &self.retrieval_timestamp)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAuthorizedVoter {
    pub authorized_voter: String,
    pub epoch: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPriorVoter {
    pub authorized_pubkey: String,
    pub epoch_of_last_authorized_switch: u32,
    pub target_epoch: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEpochCredit {
    pub credits: u64,
    pub epoch: u64,
    pub previous_credits: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVote {
    pub confirmation_count: u32,
    pub slot: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLastTimestamp {
    /// Seconds.
    pub timestamp: i64,
    pub slot: u64,
}

/// Account data blob together with the encoding it was rendered in
/// (`base64`, `base58`, `jsonParsed`, ...).
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawData {
    pub raw: String,
    pub encoding: String,
}

impl Debug for RawData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RawData")
            .field("raw_len", &self.raw.len())
            .field("encoding", &self.encoding)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_votes_absent_and_empty_are_distinct() {
        let absent: RawAccount = serde_json::from_str(r#"{"pubkey": "a"}"#).unwrap();
        let empty: RawAccount = serde_json::from_str(r#"{"pubkey": "a", "votes": []}"#).unwrap();

        assert_eq!(absent.votes, None);
        assert_eq!(empty.votes, Some(vec![]));
    }

    #[test]
    fn test_null_entries_survive_decoding() {
        let account: RawAccount = serde_json::from_str(
            r#"{"pubkey": "a", "authorized_voters": [null, {"authorized_voter": "v", "epoch": 3}]}"#,
        )
        .unwrap();

        assert_eq!(account.authorized_voters.len(), 2);
        assert!(account.authorized_voters[0].is_none());
        assert_eq!(
            account.authorized_voters[1],
            Some(RawAuthorizedVoter { authorized_voter: "v".to_string(), epoch: 3 })
        );
    }

    #[test]
    fn test_debug_hides_data_blob() {
        let account = RawAccount {
            pubkey: "a".to_string(),
            data: Some(RawData { raw: "AAAA".repeat(64), encoding: "base64".to_string() }),
            ..Default::default()
        };

        let rendered = format!("{:?}", account);
        assert!(rendered.contains("data_len: 256"));
        assert!(!rendered.contains("AAAA"));
    }
}
