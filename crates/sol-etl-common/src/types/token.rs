//! Raw token metadata types

use {
    super::block::UnixTimestamp,
    serde::{Deserialize, Serialize},
};

/// Metaplex-style token metadata observed in a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawToken {
    pub is_nft: bool,
    pub mint: String,
    pub update_authority: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u32,
    pub creators: Option<Vec<Option<RawCreator>>>,
    pub primary_sale_happened: bool,
    pub is_mutable: bool,
    pub retrieval_timestamp: Option<UnixTimestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCreator {
    pub address: String,
    pub verified: bool,
    /// Percentage share, 0..=100.
    pub share: u32,
}
