use {
    super::SubRecord,
    serde::{Deserialize, Serialize},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub block_slot: Option<i64>,
    pub block_timestamp: Option<i64>,
    pub block_hash: Option<String>,
    pub tx_signature: Option<String>,
    pub retrieval_timestamp: Option<i64>,

    pub is_nft: Option<bool>,
    pub mint: Option<String>,
    pub update_authority: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub uri: Option<String>,
    pub seller_fee_basis_points: Option<u32>,
    pub creators: Vec<CreatorRecord>,
    pub primary_sale_happened: Option<bool>,
    pub is_mutable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorRecord {
    pub address: Option<String>,
    pub verified: Option<bool>,
    pub share: Option<i64>,
}

impl SubRecord for CreatorRecord {}
