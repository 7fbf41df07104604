// crates/sol-etl-normalizer/src/normalizer/token.rs

//! Token record assembly

use {
    super::{BlockContext, EntityRef},
    crate::{convert::widen, policy::non_empty},
    sol_etl_common::{CreatorRecord, RawCreator, RawToken, RecordError, TokenRecord},
};

pub(super) fn token_record(
    context: &BlockContext,
    tx_signature: Option<&String>,
    token: &RawToken,
    entity: &EntityRef<'_>,
) -> Result<TokenRecord, RecordError> {
    let retrieval_timestamp = entity.micros(
        "retrieval_timestamp",
        token.retrieval_timestamp.map(|ts| ts.timestamp),
    )?;

    Ok(TokenRecord {
        block_slot: Some(context.slot),
        block_timestamp: context.timestamp,
        block_hash: Some(context.hash.clone()),
        tx_signature: tx_signature.cloned(),
        retrieval_timestamp,

        is_nft: Some(token.is_nft),
        mint: Some(token.mint.clone()),
        update_authority: Some(token.update_authority.clone()),
        name: Some(token.name.clone()),
        symbol: Some(token.symbol.clone()),
        uri: Some(token.uri.clone()),
        seller_fee_basis_points: Some(token.seller_fee_basis_points),
        creators: non_empty(token.creators.iter().flatten(), creator_record),
        primary_sale_happened: Some(token.primary_sale_happened),
        is_mutable: Some(token.is_mutable),
    })
}

fn creator_record(creator: &RawCreator) -> CreatorRecord {
    CreatorRecord {
        address: Some(creator.address.clone()),
        verified: Some(creator.verified),
        share: Some(widen(creator.share)),
    }
}
