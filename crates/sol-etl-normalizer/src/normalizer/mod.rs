// crates/sol-etl-normalizer/src/normalizer/mod.rs

//! Block flattening
//!
//! One pass over the transaction groups of a block: each account state becomes
//! one `AccountRecord`, each token metadata entity one `TokenRecord`, both in
//! encounter order.

mod account;
mod token;

use {
    sol_etl_common::{
        utils::{format_micros, to_micros},
        AccountRecord, EtlBlock, NormalizeError, ParseErrorPolicy, RecordError, RecordErrorKind,
        TokenRecord,
    },
    tracing::{debug, warn},
};

/// Block-level columns shared by every record derived from one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockContext {
    pub slot: i64,
    pub hash: String,
    /// Microseconds.
    pub timestamp: Option<i64>,
}

impl BlockContext {
    pub fn from_block(block: &EtlBlock) -> Result<Self, NormalizeError> {
        let slot = i64::try_from(block.slot)
            .map_err(|_| NormalizeError::BlockSlotOutOfRange(block.slot))?;

        let timestamp = match block.table_context.block_timestamp {
            Some(ts) => Some(to_micros(ts.timestamp).ok_or(
                NormalizeError::BlockTimestampOverflow {
                    slot: block.slot,
                    timestamp: ts.timestamp,
                },
            )?),
            None => None,
        };

        Ok(Self {
            slot,
            hash: block.table_context.block_hash.clone(),
            timestamp,
        })
    }
}

/// Output of one flatten call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBlock {
    pub accounts: Vec<AccountRecord>,
    pub tokens: Vec<TokenRecord>,
    /// Records dropped under `ParseErrorPolicy::SkipRecord`. Always empty for
    /// a successful strict flatten.
    pub errors: Vec<RecordError>,
}

impl NormalizedBlock {
    pub fn into_parts(self) -> (Vec<AccountRecord>, Vec<TokenRecord>) {
        (self.accounts, self.tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.tokens.is_empty()
    }
}

/// Position of an entity inside the raw block, carried into errors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntityRef<'a> {
    pub group_index: usize,
    pub entity_index: usize,
    pub id: &'a str,
}

impl EntityRef<'_> {
    pub(crate) fn error(
        &self,
        field: &'static str,
        raw_value: impl Into<String>,
        kind: RecordErrorKind,
    ) -> RecordError {
        RecordError {
            group_index: self.group_index,
            entity_index: self.entity_index,
            pubkey: self.id.to_string(),
            field,
            raw_value: raw_value.into(),
            kind,
        }
    }

    pub(crate) fn micros(
        &self,
        field: &'static str,
        seconds: Option<i64>,
    ) -> Result<Option<i64>, RecordError> {
        seconds
            .map(|s| {
                to_micros(s).ok_or_else(|| {
                    self.error(field, s.to_string(), RecordErrorKind::TimestampOverflow(s))
                })
            })
            .transpose()
    }
}

/// Flattens `block`, failing the whole call on the first malformed record.
///
/// Besides an unparsable token amount, the call also fails when the block
/// slot does not fit an `i64` column, or when the block timestamp or a
/// record's retrieval or last-vote timestamp overflows microseconds. On error
/// no records are returned.
pub fn flatten(block: &EtlBlock) -> Result<NormalizedBlock, NormalizeError> {
    flatten_with_policy(block, ParseErrorPolicy::Abort)
}

/// Flattens `block`, dropping malformed records and reporting them in
/// `NormalizedBlock::errors`.
///
/// Only block-level problems (slot or timestamp out of range) fail the call.
pub fn flatten_lenient(block: &EtlBlock) -> Result<NormalizedBlock, NormalizeError> {
    flatten_with_policy(block, ParseErrorPolicy::SkipRecord)
}

pub fn flatten_with_policy(
    block: &EtlBlock,
    policy: ParseErrorPolicy,
) -> Result<NormalizedBlock, NormalizeError> {
    let context = BlockContext::from_block(block)?;

    let mut output = NormalizedBlock {
        accounts: Vec::with_capacity(block.account_count()),
        tokens: Vec::with_capacity(block.token_count()),
        errors: Vec::new(),
    };

    for (group_index, group) in block.accounts.iter().enumerate() {
        let tx_signature = group.tx_signature.as_ref();

        for (entity_index, account) in group.accounts.iter().enumerate() {
            let Some(account) = account else { continue };
            let entity = EntityRef { group_index, entity_index, id: account.pubkey.as_str() };

            match account::account_record(&context, tx_signature, account, &entity) {
                Ok(record) => output.accounts.push(record),
                Err(err) => handle_record_error(policy, err, &mut output.errors)?,
            }
        }

        for (entity_index, token) in group.tokens.iter().enumerate() {
            let Some(token) = token else { continue };
            let entity = EntityRef { group_index, entity_index, id: token.mint.as_str() };

            match token::token_record(&context, tx_signature, token, &entity) {
                Ok(record) => output.tokens.push(record),
                Err(err) => handle_record_error(policy, err, &mut output.errors)?,
            }
        }
    }

    debug!(
        slot = block.slot,
        block_time = ?context.timestamp.and_then(format_micros),
        groups = block.accounts.len(),
        accounts = output.accounts.len(),
        tokens = output.tokens.len(),
        skipped = output.errors.len(),
        "flattened block"
    );

    Ok(output)
}

fn handle_record_error(
    policy: ParseErrorPolicy,
    err: RecordError,
    skipped: &mut Vec<RecordError>,
) -> Result<(), NormalizeError> {
    match policy {
        ParseErrorPolicy::Abort => Err(NormalizeError::Record(err)),
        ParseErrorPolicy::SkipRecord => {
            warn!("skipping record: {}", err);
            skipped.push(err);
            Ok(())
        }
    }
}
