// crates/sol-etl-normalizer/src/metrics.rs

//! Normalizer counters

use {
    crate::normalizer::NormalizedBlock,
    sol_etl_common::records::SubRecord,
    std::{
        fmt::{Debug, Formatter, Result as FmtResult},
        sync::atomic::{AtomicU64, Ordering},
    },
};

pub struct NormalizerMetrics {
    pub blocks_normalized: AtomicU64,
    pub blocks_failed: AtomicU64,
    pub account_records: AtomicU64,
    pub token_records: AtomicU64,
    pub records_skipped: AtomicU64,
    pub placeholder_rows: AtomicU64,
}

/// Point-in-time copy of [`NormalizerMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub blocks_normalized: u64,
    pub blocks_failed: u64,
    pub account_records: u64,
    pub token_records: u64,
    pub records_skipped: u64,
    pub placeholder_rows: u64,
}

impl NormalizerMetrics {
    pub fn new() -> Self {
        Self {
            blocks_normalized: AtomicU64::new(0),
            blocks_failed: AtomicU64::new(0),
            account_records: AtomicU64::new(0),
            token_records: AtomicU64::new(0),
            records_skipped: AtomicU64::new(0),
            placeholder_rows: AtomicU64::new(0),
        }
    }

    pub fn record_block(&self, block: &NormalizedBlock) {
        self.blocks_normalized.fetch_add(1, Ordering::Relaxed);
        self.account_records
            .fetch_add(block.accounts.len() as u64, Ordering::Relaxed);
        self.token_records
            .fetch_add(block.tokens.len() as u64, Ordering::Relaxed);
        self.records_skipped
            .fetch_add(block.errors.len() as u64, Ordering::Relaxed);
        self.placeholder_rows
            .fetch_add(count_placeholders(block), Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.blocks_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            blocks_normalized: self.blocks_normalized.load(Ordering::Relaxed),
            blocks_failed: self.blocks_failed.load(Ordering::Relaxed),
            account_records: self.account_records.load(Ordering::Relaxed),
            token_records: self.token_records.load(Ordering::Relaxed),
            records_skipped: self.records_skipped.load(Ordering::Relaxed),
            placeholder_rows: self.placeholder_rows.load(Ordering::Relaxed),
        }
    }
}

impl Default for NormalizerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for NormalizerMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NormalizerMetrics")
            .field("blocks_normalized", &self.blocks_normalized.load(Ordering::Relaxed))
            .field("blocks_failed", &self.blocks_failed.load(Ordering::Relaxed))
            .field("account_records", &self.account_records.load(Ordering::Relaxed))
            .field("token_records", &self.token_records.load(Ordering::Relaxed))
            .field("records_skipped", &self.records_skipped.load(Ordering::Relaxed))
            .field("placeholder_rows", &self.placeholder_rows.load(Ordering::Relaxed))
            .finish()
    }
}

fn placeholders<R: SubRecord>(rows: &[R]) -> u64 {
    rows.iter().filter(|row| row.is_placeholder()).count() as u64
}

fn count_placeholders(block: &NormalizedBlock) -> u64 {
    let accounts: u64 = block
        .accounts
        .iter()
        .map(|a| {
            placeholders(&a.authorized_voters)
                + placeholders(&a.prior_voters)
                + placeholders(&a.epoch_credits)
                + placeholders(&a.votes)
                + placeholders(&a.last_timestamp)
                + placeholders(&a.data)
        })
        .sum();
    let tokens: u64 = block.tokens.iter().map(|t| placeholders(&t.creators)).sum();
    accounts + tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_etl_common::{AccountRecord, CreatorRecord, TokenRecord, VoteRecord};

    #[test]
    fn test_record_block_counts_rows_and_placeholders() {
        let metrics = NormalizerMetrics::new();
        let block = NormalizedBlock {
            accounts: vec![AccountRecord {
                votes: vec![VoteRecord { confirmation_count: Some(1), slot: Some(9) }],
                authorized_voters: vec![Default::default()],
                ..Default::default()
            }],
            tokens: vec![TokenRecord {
                creators: vec![CreatorRecord::default()],
                ..Default::default()
            }],
            errors: Vec::new(),
        };

        metrics.record_block(&block);
        metrics.record_failure();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                blocks_normalized: 1,
                blocks_failed: 1,
                account_records: 1,
                token_records: 1,
                records_skipped: 0,
                placeholder_rows: 2,
            }
        );
    }
}
