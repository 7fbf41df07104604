// crates/sol-etl-normalizer/src/processor.rs

//! Configured normalizer
//!
//! Applies the configured parse-error policy, keeps counters and fans a batch
//! of blocks out over a rayon pool. Each block is normalized independently.

use {
    crate::{
        metrics::{MetricsSnapshot, NormalizerMetrics},
        normalizer::{flatten_with_policy, NormalizedBlock},
    },
    anyhow::Context,
    rayon::{prelude::*, ThreadPool, ThreadPoolBuilder},
    sol_etl_common::{EtlBlock, NormalizeError, NormalizerConfig, ParseErrorPolicy, Result},
    std::sync::Arc,
    tracing::{error, info},
};

pub struct BlockNormalizer {
    config: NormalizerConfig,
    metrics: Arc<NormalizerMetrics>,
    pool: Option<ThreadPool>,
}

impl BlockNormalizer {
    pub fn new(config: NormalizerConfig) -> Result<Self> {
        config.validate()?;

        let pool = match config.threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("normalizer-worker-{}", i))
                    .build()
                    .map_err(|e| sol_etl_common::Error::Config(e.to_string()))?,
            ),
            None => None,
        };

        info!(
            policy = ?config.parse_error_policy,
            threads = ?config.threads,
            "block normalizer initialized"
        );

        Ok(Self {
            config,
            metrics: Arc::new(NormalizerMetrics::new()),
            pool,
        })
    }

    pub fn policy(&self) -> ParseErrorPolicy {
        self.config.parse_error_policy
    }

    pub fn metrics(&self) -> Arc<NormalizerMetrics> {
        self.metrics.clone()
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn normalize(
        &self,
        block: &EtlBlock,
    ) -> std::result::Result<NormalizedBlock, NormalizeError> {
        match flatten_with_policy(block, self.config.parse_error_policy) {
            Ok(normalized) => {
                self.metrics.record_block(&normalized);
                Ok(normalized)
            }
            Err(err) => {
                self.metrics.record_failure();
                error!(slot = block.slot, "failed to normalize block: {}", err);
                Err(err)
            }
        }
    }

    /// Normalizes every block independently; results are in input order.
    pub fn normalize_many(&self, blocks: &[EtlBlock]) -> Vec<anyhow::Result<NormalizedBlock>> {
        let run = || {
            blocks
                .par_iter()
                .map(|block| {
                    self.normalize(block)
                        .with_context(|| format!("normalizing block at slot {}", block.slot))
                })
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_etl_common::{AccountsData, RawAccount, TableContext};

    fn block(slot: u64, token_amount: &str) -> EtlBlock {
        EtlBlock {
            slot,
            table_context: TableContext {
                block_hash: format!("hash-{}", slot),
                block_timestamp: None,
            },
            accounts: vec![AccountsData {
                tx_signature: Some(format!("sig-{}", slot)),
                accounts: vec![
                    Some(RawAccount {
                        pubkey: "good".to_string(),
                        ..Default::default()
                    }),
                    Some(RawAccount {
                        pubkey: "maybe-bad".to_string(),
                        token_amount: Some(token_amount.to_string()),
                        ..Default::default()
                    }),
                ],
                tokens: Vec::new(),
            }],
        }
    }

    #[test]
    fn test_rejects_zero_threads() {
        let config = NormalizerConfig { threads: Some(0), ..Default::default() };
        assert!(BlockNormalizer::new(config).is_err());
    }

    #[test]
    fn test_accessors_reflect_config_and_shared_counters() {
        let config = NormalizerConfig {
            parse_error_policy: ParseErrorPolicy::SkipRecord,
            ..Default::default()
        };
        let normalizer = BlockNormalizer::new(config).unwrap();
        assert_eq!(normalizer.policy(), ParseErrorPolicy::SkipRecord);

        let metrics = normalizer.metrics();
        normalizer.normalize(&block(1, "5")).unwrap();

        assert_eq!(metrics.snapshot(), normalizer.metrics_snapshot());
        assert_eq!(metrics.snapshot().blocks_normalized, 1);
        assert_eq!(metrics.snapshot().account_records, 2);
    }

    #[test]
    fn test_abort_policy_fails_block() {
        let normalizer = BlockNormalizer::new(NormalizerConfig::default()).unwrap();
        let err = normalizer.normalize(&block(5, "abc")).unwrap_err();

        assert!(matches!(err, NormalizeError::Record(ref e) if e.field == "token_amount"));
        assert_eq!(normalizer.metrics_snapshot().blocks_failed, 1);
        assert_eq!(normalizer.metrics_snapshot().account_records, 0);
    }

    #[test]
    fn test_skip_policy_keeps_valid_records() {
        let config = NormalizerConfig {
            parse_error_policy: ParseErrorPolicy::SkipRecord,
            ..Default::default()
        };
        let normalizer = BlockNormalizer::new(config).unwrap();
        let normalized = normalizer.normalize(&block(5, "abc")).unwrap();

        assert_eq!(normalized.accounts.len(), 1);
        assert_eq!(normalized.accounts[0].pubkey.as_deref(), Some("good"));
        assert_eq!(normalized.errors.len(), 1);
        assert_eq!(normalized.errors[0].pubkey, "maybe-bad");
        assert_eq!(normalized.errors[0].entity_index, 1);

        let snapshot = normalizer.metrics_snapshot();
        assert_eq!(snapshot.records_skipped, 1);
        assert_eq!(snapshot.account_records, 1);
    }

    #[test]
    fn test_normalize_many_preserves_order() {
        let config = NormalizerConfig { threads: Some(2), ..Default::default() };
        let normalizer = BlockNormalizer::new(config).unwrap();
        let blocks: Vec<EtlBlock> = (0..16)
            .map(|slot| block(slot, if slot == 7 { "x" } else { "10" }))
            .collect();

        let results = normalizer.normalize_many(&blocks);

        assert_eq!(results.len(), 16);
        for (slot, result) in results.iter().enumerate() {
            if slot == 7 {
                let err = result.as_ref().unwrap_err();
                assert!(format!("{:#}", err).contains("slot 7"));
            } else {
                let normalized = result.as_ref().unwrap();
                assert_eq!(normalized.accounts[0].block_slot, Some(slot as i64));
                assert_eq!(normalized.accounts[1].token_amount, Some(10));
            }
        }

        let snapshot = normalizer.metrics_snapshot();
        assert_eq!(snapshot.blocks_normalized, 15);
        assert_eq!(snapshot.blocks_failed, 1);
        assert_eq!(snapshot.account_records, 30);
    }
}
