//! Block normalizer
//!
//! Turns a raw `EtlBlock` snapshot into flat account and token rows ready for
//! a columnar sink. The transform itself (`flatten`, `flatten_lenient`) is a
//! pure function; `BlockNormalizer` wraps it with configuration, counters and
//! a parallel multi-block driver.

pub mod convert;
pub mod metrics;
pub mod normalizer;
pub mod policy;
pub mod processor;


pub use metrics::{MetricsSnapshot, NormalizerMetrics};
pub use normalizer::{flatten, flatten_lenient, BlockContext, NormalizedBlock};
pub use processor::BlockNormalizer;
