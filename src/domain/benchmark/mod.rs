//! Benchmark Module - Static per-industry reference data.

mod industry;
mod store;

pub use industry::{BenchmarkPosition, IndustryBenchmark, IndustryId, GENERIC_INDUSTRY};
pub use store::{BenchmarkError, IndustryBenchmarkStore};
