//! BenchmarkEngine port - 外部のベンチマーク実行エンジン
//!
//! The engine is a black box: give it a job, get back the full execution log.
//! It is only ever called for jobs the resolver reports as supported.

use async_trait::async_trait;

use crate::domain::JobDescriptor;
use crate::error::EngineError;

#[async_trait]
pub trait BenchmarkEngine: Send + Sync {
    /// Run one job to completion and return its log.
    async fn run(&self, job: &JobDescriptor) -> Result<String, EngineError>;
}
