//! DryRunEngine - 開発用のエンジン実装
//!
//! Pretends to run the benchmark and prints the caption a real run would
//! print. Counts invocations so callers can check the engine was (not) used.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{JobDescriptor, OK_CAPTION};
use crate::error::EngineError;
use crate::ports::BenchmarkEngine;

#[derive(Debug, Default)]
pub struct DryRunEngine {
    runs: AtomicUsize,
}

impl DryRunEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BenchmarkEngine for DryRunEngine {
    async fn run(&self, job: &JobDescriptor) -> Result<String, EngineError> {
        self.runs.fetch_add(1, Ordering::Relaxed);
        Ok(format!(
            "// Job: Dry(Runtime={}, Jit={}, Platform={})\n{OK_CAPTION}\n",
            job.runtime, job.jit, job.platform
        ))
    }
}
