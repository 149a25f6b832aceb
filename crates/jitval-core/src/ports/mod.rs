//! Ports - 外部コラボレータへのインターフェース

pub mod engine;

pub use self::engine::BenchmarkEngine;
