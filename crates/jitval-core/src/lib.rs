//! jitval-core
//!
//! Validates whether a (runtime, JIT, platform) job can run on the current
//! host toolchain, and carries typed parameters through table-driven tests.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（selectors, JobDescriptor, Verdict, resolver）
//! - **typed**: 型付きパラメータ（Param trait, ParameterEnvelope, FieldMap）
//! - **scenario**: シナリオテーブル（windows / core / mono）
//! - **ports**: 外部エンジンの抽象化（BenchmarkEngine）
//! - **impls**: 開発用実装（DryRunEngine）
//! - **app**: 検証ロジック（Verifier, reports）
//! - **config**: ホスト環境設定
//! - **error**: エラー型

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod scenario;
pub mod typed;
