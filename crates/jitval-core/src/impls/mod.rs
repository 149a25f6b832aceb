//! Impls - 開発・テスト用の実装

pub mod dry_run;

pub use self::dry_run::DryRunEngine;
