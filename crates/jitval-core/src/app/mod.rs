//! App - アプリケーション層
//!
//! resolver と engine を組み合わせて、シナリオテーブルを検証します。
//!
//! # 主要コンポーネント
//! - **Verifier**: 1 行の検証とテーブル単位の実行
//! - **Report**: 結果のシリアライズ可能なビュー

pub mod report;
pub mod verifier;

pub use self::report::{ReportCounts, RowResult, ScenarioReport, TableReport};
pub use self::verifier::Verifier;
