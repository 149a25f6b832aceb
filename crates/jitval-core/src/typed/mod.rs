//! Typed - 型付きパラメータ API
//!
//! テーブル駆動テストの行を FieldMap として運搬するための層です。
//!
//! # 二層構造
//! - **表層（Typed）**: `Param` trait, `ParameterEnvelope<T>` - 型安全
//! - **内部（Field）**: `FieldMap` - JSON 値の名前付きマップ

pub mod envelope;
pub mod field_map;
pub mod param;

pub use self::envelope::{ParameterEnvelope, pack, unpack};
pub use self::field_map::FieldMap;
pub use self::param::Param;
