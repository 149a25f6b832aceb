//! Param trait - 型付きパラメータの定義
//!
//! A `Param` is a domain value that can cross a table-driven test boundary.
//! It names the single field it is stored under and knows how to print itself.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{JitKind, PlatformKind, RuntimeKind};

/// Param は field 名と型を対応付ける
///
/// # 使用例
/// ```ignore
/// impl Param for RuntimeKind {
///     const FIELD: &'static str = "Runtime";
/// }
///
/// assert_eq!(RuntimeKind::Core.label(), "Runtime = Core");
/// ```
///
/// # Trait Bounds
/// - `Serialize` / `DeserializeOwned`: field map への保存と復元
/// - `Display`: label の表示名
/// - `Send + Sync + 'static`: 複数スレッドから安全に使えるため
pub trait Param:
    Serialize + DeserializeOwned + fmt::Display + Clone + PartialEq + Send + Sync + 'static
{
    /// Name of the field the value is stored under.
    const FIELD: &'static str;

    /// `"{FIELD} = {display name}"`. For reports only; never parsed back.
    fn label(&self) -> String {
        format!("{} = {}", Self::FIELD, self)
    }
}

impl Param for RuntimeKind {
    const FIELD: &'static str = "Runtime";
}

impl Param for JitKind {
    const FIELD: &'static str = "Jit";
}

impl Param for PlatformKind {
    const FIELD: &'static str = "Platform";
}
