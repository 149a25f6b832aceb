//! Host configuration: which OS we are on and which runtimes are installed.
//!
//! This never changes what the resolver says. It only decides which scenario
//! rows are meaningful to run on this host.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::RuntimeKind;
use crate::error::ConfigError;
use crate::scenario::ScenarioRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    Linux,
    MacOs,
}

impl HostOs {
    /// The OS this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOs
        } else {
            HostOs::Linux
        }
    }
}

impl Default for HostOs {
    fn default() -> Self {
        Self::current()
    }
}

/// Why a scenario row is not run on this host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// Clr jobs can only be run on Windows.
    RequiresWindows,

    /// The runtime is not installed on this host.
    RuntimeNotInstalled(RuntimeKind),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::RequiresWindows => f.write_str("CLR is a valid job only on Windows"),
            SkipReason::RuntimeNotInstalled(runtime) => {
                write!(f, "{runtime} is not installed on this host")
            }
        }
    }
}

/// Host environment description.
///
/// A missing `os` falls back to the detected host. Missing
/// `installed_runtimes` falls back to the usual set for the resolved `os`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHostEnvironment")]
pub struct HostEnvironment {
    pub os: HostOs,
    pub installed_runtimes: Vec<RuntimeKind>,
}

#[derive(Deserialize)]
struct RawHostEnvironment {
    #[serde(default)]
    os: HostOs,

    #[serde(default)]
    installed_runtimes: Option<Vec<RuntimeKind>>,
}

impl From<RawHostEnvironment> for HostEnvironment {
    fn from(raw: RawHostEnvironment) -> Self {
        let installed_runtimes = raw
            .installed_runtimes
            .unwrap_or_else(|| installed_runtimes_for(raw.os));
        Self::new(raw.os, installed_runtimes)
    }
}

fn installed_runtimes_for(os: HostOs) -> Vec<RuntimeKind> {
    match os {
        HostOs::Windows => vec![RuntimeKind::Clr, RuntimeKind::Core],
        HostOs::Linux | HostOs::MacOs => vec![RuntimeKind::Core],
    }
}

impl HostEnvironment {
    pub fn new(os: HostOs, installed_runtimes: Vec<RuntimeKind>) -> Self {
        Self {
            os,
            installed_runtimes,
        }
    }

    /// Describe the host this binary runs on.
    pub fn detect() -> Self {
        let os = HostOs::current();
        Self::new(os, installed_runtimes_for(os))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn has_runtime(&self, runtime: RuntimeKind) -> bool {
        self.installed_runtimes.contains(&runtime)
    }

    /// Whether `row` should run here.
    ///
    /// Rows whose runtime envelope is empty are admitted so that verification
    /// reports the malformed row instead of silently skipping it.
    pub fn admits(&self, row: &ScenarioRow) -> Result<(), SkipReason> {
        let Ok(runtime) = row.runtime.value() else {
            return Ok(());
        };
        match runtime {
            RuntimeKind::Clr if self.os != HostOs::Windows => Err(SkipReason::RequiresWindows),
            RuntimeKind::Mono if !self.has_runtime(RuntimeKind::Mono) => {
                Err(SkipReason::RuntimeNotInstalled(RuntimeKind::Mono))
            }
            _ => Ok(()),
        }
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{JitKind, PlatformKind};
    use crate::scenario::Expectation;

    fn row(runtime: RuntimeKind) -> ScenarioRow {
        ScenarioRow::new(runtime, JitKind::RyuJit, PlatformKind::X64, Expectation::Ok)
    }

    #[test]
    fn parses_full_config() {
        let env = HostEnvironment::from_json_str(
            r#"{ "os": "linux", "installed_runtimes": ["Core", "Mono"] }"#,
        )
        .unwrap();
        assert_eq!(env.os, HostOs::Linux);
        assert!(env.has_runtime(RuntimeKind::Mono));
        assert!(!env.has_runtime(RuntimeKind::Clr));
    }

    #[test]
    fn missing_fields_fall_back_to_detected_host() {
        let env = HostEnvironment::from_json_str("{}").unwrap();
        assert_eq!(env, HostEnvironment::detect());
    }

    #[test]
    fn default_runtimes_follow_configured_os() {
        let windows = HostEnvironment::from_json_str(r#"{ "os": "windows" }"#).unwrap();
        assert!(windows.has_runtime(RuntimeKind::Clr));
        assert!(windows.has_runtime(RuntimeKind::Core));

        let linux = HostEnvironment::from_json_str(r#"{ "os": "linux" }"#).unwrap();
        assert!(!linux.has_runtime(RuntimeKind::Clr));
        assert!(linux.has_runtime(RuntimeKind::Core));
    }

    #[test]
    fn explicit_runtimes_are_kept() {
        let env =
            HostEnvironment::from_json_str(r#"{ "os": "windows", "installed_runtimes": [] }"#)
                .unwrap();
        assert!(env.installed_runtimes.is_empty());
    }

    #[test]
    fn rejects_unknown_os() {
        let err = HostEnvironment::from_json_str(r#"{ "os": "plan9" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = HostEnvironment::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn clr_rows_need_windows() {
        let linux = HostEnvironment::new(HostOs::Linux, vec![RuntimeKind::Core]);
        assert_eq!(
            linux.admits(&row(RuntimeKind::Clr)),
            Err(SkipReason::RequiresWindows)
        );

        let windows = HostEnvironment::new(HostOs::Windows, vec![RuntimeKind::Clr]);
        assert_eq!(windows.admits(&row(RuntimeKind::Clr)), Ok(()));
    }

    #[test]
    fn mono_rows_need_mono_installed() {
        let without = HostEnvironment::new(HostOs::Linux, vec![RuntimeKind::Core]);
        assert_eq!(
            without.admits(&row(RuntimeKind::Mono)),
            Err(SkipReason::RuntimeNotInstalled(RuntimeKind::Mono))
        );

        let with = HostEnvironment::new(HostOs::Linux, vec![RuntimeKind::Mono]);
        assert_eq!(with.admits(&row(RuntimeKind::Mono)), Ok(()));
    }

    #[test]
    fn core_rows_always_run() {
        let env = HostEnvironment::new(HostOs::MacOs, vec![]);
        assert_eq!(env.admits(&row(RuntimeKind::Core)), Ok(()));
    }
}
