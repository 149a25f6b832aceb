//! Verdict model: what the resolver says about a job.
//!
//! A rejection is data, not an error. Callers branch on it.

use serde::{Deserialize, Serialize};

/// Emitted when LegacyJit is requested on Mono.
pub const LEGACY_JIT_NOT_AVAILABLE_FOR_MONO: &str =
    "LegacyJIT is requested but it is not available for Mono";

/// Emitted when RyuJit cannot be provided by the host.
pub const RYU_JIT_NOT_AVAILABLE: &str =
    "RyuJIT is requested but it is not available in current environment";

/// Emitted when LegacyJit is requested for the dotnet cli toolchain.
pub const TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT: &str =
    "Currently dotnet cli toolchain supports only RyuJit";

/// Marker printed by a benchmark that actually ran.
pub const OK_CAPTION: &str = "// OkCaption";

/// Prefix the validator puts in front of a rejection in the execution log.
pub const VALIDATION_ERROR_PREFIX: &str = "// ERROR:  ";

/// Machine-readable reason for a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The runtime cannot provide the requested JIT at all.
    JitUnavailableOnRuntime,

    /// The toolchain always builds with RyuJit.
    ToolchainForcesModernJit,

    /// RyuJit on the classic runtime is 64-bit only.
    RyuJitRequiresX64OnClassicRuntime,
}

/// The resolver's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Supported,
    Rejected {
        reason: RejectReason,
        message: &'static str,
    },
}

impl Verdict {
    pub fn rejected(reason: RejectReason, message: &'static str) -> Self {
        Verdict::Rejected { reason, message }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Verdict::Supported)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Verdict::Supported => None,
            Verdict::Rejected { message, .. } => Some(message),
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Supported => None,
            Verdict::Rejected { reason, .. } => Some(*reason),
        }
    }
}

/// Renders a rejection the way the validator writes it into the execution log.
pub fn render_validation_error(message: &str) -> String {
    format!("{VALIDATION_ERROR_PREFIX}{message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_exposes_reason_and_message() {
        let v = Verdict::rejected(
            RejectReason::ToolchainForcesModernJit,
            TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT,
        );
        assert!(!v.is_supported());
        assert_eq!(v.reason(), Some(RejectReason::ToolchainForcesModernJit));
        assert_eq!(v.message(), Some(TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT));
    }

    #[test]
    fn supported_has_no_message() {
        assert!(Verdict::Supported.is_supported());
        assert_eq!(Verdict::Supported.message(), None);
        assert_eq!(Verdict::Supported.reason(), None);
    }

    #[test]
    fn validation_error_uses_log_prefix() {
        assert_eq!(
            render_validation_error(RYU_JIT_NOT_AVAILABLE),
            "// ERROR:  RyuJIT is requested but it is not available in current environment"
        );
    }

    #[test]
    fn verdict_serializes_with_tag() {
        let v = Verdict::rejected(
            RejectReason::JitUnavailableOnRuntime,
            LEGACY_JIT_NOT_AVAILABLE_FOR_MONO,
        );
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["verdict"], "rejected");
        assert_eq!(json["reason"], "JitUnavailableOnRuntime");
    }
}
