//! Environment selectors: runtime, JIT and platform.
//!
//! Closed enumerations. Serialized by their canonical names (`"Clr"`,
//! `"RyuJit"`, `"X64"`, ...), which is also what `Display` prints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The managed runtime a job targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuntimeKind {
    /// Classic full-framework CLR.
    Clr,

    /// Mono-style alternative runtime.
    Mono,

    /// Modern cross-platform runtime built with the dotnet cli toolchain.
    Core,
}

impl RuntimeKind {
    pub const ALL: [RuntimeKind; 3] = [RuntimeKind::Clr, RuntimeKind::Mono, RuntimeKind::Core];

    pub fn name(self) -> &'static str {
        match self {
            RuntimeKind::Clr => "Clr",
            RuntimeKind::Mono => "Mono",
            RuntimeKind::Core => "Core",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which JIT compiler is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JitKind {
    /// The older JIT, no tiering.
    LegacyJit,

    /// The newer optimizing JIT.
    RyuJit,
}

impl JitKind {
    pub const ALL: [JitKind; 2] = [JitKind::LegacyJit, JitKind::RyuJit];

    pub fn name(self) -> &'static str {
        match self {
            JitKind::LegacyJit => "LegacyJit",
            JitKind::RyuJit => "RyuJit",
        }
    }
}

impl fmt::Display for JitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Target processor word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlatformKind {
    X86,
    X64,
}

impl PlatformKind {
    pub const ALL: [PlatformKind; 2] = [PlatformKind::X86, PlatformKind::X64];

    pub fn name(self) -> &'static str {
        match self {
            PlatformKind::X86 => "X86",
            PlatformKind::X64 => "X64",
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_serialize_as_canonical_names() {
        assert_eq!(serde_json::to_string(&RuntimeKind::Core).unwrap(), "\"Core\"");
        assert_eq!(serde_json::to_string(&JitKind::LegacyJit).unwrap(), "\"LegacyJit\"");
        assert_eq!(serde_json::to_string(&PlatformKind::X86).unwrap(), "\"X86\"");
    }

    #[test]
    fn display_matches_serialized_name() {
        for runtime in RuntimeKind::ALL {
            let json = serde_json::to_value(runtime).unwrap();
            assert_eq!(json, serde_json::Value::String(runtime.to_string()));
        }
        for jit in JitKind::ALL {
            let json = serde_json::to_value(jit).unwrap();
            assert_eq!(json, serde_json::Value::String(jit.to_string()));
        }
    }

    #[test]
    fn unknown_runtime_name_is_rejected() {
        let parsed: Result<RuntimeKind, _> = serde_json::from_str("\"Wasm\"");
        assert!(parsed.is_err());
    }
}
