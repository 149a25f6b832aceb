//! Scenario tables: (runtime, jit, platform, expected log text) rows.

use serde::{Deserialize, Serialize};

use crate::domain::{
    JitKind, JobDescriptor, LEGACY_JIT_NOT_AVAILABLE_FOR_MONO, OK_CAPTION, PlatformKind,
    RYU_JIT_NOT_AVAILABLE, RuntimeKind, TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT, render_validation_error,
};
use crate::error::EnvelopeError;
use crate::typed::{FieldMap, Param, ParameterEnvelope};

/// What the execution log of a row must contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Expectation {
    /// The benchmark ran and printed [`OK_CAPTION`].
    Ok,

    /// The log contains this text. For validator rejections that is usually
    /// the rendered `// ERROR:  ...` line.
    Error(String),
}

impl Expectation {
    pub fn error(message: impl Into<String>) -> Self {
        Expectation::Error(message.into())
    }

    /// Expect the validator's rendered error line for `message`.
    pub fn validation_error(message: &str) -> Self {
        Expectation::Error(render_validation_error(message))
    }

    pub fn expected_text(&self) -> &str {
        match self {
            Expectation::Ok => OK_CAPTION,
            Expectation::Error(message) => message,
        }
    }
}

/// One row of a scenario table.
///
/// The runtime travels in a `ParameterEnvelope`, so a row can be rebuilt from
/// its field map with [`ScenarioRow::from_fields`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    pub runtime: ParameterEnvelope<RuntimeKind>,
    pub jit: JitKind,
    pub platform: PlatformKind,
    pub expected: Expectation,
}

impl ScenarioRow {
    const EXPECTED_FIELD: &'static str = "Expected";

    pub fn new(
        runtime: RuntimeKind,
        jit: JitKind,
        platform: PlatformKind,
        expected: Expectation,
    ) -> Self {
        Self {
            runtime: ParameterEnvelope::new(runtime),
            jit,
            platform,
            expected,
        }
    }

    pub fn descriptor(&self) -> Result<JobDescriptor, EnvelopeError> {
        Ok(JobDescriptor::new(
            *self.runtime.value()?,
            self.jit,
            self.platform,
        ))
    }

    /// `"Runtime = Core, Jit = RyuJit, Platform = X64"`
    pub fn label(&self) -> String {
        format!(
            "{}, {}, {}",
            self.runtime,
            self.jit.label(),
            self.platform.label()
        )
    }

    pub fn to_fields(&self) -> Result<FieldMap, EnvelopeError> {
        let mut fields = FieldMap::new();
        self.runtime.serialize_into(&mut fields)?;
        fields.add_value(JitKind::FIELD, &self.jit)?;
        fields.add_value(PlatformKind::FIELD, &self.platform)?;
        fields.add_value(Self::EXPECTED_FIELD, &self.expected)?;
        Ok(fields)
    }

    pub fn from_fields(fields: &FieldMap) -> Result<Self, EnvelopeError> {
        let mut runtime = ParameterEnvelope::default();
        runtime.deserialize(fields)?;
        Ok(Self {
            runtime,
            jit: fields.get_value(JitKind::FIELD)?,
            platform: fields.get_value(PlatformKind::FIELD)?,
            expected: fields.get_value(Self::EXPECTED_FIELD)?,
        })
    }
}

/// A named group of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioTable {
    pub name: &'static str,
    pub rows: Vec<ScenarioRow>,
}

/// Clr rows. Only meaningful on Windows.
pub fn windows_table() -> ScenarioTable {
    use JitKind::*;
    use PlatformKind::*;
    let clr = RuntimeKind::Clr;
    ScenarioTable {
        name: "windows",
        rows: vec![
            ScenarioRow::new(clr, LegacyJit, X86, Expectation::Ok),
            ScenarioRow::new(clr, LegacyJit, X64, Expectation::Ok),
            ScenarioRow::new(
                clr,
                RyuJit,
                X86,
                Expectation::validation_error(RYU_JIT_NOT_AVAILABLE),
            ),
            ScenarioRow::new(clr, RyuJit, X64, Expectation::Ok),
        ],
    }
}

/// dotnet cli toolchain rows.
pub fn core_table() -> ScenarioTable {
    use JitKind::*;
    use PlatformKind::*;
    let core = RuntimeKind::Core;
    let only_ryu_jit = || Expectation::error(TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT);
    ScenarioTable {
        name: "core",
        rows: vec![
            ScenarioRow::new(core, LegacyJit, X86, only_ryu_jit()),
            ScenarioRow::new(core, LegacyJit, X64, only_ryu_jit()),
            ScenarioRow::new(core, RyuJit, X64, Expectation::Ok),
        ],
    }
}

/// Mono rows. Skipped unless Mono is installed on the host.
pub fn mono_table() -> ScenarioTable {
    use JitKind::*;
    use PlatformKind::*;
    let mono = RuntimeKind::Mono;
    let legacy = || Expectation::validation_error(LEGACY_JIT_NOT_AVAILABLE_FOR_MONO);
    let ryu = || Expectation::validation_error(RYU_JIT_NOT_AVAILABLE);
    ScenarioTable {
        name: "mono",
        rows: vec![
            ScenarioRow::new(mono, LegacyJit, X86, legacy()),
            ScenarioRow::new(mono, LegacyJit, X64, legacy()),
            ScenarioRow::new(mono, RyuJit, X86, ryu()),
            ScenarioRow::new(mono, RyuJit, X64, ryu()),
        ],
    }
}

pub fn all_tables() -> Vec<ScenarioTable> {
    vec![windows_table(), core_table(), mono_table()]
}
