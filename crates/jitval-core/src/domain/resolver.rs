//! Compatibility resolver: can this host run the requested job?
//!
//! The resolver is a pure function of the descriptor. It is implemented as an
//! ordered rule table; the first matching rule wins, so specific rows must be
//! listed before general ones for the same runtime.

use tracing::debug;

use super::environment::{JitKind, PlatformKind, RuntimeKind};
use super::job::JobDescriptor;
use super::verdict::{
    LEGACY_JIT_NOT_AVAILABLE_FOR_MONO, RYU_JIT_NOT_AVAILABLE, RejectReason,
    TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT, Verdict,
};

/// Trait for deciding whether a job can run on the current host.
///
/// Implementations must be pure: same descriptor, same verdict, no side effects.
pub trait CompatibilityResolver: Send + Sync {
    fn resolve(&self, job: &JobDescriptor) -> Verdict;
}

/// One row of the decision table.
///
/// `None` in `jit` or `platform` matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub runtime: RuntimeKind,
    pub jit: Option<JitKind>,
    pub platform: Option<PlatformKind>,
    pub verdict: Verdict,
}

impl Rule {
    pub const fn supported(
        runtime: RuntimeKind,
        jit: Option<JitKind>,
        platform: Option<PlatformKind>,
    ) -> Self {
        Self {
            runtime,
            jit,
            platform,
            verdict: Verdict::Supported,
        }
    }

    pub const fn rejected(
        runtime: RuntimeKind,
        jit: Option<JitKind>,
        platform: Option<PlatformKind>,
        reason: RejectReason,
        message: &'static str,
    ) -> Self {
        Self {
            runtime,
            jit,
            platform,
            verdict: Verdict::Rejected { reason, message },
        }
    }

    pub fn matches(&self, job: &JobDescriptor) -> bool {
        self.runtime == job.runtime
            && self.jit.is_none_or(|jit| jit == job.jit)
            && self.platform.is_none_or(|platform| platform == job.platform)
    }
}

/// The rules for the validating environment, in precedence order.
///
/// Mono is not installed there, so both JITs are rejected for it.
pub const STANDARD_RULES: &[Rule] = &[
    // Mono
    Rule::rejected(
        RuntimeKind::Mono,
        Some(JitKind::LegacyJit),
        None,
        RejectReason::JitUnavailableOnRuntime,
        LEGACY_JIT_NOT_AVAILABLE_FOR_MONO,
    ),
    Rule::rejected(
        RuntimeKind::Mono,
        Some(JitKind::RyuJit),
        None,
        RejectReason::JitUnavailableOnRuntime,
        RYU_JIT_NOT_AVAILABLE,
    ),
    // dotnet cli toolchain only ever builds with RyuJit
    Rule::rejected(
        RuntimeKind::Core,
        Some(JitKind::LegacyJit),
        None,
        RejectReason::ToolchainForcesModernJit,
        TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT,
    ),
    Rule::supported(RuntimeKind::Core, Some(JitKind::RyuJit), None),
    // Clr
    Rule::supported(RuntimeKind::Clr, Some(JitKind::LegacyJit), None),
    Rule::supported(
        RuntimeKind::Clr,
        Some(JitKind::RyuJit),
        Some(PlatformKind::X64),
    ),
    Rule::rejected(
        RuntimeKind::Clr,
        Some(JitKind::RyuJit),
        Some(PlatformKind::X86),
        RejectReason::RyuJitRequiresX64OnClassicRuntime,
        RYU_JIT_NOT_AVAILABLE,
    ),
];

/// Resolver backed by an ordered rule table.
///
/// A descriptor that no rule matches means the enumerations grew without a
/// matching rule. That is a programming error and `resolve` panics.
#[derive(Debug, Clone, Copy)]
pub struct TableResolver {
    rules: &'static [Rule],
}

impl TableResolver {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// Resolver for the standard validating environment.
    pub const fn standard() -> Self {
        Self::new(STANDARD_RULES)
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl CompatibilityResolver for TableResolver {
    fn resolve(&self, job: &JobDescriptor) -> Verdict {
        let Some(rule) = self.rules.iter().find(|rule| rule.matches(job)) else {
            panic!("incomplete rule table: no rule matches job {job}");
        };
        debug!(%job, verdict = ?rule.verdict, "resolved job");
        rule.verdict
    }
}

/// Resolve a job against the standard rules.
pub fn resolve(job: &JobDescriptor) -> Verdict {
    TableResolver::standard().resolve(job)
}
