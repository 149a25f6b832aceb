//! Domain model (selectors, job descriptor, verdict, resolver).

pub mod environment;
pub mod job;
pub mod resolver;
pub mod verdict;

pub use environment::{JitKind, PlatformKind, RuntimeKind};
pub use job::JobDescriptor;
pub use resolver::{CompatibilityResolver, Rule, STANDARD_RULES, TableResolver, resolve};
pub use verdict::{
    LEGACY_JIT_NOT_AVAILABLE_FOR_MONO, OK_CAPTION, RYU_JIT_NOT_AVAILABLE, RejectReason,
    TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT, VALIDATION_ERROR_PREFIX, Verdict, render_validation_error,
};
