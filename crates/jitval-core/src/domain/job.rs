//! Job descriptor: the (runtime, jit, platform) triple.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::environment::{JitKind, PlatformKind, RuntimeKind};

/// One requested execution configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobDescriptor {
    pub runtime: RuntimeKind,
    pub jit: JitKind,
    pub platform: PlatformKind,
}

impl JobDescriptor {
    pub fn new(runtime: RuntimeKind, jit: JitKind, platform: PlatformKind) -> Self {
        Self {
            runtime,
            jit,
            platform,
        }
    }

    /// Every descriptor in the cross-product, runtime-major.
    pub fn all() -> impl Iterator<Item = JobDescriptor> {
        RuntimeKind::ALL.into_iter().flat_map(|runtime| {
            JitKind::ALL.into_iter().flat_map(move |jit| {
                PlatformKind::ALL
                    .into_iter()
                    .map(move |platform| JobDescriptor::new(runtime, jit, platform))
            })
        })
    }
}

impl fmt::Display for JobDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.runtime, self.jit, self.platform)
    }
}
