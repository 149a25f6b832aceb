//! Verifier - シナリオ行の検証
//!
//! resolve → (supported なら) engine 実行 → ログに期待文字列が含まれるか
//!
//! A rejected job never reaches the engine. Its log is the validator's error
//! line, which is what a real run would have printed instead of running.

use std::sync::Arc;

use tracing::{info, warn};

use super::report::{RowResult, ScenarioReport, TableReport};
use crate::config::HostEnvironment;
use crate::domain::{CompatibilityResolver, TableResolver, Verdict, render_validation_error};
use crate::error::VerifyError;
use crate::ports::BenchmarkEngine;
use crate::scenario::{ScenarioRow, ScenarioTable};

pub struct Verifier {
    resolver: Arc<dyn CompatibilityResolver>,
    engine: Arc<dyn BenchmarkEngine>,
}

impl Verifier {
    pub fn new(resolver: Arc<dyn CompatibilityResolver>, engine: Arc<dyn BenchmarkEngine>) -> Self {
        Self { resolver, engine }
    }

    /// Verifier using the standard rule table.
    pub fn standard(engine: Arc<dyn BenchmarkEngine>) -> Self {
        Self::new(Arc::new(TableResolver::standard()), engine)
    }

    /// Verify one row.
    pub async fn verify(&self, row: &ScenarioRow) -> Result<ScenarioReport, VerifyError> {
        let job = row.descriptor()?;
        let verdict = self.resolver.resolve(&job);

        let log = match verdict {
            Verdict::Rejected { message, .. } => render_validation_error(message),
            Verdict::Supported => self.engine.run(&job).await?,
        };

        let expected = row.expected.expected_text();
        let passed = log.contains(expected);
        let label = row.label();
        if passed {
            info!(row = %label, "scenario passed");
        } else {
            warn!(row = %label, expected, log = %log, "scenario failed");
        }

        Ok(ScenarioReport {
            label,
            job,
            verdict,
            expected: expected.to_string(),
            log,
            passed,
        })
    }

    /// Run every row of `table` that `host` admits.
    ///
    /// Each row is packed into its field map and rebuilt before verification,
    /// the same path a data-driven test runner takes.
    pub async fn run_table(&self, table: &ScenarioTable, host: &HostEnvironment) -> TableReport {
        let mut results = Vec::with_capacity(table.rows.len());
        for row in &table.rows {
            let label = row.label();
            if let Err(reason) = host.admits(row) {
                warn!(row = %label, %reason, "scenario skipped");
                results.push(RowResult::Skipped { label, reason });
                continue;
            }

            let outcome = match row.to_fields().and_then(|f| ScenarioRow::from_fields(&f)) {
                Ok(transported) => self.verify(&transported).await,
                Err(e) => Err(e.into()),
            };
            let result = match outcome {
                Ok(report) => report.into(),
                Err(e) => {
                    warn!(row = %label, error = %e, "scenario errored");
                    RowResult::Errored {
                        label,
                        error: e.to_string(),
                    }
                }
            };
            results.push(result);
        }
        TableReport {
            table: table.name,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HostOs, SkipReason};
    use crate::domain::{
        JitKind, JobDescriptor, LEGACY_JIT_NOT_AVAILABLE_FOR_MONO, OK_CAPTION, PlatformKind,
        RYU_JIT_NOT_AVAILABLE, RuntimeKind, TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT,
    };
    use crate::error::EngineError;
    use crate::impls::DryRunEngine;
    use crate::scenario::{Expectation, core_table, mono_table, windows_table};
    use crate::typed::ParameterEnvelope;
    use async_trait::async_trait;
    use rstest::rstest;

    struct FailingEngine;

    #[async_trait]
    impl BenchmarkEngine for FailingEngine {
        async fn run(&self, _job: &JobDescriptor) -> Result<String, EngineError> {
            Err(EngineError::Failed("process crashed".to_string()))
        }
    }

    fn everything_host() -> HostEnvironment {
        HostEnvironment::new(HostOs::Windows, RuntimeKind::ALL.to_vec())
    }

    #[rstest]
    #[case::clr_legacy_x86(RuntimeKind::Clr, JitKind::LegacyJit, PlatformKind::X86, OK_CAPTION)]
    #[case::clr_ryujit_x86(RuntimeKind::Clr, JitKind::RyuJit, PlatformKind::X86, RYU_JIT_NOT_AVAILABLE)]
    #[case::clr_ryujit_x64(RuntimeKind::Clr, JitKind::RyuJit, PlatformKind::X64, OK_CAPTION)]
    #[case::core_legacy_x64(RuntimeKind::Core, JitKind::LegacyJit, PlatformKind::X64, TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT)]
    #[case::core_ryujit_x64(RuntimeKind::Core, JitKind::RyuJit, PlatformKind::X64, OK_CAPTION)]
    #[case::mono_legacy_x64(RuntimeKind::Mono, JitKind::LegacyJit, PlatformKind::X64, LEGACY_JIT_NOT_AVAILABLE_FOR_MONO)]
    #[tokio::test]
    async fn log_contains_expected_text(
        #[case] runtime: RuntimeKind,
        #[case] jit: JitKind,
        #[case] platform: PlatformKind,
        #[case] expected: &str,
    ) {
        let verifier = Verifier::standard(Arc::new(DryRunEngine::new()));
        let expectation = if expected == OK_CAPTION {
            Expectation::Ok
        } else {
            Expectation::error(expected)
        };
        let row = ScenarioRow::new(runtime, jit, platform, expectation);

        let report = verifier.verify(&row).await.unwrap();
        assert!(report.passed, "log was: {}", report.log);
        assert!(report.log.contains(expected));
    }

    #[tokio::test]
    async fn rejected_job_never_reaches_engine() {
        let engine = Arc::new(DryRunEngine::new());
        let verifier = Verifier::standard(engine.clone());
        let row = ScenarioRow::new(
            RuntimeKind::Core,
            JitKind::LegacyJit,
            PlatformKind::X86,
            Expectation::error(TOOLCHAIN_SUPPORTS_ONLY_RYU_JIT),
        );

        let report = verifier.verify(&row).await.unwrap();
        assert_eq!(
            report.log,
            "// ERROR:  Currently dotnet cli toolchain supports only RyuJit"
        );
        assert_eq!(engine.runs(), 0);
    }

    #[tokio::test]
    async fn wrong_expectation_is_reported_as_failure() {
        let verifier = Verifier::standard(Arc::new(DryRunEngine::new()));
        let row = ScenarioRow::new(
            RuntimeKind::Clr,
            JitKind::RyuJit,
            PlatformKind::X86,
            Expectation::Ok,
        );

        let report = verifier.verify(&row).await.unwrap();
        assert!(!report.passed);
        assert!(!report.verdict.is_supported());
    }

    #[tokio::test]
    async fn engine_failure_is_an_error() {
        let verifier = Verifier::standard(Arc::new(FailingEngine));
        let row = ScenarioRow::new(
            RuntimeKind::Core,
            JitKind::RyuJit,
            PlatformKind::X64,
            Expectation::Ok,
        );

        let err = verifier.verify(&row).await.unwrap_err();
        assert!(matches!(err, VerifyError::Engine(_)));
    }

    #[tokio::test]
    async fn empty_runtime_envelope_is_an_error() {
        let verifier = Verifier::standard(Arc::new(DryRunEngine::new()));
        let mut row = ScenarioRow::new(
            RuntimeKind::Core,
            JitKind::RyuJit,
            PlatformKind::X64,
            Expectation::Ok,
        );
        row.runtime = ParameterEnvelope::default();

        let err = verifier.verify(&row).await.unwrap_err();
        assert!(matches!(err, VerifyError::Envelope(_)));

        let report = verifier
            .run_table(
                &ScenarioTable {
                    name: "broken",
                    rows: vec![row],
                },
                &everything_host(),
            )
            .await;
        assert_eq!(report.counts().errored, 1);
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn all_tables_pass_on_fully_equipped_host() {
        let verifier = Verifier::standard(Arc::new(DryRunEngine::new()));
        let host = everything_host();
        for table in [windows_table(), core_table(), mono_table()] {
            let report = verifier.run_table(&table, &host).await;
            assert!(report.is_success(), "table {} failed", table.name);
            assert_eq!(report.counts().passed, table.rows.len());
        }
    }

    #[tokio::test]
    async fn linux_host_skips_clr_and_mono_rows() {
        let engine = Arc::new(DryRunEngine::new());
        let verifier = Verifier::standard(engine.clone());
        let host = HostEnvironment::new(HostOs::Linux, vec![RuntimeKind::Core]);

        let windows = verifier.run_table(&windows_table(), &host).await;
        assert_eq!(windows.counts().skipped, 4);
        assert!(windows.results.iter().all(|r| matches!(
            r,
            RowResult::Skipped {
                reason: SkipReason::RequiresWindows,
                ..
            }
        )));

        let mono = verifier.run_table(&mono_table(), &host).await;
        assert_eq!(mono.counts().skipped, 4);

        let core = verifier.run_table(&core_table(), &host).await;
        assert_eq!(core.counts().passed, 3);
        assert_eq!(engine.runs(), 1);
    }
}
