use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::error;

use jitval_core::app::{RowResult, TableReport, Verifier};
use jitval_core::config::HostEnvironment;
use jitval_core::impls::DryRunEngine;
use jitval_core::scenario::{ScenarioTable, all_tables, core_table, mono_table, windows_table};

/// Check which runtime / JIT / platform jobs this host can run.
#[derive(Debug, Parser)]
#[command(name = "jitval", version)]
struct Args {
    /// Host environment JSON. Detected from the running host when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Table to run.
    #[arg(long, value_enum, default_value_t = TableChoice::All)]
    table: TableChoice,

    /// Print the reports as JSON instead of one line per row.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableChoice {
    Windows,
    Core,
    Mono,
    All,
}

fn select_tables(choice: TableChoice) -> Vec<ScenarioTable> {
    match choice {
        TableChoice::Windows => vec![windows_table()],
        TableChoice::Core => vec![core_table()],
        TableChoice::Mono => vec![mono_table()],
        TableChoice::All => all_tables(),
    }
}

fn print_report(report: &TableReport) {
    println!("[{}]", report.table);
    for result in &report.results {
        match result {
            RowResult::Passed(r) => println!("  ok      {}", r.label),
            RowResult::Failed(r) => println!(
                "  FAILED  {} (expected {:?}, log {:?})",
                r.label, r.expected, r.log
            ),
            RowResult::Skipped { label, reason } => println!("  skip    {label}: {reason}"),
            RowResult::Errored { label, error } => println!("  ERROR   {label}: {error}"),
        }
    }
    let c = report.counts();
    println!(
        "  passed={} failed={} skipped={} errored={}",
        c.passed, c.failed, c.skipped, c.errored
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let args = Args::parse();

    // (A) ホスト環境
    let host = match &args.config {
        Some(path) => match HostEnvironment::load(path) {
            Ok(host) => host,
            Err(e) => {
                error!(error = %e, "failed to load host config");
                return ExitCode::from(2);
            }
        },
        None => HostEnvironment::detect(),
    };

    // (B) テーブル選択
    let tables = select_tables(args.table);

    // (C) 検証（エンジンは dry run）
    let verifier = Verifier::standard(Arc::new(DryRunEngine::new()));
    let mut reports = Vec::with_capacity(tables.len());
    for table in &tables {
        reports.push(verifier.run_table(table, &host).await);
    }

    // (D) 出力
    if args.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!(error = %e, "failed to encode report");
                return ExitCode::from(2);
            }
        }
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if reports.iter().all(TableReport::is_success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
