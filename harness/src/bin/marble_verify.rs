//! `marble-verify`: runs the verification suite and reports the outcome.
//!
//! Exit status:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | every scenario passed |
//! | 1 | at least one scenario failed |
//! | 2 | the requested configuration is invalid; nothing ran |
//! | 3 | the report could not be written to stdout |
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`); the report goes to stdout.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

use marble_harness::policy::{VerifierPolicy, DEFAULT_SWEEP_FLOORS};
use marble_harness::runner::run_policy;
use marble_kernel::mock::RangePolicy;
use marble_kernel::probe::Floor;

const EXIT_SCENARIO_FAILED: u8 = 1;
const EXIT_INVALID_CONFIG: u8 = 2;
const EXIT_WRITE_FAILED: u8 = 3;

#[derive(Debug, Parser)]
#[command(
    name = "marble-verify",
    about = "Check that linear and adaptive threshold search agree"
)]
struct Cli {
    /// Largest building in the (floors, threshold) sweep.
    #[arg(long, default_value_t = DEFAULT_SWEEP_FLOORS)]
    max_floors: Floor,

    /// Run only the pinned reference table.
    #[arg(long)]
    reference_only: bool,

    /// Skip the drop-count property checks.
    #[arg(long)]
    no_bounds: bool,

    /// Stop at the first failing scenario.
    #[arg(long)]
    fail_fast: bool,

    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,

    /// Let buildings answer drops outside [1, floors] instead of rejecting them.
    #[arg(long)]
    tolerant: bool,
}

impl Cli {
    fn policy(&self) -> VerifierPolicy {
        VerifierPolicy {
            max_floors: self.max_floors,
            include_sweep: !self.reference_only,
            check_drop_bounds: !self.no_bounds,
            fail_fast: self.fail_fast,
            range_policy: if self.tolerant {
                RangePolicy::Tolerant
            } else {
                RangePolicy::Strict
            },
            ..VerifierPolicy::default()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = match run_policy(&cli.policy()) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("marble-verify: invalid configuration: {e}");
            return ExitCode::from(EXIT_INVALID_CONFIG);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let written = if cli.json {
        report
            .to_json_bytes()
            .map_err(std::io::Error::other)
            .and_then(|bytes| {
                stdout.write_all(&bytes)?;
                writeln!(stdout)?;
                stdout.flush()
            })
    } else {
        report
            .digest()
            .map_err(std::io::Error::other)
            .and_then(|digest| {
                stdout.write_all(report.render_text().as_bytes())?;
                writeln!(stdout, "report_digest={digest}")?;
                stdout.flush()
            })
    };
    if let Err(e) = written {
        eprintln!("marble-verify: failed to write report: {e}");
        return ExitCode::from(EXIT_WRITE_FAILED);
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        for record in report.failures() {
            eprintln!(
                "marble-verify: ({}, {}) failed: {}",
                record.number_floors,
                record.threshold,
                record.failure.as_deref().unwrap_or("unknown")
            );
        }
        ExitCode::from(EXIT_SCENARIO_FAILED)
    }
}
