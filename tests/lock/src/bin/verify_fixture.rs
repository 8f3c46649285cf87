//! Binary that runs the default verification suite and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `verify_fixture`
//!
//! Output: key=value lines on stdout (see source for format). Logs go to
//! stderr, filtered by `RUST_LOG` (default `off`).

use marble_harness::policy::VerifierPolicy;
use marble_harness::runner::run_policy;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "off".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = run_policy(&VerifierPolicy::default()).expect("default policy is valid");
    let digest = report.digest().expect("report serializes");

    let worse: Vec<String> = report
        .summary
        .adaptive_worse
        .iter()
        .map(|(n, h)| format!("{n}:{h}"))
        .collect();

    println!("report_digest={digest}");
    println!("total={}", report.summary.total);
    println!("passed={}", report.summary.passed);
    println!("failed={}", report.summary.failed);
    println!("adaptive_worse_count={}", worse.len());
    println!("adaptive_worse={}", worse.join(","));
}
