//! Cross-process determinism test.
//!
//! Spawns the `verify_fixture` binary under three environment variants and
//! asserts that all produce identical output. This proves that the suite
//! report (and its digest) is not influenced by process-level state
//! (cwd, locale, env vars, log filters).

use std::path::Path;
use std::process::Command;

/// Resolve the path to the compiled binary.
///
/// `cargo test` puts test binaries in `target/debug/deps/`; the
/// `verify_fixture` binary lives one directory up.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("verify_fixture");
    path.to_string_lossy().to_string()
}

/// Output of one fixture run.
struct Run {
    stdout: String,
    stderr: String,
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> Run {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);
    command
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}",
            work_dir.display()
        )
    });

    assert!(
        output.status.success(),
        "verify_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    Run {
        stdout: String::from_utf8(output.stdout).expect("stdout is valid UTF-8"),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

fn field<'a>(output: &'a str, key: &str) -> &'a str {
    output
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix('='))
        .unwrap_or_else(|| panic!("missing {key} in output:\n{output}"))
}

#[test]
fn crossproc_determinism_three_env_variants() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists");
    let baseline = run_variant(workspace_root, &[]);

    let tmp = tempfile::tempdir().expect("create temp dir");
    let moved = run_variant(tmp.path(), &[("LANG", "C")]);

    let noisy = run_variant(
        tmp.path(),
        &[("LC_ALL", "tr_TR.UTF-8"), ("RUST_LOG", "debug")],
    );

    assert!(
        baseline.stderr.is_empty(),
        "default filter should be silent: {}",
        baseline.stderr
    );
    assert!(
        noisy.stderr.contains("suite finished"),
        "RUST_LOG=debug produced no suite log: {}",
        noisy.stderr
    );

    assert_eq!(baseline.stdout, moved.stdout, "cwd/locale changed the report");
    assert_eq!(baseline.stdout, noisy.stdout, "log filter changed the report");
}

#[test]
fn fixture_reports_passing_suite() {
    let output = run_variant(Path::new(env!("CARGO_MANIFEST_DIR")), &[]).stdout;
    assert_eq!(field(&output, "failed"), "0");
    assert_eq!(field(&output, "total"), field(&output, "passed"));
    assert!(field(&output, "report_digest").starts_with("sha256:"));

    let worse = field(&output, "adaptive_worse");
    assert!(worse.split(',').any(|pair| pair == "3:0"));
    assert!(worse.split(',').any(|pair| pair == "4:0"));
}
