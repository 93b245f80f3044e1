use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static DECANT_BIN: OnceLock<PathBuf> = OnceLock::new();

/// Fixture path as a command-line argument.
pub(crate) fn fixture_arg(name: &str) -> String {
	decant_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_decant(args: &[&str]) -> Output {
	Command::new(decant_bin()).args(args).output().expect("decant command executes")
}

/// Run a `--json` command that must succeed and return its stdout report.
pub(crate) fn run_decant_json(args: &[&str]) -> serde_json::Value {
	let output = run_decant(args);
	assert!(
		output.status.success(),
		"decant command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run a `--json` command that must fail cleanly.
///
/// The error report goes to stdout while the one-line `error:` message goes to
/// stderr; both are checked so an abort or panic never passes as a decode failure.
pub(crate) fn run_decant_json_failure(args: &[&str]) -> serde_json::Value {
	let output = run_decant(args);
	assert_eq!(output.status.code(), Some(1), "expected exit status 1, got {}", output.status);

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "), "stderr should carry the error line: {stderr}");

	let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(report["ok"], false, "failure report should set ok=false");
	report
}

fn decant_bin() -> &'static PathBuf {
	DECANT_BIN.get_or_init(resolve_decant_bin)
}

fn resolve_decant_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_decant") {
		return PathBuf::from(path);
	}

	let mut bin = decant_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "decant.exe" } else { "decant" });

	let status = Command::new("cargo")
		.current_dir(decant_testkit::workspace_root())
		.args(["build", "--quiet", "--bin", "decant"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build decant binary at {}", bin.display());

	bin
}
