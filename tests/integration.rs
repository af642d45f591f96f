//! End-to-end tests for the collection-runner binary
//!
//! Each test gets its own working directory and config directory, and on
//! Linux a fake `newman` script configured through `config.toml` that writes
//! a canned run summary.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Test context with paths and cleanup
struct TestContext {
    /// Working directory the binary runs in
    work_dir: PathBuf,
    /// Config directory (XDG_CONFIG_HOME)
    config_dir: PathBuf,
    /// Scratch directory for fake runner input/output
    scratch_dir: PathBuf,
}

impl TestContext {
    /// Create a new test context
    fn new(test_name: &str) -> Self {
        let temp_dir = env::temp_dir()
            .join("collection-runner-tests")
            .join(test_name);

        // Clean up any previous test artifacts
        let _ = fs::remove_dir_all(&temp_dir);

        let work_dir = temp_dir.join("work");
        let config_dir = temp_dir.join("config");
        let scratch_dir = temp_dir.join("scratch");
        for dir in [&work_dir, &config_dir, &scratch_dir] {
            fs::create_dir_all(dir).expect("Failed to create test dir");
        }

        Self {
            work_dir,
            config_dir,
            scratch_dir,
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write input file");
        path
    }

    fn write_collection(&self) {
        self.write(
            "collection.json",
            r#"{"info": {"name": "users", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"}, "item": []}"#,
        );
    }

    /// Install a fake newman that records its arguments and exports `summary`
    #[cfg(target_os = "linux")]
    fn install_fake_newman(&self, summary: Option<&str>) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.scratch_dir.join("newman");
        let export = match summary {
            Some(summary) => {
                let summary_file = self.scratch_dir.join("summary.json");
                fs::write(&summary_file, summary).expect("Failed to write summary");
                format!("cp '{}' \"$out\"", summary_file.display())
            }
            None => String::from(":"),
        };
        let content = format!(
            r#"#!/bin/sh
printf '%s\n' "$@" > '{args}'
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --reporter-json-export) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
{export}
exit 1
"#,
            args = self.args_file().display(),
            export = export,
        );
        fs::write(&script, content).expect("Failed to write fake newman");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake newman");

        self.write_config(&format!("[runner]\nprogram = \"{}\"\n", script.display()));
    }

    fn write_config(&self, content: &str) {
        let dir = self.config_dir.join("collection-runner");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    fn args_file(&self) -> PathBuf {
        self.scratch_dir.join("args.txt")
    }

    /// Arguments the fake newman was invoked with
    fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.args_file())
            .expect("fake newman was not invoked")
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_collection-runner"))
            .args(args)
            .current_dir(&self.work_dir)
            .env("XDG_CONFIG_HOME", &self.config_dir)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run collection-runner")
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_missing_default_collection_exits_1() {
    let ctx = TestContext::new("missing_default_collection");

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("./collection.json"));
}

#[test]
fn test_missing_explicit_collection_exits_1() {
    let ctx = TestContext::new("missing_explicit_collection");

    let output = ctx.run(&["--collection", "api/missing.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("api/missing.json"));
}

#[test]
fn test_malformed_collection_exits_4() {
    let ctx = TestContext::new("malformed_collection");
    ctx.write("collection.json", "{\"item\": [");

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("collection.json"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_collection_does_not_invoke_runner() {
    let ctx = TestContext::new("missing_collection_no_runner");
    ctx.install_fake_newman(Some(r#"{"run": {"failures": []}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!ctx.args_file().exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_runner_not_found_exits_2() {
    let ctx = TestContext::new("runner_not_found");
    ctx.write_collection();
    ctx.write_config("[runner]\nprogram = \"/nonexistent/newman\"\n");

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_successful_run_exits_0() {
    let ctx = TestContext::new("successful_run");
    ctx.write_collection();
    ctx.install_fake_newman(Some(r#"{"run": {"stats": {}, "failures": []}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("completed successfully"));

    // No env.json or dataset.json in the working directory
    let args = ctx.recorded_args();
    assert_eq!(args[0], "run");
    assert!(!args.contains(&"-e".to_string()));
    assert!(!args.contains(&"-d".to_string()));
    assert!(args
        .windows(2)
        .any(|w| w[0] == "--reporters" && w[1] == "cli,json"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_failures_exit_3() {
    let ctx = TestContext::new("failures");
    ctx.write_collection();
    ctx.install_fake_newman(Some(r#"{"run": {"failures": [{"error": {}}, {"error": {}}]}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("Failures: 2"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_run_error_exits_2() {
    let ctx = TestContext::new("run_error");
    ctx.write_collection();
    ctx.install_fake_newman(Some(
        r#"{"run": {"error": {"message": "connect ECONNREFUSED"}, "failures": [{}]}}"#,
    ));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("ECONNREFUSED"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_runner_without_summary_exits_2() {
    let ctx = TestContext::new("runner_without_summary");
    ctx.write_collection();
    ctx.install_fake_newman(None);

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(target_os = "linux")]
#[test]
fn test_summary_without_failure_list_exits_0() {
    let ctx = TestContext::new("summary_without_failures");
    ctx.write_collection();
    ctx.install_fake_newman(Some(r#"{"collection": {}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(0));
}

#[cfg(target_os = "linux")]
#[test]
fn test_environment_and_data_passed_through() {
    let ctx = TestContext::new("environment_and_data");
    ctx.write_collection();
    ctx.write("staging.json", r#"{"values": [{"key": "baseUrl", "value": "http://localhost"}]}"#);
    ctx.write("users.csv", "name,email\nada,ada@example.com\n");
    ctx.install_fake_newman(Some(r#"{"run": {"failures": []}}"#));

    let output = ctx.run(&["--env", "staging.json", "--data", "users.csv"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let args = ctx.recorded_args();
    let env_pos = args.iter().position(|a| a == "-e").expect("missing -e");
    // The environment is re-serialized to a scratch file
    assert!(args[env_pos + 1].ends_with("environment.json"));
    let data_pos = args.iter().position(|a| a == "-d").expect("missing -d");
    // The dataset path is passed through untouched
    assert_eq!(args[data_pos + 1], "users.csv");
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_config_exits_4() {
    let ctx = TestContext::new("invalid_config");
    ctx.write_collection();
    ctx.write_config("[runner\n");

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(4));
}

#[cfg(target_os = "linux")]
#[test]
fn test_missing_collection_wins_over_invalid_config() {
    let ctx = TestContext::new("missing_collection_invalid_config");
    ctx.write_config("[runner\n");

    let output = ctx.run(&["--collection", "absent.json"]);
    assert_eq!(output.status.code(), Some(1), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("absent.json"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_environment_and_data_picked_up() {
    let ctx = TestContext::new("default_environment_and_data");
    ctx.write_collection();
    ctx.write("env.json", r#"{"values": [{"key": "baseUrl", "value": "http://localhost"}]}"#);
    ctx.write("dataset.json", r#"[{"name": "ada"}]"#);
    ctx.install_fake_newman(Some(r#"{"run": {"failures": []}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let args = ctx.recorded_args();
    let env_pos = args.iter().position(|a| a == "-e").expect("missing -e");
    assert!(args[env_pos + 1].ends_with("environment.json"));
    let data_pos = args.iter().position(|a| a == "-d").expect("missing -d");
    assert_eq!(args[data_pos + 1], "./dataset.json");
}

#[cfg(target_os = "linux")]
#[test]
fn test_resolved_paths_logged_by_default() {
    let ctx = TestContext::new("resolved_paths_logged");
    ctx.write_collection();
    ctx.install_fake_newman(Some(r#"{"run": {"failures": []}}"#));

    let output = ctx.run(&[]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = stderr(&output);
    assert!(stderr.contains("Running collection"), "stderr: {stderr}");
    assert!(stderr.contains("./collection.json"));
    assert!(stderr.contains("./env.json"));
    assert!(stderr.contains("./dataset.json"));
    // Logs stay off stdout
    assert!(!stdout(&output).contains("Running collection"));
}
