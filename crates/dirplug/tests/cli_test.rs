//! Integration tests for the `dirplug` CLI binary.
//!
//! Offline commands run as-is; server-facing commands run against a
//! wiremock server with credentials supplied through the environment.
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `dirplug` binary with env isolation.
///
/// Clears all `DIRPLUG_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn dirplug_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dirplug");
    cmd.env("HOME", "/tmp/dirplug-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/dirplug-cli-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/dirplug-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("DIRPLUG_PROFILE")
        .env_remove("DIRPLUG_SERVER")
        .env_remove("DIRPLUG_USERNAME")
        .env_remove("DIRPLUG_PASSWORD")
        .env_remove("DIRPLUG_OUTPUT")
        .env_remove("DIRPLUG_INSECURE")
        .env_remove("DIRPLUG_TIMEOUT")
        .env_remove("DIRPLUG_STATE");
    cmd
}

/// A command aimed at `server`, with its own state file.
fn server_cmd(server: &MockServer, state: &Path) -> assert_cmd::Command {
    let mut cmd = dirplug_cmd();
    cmd.env("DIRPLUG_SERVER", server.uri())
        .env("DIRPLUG_USERNAME", "cn=Directory Manager")
        .env("DIRPLUG_PASSWORD", "password")
        .arg("--state")
        .arg(state)
        .write_stdin("");
    cmd
}

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn seven_bit_clean(enabled: bool) -> Value {
    json!({
        "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:seven-bit-clean"],
        "id": "7-Bit Clean",
        "enabled": enabled,
        "plugin-type": ["preoperationadd", "preoperationmodify"],
        "attribute-type": ["uid", "mail"]
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = dirplug_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn test_help_lists_commands() {
    dirplug_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("plan")
            .and(predicate::str::contains("apply"))
            .and(predicate::str::contains("variants")),
    );
}

#[test]
fn test_version_flag() {
    dirplug_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirplug"));
}

#[test]
fn test_completions_zsh() {
    dirplug_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_variants_lists_registry() {
    dirplug_cmd()
        .args(["variants", "-o", "plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("seven-bit-clean")
                .and(predicate::str::contains("ldap-result-code-tracker")),
        );
}

#[test]
fn test_variant_detail_as_json() {
    let output = dirplug_cmd()
        .args(["variants", "Delay", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let view: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["name"], "delay");
    assert_eq!(view["deletion"], "delete");
    let delay = view["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "delay")
        .unwrap();
    assert_eq!(delay["definedness"], "required");
}

#[test]
fn test_unknown_variant_is_not_found() {
    let output = dirplug_cmd().args(["variants", "teleporter"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_plan_without_server_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_file(&dir, "m.toml", "plugins = []\n");
    let output = dirplug_cmd()
        .args(["plan", "-f"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("No server configured"));
}

#[test]
fn test_forget_drops_tracking_only() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_file(
        &dir,
        "state.json",
        r#"{"version":1,"plugins":[{"id":"slow-binds","kind":"delay","state":"managed",
            "observed":{},"last_applied":"2026-01-01T00:00:00Z"}]}"#,
    );

    dirplug_cmd()
        .arg("--state")
        .arg(&state)
        .args(["forget", "slow-binds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot 'slow-binds'"));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(saved["plugins"], json!([]));

    let output = dirplug_cmd()
        .arg("--state")
        .arg(&state)
        .args(["forget", "slow-binds"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
}

// ── Server-facing commands ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_manifest_exits_with_schema_code() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_file(
        &dir,
        "m.yaml",
        "plugins:\n  - id: slow-binds\n    type: delay\n    enabled: true\n",
    );

    let output = server_cmd(&server, &dir.path().join("state.json"))
        .args(["plan", "-f"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(9));
    assert!(combined_output(&output).contains("slow-binds"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plan_reports_adoption_of_existing_plugin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/7-Bit%20Clean"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seven_bit_clean(true)))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let manifest = write_file(
        &dir,
        "m.toml",
        "[[plugins]]\nid = \"7-Bit Clean\"\ntype = \"seven-bit-clean\"\nenabled = false\n",
    );

    let output = server_cmd(&server, &dir.path().join("state.json"))
        .args(["plan", "-o", "json", "-f"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let plan: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        plan,
        json!([{
            "id": "7-Bit Clean",
            "variant": "seven-bit-clean",
            "action": "adopt",
            "ops": [{ "kind": "replace", "attribute": "enabled", "values": ["false"] }]
        }])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_creates_and_tracks_plugin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/slow-binds"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/config/v1/plugins"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "schemas": ["urn:pingidentity:schemas:configuration:2.0:plugin:delay"],
            "id": "slow-binds",
            "enabled": true,
            "delay": "250 ms"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    let manifest = write_file(
        &dir,
        "m.json",
        r#"{"plugins":[{"id":"slow-binds","type":"delay","enabled":true,"delay":"250 ms"}]}"#,
    );

    server_cmd(&server, &state)
        .args(["apply", "-o", "plain", "-f"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("created\tslow-binds"));

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    assert_eq!(saved["plugins"][0]["id"], "slow-binds");
    assert_eq!(saved["plugins"][0]["state"], "managed");
    assert_eq!(saved["plugins"][0]["observed"]["delay"], "250 ms");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_refuses_unconfirmed_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = write_file(
        &dir,
        "state.json",
        r#"{"version":1,"plugins":[{"id":"old-delay","kind":"delay","state":"managed",
            "observed":{},"last_applied":"2026-01-01T00:00:00Z"}]}"#,
    );
    let manifest = write_file(&dir, "m.toml", "plugins = []\n");

    let output = server_cmd(&server, &state)
        .args(["apply", "-f"])
        .arg(&manifest)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_apply_forgets_edit_only_plugin_without_server_call() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = write_file(
        &dir,
        "state.json",
        r#"{"version":1,"plugins":[{"id":"LDAP Result Code Tracker",
            "kind":"ldap-result-code-tracker","state":"adopted",
            "observed":{},"last_applied":"2026-01-01T00:00:00Z"}]}"#,
    );
    let manifest = write_file(&dir, "m.toml", "plugins = []\n");

    server_cmd(&server, &state)
        .args(["apply", "-o", "plain", "-f"])
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("forgotten\tLDAP Result Code Tracker"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_masks_sensitive_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/plugins/Changelog%20Password%20Encryption"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": [
                "urn:pingidentity:schemas:configuration:2.0:plugin:changelog-password-encryption"
            ],
            "id": "Changelog Password Encryption",
            "enabled": true,
            "changelog-password-encryption-key": "s3cr3t"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = server_cmd(&server, &dir.path().join("state.json"))
        .args(["show", "Changelog Password Encryption"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let text = combined_output(&output);
    assert!(!text.contains("s3cr3t"), "{text}");
    assert!(text.contains("********"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_credentials_exit_with_auth_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output = server_cmd(&server, &dir.path().join("state.json"))
        .arg("list")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}
