use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::tempdir;

const PAYLOAD_EDGE_404: &str = r#"{
    "type": "not.found",
    "status": 404,
    "clientIp": "10.0.0.1",
    "serverIp": "23.0.0.1",
    "requestId": "req-1",
    "errors": [{ "type": "resourceNotFound" }]
}"#;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("tc-messages").expect("binary exists");
    // keep tests on the bundled catalog regardless of the caller's environment
    cmd.env_remove("TC_MESSAGES_CATALOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_catalog(dir: &Path, body: &str) -> String {
    let path = dir.join("catalog.json");
    fs::write(&path, body).expect("write catalog");
    path.to_str().unwrap().to_string()
}

#[test]
fn prints_lookup_key_for_command_path() {
    cli()
        .args(["key", "test-center test-suite view"])
        .assert()
        .success()
        .stdout("akamai.testCenter.testSuite.view\n");
}

#[test]
fn flag_and_service_messages_from_bundled_catalog() {
    cli()
        .args(["flag", "test-center test-suite view", "missing", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Provide a test suite ID"));

    cli()
        .args(["service", "test-center run", "testCmdSpinner", "poll", "--sub-resource", "testRun"])
        .assert()
        .success()
        .stdout("Waiting for the test run to finish...\n");
}

#[test]
fn unknown_keys_print_the_fallback() {
    let tmp = tempdir().expect("temp dir");
    let catalog = write_catalog(tmp.path(), r#"{"akamai": {"fallback": "nothing here"}}"#);

    cli()
        .args(["--catalog", &catalog, "resolve", "akamai.testCenter.missing"])
        .assert()
        .success()
        .stdout("nothing here\n");

    cli()
        .args(["--catalog", &catalog, "flag", "test-center run", "sideways", "id"])
        .assert()
        .success()
        .stdout("nothing here\n");
}

#[test]
fn get_fills_placeholder_values() {
    let tmp = tempdir().expect("temp dir");
    let catalog = write_catalog(
        tmp.path(),
        r#"{"akamai": {"fallback": "-", "testCenter": {"greet": "Hello {{name}}{{missing}}"}}}"#,
    );

    cli()
        .args(["--catalog", &catalog, "get", "test-center", "--key", "greet"])
        .args(["--value", "name=Akamai"])
        .assert()
        .success()
        .stdout("Hello Akamai\n");

    cli()
        .args(["--catalog", &catalog, "get", "test-center", "--key", "greet", "--value", "=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("placeholder name cannot be empty"));
}

#[test]
fn catalog_can_come_from_environment() {
    let tmp = tempdir().expect("temp dir");
    let catalog = write_catalog(tmp.path(), r#"{"akamai": {"fallback": "from env"}}"#);

    cli()
        .env("TC_MESSAGES_CATALOG", &catalog)
        .args(["global", "initEdgeRc"])
        .assert()
        .success()
        .stdout("from env\n");
}

#[test]
fn catalog_flag_overrides_environment() {
    let env_dir = tempdir().expect("temp dir");
    let env_catalog = write_catalog(env_dir.path(), r#"{"akamai": {"fallback": "from env"}}"#);
    let flag_dir = tempdir().expect("temp dir");
    let flag_catalog = write_catalog(flag_dir.path(), r#"{"akamai": {"fallback": "from flag"}}"#);

    cli()
        .env("TC_MESSAGES_CATALOG", &env_catalog)
        .args(["--catalog", &flag_catalog, "global", "initEdgeRc"])
        .assert()
        .success()
        .stdout("from flag\n");
}

#[test]
fn invalid_catalog_fails_with_context() {
    let tmp = tempdir().expect("temp dir");
    let catalog = write_catalog(tmp.path(), r#"{"akamai": {}}"#);

    cli()
        .args(["--catalog", &catalog, "key", "test-center"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load message catalog"))
        .stderr(predicate::str::contains("akamai.fallback"));
}

#[test]
fn api_error_prints_sub_error_messages() {
    let payload = r#"{
        "type": "validation.error",
        "status": 400,
        "errors": [
            { "type": "resourceNotFound", "requestField": "testSuiteId", "testSuiteId": 4 },
            { "type": "valueNotAllowed", "requestField": "browser", "requestValues": ["ie6"] }
        ]
    }"#;

    cli()
        .args(["api-error", "test-center run", "--sub-resource", "test-run"])
        .args(["--operation", "submit", "--response-code", "400"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout(
            "No test suite with ID 4 exists.\nValue ie6 is not allowed for browser.\n",
        );
}

#[test]
fn api_edge_failure_exits_with_mapped_code() {
    let tmp = tempdir().expect("temp dir");
    let payload = tmp.path().join("payload.json");
    fs::write(&payload, PAYLOAD_EDGE_404).expect("write payload");

    let assert = cli()
        .args(["api-error", "test-center run", "--sub-resource", "test-run"])
        .args(["--operation", "submit", "--response-code", "404"])
        .args(["--payload", payload.to_str().unwrap()])
        .assert()
        .code(4)
        .stdout("");

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("stderr utf8");
    let not_found = stderr.find("requested API endpoint was not found").expect("edge message");
    let init = stderr.find("Check that your .edgerc file exists").expect("init message");
    assert!(not_found < init, "unexpected order: {stderr}");
}
