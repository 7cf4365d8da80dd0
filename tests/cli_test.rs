//! CLI integration tests
//!
//! Tests for the command-line interface using assert_cmd.
//!
//! These tests verify:
//! - Help and version flags
//! - Translating JSON and YAML agent configurations
//! - Validate mode
//! - Error handling for missing files and missing sections

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::Builder;
use tempfile::NamedTempFile;

/// Get a command for the otel-filter-translator binary
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("otel-filter-translator").expect("Failed to find otel-filter-translator binary")
}

/// Helper to create a temporary config file with the given suffix and content
fn create_temp_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file.flush().expect("Failed to flush");
    file
}

const JMX_CONFIG_JSON: &str = r#"{
    "metrics": {
        "metrics_collected": {
            "jmx": {
                "jvm": {
                    "measurement": ["jvm.memory.heap.init", "jvm.threads.count"]
                }
            }
        }
    }
}"#;

/// Test --help flag displays usage information
#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").or(predicate::str::contains("usage:")))
        .stdout(predicate::str::contains("--config").or(predicate::str::contains("-c")));
}

/// Test --version flag displays version
#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test translating a JSON agent configuration prints the include list
#[test]
fn test_translate_json_config() {
    let file = create_temp_config(".json", JMX_CONFIG_JSON);

    cmd()
        .arg("-c")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("include"))
        .stdout(predicate::str::contains("match_type: strict"))
        .stdout(predicate::str::contains("jvm.memory.heap.init"))
        .stdout(predicate::str::contains("jvm.threads.count"));
}

/// Test translating a YAML agent configuration
#[test]
fn test_translate_yaml_config() {
    let config = r#"
metrics:
  metrics_collected:
    jmx:
      tomcat:
        measurement:
          - tomcat.sessions
"#;
    let file = create_temp_config(".yaml", config);

    cmd()
        .arg("-c")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tomcat.sessions"));
}

/// Test JSON output format
#[test]
fn test_json_output_format() {
    let file = create_temp_config(".json", JMX_CONFIG_JSON);

    cmd()
        .arg("-c")
        .arg(file.path())
        .arg("--output-format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"match_type\": \"strict\""))
        .stdout(predicate::str::contains("\"jvm.memory.heap.init\""));
}

/// Test the container-insights pipeline emits an exclude list
#[test]
fn test_container_insights_excludes() {
    let file = create_temp_config(".json", JMX_CONFIG_JSON);

    cmd()
        .arg("-c")
        .arg(file.path())
        .arg("-n")
        .arg("containerinsights")
        .assert()
        .success()
        .stdout(predicate::str::contains("exclude"))
        .stdout(predicate::str::contains("jvm.threads.count"));
}

/// Test --validate reports the component identifier without printing config
#[test]
fn test_validate_mode() {
    let file = create_temp_config(".json", JMX_CONFIG_JSON);

    cmd()
        .arg("-c")
        .arg(file.path())
        .arg("--validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translation OK: filter/jmx"))
        .stdout(predicate::str::contains("match_type").not());
}

/// Test indexed instance selection feeds into the component identifier
#[test]
fn test_indexed_instance() {
    let config = r#"{
        "metrics": {
            "metrics_collected": {
                "jmx": [
                    {"jvm": {"measurement": ["jvm.memory.heap.init"]}}
                ]
            }
        }
    }"#;
    let file = create_temp_config(".json", config);

    cmd()
        .arg("-c")
        .arg(file.path())
        .arg("-i")
        .arg("0")
        .arg("--validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Translation OK: filter/jmx/0"));
}

/// Test a config without the JMX section fails with the missing-key error
#[test]
fn test_missing_jmx_section_fails() {
    let config = r#"{"metrics": {"metrics_collected": {"cpu": {}}}}"#;
    let file = create_temp_config(".json", config);

    cmd()
        .arg("-c")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing key"))
        .stderr(predicate::str::contains("metrics.metrics_collected.jmx"));
}

/// Test a missing config file is an error
#[test]
fn test_missing_config_file() {
    cmd()
        .arg("-c")
        .arg("/nonexistent/path/config.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

/// Test invalid JSON is rejected
#[test]
fn test_invalid_json_config() {
    let file = create_temp_config(".json", "{not json");

    cmd()
        .arg("-c")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON config"));
}
