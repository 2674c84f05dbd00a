#![cfg(unix)]

use ict_core::{
    list_operation, resolve_operation, Config, QueryError, ResolverError, Strategy, TargetKind,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

/// Write an executable stand-in for `bazel` that answers queries from fixed output
fn fake_bazel(dir: &Path, tests: &str, testnets: &str) -> String {
    let script = dir.join("bazel");
    let body = format!(
        r#"#!/bin/sh
case "$2" in
  attr*) printf '%s' '{testnets}' ;;
  *) printf '%s' '{tests}' ;;
esac
"#
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().into_owned()
}

fn failing_bazel(dir: &Path) -> String {
    let script = dir.join("bazel");
    fs::write(
        &script,
        "#!/bin/sh\necho \"ERROR: Skipping '$2': no such package\" >&2\nexit 7\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script.to_string_lossy().into_owned()
}

fn config_with(bazel: String) -> Config {
    let mut config = Config::default();
    config.query.bazel = bazel;
    config
}

const TESTS: &str = "//rs/tests/networking:firewall_test\n\n//rs/tests/consensus:safety_test\n//rs/tests/networking:xnet_test\n";
const TESTNETS: &str = "//rs/tests/testnets:large\n//rs/tests/testnets:small\n";

#[test]
fn test_list_operation_filters_empty_lines() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(fake_bazel(temp_dir.path(), TESTS, TESTNETS));

    let result = list_operation(&config, TargetKind::Test).unwrap();
    assert_eq!(
        result.targets,
        vec![
            "//rs/tests/networking:firewall_test",
            "//rs/tests/consensus:safety_test",
            "//rs/tests/networking:xnet_test",
        ]
    );

    let result = list_operation(&config, TargetKind::DynamicTestnet).unwrap();
    assert_eq!(
        result.targets,
        vec!["//rs/tests/testnets:large", "//rs/tests/testnets:small"]
    );
}

#[test]
fn test_resolve_operation_substring() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(fake_bazel(temp_dir.path(), TESTS, TESTNETS));

    let result = resolve_operation(&config, TargetKind::Test, "safety", false).unwrap();
    assert_eq!(result.target, "//rs/tests/consensus:safety_test");
    assert_eq!(result.strategy, Strategy::Substring);
    assert!(result.message.contains("single substring match"));
}

#[test]
fn test_resolve_operation_exact_label() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(fake_bazel(temp_dir.path(), TESTS, TESTNETS));

    let result = resolve_operation(
        &config,
        TargetKind::Test,
        "//rs/tests/networking:xnet_test",
        false,
    )
    .unwrap();
    assert_eq!(result.target, "//rs/tests/networking:xnet_test");
    assert!(result.message.is_empty());
}

#[test]
fn test_resolve_operation_testnet_fuzzy() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(fake_bazel(temp_dir.path(), TESTS, TESTNETS));

    let result = resolve_operation(&config, TargetKind::DynamicTestnet, "smal", true).unwrap();
    assert_eq!(result.target, "//rs/tests/testnets:small");
    assert_eq!(result.strategy, Strategy::Fuzzy);
}

#[test]
fn test_resolve_operation_ambiguous_is_typed() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(fake_bazel(temp_dir.path(), TESTS, TESTNETS));

    let err = resolve_operation(&config, TargetKind::Test, "networking", false).unwrap_err();
    let resolver_err = err.downcast_ref::<ResolverError>().unwrap();
    assert_eq!(
        resolver_err.candidates(),
        [
            "//rs/tests/networking:firewall_test",
            "//rs/tests/networking:xnet_test",
        ]
    );
}

#[test]
fn test_query_failure_surfaces_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with(failing_bazel(temp_dir.path()));

    let err = resolve_operation(&config, TargetKind::Test, "anything", false).unwrap_err();
    match err.downcast_ref::<QueryError>() {
        Some(QueryError::QueryFailed { command, stderr }) => {
            assert!(command.ends_with("query tests(//rs/tests/...)"));
            assert_eq!(
                stderr,
                "ERROR: Skipping 'tests(//rs/tests/...)': no such package\n"
            );
        },
        other => panic!("expected QueryFailed, got {other:?}"),
    }
    assert!(format!("{err:#}").contains("Failed to list test targets"));
}
