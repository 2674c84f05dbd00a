use crate::config::QueryConfig;
use crate::error::QueryError;
use std::process::Command;

/// Runs `bazel query` to enumerate candidate test targets.
///
/// Every call spawns exactly one process and waits for it. There is no
/// caching, retry or timeout.
#[derive(Debug, Clone)]
pub struct BazelQuery {
    binary: String,
    test_root: String,
}

impl BazelQuery {
    pub fn new(binary: impl Into<String>, test_root: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            test_root: test_root.into(),
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.bazel.clone(), config.test_root.clone())
    }

    /// Expression selecting every test target under the test root
    pub fn tests_expression(&self) -> String {
        format!("tests({}/...)", self.test_root)
    }

    /// Expression selecting test targets tagged `dynamic_testnet`
    pub fn dynamic_testnet_expression(&self) -> String {
        format!("attr(tags, 'dynamic_testnet', {})", self.tests_expression())
    }

    pub fn list_test_targets(&self) -> Result<Vec<String>, QueryError> {
        self.run(&self.tests_expression())
    }

    pub fn list_dynamic_testnet_targets(&self) -> Result<Vec<String>, QueryError> {
        self.run(&self.dynamic_testnet_expression())
    }

    fn run(&self, expression: &str) -> Result<Vec<String>, QueryError> {
        let args = ["query", expression];
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(%command, "running build graph query");

        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            tracing::warn!(%command, status = %output.status, "build graph query failed");
            return Err(QueryError::QueryFailed { command, stderr });
        }

        let targets = parse_query_output(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(count = targets.len(), "collected candidate targets");
        Ok(targets)
    }
}

/// Split query output into target labels, dropping empty lines.
///
/// Order and duplicates are preserved.
pub fn parse_query_output(stdout: &str) -> Vec<String> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_lines() {
        let out = "//rs/tests:foo_test\n\n//rs/tests:bar_test\n";
        assert_eq!(
            parse_query_output(out),
            vec!["//rs/tests:foo_test", "//rs/tests:bar_test"]
        );
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        let out = "//b:t\n//a:t\n//b:t";
        assert_eq!(parse_query_output(out), vec!["//b:t", "//a:t", "//b:t"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        let out = "//rs/tests:foo_test\r\n\r\n//rs/tests:bar_test\r\n";
        assert_eq!(
            parse_query_output(out),
            vec!["//rs/tests:foo_test", "//rs/tests:bar_test"]
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_query_output("").is_empty());
        assert!(parse_query_output("\n\n").is_empty());
    }

    #[test]
    fn test_query_expressions() {
        let query = BazelQuery::new("bazel", "//rs/tests");
        assert_eq!(query.tests_expression(), "tests(//rs/tests/...)");
        assert_eq!(
            query.dynamic_testnet_expression(),
            "attr(tags, 'dynamic_testnet', tests(//rs/tests/...))"
        );
    }

    #[test]
    fn test_from_config_uses_configured_root() {
        let config = QueryConfig {
            bazel: "bazelisk".to_string(),
            test_root: "//ic/tests".to_string(),
        };
        let query = BazelQuery::from_config(&config);
        assert_eq!(query.tests_expression(), "tests(//ic/tests/...)");
    }

    #[cfg(unix)]
    #[test]
    fn test_stdout_becomes_candidates() {
        // `echo` prints its arguments, standing in for a query that yields one label
        let query = BazelQuery::new("echo", "//rs/tests");
        let targets = query.list_test_targets().unwrap();
        assert_eq!(targets, vec!["query tests(//rs/tests/...)"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_query_failed() {
        let query = BazelQuery::new("false", "//rs/tests");
        match query.list_dynamic_testnet_targets() {
            Err(QueryError::QueryFailed { command, stderr }) => {
                assert_eq!(
                    command,
                    "false query attr(tags, 'dynamic_testnet', tests(//rs/tests/...))"
                );
                assert!(stderr.is_empty());
            },
            other => panic!("expected QueryFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let query = BazelQuery::new("ict-definitely-not-a-real-binary", "//rs/tests");
        let err = query.list_test_targets().unwrap_err();
        assert!(matches!(err, QueryError::Spawn { .. }));
        assert!(err.to_string().contains("could not be started"));
    }
}
