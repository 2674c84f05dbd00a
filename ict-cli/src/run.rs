use anyhow::{Context, Result};
use ict_core::{resolve_operation, Config, TargetKind};
use std::process::Command;

use crate::cli::args::RunArgs;
use crate::ui::{self, ColorChoice};

/// Resolve the requested target, then hand it to `bazel test`.
///
/// Returns the exit code of the bazel process.
pub fn handle_run(
    config: &Config,
    kind: TargetKind,
    args: &RunArgs,
    colors: ColorChoice,
) -> Result<i32> {
    let result = resolve_operation(config, kind, &args.target, args.matching.fuzzy)?;
    if !result.message.is_empty() {
        eprintln!("{}", ui::info(&result.message, colors.stderr));
    }

    let bazel_args = bazel_test_args(kind, &result.target, &args.bazel_args);
    let command_line = format!("{} {}", config.query.bazel, bazel_args.join(" "));

    if args.dry_run {
        println!("{command_line}");
        return Ok(0);
    }

    eprintln!("{}", ui::info(&format!("Running: {command_line}"), colors.stderr));
    tracing::info!(command = %command_line, "starting bazel test");

    let status = Command::new(&config.query.bazel)
        .args(&bazel_args)
        .status()
        .with_context(|| format!("Failed to run: {command_line}"))?;

    tracing::debug!(%status, "bazel test finished");
    // Killed by a signal: report a generic failure
    Ok(status.code().unwrap_or(1))
}

fn bazel_test_args(kind: TargetKind, label: &str, extra: &[String]) -> Vec<String> {
    let mut args = vec!["test".to_string(), label.to_string()];
    if kind == TargetKind::DynamicTestnet {
        args.push("--test_output=streamed".to_string());
    }
    args.extend(extra.iter().cloned());
    args
}
