use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use ict_core::{Config, OutputFormatter, QueryError, ResolverError, TargetKind, VersionResult};
use std::io;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;
mod list;
mod resolve;
mod run;
mod ui;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Ctrl-C reaches the running `bazel test` child too; wait for it to finish
    // and report the interruption afterwards
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!("failed to install Ctrl-C handler: {e}");
    }

    let colors = ui::ColorChoice::detect(cli.no_color);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        if let Err(e) = std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
        {
            eprintln!("{}", ui::error(&format!("Error: {e:#}"), colors.stderr));
            process::exit(2);
        }
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", ui::error(&format!("Error: {e:#}"), colors.stderr));
            process::exit(2);
        },
    };
    if let Some(bazel) = cli.bazel {
        config.query.bazel = bazel;
    }

    let result = match cli.command {
        Commands::List { testnets, output } => {
            list::handle_list(&config, target_kind(testnets), output.into())
        },

        Commands::Resolve {
            target,
            matching,
            testnets,
            output,
        } => resolve::handle_resolve(
            &config,
            target_kind(testnets),
            &target,
            matching.fuzzy,
            output.into(),
            colors,
        ),

        Commands::Test(args) => run::handle_run(&config, TargetKind::Test, &args, colors),

        Commands::Testnet(args) => {
            run::handle_run(&config, TargetKind::DynamicTestnet, &args, colors)
        },

        Commands::Completions { shell, out_dir } => {
            let mut cmd = Cli::command();
            generate_completions(shell, &mut cmd, "ict", &out_dir).map(|()| 0)
        },

        Commands::Version { output } => handle_version(output),
    };

    if interrupted.load(Ordering::SeqCst) {
        eprintln!("Operation interrupted");
        process::exit(130);
    }

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", ui::error(&format!("Error: {e:#}"), colors.stderr));
            process::exit(exit_code(&e));
        },
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Log to stderr so resolved labels on stdout stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn target_kind(testnets: bool) -> TargetKind {
    if testnets {
        TargetKind::DynamicTestnet
    } else {
        TargetKind::Test
    }
}

/// 1 when the name did not resolve, 2 when the build graph could not be queried
fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<ResolverError>().is_some() {
        1
    } else if error.downcast_ref::<QueryError>().is_some() {
        2
    } else {
        3
    }
}

// Generate shell completions
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out_dir: &std::path::Path,
) -> Result<()> {
    use clap_complete::generate_to;
    use std::fs;

    fs::create_dir_all(out_dir)?;
    let path = generate_to(gen, cmd, name, out_dir)?;
    println!("Generated completion file: {}", path.display());
    Ok(())
}

fn handle_version(output: OutputFormat) -> Result<i32> {
    let version_result = VersionResult {
        name: "ict".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(0)
}
