use crate::resolver::Strategy;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::{self, Write};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Which flavour of test targets a command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Every test target under the test root
    Test,
    /// Test targets tagged as needing a dynamically provisioned testnet
    DynamicTestnet,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => write!(f, "test"),
            Self::DynamicTestnet => write!(f, "dynamic testnet"),
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub kind: TargetKind,
    pub targets: Vec<String>,
}

/// Result of a resolve operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResult {
    pub query: String,
    pub strategy: Strategy,
    pub target: String,
    /// Empty when the query named an existing target exactly
    pub message: String,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ListResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "kind": self.kind,
            "count": self.targets.len(),
            "targets": self.targets,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.targets.is_empty() {
            return format!("No {} targets found\n", self.kind);
        }

        let mut output = String::new();
        for target in &self.targets {
            writeln!(output, "{target}").unwrap();
        }
        output
    }
}

impl OutputFormatter for ResolveResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "query": self.query,
            "strategy": self.strategy,
            "target": self.target,
            "message": self.message,
            "exact": self.message.is_empty(),
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{}\n", self.target)
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
