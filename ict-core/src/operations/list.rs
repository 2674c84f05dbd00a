use crate::config::Config;
use crate::error::QueryError;
use crate::output::{ListResult, TargetKind};
use crate::source::BazelQuery;
use anyhow::Result;

/// Query the build graph for every target of `kind`
pub fn list_targets(config: &Config, kind: TargetKind) -> Result<Vec<String>, QueryError> {
    let query = BazelQuery::from_config(&config.query);
    match kind {
        TargetKind::Test => query.list_test_targets(),
        TargetKind::DynamicTestnet => query.list_dynamic_testnet_targets(),
    }
}

/// List operation - returns structured data
pub fn list_operation(config: &Config, kind: TargetKind) -> Result<ListResult> {
    let targets = list_targets(config, kind)?;
    Ok(ListResult { kind, targets })
}
