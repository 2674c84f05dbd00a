use crate::config::Config;
use crate::operations::list::list_targets;
use crate::output::{ResolveResult, TargetKind};
use crate::resolver::{select_target, Strategy};
use anyhow::{Context, Result};

/// Resolve a possibly partial target name among the targets of `kind`.
///
/// A name that exactly matches a listed target is returned unchanged.
/// Failures keep their typed source: `QueryError` when the build graph
/// query fails, `ResolverError` when the name is missing or ambiguous.
pub fn resolve_operation(
    config: &Config,
    kind: TargetKind,
    query: &str,
    use_fuzzy: bool,
) -> Result<ResolveResult> {
    let strategy = Strategy::from_fuzzy_flag(use_fuzzy);
    let targets = list_targets(config, kind)
        .with_context(|| format!("Failed to list {kind} targets"))?;

    let resolution = select_target(&targets, query, strategy, &config.fuzzy)?;

    Ok(ResolveResult {
        query: query.to_string(),
        strategy,
        target: resolution.target,
        message: resolution.message,
    })
}
