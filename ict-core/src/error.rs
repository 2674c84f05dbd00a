use crate::resolver::Strategy;
use thiserror::Error;

/// Failure to obtain a candidate list from the build graph
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Bazel command: [{command}] could not be started: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bazel command: [{command}] failed: {stderr}")]
    QueryFailed { command: String, stderr: String },
}

/// A query that did not resolve to exactly one target
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("{}", .strategy.no_match_message(.query, .total.to_owned()))]
    NoMatch {
        query: String,
        strategy: Strategy,
        /// Number of candidates that were searched
        total: usize,
    },

    #[error("{}", .strategy.ambiguous_message(.query, .candidates))]
    Ambiguous {
        query: String,
        strategy: Strategy,
        candidates: Vec<String>,
    },
}

impl ResolverError {
    pub fn query(&self) -> &str {
        match self {
            Self::NoMatch { query, .. } | Self::Ambiguous { query, .. } => query,
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::NoMatch { strategy, .. } | Self::Ambiguous { strategy, .. } => *strategy,
        }
    }

    /// Matches that made the query ambiguous; empty for `NoMatch`
    pub fn candidates(&self) -> &[String] {
        match self {
            Self::NoMatch { .. } => &[],
            Self::Ambiguous { candidates, .. } => candidates,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous { .. })
    }
}
