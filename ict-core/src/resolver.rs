use crate::config::FuzzyConfig;
use crate::error::ResolverError;
use crate::matcher::{FuzzyMatcher, MatchEngine, SubstringMatcher};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a query is matched against the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Substring,
    Fuzzy,
}

impl Strategy {
    pub fn from_fuzzy_flag(use_fuzzy: bool) -> Self {
        if use_fuzzy {
            Self::Fuzzy
        } else {
            Self::Substring
        }
    }

    pub(crate) fn single_match_message(self, query: &str, target: &str) -> String {
        match self {
            Self::Substring => format!(
                "Target `{query}` doesn't exist. However, a single substring match `{target}` was found and will be used ..."
            ),
            Self::Fuzzy => format!(
                "Target `{query}` doesn't exist, a single fuzzy match `{target}` was found and will be used ..."
            ),
        }
    }

    pub(crate) fn no_match_message(self, query: &str, total: usize) -> String {
        match self {
            Self::Substring => format!(
                "None of the {total} existing targets matches the substring `{query}`.\n\
                 Try fuzzy match: 'ict test {query} --fuzzy'"
            ),
            Self::Fuzzy => format!("No fuzzy matches for target `{query}` were found."),
        }
    }

    pub(crate) fn ambiguous_message(self, query: &str, candidates: &[String]) -> String {
        let header = match self {
            Self::Substring => format!(
                "Target `{query}` doesn't exist. However, the following substring matches found:"
            ),
            Self::Fuzzy => format!("Multiple fuzzy matches were found for `{query}`:"),
        };
        format!("{header}\n{}", candidates.join("\n"))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// A query that narrowed down to exactly one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub target: String,
    /// Informational text for the user; empty when the query was an exact label
    pub message: String,
}

/// Resolve `query` against `all_targets` with the default fuzzy settings
pub fn resolve(
    all_targets: &[String],
    query: &str,
    use_fuzzy: bool,
) -> Result<Resolution, ResolverError> {
    resolve_with(
        all_targets,
        query,
        Strategy::from_fuzzy_flag(use_fuzzy),
        &FuzzyConfig::default(),
    )
}

/// Resolve `query` using the given strategy.
///
/// An exact label is not special-cased: if it is also a substring of other
/// labels, the result is ambiguous. Use [`select_target`] to accept exact
/// labels directly.
pub fn resolve_with(
    all_targets: &[String],
    query: &str,
    strategy: Strategy,
    fuzzy: &FuzzyConfig,
) -> Result<Resolution, ResolverError> {
    let matches = match strategy {
        Strategy::Substring => SubstringMatcher.find_matches(all_targets, query),
        Strategy::Fuzzy => FuzzyMatcher::new(fuzzy.clone()).find_matches(all_targets, query),
    };
    tracing::debug!(%strategy, query, matches = matches.len(), "matched targets");

    classify(matches, query, strategy, all_targets.len())
}

/// Use `query` as-is when it names an existing target, otherwise resolve it
pub fn select_target(
    all_targets: &[String],
    query: &str,
    strategy: Strategy,
    fuzzy: &FuzzyConfig,
) -> Result<Resolution, ResolverError> {
    if all_targets.iter().any(|t| t == query) {
        return Ok(Resolution {
            target: query.to_string(),
            message: String::new(),
        });
    }
    resolve_with(all_targets, query, strategy, fuzzy)
}

fn classify(
    mut matches: Vec<String>,
    query: &str,
    strategy: Strategy,
    total: usize,
) -> Result<Resolution, ResolverError> {
    match matches.len() {
        0 => Err(ResolverError::NoMatch {
            query: query.to_string(),
            strategy,
            total,
        }),
        1 => {
            let target = matches.remove(0);
            let message = strategy.single_match_message(query, &target);
            Ok(Resolution { target, message })
        },
        _ => Err(ResolverError::Ambiguous {
            query: query.to_string(),
            strategy,
            candidates: matches,
        }),
    }
}
