use crate::config::FuzzyConfig;
use crate::ngram::NgramIndex;

/// A strategy for narrowing a candidate list down to the labels matching a query
pub trait MatchEngine {
    /// Matching candidates, best first. Never contains empty strings.
    fn find_matches(&self, candidates: &[String], query: &str) -> Vec<String>;
}

/// Literal, case-sensitive substring containment.
///
/// Results keep the candidate list's order and are not capped. An empty
/// query matches every non-empty candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl MatchEngine for SubstringMatcher {
    fn find_matches(&self, candidates: &[String], query: &str) -> Vec<String> {
        candidates
            .iter()
            .filter(|candidate| !candidate.is_empty() && candidate.contains(query))
            .cloned()
            .collect()
    }
}

/// Approximate matching by n-gram overlap, capped at `result_limit` results
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: FuzzyConfig,
}

impl FuzzyMatcher {
    pub fn new(config: FuzzyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }
}

impl MatchEngine for FuzzyMatcher {
    fn find_matches(&self, candidates: &[String], query: &str) -> Vec<String> {
        let index = NgramIndex::new(candidates, &self.config.window_sizes);
        index
            .closest_n(query, self.config.result_limit)
            .into_iter()
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect()
    }
}
