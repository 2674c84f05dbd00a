//! N-gram bag index for approximate label matching.
//!
//! Each candidate is broken into overlapping character windows for every
//! configured window size. A query is scored against a candidate with the
//! Dice coefficient of their window bags: twice the shared windows over the
//! total windows of both, so a short label is not outranked by a long one that
//! merely contains more text. Candidates sharing nothing are never returned,
//! and ties keep the candidate list's order so results are deterministic for
//! fixed inputs.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct NgramIndex<'a> {
    candidates: &'a [String],
    /// One inverted index per window size: window -> candidate positions
    bags: Vec<(usize, HashMap<String, Vec<usize>>)>,
    /// Distinct windows per candidate, summed over all sizes
    window_counts: Vec<usize>,
}

impl<'a> NgramIndex<'a> {
    pub fn new(candidates: &'a [String], window_sizes: &[usize]) -> Self {
        let mut bags = Vec::with_capacity(window_sizes.len());
        let mut window_counts = vec![0usize; candidates.len()];

        for &size in window_sizes {
            if size == 0 || bags.iter().any(|(s, _)| *s == size) {
                continue;
            }
            let mut bag: HashMap<String, Vec<usize>> = HashMap::new();
            for (pos, candidate) in candidates.iter().enumerate() {
                let candidate_windows = windows(candidate, size);
                window_counts[pos] += candidate_windows.len();
                for window in candidate_windows {
                    bag.entry(window).or_default().push(pos);
                }
            }
            bags.push((size, bag));
        }

        Self {
            candidates,
            bags,
            window_counts,
        }
    }

    /// Distinct query windows shared by each candidate, in candidate order,
    /// along with the query's own window count
    pub fn shared_windows(&self, query: &str) -> (Vec<usize>, usize) {
        let mut shared = vec![0usize; self.candidates.len()];
        let mut query_windows = 0;
        for (size, bag) in &self.bags {
            let windows = windows(query, *size);
            query_windows += windows.len();
            for window in windows {
                if let Some(positions) = bag.get(&window) {
                    for &pos in positions {
                        shared[pos] += 1;
                    }
                }
            }
        }
        (shared, query_windows)
    }

    /// Dice similarity in `0.0..=1.0` of every candidate against `query`
    #[allow(clippy::cast_precision_loss)]
    pub fn scores(&self, query: &str) -> Vec<f64> {
        let (shared, query_windows) = self.shared_windows(query);
        shared
            .iter()
            .zip(&self.window_counts)
            .map(|(&common, &own)| {
                if common == 0 {
                    0.0
                } else {
                    (2 * common) as f64 / (query_windows + own) as f64
                }
            })
            .collect()
    }

    /// Up to `limit` best-scoring candidates, best first
    pub fn closest_n(&self, query: &str, limit: usize) -> Vec<&'a str> {
        if limit == 0 {
            return Vec::new();
        }

        let scores = self.scores(query);
        let mut ranked: Vec<usize> = (0..self.candidates.len())
            .filter(|&pos| scores[pos] > 0.0 && !self.candidates[pos].is_empty())
            .collect();
        // Stable sort, so equal scores stay in candidate order
        ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        ranked
            .into_iter()
            .take(limit)
            .map(|pos| self.candidates[pos].as_str())
            .collect()
    }
}

/// Distinct character windows of `size` over `text`.
///
/// Text shorter than the window contributes itself as a single window.
fn windows(text: &str, size: usize) -> HashSet<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return HashSet::new();
    }
    if chars.len() <= size {
        return HashSet::from([text.to_string()]);
    }
    chars
        .windows(size)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
