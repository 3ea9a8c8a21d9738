//! Subsequence scoring and result ordering
//!
//! A candidate matches when every query character appears in its name, in
//! order, ignoring case. Among all such alignments the best-scoring one is
//! used:
//!
//! | Component      | Points                                              |
//! |----------------|-----------------------------------------------------|
//! | base           | 1 per matched character                             |
//! | contiguity     | 1 per pair of matched characters that are adjacent  |
//! | start of name  | 2 when the first match is at position 0             |
//! | word boundary  | 1 per match right after a space, `-` or `_`         |
//! | exact case     | 1 per match whose case equals the query's           |
//!
//! Results are ordered by descending score, then ascending name.

use std::cmp::Ordering;

const BASE_POINTS: u32 = 1;
const CONTIGUITY_BONUS: u32 = 1;
const START_BONUS: u32 = 2;
const BOUNDARY_BONUS: u32 = 1;
const CASE_BONUS: u32 = 1;

/// Anything the engine can rank. Only the display name takes part in scoring.
pub trait Candidate {
    /// Name used for matching and for the name-order tie break
    fn name(&self) -> &str;
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl Candidate for str {
    fn name(&self) -> &str {
        self
    }
}

impl Candidate for String {
    fn name(&self) -> &str {
        self
    }
}

/// Tuning knobs for a ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankOptions {
    /// Maximum number of results; `0` means no cap
    pub max_results: usize,
}

impl RankOptions {
    /// Options with the given result cap
    #[must_use]
    pub const fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }
}

/// One ranked candidate together with its position in the input slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch<'a, T> {
    /// Index of the candidate in the slice handed to [`rank_matches`]
    pub index: usize,
    /// The matched candidate
    pub candidate: &'a T,
    /// Relevance score, higher is better
    pub score: u32,
}

/// Score `query` against `name`.
///
/// Returns `None` when `query` is not a case-insensitive subsequence of
/// `name`. An empty query matches everything with a score of zero.
#[must_use]
pub fn score(name: &str, query: &str) -> Option<u32> {
    let name: Vec<char> = name.chars().collect();
    let query: Vec<char> = query.chars().collect();

    let Some((&first, rest)) = query.split_first() else {
        return Some(0);
    };
    if query.len() > name.len() {
        return None;
    }

    // best[j]: best score of the query prefix so far, with its last
    // character matched at name[j]
    let mut best: Vec<Option<u32>> = (0..name.len())
        .map(|j| {
            let start = if j == 0 { START_BONUS } else { 0 };
            char_points(&name, j, first).map(|points| points + start)
        })
        .collect();

    for &q in rest {
        let mut next = vec![None; name.len()];
        // max of best[k] for k < j - 1, i.e. a gapped predecessor
        let mut gapped: Option<u32> = None;
        for j in 1..name.len() {
            if j >= 2 {
                gapped = gapped.max(best[j - 2]);
            }
            let Some(points) = char_points(&name, j, q) else {
                continue;
            };
            let adjacent = best[j - 1].map(|s| s + CONTIGUITY_BONUS);
            if let Some(prefix) = adjacent.max(gapped) {
                next[j] = Some(prefix + points);
            }
        }
        best = next;
    }

    best.into_iter().flatten().max()
}

/// Points for matching query character `q` at `name[j]`, or `None` when the
/// characters differ ignoring case.
fn char_points(name: &[char], j: usize, q: char) -> Option<u32> {
    let c = name[j];
    if !c.to_lowercase().eq(q.to_lowercase()) {
        return None;
    }

    let mut points = BASE_POINTS;
    if j > 0 && is_separator(name[j - 1]) {
        points += BOUNDARY_BONUS;
    }
    if c == q {
        points += CASE_BONUS;
    }
    Some(points)
}

const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '-' | '_')
}

fn by_score_then_name<T: Candidate>(a: &RankedMatch<'_, T>, b: &RankedMatch<'_, T>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.candidate.name().cmp(b.candidate.name()))
        .then_with(|| a.index.cmp(&b.index))
}

/// Rank `candidates` against `query`, keeping scores and input positions.
///
/// An empty query yields every candidate in name order, uncapped. Otherwise
/// non-matching candidates are dropped, the rest ordered by descending score
/// then ascending name, and the list cut to `options.max_results` when that
/// is non-zero.
#[must_use]
pub fn rank_matches<'a, T: Candidate>(
    candidates: &'a [T],
    query: &str,
    options: RankOptions,
) -> Vec<RankedMatch<'a, T>> {
    if query.is_empty() {
        return sorted_by_name(candidates)
            .into_iter()
            .map(|(index, candidate)| RankedMatch {
                index,
                candidate,
                score: 0,
            })
            .collect();
    }

    let mut matches: Vec<RankedMatch<'a, T>> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            score(candidate.name(), query).map(|score| RankedMatch {
                index,
                candidate,
                score,
            })
        })
        .collect();

    matches.sort_by(by_score_then_name);
    if options.max_results > 0 {
        matches.truncate(options.max_results);
    }
    matches
}

/// Rank `candidates` against `query` and return the ordered candidates.
#[must_use]
pub fn rank<'a, T: Candidate>(candidates: &'a [T], query: &str, options: RankOptions) -> Vec<&'a T> {
    rank_matches(candidates, query, options)
        .into_iter()
        .map(|m| m.candidate)
        .collect()
}

/// Every candidate paired with its index, in case-sensitive name order.
#[must_use]
pub fn sorted_by_name<T: Candidate>(candidates: &[T]) -> Vec<(usize, &T)> {
    let mut all: Vec<(usize, &T)> = candidates.iter().enumerate().collect();
    all.sort_by(|(ia, a), (ib, b)| a.name().cmp(b.name()).then(ia.cmp(ib)));
    all
}
