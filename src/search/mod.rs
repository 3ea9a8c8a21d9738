//! Fuzzy ranking of prompts by name
//!
//! The engine is a pure function of (candidates, query, options). It never
//! touches the filesystem or the terminal, so the selector can call it on
//! every keystroke and the CLI can call it for one-shot lookups.

mod rank;

pub use rank::{Candidate, RankOptions, RankedMatch, rank, rank_matches, score, sorted_by_name};
