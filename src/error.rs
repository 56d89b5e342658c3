//! Error taxonomy for dealing and round auditing.
//!
//! Selection requests that cannot apply (second pick on the same card, clicks
//! after the reveal) are not errors; the round controller ignores them.

use thiserror::Error;

/// A card table entry that breaks the card invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("symbol '{glyph}' has no radical components")]
    EmptyComponents { glyph: &'static str },
    #[error("symbol '{glyph}' appears twice on the same card")]
    DuplicateSymbol { glyph: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("deck exhausted: {remaining} card(s) left, two needed")]
    Exhausted { remaining: usize },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// The two dealt cards do not hold exactly one single-radical pair.
///
/// Precondition violation on the dataset; callers log it and keep playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed round: {unique_matches} unique match(es), {ambiguous_pairs} ambiguous pair(s)")]
pub struct MalformedRound {
    pub unique_matches: usize,
    pub ambiguous_pairs: usize,
}
