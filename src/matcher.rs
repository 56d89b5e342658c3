//! Pair evaluation: do two selected symbols share exactly one radical?

use crate::breakdown::Breakdown;
use crate::deck::{CardPair, SymbolId};
use crate::error::MalformedRound;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Outcome {
    NoMatch,
    UniqueMatch(&'static str),
    /// More than one shared radical. Never produced by a well-formed card pair.
    Ambiguous(Vec<&'static str>),
}

impl Outcome {
    pub fn is_unique(&self) -> bool {
        matches!(self, Outcome::UniqueMatch(_))
    }
}

/// Intersect the two symbols' components. Unknown symbols count as having
/// no components. Order of `a` and `b` does not matter.
pub fn evaluate(a: SymbolId, b: SymbolId, index: &Breakdown) -> Outcome {
    let (Some(ca), Some(cb)) = (index.get(a), index.get(b)) else {
        return Outcome::NoMatch;
    };
    let mut shared = ca.intersection(cb);
    match shared.len() {
        0 => Outcome::NoMatch,
        1 => Outcome::UniqueMatch(shared.remove(0)),
        _ => Outcome::Ambiguous(shared),
    }
}

/// First cross-card pair (first-card symbol outer) with a unique match.
pub fn find_unique_pair(cards: &CardPair, index: &Breakdown) -> Option<(SymbolId, SymbolId, &'static str)> {
    cards.cross_pairs().find_map(|(a, b)| match evaluate(a, b, index) {
        Outcome::UniqueMatch(component) => Some((a, b, component)),
        _ => None,
    })
}

/// Checks the dealt pair holds exactly one unique match and no ambiguous pair.
pub fn audit(cards: &CardPair, index: &Breakdown) -> Result<(), MalformedRound> {
    let mut unique_matches = 0;
    let mut ambiguous_pairs = 0;
    for (a, b) in cards.cross_pairs() {
        match evaluate(a, b, index) {
            Outcome::UniqueMatch(_) => unique_matches += 1,
            Outcome::Ambiguous(_) => ambiguous_pairs += 1,
            Outcome::NoMatch => {}
        }
    }
    if unique_matches == 1 && ambiguous_pairs == 0 {
        Ok(())
    } else {
        Err(MalformedRound { unique_matches, ambiguous_pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::CardSlot::{First, Second};

    fn index_for(first: &[crate::deck::CardEntry], second: &[crate::deck::CardEntry]) -> (CardPair, Breakdown) {
        let cards = CardPair::from_entries(first, second).unwrap();
        let index = Breakdown::build(&cards);
        (cards, index)
    }

    #[test]
    fn test_unique_match_on_shared_water_radical() {
        let (_, index) = index_for(&[("薄", &["氵", "艹"])], &[("淩", &["氵", "土"])]);
        let a = SymbolId::new(First, 0);
        let b = SymbolId::new(Second, 0);
        assert_eq!(evaluate(a, b, &index), Outcome::UniqueMatch("氵"));
        assert_eq!(evaluate(b, a, &index), Outcome::UniqueMatch("氵"));
    }

    #[test]
    fn test_disjoint_cards_are_all_no_match() {
        let (cards, index) = index_for(
            &[("薄", &["氵", "艹"]), ("呆", &["木", "口"])],
            &[("愀", &["火", "忄"]), ("絹", &["月", "糹"])],
        );
        for (a, b) in cards.cross_pairs() {
            assert_eq!(evaluate(a, b, &index), Outcome::NoMatch);
        }
        assert!(find_unique_pair(&cards, &index).is_none());
        assert_eq!(
            audit(&cards, &index),
            Err(MalformedRound { unique_matches: 0, ambiguous_pairs: 0 })
        );
    }

    #[test]
    fn test_ambiguous_pair_reported() {
        let (cards, index) = index_for(&[("愁", &["木", "火"])], &[("懡", &["木", "火"])]);
        let out = evaluate(SymbolId::new(First, 0), SymbolId::new(Second, 0), &index);
        assert_eq!(out, Outcome::Ambiguous(vec!["木", "火"]));
        assert!(!out.is_unique());
        assert_eq!(
            audit(&cards, &index),
            Err(MalformedRound { unique_matches: 0, ambiguous_pairs: 1 })
        );
    }

    #[test]
    fn test_unknown_symbol_is_no_match() {
        let (_, index) = index_for(&[("薄", &["氵", "艹"])], &[("淩", &["氵", "土"])]);
        assert_eq!(evaluate(SymbolId::new(First, 3), SymbolId::new(Second, 0), &index), Outcome::NoMatch);
    }

    #[test]
    fn test_find_unique_pair_scans_in_card_order() {
        let (cards, index) = index_for(
            &[("呆", &["木", "口"]), ("薄", &["氵", "艹"])],
            &[("愀", &["火", "忄"]), ("淩", &["氵", "土"])],
        );
        assert_eq!(
            find_unique_pair(&cards, &index),
            Some((SymbolId::new(First, 1), SymbolId::new(Second, 1), "氵"))
        );
        assert!(audit(&cards, &index).is_ok());
    }
}
