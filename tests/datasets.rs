// Card table invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use spotit_cjk::{ALL_CARDS, Breakdown, CardPair, Outcome, evaluate, matcher};

#[test]
fn every_card_builds() {
    for (n, entries) in ALL_CARDS.iter().enumerate() {
        let pair = CardPair::from_entries(entries, entries);
        assert!(pair.is_ok(), "card {} rejected: {:?}", n, pair.err());
    }
}

#[test]
fn components_are_trimmed_single_glyphs() {
    for entries in ALL_CARDS {
        for (glyph, comps) in entries.iter() {
            assert!(!comps.is_empty(), "'{}' has no components", glyph);
            for c in comps.iter() {
                assert_eq!(c.trim(), *c, "component '{}' of '{}' has whitespace", c, glyph);
                assert_eq!(c.chars().count(), 1, "component '{}' of '{}' is not one glyph", c, glyph);
            }
        }
    }
}

#[test]
fn cards_hold_four_or_five_symbols() {
    for entries in ALL_CARDS {
        assert!((4..=5).contains(&entries.len()));
        let glyphs: HashSet<&str> = entries.iter().map(|(g, _)| *g).collect();
        assert_eq!(glyphs.len(), entries.len());
    }
}

// Any two distinct cards make a playable round.
#[test]
fn every_card_pair_is_a_well_formed_round() {
    for i in 0..ALL_CARDS.len() {
        for j in (i + 1)..ALL_CARDS.len() {
            let cards = CardPair::from_entries(ALL_CARDS[i], ALL_CARDS[j]).unwrap();
            let index = Breakdown::build(&cards);
            assert_eq!(matcher::audit(&cards, &index), Ok(()), "cards {} and {}", i, j);
        }
    }
}

#[test]
fn evaluation_is_order_independent() {
    for i in 0..8 {
        let cards = CardPair::from_entries(ALL_CARDS[i], ALL_CARDS[i + 8]).unwrap();
        let index = Breakdown::build(&cards);
        let mut unique = 0;
        for (a, b) in cards.cross_pairs() {
            let out = evaluate(a, b, &index);
            assert_eq!(out, evaluate(b, a, &index));
            match out {
                Outcome::UniqueMatch(_) => unique += 1,
                Outcome::NoMatch => {}
                Outcome::Ambiguous(shared) => panic!("ambiguous pair sharing {:?}", shared),
            }
        }
        assert_eq!(unique, 1);
    }
}
