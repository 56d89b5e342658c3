//! Card dataset, card/symbol types, and dealing.
//!
//! The card table itself lives in `cards_data` and is treated as read-only
//! content. Everything the round needs is copied out into owned [`Card`]s at
//! deal time so a round never reaches back into the table.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;

use crate::error::{DatasetError, DealError};

mod cards_data;

pub use cards_data::ALL_CARDS;

/// Raw card table row: (glyph, radical components).
pub type CardEntry = (&'static str, &'static [&'static str]);

/// Which of the two dealt cards a symbol sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardSlot {
    First,
    Second,
}

impl CardSlot {
    pub const BOTH: [CardSlot; 2] = [CardSlot::First, CardSlot::Second];

    /// Element id of the card container on the page.
    pub fn dom_id(self) -> &'static str {
        match self {
            CardSlot::First => "card_1",
            CardSlot::Second => "card_2",
        }
    }

    /// Visual style group the display layer colours the card's symbols with.
    pub fn style_group(self) -> &'static str {
        match self {
            CardSlot::First => "info",
            CardSlot::Second => "warning",
        }
    }

    fn index(self) -> usize {
        match self {
            CardSlot::First => 0,
            CardSlot::Second => 1,
        }
    }
}

/// Identity of a symbol within a round. The same glyph may appear on both
/// cards, so the glyph alone is not enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SymbolId {
    pub card: CardSlot,
    pub index: usize,
}

impl SymbolId {
    pub fn new(card: CardSlot, index: usize) -> Self {
        Self { card, index }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.card.dom_id(), self.index)
    }
}

/// Non-empty set of radical components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentSet(BTreeSet<&'static str>);

impl ComponentSet {
    pub fn new(components: &[&'static str]) -> Option<Self> {
        let set: BTreeSet<&'static str> = components.iter().copied().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, component: &str) -> bool {
        self.0.contains(component)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    /// Shared components, in sorted order.
    pub fn intersection(&self, other: &ComponentSet) -> Vec<&'static str> {
        self.0.intersection(&other.0).copied().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub glyph: &'static str,
    pub components: ComponentSet,
}

/// One dealt card: an ordered run of distinct symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    slot: CardSlot,
    symbols: Vec<Symbol>,
}

impl Card {
    pub fn from_entries(slot: CardSlot, entries: &[CardEntry]) -> Result<Self, DatasetError> {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(entries.len());
        for &(glyph, components) in entries {
            if symbols.iter().any(|s| s.glyph == glyph) {
                return Err(DatasetError::DuplicateSymbol { glyph });
            }
            let components =
                ComponentSet::new(components).ok_or(DatasetError::EmptyComponents { glyph })?;
            symbols.push(Symbol { glyph, components });
        }
        Ok(Self { slot, symbols })
    }

    pub fn slot(&self) -> CardSlot {
        self.slot
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    /// Symbols paired with their round-wide ids, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> + '_ {
        let slot = self.slot;
        self.symbols
            .iter()
            .enumerate()
            .map(move |(i, s)| (SymbolId::new(slot, i), s))
    }
}

/// The two cards of a round, addressable by slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPair([Card; 2]);

impl CardPair {
    /// Builds both cards from raw table rows, assigning slots in order.
    pub fn from_entries(first: &[CardEntry], second: &[CardEntry]) -> Result<Self, DatasetError> {
        Ok(Self([
            Card::from_entries(CardSlot::First, first)?,
            Card::from_entries(CardSlot::Second, second)?,
        ]))
    }

    pub fn get(&self, slot: CardSlot) -> &Card {
        &self.0[slot.index()]
    }

    pub fn first(&self) -> &Card {
        &self.0[0]
    }

    pub fn second(&self) -> &Card {
        &self.0[1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.0.iter()
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.get(id.card).symbol(id.index)
    }

    /// Every cross-card pair, first-card symbols outer, second-card inner.
    pub fn cross_pairs(&self) -> impl Iterator<Item = (SymbolId, SymbolId)> + '_ {
        self.first()
            .iter()
            .flat_map(move |(a, _)| self.second().iter().map(move |(b, _)| (a, b)))
    }
}

/// Cards still available for dealing. Dealt cards never come back.
#[derive(Clone, Debug)]
pub struct Deck {
    remaining: Vec<&'static [CardEntry]>,
}

impl Deck {
    pub fn standard() -> Self {
        Self::from_table(ALL_CARDS)
    }

    pub fn from_table(table: &[&'static [CardEntry]]) -> Self {
        Self { remaining: table.to_vec() }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Draw two distinct cards uniformly at random, without replacement.
    pub fn deal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<CardPair, DealError> {
        if self.remaining.len() < 2 {
            return Err(DealError::Exhausted { remaining: self.remaining.len() });
        }
        let first = self.remaining.remove(rng.gen_range(0..self.remaining.len()));
        let second = self.remaining.remove(rng.gen_range(0..self.remaining.len()));
        Ok(CardPair::from_entries(first, second)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_card_rejects_empty_components() {
        let err = Card::from_entries(CardSlot::First, &[("薄", &["氵", "艹"]), ("呆", &[])]);
        assert_eq!(err, Err(DatasetError::EmptyComponents { glyph: "呆" }));
    }

    #[test]
    fn test_card_rejects_duplicate_glyph() {
        let err = Card::from_entries(CardSlot::Second, &[("雨", &["雨"]), ("雨", &["雨"])]);
        assert_eq!(err, Err(DatasetError::DuplicateSymbol { glyph: "雨" }));
    }

    #[test]
    fn test_symbol_ids_follow_display_order() {
        let card = Card::from_entries(CardSlot::Second, ALL_CARDS[3]).unwrap();
        let ids: Vec<SymbolId> = card.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[0], SymbolId::new(CardSlot::Second, 0));
        assert_eq!(ids[4], SymbolId::new(CardSlot::Second, 4));
    }

    #[test]
    fn test_cross_pairs_enumeration_order() {
        let pair = CardPair::from_entries(ALL_CARDS[0], ALL_CARDS[3]).unwrap();
        let pairs: Vec<_> = pair.cross_pairs().collect();
        assert_eq!(pairs.len(), 4 * 5);
        assert_eq!(pairs[0], (SymbolId::new(CardSlot::First, 0), SymbolId::new(CardSlot::Second, 0)));
        assert_eq!(pairs[1], (SymbolId::new(CardSlot::First, 0), SymbolId::new(CardSlot::Second, 1)));
        assert_eq!(pairs[5], (SymbolId::new(CardSlot::First, 1), SymbolId::new(CardSlot::Second, 0)));
    }

    #[test]
    fn test_deal_without_replacement() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::from_table(&ALL_CARDS[..5]);
        let a = deck.deal(&mut rng).unwrap();
        let b = deck.deal(&mut rng).unwrap();
        assert_eq!(deck.remaining(), 1);
        let glyphs = |p: &CardPair| -> Vec<&'static str> {
            p.iter().map(|c| c.symbols()[0].glyph).collect()
        };
        let (ga, gb) = (glyphs(&a), glyphs(&b));
        assert_ne!(ga[0], ga[1]);
        assert!(ga.iter().all(|g| !gb.contains(g)));
        assert_eq!(deck.deal(&mut rng), Err(DealError::Exhausted { remaining: 1 }));
    }
}
