//! Breakdown index: symbol -> radical components for the dealt cards.

use std::collections::HashMap;

use crate::deck::{CardPair, ComponentSet, SymbolId};

/// Lookup built once per round. A new round builds a new index; nothing
/// carries over.
#[derive(Clone, Debug, Default)]
pub struct Breakdown {
    components: HashMap<SymbolId, ComponentSet>,
}

impl Breakdown {
    pub fn build(cards: &CardPair) -> Self {
        let components = cards
            .iter()
            .flat_map(|card| card.iter())
            .map(|(id, symbol)| (id, symbol.components.clone()))
            .collect();
        Self { components }
    }

    pub fn get(&self, id: SymbolId) -> Option<&ComponentSet> {
        self.components.get(&id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
