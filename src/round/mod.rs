//! Round controller.
//!
//! A round owns the two dealt cards, their breakdown index, the current
//! selection and the game-over flag. Input arrives as [`Event`]s; the round
//! answers with [`Command`]s for the display layer: notifications to render
//! now, and steps to hand back through [`Round::step_elapsed`] once their
//! delay has passed. While any step is outstanding, new input is parked and
//! replayed in order afterwards, so a resolution sequence is never
//! interleaved with player input.
//!
//! Phases: dealing happens in the constructor, then
//! `AwaitingFirstSelection -> AwaitingSecondSelection -> Resolving ->
//! {RoundOver | AwaitingFirstSelection}`.

use rand::Rng;

use crate::breakdown::Breakdown;
use crate::deck::{CardPair, Deck, SymbolId};
use crate::error::DealError;
use crate::gate::DelayGate;
use crate::matcher::{self, Outcome};

mod timing;

pub use timing::{DEFAULT_BASE_DELAY_MS, Timing};

/// Player (or page) input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    SymbolSelected(SymbolId),
    ForfeitRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    AwaitingFirstSelection,
    AwaitingSecondSelection,
    Resolving,
    RoundOver,
}

/// State changes the display layer renders as it sees fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Notification {
    Selected(SymbolId),
    Deselected(SymbolId),
    Wrong([SymbolId; 2]),
    WrongCleared([SymbolId; 2]),
    Success([SymbolId; 2]),
    Revealed([SymbolId; 2], &'static str),
}

/// Delayed continuation of a resolution sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    MarkWrong([SymbolId; 2]),
    ClearWrong([SymbolId; 2]),
    Celebrate([SymbolId; 2], &'static str),
    Reveal([SymbolId; 2], &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Notify(Notification),
    /// Call [`Round::step_elapsed`] with `step` after `delay_ms`.
    Schedule { delay_ms: u32, step: Step },
}

/// What the display layer draws for one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub id: SymbolId,
    pub glyph: &'static str,
    pub style_group: &'static str,
}

/// Point-in-time view of a round, for inspection from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub selected: Vec<SymbolId>,
    pub revealed: Option<&'static str>,
    pub pending_delays: u32,
}

#[derive(Debug)]
pub struct Round {
    cards: CardPair,
    breakdown: Breakdown,
    selected: Vec<SymbolId>,
    game_over: bool,
    revealed: Option<&'static str>,
    gate: DelayGate<Event>,
    timing: Timing,
}

impl Round {
    pub fn new(cards: CardPair) -> Self {
        Self::with_timing(cards, Timing::default())
    }

    pub fn with_timing(cards: CardPair, timing: Timing) -> Self {
        let breakdown = Breakdown::build(&cards);
        if let Err(err) = matcher::audit(&cards, &breakdown) {
            log::warn!("{err}");
        }
        log::debug!(
            "dealt {} + {} symbols",
            cards.first().symbols().len(),
            cards.second().symbols().len()
        );
        Self {
            cards,
            breakdown,
            selected: Vec::with_capacity(2),
            game_over: false,
            revealed: None,
            gate: DelayGate::new(),
            timing,
        }
    }

    /// Deal two fresh cards from `deck` and start a round on them.
    pub fn deal<R: Rng + ?Sized>(deck: &mut Deck, rng: &mut R, timing: Timing) -> Result<Self, DealError> {
        let cards = deck.deal(rng)?;
        Ok(Self::with_timing(cards, timing))
    }

    pub fn cards(&self) -> &CardPair {
        &self.cards
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Selected symbols in selection order.
    pub fn selected(&self) -> &[SymbolId] {
        &self.selected
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn revealed(&self) -> Option<&'static str> {
        self.revealed
    }

    pub fn pending_delays(&self) -> u32 {
        self.gate.pending()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::RoundOver
        } else if !self.gate.is_idle() {
            Phase::Resolving
        } else if self.selected.is_empty() {
            Phase::AwaitingFirstSelection
        } else {
            Phase::AwaitingSecondSelection
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase(),
            selected: self.selected.clone(),
            revealed: self.revealed,
            pending_delays: self.gate.pending(),
        }
    }

    /// Symbols to draw, first card then second, in card order.
    pub fn render_requests(&self) -> Vec<RenderRequest> {
        self.cards
            .iter()
            .flat_map(|card| {
                let style_group = card.slot().style_group();
                card.iter().map(move |(id, symbol)| RenderRequest {
                    id,
                    glyph: symbol.glyph,
                    style_group,
                })
            })
            .collect()
    }

    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        let mut out = Vec::new();
        if let Some(event) = self.gate.admit(event) {
            self.handle(event, &mut out);
        } else {
            log::debug!("parked {event:?} behind {} pending delay(s)", self.gate.pending());
        }
        out
    }

    /// Continue a resolution sequence once a scheduled delay has passed.
    pub fn step_elapsed(&mut self, step: Step) -> Vec<Command> {
        let mut out = Vec::new();
        self.apply_step(step, &mut out);
        self.gate.leave();
        while let Some(event) = self.gate.next_ready() {
            self.handle(event, &mut out);
        }
        out
    }

    fn handle(&mut self, event: Event, out: &mut Vec<Command>) {
        if self.game_over {
            return;
        }
        match event {
            Event::SymbolSelected(id) => self.select(id, out),
            Event::ForfeitRequested => self.forfeit(out),
        }
    }

    fn select(&mut self, id: SymbolId, out: &mut Vec<Command>) {
        if self.cards.symbol(id).is_none() {
            log::debug!("ignoring selection of unknown symbol {id}");
            return;
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            out.push(Command::Notify(Notification::Deselected(id)));
            return;
        }
        // one pick per card
        if self.selected.iter().any(|s| s.card == id.card) {
            return;
        }
        self.selected.push(id);
        out.push(Command::Notify(Notification::Selected(id)));
        if self.selected.len() == 2 {
            self.resolve(out);
        }
    }

    fn resolve(&mut self, out: &mut Vec<Command>) {
        let mut pair = [self.selected[0], self.selected[1]];
        pair.sort();
        match matcher::evaluate(pair[0], pair[1], &self.breakdown) {
            Outcome::NoMatch => {
                self.schedule(self.timing.wrong_mark_ms(), Step::MarkWrong(pair), out);
            }
            Outcome::UniqueMatch(component) => {
                self.schedule(self.timing.celebrate_ms(), Step::Celebrate(pair, component), out);
            }
            Outcome::Ambiguous(shared) => {
                log::warn!("{} and {} share {} radicals {shared:?}", pair[0], pair[1], shared.len());
            }
        }
    }

    fn forfeit(&mut self, out: &mut Vec<Command>) {
        let Some((a, b, _)) = matcher::find_unique_pair(&self.cards, &self.breakdown) else {
            if let Err(err) = matcher::audit(&self.cards, &self.breakdown) {
                log::warn!("forfeit found no match: {err}");
            }
            return;
        };
        for id in std::mem::take(&mut self.selected) {
            out.push(Command::Notify(Notification::Deselected(id)));
        }
        self.select(a, out);
        self.select(b, out);
    }

    fn apply_step(&mut self, step: Step, out: &mut Vec<Command>) {
        match step {
            Step::MarkWrong(pair) => {
                out.push(Command::Notify(Notification::Wrong(pair)));
                self.schedule(self.timing.wrong_clear_ms(), Step::ClearWrong(pair), out);
            }
            Step::ClearWrong(pair) => {
                out.push(Command::Notify(Notification::WrongCleared(pair)));
                for id in pair {
                    if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                        self.selected.remove(pos);
                        out.push(Command::Notify(Notification::Deselected(id)));
                    }
                }
            }
            Step::Celebrate(pair, component) => {
                out.push(Command::Notify(Notification::Success(pair)));
                self.schedule(self.timing.reveal_ms(), Step::Reveal(pair, component), out);
            }
            Step::Reveal(pair, component) => {
                self.game_over = true;
                self.revealed = Some(component);
                log::info!("round over, shared radical {component}");
                out.push(Command::Notify(Notification::Revealed(pair, component)));
            }
        }
    }

    fn schedule(&mut self, delay_ms: u32, step: Step, out: &mut Vec<Command>) {
        self.gate.enter();
        out.push(Command::Schedule { delay_ms, step });
    }
}
