//! Spot-it CJK core crate.
//!
//! Two cards of composite Hanzi are dealt; exactly one cross-card pair shares a
//! single radical component and the player has to find it. Game logic (deck,
//! breakdown index, matcher, round controller) is plain Rust and runs natively;
//! `dom` drives it from the page through `start_game()`.

use wasm_bindgen::prelude::*;

pub mod breakdown;
pub mod deck;
mod dom;
pub mod error;
pub mod gate;
mod logging;
pub mod matcher;
pub mod round;

pub use breakdown::Breakdown;
pub use deck::{ALL_CARDS, Card, CardPair, CardSlot, ComponentSet, Deck, Symbol, SymbolId};
pub use error::{DatasetError, DealError, MalformedRound};
pub use matcher::{Outcome, evaluate};
pub use round::{Command, Event, Notification, Phase, RenderRequest, Round, Step, Timing};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
}

// -----------------------------------------------------------------------------
// Page entrypoints
// -----------------------------------------------------------------------------

/// Deal a new round (two cards not used by earlier rounds) and draw it.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    dom::start_round(Timing::default())
}

/// Same as `start_game()` with a custom base animation step in milliseconds.
#[wasm_bindgen]
pub fn start_game_with_timing(base_ms: u32) -> Result<(), JsValue> {
    dom::start_round(Timing::new(base_ms))
}

/// Click-equivalent selection. `card` is 1 or 2, `index` the symbol position.
#[wasm_bindgen]
pub fn select_symbol(card: u32, index: u32) {
    let slot = match card {
        1 => CardSlot::First,
        2 => CardSlot::Second,
        _ => return,
    };
    dom::dispatch(Event::SymbolSelected(SymbolId::new(slot, index as usize)));
}

#[wasm_bindgen]
pub fn forfeit() {
    dom::dispatch(Event::ForfeitRequested);
}

/// JSON view of the current round (phase, selection, revealed radical).
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn round_snapshot() -> Result<String, JsValue> {
    let snapshot = dom::snapshot().ok_or_else(|| JsValue::from_str("no round in progress"))?;
    serde_json::to_string(&snapshot).map_err(|err| JsValue::from_str(&err.to_string()))
}
