//! Browser driver: draws the dealt cards, turns clicks into round events and
//! runs the round's scheduled steps on browser timers.
//!
//! Expected page skeleton (all optional, missing card containers are created):
//! `#card_1`, `#card_2`, `#forfeit`, `#revealRow`, `#revealCard`.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, window};

use crate::deck::{CardSlot, Deck, SymbolId};
use crate::round::{Command, Event, Notification, Round, Timing};

const CELL_CLASSES: [&str; 5] = ["text-black", "cell", "animate__animated", "m-2", "p-2"];

thread_local! {
    static DECK: RefCell<Option<Deck>> = const { RefCell::new(None) };
    static ROUND: RefCell<Option<Round>> = const { RefCell::new(None) };
    // Bumped per deal so timers left over from an earlier round do nothing.
    static ROUND_GEN: Cell<u32> = const { Cell::new(0) };
}

fn document() -> Result<Document, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn cell_id(id: SymbolId) -> String {
    format!("{}_{}", id.card.dom_id(), id.index)
}

/// Deal a new round from the page-wide deck and draw it.
pub(crate) fn start_round(timing: Timing) -> Result<(), JsValue> {
    let doc = document()?;

    let round = DECK.with(|cell| {
        let mut deck = cell.borrow_mut();
        let deck = deck.get_or_insert_with(Deck::standard);
        Round::deal(deck, &mut rand::thread_rng(), timing)
    });
    let round = round.map_err(|err| JsValue::from_str(&err.to_string()))?;

    for slot in CardSlot::BOTH {
        card_container(&doc, slot)?.set_inner_html("");
    }
    for req in round.render_requests() {
        let container = card_container(&doc, req.id.card)?;
        let el = doc.create_element("div")?;
        el.set_id(&cell_id(req.id));
        el.set_text_content(Some(req.glyph));
        let classes = el.class_list();
        for class in CELL_CLASSES {
            classes.add_1(class)?;
        }
        classes.add_1(&format!("bg-{}", req.style_group))?;

        let id = req.id;
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(Event::SymbolSelected(id));
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        container.append_child(&el)?;
    }

    for hidden in ["revealRow", "revealCard"] {
        if let Some(el) = doc.get_element_by_id(hidden) {
            el.class_list().add_1("invisible").ok();
        }
    }

    // set_onclick replaces the previous round's handler.
    if let Some(button) = doc.get_element_by_id("forfeit") {
        let button: HtmlElement = button.dyn_into()?;
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            dispatch(Event::ForfeitRequested);
        }) as Box<dyn FnMut(_)>);
        button.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
    }

    ROUND_GEN.with(|g| g.set(g.get().wrapping_add(1)));
    ROUND.with(|cell| *cell.borrow_mut() = Some(round));
    Ok(())
}

fn card_container(doc: &Document, slot: CardSlot) -> Result<Element, JsValue> {
    if let Some(el) = doc.get_element_by_id(slot.dom_id()) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(slot.dom_id());
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&div)?;
    Ok(div)
}

pub(crate) fn dispatch(event: Event) {
    let commands = ROUND.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(|round| round.dispatch(event))
            .unwrap_or_default()
    });
    run(commands);
}

#[cfg(feature = "serde_json")]
pub(crate) fn snapshot() -> Option<crate::round::RoundSnapshot> {
    ROUND.with(|cell| cell.borrow().as_ref().map(Round::snapshot))
}

fn run(commands: Vec<Command>) {
    let doc = match document() {
        Ok(doc) => doc,
        Err(_) => return,
    };
    let generation = ROUND_GEN.with(Cell::get);
    for command in commands {
        match command {
            Command::Notify(notification) => render(&doc, notification),
            Command::Schedule { delay_ms, step } => {
                Timeout::new(delay_ms, move || {
                    if ROUND_GEN.with(Cell::get) != generation {
                        return;
                    }
                    let next = ROUND.with(|cell| {
                        cell.borrow_mut()
                            .as_mut()
                            .map(|round| round.step_elapsed(step))
                            .unwrap_or_default()
                    });
                    run(next);
                })
                .forget();
            }
        }
    }
}

fn with_cells(doc: &Document, ids: &[SymbolId], f: impl Fn(&Element)) {
    for id in ids {
        if let Some(el) = doc.get_element_by_id(&cell_id(*id)) {
            f(&el);
        }
    }
}

fn render(doc: &Document, notification: Notification) {
    match notification {
        Notification::Selected(id) => with_cells(doc, &[id], |el| {
            el.class_list().add_1("selected").ok();
        }),
        Notification::Deselected(id) => with_cells(doc, &[id], |el| {
            el.class_list().remove_1("selected").ok();
        }),
        Notification::Wrong(pair) => with_cells(doc, &pair, |el| {
            el.class_list().add_2("wrong", "animate__headShake").ok();
        }),
        Notification::WrongCleared(pair) => with_cells(doc, &pair, |el| {
            el.class_list().remove_2("wrong", "animate__headShake").ok();
        }),
        Notification::Success(pair) => with_cells(doc, &pair, |el| {
            el.class_list().add_1("animate__tada").ok();
        }),
        Notification::Revealed(pair, component) => {
            with_cells(doc, &pair, |el| {
                el.class_list().remove_1("animate__tada").ok();
            });
            if let Some(card) = doc.get_element_by_id("revealCard") {
                card.set_text_content(Some(component));
                card.class_list().remove_1("invisible").ok();
            }
            if let Some(row) = doc.get_element_by_id("revealRow") {
                row.class_list().remove_1("invisible").ok();
            }
        }
    }
}
