// Browser smoke test: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_draws_both_cards() {
    spotit_cjk::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    for id in ["card_1", "card_2"] {
        let card = doc.get_element_by_id(id).unwrap();
        assert!(card.child_element_count() >= 4);
    }
    spotit_cjk::forfeit();
}
