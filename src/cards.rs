use crate::core::card_matches;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_REVEAL_ANIMATION: &str = "fadeInUp 0.5s ease forwards";

/// Category filter buttons over the dog profile cards.
pub fn init_filter(document: &web::Document) {
    let buttons = Rc::new(dom::query_document(document, ".filter-btn"));
    let cards = Rc::new(dom::query_document(document, ".dog-card"));
    if buttons.is_empty() {
        return;
    }
    for button in buttons.iter() {
        let buttons = buttons.clone();
        let cards = cards.clone();
        let button_el = button.clone();
        dom::add_click_listener(button, move |_| {
            dom::select_exclusive(&buttons, &button_el, "active");
            let filter = button_el.get_attribute("data-filter").unwrap_or_default();
            apply_filter(&cards, &filter);
        });
    }
    log::info!(
        "[cards] filter wired: {} buttons, {} cards",
        buttons.len(),
        cards.len()
    );
}

fn apply_filter(cards: &[web::Element], filter: &str) {
    for card in cards {
        let Some(card) = card.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        let style = card.style();
        let category = card.get_attribute("data-category");
        if card_matches(filter, category.as_deref()) {
            _ = style.set_property("display", "block");
            _ = style.set_property("animation", CARD_REVEAL_ANIMATION);
        } else {
            _ = style.set_property("display", "none");
        }
    }
}

/// Donation tiers: clicking one card makes it the only selected card.
pub fn init_donations(document: &web::Document) {
    let cards = Rc::new(dom::query_document(document, ".donation-card"));
    for card in cards.iter() {
        let cards = cards.clone();
        let card_el = card.clone();
        dom::add_click_listener(card, move |_| {
            dom::select_exclusive(&cards, &card_el, "selected");
        });
    }
}
