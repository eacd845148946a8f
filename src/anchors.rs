use crate::core::{anchor_scroll_top, anchor_selector};
use crate::dom;
use web_sys as web;

/// Replace jump-to-anchor navigation with a smooth scroll that leaves room
/// for the fixed header.
pub fn init(document: &web::Document) {
    let anchors = dom::query_document(document, "a[href^=\"#\"]");
    let count = anchors.len();
    for anchor in anchors {
        let doc = document.clone();
        let anchor_el = anchor.clone();
        dom::add_click_listener(&anchor, move |ev| {
            ev.prevent_default();
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if let Some(target) = anchor_selector(&href).and_then(|sel| dom::query_one(&doc, sel)) {
                scroll_to_element(&target);
            }
        });
    }
    log::info!("[anchors] smooth scroll on {} links", count);
}

fn scroll_to_element(target: &web::Element) {
    let Some(window) = web::window() else {
        return;
    };
    let element_top = target.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);

    let options = web::ScrollToOptions::new();
    options.set_top(anchor_scroll_top(element_top, page_y));
    options.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
