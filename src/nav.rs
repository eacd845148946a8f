use crate::core::navbar_scrolled;
use crate::dom;
use web_sys as web;

const ACTIVE: &str = "active";
const SCROLLED: &str = "scrolled";

/// Navbar `scrolled` styling and the mobile menu toggle.
pub fn init(document: &web::Document) {
    wire_navbar_scroll(document);
    wire_mobile_menu(document);
}

fn wire_navbar_scroll(document: &web::Document) {
    let Some(navbar) = dom::query_one(document, ".navbar") else {
        log::warn!("[nav] no .navbar, scroll styling disabled");
        return;
    };
    dom::set_class(&navbar, SCROLLED, navbar_scrolled(dom::scroll_y()));
    dom::add_window_listener("scroll", move || {
        dom::set_class(&navbar, SCROLLED, navbar_scrolled(dom::scroll_y()));
    });
}

fn wire_mobile_menu(document: &web::Document) {
    let (Some(button), Some(links)) = (
        dom::query_one(document, ".mobile-menu-btn"),
        dom::query_one(document, ".nav-links"),
    ) else {
        return;
    };

    {
        let button_el = button.clone();
        let links = links.clone();
        dom::add_click_listener(&button, move |_| {
            _ = links.class_list().toggle(ACTIVE);
            _ = button_el.class_list().toggle(ACTIVE);
        });
    }

    for link in dom::query_all(&links, "a") {
        let button = button.clone();
        let links = links.clone();
        dom::add_click_listener(&link, move |_| {
            _ = links.class_list().remove_1(ACTIVE);
            _ = button.class_list().remove_1(ACTIVE);
        });
    }
    log::info!("[nav] mobile menu wired");
}
