use crate::carousel::SharedCarousel;
use crate::dom;
use crate::menu::Menu;
use site_core::{menu_event_for_key, nav_for_key};
use web_sys as web;

// Escape closes the mobile menu; no other key touches it.
pub fn wire_menu_escape(document: &web::Document, menu: &Menu) {
    let menu = menu.clone();
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(e) = menu_event_for_key(&ev.key()) {
            menu.dispatch(e);
        }
    });
}

/// Arrow keys step a slider, but only while that slider is on screen, so two
/// sliders on one page do not both move on the same key press.
pub fn wire_carousel_keys(carousel: &SharedCarousel) {
    let Some(window) = web::window() else {
        return;
    };
    let carousel = carousel.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        let Some(nav) = nav_for_key(&ev.key()) else {
            return;
        };
        if !carousel.borrow().in_viewport() {
            return;
        }
        carousel.borrow_mut().navigate(nav);
    });
}
