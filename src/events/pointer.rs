use crate::carousel::SharedCarousel;
use crate::constants::{
    CURSOR_DOT_ID, CURSOR_HOVER_SELECTOR, CURSOR_ID, LOGO_SPLIT_CLASS, NAV_LOGO_SELECTOR,
};
use crate::dom;
use crate::menu::{self, Menu};
use site_core::{cursor_positions, logo_should_split, CursorHover, MenuEvent, SwipeTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One delegated click listener drives the toggle and outside-click dismissal.
pub fn wire_menu_clicks(document: &web::Document, menu: &Menu) {
    let menu = menu.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let target = dom::event_element(&ev);
        let hit = menu::classify_click(target.as_ref());
        menu.dispatch(MenuEvent::Click(hit));
    });
}

/// Ring and dot follow the pointer; the ring grows over interactive elements.
/// Elements added after setup do not get the hover effect.
pub fn wire_cursor(document: &web::Document) -> bool {
    let (Some(ring), Some(dot)) = (
        dom::html_by_id(document, CURSOR_ID),
        dom::html_by_id(document, CURSOR_DOT_ID),
    ) else {
        return false;
    };

    {
        let ring = ring.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let ([rx, ry], [dx, dy]) =
                cursor_positions(ev.client_x() as f64, ev.client_y() as f64);
            dom::set_style(&ring, "left", &format!("{rx}px"));
            dom::set_style(&ring, "top", &format!("{ry}px"));
            dom::set_style(&dot, "left", &format!("{dx}px"));
            dom::set_style(&dot, "top", &format!("{dy}px"));
        });
    }

    let hover = Rc::new(RefCell::new(CursorHover::default()));
    let targets = dom::query_all(document, CURSOR_HOVER_SELECTOR);
    for el in &targets {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let ring = ring.clone();
            let hover = hover.clone();
            dom::listen(el, event, move |_: web::MouseEvent| {
                let look = {
                    let mut h = hover.borrow_mut();
                    if h.is_hovered() == entering {
                        return;
                    }
                    if entering {
                        h.enter()
                    } else {
                        h.leave()
                    }
                };
                dom::set_style(&ring, "transform", &format!("scale({})", look.scale));
                dom::set_style(&ring, "border-color", look.border_color);
            });
        }
    }
    log::info!("[cursor] tracking pointer, {} hover targets", targets.len());
    true
}

/// The logo splits while the pointer is near its center or over it.
pub fn wire_logo_split(document: &web::Document) -> bool {
    let Ok(Some(logo)) = document.query_selector(NAV_LOGO_SELECTOR) else {
        return false;
    };

    {
        let logo = logo.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            let rect = logo.get_bounding_client_rect();
            let center = [
                rect.left() + rect.width() / 2.0,
                rect.top() + rect.height() / 2.0,
            ];
            let pointer = [ev.client_x() as f64, ev.client_y() as f64];
            let cl = logo.class_list();
            _ = if logo_should_split(pointer, center) {
                cl.add_1(LOGO_SPLIT_CLASS)
            } else {
                cl.remove_1(LOGO_SPLIT_CLASS)
            };
        });
    }
    for (event, split) in [("mouseenter", true), ("mouseleave", false)] {
        let target = logo.clone();
        dom::listen(&logo, event, move |_: web::MouseEvent| {
            let cl = target.class_list();
            _ = if split {
                cl.add_1(LOGO_SPLIT_CLASS)
            } else {
                cl.remove_1(LOGO_SPLIT_CLASS)
            };
        });
    }
    true
}

#[inline]
fn first_changed_screen_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

/// Horizontal swipes on the slider root step it forward or back.
pub fn wire_swipe(carousel: &SharedCarousel) {
    let root: web::EventTarget = carousel.borrow().root().clone().unchecked_into();
    let tracker = Rc::new(RefCell::new(SwipeTracker::default()));

    {
        let tracker = tracker.clone();
        dom::listen(&root, "touchstart", move |ev: web::TouchEvent| {
            if let Some(x) = first_changed_screen_x(&ev) {
                tracker.borrow_mut().begin(x);
            }
        });
    }

    let carousel = carousel.clone();
    dom::listen(&root, "touchend", move |ev: web::TouchEvent| {
        let Some(x) = first_changed_screen_x(&ev) else {
            return;
        };
        let nav = tracker.borrow_mut().end(x);
        if let Some(nav) = nav {
            carousel.borrow_mut().navigate(nav);
        }
    });
}
