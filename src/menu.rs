use crate::constants::{
    ACTIVE_CLASS, BODY_MENU_OPEN_CLASS, MENU_TOGGLE_SELECTOR, MOBILE_LINK_SELECTOR,
    MOBILE_MENU_SELECTOR,
};
use crate::dom;
use site_core::{ClickTarget, MenuEvent, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Reflect the open state onto the toggle controls, the overlay and `<body>`.
pub fn sync(document: &web::Document, open: bool) {
    for toggle in dom::query_all(document, MENU_TOGGLE_SELECTOR) {
        set_class(&toggle, ACTIVE_CLASS, open);
    }
    if let Ok(Some(menu)) = document.query_selector(MOBILE_MENU_SELECTOR) {
        set_class(&menu, ACTIVE_CLASS, open);
    }
    if let Some(body) = document.body() {
        set_class(&body, BODY_MENU_OPEN_CLASS, open);
    }
}

#[inline]
pub fn show(document: &web::Document) {
    sync(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    sync(document, false);
}

/// Where a click landed relative to the menu. Links win over the overlay they
/// sit in; the toggle wins over everything.
pub fn classify_click(target: Option<&web::Element>) -> ClickTarget {
    let Some(el) = target else {
        return ClickTarget::Outside;
    };
    if dom::within(el, MENU_TOGGLE_SELECTOR) {
        ClickTarget::Toggle
    } else if dom::within(el, MOBILE_LINK_SELECTOR) {
        ClickTarget::MenuLink
    } else if dom::within(el, MOBILE_MENU_SELECTOR) {
        ClickTarget::InsideMenu
    } else {
        ClickTarget::Outside
    }
}

/// Shared menu state plus the document it renders into.
#[derive(Clone)]
pub struct Menu {
    document: web::Document,
    state: Rc<RefCell<MenuState>>,
}

impl Menu {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            state: Rc::new(RefCell::new(MenuState::default())),
        }
    }

    pub fn dispatch(&self, ev: MenuEvent) {
        let (was_open, open) = {
            let mut st = self.state.borrow_mut();
            let was = st.is_open();
            (was, st.handle(ev))
        };
        if was_open != open {
            log::debug!("[menu] {:?} -> open={}", ev, open);
            if open {
                show(&self.document);
            } else {
                hide(&self.document);
            }
        }
    }
}
