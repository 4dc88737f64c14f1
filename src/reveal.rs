use crate::constants::REVEAL_SECTION_SELECTOR;
use crate::dom;
use site_core::{RevealSet, REVEAL_OFFSET_PX, REVEAL_THRESHOLD, REVEAL_TRANSITION};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

fn hide(section: &web::HtmlElement) {
    dom::set_style(section, "opacity", "0");
    dom::set_style(section, "transform", &format!("translateY({REVEAL_OFFSET_PX}px)"));
    dom::set_style(section, "transition", REVEAL_TRANSITION);
}

fn show(section: &web::HtmlElement) {
    dom::set_style(section, "opacity", "1");
    dom::set_style(section, "transform", "translateY(0)");
}

/// Fade every section in the first time it scrolls into view. Sections stay
/// shown afterwards and are unobserved once revealed.
pub fn setup(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all_html(document, REVEAL_SECTION_SELECTOR);
    if sections.is_empty() {
        log::debug!("[reveal] no sections");
        return Ok(());
    }
    let state = Rc::new(RefCell::new(RevealSet::new(sections.len())));

    let cb_state = state.clone();
    let cb_sections = sections.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let node: &web::Node = &target;
                let Some(index) = cb_sections
                    .iter()
                    .position(|s| s.is_same_node(Some(node)))
                else {
                    continue;
                };
                let mut reveals = cb_state.borrow_mut();
                if reveals.observe(index, entry.is_intersecting()) {
                    show(&cb_sections[index]);
                    log::debug!(
                        "[reveal] {}/{} sections shown",
                        reveals.revealed_count(),
                        reveals.len()
                    );
                }
                if reveals.is_revealed(index) {
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for section in &sections {
        hide(section);
        observer.observe(section);
    }
    log::info!("[reveal] observing {} sections", state.borrow().len());
    Ok(())
}
