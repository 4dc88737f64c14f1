#![cfg(target_arch = "wasm32")]
use site_core::AcknowledgeOnly;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod carousel;
mod constants;
mod dom;
mod effects;
mod events;
mod form;
mod frame;
mod js;
mod menu;
mod reveal;
mod scene;

pub use carousel::{
    go_to_slide, go_to_video_slide, next_slide, next_video_slide, prev_slide, prev_video_slide,
};

/// Optional page libraries, looked up once when the document is ready.
/// The 3D library is looked up separately at load, since it may arrive later.
struct Capabilities {
    animator: Option<effects::Animator>,
    icons: Option<effects::Icons>,
}

impl Capabilities {
    fn detect() -> Self {
        let caps = Self {
            animator: effects::Animator::detect(),
            icons: effects::Icons::detect(),
        };
        log::info!(
            "[init] animation={} icons={}",
            caps.animator.is_some(),
            caps.icons.is_some()
        );
        caps
    }
}

thread_local! {
    static CAPS: RefCell<Option<Rc<Capabilities>>> = const { RefCell::new(None) };
    static SCENE_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

fn capabilities() -> Rc<Capabilities> {
    CAPS.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| Rc::new(Capabilities::detect()))
            .clone()
    })
}

fn run_step(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[init] {name} failed: {e:?}");
    }
}

// Both phases ask for the menu; only the first one wires it.
fn wire_menu_once(document: &web::Document) {
    static MENU_WIRED: AtomicBool = AtomicBool::new(false);
    if MENU_WIRED.swap(true, Ordering::SeqCst) {
        log::debug!("[menu] already wired");
        return;
    }
    let menu = menu::Menu::new(document.clone());
    events::wire_menu_clicks(document, &menu);
    events::wire_menu_escape(document, &menu);
    log::info!("[menu] wired");
}

/// Structure-ready phase: everything except the 3D scene.
fn on_ready() {
    static READY: AtomicBool = AtomicBool::new(false);
    if READY.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(document) = dom::window_document() else {
        log::error!("[init] no document");
        return;
    };

    wire_menu_once(&document);
    if !events::wire_cursor(&document) {
        log::debug!("[cursor] markers missing; native cursor kept");
    }
    run_step("image slider", carousel::setup(&document, &carousel::IMAGE_SLIDER));
    run_step("video slider", carousel::setup(&document, &carousel::VIDEO_SLIDER));
    run_step("scroll reveal", reveal::setup(&document));
    run_step("contact form", form::setup(&document, Rc::new(AcknowledgeOnly)));

    let caps = capabilities();
    match &caps.animator {
        Some(animator) => run_step("entrance effects", effects::setup_on_ready(animator, &document)),
        None => log::debug!("[fx] animation library absent"),
    }
    if let Some(icons) = &caps.icons {
        run_step("icons", icons.create_all());
    }
    if !events::wire_logo_split(&document) {
        log::debug!("[logo] no logo on this page");
    }
}

/// Fully-loaded phase: hero shutters and the 3D scene.
fn on_load() {
    static LOADED: AtomicBool = AtomicBool::new(false);
    if LOADED.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };

    wire_menu_once(&document);

    let caps = capabilities();
    if let Some(animator) = &caps.animator {
        run_step("shutter effects", effects::setup_on_load(animator, &document));
    }
    match scene::SceneLib::detect() {
        Some(lib) => match scene::setup(&lib, &document) {
            Ok(frames) => SCENE_LOOP.with(|slot| *slot.borrow_mut() = frames),
            Err(e) => log::error!("[init] hero scene failed: {e:?}"),
        },
        None => log::debug!("[scene] 3D library absent"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    carousel::install_globals(&window);

    let state = document.ready_state();
    if state == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| on_ready());
    } else {
        on_ready();
    }
    if state == "complete" {
        on_load();
    } else {
        dom::listen(&window, "load", |_: web::Event| on_load());
    }
    Ok(())
}

/// Stop the hero scene's animation loop, if it is running.
#[wasm_bindgen(js_name = stopHeroScene)]
pub fn stop_hero_scene() {
    SCENE_LOOP.with(|slot| {
        if let Some(frames) = slot.borrow_mut().take() {
            if frames.is_running() {
                frames.stop();
                log::info!("[scene] stopped");
            }
        }
    });
}
