//! Bridge to the optional animation-timeline and icon libraries.

use crate::constants::{
    ANIMATION_GLOBAL, HERO_SHUTTER_ID, ICON_GLOBAL, REVEAL_SHUTTER_SELECTOR, SCROLL_PLUGIN_GLOBAL,
};
use crate::dom;
use crate::js;
use site_core::effects::{
    hero_entrance, hero_image_settle, hero_shutter_open, shutter_clip, shutter_image, Counter,
    FromTo, TweenVars, HERO_IMAGE_POSITION, HERO_TEXT_SELECTOR, IMPACT_COUNTERS,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Handle to the animation library's global object.
#[derive(Clone)]
pub struct Animator {
    lib: JsValue,
}

impl Animator {
    /// Looks the library up once; `None` when the page did not load it.
    pub fn detect() -> Option<Self> {
        let lib = js::global(ANIMATION_GLOBAL)?;
        if let Some(plugin) = js::global(SCROLL_PLUGIN_GLOBAL) {
            if let Err(e) = js::call(&lib, "registerPlugin", &[plugin]) {
                log::warn!("[fx] scroll plugin registration failed: {e}");
            }
        }
        Some(Self { lib })
    }

    pub fn from(&self, target: &JsValue, vars: &TweenVars) -> anyhow::Result<JsValue> {
        js::call(&self.lib, "from", &[target.clone(), js::to_js(vars)?])
    }

    pub fn to(&self, target: &JsValue, vars: JsValue) -> anyhow::Result<JsValue> {
        js::call(&self.lib, "to", &[target.clone(), vars])
    }

    /// `fromTo` whose scroll trigger is the element `trigger`.
    pub fn from_to_triggered(
        &self,
        target: &JsValue,
        tween: &FromTo,
        trigger: &web::Element,
    ) -> anyhow::Result<JsValue> {
        let to = js::to_js(&tween.to)?;
        let scroll = js::get(&to, "scrollTrigger")?;
        if scroll.is_object() {
            js::set(&scroll, "trigger", trigger)?;
        }
        js::call(
            &self.lib,
            "fromTo",
            &[target.clone(), js::to_js(&tween.from)?, to],
        )
    }

    pub fn timeline(&self) -> anyhow::Result<Timeline> {
        Ok(Timeline {
            tl: js::call(&self.lib, "timeline", &[])?,
        })
    }
}

pub struct Timeline {
    tl: JsValue,
}

impl Timeline {
    pub fn from(
        &self,
        target: &JsValue,
        vars: &TweenVars,
        position: Option<&str>,
    ) -> anyhow::Result<&Self> {
        let mut args = vec![target.clone(), js::to_js(vars)?];
        if let Some(p) = position {
            args.push(JsValue::from_str(p));
        }
        js::call(&self.tl, "from", &args)?;
        Ok(self)
    }
}

/// Entrance tween for the hero text and the scroll-gated impact counters.
pub fn setup_on_ready(animator: &Animator, document: &web::Document) -> anyhow::Result<()> {
    animator.from(&JsValue::from_str(HERO_TEXT_SELECTOR), &hero_entrance())?;
    let mut armed = 0;
    for counter in IMPACT_COUNTERS {
        match start_counter(animator, document, counter) {
            Ok(()) => armed += 1,
            Err(e) => log::error!("[fx] counter {} failed: {e:?}", counter.id),
        }
    }
    log::info!("[fx] hero entrance and {armed}/{} counters armed", IMPACT_COUNTERS.len());
    Ok(())
}

fn start_counter(
    animator: &Animator,
    document: &web::Document,
    counter: Counter,
) -> anyhow::Result<()> {
    let tweened = js::to_js(&serde_json::json!({ "val": 0.0 }))?;
    let vars = js::to_js(&counter.tween())?;

    let doc = document.clone();
    let source = tweened.clone();
    let on_update = Closure::wrap(Box::new(move || {
        let value = js::get(&source, "val")
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if let Some(el) = doc.get_element_by_id(counter.id) {
            el.set_text_content(Some(&counter.text(value)));
        }
    }) as Box<dyn FnMut()>);
    js::set(&vars, "onUpdate", on_update.as_ref())?;
    on_update.forget();

    animator.to(&tweened, vars)?;
    Ok(())
}

/// Hero shutter timeline plus the replayable scroll shutters. Runs once the
/// page and its images have loaded.
pub fn setup_on_load(animator: &Animator, document: &web::Document) -> anyhow::Result<()> {
    if let Some(hero) = document.get_element_by_id(HERO_SHUTTER_ID) {
        let tl = animator.timeline()?;
        tl.from(&hero, &hero_shutter_open(), None)?;
        if let Ok(Some(img)) = hero.query_selector("img") {
            tl.from(&img, &hero_image_settle(), Some(HERO_IMAGE_POSITION))?;
        }
        log::info!("[fx] hero shutter timeline started");
    }

    let shutters = dom::query_all(document, REVEAL_SHUTTER_SELECTOR);
    for shutter in &shutters {
        animator.from_to_triggered(shutter, &shutter_clip(), shutter)?;
        if let Ok(Some(img)) = shutter.query_selector("img") {
            animator.from_to_triggered(&img, &shutter_image(), shutter)?;
        }
    }
    if !shutters.is_empty() {
        log::info!("[fx] {} scroll shutters armed", shutters.len());
    }
    Ok(())
}

/// Handle to the icon library.
pub struct Icons {
    lib: JsValue,
}

impl Icons {
    pub fn detect() -> Option<Self> {
        js::global(ICON_GLOBAL).map(|lib| Self { lib })
    }

    pub fn create_all(&self) -> anyhow::Result<()> {
        js::call(&self.lib, "createIcons", &[])?;
        log::debug!("[fx] icons created");
        Ok(())
    }
}
