use crate::constants::*;
use crate::dom;
use crate::events;
use site_core::{Carousel, CarouselKind, FadeClock, Nav, SiteError, SLIDE_FADE_DELAY_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Where a slider lives in the page and how its indicators glow.
pub struct SliderMarkup {
    pub kind: CarouselKind,
    pub root_id: &'static str,
    pub slide_selector: &'static str,
    pub indicator_selector: &'static str,
    pub indicator_glow: &'static str,
}

pub const IMAGE_SLIDER: SliderMarkup = SliderMarkup {
    kind: CarouselKind::Image,
    root_id: IMAGE_SLIDER_ID,
    slide_selector: IMAGE_SLIDE_SELECTOR,
    indicator_selector: IMAGE_DOT_SELECTOR,
    indicator_glow: IMAGE_INDICATOR_GLOW,
};

pub const VIDEO_SLIDER: SliderMarkup = SliderMarkup {
    kind: CarouselKind::Video,
    root_id: VIDEO_SLIDER_ID,
    slide_selector: VIDEO_SLIDE_SELECTOR,
    indicator_selector: VIDEO_DOT_SELECTOR,
    indicator_glow: VIDEO_INDICATOR_GLOW,
};

pub struct CarouselView {
    state: Carousel,
    root: web::HtmlElement,
    slides: Vec<web::HtmlElement>,
    indicators: Vec<web::HtmlElement>,
    indicator_glow: &'static str,
    title: Option<web::HtmlElement>,
    description: Option<web::HtmlElement>,
    // Every render issues a new ticket so a pending fade-in for an older slide is dropped.
    fades: Rc<Cell<FadeClock>>,
}

pub type SharedCarousel = Rc<RefCell<CarouselView>>;

impl CarouselView {
    /// Collect the slider's elements. `None` when the slider is not on this page.
    pub fn from_document(
        document: &web::Document,
        markup: &SliderMarkup,
    ) -> Result<Option<Self>, SiteError> {
        let Some(root) = dom::html_by_id(document, markup.root_id) else {
            return Ok(None);
        };
        let slides = dom::query_all_html(document, markup.slide_selector);
        let state = Carousel::new(markup.kind, slides.len())?;
        let (title, description) = match markup.kind {
            CarouselKind::Video => (
                dom::html_by_id(document, SLIDE_TITLE_ID),
                dom::html_by_id(document, SLIDE_DESC_ID),
            ),
            CarouselKind::Image => (None, None),
        };
        Ok(Some(Self {
            state,
            root,
            slides,
            indicators: dom::query_all_html(document, markup.indicator_selector),
            indicator_glow: markup.indicator_glow,
            title,
            description,
            fades: Rc::new(Cell::new(FadeClock::default())),
        }))
    }

    #[inline]
    pub fn kind(&self) -> CarouselKind {
        self.state.kind()
    }

    #[inline]
    pub fn root(&self) -> &web::HtmlElement {
        &self.root
    }

    pub fn indicators(&self) -> &[web::HtmlElement] {
        &self.indicators
    }

    pub fn navigate(&mut self, nav: Nav) {
        let before = self.state.current();
        let after = self.state.apply(nav);
        log::debug!(
            "[carousel] {} {:?}: {} -> {}",
            self.kind().name(),
            nav,
            before,
            after
        );
        self.render();
    }

    /// Show the current slide, hide the rest and sync indicators and captions.
    pub fn render(&self) {
        let plan = self.state.render_plan(self.indicators.len());
        let mut clock = self.fades.get();
        let ticket = clock.issue();
        self.fades.set(clock);

        for (slide, visible) in self.slides.iter().zip(&plan.visible) {
            dom::set_style(slide, "opacity", "0");
            dom::set_style(slide, "display", if *visible { "block" } else { "none" });
        }
        if let Some(slide) = plan.visible_index().and_then(|i| self.slides.get(i)) {
            // Opacity must change in a later task than display or the
            // transition is skipped.
            let slide = slide.clone();
            let fades = self.fades.clone();
            dom::set_timeout(SLIDE_FADE_DELAY_MS, move || {
                if fades.get().is_live(ticket) {
                    dom::set_style(&slide, "opacity", "1");
                }
            });
        }

        for (dot, active) in self.indicators.iter().zip(&plan.active) {
            if *active {
                dom::set_style(dot, "background", INDICATOR_ACTIVE_BG);
                dom::set_style(dot, "box-shadow", self.indicator_glow);
            } else {
                dom::set_style(dot, "background", INDICATOR_IDLE_BG);
                dom::set_style(dot, "box-shadow", "none");
            }
        }

        if let Some(caption) = plan.caption {
            if let Some(el) = &self.title {
                el.set_text_content(Some(caption.title));
            }
            if let Some(el) = &self.description {
                el.set_text_content(Some(caption.description));
            }
        }
    }

    /// Whether any part of the slider is on screen.
    pub fn in_viewport(&self) -> bool {
        let Some(window) = web::window() else {
            return false;
        };
        let viewport_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let rect = self.root.get_bounding_client_rect();
        site_core::intersects_viewport(rect.top(), rect.bottom(), viewport_h)
    }
}

thread_local! {
    static IMAGE: RefCell<Option<SharedCarousel>> = const { RefCell::new(None) };
    static VIDEO: RefCell<Option<SharedCarousel>> = const { RefCell::new(None) };
}

fn registry(kind: CarouselKind) -> &'static std::thread::LocalKey<RefCell<Option<SharedCarousel>>> {
    match kind {
        CarouselKind::Image => &IMAGE,
        CarouselKind::Video => &VIDEO,
    }
}

fn register(carousel: SharedCarousel) {
    let kind = carousel.borrow().kind();
    registry(kind).with(|slot| *slot.borrow_mut() = Some(carousel));
}

/// Route a navigation request to a registered slider.
pub fn navigate(kind: CarouselKind, nav: Nav) -> Result<(), SiteError> {
    let carousel = registry(kind)
        .with(|slot| slot.borrow().clone())
        .ok_or(SiteError::NotInitialized(kind.name()))?;
    carousel.borrow_mut().navigate(nav);
    Ok(())
}

#[inline]
fn navigate_js(kind: CarouselKind, nav: Nav) -> Result<(), JsValue> {
    navigate(kind, nav).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(js_name = goToSlide)]
pub fn go_to_slide(n: i32) -> Result<(), JsValue> {
    navigate_js(CarouselKind::Image, Nav::GoTo(n as i64))
}

#[wasm_bindgen(js_name = nextSlide)]
pub fn next_slide() -> Result<(), JsValue> {
    navigate_js(CarouselKind::Image, Nav::Next)
}

#[wasm_bindgen(js_name = prevSlide)]
pub fn prev_slide() -> Result<(), JsValue> {
    navigate_js(CarouselKind::Image, Nav::Prev)
}

#[wasm_bindgen(js_name = goToVideoSlide)]
pub fn go_to_video_slide(n: i32) -> Result<(), JsValue> {
    navigate_js(CarouselKind::Video, Nav::GoTo(n as i64))
}

#[wasm_bindgen(js_name = nextVideoSlide)]
pub fn next_video_slide() -> Result<(), JsValue> {
    navigate_js(CarouselKind::Video, Nav::Next)
}

#[wasm_bindgen(js_name = prevVideoSlide)]
pub fn prev_video_slide() -> Result<(), JsValue> {
    navigate_js(CarouselKind::Video, Nav::Prev)
}

/// Expose the navigation functions on `window` so inline markup handlers
/// (`onclick="nextSlide()"`) reach them.
pub fn install_globals(window: &web::Window) {
    fn put(window: &web::Window, name: &str, f: &JsValue) {
        _ = js_sys::Reflect::set(window, &JsValue::from_str(name), f);
    }
    let go_image = Closure::wrap(Box::new(go_to_slide) as Box<dyn FnMut(i32) -> Result<(), JsValue>>);
    let go_video =
        Closure::wrap(Box::new(go_to_video_slide) as Box<dyn FnMut(i32) -> Result<(), JsValue>>);
    put(window, "goToSlide", go_image.as_ref());
    put(window, "goToVideoSlide", go_video.as_ref());
    go_image.forget();
    go_video.forget();

    let steps: [(&str, fn() -> Result<(), JsValue>); 4] = [
        ("nextSlide", next_slide),
        ("prevSlide", prev_slide),
        ("nextVideoSlide", next_video_slide),
        ("prevVideoSlide", prev_video_slide),
    ];
    for (name, f) in steps {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut() -> Result<(), JsValue>>);
        put(window, name, closure.as_ref());
        closure.forget();
    }
}

/// Build, render and wire one slider. Absent markup is a silent no-op.
pub fn setup(document: &web::Document, markup: &SliderMarkup) -> anyhow::Result<()> {
    let view = match CarouselView::from_document(document, markup) {
        Ok(Some(view)) => view,
        Ok(None) => {
            log::debug!("[carousel] #{} not on this page", markup.root_id);
            return Ok(());
        }
        Err(SiteError::EmptyCarousel) => {
            log::debug!("[carousel] #{} has no slides", markup.root_id);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    log::info!(
        "[carousel] {} slider: {} slides, {} indicators",
        markup.kind.name(),
        view.state.len(),
        view.indicators.len()
    );
    view.render();
    let shared: SharedCarousel = Rc::new(RefCell::new(view));

    wire_indicators(&shared);
    events::wire_swipe(&shared);
    events::wire_carousel_keys(&shared);
    if markup.kind == CarouselKind::Video {
        let next = shared.clone();
        dom::add_click_listener(document, VIDEO_NEXT_BUTTON_ID, move || {
            next.borrow_mut().navigate(Nav::Next)
        });
        let prev = shared.clone();
        dom::add_click_listener(document, VIDEO_PREV_BUTTON_ID, move || {
            prev.borrow_mut().navigate(Nav::Prev)
        });
    }
    register(shared);
    Ok(())
}

fn wire_indicators(carousel: &SharedCarousel) {
    let dots = carousel.borrow().indicators().to_vec();
    for (i, dot) in dots.iter().enumerate() {
        let c = carousel.clone();
        dom::listen(dot, "click", move |_: web::Event| {
            c.borrow_mut().navigate(Nav::GoTo(i as i64))
        });
    }
}
