use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// A `requestAnimationFrame` loop with an explicit lifetime.
///
/// The step closure runs once per frame and returns `false` to end the loop.
/// [`FrameLoop::stop`] (or dropping the handle) cancels the pending frame.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut step: impl FnMut() -> bool + 'static) -> Self {
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.handle.set(None);
            if !state.running.get() {
                return;
            }
            if step() {
                schedule(&state);
            } else {
                state.running.set(false);
                log::debug!("[frame] loop ended by its step");
            }
        }) as Box<dyn FnMut()>));
        schedule(&state);
        Self { state }
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(h) = self.state.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(h);
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &LoopState) {
    let Some(w) = web::window() else {
        state.running.set(false);
        return;
    };
    let tick = state.tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(h) => state.handle.set(Some(h)),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            state.running.set(false);
        }
    }
}
