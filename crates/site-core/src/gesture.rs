use crate::carousel::Nav;
use crate::constants::SWIPE_THRESHOLD_PX;

/// Classify a horizontal touch gesture by its start and end screen x.
///
/// A leftward swipe (finger moves toward smaller x) advances, a rightward
/// swipe goes back. Travel must strictly exceed the threshold; vertical
/// motion and velocity are not considered.
#[inline]
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Nav> {
    if start_x - end_x > SWIPE_THRESHOLD_PX {
        Some(Nav::Next)
    } else if end_x - start_x > SWIPE_THRESHOLD_PX {
        Some(Nav::Prev)
    } else {
        None
    }
}

/// Remembers where a touch started until the matching touchend arrives.
#[derive(Default, Clone, Copy, Debug)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, screen_x: f64) {
        self.start_x = Some(screen_x);
    }

    /// Finish the gesture. A touchend without a touchstart counts as no travel.
    pub fn end(&mut self, screen_x: f64) -> Option<Nav> {
        let start = self.start_x.take().unwrap_or(screen_x);
        classify_swipe(start, screen_x)
    }
}

#[inline]
pub fn nav_for_key(key: &str) -> Option<Nav> {
    match key {
        "ArrowLeft" => Some(Nav::Prev),
        "ArrowRight" => Some(Nav::Next),
        _ => None,
    }
}

/// True when a box spanning `[top, bottom)` in client coordinates overlaps
/// the viewport. Used to decide which slider owns the arrow keys.
#[inline]
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    bottom > 0.0 && top < viewport_height
}
