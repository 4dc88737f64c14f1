//! Carousel state machine shared by the image and video sliders.
//!
//! A [`Carousel`] only knows how many slides exist and which one is current.
//! The web frontend owns the slide and indicator elements and re-renders them
//! from a [`RenderPlan`] after every transition.

use crate::error::{SiteError, SiteResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKind {
    Image,
    Video,
}

impl CarouselKind {
    pub fn name(self) -> &'static str {
        match self {
            CarouselKind::Image => "image",
            CarouselKind::Video => "video",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCaption {
    pub title: &'static str,
    pub description: &'static str,
}

/// Title/description pairs shown under the video slider, indexed by slide.
pub const VIDEO_CAPTIONS: [SlideCaption; 3] = [
    SlideCaption {
        title: "60-Second Swapping",
        description: "Eliminate downtime with hot-swap battery technology",
    },
    SlideCaption {
        title: "Crab Walk",
        description: "Independent 4-wheel steering with 90-degree lateral movement",
    },
    SlideCaption {
        title: "98% Efficiency",
        description: "Level 5 autonomous driving platform with industry-leading efficiency",
    },
];

/// A single navigation request, whatever triggered it (button, key, swipe, indicator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    GoTo(i64),
}

#[derive(Clone, Debug)]
pub struct Carousel {
    kind: CarouselKind,
    current: usize,
    len: usize,
}

impl Carousel {
    pub fn new(kind: CarouselKind, len: usize) -> SiteResult<Self> {
        if len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            kind,
            current: 0,
            len,
        })
    }

    #[inline]
    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to slide `n`. Out-of-range values wrap modulo the slide count,
    /// so `-1` lands on the last slide and `len` lands on the first.
    pub fn go_to(&mut self, n: i64) -> usize {
        self.current = wrap_index(n, self.len);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as i64 - 1)
    }

    pub fn apply(&mut self, nav: Nav) -> usize {
        match nav {
            Nav::Next => self.next(),
            Nav::Prev => self.prev(),
            Nav::GoTo(n) => self.go_to(n),
        }
    }

    #[inline]
    pub fn is_current(&self, index: usize) -> bool {
        index == self.current
    }

    /// Caption for the current slide. Only the video slider carries captions;
    /// slides past the end of the table have none.
    pub fn caption(&self) -> Option<&'static SlideCaption> {
        match self.kind {
            CarouselKind::Video => VIDEO_CAPTIONS.get(self.current),
            CarouselKind::Image => None,
        }
    }

    /// What the slider markup should look like for the current slide.
    /// Indicators are matched by position; markup with fewer indicators than
    /// slides leaves none active while a slide past the last indicator shows.
    pub fn render_plan(&self, indicator_count: usize) -> RenderPlan {
        RenderPlan {
            visible: (0..self.len).map(|i| self.is_current(i)).collect(),
            active: (0..indicator_count).map(|i| self.is_current(i)).collect(),
            caption: self.caption(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan {
    pub visible: Vec<bool>,
    pub active: Vec<bool>,
    pub caption: Option<&'static SlideCaption>,
}

impl RenderPlan {
    pub fn visible_index(&self) -> Option<usize> {
        self.visible.iter().position(|v| *v)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|a| *a)
    }
}

/// Hands out tickets for delayed fade-ins. Issuing a new ticket invalidates
/// every earlier one, so only the latest render's fade is applied.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeClock {
    epoch: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeTicket(u64);

impl FadeClock {
    pub fn issue(&mut self) -> FadeTicket {
        self.epoch = self.epoch.wrapping_add(1);
        FadeTicket(self.epoch)
    }

    #[inline]
    pub fn is_live(&self, ticket: FadeTicket) -> bool {
        self.epoch == ticket.0
    }
}

#[inline]
pub fn wrap_index(n: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    n.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(
            Carousel::new(CarouselKind::Image, 0).unwrap_err(),
            SiteError::EmptyCarousel
        );
    }

    #[test]
    fn starts_on_first_slide() {
        let c = Carousel::new(CarouselKind::Image, 4).unwrap();
        assert_eq!(c.current(), 0);
        assert!(c.is_current(0));
        assert!(!c.is_current(1));
    }

    #[test]
    fn wrap_index_handles_far_out_of_range_values() {
        assert_eq!(wrap_index(1000, 3), 1);
        assert_eq!(wrap_index(-7, 3), 2);
        assert_eq!(wrap_index(5, 0), 0);
    }

    #[test]
    fn fresh_clock_tickets_start_live() {
        let mut clock = FadeClock::default();
        let t = clock.issue();
        assert!(clock.is_live(t));
    }

    #[test]
    fn image_slider_has_no_captions() {
        let c = Carousel::new(CarouselKind::Image, 3).unwrap();
        assert!(c.caption().is_none());
    }
}
