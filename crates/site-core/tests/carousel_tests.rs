// Host-side tests for the carousel state machine and swipe classification.

use site_core::*;

fn image(len: usize) -> Carousel {
    Carousel::new(CarouselKind::Image, len).unwrap()
}

fn video() -> Carousel {
    Carousel::new(CarouselKind::Video, VIDEO_CAPTIONS.len()).unwrap()
}

#[test]
fn next_and_prev_stay_in_bounds_for_long_sequences() {
    for len in 1..=6 {
        let mut c = image(len);
        // Deterministic mix of steps driven by a small LCG
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let idx = if seed & 1 == 0 { c.next() } else { c.prev() };
            assert!(idx < len, "index {idx} out of range for len {len}");
            assert_eq!(idx, c.current());
        }
    }
}

#[test]
fn go_to_in_range_selects_exactly_that_slide() {
    let mut c = image(5);
    for n in 0..5 {
        assert_eq!(c.go_to(n as i64), n);
        assert!(c.is_current(n));
        let shown: Vec<usize> = (0..c.len()).filter(|i| c.is_current(*i)).collect();
        assert_eq!(shown, vec![n], "exactly one slide is current");
    }
}

#[test]
fn go_to_wraps_at_both_ends() {
    let mut c = image(4);
    assert_eq!(c.go_to(4), 0);
    assert_eq!(c.go_to(-1), 3);
}

#[test]
fn go_to_far_out_of_range_wraps_fully() {
    let mut c = image(3);
    assert_eq!(c.go_to(1000), 1000 % 3);
    assert_eq!(c.go_to(-1000), 2);
    assert!(c.current() < c.len());
}

#[test]
fn next_wraps_from_last_to_first_and_prev_back() {
    let mut c = image(3);
    c.go_to(2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 2);
}

#[test]
fn single_slide_carousel_never_moves() {
    let mut c = image(1);
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert_eq!(c.go_to(7), 0);
}

#[test]
fn apply_routes_each_nav_kind() {
    let mut c = image(4);
    assert_eq!(c.apply(Nav::Next), 1);
    assert_eq!(c.apply(Nav::GoTo(3)), 3);
    assert_eq!(c.apply(Nav::Prev), 2);
}

#[test]
fn instances_are_independent() {
    let mut a = image(3);
    let mut b = video();
    a.next();
    a.next();
    b.prev();
    assert_eq!(a.current(), 2);
    assert_eq!(b.current(), 2);
    a.next();
    assert_eq!(a.current(), 0);
    assert_eq!(b.current(), 2);
}

#[test]
fn video_caption_follows_current_slide() {
    let mut c = video();
    c.go_to(2);
    let caption = c.caption().unwrap();
    assert_eq!(caption.title, "98% Efficiency");
    assert_eq!(
        caption.description,
        "Level 5 autonomous driving platform with industry-leading efficiency"
    );
    c.next();
    assert_eq!(c.caption().unwrap().title, "60-Second Swapping");
}

#[test]
fn video_slides_past_the_caption_table_have_no_caption() {
    let mut c = Carousel::new(CarouselKind::Video, 5).unwrap();
    c.go_to(4);
    assert!(c.caption().is_none());
}

#[test]
fn not_initialized_error_names_the_carousel() {
    let err = SiteError::NotInitialized(CarouselKind::Video.name());
    assert_eq!(err.to_string(), "video carousel is not initialized");
}

#[test]
fn swipe_left_past_threshold_is_next() {
    assert_eq!(classify_swipe(300.0, 200.0), Some(Nav::Next));
    assert_eq!(classify_swipe(300.0, 249.0), Some(Nav::Next));
}

#[test]
fn swipe_right_past_threshold_is_prev() {
    assert_eq!(classify_swipe(100.0, 151.0), Some(Nav::Prev));
}

#[test]
fn swipe_at_or_under_threshold_is_ignored() {
    assert_eq!(classify_swipe(300.0, 250.0), None);
    assert_eq!(classify_swipe(100.0, 150.0), None);
    assert_eq!(classify_swipe(100.0, 100.0), None);
}

#[test]
fn swipe_tracker_triggers_one_transition_per_gesture() {
    let mut c = image(4);
    let mut t = SwipeTracker::default();
    t.begin(400.0);
    if let Some(nav) = t.end(300.0) {
        c.apply(nav);
    }
    assert_eq!(c.current(), 1);
    // A stray touchend without a new touchstart does nothing
    assert_eq!(t.end(100.0), None);
}

#[test]
fn arrow_keys_map_to_relative_navigation() {
    assert_eq!(nav_for_key("ArrowLeft"), Some(Nav::Prev));
    assert_eq!(nav_for_key("ArrowRight"), Some(Nav::Next));
    assert_eq!(nav_for_key("ArrowUp"), None);
    assert_eq!(nav_for_key("Escape"), None);
}

#[test]
fn viewport_intersection_bounds() {
    assert!(intersects_viewport(100.0, 500.0, 800.0));
    assert!(intersects_viewport(-200.0, 10.0, 800.0));
    assert!(!intersects_viewport(-300.0, 0.0, 800.0));
    assert!(!intersects_viewport(800.0, 1200.0, 800.0));
}

#[test]
fn render_plan_shows_one_slide_and_lights_the_matching_indicator() {
    for len in [1usize, 2, 5] {
        let mut c = image(len);
        for step in 0..(len * 2 + 1) {
            let plan = c.render_plan(len);
            assert_eq!(plan.visible.len(), len);
            assert_eq!(plan.visible.iter().filter(|v| **v).count(), 1);
            assert_eq!(plan.active.iter().filter(|a| **a).count(), 1);
            assert_eq!(plan.visible_index(), Some(c.current()));
            assert_eq!(plan.active_index(), plan.visible_index());
            if step % 3 == 0 {
                c.prev();
            } else {
                c.next();
            }
        }
    }
}

#[test]
fn render_plan_with_fewer_indicators_than_slides() {
    let mut c = image(4);
    let plan = c.render_plan(2);
    assert_eq!(plan.active, vec![true, false]);

    c.go_to(3);
    let plan = c.render_plan(2);
    assert_eq!(plan.visible_index(), Some(3));
    assert_eq!(plan.active_index(), None);
    assert_eq!(plan.active.len(), 2);
}

#[test]
fn render_plan_with_extra_indicators_never_lights_a_spare() {
    let mut c = image(2);
    for n in 0..6 {
        c.go_to(n);
        let plan = c.render_plan(5);
        assert_eq!(plan.active_index(), Some(c.current()));
        assert!(plan.active[2..].iter().all(|a| !a));
    }
}

#[test]
fn render_plan_carries_video_caption_only() {
    let mut v = video();
    v.go_to(1);
    assert_eq!(v.render_plan(3).caption.unwrap().title, "Crab Walk");
    assert!(image(3).render_plan(3).caption.is_none());
}

#[test]
fn second_navigation_inside_fade_delay_cancels_first_fade() {
    let mut clock = FadeClock::default();
    let first = clock.issue();
    assert!(clock.is_live(first));
    let second = clock.issue();
    assert!(!clock.is_live(first), "stale fade must be dropped");
    assert!(clock.is_live(second));
}
