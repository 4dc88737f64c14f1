// Host-side tests for one-shot scroll reveals.

use site_core::RevealSet;

#[test]
fn reveal_flips_exactly_once() {
    let mut r = RevealSet::new(3);
    assert!(!r.is_revealed(1));
    assert!(r.observe(1, true));
    assert!(r.is_revealed(1));
    // Repeated crossings in both directions never report a second reveal
    for visible in [false, true, false, true] {
        assert!(!r.observe(1, visible));
        assert!(r.is_revealed(1));
    }
    assert_eq!(r.revealed_count(), 1);
}

#[test]
fn leaving_the_viewport_before_reveal_keeps_section_hidden() {
    let mut r = RevealSet::new(2);
    assert!(!r.observe(0, false));
    assert!(!r.is_revealed(0));
}

#[test]
fn sections_reveal_independently() {
    let mut r = RevealSet::new(3);
    r.observe(2, true);
    assert!(!r.is_revealed(0));
    assert!(!r.is_revealed(1));
    assert!(r.is_revealed(2));
}

#[test]
fn unknown_section_index_is_ignored() {
    let mut r = RevealSet::new(1);
    assert!(!r.observe(5, true));
    assert_eq!(r.revealed_count(), 0);
    assert!(RevealSet::default().is_empty());
}
