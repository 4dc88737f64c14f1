// Selectors, element ids and inline style values the front-end binds to.
// Kept free of web-sys so the host tests can include this file directly.

// Mobile menu
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";
pub const MOBILE_LINK_SELECTOR: &str = ".mobile-link";
pub const ACTIVE_CLASS: &str = "active";
pub const BODY_MENU_OPEN_CLASS: &str = "menu-open";

// Custom cursor
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_HOVER_SELECTOR: &str =
    "a, button, .btn-nav, .mobile-link, .back-button, .nav-logo, .flip-card";

// Logo
pub const NAV_LOGO_SELECTOR: &str = ".nav-logo";
pub const LOGO_SPLIT_CLASS: &str = "split";

// Image slider
pub const IMAGE_SLIDER_ID: &str = "imageSlider";
pub const IMAGE_SLIDE_SELECTOR: &str = ".slider-item";
pub const IMAGE_DOT_SELECTOR: &str = ".dot";

// Video slider
pub const VIDEO_SLIDER_ID: &str = "videoSlider";
pub const VIDEO_SLIDE_SELECTOR: &str = ".video-slide";
pub const VIDEO_DOT_SELECTOR: &str = ".dot-indicator";
pub const VIDEO_NEXT_BUTTON_ID: &str = "nextBtn";
pub const VIDEO_PREV_BUTTON_ID: &str = "prevBtn";
pub const SLIDE_TITLE_ID: &str = "slideTitle";
pub const SLIDE_DESC_ID: &str = "slideDesc";

// Indicator looks
pub const INDICATOR_ACTIVE_BG: &str = "#10B981";
pub const INDICATOR_IDLE_BG: &str = "rgba(255,255,255,0.4)";
pub const IMAGE_INDICATOR_GLOW: &str = "0 0 10px rgba(16,185,129,0.6)";
pub const VIDEO_INDICATOR_GLOW: &str = "0 0 10px rgba(16,185,129,0.5)";

// Scroll reveal
pub const REVEAL_SECTION_SELECTOR: &str = "section";

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";

// Effects bridge
pub const HERO_SHUTTER_ID: &str = "hero-shutter";
pub const REVEAL_SHUTTER_SELECTOR: &str = ".reveal-shutter";
pub const HERO_CANVAS_ID: &str = "hero-canvas";

// Globals installed by the optional third-party libraries
pub const ANIMATION_GLOBAL: &str = "gsap";
pub const SCROLL_PLUGIN_GLOBAL: &str = "ScrollTrigger";
pub const SCENE_GLOBAL: &str = "THREE";
pub const ICON_GLOBAL: &str = "lucide";
