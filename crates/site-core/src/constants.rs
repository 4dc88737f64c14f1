// Shared interaction tuning constants used by the web frontend.

// Carousel gestures
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // horizontal travel needed before a swipe counts
pub const SLIDE_FADE_DELAY_MS: i32 = 10; // display flips first, opacity follows after this delay

// Custom cursor
pub const CURSOR_RING_OFFSET_PX: f64 = 12.0; // half the ring size, centers it on the pointer
pub const CURSOR_DOT_OFFSET_PX: f64 = 2.0; // half the dot size
pub const CURSOR_HOVER_SCALE: f64 = 2.5;
pub const CURSOR_IDLE_SCALE: f64 = 1.0;

// Logo split
pub const LOGO_SPLIT_RADIUS_PX: f64 = 80.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1; // visible fraction that triggers a reveal
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_TRANSITION: &str = "all 0.8s ease-out";

// Impact counters
pub const COUNTER_DURATION_SEC: f64 = 2.5;
pub const COUNTER_TRIGGER: &str = "#impact";
pub const COUNTER_TRIGGER_START: &str = "top 80%";

// Shutter reveals
pub const SHUTTER_DURATION_SEC: f64 = 1.4;
pub const SHUTTER_IMAGE_SCALE: f64 = 1.4;
pub const SHUTTER_TRIGGER_START: &str = "top 70%";
pub const SHUTTER_TRIGGER_END: &str = "bottom 20%";
pub const SHUTTER_TOGGLE_ACTIONS: &str = "play none none reverse";

// 3D pod motion
pub const POD_SPIN_PER_FRAME: f32 = 0.003; // radians added to rotation.y each frame
pub const POD_BOB_AMPLITUDE: f32 = 0.1;
pub const POD_BOB_RATE_PER_MS: f64 = 0.001;

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: [f32; 3] = [6.0, 4.0, 8.0];

// Contact form
pub const CONTACT_CONFIRMATION: &str = "Thank you! Your message has been received.";
pub const CONTACT_FAILURE: &str = "Sorry, your message could not be sent. Please try again.";
