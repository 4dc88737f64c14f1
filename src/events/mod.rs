pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_carousel_keys, wire_menu_escape};
pub use pointer::{wire_cursor, wire_logo_split, wire_menu_clicks, wire_swipe};
