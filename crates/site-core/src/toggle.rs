//! Binary interaction states: the mobile menu, the custom cursor hover and the
//! logo split effect.

use crate::constants::{
    CURSOR_DOT_OFFSET_PX, CURSOR_HOVER_SCALE, CURSOR_IDLE_SCALE, CURSOR_RING_OFFSET_PX,
    LOGO_SPLIT_RADIUS_PX,
};

/// Where a document click landed, relative to the menu controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Toggle,
    MenuLink,
    InsideMenu,
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Click(ClickTarget),
    Escape,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply an event and return the resulting open state.
    pub fn handle(&mut self, ev: MenuEvent) -> bool {
        match ev {
            MenuEvent::Click(ClickTarget::Toggle) => self.open = !self.open,
            MenuEvent::Click(ClickTarget::MenuLink)
            | MenuEvent::Click(ClickTarget::Outside)
            | MenuEvent::Escape => self.close(),
            MenuEvent::Click(ClickTarget::InsideMenu) => {}
        }
        self.open
    }
}

/// Map a key name to a menu event. Only Escape dismisses the menu.
#[inline]
pub fn menu_event_for_key(key: &str) -> Option<MenuEvent> {
    (key == "Escape").then_some(MenuEvent::Escape)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorLook {
    pub scale: f64,
    pub border_color: &'static str,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorHover {
    hovered: bool,
}

impl CursorHover {
    pub fn enter(&mut self) -> CursorLook {
        self.hovered = true;
        self.look()
    }

    pub fn leave(&mut self) -> CursorLook {
        self.hovered = false;
        self.look()
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn look(&self) -> CursorLook {
        if self.hovered {
            CursorLook {
                scale: CURSOR_HOVER_SCALE,
                border_color: "var(--accent-blue)",
            }
        } else {
            CursorLook {
                scale: CURSOR_IDLE_SCALE,
                border_color: "var(--text-main)",
            }
        }
    }
}

/// Top-left positions for the cursor ring and dot so both center on the pointer.
#[inline]
pub fn cursor_positions(client_x: f64, client_y: f64) -> ([f64; 2], [f64; 2]) {
    (
        [client_x - CURSOR_RING_OFFSET_PX, client_y - CURSOR_RING_OFFSET_PX],
        [client_x - CURSOR_DOT_OFFSET_PX, client_y - CURSOR_DOT_OFFSET_PX],
    )
}

/// Whether the logo should split apart for a pointer at `pointer`, given the
/// logo's center in the same client coordinates.
#[inline]
pub fn logo_should_split(pointer: [f64; 2], logo_center: [f64; 2]) -> bool {
    let dx = pointer[0] - logo_center[0];
    let dy = pointer[1] - logo_center[1];
    dx.hypot(dy) < LOGO_SPLIT_RADIUS_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_click_keeps_menu_open() {
        let mut m = MenuState::default();
        m.handle(MenuEvent::Click(ClickTarget::Toggle));
        assert!(m.handle(MenuEvent::Click(ClickTarget::InsideMenu)));
    }

    #[test]
    fn only_escape_maps_to_a_menu_event() {
        assert_eq!(menu_event_for_key("Escape"), Some(MenuEvent::Escape));
        assert_eq!(menu_event_for_key("Enter"), None);
        assert_eq!(menu_event_for_key("q"), None);
    }
}
