//! Header scroll state and the mobile drawer state machine.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Everything that can happen to the mobile drawer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerAction {
    /// Hamburger button.
    Toggle,
    Close,
    Backdrop,
    NavLink,
    LanguageSelected,
    ThemeToggled,
    Login,
    Logout,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Next state; every action other than the hamburger closes the drawer.
    #[must_use]
    pub fn apply(self, action: DrawerAction) -> Self {
        match (self, action) {
            (Self::Closed, DrawerAction::Toggle) => Self::Open,
            _ => Self::Closed,
        }
    }
}
