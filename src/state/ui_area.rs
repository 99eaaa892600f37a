//! Screen areas for mouse event handling
//!
//! The screen is split into a fixed navbar, the scrolling page and a one row
//! status bar. Mouse rows are translated here so handlers work in page
//! coordinates.

/// Height of the navbar (with borders: top + content + bottom)
pub const NAVBAR_HEIGHT: u16 = 3;
/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Screen area under a mouse row
///
/// # Layout
///
/// ```text
/// Row 0-2:   Navbar (3 rows with borders)
/// Row 3+:    Page viewport
/// Bottom:    Status bar (1 row)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Navbar,
    Page,
    StatusBar,
}

impl UiArea {
    /// Get the starting Y row for this area (absolute screen position)
    #[inline]
    pub fn start_y(self, terminal_height: u16) -> u16 {
        match self {
            UiArea::Navbar => 0,
            UiArea::Page => NAVBAR_HEIGHT,
            UiArea::StatusBar => terminal_height.saturating_sub(STATUS_BAR_HEIGHT),
        }
    }

    /// Area containing an absolute mouse row
    pub fn at_row(mouse_row: u16, terminal_height: u16) -> Self {
        if mouse_row < NAVBAR_HEIGHT {
            UiArea::Navbar
        } else if mouse_row >= UiArea::StatusBar.start_y(terminal_height) {
            UiArea::StatusBar
        } else {
            UiArea::Page
        }
    }

    /// Convert an absolute mouse row to a row relative to this area
    #[inline]
    pub fn relative_row(self, mouse_row: u16, terminal_height: u16) -> u16 {
        mouse_row.saturating_sub(self.start_y(terminal_height))
    }

    /// Rows available to the page viewport
    #[inline]
    pub const fn page_height(terminal_height: u16) -> u16 {
        terminal_height.saturating_sub(NAVBAR_HEIGHT + STATUS_BAR_HEIGHT)
    }
}
