//! UI module for rendering the TUI

mod components;
mod contact_form;
pub mod layout;
pub mod navbar;
pub mod page;
mod splash;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    if app.state.current_view == View::Splash {
        if let Some(splash_state) = &app.splash_state {
            splash::draw(frame, area, splash_state, &app.state.portfolio.owner, now);
            return;
        }
    }

    let (navbar_area, page_area, status_area) = layout::create_layout(area);

    page::draw(frame, page_area, app, now);
    navbar::draw(frame, navbar_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Menu overlays the page
    if app.state.navigation.menu_open {
        navbar::draw_menu(frame, area, app);
    }
}
