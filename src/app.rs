//! Application state and core logic

use crate::config::FolioConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{
    link_at_column, AppState, BlockKind, Focus, Portfolio, SectionId, SplashState, UiArea, View,
    COMPACT_WIDTH, HERO_ELEMENTS,
};
use crate::transport::{PendingSubmission, SubmissionError, SubmissionReceipt, Submitter};
use crate::ui;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;

/// Rows moved per mouse wheel step
const WHEEL_ROWS: isize = 3;
/// Link target of the hero call to action
const CONTACT_ANCHOR: &str = "#contact";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: FolioConfig,
    /// Transport for the contact form
    submitter: Arc<dyn Submitter>,
    /// Submission in flight, polled every tick
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: FolioConfig,
        portfolio: Portfolio,
        submitter: Arc<dyn Submitter>,
        now: Instant,
    ) -> Self {
        let mut state = AppState::new(portfolio);
        let splash_state = if config.show_splash() {
            state.current_view = View::Splash;
            Some(SplashState::new(now))
        } else {
            state.show_page(now);
            None
        };

        let mut app = Self {
            state,
            config,
            submitter,
            pending: None,
            quit: false,
            copy_message: None,
            splash_state,
            terminal_size: None,
        };
        app.resize(80, 24);
        app
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, now: Instant, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(now, terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.show_page(now);
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Track the terminal size and lay the page out for it
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.state.relayout(width);
        self.state
            .set_viewport_height(UiArea::page_height(height) as usize);
    }

    fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Navbar labels, in document order
    pub fn nav_labels(&self) -> Vec<&'static str> {
        self.state
            .nav_sections()
            .iter()
            .map(SectionId::label)
            .collect()
    }

    /// Whether the navbar collapses into the menu
    pub fn is_compact(&self) -> bool {
        let width = self.screen().width;
        width < COMPACT_WIDTH
            || ui::navbar::needs_menu(&self.state.portfolio.owner.name, &self.nav_labels(), width)
    }

    pub fn is_navbar_compact(&self) -> bool {
        self.state
            .navigation
            .is_navbar_compact(self.config.navbar_compact_after())
    }

    pub fn is_back_to_top_visible(&self) -> bool {
        self.state
            .navigation
            .is_back_to_top_visible(self.config.back_to_top_after())
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Advance everything driven by time
    pub fn tick(&mut self, now: Instant) {
        if let Some(outcome) = self.pending.as_mut().and_then(|p| p.poll()) {
            self.pending = None;
            self.finish_submission(outcome, now);
        }
        self.state.tick(now);
    }

    /// Whether the next frame needs a fast redraw
    pub fn is_animating(&self, now: Instant) -> bool {
        self.splash_state.is_some() || self.pending.is_some() || self.state.is_animating(now)
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if self.in_splash() {
            self.skip_splash(now);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if key.code == KeyCode::Char('y') && key.modifiers.contains(COPY_MODIFIER) {
            self.copy_email();
            return Ok(());
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key, now),
            Focus::Menu => self.handle_menu_key(key, now),
            Focus::Form => self.handle_form_key(key, now),
        }
        Ok(())
    }

    fn skip_splash(&mut self, now: Instant) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        let height = self.screen().height;
        self.update_splash(now, height);
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') | KeyCode::PageDown | KeyCode::Char(' ') => {
                self.state.scroll_down_page()
            }
            KeyCode::Char('u') | KeyCode::PageUp => self.state.scroll_up_page(),
            KeyCode::Char('g') | KeyCode::Home => {
                let max = self.state.max_scroll();
                self.state.navigation.scroll_to(0, max);
            }
            KeyCode::Char('G') | KeyCode::End => {
                let max = self.state.max_scroll();
                self.state.navigation.scroll_to(max, max);
            }
            KeyCode::Char('t') => self.state.navigation.back_to_top(now),
            KeyCode::Char('c') => {
                self.state.follow_anchor(CONTACT_ANCHOR, now);
            }
            KeyCode::Char('f') | KeyCode::Tab => self.enter_form(),
            KeyCode::Char('y') => self.copy_email(),
            KeyCode::Char('m') if self.is_compact() => self.open_menu(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(id) = self.state.nav_sections().get(index).copied() {
                    self.state.jump_to_section(id, now);
                }
            }
            _ => {}
        }
    }

    fn open_menu(&mut self) {
        self.state.navigation.toggle_menu();
        if self.state.navigation.menu_open {
            let sections = self.state.nav_sections();
            self.state.navigation.menu_index = self
                .state
                .active_section()
                .and_then(|active| sections.iter().position(|s| *s == active))
                .unwrap_or(0);
            self.state.focus = Focus::Menu;
        }
    }

    fn close_menu(&mut self) {
        self.state.navigation.close_menu();
        self.state.focus = Focus::Page;
    }

    fn handle_menu_key(&mut self, key: KeyEvent, now: Instant) {
        let count = self.state.nav_sections().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => self.close_menu(),
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.state.navigation.menu_next(count)
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.state.navigation.menu_prev(count)
            }
            KeyCode::Enter => {
                let index = self.state.navigation.menu_index;
                self.activate_menu_entry(index, now);
            }
            _ => {}
        }
    }

    /// Follow a menu link; the menu closes even when the scroll is refused
    fn activate_menu_entry(&mut self, index: usize, now: Instant) {
        if let Some(id) = self.state.nav_sections().get(index).copied() {
            self.state.jump_to_section(id, now);
        }
        self.close_menu();
    }

    fn enter_form(&mut self) {
        if !self.state.has_form() {
            return;
        }
        self.state.focus = Focus::Form;
        self.state.ensure_form_focus_visible();
    }

    /// Leave the form, validating the field that had focus
    fn leave_form(&mut self) {
        let left = self.state.contact_form.active_field_index;
        self.state.focus = Focus::Page;
        self.blur_field(Some(left));
    }

    /// Validate a field that just lost focus
    fn blur_field(&mut self, index: Option<usize>) {
        if let Some(field) = index.and_then(|i| self.state.contact_form.get_field(i)) {
            self.state.validator.validate_field(field);
        }
    }

    /// Clear the error of the field being edited
    fn on_input(&mut self) {
        if let Some(field) = self.state.contact_form.active() {
            let name = field.name.clone();
            self.state.validator.clear_field_error(&name);
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('s') {
                self.submit_contact_form(now);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.leave_form(),
            KeyCode::Tab => {
                let left = self.state.contact_form.focus_next();
                self.blur_field(left);
                self.state.ensure_form_focus_visible();
            }
            KeyCode::BackTab => {
                let left = self.state.contact_form.focus_prev();
                self.blur_field(left);
                self.state.ensure_form_focus_visible();
            }
            KeyCode::Enter => {
                if self.state.contact_form.is_submit_active() {
                    self.submit_contact_form(now);
                } else if self
                    .state
                    .contact_form
                    .active()
                    .is_some_and(|f| f.is_multiline)
                {
                    if let Some(field) = self.state.contact_form.active_mut() {
                        field.push_newline();
                    }
                    self.on_input();
                } else {
                    let left = self.state.contact_form.focus_next();
                    self.blur_field(left);
                    self.state.ensure_form_focus_visible();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.contact_form.active_mut() {
                    field.pop_char();
                    self.on_input();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.contact_form.active_mut() {
                    field.push_char(c);
                    self.on_input();
                }
            }
            _ => {}
        }
    }

    /// Validate the form and hand a valid payload to the submitter.
    /// Ignored while a submission is in flight.
    pub fn submit_contact_form(&mut self, now: Instant) {
        let Some(message) = self
            .state
            .validator
            .submit(&self.state.contact_form, now)
        else {
            self.state.ensure_form_focus_visible();
            return;
        };
        self.pending = Some(PendingSubmission::spawn(
            Arc::clone(&self.submitter),
            message,
        ));
    }

    fn finish_submission(
        &mut self,
        outcome: Result<SubmissionReceipt, SubmissionError>,
        now: Instant,
    ) {
        self.state
            .validator
            .complete_submission(&mut self.state.contact_form, outcome, now);
        if self.state.focus == Focus::Form {
            self.state.ensure_form_focus_visible();
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        if self.in_splash() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.skip_splash(now);
            }
            return Ok(());
        }

        self.copy_message = None;

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                let max = self.state.max_scroll();
                self.state.navigation.scroll_by(-WHEEL_ROWS, max);
            }
            MouseEventKind::ScrollDown => {
                let max = self.state.max_scroll();
                self.state.navigation.scroll_by(WHEEL_ROWS, max);
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse, now),
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, mouse: MouseEvent, now: Instant) {
        let screen = self.screen();
        let position = Position::new(mouse.column, mouse.row);

        if self.state.navigation.menu_open {
            let labels = self.nav_labels();
            let menu = ui::navbar::menu_area(screen, &labels);
            match ui::navbar::menu_entry_at(menu, labels.len(), position) {
                Some(index) => self.activate_menu_entry(index, now),
                // Click outside closes the menu
                None if !menu.contains(position) => self.close_menu(),
                None => {}
            }
            return;
        }

        match UiArea::at_row(mouse.row, screen.height) {
            UiArea::Navbar => self.handle_navbar_click(mouse.column, now),
            UiArea::Page => self.handle_page_click(mouse, now),
            UiArea::StatusBar => {}
        }
    }

    fn handle_navbar_click(&mut self, column: u16, now: Instant) {
        if self.is_compact() {
            self.open_menu();
            return;
        }
        let brand = self.state.portfolio.owner.name.clone();
        let labels = self.nav_labels();
        let start = ui::navbar::links_start(&brand);
        if let Some(index) = link_at_column(&labels, start, column) {
            if let Some(id) = self.state.nav_sections().get(index).copied() {
                self.state.jump_to_section(id, now);
            }
        } else if column < start {
            self.state.jump_to_section(SectionId::Home, now);
        }
    }

    fn handle_page_click(&mut self, mouse: MouseEvent, now: Instant) {
        let screen = self.screen();
        let page_area = ui::layout::page_area(screen);
        let position = Position::new(mouse.column, mouse.row);

        if self.is_back_to_top_visible()
            && ui::page::back_to_top_area(page_area).contains(position)
        {
            self.state.navigation.back_to_top(now);
            return;
        }

        let row = self.state.navigation.scroll
            + UiArea::Page.relative_row(mouse.row, screen.height) as usize;
        let form_stop = self.state.form_top().and_then(|top| {
            row.checked_sub(top)
                .and_then(|r| self.state.contact_form.focus_stop_at_row(r))
        });

        match form_stop {
            Some(stop) => {
                self.state.focus = Focus::Form;
                let left = self.state.contact_form.focus(stop);
                self.blur_field(left);
                if self.state.contact_form.is_submit_active() {
                    self.submit_contact_form(now);
                }
            }
            None => {
                if self.state.focus == Focus::Form {
                    self.leave_form();
                }
                if self.is_call_to_action(row) {
                    self.state.follow_anchor(CONTACT_ANCHOR, now);
                }
            }
        }
    }

    fn is_call_to_action(&self, row: usize) -> bool {
        self.state.layout.blocks.iter().any(|b| {
            b.kind == BlockKind::Hero(HERO_ELEMENTS - 1)
                && row >= b.top
                && row < b.bottom()
        })
    }

    /// Copy the contact email, reporting the result in the status bar
    fn copy_email(&mut self) {
        let Some(email) = self.state.portfolio.contact_email().map(str::to_string) else {
            self.copy_message = Some("No email to copy".to_string());
            return;
        };
        match self.copy_to_clipboard(&email) {
            Ok(()) => {
                tracing::info!("Copied contact email to clipboard");
                self.copy_message = Some(format!("Copied {email}"));
            }
            Err(err) => {
                tracing::warn!("Clipboard unavailable: {err:#}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
