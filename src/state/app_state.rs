//! Application state definitions

use super::forms::{ContactForm, FormValidator};
use super::navigation::Navigation;
use super::page_layout::{PageLayout, SectionId};
use super::portfolio::Portfolio;
use super::reveal::{HeroIntro, RevealTracker};
use std::time::Instant;

/// Number of hero elements that take part in the intro
pub const HERO_ELEMENTS: usize = 4;
/// Rows moved by PageUp/PageDown beyond the viewport overlap
const PAGE_OVERLAP: usize = 2;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Loading screen
    Splash,
    #[default]
    Page,
}

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling and shortcuts
    #[default]
    Page,
    /// Compact navigation menu
    Menu,
    /// Contact form fields
    Form,
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub focus: Focus,
    pub navigation: Navigation,

    // Content
    pub portfolio: Portfolio,
    pub layout: PageLayout,
    pub viewport_height: usize,

    // Animation
    pub reveal: RevealTracker,
    pub hero: HeroIntro,

    // Form state
    pub contact_form: ContactForm,
    pub validator: FormValidator,
}

impl AppState {
    pub fn new(portfolio: Portfolio) -> Self {
        let contact_form = ContactForm::new();
        let form_height = portfolio
            .has_contact_form()
            .then(|| contact_form.height());
        let layout = PageLayout::build(&portfolio, 80, form_height);
        Self {
            current_view: View::default(),
            focus: Focus::default(),
            navigation: Navigation::default(),
            portfolio,
            layout,
            viewport_height: 0,
            reveal: RevealTracker::default(),
            hero: HeroIntro::default(),
            contact_form,
            validator: FormValidator::default(),
        }
    }

    /// Whether the page has a contact form
    pub fn has_form(&self) -> bool {
        self.layout.form_block().is_some()
    }

    /// Rebuild the page layout for a new width, keeping the active section in view
    pub fn relayout(&mut self, width: u16) {
        if width == self.layout.width {
            return;
        }
        let anchor = self.active_section();
        let form_height = self
            .portfolio
            .has_contact_form()
            .then(|| self.contact_form.height());
        let previous = std::mem::replace(
            &mut self.layout,
            PageLayout::build(&self.portfolio, width, form_height),
        );
        self.reveal.carry_over(&previous, &self.layout);
        if let Some(section) = anchor.and_then(|id| self.layout.section(id)) {
            let top = section.top;
            self.navigation.scroll_to(top, self.max_scroll());
        } else {
            let scroll = self.navigation.scroll;
            self.navigation.scroll_to(scroll, self.max_scroll());
        }
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        let scroll = self.navigation.scroll;
        self.navigation.scroll_to(scroll, self.max_scroll());
    }

    pub fn max_scroll(&self) -> usize {
        self.layout.max_scroll(self.viewport_height)
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        let max = self.max_scroll();
        self.navigation.scroll_by(1, max);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.navigation.scroll_by(-1, max);
    }

    /// Scroll down a page
    pub fn scroll_down_page(&mut self) {
        let max = self.max_scroll();
        let rows = self.page_rows() as isize;
        self.navigation.scroll_by(rows, max);
    }

    /// Scroll up a page
    pub fn scroll_up_page(&mut self) {
        let max = self.max_scroll();
        let rows = self.page_rows() as isize;
        self.navigation.scroll_by(-rows, max);
    }

    fn page_rows(&self) -> usize {
        self.viewport_height.saturating_sub(PAGE_OVERLAP).max(1)
    }

    /// Smooth scroll to a section; false when refused
    pub fn jump_to_section(&mut self, id: SectionId, now: Instant) -> bool {
        let max = self.max_scroll();
        self.navigation.scroll_to_section(&self.layout, id, max, now)
    }

    /// Smooth scroll to an `#anchor` link; false when refused or unknown
    pub fn follow_anchor(&mut self, href: &str, now: Instant) -> bool {
        let max = self.max_scroll();
        self.navigation.scroll_to_anchor(&self.layout, href, max, now)
    }

    /// Sections shown in the navbar and menu
    pub fn nav_sections(&self) -> Vec<SectionId> {
        self.layout.section_ids()
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.navigation.active_section(&self.layout)
    }

    /// Document row where the contact form starts
    pub fn form_top(&self) -> Option<usize> {
        self.layout.form_block().map(|b| b.top)
    }

    /// Scroll just enough to show the focused form field and its error row
    pub fn ensure_form_focus_visible(&mut self) {
        let Some(form_top) = self.form_top() else {
            return;
        };
        let (first, last) = if self.contact_form.is_submit_active() {
            let row = self.contact_form.submit_row();
            (row, row)
        } else {
            match self
                .contact_form
                .row_layout()
                .get(self.contact_form.active_field_index)
            {
                Some(rows) => (rows.label, rows.error),
                None => return,
            }
        };
        let first = form_top + first;
        let last = form_top + last;
        let scroll = self.navigation.scroll;
        let max = self.max_scroll();

        if first < scroll {
            self.navigation.scroll_to(first, max);
        } else if last >= scroll + self.viewport_height {
            let target = (last + 1).saturating_sub(self.viewport_height);
            self.navigation.scroll_to(target, max);
        }
    }

    /// Start the hero intro once the page becomes visible
    pub fn show_page(&mut self, now: Instant) {
        self.current_view = View::Page;
        self.hero.start(now);
    }

    /// Advance time-driven state: scrolling, banner expiry and reveals
    pub fn tick(&mut self, now: Instant) {
        self.navigation.tick(now);
        self.validator.tick(now);
        if self.current_view == View::Page {
            self.reveal.observe(
                &self.layout,
                self.navigation.scroll,
                self.viewport_height,
                now,
            );
        }
    }

    /// Whether anything on screen is still moving
    pub fn is_animating(&self, now: Instant) -> bool {
        self.navigation.is_animating()
            || self.reveal.is_animating(now)
            || self.hero.is_animating(now, HERO_ELEMENTS)
            || self.validator.banner().current().is_some()
    }
}
