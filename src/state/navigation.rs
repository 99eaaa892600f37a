//! Page navigation: scroll position, smooth scrolling, active section and the
//! compact menu

use super::page_layout::{PageLayout, SectionId};
use std::time::{Duration, Instant};

/// Duration of a smooth scroll; new section jumps are refused while one runs
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(1000);
/// Rows below the viewport top used to decide which section is active
pub const ACTIVE_SECTION_OFFSET: usize = 2;
/// Below this terminal width the navbar collapses into a menu
pub const COMPACT_WIDTH: u16 = 80;

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: usize,
    to: usize,
    started_at: Instant,
}

impl ScrollAnimation {
    fn position(&self, now: Instant) -> usize {
        let elapsed = now.duration_since(self.started_at).as_secs_f32();
        let progress = (elapsed / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        let eased = simple_easing::cubic_out(progress);
        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased).round() as usize
    }

    fn is_done(&self, now: Instant) -> bool {
        now >= self.started_at + SMOOTH_SCROLL_DURATION
    }
}

/// Navigation state owned by the page
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    /// Document row at the top of the viewport
    pub scroll: usize,
    animation: Option<ScrollAnimation>,
    /// Re-entrancy guard for section jumps
    scrolling_until: Option<Instant>,
    /// Compact menu visibility
    pub menu_open: bool,
    /// Highlighted entry in the compact menu
    pub menu_index: usize,
}

impl Navigation {
    /// Manual scroll; cancels any running animation
    pub fn scroll_by(&mut self, delta: isize, max_scroll: usize) {
        self.animation = None;
        self.scroll = self.scroll.saturating_add_signed(delta).min(max_scroll);
    }

    /// Jump directly to a row
    pub fn scroll_to(&mut self, row: usize, max_scroll: usize) {
        self.animation = None;
        self.scroll = row.min(max_scroll);
    }

    /// Smooth scroll to a section.
    ///
    /// Returns false when the section is absent or another section jump is
    /// still in progress.
    pub fn scroll_to_section(
        &mut self,
        layout: &PageLayout,
        id: SectionId,
        max_scroll: usize,
        now: Instant,
    ) -> bool {
        if self.is_scrolling(now) {
            tracing::debug!(section = id.anchor(), "Section jump ignored, scroll in progress");
            return false;
        }
        let Some(section) = layout.section(id) else {
            return false;
        };

        self.scrolling_until = Some(now + SMOOTH_SCROLL_DURATION);
        self.animate_to(section.top.min(max_scroll), now);
        true
    }

    /// Smooth scroll to an `#anchor` link target. A bare `#` is ignored.
    pub fn scroll_to_anchor(
        &mut self,
        layout: &PageLayout,
        href: &str,
        max_scroll: usize,
        now: Instant,
    ) -> bool {
        let Some(anchor) = href.strip_prefix('#').filter(|a| !a.is_empty()) else {
            return false;
        };
        match SectionId::from_anchor(anchor) {
            Some(id) => self.scroll_to_section(layout, id, max_scroll, now),
            None => false,
        }
    }

    /// Smooth scroll back to the top; not subject to the section guard
    pub fn back_to_top(&mut self, now: Instant) {
        self.animate_to(0, now);
    }

    fn animate_to(&mut self, to: usize, now: Instant) {
        self.animation = Some(ScrollAnimation {
            from: self.scroll,
            to,
            started_at: now,
        });
    }

    /// Advance the animation and release the guard once it expires
    pub fn tick(&mut self, now: Instant) {
        if let Some(animation) = self.animation {
            self.scroll = animation.position(now);
            if animation.is_done(now) {
                self.animation = None;
            }
        }
        if self.scrolling_until.is_some_and(|until| now >= until) {
            self.scrolling_until = None;
        }
    }

    pub fn is_scrolling(&self, now: Instant) -> bool {
        self.scrolling_until.is_some_and(|until| now < until)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// A smooth scroll to the top of the page is in flight
    pub fn is_returning_to_top(&self) -> bool {
        self.animation.is_some_and(|a| a.to == 0)
    }

    /// Section under the viewport top plus the active offset
    pub fn active_section(&self, layout: &PageLayout) -> Option<SectionId> {
        layout.section_at(self.scroll + ACTIVE_SECTION_OFFSET)
    }

    /// Navbar switches to its scrolled style past the threshold
    pub fn is_navbar_compact(&self, threshold: usize) -> bool {
        self.scroll > threshold
    }

    pub fn is_back_to_top_visible(&self, threshold: usize) -> bool {
        self.scroll > threshold
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_next(&mut self, count: usize) {
        if count > 0 {
            self.menu_index = (self.menu_index + 1) % count;
        }
    }

    pub fn menu_prev(&mut self, count: usize) {
        if count > 0 {
            self.menu_index = if self.menu_index == 0 {
                count - 1
            } else {
                self.menu_index - 1
            };
        }
    }
}

/// Column ranges of the inline navbar links, laid out left to right from `start`
/// with one space of padding around each label
pub fn link_hit_areas(labels: &[&str], start: u16) -> Vec<(u16, u16)> {
    let mut col = start;
    labels
        .iter()
        .map(|label| {
            let width = label.chars().count() as u16 + 2;
            let area = (col, col + width);
            col += width + 1;
            area
        })
        .collect()
}

/// Index of the link under `column`, if any
pub fn link_at_column(labels: &[&str], start: u16, column: u16) -> Option<usize> {
    link_hit_areas(labels, start)
        .iter()
        .position(|(from, to)| column >= *from && column < *to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page_layout::SectionSpan;

    fn layout() -> PageLayout {
        let spans = [
            (SectionId::Home, 0, 20),
            (SectionId::About, 20, 30),
            (SectionId::Contact, 50, 40),
        ];
        PageLayout {
            blocks: Vec::new(),
            sections: spans
                .iter()
                .map(|(id, top, height)| SectionSpan {
                    id: *id,
                    top: *top,
                    height: *height,
                })
                .collect(),
            width: 80,
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scroll_by_clamps() {
            let mut nav = Navigation::default();
            nav.scroll_by(-5, 100);
            assert_eq!(nav.scroll, 0);
            nav.scroll_by(150, 100);
            assert_eq!(nav.scroll, 100);
        }

        #[test]
        fn test_scroll_to_section_animates_to_target() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            assert!(nav.scroll_to_section(&layout(), SectionId::About, 60, now));

            nav.tick(now + Duration::from_millis(100));
            assert!(nav.scroll > 0 && nav.scroll < 20);

            nav.tick(now + SMOOTH_SCROLL_DURATION);
            assert_eq!(nav.scroll, 20);
            assert!(!nav.is_animating());
        }

        #[test]
        fn test_target_clamped_to_max_scroll() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            nav.scroll_to_section(&layout(), SectionId::Contact, 45, now);
            nav.tick(now + SMOOTH_SCROLL_DURATION);
            assert_eq!(nav.scroll, 45);
        }

        #[test]
        fn test_second_jump_during_scroll_is_ignored() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            assert!(nav.scroll_to_section(&layout(), SectionId::About, 60, now));
            assert!(!nav.scroll_to_section(
                &layout(),
                SectionId::Contact,
                60,
                now + Duration::from_millis(500)
            ));

            nav.tick(now + SMOOTH_SCROLL_DURATION);
            assert_eq!(nav.scroll, 20);
        }

        #[test]
        fn test_guard_releases_after_duration() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            nav.scroll_to_section(&layout(), SectionId::About, 60, now);
            let later = now + SMOOTH_SCROLL_DURATION;
            nav.tick(later);
            assert!(!nav.is_scrolling(later));
            assert!(nav.scroll_to_section(&layout(), SectionId::Contact, 60, later));
        }

        #[test]
        fn test_manual_scroll_cancels_animation_but_keeps_guard() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            nav.scroll_to_section(&layout(), SectionId::About, 60, now);
            nav.scroll_by(3, 60);
            assert!(!nav.is_animating());
            assert!(nav.is_scrolling(now));
        }

        #[test]
        fn test_missing_section_is_skipped() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            assert!(!nav.scroll_to_section(&layout(), SectionId::Projects, 60, now));
            assert!(!nav.is_scrolling(now));
        }

        #[test]
        fn test_anchor_links() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            assert!(!nav.scroll_to_anchor(&layout(), "#", 60, now));
            assert!(!nav.scroll_to_anchor(&layout(), "about", 60, now));
            assert!(!nav.scroll_to_anchor(&layout(), "#blog", 60, now));
            assert!(nav.scroll_to_anchor(&layout(), "#contact", 60, now));
        }

        #[test]
        fn test_back_to_top_ignores_guard() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            nav.scroll_to(40, 60);
            nav.scroll_to_section(&layout(), SectionId::Contact, 60, now);
            nav.back_to_top(now + Duration::from_millis(10));
            nav.tick(now + Duration::from_secs(2));
            assert_eq!(nav.scroll, 0);
        }

        #[test]
        fn test_returning_to_top_while_animating() {
            let now = Instant::now();
            let mut nav = Navigation::default();
            nav.scroll_to(40, 60);
            assert!(!nav.is_returning_to_top());

            nav.back_to_top(now);
            nav.tick(now + Duration::from_millis(500));
            assert!(nav.is_returning_to_top());

            nav.tick(now + SMOOTH_SCROLL_DURATION);
            assert!(!nav.is_returning_to_top());
        }
    }

    mod indicators {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_active_section_uses_offset() {
            let mut nav = Navigation::default();
            assert_eq!(nav.active_section(&layout()), Some(SectionId::Home));
            nav.scroll_to(18, 100);
            assert_eq!(nav.active_section(&layout()), Some(SectionId::About));
            nav.scroll_to(17, 100);
            assert_eq!(nav.active_section(&layout()), Some(SectionId::Home));
        }

        #[test]
        fn test_no_active_section_past_end() {
            let mut nav = Navigation::default();
            nav.scroll_to(95, 100);
            assert_eq!(nav.active_section(&layout()), None);
        }

        #[test]
        fn test_thresholds_are_exclusive() {
            let mut nav = Navigation::default();
            nav.scroll_to(10, 100);
            assert!(!nav.is_back_to_top_visible(10));
            assert!(nav.is_navbar_compact(5));
            nav.scroll_to(11, 100);
            assert!(nav.is_back_to_top_visible(10));
        }
    }

    mod menu {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_and_close() {
            let mut nav = Navigation::default();
            nav.toggle_menu();
            assert!(nav.menu_open);
            nav.toggle_menu();
            assert!(!nav.menu_open);
            nav.toggle_menu();
            nav.close_menu();
            assert!(!nav.menu_open);
        }

        #[test]
        fn test_menu_selection_wraps() {
            let mut nav = Navigation::default();
            nav.menu_prev(3);
            assert_eq!(nav.menu_index, 2);
            nav.menu_next(3);
            assert_eq!(nav.menu_index, 0);
            nav.menu_next(0);
            assert_eq!(nav.menu_index, 0);
        }
    }

    mod hit_areas {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_link_hit_areas() {
            let areas = link_hit_areas(&["Home", "About"], 10);
            assert_eq!(areas, vec![(10, 16), (17, 24)]);
        }

        #[test]
        fn test_link_at_column() {
            let labels = ["Home", "About"];
            assert_eq!(link_at_column(&labels, 10, 9), None);
            assert_eq!(link_at_column(&labels, 10, 10), Some(0));
            assert_eq!(link_at_column(&labels, 10, 16), None);
            assert_eq!(link_at_column(&labels, 10, 20), Some(1));
        }
    }
}
