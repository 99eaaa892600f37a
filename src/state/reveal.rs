//! Scroll-triggered fade-in state

use super::page_layout::PageLayout;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Fraction of a block that must be inside the viewport before it reveals
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Rows at the bottom of the viewport that do not count as visible
pub const REVEAL_BOTTOM_MARGIN: usize = 2;
/// Fade duration of a revealed block
pub const REVEAL_FADE: Duration = Duration::from_millis(600);
/// Delay between consecutive skill items in a category
pub const SKILL_ITEM_STAGGER: Duration = Duration::from_millis(100);
/// Delay before a progress bar starts growing
pub const PROGRESS_DELAY: Duration = Duration::from_millis(300);
/// Time a progress bar takes to reach its level
pub const PROGRESS_GROW: Duration = Duration::from_millis(1000);

/// Hero elements fade in at `index * HERO_STAGGER + HERO_DELAY`
pub const HERO_DELAY: Duration = Duration::from_millis(500);
pub const HERO_STAGGER: Duration = Duration::from_millis(200);
pub const HERO_FADE: Duration = Duration::from_millis(800);

/// Linear progress of an animation that starts at `start` and lasts `duration`
fn progress_since(start: Instant, duration: Duration, now: Instant) -> f32 {
    if now < start {
        return 0.0;
    }
    let elapsed = now.duration_since(start).as_secs_f32();
    (elapsed / duration.as_secs_f32().max(f32::EPSILON)).min(1.0)
}

/// Tracks which blocks have scrolled into view. A revealed block stays revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashMap<usize, Instant>,
}

impl RevealTracker {
    /// Reveal every animated block intersecting the viewport by at least the threshold
    pub fn observe(
        &mut self,
        layout: &PageLayout,
        scroll: usize,
        viewport_height: usize,
        now: Instant,
    ) {
        let view_top = scroll;
        let view_bottom = scroll + viewport_height.saturating_sub(REVEAL_BOTTOM_MARGIN);

        for (index, block) in layout.blocks.iter().enumerate() {
            if !block.kind.reveals_on_scroll() || self.revealed.contains_key(&index) {
                continue;
            }
            let height = block.height();
            if height == 0 {
                continue;
            }
            let overlap = block
                .bottom()
                .min(view_bottom)
                .saturating_sub(block.top.max(view_top));
            if overlap as f32 / height as f32 >= REVEAL_THRESHOLD {
                self.revealed.insert(index, now);
            }
        }
    }

    pub fn is_revealed(&self, block_index: usize) -> bool {
        self.revealed.contains_key(&block_index)
    }

    /// Fade progress of a block, 0.0 while hidden
    pub fn progress(&self, block_index: usize, now: Instant) -> f32 {
        self.revealed
            .get(&block_index)
            .map(|at| progress_since(*at, REVEAL_FADE, now))
            .unwrap_or(0.0)
    }

    /// Fade progress of the n-th skill item inside a revealed category
    pub fn item_progress(&self, block_index: usize, item: usize, now: Instant) -> f32 {
        self.revealed
            .get(&block_index)
            .map(|at| progress_since(*at + SKILL_ITEM_STAGGER * item as u32, REVEAL_FADE, now))
            .unwrap_or(0.0)
    }

    /// Fill fraction of a progress bar relative to its level, eased
    pub fn bar_fill(&self, block_index: usize, now: Instant) -> f32 {
        self.revealed
            .get(&block_index)
            .map(|at| simple_easing::cubic_out(progress_since(*at + PROGRESS_DELAY, PROGRESS_GROW, now)))
            .unwrap_or(0.0)
    }

    /// Move reveals recorded against `old` onto the matching blocks of `new`.
    ///
    /// Blocks are matched by section and position inside the section, so a
    /// width change keeps revealed blocks revealed with their original timing.
    pub fn carry_over(&mut self, old: &PageLayout, new: &PageLayout) {
        self.revealed = std::mem::take(&mut self.revealed)
            .into_iter()
            .filter_map(|(index, at)| {
                let key = old.block_key(index)?;
                new.block_index(key).map(|moved| (moved, at))
            })
            .collect();
    }

    /// Whether any reveal is still animating
    pub fn is_animating(&self, now: Instant) -> bool {
        let settle = PROGRESS_DELAY + PROGRESS_GROW + SKILL_ITEM_STAGGER * 10;
        self.revealed.values().any(|at| now < *at + settle)
    }
}

/// Staggered intro of the hero elements
#[derive(Debug, Clone, Default)]
pub struct HeroIntro {
    started_at: Option<Instant>,
}

impl HeroIntro {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Fade progress of hero element `index`
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        self.started_at
            .map(|at| {
                let start = at + HERO_DELAY + HERO_STAGGER * index as u32;
                progress_since(start, HERO_FADE, now)
            })
            .unwrap_or(0.0)
    }

    /// Whether any of the first `elements` hero elements is still fading in
    pub fn is_animating(&self, now: Instant, elements: usize) -> bool {
        let last = elements.saturating_sub(1) as u32;
        self.started_at
            .is_some_and(|at| now < at + HERO_DELAY + HERO_STAGGER * last + HERO_FADE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::page_layout::{BlockKind, PageBlock, SectionId};

    fn block(kind: BlockKind, top: usize, height: usize) -> PageBlock {
        PageBlock {
            section: SectionId::About,
            kind,
            top,
            lines: vec![String::new(); height],
        }
    }

    fn layout(blocks: Vec<PageBlock>) -> PageLayout {
        PageLayout {
            blocks,
            sections: Vec::new(),
            width: 80,
        }
    }

    mod tracker {
        use super::*;

        #[test]
        fn test_block_in_view_is_revealed() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::AboutParagraph, 0, 5)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            assert!(tracker.is_revealed(0));
        }

        #[test]
        fn test_block_below_view_stays_hidden() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::ProjectCard, 30, 5)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            assert!(!tracker.is_revealed(0));
            assert_eq!(tracker.progress(0, now), 0.0);
        }

        #[test]
        fn test_bottom_margin_excluded() {
            let now = Instant::now();
            // Block starts inside the two-row bottom margin of a 20-row viewport
            let layout = layout(vec![block(BlockKind::ProjectCard, 18, 5)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            assert!(!tracker.is_revealed(0));

            tracker.observe(&layout, 1, 20, now);
            assert!(tracker.is_revealed(0));
        }

        #[test]
        fn test_threshold_is_ten_percent() {
            let now = Instant::now();
            // 20-row block, viewport shows one row of it (5%)
            let layout = layout(vec![block(BlockKind::TimelineItem, 17, 20)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            assert!(!tracker.is_revealed(0));

            // Two rows (10%)
            tracker.observe(&layout, 1, 20, now);
            assert!(tracker.is_revealed(0));
        }

        #[test]
        fn test_static_blocks_are_not_tracked() {
            let now = Instant::now();
            let layout = layout(vec![
                block(BlockKind::Heading, 0, 2),
                block(BlockKind::ContactForm, 2, 10),
            ]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            assert!(!tracker.is_revealed(0));
            assert!(!tracker.is_revealed(1));
        }

        #[test]
        fn test_reveal_is_sticky() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::AchievementCard, 0, 3)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);
            tracker.observe(&layout, 100, 20, now + Duration::from_secs(1));
            assert!(tracker.is_revealed(0));
            assert_eq!(tracker.progress(0, now + Duration::from_secs(1)), 1.0);
        }

        #[test]
        fn test_fade_progress() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::EducationCard, 0, 3)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);

            assert_eq!(tracker.progress(0, now), 0.0);
            let half = tracker.progress(0, now + Duration::from_millis(300));
            assert!((half - 0.5).abs() < 0.01);
            assert_eq!(tracker.progress(0, now + REVEAL_FADE), 1.0);
        }

        #[test]
        fn test_skill_items_are_staggered() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::SkillCategory, 0, 4)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);

            let at = now + Duration::from_millis(100);
            assert!(tracker.item_progress(0, 0, at) > 0.0);
            assert_eq!(tracker.item_progress(0, 1, at), 0.0);
            assert_eq!(tracker.item_progress(0, 2, at), 0.0);
        }

        #[test]
        fn test_progress_bar_waits_then_fills() {
            let now = Instant::now();
            let layout = layout(vec![block(BlockKind::ProgressItem { level: 80 }, 0, 2)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&layout, 0, 20, now);

            assert_eq!(tracker.bar_fill(0, now + Duration::from_millis(200)), 0.0);
            assert!(tracker.bar_fill(0, now + Duration::from_millis(600)) > 0.0);
            assert_eq!(
                tracker.bar_fill(0, now + PROGRESS_DELAY + PROGRESS_GROW),
                1.0
            );
        }
    }

    mod relayout {
        use super::*;

        fn block_in(section: SectionId, kind: BlockKind, top: usize, height: usize) -> PageBlock {
            PageBlock {
                section,
                ..block(kind, top, height)
            }
        }

        #[test]
        fn test_reveals_follow_blocks_to_new_layout() {
            let now = Instant::now();
            let narrow = layout(vec![
                block_in(SectionId::About, BlockKind::Heading, 0, 2),
                block_in(SectionId::About, BlockKind::AboutParagraph, 2, 6),
                block_in(SectionId::Projects, BlockKind::ProjectCard, 8, 6),
                block_in(SectionId::Projects, BlockKind::ProjectCard, 14, 6),
            ]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&narrow, 0, 12, now);
            assert!(tracker.is_revealed(1));
            assert!(tracker.is_revealed(2));
            assert!(!tracker.is_revealed(3));

            // Wider page: same blocks, fewer rows each
            let wide = layout(vec![
                block_in(SectionId::About, BlockKind::Heading, 0, 2),
                block_in(SectionId::About, BlockKind::AboutParagraph, 2, 3),
                block_in(SectionId::Projects, BlockKind::ProjectCard, 5, 3),
                block_in(SectionId::Projects, BlockKind::ProjectCard, 8, 3),
            ]);
            tracker.carry_over(&narrow, &wide);

            assert!(tracker.is_revealed(1));
            assert!(tracker.is_revealed(2));
            assert!(!tracker.is_revealed(3));
            // Original timing is kept, so no fade replays
            assert_eq!(tracker.progress(1, now + REVEAL_FADE), 1.0);
        }

        #[test]
        fn test_blocks_missing_from_new_layout_are_dropped() {
            let now = Instant::now();
            let old = layout(vec![block(BlockKind::AboutParagraph, 0, 3)]);
            let mut tracker = RevealTracker::default();
            tracker.observe(&old, 0, 20, now);

            tracker.carry_over(&old, &layout(Vec::new()));
            assert!(!tracker.is_revealed(0));
        }
    }

    mod hero {
        use super::*;

        #[test]
        fn test_not_started_is_hidden() {
            let intro = HeroIntro::default();
            assert!(!intro.is_started());
            assert_eq!(intro.progress(0, Instant::now()), 0.0);
        }

        #[test]
        fn test_elements_stagger() {
            let now = Instant::now();
            let mut intro = HeroIntro::default();
            intro.start(now);

            let at = now + Duration::from_millis(600);
            assert!(intro.progress(0, at) > 0.0);
            assert_eq!(intro.progress(1, at), 0.0);

            let done = now + HERO_DELAY + HERO_STAGGER * 3 + HERO_FADE;
            for i in 0..4 {
                assert_eq!(intro.progress(i, done), 1.0);
            }
            assert!(!intro.is_animating(done, 4));
            assert!(intro.is_animating(done - Duration::from_millis(1), 4));
        }

        #[test]
        fn test_start_is_idempotent() {
            let now = Instant::now();
            let mut intro = HeroIntro::default();
            intro.start(now);
            intro.start(now + Duration::from_secs(10));
            assert_eq!(intro.progress(0, now + Duration::from_secs(2)), 1.0);
        }
    }
}
