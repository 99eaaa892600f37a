//! Loading screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static display while the page loads
    Display,
    /// Screen sliding away
    Exit,
    /// Animation finished, page visible
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset during the exit animation
    pub scroll_offset: f32,
}

impl SplashState {
    /// Time the loading screen stays up
    pub const DISPLAY_DURATION: Duration = Duration::from_millis(1000);
    /// Duration of the exit animation
    pub const EXIT_DURATION: Duration = Duration::from_millis(500);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state for the given time
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.is_complete() {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::EXIT_DURATION {
            self.phase = SplashPhase::Exit;
            let exit_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = exit_elapsed.as_secs_f32() / Self::EXIT_DURATION.as_secs_f32();
            // Cubic ease-out, ending fully above the top edge
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key or clicked)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod splash_phase {
        use super::*;

        #[test]
        fn test_phases_are_distinct() {
            assert_ne!(SplashPhase::Display, SplashPhase::Exit);
            assert_ne!(SplashPhase::Display, SplashPhase::Complete);
            assert_ne!(SplashPhase::Exit, SplashPhase::Complete);
        }
    }

    mod splash_state {
        use super::*;

        #[test]
        fn test_new_starts_in_display_phase() {
            let state = SplashState::new(Instant::now());
            assert_eq!(state.phase, SplashPhase::Display);
            assert_eq!(state.scroll_offset, 0.0);
            assert!(!state.is_complete());
        }

        #[test]
        fn test_skip_immediately_completes() {
            let mut state = SplashState::new(Instant::now());
            state.skip();
            assert!(state.is_complete());

            state.skip();
            assert!(state.is_complete());
        }

        #[test]
        fn test_display_phase_before_delay() {
            let start = Instant::now();
            let mut state = SplashState::new(start);
            state.update(start + Duration::from_millis(999), 24);
            assert_eq!(state.phase, SplashPhase::Display);
            assert_eq!(state.scroll_offset, 0.0);
        }

        #[test]
        fn test_exit_phase_moves_upward() {
            let start = Instant::now();
            let mut state = SplashState::new(start);
            state.update(start + Duration::from_millis(1250), 24);
            assert_eq!(state.phase, SplashPhase::Exit);
            assert!(state.scroll_offset > 0.0);
            assert!(state.scroll_offset < 24.0);
        }

        #[test]
        fn test_completes_after_exit() {
            let start = Instant::now();
            let mut state = SplashState::new(start);
            state.update(
                start + SplashState::DISPLAY_DURATION + SplashState::EXIT_DURATION,
                24,
            );
            assert!(state.is_complete());
        }

        #[test]
        fn test_skipped_state_stays_complete() {
            let start = Instant::now();
            let mut state = SplashState::new(start);
            state.skip();
            state.update(start, 24);
            assert!(state.is_complete());
        }
    }
}
