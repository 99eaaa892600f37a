//! Transient form-level banner

use std::time::{Duration, Instant};

/// How long a banner stays fully visible
pub const MESSAGE_DISPLAY_DURATION: Duration = Duration::from_secs(5);
/// Length of the exit animation before the banner is removed
pub const MESSAGE_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Banner severity, drives its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// A message communicating one outcome to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: String,
    pub severity: Severity,
    pub shown_at: Instant,
    /// End of the visible phase; the exit animation runs after this
    pub expires_at: Instant,
}

/// Display phase of the current banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerPhase {
    Visible,
    /// Exit animation, carries progress from 0.0 to 1.0
    Leaving(f32),
}

/// Single banner slot. Showing a new message replaces the current one.
#[derive(Debug, Clone)]
pub struct MessageBanner {
    current: Option<TransientMessage>,
    display: Duration,
    exit: Duration,
}

impl Default for MessageBanner {
    fn default() -> Self {
        Self::new(MESSAGE_DISPLAY_DURATION, MESSAGE_EXIT_DURATION)
    }
}

impl MessageBanner {
    pub fn new(display: Duration, exit: Duration) -> Self {
        Self {
            current: None,
            display,
            exit,
        }
    }

    /// Show a message, replacing whatever is visible
    pub fn show(&mut self, text: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(TransientMessage {
            text: text.into(),
            severity,
            shown_at: now,
            expires_at: now + self.display,
        });
    }

    /// Remove the banner once its exit animation has finished
    pub fn tick(&mut self, now: Instant) {
        let done = self
            .current
            .as_ref()
            .is_some_and(|m| now >= m.expires_at + self.exit);
        if done {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&TransientMessage> {
        self.current.as_ref()
    }

    pub fn phase(&self, now: Instant) -> Option<BannerPhase> {
        let message = self.current.as_ref()?;
        if now < message.expires_at {
            return Some(BannerPhase::Visible);
        }
        let leaving = now.duration_since(message.expires_at).as_secs_f32();
        let progress = (leaving / self.exit.as_secs_f32().max(f32::EPSILON)).min(1.0);
        Some(BannerPhase::Leaving(progress))
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
