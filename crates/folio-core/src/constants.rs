//! Timing and threshold constants for the portfolio engine.

use std::time::Duration;

/// Pixels subtracted from a section's top/bottom before comparing to the
/// scroll offset, so a section activates slightly before its true boundary.
pub const ACTIVATION_MARGIN: u32 = 100;

/// Scroll offset above which the navbar enters its "scrolled" visual state.
/// The boundary is exclusive: 50 is not scrolled, 51 is.
pub const NAVBAR_SCROLL_THRESHOLD: u32 = 50;

/// Scroll offset past which scrolling down hides the navbar.
pub const NAVBAR_HIDE_THRESHOLD: u32 = 100;

/// Scroll offset above which the back-to-top affordance is shown.
pub const BACK_TO_TOP_THRESHOLD: u32 = 300;

/// Offset subtracted from a section's top when jumping to it, so the
/// section heading lands below the fixed navbar.
pub const ANCHOR_OFFSET: u32 = 80;

/// Margin subtracted from the viewport bottom when testing intersection,
/// so elements reveal only once they are comfortably inside the viewport.
pub const REVEAL_BOTTOM_MARGIN: u32 = 50;

/// Number of equal increments in a stat count-up animation.
pub const COUNT_UP_STEPS: u32 = 50;

/// Delay between count-up increments.
pub const COUNT_UP_STEP_INTERVAL: Duration = Duration::from_millis(40);

/// Delay between typed characters.
pub const TYPING_DELAY: Duration = Duration::from_millis(100);

/// Delay between erased characters.
pub const ERASING_DELAY: Duration = Duration::from_millis(50);

/// Pause with the full phrase visible before erasing begins.
pub const PHRASE_PAUSE: Duration = Duration::from_millis(2000);

/// Pause after a phrase is fully erased before the next one starts.
pub const TYPING_RESTART_PAUSE: Duration = Duration::from_millis(1200);

/// Delay before the very first phrase starts typing.
pub const TYPING_INITIAL_DELAY: Duration = Duration::from_millis(2250);

/// How long a notification stays visible before auto-dismissing.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Maximum number of notifications kept on screen; oldest are dropped.
pub const MAX_TOASTS: usize = 8;

/// Fixed delay of the simulated contact-form submission.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Default engine tick interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(50);

/// Notification shown when the simulated submission completes.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! I'll get back to you soon.";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration or content.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
