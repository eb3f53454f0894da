//! Constants module for centralized default values
//!
//! Every timing and threshold used by the page lives here. `PageConfig`
//! defaults are derived from these so tuning happens in one place.

/// Card-stack carousel behavior.
pub mod card_stack {
    /// Period between auto-advance ticks (ms).
    pub const AUTO_ADVANCE_MS: u64 = 4_000;
    /// Fixed window during which navigation is locked after a transition (ms).
    pub const ANIMATION_LOCK_MS: u64 = 600;
    /// Minimum horizontal travel (device px) for a drag to count as a swipe.
    pub const SWIPE_THRESHOLD_PX: f32 = 30.0;
    /// Auto-advance only runs when the viewport is wider than this (px).
    pub const AUTO_ADVANCE_MIN_VIEWPORT: f32 = 768.0;
}

/// Fallback slider behavior.
pub mod slider {
    /// Period between automatic slide changes (ms).
    pub const AUTO_SLIDE_MS: u64 = 5_000;
}

pub mod toast {
    /// How long a toast stays visible (ms).
    pub const DURATION_MS: u64 = 3_000;
}

/// Dark-mode toggle.
pub mod theme {
    /// Preference key holding the dark-mode flag.
    pub const STORAGE_KEY: &str = "darkMode";
    /// Duration of the toggle button's press animation (ms).
    pub const BUTTON_ANIMATION_MS: u64 = 500;
}

pub mod loading {
    /// Time the loading screen stays fully visible after load (ms).
    pub const VISIBLE_MS: u64 = 2_000;
    /// Fade-out duration before the screen is removed (ms).
    pub const FADE_MS: u64 = 500;
}

/// Scroll affordances and navigation.
pub mod scroll {
    /// Scroll offset (px) after which the back-to-top button is shown.
    pub const BACK_TO_TOP_THRESHOLD: f32 = 600.0;
    /// Delay before the login button navigates away (ms).
    pub const LOGIN_REDIRECT_MS: u64 = 1_000;
    /// Navigation target of the login button.
    pub const LOGIN_URL: &str = "login.html";
    /// Target of the "scroll to features" buttons.
    pub const FEATURES_ANCHOR: &str = "#features";
}

/// Intersection thresholds for one-shot visibility observers.
pub mod reveal {
    pub const SECTION_THRESHOLD: f32 = 0.15;
    pub const IMAGE_THRESHOLD: f32 = 0.1;
    pub const STATS_THRESHOLD: f32 = 0.5;
    pub const ENTRY_ANIMATION_THRESHOLD: f32 = 0.1;
}

pub mod counters {
    /// Number of frames a counter takes to reach its target.
    pub const STEPS: u32 = 100;
}

pub mod newsletter {
    /// Simulated submission latency (ms).
    pub const SUBMIT_DELAY_MS: u64 = 900;
    pub const INVALID_HINT: &str = "Please enter a valid email address.";
    pub const PENDING_HINT: &str = "Subscribing...";
    pub const SUCCESS_HINT: &str = "You are subscribed! Check your inbox.";
}

/// Background particle field.
pub mod particles {
    pub const COUNT: usize = 50;
    /// Maximum animation delay (s).
    pub const MAX_DELAY_S: f32 = 20.0;
    /// Base animation duration (s); a random extra of up to `DURATION_SPREAD_S` is added.
    pub const BASE_DURATION_S: f32 = 20.0;
    pub const DURATION_SPREAD_S: f32 = 10.0;
}
