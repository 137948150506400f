use chrono_tz::Tz;
use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Time zone the chapter's event dates are written in.
pub const CHAPTER_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Root margin handed to the intersection observer behind every reveal.
pub const REVEAL_MARGIN: &str = "-100px";

pub const COUNTER_DURATION_MS: u32 = 2000;

pub const COUNTDOWN_PERIOD_MS: u32 = 1000;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;
