use log::Level;

pub const BOOKING_RECIPIENT: &str = "vusiz@pegholdings.co.za";
pub const CONTACT_PHONE: &str = "+27 17 647 0000";

// Artificial pause before the mail handler is invoked, so the
// "Processing..." state is visible.
pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
pub const FIELD_HIGHLIGHT_MS: u32 = 3_000;

pub const COUNTER_FRAME_MS: u32 = 16;
pub const COUNTER_DURATION_MS: u32 = 1_500;

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const CAROUSEL_RESUME_MS: u32 = 10_000;

pub const EMERGENCY_PULSE_EVERY_MS: u32 = 5_000;
pub const EMERGENCY_PULSE_MS: u32 = 1_000;
pub const MAP_LOAD_DELAY_MS: u32 = 1_500;

pub const PROMO_VIDEO_ID: &str = "N-HAIC6YVSo";

pub const NAV_SCROLLED_AT: f64 = 100.0;
pub const BACK_TO_TOP_AT: f64 = 500.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
