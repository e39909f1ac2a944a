use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development builds log state-machine transitions
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SITE_NAME: &str = "Booker Accounting and Consulting";
pub const HOME_TITLE: &str = "Booker Accounting & Consulting";

/// Offset past which the navbar may hide and switches to its scrolled theme.
pub const NAV_HIDE_THRESHOLD: f64 = 100.0;
/// How long a desktop dropdown waits for the pointer to reach the other region.
pub const HOVER_CLOSE_DELAY_MS: u32 = 120;

pub const COUNTER_STEPS: u32 = 60;
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_THRESHOLD: f64 = 0.3;

/// Delay before a mount-triggered reveal flips, so the hidden state is painted first.
pub const MOUNT_REVEAL_DELAY_MS: u32 = 16;

pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/800x600/1e3a8a/ffffff?text=BAC+Visual+Placeholder";

pub const LOGO_LIGHT: &str = "/images/LogoLight.png";
pub const LOGO_DARK: &str = "/images/LogoDark.png";
pub const HERO_IMAGE: &str = "/images/business5.webp";
