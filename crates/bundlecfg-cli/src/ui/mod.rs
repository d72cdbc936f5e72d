//! Terminal status output on stderr.

mod messages;

pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Apply the color decision to owo-colors' global override.
///
/// `--no-color` always wins over environment and terminal detection.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
