//! Central user-facing copy: banners, fallbacks, encouragement.

use colored::Colorize;

use crate::core::progress::{ProgressEvent, ProgressState};

/// Shown when the service answered successfully but sent no usable output.
pub const FALLBACK_NO_OUTPUT: &str = "No output received from NOVA. Please try again.";

/// Shown when the service responded with a non-success status.
pub const FALLBACK_BAD_STATUS: &str = "Sorry, I couldn't process your question. Please try again!";

/// Shown when the service could not be reached at all.
pub const FALLBACK_CONNECTION: &str =
    "Connection error! Please check your connection and try again.";

/// Display name of a badge milestone.
pub fn badge_label(milestone: u64) -> String {
    format!("{milestone} Searches")
}

/// One celebration line per progress event, styled for human output.
pub fn event_banner(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::StreakIncreased { streak } => format!(
            "{} Amazing! You're on a {streak}-day learning streak!",
            "Streak increased!".yellow().bold()
        ),
        ProgressEvent::LeveledUp { level } => format!(
            "{} Congratulations! You've reached level {level}!",
            "Level up!".green().bold()
        ),
        ProgressEvent::BadgeEarned { milestone } => format!(
            "{} You've earned the \"{}\" badge!",
            "New badge earned!".magenta().bold(),
            badge_label(*milestone)
        ),
        ProgressEvent::ProgressReset => format!(
            "{} Your learning journey starts fresh!",
            "Progress reset.".bold()
        ),
    }
}

/// Mascot-style encouragement, keyed on streak first, then level.
pub fn encouragement(state: &ProgressState) -> &'static str {
    if state.streak > 7 {
        "You're on fire! Your dedication is incredible."
    } else if state.streak > 3 {
        "Great streak going! Keep up the amazing work."
    } else if state.level > 5 {
        "Look at you go! You're becoming a learning champion."
    } else if state.level > 2 {
        "You're making excellent progress! Keep exploring."
    } else {
        "Hello there! I'm NOVA, your friendly learning companion."
    }
}

/// One-line progress summary printed after an answer.
pub fn progress_footer(state: &ProgressState) -> String {
    format!(
        "Level {} | {} {} | {}-day streak | {} {}",
        state.level,
        state.searches,
        if state.searches == 1 { "ask" } else { "asks" },
        state.streak,
        state.badges,
        if state.badges == 1 { "badge" } else { "badges" },
    )
}
