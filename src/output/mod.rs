//! User-facing copy and presentation helpers.
//!
//! All celebration banners, fallback messages, and encouragement lines live
//! in [`messages`] so the wording exists in exactly one place. Commands
//! decide *when* to print; this module decides *what* the user reads.

pub mod messages;

pub use messages::{
    FALLBACK_BAD_STATUS, FALLBACK_CONNECTION, FALLBACK_NO_OUTPUT, badge_label, encouragement,
    event_banner, progress_footer,
};
