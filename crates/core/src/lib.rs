//! Tubesum Core Library
//!
//! An authenticated summarizer panel: takes a YouTube URL, posts it to a
//! summarization webhook and exposes the resulting state for rendering.

pub mod config;
pub mod error;
pub mod panel;
pub mod payload;
pub mod session;
pub mod view;
pub mod webhook;
pub mod youtube;

#[cfg(test)]
mod test_support;

// Re-export commonly used items at crate root
pub use config::{Config, NhostConfig};
pub use error::{AuthError, ConfigError, PanelError, Result};
pub use panel::{Panel, SubmissionState};
pub use payload::coerce_summary;
pub use session::{AuthSession, AuthStatus, Gate, NhostSession, gate};
pub use view::PanelView;
pub use webhook::{HttpWebhook, SummaryWebhook};
pub use youtube::{URL_HINT, URL_PLACEHOLDER, looks_like_youtube_url};
