// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::subscription::Shortcut;
use crate::ui::gallery;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Gallery(gallery::Message),
    /// A keyboard shortcut that no widget captured.
    Shortcut(Shortcut),
}

impl From<gallery::Message> for Message {
    fn from(message: gallery::Message) -> Self {
        Message::Gallery(message)
    }
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. "fr").
    pub lang: Option<String>,
    /// Optional config directory override (already applied through
    /// `paths::init_cli_overrides`; kept for logging).
    pub config_dir: Option<String>,
}
