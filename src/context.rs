//! Context providers for Folio.
//!
//! The App component provides the startup configuration, the preference
//! store, the diagnostic log, the current theme and the reveal registry to
//! all components.
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_app_config();
//! let mut theme = use_theme();
//! theme.set(theme().toggled());
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{DiagnosticLog, FormMethod, PreferenceStore, Theme};

use crate::components::RevealRegistry;

/// Startup configuration resolved from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// URL the contact form submits to
    pub contact_action: String,
    pub contact_method: FormMethod,
    /// Simulated latency of the catalog fetch
    pub catalog_latency: Duration,
    /// Stand-in for the system light color-scheme preference
    pub prefer_light: bool,
}

/// Get the startup configuration.
pub fn get_app_config() -> AppConfig {
    crate::app_config()
}

/// Get the preference store opened at startup, if any.
pub fn get_preference_store() -> Option<PreferenceStore> {
    crate::preference_store()
}

/// Get the diagnostic log the tracing layer records into.
pub fn get_diagnostic_log() -> DiagnosticLog {
    crate::diagnostic_log()
}

/// Hook to access the startup configuration from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Hook to access the preference store from context.
///
/// `None` when the database could not be opened; the theme then lives for
/// the session only.
pub fn use_preferences() -> Option<PreferenceStore> {
    use_context::<Option<PreferenceStore>>()
}

/// Hook to access the captured diagnostic records.
pub fn use_diagnostics() -> DiagnosticLog {
    use_context::<DiagnosticLog>()
}

/// Hook to access the current theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Hook to access the reveal-on-scroll registry.
pub fn use_reveal() -> RevealRegistry {
    use_context::<RevealRegistry>()
}
