// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Layout toggles and the language choice are written back to
//! `settings.toml` as soon as they change. A failed write never interrupts
//! the session: the change stays in memory and the user gets a warning.

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Notification, NotificationSink};
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// i18n key of the warning shown when preferences cannot be written.
pub const CONFIG_SAVE_WARNING_KEY: &str = "notification-config-save-error";

/// Writes `config` to the settings file under `config_dir`, or to the
/// default location when `None`.
///
/// Returns whether the write succeeded.
pub fn persist_preferences(
    config: &Config,
    config_dir: Option<&Path>,
    diagnostics: &DiagnosticsHandle,
    notifications: &mut impl NotificationSink,
) -> bool {
    match config::save_with_override(config, config_dir.map(Path::to_path_buf)) {
        Ok(()) => {
            tracing::debug!("preferences saved");
            true
        }
        Err(err) => {
            tracing::warn!("failed to save preferences: {err}");
            diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigSave,
                format!("failed to save preferences: {err}"),
            ));
            notifications.push(Notification::warning(CONFIG_SAVE_WARNING_KEY));
            false
        }
    }
}

/// Switches the active locale and records it in `config`.
///
/// Locales without a loaded bundle leave both untouched.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> bool {
    if !i18n.available_locales.contains(&locale) {
        tracing::warn!(%locale, "ignoring unknown locale");
        return false;
    }

    i18n.set_locale(locale.clone());
    config.general.language = Some(locale.to_string());
    tracing::info!(%locale, "language changed");
    true
}
