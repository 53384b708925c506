// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.

use super::persistence;
use super::route::Route;
use super::Message;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::i18n::fluent::I18n;
use crate::ui::image_picker;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::Task;
use std::path::Path;

/// Mutable slices of the application state a handler may touch.
pub struct UpdateContext<'a> {
    pub route: &'a mut Route,
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub image_picker: &'a mut image_picker::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a DiagnosticsHandle,
}

impl UpdateContext<'_> {
    fn persist(&mut self) {
        persistence::persist_preferences(
            self.config,
            self.config_dir,
            self.diagnostics,
            &mut *self.notifications,
        );
    }
}

pub fn handle_image_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: image_picker::Message,
) -> Task<Message> {
    ctx.image_picker
        .update(message, &mut *ctx.notifications)
        .map(Message::ImagePicker)
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, *ctx.route, ctx.i18n.current_locale()) {
        navbar::Event::None => {}
        navbar::Event::Navigate(route) => {
            ctx.diagnostics.log_action(UserAction::Navigate {
                route: route.as_str().to_string(),
            });
            *ctx.route = route;
        }
        navbar::Event::ToggleAside => {
            ctx.diagnostics.log_action(UserAction::ToggleAside);
            ctx.config.layout.toggle_aside();
            ctx.persist();
        }
        navbar::Event::ToggleInspector => {
            ctx.diagnostics.log_action(UserAction::ToggleInspector);
            ctx.config.layout.toggle_inspector();
            ctx.persist();
        }
        navbar::Event::LanguageSelected(locale) => {
            ctx.diagnostics.log_action(UserAction::SelectLanguage {
                locale: locale.to_string(),
            });
            if persistence::apply_language_change(ctx.i18n, ctx.config, locale) {
                ctx.persist();
            }
        }
    }
    Task::none()
}
