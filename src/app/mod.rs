// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the active route, the image picker, the toast
//! manager, localization and the loaded preferences. Components receive only
//! the slices they need through `update::UpdateContext` and
//! `view::ViewContext`.

mod message;
pub mod paths;
pub mod persistence;
pub mod route;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::application::port::{AssetResolver, FileDialog};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{AppAssetResolver, NativeFileDialog};
use crate::ui::image_picker;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    route: Route,
    theme_mode: ThemeMode,
    config: Config,
    /// Where preferences are written; `None` uses the default location.
    config_dir: Option<PathBuf>,
    image_picker: image_picker::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("image_picker", &self.image_picker)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_ports(
            &Config::default(),
            I18n::default(),
            Arc::new(NativeFileDialog::new()),
            Arc::new(AppAssetResolver::new()),
        )
    }
}

impl App {
    /// Builds the application around explicit dialog and resolver ports.
    pub fn with_ports(
        config: &Config,
        i18n: I18n,
        dialog: Arc<dyn FileDialog>,
        resolver: Arc<dyn AssetResolver>,
    ) -> Self {
        let diagnostics = DiagnosticsHandle::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.clone());

        Self {
            i18n,
            route: Route::default(),
            theme_mode: config.general.theme_mode,
            config: config.clone(),
            config_dir: None,
            image_picker: image_picker::State::new(dialog, resolver, diagnostics.clone()),
            notifications,
            diagnostics,
        }
    }

    /// Writes preferences under `dir` instead of the default location.
    #[must_use]
    pub fn with_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config_dir = dir;
        self
    }

    /// Loads preferences and localization, then wires the native adapters.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.as_deref().map(Path::new),
            &config,
        );
        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.general.theme_mode,
            "starting application"
        );

        let mut app = Self::with_ports(
            &config,
            i18n,
            Arc::new(NativeFileDialog::new()),
            Arc::new(AppAssetResolver::new()),
        );

        if let Some(key) = config_warning {
            app.diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigFallback,
                "settings file unreadable, using defaults",
            ));
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            route: &mut self.route,
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            image_picker: &mut self.image_picker,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics,
        };

        match message {
            Message::ImagePicker(picker_message) => {
                update::handle_image_picker_message(&mut ctx, picker_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            layout: &self.config.layout,
            image_picker: &self.image_picker,
            notifications: &self.notifications,
        })
    }

    /// Currently displayed route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Preferences as currently applied.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn image_picker(&self) -> &image_picker::State {
        &self.image_picker
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsHandle {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{DialogError, DialogOutcome, OpenRequest};
    use crate::diagnostics::ErrorType;
    use crate::ui::navbar;
    use futures_util::future::{self, BoxFuture, FutureExt};
    use futures_util::StreamExt;
    use image_rs::{Rgb, RgbImage};
    use std::time::{Duration, Instant};
    use tempfile::{tempdir, TempDir};
    use unic_langid::LanguageIdentifier;

    struct CancellingDialog;

    impl FileDialog for CancellingDialog {
        fn open(&self, _request: OpenRequest) -> BoxFuture<'static, DialogOutcome> {
            future::ready(Ok(None)).boxed()
        }
    }

    /// App writing its preferences into a fresh temp directory.
    fn test_app() -> (App, TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let app = App::with_ports(
            &Config::default(),
            i18n,
            Arc::new(CancellingDialog),
            Arc::new(AppAssetResolver::new()),
        )
        .with_config_dir(Some(dir.path().to_path_buf()));
        (app, dir)
    }

    /// Runs `message` and every follow-up its tasks emit.
    async fn settle(app: &mut App, message: Message) {
        let mut pending = vec![message];
        while let Some(message) = pending.pop() {
            let task = app.update(message);
            if let Some(stream) = iced_runtime::task::into_stream(task) {
                let outputs: Vec<Message> = stream
                    .filter_map(|action| async move {
                        match action {
                            iced_runtime::Action::Output(message) => Some(message),
                            _ => None,
                        }
                    })
                    .collect()
                    .await;
                pending.extend(outputs);
            }
        }
    }

    fn saved_config(dir: &TempDir) -> Config {
        let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        config
    }

    #[test]
    fn starts_on_image_picker_route() {
        let (app, _dir) = test_app();
        assert_eq!(app.route(), Route::ImagePicker);
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn title_is_localized() {
        let (app, _dir) = test_app();
        assert_eq!(app.title(), "eSIM Workbench");
    }

    #[test]
    fn navbar_switches_route_and_records_action() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Route::About)));

        assert_eq!(app.route(), Route::About);
        assert_eq!(app.diagnostics().len(), 1);
    }

    #[test]
    fn dialog_failure_reaches_notification_manager() {
        let (mut app, _dir) = test_app();

        let _ = app.update(Message::ImagePicker(image_picker::Message::PickImage));
        let _ = app.update(Message::ImagePicker(image_picker::Message::DialogClosed(
            Err(DialogError::Backend("no portal".into())),
        )));

        assert_eq!(app.notifications().visible_count(), 1);
        let toast = app.notifications().visible().next().map(|n| n.message_key());
        assert_eq!(toast, Some(image_picker::DIALOG_ERROR_KEY));
        assert_eq!(app.diagnostics().errors().len(), 1);
    }

    #[tokio::test]
    async fn successful_selection_produces_no_toast() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("photo.jpg");
        RgbImage::from_pixel(6, 6, Rgb([200, 10, 10]))
            .save(&path)
            .expect("failed to write temporary jpeg");

        settle(
            &mut app,
            Message::ImagePicker(image_picker::Message::DialogClosed(Ok(Some(path)))),
        )
        .await;

        assert!(!app.notifications().has_notifications());
        assert!(matches!(
            app.image_picker().preview(),
            image_picker::Preview::Image(_)
        ));
    }

    #[tokio::test]
    async fn undecodable_selection_reaches_notification_manager() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"\x89PNG but not really").expect("failed to write file");

        settle(
            &mut app,
            Message::ImagePicker(image_picker::Message::DialogClosed(Ok(Some(path)))),
        )
        .await;

        let toast = app.notifications().visible().next().map(|n| n.message_key());
        assert_eq!(toast, Some(image_picker::LOAD_ERROR_KEY));
        assert_eq!(app.diagnostics().errors()[0].error_type, ErrorType::LoadError);
    }

    #[test]
    fn tick_expires_error_toasts() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::ImagePicker(image_picker::Message::DialogClosed(
            Err(DialogError::Backend("gone".into())),
        )));

        app.notifications.tick_at(Instant::now() + Duration::from_secs(10));

        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn panel_toggles_are_applied_and_saved() {
        let (mut app, dir) = test_app();
        assert!(app.config().layout.show_aside());
        assert!(!app.config().layout.show_inspector());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleAside));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleInspector));

        assert!(!app.config().layout.show_aside());
        assert!(app.config().layout.show_inspector());
        let saved = saved_config(&dir);
        assert!(!saved.layout.show_aside());
        assert!(saved.layout.show_inspector());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn language_selection_switches_locale_and_is_saved() {
        let (mut app, dir) = test_app();
        let zh: LanguageIdentifier = "zh-CN".parse().expect("valid locale");

        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(zh)));

        assert_eq!(app.i18n.current_locale().to_string(), "zh-CN");
        assert_eq!(saved_config(&dir).general.language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn view_renders_every_route_and_panel() {
        let (mut app, _dir) = test_app();
        let _picker = app.view();
        drop(_picker);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleInspector));
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Route::About)));
        let _about = app.view();
    }
}
