// SPDX-License-Identifier: MPL-2.0
//! Image picker component.
//!
//! A trigger button opens the native file dialog restricted to image files.
//! The chosen path is turned into an [`AssetUrl`], then the file behind
//! [`AssetUrl::local_path`] is read and decoded off the update loop. Only a
//! successfully decoded image replaces the current selection. The frame
//! renders those decoded pixels; the `app://` form is the selection's
//! identity and is never fetched. Until a first image loads the frame shows
//! a placeholder label.
//!
//! Inside the frame the image can be zoomed with the wheel, panned by
//! dragging and reset with a double click.
//!
//! Failures never escape `update`: the user gets one error toast with a
//! fixed text and the detail goes to the diagnostics handle.

use crate::application::port::{
    AssetResolver, AssetUrl, DialogOutcome, FileDialog, FileFilter, OpenRequest,
};
use crate::config::{IMAGE_EXTENSIONS, IMAGE_FILTER_NAME, PREVIEW_FRAME_SIZE};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, UserAction};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::notifications::{Notification, NotificationSink};
use crate::ui::preview;
use crate::ui::viewport::Viewport;
use iced::widget::{button, container, Column, Container, Text};
use iced::{alignment, Element, Length, Size, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// i18n key of the toast shown when the dialog fails.
pub const DIALOG_ERROR_KEY: &str = "notification-dialog-error";

/// i18n key of the toast shown when a path cannot be displayed.
pub const CONVERT_ERROR_KEY: &str = "notification-convert-error";

/// i18n key of the toast shown when a picked file cannot be decoded.
pub const LOAD_ERROR_KEY: &str = "notification-load-error";

/// Contextual data needed to render the picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The trigger button was pressed.
    PickImage,
    /// The dialog future resolved.
    DialogClosed(DialogOutcome),
    /// Decoding of a resolved selection finished.
    ImageLoaded {
        url: AssetUrl,
        result: Result<ImageData, Error>,
    },
    /// Zoom and pan input from the preview frame.
    Preview(preview::Message),
}

/// The image currently shown in the preview frame.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    url: AssetUrl,
    image: ImageData,
    viewport: Viewport,
}

impl SelectedImage {
    pub(crate) fn new(url: AssetUrl, image: ImageData) -> Self {
        let frame = Size::new(PREVIEW_FRAME_SIZE, PREVIEW_FRAME_SIZE);
        let viewport = Viewport::new(image.size(), frame);
        Self {
            url,
            image,
            viewport,
        }
    }

    #[must_use]
    pub fn url(&self) -> &AssetUrl {
        &self.url
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

/// What the preview frame renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<'a> {
    Placeholder,
    Image(&'a AssetUrl),
}

pub struct State {
    dialog: Arc<dyn FileDialog>,
    resolver: Arc<dyn AssetResolver>,
    diagnostics: DiagnosticsHandle,
    selection: Option<SelectedImage>,
    busy: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("selection", &self.selection)
            .field("busy", &self.busy)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        dialog: Arc<dyn FileDialog>,
        resolver: Arc<dyn AssetResolver>,
        diagnostics: DiagnosticsHandle,
    ) -> Self {
        Self {
            dialog,
            resolver,
            diagnostics,
            selection: None,
            busy: false,
        }
    }

    /// Single-file request restricted to image extensions.
    #[must_use]
    pub fn open_request() -> OpenRequest {
        OpenRequest::single(FileFilter::new(IMAGE_FILTER_NAME, &IMAGE_EXTENSIONS))
    }

    #[must_use]
    pub fn preview(&self) -> Preview<'_> {
        match &self.selection {
            Some(selected) => Preview::Image(selected.url()),
            None => Preview::Placeholder,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<&SelectedImage> {
        self.selection.as_ref()
    }

    /// Whether a dialog session or a decode is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn update(
        &mut self,
        message: Message,
        notifications: &mut impl NotificationSink,
    ) -> Task<Message> {
        match message {
            Message::PickImage => {
                if self.busy {
                    tracing::debug!("file dialog already open, ignoring trigger");
                    return Task::none();
                }
                self.busy = true;
                self.diagnostics.log_action(UserAction::PickImage);

                let request = Self::open_request();
                tracing::debug!(?request, "opening file dialog");
                Task::perform(self.dialog.open(request), Message::DialogClosed)
            }
            Message::DialogClosed(outcome) => self.handle_outcome(outcome, notifications),
            Message::ImageLoaded { url, result } => {
                self.busy = false;
                self.finish_load(url, result, notifications);
                Task::none()
            }
            Message::Preview(message) => {
                if let Some(selected) = &mut self.selection {
                    preview::apply(&mut selected.viewport, message);
                }
                Task::none()
            }
        }
    }

    fn handle_outcome(
        &mut self,
        outcome: DialogOutcome,
        notifications: &mut impl NotificationSink,
    ) -> Task<Message> {
        match outcome {
            Ok(Some(path)) => return self.resolve(path, notifications),
            Ok(None) => tracing::debug!("file dialog cancelled"),
            Err(err) => {
                self.diagnostics.log_error(ErrorEvent::new(
                    ErrorType::DialogError,
                    format!("file dialog failed: {err}"),
                ));
                notifications.push(Notification::error(DIALOG_ERROR_KEY));
            }
        }
        self.busy = false;
        Task::none()
    }

    /// Resolves `path` and starts decoding it. Stays busy until the decode
    /// reports back.
    fn resolve(
        &mut self,
        path: PathBuf,
        notifications: &mut impl NotificationSink,
    ) -> Task<Message> {
        match self.resolver.resolve(&path) {
            Ok(url) => {
                tracing::debug!(url = %url, "decoding selected image");
                Task::perform(
                    async move {
                        let result = media::load_image(url.local_path());
                        (url, result)
                    },
                    |(url, result)| Message::ImageLoaded { url, result },
                )
            }
            Err(err) => {
                self.busy = false;
                self.diagnostics.log_error(ErrorEvent::new(
                    ErrorType::ConversionError,
                    format!("cannot display {}: {err}", path.display()),
                ));
                notifications.push(Notification::error(CONVERT_ERROR_KEY));
                Task::none()
            }
        }
    }

    fn finish_load(
        &mut self,
        url: AssetUrl,
        result: Result<ImageData, Error>,
        notifications: &mut impl NotificationSink,
    ) {
        match result {
            Ok(image) => {
                tracing::info!(
                    url = %url,
                    width = image.width,
                    height = image.height,
                    "image selected"
                );
                self.selection = Some(SelectedImage::new(url, image));
            }
            Err(err) => {
                self.diagnostics.log_error(ErrorEvent::new(
                    ErrorType::LoadError,
                    format!("cannot load {}: {err}", url.local_path().display()),
                ));
                notifications.push(Notification::error(LOAD_ERROR_KEY));
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let label = if self.busy {
            ctx.i18n.tr("picker-busy")
        } else {
            ctx.i18n.tr("picker-choose-button")
        };
        let trigger = button(Text::new(label).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .on_press_maybe((!self.busy).then_some(Message::PickImage));

        let content: Element<'a, Message> = match &self.selection {
            Some(selected) => {
                preview::view(&selected.image.handle, selected.viewport).map(Message::Preview)
            }
            None => Text::new(ctx.i18n.tr("picker-placeholder"))
                .size(typography::BODY)
                .into(),
        };

        let frame = Container::new(content)
            .width(Length::Fixed(PREVIEW_FRAME_SIZE))
            .height(Length::Fixed(PREVIEW_FRAME_SIZE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .clip(true)
            .style(frame_style);

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(trigger)
            .push(frame)
            .into()
    }
}

fn frame_style(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(theme.extended_palette().background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ConvertError, DialogError};
    use crate::infrastructure::AppAssetResolver;
    use futures_util::future::{self, BoxFuture, FutureExt};
    use futures_util::StreamExt;
    use iced::Point;
    use image_rs::{Rgba, RgbaImage};
    use std::collections::VecDeque;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::{tempdir, TempDir};

    /// Dialog that records requests and answers with scripted outcomes in order.
    #[derive(Default)]
    struct FakeDialog {
        requests: Mutex<Vec<OpenRequest>>,
        outcomes: Mutex<VecDeque<DialogOutcome>>,
    }

    impl FakeDialog {
        fn answering(outcomes: Vec<DialogOutcome>) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                outcomes: Mutex::new(outcomes.into()),
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl FileDialog for FakeDialog {
        fn open(&self, request: OpenRequest) -> BoxFuture<'static, DialogOutcome> {
            self.requests.lock().unwrap().push(request);
            let outcome = self
                .outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(None));
            future::ready(outcome).boxed()
        }
    }

    struct FailingResolver;

    impl AssetResolver for FailingResolver {
        fn resolve(&self, path: &Path) -> Result<AssetUrl, ConvertError> {
            Err(ConvertError::InvalidUrl(path.display().to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        pushed: Vec<Notification>,
    }

    impl NotificationSink for RecordingSink {
        fn push(&mut self, notification: Notification) {
            self.pushed.push(notification);
        }
    }

    fn picker(dialog: Arc<FakeDialog>) -> (State, DiagnosticsHandle) {
        let diagnostics = DiagnosticsHandle::default();
        let state = State::new(dialog, Arc::new(AppAssetResolver::new()), diagnostics.clone());
        (state, diagnostics)
    }

    fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]))
            .save(&path)
            .expect("failed to write temporary png");
        path
    }

    fn url_for(path: &Path) -> String {
        AppAssetResolver::new()
            .resolve(path)
            .expect("absolute temp path should resolve")
            .to_string()
    }

    fn shown_url(state: &State) -> Option<String> {
        match state.preview() {
            Preview::Image(url) => Some(url.as_str().to_string()),
            Preview::Placeholder => None,
        }
    }

    /// Messages produced by running `task` to completion.
    async fn outputs(task: Task<Message>) -> Vec<Message> {
        let Some(stream) = iced_runtime::task::into_stream(task) else {
            return Vec::new();
        };
        stream
            .filter_map(|action| async move {
                match action {
                    iced_runtime::Action::Output(message) => Some(message),
                    _ => None,
                }
            })
            .collect()
            .await
    }

    /// Feeds `message` to the picker along with every follow-up its tasks emit.
    async fn settle(state: &mut State, message: Message, sink: &mut RecordingSink) {
        let mut pending = VecDeque::from([message]);
        while let Some(message) = pending.pop_front() {
            let task = state.update(message, sink);
            pending.extend(outputs(task).await);
        }
    }

    #[test]
    fn initial_state_shows_placeholder() {
        let (state, diagnostics) = picker(Arc::new(FakeDialog::default()));

        assert_eq!(state.preview(), Preview::Placeholder);
        assert!(!state.is_busy());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn open_request_is_single_image_selection() {
        let request = State::open_request();

        assert!(!request.multiple);
        assert_eq!(request.filters.len(), 1);
        assert_eq!(request.filters[0].name, "Image");
        assert_eq!(request.filters[0].extensions, vec!["png", "jpg", "jpeg"]);
    }

    #[test]
    fn trigger_opens_dialog_with_image_filter() {
        let dialog = FakeDialog::answering(vec![Ok(None)]);
        let (mut state, diagnostics) = picker(dialog.clone());
        let mut sink = RecordingSink::default();

        let _task = state.update(Message::PickImage, &mut sink);

        assert!(state.is_busy());
        assert_eq!(dialog.request_count(), 1);
        assert_eq!(dialog.requests.lock().unwrap()[0], State::open_request());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn trigger_while_busy_is_ignored() {
        let dialog = FakeDialog::answering(vec![Ok(None)]);
        let (mut state, _) = picker(dialog.clone());
        let mut sink = RecordingSink::default();

        let _first = state.update(Message::PickImage, &mut sink);
        let _second = state.update(Message::PickImage, &mut sink);

        assert_eq!(dialog.request_count(), 1);

        let _ = state.update(Message::DialogClosed(Ok(None)), &mut sink);
        let _third = state.update(Message::PickImage, &mut sink);

        assert_eq!(dialog.request_count(), 2);
    }

    #[tokio::test]
    async fn stays_busy_until_decode_reports_back() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, "slow.png", 3, 3);
        let (mut state, _) = picker(Arc::new(FakeDialog::default()));
        let mut sink = RecordingSink::default();

        let _ = state.update(Message::PickImage, &mut sink);
        let task = state.update(Message::DialogClosed(Ok(Some(path))), &mut sink);

        assert!(state.is_busy());
        assert_eq!(state.preview(), Preview::Placeholder);

        let produced = outputs(task).await;
        assert_eq!(produced.len(), 1);
        assert!(matches!(
            &produced[0],
            Message::ImageLoaded { result: Ok(_), .. }
        ));
    }

    #[tokio::test]
    async fn successful_selection_decodes_and_shows_image() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, "photo.png", 600, 300);
        let (mut state, diagnostics) =
            picker(FakeDialog::answering(vec![Ok(Some(path.clone()))]));
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;

        assert!(!state.is_busy());
        assert_eq!(shown_url(&state), Some(url_for(&path)));
        let selected = state.selection().expect("image should be selected");
        assert_eq!(
            (selected.image().width, selected.image().height),
            (600, 300)
        );
        assert_eq!(selected.url().local_path(), path.as_path());
        assert!(selected.viewport().is_fitted());
        assert!(sink.pushed.is_empty());
        assert!(diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn new_selection_replaces_previous_one() {
        let dir = tempdir().expect("failed to create temp dir");
        let first = write_png(&dir, "a.png", 2, 2);
        let second = write_png(&dir, "b.png", 5, 4);
        let dialog = FakeDialog::answering(vec![Ok(Some(first)), Ok(Some(second.clone()))]);
        let (mut state, _) = picker(dialog.clone());
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;
        settle(&mut state, Message::PickImage, &mut sink).await;

        assert_eq!(dialog.request_count(), 2);
        assert_eq!(shown_url(&state), Some(url_for(&second)));
        assert_eq!(
            state
                .selection()
                .map(|s| (s.image().width, s.image().height)),
            Some((5, 4))
        );
    }

    #[tokio::test]
    async fn picking_same_file_twice_keeps_identical_url_and_stays_silent() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, "a.png", 4, 4);
        let dialog = FakeDialog::answering(vec![Ok(Some(path.clone())), Ok(Some(path.clone()))]);
        let (mut state, diagnostics) = picker(dialog);
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;
        let once = shown_url(&state);
        settle(&mut state, Message::PickImage, &mut sink).await;

        assert_eq!(once, Some(url_for(&path)));
        assert_eq!(shown_url(&state), once);
        assert!(sink.pushed.is_empty());
        assert!(diagnostics.errors().is_empty());
    }

    #[tokio::test]
    async fn cancellation_keeps_state_and_stays_silent() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, "keep.png", 2, 2);
        let dialog = FakeDialog::answering(vec![Ok(Some(path.clone())), Ok(None)]);
        let (mut state, diagnostics) = picker(dialog);
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;
        settle(&mut state, Message::PickImage, &mut sink).await;

        assert!(!state.is_busy());
        assert_eq!(shown_url(&state), Some(url_for(&path)));
        assert!(sink.pushed.is_empty());
        assert!(diagnostics.errors().is_empty());
    }

    #[test]
    fn dialog_failure_pushes_one_error_and_logs_detail() {
        let (mut state, diagnostics) = picker(Arc::new(FakeDialog::default()));
        let mut sink = RecordingSink::default();

        let _ = state.update(Message::PickImage, &mut sink);
        let _ = state.update(
            Message::DialogClosed(Err(DialogError::Backend("portal unavailable".into()))),
            &mut sink,
        );

        assert!(!state.is_busy());
        assert_eq!(state.preview(), Preview::Placeholder);
        assert_eq!(sink.pushed.len(), 1);
        assert_eq!(sink.pushed[0].message_key(), DIALOG_ERROR_KEY);
        assert_eq!(
            sink.pushed[0].severity(),
            crate::ui::notifications::Severity::Error
        );

        let errors = diagnostics.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::DialogError);
        assert!(errors[0].message.contains("portal unavailable"));
    }

    #[test]
    fn conversion_failure_keeps_previous_selection() {
        let diagnostics = DiagnosticsHandle::default();
        let mut state = State::new(
            Arc::new(FakeDialog::default()),
            Arc::new(FailingResolver),
            diagnostics.clone(),
        );
        let mut sink = RecordingSink::default();

        let _ = state.update(Message::PickImage, &mut sink);
        let _ = state.update(
            Message::DialogClosed(Ok(Some(PathBuf::from("/tmp/x.png")))),
            &mut sink,
        );

        assert!(!state.is_busy());
        assert_eq!(state.preview(), Preview::Placeholder);
        assert_eq!(sink.pushed.len(), 1);
        assert_eq!(sink.pushed[0].message_key(), CONVERT_ERROR_KEY);
        assert_eq!(
            diagnostics.errors()[0].error_type,
            ErrorType::ConversionError
        );
    }

    #[test]
    fn relative_path_is_reported_as_conversion_failure() {
        let (mut state, diagnostics) = picker(Arc::new(FakeDialog::default()));
        let mut sink = RecordingSink::default();

        let _ = state.update(
            Message::DialogClosed(Ok(Some(PathBuf::from("relative/photo.png")))),
            &mut sink,
        );

        assert_eq!(state.preview(), Preview::Placeholder);
        assert_eq!(sink.pushed.len(), 1);
        assert_eq!(diagnostics.errors().len(), 1);
    }

    #[tokio::test]
    async fn undecodable_file_keeps_previous_selection() {
        let dir = tempdir().expect("failed to create temp dir");
        let good = write_png(&dir, "good.png", 2, 2);
        let bad = dir.path().join("notes.png");
        std::fs::write(&bad, b"plain text, not pixels").expect("failed to write file");
        let dialog = FakeDialog::answering(vec![Ok(Some(good.clone())), Ok(Some(bad))]);
        let (mut state, diagnostics) = picker(dialog);
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;
        settle(&mut state, Message::PickImage, &mut sink).await;

        assert!(!state.is_busy());
        assert_eq!(shown_url(&state), Some(url_for(&good)));
        assert_eq!(sink.pushed.len(), 1);
        assert_eq!(sink.pushed[0].message_key(), LOAD_ERROR_KEY);

        let errors = diagnostics.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::LoadError);
        assert!(errors[0].message.contains("notes.png"));
    }

    #[tokio::test]
    async fn vanished_file_reports_load_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("gone.jpg");
        let (mut state, diagnostics) = picker(FakeDialog::answering(vec![Ok(Some(missing))]));
        let mut sink = RecordingSink::default();

        settle(&mut state, Message::PickImage, &mut sink).await;

        assert!(!state.is_busy());
        assert_eq!(state.preview(), Preview::Placeholder);
        assert_eq!(sink.pushed.len(), 1);
        assert_eq!(sink.pushed[0].message_key(), LOAD_ERROR_KEY);
        assert_eq!(diagnostics.errors()[0].error_type, ErrorType::LoadError);
    }

    #[tokio::test]
    async fn preview_input_zooms_pans_and_resets() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_png(&dir, "zoom.png", 300, 300);
        let (mut state, _) = picker(FakeDialog::answering(vec![Ok(Some(path))]));
        let mut sink = RecordingSink::default();
        settle(&mut state, Message::PickImage, &mut sink).await;

        for message in [
            preview::Message::Zoom {
                factor: 1.5,
                anchor: Point::new(150.0, 150.0),
            },
            preview::Message::DragStarted(Point::new(0.0, 0.0)),
            preview::Message::DragMoved(Point::new(10.0, 20.0)),
            preview::Message::DragEnded,
        ] {
            let _ = state.update(Message::Preview(message), &mut sink);
        }

        let viewport = *state.selection().expect("image should be selected").viewport();
        assert!((viewport.scale() - 1.5).abs() < 1e-4);
        assert_eq!(viewport.offset(), iced::Vector::new(10.0, 20.0));

        let _ = state.update(Message::Preview(preview::Message::Reset), &mut sink);
        assert!(state
            .selection()
            .expect("image should be selected")
            .viewport()
            .is_fitted());
    }

    #[test]
    fn preview_input_without_selection_is_ignored() {
        let (mut state, _) = picker(Arc::new(FakeDialog::default()));
        let mut sink = RecordingSink::default();

        let _ = state.update(Message::Preview(preview::Message::Reset), &mut sink);

        assert_eq!(state.preview(), Preview::Placeholder);
        assert!(sink.pushed.is_empty());
    }
}
