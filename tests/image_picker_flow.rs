// SPDX-License-Identifier: MPL-2.0
//! End-to-end picker flows driven through the public API with a scripted
//! dialog and the real notification manager. Every task `update` returns is
//! run to completion and its messages are fed back, like the runtime does.

use esim_workbench::application::port::{
    AssetResolver, DialogError, DialogOutcome, FileDialog, OpenRequest,
};
use esim_workbench::diagnostics::{DiagnosticsHandle, ErrorType};
use esim_workbench::infrastructure::AppAssetResolver;
use esim_workbench::ui::image_picker::{
    Message, Preview, State, DIALOG_ERROR_KEY, LOAD_ERROR_KEY,
};
use esim_workbench::ui::notifications::{Manager, Severity};
use futures_util::future::{BoxFuture, FutureExt};
use futures_util::StreamExt;
use iced::Task;
use image_rs::{Rgba, RgbaImage};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

/// Answers each `open` call with the next scripted outcome.
struct ScriptedDialog {
    outcomes: Mutex<VecDeque<DialogOutcome>>,
    requests: Mutex<Vec<OpenRequest>>,
}

impl ScriptedDialog {
    fn new(outcomes: Vec<DialogOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        })
    }
}

impl FileDialog for ScriptedDialog {
    fn open(&self, request: OpenRequest) -> BoxFuture<'static, DialogOutcome> {
        self.requests.lock().unwrap().push(request);
        let outcome = self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(None));
        async move { outcome }.boxed()
    }
}

fn picker(dialog: Arc<ScriptedDialog>) -> (State, DiagnosticsHandle) {
    let diagnostics = DiagnosticsHandle::default();
    let state = State::new(
        dialog,
        Arc::new(AppAssetResolver::new()),
        diagnostics.clone(),
    );
    (state, diagnostics)
}

fn write_png(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(16, 9, Rgba([20, 160, 90, 255]))
        .save(&path)
        .expect("failed to write temporary png");
    path
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

/// Presses the trigger and runs the resulting tasks until the picker is idle.
async fn pick(state: &mut State, notifications: &mut Manager) {
    let mut pending = VecDeque::from([Message::PickImage]);
    while let Some(message) = pending.pop_front() {
        let task = state.update(message, notifications);
        pending.extend(outputs(task).await);
    }
    assert!(!state.is_busy());
}

fn url_of(state: &State) -> Option<String> {
    match state.preview() {
        Preview::Image(url) => Some(url.to_string()),
        Preview::Placeholder => None,
    }
}

fn expected_url(path: &Path) -> String {
    AppAssetResolver::new()
        .resolve(path)
        .expect("temp paths are absolute")
        .to_string()
}

#[tokio::test]
async fn user_picks_an_image_and_sees_it() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = write_png(&dir, "photo.png");
    let dialog = ScriptedDialog::new(vec![Ok(Some(path.clone()))]);
    let (mut state, diagnostics) = picker(dialog);
    let mut notifications = Manager::new();

    assert_eq!(state.preview(), Preview::Placeholder);
    pick(&mut state, &mut notifications).await;

    assert_eq!(url_of(&state), Some(expected_url(&path)));
    let image = state.selection().expect("image should be selected").image();
    assert_eq!((image.width, image.height), (16, 9));
    assert!(!notifications.has_notifications());
    assert!(diagnostics.errors().is_empty());
}

#[tokio::test]
async fn user_cancels_after_a_previous_pick() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = write_png(&dir, "cat.png");
    let dialog = ScriptedDialog::new(vec![Ok(Some(path.clone())), Ok(None)]);
    let (mut state, _) = picker(dialog);
    let mut notifications = Manager::new();

    pick(&mut state, &mut notifications).await;
    pick(&mut state, &mut notifications).await;

    assert_eq!(url_of(&state), Some(expected_url(&path)));
    assert!(!notifications.has_notifications());
}

#[tokio::test]
async fn dialog_failure_shows_single_error_toast() {
    let dialog = ScriptedDialog::new(vec![Err(DialogError::Backend(
        "xdg-desktop-portal not running".into(),
    ))]);
    let (mut state, diagnostics) = picker(dialog);
    let mut notifications = Manager::new();

    pick(&mut state, &mut notifications).await;

    assert_eq!(state.preview(), Preview::Placeholder);
    assert_eq!(notifications.visible_count(), 1);
    let toast = notifications.visible().next().expect("toast should be visible");
    assert_eq!(toast.severity(), Severity::Error);
    assert_eq!(toast.message_key(), DIALOG_ERROR_KEY);

    let errors = diagnostics.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_type, ErrorType::DialogError);
    assert!(errors[0].message.contains("xdg-desktop-portal not running"));
}

#[tokio::test]
async fn corrupt_file_shows_load_error_and_keeps_image() {
    let dir = tempdir().expect("failed to create temp dir");
    let good = write_png(&dir, "good.png");
    let corrupt = dir.path().join("corrupt.jpg");
    std::fs::write(&corrupt, [0xFF, 0xD8, 0xFF, 0x00, 0x01]).expect("failed to write file");
    let dialog = ScriptedDialog::new(vec![Ok(Some(good.clone())), Ok(Some(corrupt))]);
    let (mut state, diagnostics) = picker(dialog);
    let mut notifications = Manager::new();

    pick(&mut state, &mut notifications).await;
    pick(&mut state, &mut notifications).await;

    assert_eq!(url_of(&state), Some(expected_url(&good)));
    assert_eq!(notifications.visible_count(), 1);
    let toast = notifications.visible().next().expect("toast should be visible");
    assert_eq!(toast.message_key(), LOAD_ERROR_KEY);
    assert_eq!(diagnostics.errors()[0].error_type, ErrorType::LoadError);
}

#[tokio::test]
async fn every_pick_sends_exactly_one_single_image_request() {
    let dialog = ScriptedDialog::new(vec![Ok(None), Ok(None)]);
    let (mut state, _) = picker(dialog.clone());
    let mut notifications = Manager::new();

    pick(&mut state, &mut notifications).await;
    pick(&mut state, &mut notifications).await;

    let requests = dialog.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests.iter() {
        assert!(!request.multiple);
        assert_eq!(request.filters[0].extensions, vec!["png", "jpg", "jpeg"]);
    }
}
