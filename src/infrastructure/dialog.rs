// SPDX-License-Identifier: MPL-2.0
//! Native file dialog adapter built on `rfd`.

use crate::application::port::{DialogError, DialogOutcome, FileDialog, OpenRequest};
use futures_util::future::{BoxFuture, FutureExt};
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// [`FileDialog`] backed by the platform's native dialog through
/// `rfd::AsyncFileDialog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFileDialog;

impl NativeFileDialog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileDialog for NativeFileDialog {
    fn open(&self, request: OpenRequest) -> BoxFuture<'static, DialogOutcome> {
        if request.multiple {
            return futures_util::future::ready(Err(DialogError::Unsupported(
                "multiple selection".to_string(),
            )))
            .boxed();
        }

        let mut dialog = rfd::AsyncFileDialog::new();
        for filter in &request.filters {
            dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
        }

        // rfd panics when no dialog backend can be reached; surface that as an error
        AssertUnwindSafe(dialog.pick_file())
            .catch_unwind()
            .map(|result| match result {
                Ok(handle) => Ok(handle.map(|h| h.path().to_path_buf())),
                Err(payload) => Err(DialogError::Backend(panic_message(payload.as_ref()))),
            })
            .boxed()
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "native dialog panicked".to_string()
    }
}
