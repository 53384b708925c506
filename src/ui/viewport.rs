// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan geometry of the preview frame.
//!
//! All positions are in frame coordinates (origin at the frame's top-left
//! corner). The image is drawn centered in the frame, scaled by `scale` and
//! shifted by `offset`.

use crate::config::{
    PREVIEW_LINE_SCROLL_PIXELS, PREVIEW_MAX_SCALE, PREVIEW_MIN_SCALE, PREVIEW_ZOOM_SENSITIVITY,
};
use iced::mouse::ScrollDelta;
use iced::{Point, Rectangle, Size, Vector};

/// Scale that fits `image` entirely inside `frame`.
///
/// Degenerate sizes fall back to `1.0`.
#[must_use]
pub fn fit_scale(image: Size, frame: Size) -> f32 {
    if image.width <= 0.0 || image.height <= 0.0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return 1.0;
    }

    let scale = (frame.width / image.width).min(frame.height / image.height);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// Multiplicative zoom for one wheel event. Scrolling up zooms in.
#[must_use]
pub fn zoom_factor(delta: ScrollDelta) -> f32 {
    let pixels = match delta {
        ScrollDelta::Lines { y, .. } => y * PREVIEW_LINE_SCROLL_PIXELS,
        ScrollDelta::Pixels { y, .. } => y,
    };
    (pixels * PREVIEW_ZOOM_SENSITIVITY).exp()
}

/// Grab-and-drag bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Cursor position when the drag started.
    pub origin: Point,
    /// Viewport offset when the drag started.
    pub start_offset: Vector,
}

/// Scale and offset of an image shown inside a fixed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    image: Size,
    frame: Size,
    fit: f32,
    scale: f32,
    offset: Vector,
    drag: Option<DragState>,
}

impl Viewport {
    /// Starts fitted and centered.
    #[must_use]
    pub fn new(image: Size, frame: Size) -> Self {
        let fit = fit_scale(image, frame);
        Self {
            image,
            frame,
            fit,
            scale: fit,
            offset: Vector::new(0.0, 0.0),
            drag: None,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the view is in its initial fitted state.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.scale == self.fit && self.offset == Vector::new(0.0, 0.0)
    }

    /// Scale bounds. The fitted scale is always reachable.
    #[must_use]
    pub fn scale_range(&self) -> (f32, f32) {
        (
            PREVIEW_MIN_SCALE.min(self.fit),
            PREVIEW_MAX_SCALE.max(self.fit),
        )
    }

    /// Where the image is drawn inside the frame.
    #[must_use]
    pub fn image_rect(&self) -> Rectangle {
        let width = self.image.width * self.scale;
        let height = self.image.height * self.scale;
        Rectangle {
            x: (self.frame.width - width) / 2.0 + self.offset.x,
            y: (self.frame.height - height) / 2.0 + self.offset.y,
            width,
            height,
        }
    }

    /// Zooms by `factor`, keeping the image point under `anchor` in place.
    pub fn zoom_at(&mut self, factor: f32, anchor: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let (min, max) = self.scale_range();
        let new_scale = (self.scale * factor).clamp(min, max);
        let rect = self.image_rect();
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }

        let rel_x = (anchor.x - rect.x) / rect.width;
        let rel_y = (anchor.y - rect.y) / rect.height;
        let new_width = self.image.width * new_scale;
        let new_height = self.image.height * new_scale;
        let new_x = anchor.x - rel_x * new_width;
        let new_y = anchor.y - rel_y * new_height;

        self.offset = Vector::new(
            new_x - (self.frame.width - new_width) / 2.0,
            new_y - (self.frame.height - new_height) / 2.0,
        );
        self.scale = new_scale;
    }

    pub fn begin_drag(&mut self, position: Point) {
        self.drag = Some(DragState {
            origin: position,
            start_offset: self.offset,
        });
    }

    /// Moves the image with the cursor. No-op outside a drag.
    pub fn drag_to(&mut self, position: Point) {
        if let Some(drag) = self.drag {
            self.offset = Vector::new(
                drag.start_offset.x + position.x - drag.origin.x,
                drag.start_offset.y + position.y - drag.origin.y,
            );
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Back to the fitted, centered view.
    pub fn reset(&mut self) {
        self.scale = self.fit;
        self.offset = Vector::new(0.0, 0.0);
        self.drag = None;
    }

    /// Image pixel under `position`, if the position is over the image.
    #[must_use]
    pub fn pixel_at(&self, position: Point) -> Option<(u32, u32)> {
        let rect = self.image_rect();
        if !rect.contains(position) || rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }

        let x = (position.x - rect.x) / rect.width * self.image.width;
        let y = (position.y - rect.y) / rect.height * self.image.height;
        let max_x = (self.image.width - 1.0).max(0.0);
        let max_y = (self.image.height - 1.0).max(0.0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pixel = (
            x.floor().clamp(0.0, max_x) as u32,
            y.floor().clamp(0.0, max_y) as u32,
        );
        Some(pixel)
    }
}
