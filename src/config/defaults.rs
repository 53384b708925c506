// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Header height, aside and inspector widths
//! - **Image Picker**: Preview frame size and accepted extensions
//! - **Preview**: Zoom range, wheel sensitivity and double-click timing
//! - **Notifications**: Toast lifetimes and tick rate
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Whether the aside region is shown by default.
pub const DEFAULT_SHOW_ASIDE: bool = true;

/// Default aside width in logical pixels.
pub const DEFAULT_ASIDE_WIDTH: f32 = 150.0;

/// Minimum aside width.
pub const MIN_ASIDE_WIDTH: f32 = 120.0;

/// Maximum aside width.
pub const MAX_ASIDE_WIDTH: f32 = 200.0;

/// Whether the inspector region (right of the content) is shown by default.
pub const DEFAULT_SHOW_INSPECTOR: bool = false;

/// Default inspector width in logical pixels.
pub const DEFAULT_INSPECTOR_WIDTH: f32 = 150.0;

/// Minimum inspector width.
pub const MIN_INSPECTOR_WIDTH: f32 = 80.0;

/// Maximum inspector width.
pub const MAX_INSPECTOR_WIDTH: f32 = 200.0;

/// Default header height in logical pixels.
pub const DEFAULT_HEADER_HEIGHT: f32 = 48.0;

/// Minimum header height (fits one button row).
pub const MIN_HEADER_HEIGHT: f32 = 32.0;

/// Maximum header height.
pub const MAX_HEADER_HEIGHT: f32 = 96.0;

// ==========================================================================
// Image Picker Defaults
// ==========================================================================

/// Width and height of the square preview frame.
pub const PREVIEW_FRAME_SIZE: f32 = 300.0;

/// Label of the dialog filter.
pub const IMAGE_FILTER_NAME: &str = "Image";

/// Extensions the picker accepts, in dialog order.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Smallest zoom factor reachable with the wheel (unless the fit is smaller).
pub const PREVIEW_MIN_SCALE: f32 = 0.5;

/// Largest zoom factor reachable with the wheel (unless the fit is larger).
pub const PREVIEW_MAX_SCALE: f32 = 2.0;

/// Exponential zoom rate per scrolled pixel.
pub const PREVIEW_ZOOM_SENSITIVITY: f32 = 0.002;

/// Pixels per scrolled line, for wheels that report lines.
pub const PREVIEW_LINE_SCROLL_PIXELS: f32 = 50.0;

/// Two presses closer than this count as a double click (milliseconds).
pub const PREVIEW_DOUBLE_CLICK_MS: u64 = 400;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of success and info toasts (seconds).
pub const NOTIFICATION_SHORT_SECS: u64 = 3;

/// Lifetime of warning toasts (seconds).
pub const NOTIFICATION_WARNING_SECS: u64 = 5;

/// Lifetime of error toasts (seconds).
pub const NOTIFICATION_ERROR_SECS: u64 = 6;

/// Maximum number of toasts shown at once.
pub const MAX_VISIBLE_NOTIFICATIONS: usize = 3;

/// Interval of the auto-dismiss tick (milliseconds).
pub const NOTIFICATION_TICK_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

const _: () = {
    assert!(MIN_ASIDE_WIDTH <= DEFAULT_ASIDE_WIDTH && DEFAULT_ASIDE_WIDTH <= MAX_ASIDE_WIDTH);
    assert!(
        MIN_INSPECTOR_WIDTH <= DEFAULT_INSPECTOR_WIDTH
            && DEFAULT_INSPECTOR_WIDTH <= MAX_INSPECTOR_WIDTH
    );
    assert!(0.0 < PREVIEW_MIN_SCALE && PREVIEW_MIN_SCALE < PREVIEW_MAX_SCALE);
    assert!(
        MIN_HEADER_HEIGHT <= DEFAULT_HEADER_HEIGHT && DEFAULT_HEADER_HEIGHT <= MAX_HEADER_HEIGHT
    );
    assert!(NOTIFICATION_SHORT_SECS < NOTIFICATION_WARNING_SECS);
    assert!(
        MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
            && DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY
    );
};
