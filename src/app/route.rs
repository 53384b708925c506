// SPDX-License-Identifier: MPL-2.0
//! Nested views that can fill the layout outlet.

/// Views the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    ImagePicker,
    About,
}

impl Route {
    /// Every route, in menu order.
    pub const ALL: [Route; 2] = [Route::ImagePicker, Route::About];

    /// i18n key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Route::ImagePicker => "nav-image-picker",
            Route::About => "nav-about",
        }
    }

    /// Stable identifier used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Route::ImagePicker => "image-picker",
            Route::About => "about",
        }
    }
}
