// SPDX-License-Identifier: MPL-2.0
//! Inspector panel with details about the previewed image.
//!
//! The panel is read-only and emits no messages. It lists the file name,
//! the pixel dimensions and the current zoom level of the picker's
//! selection, or a hint when nothing is selected yet.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_picker::SelectedImage;
use iced::widget::{scrollable, Column, Text};
use iced::{Element, Length};

/// Contextual data needed to render the inspector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selection: Option<&'a SelectedImage>,
}

/// Label key and formatted value for each row.
#[must_use]
pub fn rows(selection: &SelectedImage) -> Vec<(&'static str, String)> {
    let name = selection
        .url()
        .local_path()
        .file_name()
        .map_or_else(|| "?".to_string(), |n| n.to_string_lossy().into_owned());
    let image = selection.image();

    vec![
        ("inspector-file", name),
        (
            "inspector-size",
            format!("{} x {} px", image.width, image.height),
        ),
        ("inspector-zoom", format_zoom(selection.viewport().scale())),
    ]
}

/// Scale as a whole percentage.
#[must_use]
pub fn format_zoom(scale: f32) -> String {
    format!("{:.0}%", scale * 100.0)
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("inspector-title")).size(typography::BODY_LG));

    match ctx.selection {
        Some(selection) => {
            for (key, value) in rows(selection) {
                // stacked, the panel is too narrow for label and value side by side
                content = content.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                        .push(Text::new(value).size(typography::BODY)),
                );
            }
        }
        None => {
            content =
                content.push(Text::new(ctx.i18n.tr("inspector-empty")).size(typography::CAPTION));
        }
    }

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AssetUrl;
    use crate::media::ImageData;

    fn selection(width: u32, height: u32) -> SelectedImage {
        let pixels = vec![0; (width * height * 4) as usize];
        SelectedImage::new(
            AssetUrl::new("app://localhost/tmp/cat.png", "/tmp/cat.png"),
            ImageData::from_rgba(width, height, pixels),
        )
    }

    #[test]
    fn rows_describe_fitted_selection() {
        // 600 px wide into the 300 px frame fits at 50%
        let rows = rows(&selection(600, 200));

        assert_eq!(
            rows,
            vec![
                ("inspector-file", "cat.png".to_string()),
                ("inspector-size", "600 x 200 px".to_string()),
                ("inspector-zoom", "50%".to_string()),
            ]
        );
    }

    #[test]
    fn view_renders_with_and_without_selection() {
        let i18n = I18n::default();
        let selected = selection(10, 10);

        let _empty: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            selection: None,
        });
        let _filled: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            selection: Some(&selected),
        });
    }

    #[test]
    fn zoom_is_rounded_percentage() {
        assert_eq!(format_zoom(1.0), "100%");
        assert_eq!(format_zoom(0.0833), "8%");
        assert_eq!(format_zoom(2.0), "200%");
    }
}
