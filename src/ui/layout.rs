// SPDX-License-Identifier: MPL-2.0
//! Structural shell of the main window.
//!
//! ```text
//! +--------------------------------+
//! | header                         |
//! +-------+----------------+-------+
//! | aside | outlet         | insp. |
//! |       |                |       |
//! +-------+----------------+-------+
//! ```
//!
//! The layout holds no state. The caller builds the regions and the outlet
//! receives whichever nested view is active. The aside and the inspector are
//! only laid out when the configuration shows them.

use crate::config::LayoutConfig;
use crate::ui::design_tokens::{opacity, spacing};
use iced::widget::{container, rule, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Content of each layout region.
pub struct Regions<'a, Message> {
    pub header: Element<'a, Message>,
    pub aside: Element<'a, Message>,
    /// Slot for the active nested view.
    pub outlet: Element<'a, Message>,
    /// Right-hand panel with details about the current image.
    pub inspector: Element<'a, Message>,
}

/// Resolved region geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub show_aside: bool,
    pub aside_width: f32,
    pub header_height: f32,
    pub show_inspector: bool,
    pub inspector_width: f32,
}

impl From<&LayoutConfig> for Frame {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            show_aside: config.show_aside(),
            aside_width: config.aside_width(),
            header_height: config.header_height(),
            show_inspector: config.show_inspector(),
            inspector_width: config.inspector_width(),
        }
    }
}

pub fn view<'a, Message: 'a>(
    regions: Regions<'a, Message>,
    config: &LayoutConfig,
) -> Element<'a, Message> {
    let frame = Frame::from(config);

    let header = Container::new(regions.header)
        .width(Length::Fill)
        .height(Length::Fixed(frame.header_height))
        .padding([0.0, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .style(surface_style);

    let outlet = Container::new(regions.outlet)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut body = Row::new().height(Length::Fill);
    if frame.show_aside {
        body = body
            .push(
                Container::new(regions.aside)
                    .width(Length::Fixed(frame.aside_width))
                    .height(Length::Fill)
                    .padding(spacing::XS)
                    .style(surface_style),
            )
            .push(rule::vertical(1));
    }
    body = body.push(outlet);
    if frame.show_inspector {
        body = body.push(rule::vertical(1)).push(
            Container::new(regions.inspector)
                .width(Length::Fixed(frame.inspector_width))
                .height(Length::Fill)
                .padding(spacing::XS)
                .style(surface_style),
        );
    }

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(rule::horizontal(1))
        .push(body)
        .into()
}

fn surface_style(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;
    container::Style {
        background: Some(
            Color {
                a: opacity::SURFACE,
                ..weak.color
            }
            .into(),
        ),
        text_color: Some(weak.text),
        ..Default::default()
    }
}
