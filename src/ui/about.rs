// SPDX-License-Identifier: MPL-2.0
//! About page showing application details and credits.
//!
//! The page is static and emits no messages, so it renders into any
//! message type.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, rule, scrollable, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Credit lines, as i18n keys.
const CREDIT_KEYS: [&str; 4] = [
    "about-credits-iced",
    "about-credits-rfd",
    "about-credits-fluent",
    "about-credits-image",
];

/// Contextual data needed to render the about page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the about page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(build_app_section(&ctx))
        .push(build_credits_section(&ctx));

    scrollable(content).into()
}

fn build_app_section<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let app_name = Text::new(ctx.i18n.tr("about-app-name")).size(typography::TITLE_MD);
    let version = Text::new(
        ctx.i18n
            .tr_with_args("about-version", &[("version", APP_VERSION)]),
    )
    .size(typography::BODY);
    let description = Text::new(ctx.i18n.tr("about-description")).size(typography::BODY);
    let license = Text::new(ctx.i18n.tr("about-license")).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description)
        .push(license);

    build_section(None, content.into())
}

fn build_credits_section<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content = CREDIT_KEYS
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, key| {
            column.push(Text::new(format!("• {}", ctx.i18n.tr(key))).size(typography::BODY))
        });

    build_section(Some(ctx.i18n.tr("about-credits-title")), content.into())
}

fn build_section<'a, Message: 'a>(
    title: Option<String>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut inner = Column::new().spacing(spacing::SM);
    if let Some(title) = title {
        inner = inner
            .push(Text::new(title).size(typography::BODY_LG))
            .push(rule::horizontal(1));
    }
    inner = inner.push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
