// SPDX-License-Identifier: MPL-2.0
//! Navigation widgets for the layout header and aside.
//!
//! The header shows the window title, one button per route and the two
//! panel toggles. The aside lists the same routes as a vertical menu
//! followed by the available languages. Both emit the same [`Message`], so
//! the parent handles navigation and preferences in a single place.

use crate::app::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, Column, Row, Space, Text},
    Border, Color, Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navigation.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Route,
    pub show_aside: bool,
    pub show_inspector: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    ToggleAside,
    ToggleInspector,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    ToggleAside,
    ToggleInspector,
    LanguageSelected(LanguageIdentifier),
}

/// Turns a navigation message into an event for the parent.
///
/// Selecting the active route or the current language again is a no-op.
#[must_use]
pub fn update(message: Message, active: Route, locale: &LanguageIdentifier) -> Event {
    match message {
        Message::Navigate(route) if route == active => Event::None,
        Message::Navigate(route) => Event::Navigate(route),
        Message::ToggleAside => Event::ToggleAside,
        Message::ToggleInspector => Event::ToggleInspector,
        Message::SelectLanguage(selected) if &selected == locale => Event::None,
        Message::SelectLanguage(selected) => Event::LanguageSelected(selected),
    }
}

/// Display name of `locale`, falling back to its tag when untranslated.
#[must_use]
pub fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        name
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    for route in Route::ALL {
        row = row.push(build_route_button(&ctx, route, Length::Shrink));
    }

    row.push(rule::vertical(1))
        .push(build_item(
            ctx.i18n.tr("nav-toggle-aside"),
            Message::ToggleAside,
            ctx.show_aside,
            Length::Shrink,
        ))
        .push(build_item(
            ctx.i18n.tr("nav-toggle-inspector"),
            Message::ToggleInspector,
            ctx.show_inspector,
            Length::Shrink,
        ))
        .into()
}

/// Render the vertical route menu for the aside.
pub fn menu<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("aside-title")).size(typography::CAPTION);

    let routes = Route::ALL.into_iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Left)
            .push(heading),
        |column, route| column.push(build_route_button(&ctx, route, Length::Fill)),
    );

    let languages = ctx.i18n.available_locales.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Left)
            .push(Text::new(ctx.i18n.tr("aside-language-title")).size(typography::CAPTION)),
        |column, locale| {
            column.push(build_item(
                language_label(ctx.i18n, locale),
                Message::SelectLanguage(locale.clone()),
                ctx.i18n.current_locale() == locale,
                Length::Fill,
            ))
        },
    );

    Column::new()
        .spacing(spacing::MD)
        .push(routes)
        .push(languages)
        .into()
}

fn build_route_button<'a>(
    ctx: &ViewContext<'a>,
    route: Route,
    width: Length,
) -> Element<'a, Message> {
    build_item(
        ctx.i18n.tr(route.label_key()),
        Message::Navigate(route),
        route == ctx.active,
        width,
    )
}

fn build_item<'a>(
    label: String,
    message: Message,
    is_active: bool,
    width: Length,
) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .width(width)
        .style(move |theme: &Theme, status| menu_item_style(theme, status, is_active))
        .into()
}

fn menu_item_style(theme: &Theme, status: button::Status, is_active: bool) -> button::Style {
    let palette_ext = theme.extended_palette();
    let rounded = Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let active_background = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..palette::PRIMARY_500
    };

    match status {
        button::Status::Pressed => button::Style {
            background: Some(palette_ext.primary.strong.color.into()),
            text_color: palette_ext.primary.strong.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette_ext.background.strong.color.into()),
            text_color: palette_ext.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled if is_active => button::Style {
            background: Some(active_background.into()),
            text_color: palette_ext.background.base.text,
            border: rounded,
            ..Default::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette_ext.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> LanguageIdentifier {
        "en-US".parse().expect("valid locale")
    }

    fn context(i18n: &I18n, active: Route) -> ViewContext<'_> {
        ViewContext {
            i18n,
            active,
            show_aside: true,
            show_inspector: false,
        }
    }

    #[test]
    fn header_and_menu_render() {
        let i18n = I18n::default();
        let _header = view(context(&i18n, Route::ImagePicker));
        let _menu = menu(context(&i18n, Route::About));
    }

    #[test]
    fn navigating_elsewhere_emits_event() {
        let event = update(Message::Navigate(Route::About), Route::ImagePicker, &en_us());
        assert_eq!(event, Event::Navigate(Route::About));
    }

    #[test]
    fn navigating_to_active_route_is_ignored() {
        let event = update(Message::Navigate(Route::About), Route::About, &en_us());
        assert_eq!(event, Event::None);
    }

    #[test]
    fn toggles_always_emit_events() {
        let route = Route::ImagePicker;
        assert_eq!(update(Message::ToggleAside, route, &en_us()), Event::ToggleAside);
        assert_eq!(
            update(Message::ToggleInspector, route, &en_us()),
            Event::ToggleInspector
        );
    }

    #[test]
    fn selecting_another_language_emits_event() {
        let zh: LanguageIdentifier = "zh-CN".parse().expect("valid locale");

        let event = update(Message::SelectLanguage(zh.clone()), Route::About, &en_us());
        let same = update(Message::SelectLanguage(en_us()), Route::About, &en_us());

        assert_eq!(event, Event::LanguageSelected(zh));
        assert_eq!(same, Event::None);
    }

    #[test]
    fn language_labels_fall_back_to_tag() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Default::default());
        let klingon: LanguageIdentifier = "tlh".parse().expect("valid locale");

        assert_eq!(language_label(&i18n, &en_us()), "English");
        assert_eq!(language_label(&i18n, &klingon), "tlh");
    }

    #[test]
    fn active_item_is_highlighted() {
        let theme = Theme::Light;
        let active = menu_item_style(&theme, button::Status::Active, true);
        let inactive = menu_item_style(&theme, button::Status::Active, false);

        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
    }
}
