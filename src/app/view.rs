// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The layout shell frames the active route and the inspector; toasts are
//! stacked on top.

use super::route::Route;
use super::Message;
use crate::config::LayoutConfig;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::image_picker;
use crate::ui::inspector;
use crate::ui::layout::{self, Regions};
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub layout: &'a LayoutConfig,
    pub image_picker: &'a image_picker::State,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = navbar::view(navbar_context(&ctx)).map(Message::Navbar);
    let aside = navbar::menu(navbar_context(&ctx)).map(Message::Navbar);
    let outlet = view_route(&ctx);
    let inspector = inspector::view(inspector::ViewContext {
        i18n: ctx.i18n,
        selection: ctx.image_picker.selection(),
    });

    let shell = layout::view(
        Regions {
            header,
            aside,
            outlet,
            inspector,
        },
        ctx.layout,
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(shell)
        .push(toasts)
        .into()
}

fn navbar_context<'a>(ctx: &ViewContext<'a>) -> navbar::ViewContext<'a> {
    navbar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.route,
        show_aside: ctx.layout.show_aside(),
        show_inspector: ctx.layout.show_inspector(),
    }
}

fn view_route<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.route {
        Route::ImagePicker => ctx
            .image_picker
            .view(image_picker::ViewContext { i18n: ctx.i18n })
            .map(Message::ImagePicker),
        Route::About => about::view(about::ViewContext { i18n: ctx.i18n }),
    }
}
