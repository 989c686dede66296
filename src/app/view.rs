// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewEnv};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub gallery: &'a gallery::State,
}

/// Renders the gallery screen on the themed background.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;
    let content = ctx
        .gallery
        .view(ViewEnv {
            i18n: ctx.i18n,
            colors,
        })
        .map(Message::Gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::screen(colors))
        .into()
}
