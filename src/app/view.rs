// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery application.
//!
//! The gallery fills the window; the notification overlay is stacked on top.

use super::{Message, Preset};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Overlay, Position, Variant};
use crate::ui::theming::ColorMode;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub overlay: &'a Overlay,
    pub color_mode: ColorMode,
    /// Active notification count as last reported by the store subscription.
    pub active: usize,
    /// Clock the toast animations are rendered at.
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = Container::new(gallery(ctx.active, ctx.color_mode))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(gallery)
        .push(ctx.overlay.view(ctx.color_mode, ctx.now).map(Message::Notification))
        .into()
}

fn gallery<'a>(active: usize, color_mode: ColorMode) -> Element<'a, Message> {
    let heading = Text::new("Toast gallery").size(typography::TITLE_MD);
    let counter = Text::new(format!("{active} active")).size(typography::CAPTION);

    let variants = Variant::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, variant| {
            row.push(gallery_button(variant.as_str(), Message::Show(Preset::Variant(variant))))
        });

    let (top, bottom): (Vec<Position>, Vec<Position>) =
        Position::ALL.into_iter().partition(|position| position.is_top());
    let position_row = |positions: Vec<Position>| {
        positions
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, position| {
                row.push(gallery_button(
                    position.as_str(),
                    Message::Show(Preset::Position(position)),
                ))
            })
    };

    let theme_label = match color_mode {
        ColorMode::Light => "dark mode",
        ColorMode::Dark => "light mode",
    };
    let extras = Row::new()
        .spacing(spacing::XS)
        .push(gallery_button("sticky", Message::Show(Preset::Sticky)))
        .push(gallery_button("with action", Message::Show(Preset::WithAction)))
        .push(gallery_button("titled", Message::Show(Preset::Titled)))
        .push(gallery_button("dismiss all", Message::DismissAll))
        .push(gallery_button(theme_label, Message::ToggleTheme));

    Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(counter)
        .push(section("Variants", variants))
        .push(section(
            "Positions",
            Column::new()
                .spacing(spacing::XS)
                .push(position_row(top))
                .push(position_row(bottom)),
        ))
        .push(section("More", extras))
        .into()
}

fn section<'a>(label: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(content)
        .into()
}

fn gallery_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::SM])
        .into()
}
