// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a variant-colored accent border, an optional
//! title, an optional action button and a close button when the record is
//! closable. A toast fades and slides in with its presence and back out while
//! exiting; exiting toasts ignore input.

use super::layout;
use super::lifecycle::VisualState;
use super::notification::Notification;
use super::overlay::Message;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::{ColorMode, ColorScheme};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    ///
    /// `presence` is the controller's enter/exit progress, `1.0` meaning
    /// fully on screen.
    pub fn view<'a>(
        notification: &Notification,
        state: VisualState,
        presence: f32,
        mode: ColorMode,
    ) -> Element<'a, Message> {
        let id = notification.id();
        let scheme = ColorScheme::for_mode(mode);
        let accent = scheme.accent(notification.variant());
        let interactive = state == VisualState::Visible;
        let text_color = fade(scheme.text_primary, presence);

        let glyph = Text::new(notification.variant().glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(fade(accent, presence)),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title.to_string())
                    .size(typography::TITLE_SM)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(text_color),
                    }),
            );
        }
        body = body.push(
            Text::new(notification.message().to_string())
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(text_color),
                }),
        );

        if let Some(action) = notification.action() {
            let action_button = button(Text::new(action.label().to_string()).size(typography::BODY_SM))
                .on_press_maybe(interactive.then_some(Message::Action(id)))
                .padding([spacing::XXS, spacing::XS])
                .style(move |_theme: &Theme, status| action_button_style(mode, accent, status));
            body = body.push(action_button);
        }

        // Layout: [glyph] [title/message/action] [close]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(glyph)
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if notification.closable() {
            let close_button = button(Text::new("×").size(typography::BODY))
                .on_press_maybe(interactive.then_some(Message::Close(id)))
                .padding(spacing::XXS)
                .style(move |_theme: &Theme, status| dismiss_button_style(mode, status));
            content = content.push(close_button);
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| toast_container_style(mode, accent, presence));

        Container::new(card)
            .padding(layout::slide_padding(notification.position(), presence))
            .into()
    }
}

/// Scales `color`'s alpha by `presence`.
fn fade(color: Color, presence: f32) -> Color {
    let presence = presence.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
    Color {
        a: color.a * presence,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(mode: ColorMode, accent: Color, presence: f32) -> container::Style {
    let scheme = ColorScheme::for_mode(mode);
    let background = Color {
        a: opacity::SURFACE,
        ..scheme.surface_primary
    };

    container::Style {
        background: Some(iced::Background::Color(fade(background, presence))),
        border: iced::Border {
            color: fade(accent, presence),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if presence >= opacity::OPAQUE {
            shadow::MD
        } else {
            shadow::SM
        },
        text_color: Some(fade(scheme.text_primary, presence)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn dismiss_button_style(mode: ColorMode, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_mode(mode);

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: scheme.text_secondary,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(scheme.control_wash)),
            text_color: scheme.text_primary,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..scheme.text_secondary
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Style function for the action button: outlined in the variant accent.
fn action_button_style(mode: ColorMode, accent: Color, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_mode(mode);
    let outline = iced::Border {
        color: accent,
        width: border::WIDTH_SM,
        radius: radius::SM.into(),
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: accent,
            border: outline,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: accent,
            border: outline,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(accent)),
            text_color: scheme.surface_primary,
            border: outline,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..accent
            },
            border: iced::Border {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..accent
                },
                ..outline
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::notifications::{
        NotificationDefaults, NotificationId, NotificationOptions, Variant,
    };

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(ColorMode::Dark, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn fading_toast_is_translucent() {
        let accent = ColorScheme::light().accent(Variant::Error);
        let shown = toast_container_style(ColorMode::Light, accent, opacity::OPAQUE);
        let fading = toast_container_style(ColorMode::Light, accent, 0.5);

        assert!(fading.border.color.a < shown.border.color.a);
        match (shown.background, fading.background) {
            (Some(iced::Background::Color(a)), Some(iced::Background::Color(b))) => {
                assert!(b.a < a.a);
            }
            other => panic!("expected color backgrounds, got {other:?}"),
        }
    }

    #[test]
    fn absent_toast_is_invisible() {
        let faded = fade(palette::WHITE, opacity::TRANSPARENT);
        assert_eq!(faded.a, 0.0);
        assert_eq!(fade(palette::WHITE, 3.0), palette::WHITE);
    }

    #[test]
    fn surface_follows_color_mode() {
        let light = toast_container_style(ColorMode::Light, palette::INFO_500, opacity::OPAQUE);
        let dark = toast_container_style(ColorMode::Dark, palette::INFO_400, opacity::OPAQUE);

        assert_ne!(light.text_color, dark.text_color);
    }

    #[test]
    fn disabled_dismiss_button_is_dimmed() {
        let active = dismiss_button_style(ColorMode::Dark, button::Status::Active);
        let disabled = dismiss_button_style(ColorMode::Dark, button::Status::Disabled);

        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn view_builds_for_every_variant_and_state() {
        for variant in Variant::ALL {
            let notification = Notification::from_options(
                NotificationId::from_raw(1),
                NotificationOptions::new("hello")
                    .variant(variant)
                    .title("Title")
                    .action("Undo", || {}),
                &NotificationDefaults::default(),
            );
            for (state, presence) in [(VisualState::Visible, 1.0), (VisualState::Exiting, 0.4)] {
                let _element: Element<'_, Message> =
                    Toast::view(&notification, state, presence, ColorMode::Light);
            }
        }
    }
}
