// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.
//!
//! A toast is a small card with a kind icon, the message and a close
//! button. The widget keeps no lifecycle state: the close button only emits
//! [`Message::Dismiss`] for the manager to handle.

use super::manager::{Manager, Message};
use super::notification::{Content, Kind, NotificationEntry};
use crate::domain::notification::Position;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::{button, container, svg, text, Column, Container, Row, Stack, Svg};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast rendering entry points.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(entry: &NotificationEntry) -> Element<'_, Message> {
        let kind = entry.kind();
        let glyph_color = close_glyph_color(kind);

        let dismiss_button = button(
            icons::sized(icons::close(), sizing::ICON_SM)
                .style(move |_theme: &Theme, _status| svg::Style {
                    color: Some(glyph_color),
                }),
        )
        .on_press(Message::Dismiss(entry.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(icon) = Self::kind_icon(kind) {
            content = content.push(
                Container::new(icons::sized(icon, sizing::ICON_MD)).padding(spacing::XXS),
            );
        }
        let content = content
            .push(
                Container::new(Self::message(entry))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, kind))
            .into()
    }

    /// Renders every active toast, one stacked column per position.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let view = manager.view();
        if view.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let regions: Vec<Element<'_, Message>> = view
            .into_iter()
            .map(|group| {
                let (horizontal, vertical) = placement(group.position());
                let column =
                    Column::with_children(group.entries().iter().copied().map(Self::view))
                        .spacing(spacing::XS)
                        .align_x(horizontal);

                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(horizontal)
                    .align_y(vertical)
                    .padding(spacing::MD)
                    .into()
            })
            .collect();

        Stack::with_children(regions)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Returns the icon for `kind`; custom toasts have none.
    fn kind_icon(kind: Kind) -> Option<Svg<'static>> {
        match kind {
            Kind::Success => Some(icons::check_circle()),
            Kind::Info => Some(icons::info_circle()),
            Kind::Warning => Some(icons::warning()),
            Kind::Error => Some(icons::close_circle()),
            Kind::Custom => None,
        }
    }

    /// Message body: raw for custom toasts, wrapped in a text container otherwise.
    fn message(entry: &NotificationEntry) -> Element<'_, Message> {
        let body: Element<'_, Message> = match entry.message() {
            Content::Text(message) => text(message.as_str()).size(typography::BODY).into(),
            Content::Fragment(build) => build(),
        };

        if entry.kind().wraps_content() {
            Container::new(body).width(Length::Fill).into()
        } else {
            body
        }
    }
}

/// Maps a position key to its screen alignment.
///
/// Unknown keys are placed top-right.
pub fn placement(position: &Position) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal, Vertical};

    match position.as_str() {
        Position::TOP_LEFT => (Horizontal::Left, Vertical::Top),
        Position::TOP_CENTER => (Horizontal::Center, Vertical::Top),
        Position::BOTTOM_LEFT => (Horizontal::Left, Vertical::Bottom),
        Position::BOTTOM_CENTER => (Horizontal::Center, Vertical::Bottom),
        Position::BOTTOM_RIGHT => (Horizontal::Right, Vertical::Bottom),
        _ => (Horizontal::Right, Vertical::Top),
    }
}

/// Close glyph: dark on the light custom card, light on colored cards.
fn close_glyph_color(kind: Kind) -> Color {
    match kind {
        Kind::Custom => palette::BLACK,
        _ => palette::WHITE,
    }
}

/// Style function for the toast container.
fn toast_container_style(_theme: &Theme, kind: Kind) -> container::Style {
    let (background, text_color, border_color) = match kind {
        Kind::Custom => (palette::WHITE, palette::GRAY_900, palette::GRAY_400),
        _ => (kind.color(), palette::WHITE, kind.color()),
    };

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Hovered => overlay(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => overlay(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
