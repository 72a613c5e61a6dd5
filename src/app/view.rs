// SPDX-License-Identifier: MPL-2.0
//! Demo controls with the toast overlay stacked on top.

use super::{App, Message};
use crate::domain::notification::Position;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Kind, Toast};
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

const POSITIONS: [&str; 6] = [
    Position::TOP_LEFT,
    Position::TOP_CENTER,
    Position::TOP_RIGHT,
    Position::BOTTOM_LEFT,
    Position::BOTTOM_CENTER,
    Position::BOTTOM_RIGHT,
];

pub fn view(app: &App) -> Element<'_, Message> {
    let kinds = Kind::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, kind| row.push(button(text(kind.as_str())).on_press(Message::Show(kind))),
    );

    let positions = POSITIONS.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, key| {
            let selected = app.position.as_str() == key;
            let style = if selected {
                button::primary
            } else {
                button::secondary
            };
            row.push(
                button(text(key))
                    .style(style)
                    .on_press(Message::SelectPosition(Position::from(key))),
            )
        },
    );

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(text("sticky")).on_press(Message::ShowSticky))
        .push(button(text("fragment")).on_press(Message::ShowFragment))
        .push(button(text("clear all")).style(button::danger).on_press(Message::ClearAll));

    let last_closed = match app.last_closed.get() {
        Some((id, reason)) => format!("Last closed: {id} ({reason:?})"),
        None => "Last closed: none".to_string(),
    };
    let status = Column::new()
        .spacing(spacing::XXS)
        .push(text(format!("Active: {}", app.notifications.len())))
        .push(text(last_closed))
        .push(text(format!(
            "Diagnostic events: {} ({} problems)",
            app.diagnostics.len(),
            app.diagnostics.problems().count()
        )));

    let controls = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text("Notifications").size(typography::TITLE_SM))
        .push(kinds)
        .push(positions)
        .push(extras)
        .push(status);

    let base = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(&app.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
