use crate::history::{HistoryBuffer, HistoryEntry};
use crate::ui::{IconName, icon};
use iced::widget::container::Style;
use iced::widget::{column, container, row, scrollable, text};
use iced::{Alignment, Background, Border, Color, Element, Length};

const MUTED: Color = Color::from_rgb(0.6, 0.6, 0.6);

/// The history section. Hidden until the first entry is recorded.
pub fn view<'a, Message: 'a>(history: &'a HistoryBuffer) -> Element<'a, Message> {
    if history.is_empty() {
        return column![].into();
    }

    let rows = history
        .entries()
        .fold(column![].spacing(4), |rows, entry| rows.push(history_row(entry)));

    column![
        text(format!("History ({}/{})", history.len(), history.capacity())).size(14),
        scrollable(rows).height(Length::Fill),
    ]
    .spacing(8)
    .into()
}

fn history_row<'a, Message: 'a>(entry: &'a HistoryEntry) -> Element<'a, Message> {
    container(
        row![
            text(&entry.original).size(14).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::default()
            }),
            icon(IconName::ArrowRight).size(14).color(MUTED),
            text(&entry.reversed).size(14).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::default()
            }),
            text(&entry.timestamp).size(12).color(MUTED),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([6, 10])
    .style(|_theme| Style {
        background: Some(Background::Color(Color::from_rgb(0.98, 0.98, 0.98))),
        border: Border {
            color: Color::from_rgb(0.92, 0.92, 0.92),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Style::default()
    })
    .into()
}
