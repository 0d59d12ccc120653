use crate::ui::counter::CharCounter;
use iced::widget::button::Status;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

/// Text field, character counter and the optional action button
pub struct InputRow<'a, Message> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub on_input: fn(String) -> Message,
    pub on_submit: Message,
    pub counter: CharCounter,
    /// `Some((label, message))` when the action button should be shown
    pub action: Option<(&'a str, Message)>,
}

impl<'a, Message: Clone + 'a> InputRow<'a, Message> {
    pub fn view(self) -> Element<'a, Message> {
        let input = text_input(self.placeholder, self.value)
            .on_input(self.on_input)
            .on_submit(self.on_submit)
            .size(16)
            .padding(10)
            .width(Length::Fill)
            .style(|theme: &Theme, status| {
                let base = text_input::default(theme, status);
                text_input::Style {
                    border: Border {
                        color: Color::from_rgb(0.8, 0.8, 0.8),
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..base
                }
            });

        let mut input_line = row![input].spacing(8).align_y(Alignment::Center);

        if let Some((label, message)) = self.action {
            input_line = input_line.push(
                button(text(label).size(14))
                    .on_press(message)
                    .padding([10, 16])
                    .style(|_theme, status| {
                        let background = match status {
                            Status::Hovered | Status::Pressed => Color::from_rgb(0.0, 0.42, 0.85),
                            _ => Color::from_rgb(0.0, 0.5, 1.0),
                        };
                        button::Style {
                            background: Some(Background::Color(background)),
                            text_color: Color::WHITE,
                            border: Border {
                                radius: 4.0.into(),
                                ..Border::default()
                            },
                            ..button::Style::default()
                        }
                    }),
            );
        }

        column![
            input_line,
            container(self.counter.view(self.value))
                .width(Length::Fill)
                .align_x(Alignment::End),
        ]
        .spacing(4)
        .into()
    }
}
