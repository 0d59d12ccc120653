use iced::widget::container::Style;
use iced::widget::{button, center, column, container, opaque, stack, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Shadow, Vector};

/// Lay a blocking notice over `base`. Only the dismiss button reacts to input.
pub fn overlay<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    notice: &'a str,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let dialog = container(
        column![
            text(notice).size(15),
            button(text("OK").size(14))
                .on_press(on_dismiss)
                .padding([6, 20]),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(320.0))
    .padding(20)
    .style(|_theme| Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: Color::from_rgb(0.8, 0.8, 0.8),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Style::default()
    });

    let backdrop = center(opaque(dialog)).style(|_theme| Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.4))),
        ..Style::default()
    });

    let base: Element<'a, Message> = base.into();
    stack![base, opaque(backdrop)].into()
}
