use crate::clipboard::{ClipboardError, ClipboardWriter, copy_text};
use crate::timer;
use crate::ui::{IconName, icon};
use iced::widget::button::Status;
use iced::widget::container::Style;
use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Task};
use std::sync::Arc;
use std::time::Duration;

const ACCENT: Color = Color::from_rgb(0.0, 0.5, 1.0);
const COPIED: Color = Color::from_rgb(0.18, 0.65, 0.35);

#[derive(Debug, Clone)]
pub enum Message {
    /// Fade generation and the text to reveal
    FadeIn(u64, String),
    Copy,
    CopyFinished(Result<(), ClipboardError>),
    CopyFeedbackExpired(u64),
}

pub enum Action {
    Run(Task<Message>),
    /// Blocking notice for the user
    Alert(String),
    None,
}

/// The reversed text, its fade-in and the copy button
pub struct ResultPanel {
    visible: bool,
    text: String,
    faded_in: bool,
    fade_generation: u64,
    copied: bool,
    feedback_generation: u64,
    fade_delay: Duration,
    feedback_delay: Duration,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl ResultPanel {
    pub fn new(
        clipboard: Arc<dyn ClipboardWriter>,
        fade_delay: Duration,
        feedback_delay: Duration,
    ) -> Self {
        Self {
            visible: false,
            text: String::new(),
            faded_in: false,
            fade_generation: 0,
            copied: false,
            feedback_generation: 0,
            fade_delay,
            feedback_delay,
            clipboard,
        }
    }

    /// Fade out, then show `reversed` once the fade delay has passed.
    pub fn show(&mut self, reversed: String) -> Task<Message> {
        self.visible = true;
        self.faded_in = false;
        self.fade_generation += 1;
        timer::after(
            self.fade_delay,
            Message::FadeIn(self.fade_generation, reversed),
        )
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Write the displayed text to the clipboard
    pub fn copy_job(&self) -> impl Future<Output = Result<(), ClipboardError>> + Send + 'static {
        copy_text(Arc::clone(&self.clipboard), self.text.clone())
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn is_faded_in(&self) -> bool {
        self.faded_in
    }

    #[cfg(test)]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::FadeIn(generation, reversed) => {
                // Only the latest fade may reveal its text
                if generation == self.fade_generation {
                    self.text = reversed;
                    self.faded_in = true;
                }
                Action::None
            }
            Message::Copy => Action::Run(Task::perform(self.copy_job(), Message::CopyFinished)),
            Message::CopyFinished(Ok(())) => {
                self.copied = true;
                self.feedback_generation += 1;

                Action::Run(timer::after(
                    self.feedback_delay,
                    Message::CopyFeedbackExpired(self.feedback_generation),
                ))
            }
            Message::CopyFinished(Err(_)) => Action::Alert("Could not copy the text".to_string()),
            Message::CopyFeedbackExpired(generation) => {
                // A newer copy restarted the acknowledgement
                if generation == self.feedback_generation {
                    self.copied = false;
                }
                Action::None
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if !self.visible {
            return column![].into();
        }

        let alpha = if self.faded_in { 1.0 } else { 0.0 };
        let reversed = text(&self.text)
            .size(22)
            .color(Color::from_rgba(0.1, 0.1, 0.1, alpha));

        let copied = self.copied;
        let copy_button = button(
            row![
                icon(if copied { IconName::Check } else { IconName::Copy })
                    .size(14)
                    .color(Color::WHITE),
                text(if copied { "Copied!" } else { "Copy" }).size(13),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Copy)
        .padding([6, 12])
        .style(move |_theme, status| {
            let color = if copied { COPIED } else { ACCENT };
            let background = match status {
                Status::Hovered | Status::Pressed => Color { a: 0.85, ..color },
                _ => color,
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
        });

        container(
            column![
                text("Reversed").size(12).color(Color::from_rgb(0.5, 0.5, 0.5)),
                reversed,
                space().height(8),
                copy_button,
            ]
            .spacing(6),
        )
        .width(Length::Fill)
        .padding(16)
        .style(|_theme| Style {
            background: Some(Background::Color(Color::from_rgb(0.96, 0.97, 0.99))),
            border: Border {
                color: Color::from_rgb(0.88, 0.9, 0.94),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Style::default()
        })
        .into()
    }
}
