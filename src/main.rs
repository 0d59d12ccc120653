mod clipboard;
mod config;
mod history;
mod icons;
mod reverse;
mod timer;
mod types;
mod ui;

use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::config::AppConfig;
use crate::types::{Message, Page};
use crate::ui::{alert, basic, live};
use iced::widget::button::Status;
use iced::widget::{button, column, container, row, text};
use iced::{Background, Border, Color, Element, Length, Size, Task};
use std::sync::Arc;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = config::config_path();
    let config = tokio::runtime::Runtime::new()?.block_on(AppConfig::load_or_default(&path));
    log::info!("Starting with {:?}", config);

    iced::application(
        move || ReversoApp::new(&config, Arc::new(SystemClipboard::new())),
        ReversoApp::update,
        ReversoApp::view,
    )
    .title("Reverso")
    .window_size(Size::new(640.0, 720.0))
    .run()?;

    Ok(())
}

struct ReversoApp {
    page: Page,
    basic: basic::BasicPage,
    live: live::LivePage,
    alert: Option<String>,
}

impl ReversoApp {
    fn new(config: &AppConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            page: config.start_page,
            basic: basic::BasicPage::new(config, Arc::clone(&clipboard)),
            live: live::LivePage::new(config, clipboard),
            alert: None,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PageSelected(page) => {
                self.page = page;
                Task::none()
            }
            Message::Basic(message) => match self.basic.update(message) {
                basic::Action::Run(task) => task.map(Message::Basic),
                basic::Action::Alert(notice) => self.show_alert(notice),
                basic::Action::None => Task::none(),
            },
            Message::Live(message) => match self.live.update(message) {
                live::Action::Run(task) => task.map(Message::Live),
                live::Action::Alert(notice) => self.show_alert(notice),
                live::Action::None => Task::none(),
            },
            Message::DismissAlert => {
                self.alert = None;
                Task::none()
            }
        }
    }

    fn show_alert(&mut self, notice: String) -> Task<Message> {
        self.alert = Some(notice);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let tabs = Page::ALL
            .iter()
            .fold(row![].spacing(4), |tabs, page| {
                tabs.push(page_tab(*page, *page == self.page))
            });

        let body = match self.page {
            Page::Basic => self.basic.view().map(Message::Basic),
            Page::Live => self.live.view().map(Message::Live),
        };

        let content = container(
            column![text("Reverso").size(26), tabs, body]
                .spacing(20)
                .max_width(560),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(24);

        match &self.alert {
            Some(notice) => alert::overlay(content, notice, Message::DismissAlert),
            None => content.into(),
        }
    }
}

fn page_tab<'a>(page: Page, is_active: bool) -> Element<'a, Message> {
    button(text(page.to_string()).size(14))
        .on_press(Message::PageSelected(page))
        .padding([6, 14])
        .style(move |_theme, status| {
            let base = button::Style {
                border: Border {
                    radius: 4.0.into(),
                    ..Border::default()
                },
                ..button::Style::default()
            };
            if is_active {
                button::Style {
                    background: Some(Background::Color(Color::from_rgb(0.0, 0.5, 1.0))),
                    text_color: Color::WHITE,
                    ..base
                }
            } else {
                match status {
                    Status::Hovered => button::Style {
                        background: Some(Background::Color(Color::from_rgb(0.9, 0.9, 0.9))),
                        ..base
                    },
                    _ => button::Style {
                        background: Some(Background::Color(Color::from_rgb(0.95, 0.95, 0.95))),
                        ..base
                    },
                }
            }
        })
        .into()
}
