use crate::clipboard::ClipboardWriter;
use crate::config::AppConfig;
use crate::history::{HistoryBuffer, commit_triggered, commit::trigger_available};
use crate::types::Page;
use crate::ui::counter::CharCounter;
use crate::ui::input::InputRow;
use crate::ui::{history_list, result};
use iced::widget::{column, text};
use iced::{Color, Element, Task};
use std::sync::Arc;

// Action is returned from update so the app can run side effects.
pub enum Action {
    Run(Task<Message>),
    Alert(String),
    None,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Enter in the text field
    Submit,
    ReversePressed,
    Result(result::Message),
}

/// Reverses on explicit request and records every reversal.
pub struct BasicPage {
    input: String,
    history: HistoryBuffer,
    result: result::ResultPanel,
    counter: CharCounter,
    min_len: usize,
}

impl BasicPage {
    pub fn new(config: &AppConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            input: String::new(),
            history: HistoryBuffer::new(config.history_capacity),
            result: result::ResultPanel::new(
                clipboard,
                config.fade_delay(Page::Basic),
                config.copy_feedback(),
            ),
            counter: CharCounter::new(config.counter_max, config.counter_warning),
            min_len: config.min_commit_len,
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[cfg(test)]
    pub fn result(&self) -> &result::ResultPanel {
        &self.result
    }

    pub fn button_visible(&self) -> bool {
        trigger_available(&self.input, self.min_len)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Action::None
            }
            Message::Submit if self.button_visible() => self.reverse_input(),
            Message::Submit => Action::None,
            Message::ReversePressed => self.reverse_input(),
            Message::Result(message) => match self.result.update(message) {
                result::Action::Run(task) => Action::Run(task.map(Message::Result)),
                result::Action::Alert(notice) => Action::Alert(notice),
                result::Action::None => Action::None,
            },
        }
    }

    fn reverse_input(&mut self) -> Action {
        match commit_triggered(&self.input, &mut self.history) {
            Some(reversed) => Action::Run(self.result.show(reversed).map(Message::Result)),
            None => Action::None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = InputRow {
            value: &self.input,
            placeholder: "Type something to reverse...",
            on_input: Message::InputChanged,
            on_submit: Message::Submit,
            counter: self.counter,
            action: self
                .button_visible()
                .then_some(("Reverse", Message::ReversePressed)),
        };

        column![
            text("Press Reverse or Enter to flip your text")
                .size(13)
                .color(Color::from_rgb(0.45, 0.45, 0.45)),
            input.view(),
            self.result.view().map(Message::Result),
            history_list::view(&self.history),
        ]
        .spacing(16)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;

    fn page() -> BasicPage {
        BasicPage::new(&AppConfig::default(), Arc::new(MemoryClipboard::new()))
    }

    fn type_text(page: &mut BasicPage, value: &str) {
        page.update(Message::InputChanged(value.to_string()));
    }

    #[test]
    fn test_typing_does_not_touch_history() {
        let mut page = page();
        type_text(&mut page, "hello");

        assert!(page.history().is_empty());
        assert!(!page.result().is_visible());
    }

    #[test]
    fn test_button_visibility() {
        let mut page = page();

        type_text(&mut page, "abc");
        assert!(!page.button_visible());

        type_text(&mut page, "abcd");
        assert!(page.button_visible());
    }

    #[test]
    fn test_enter_reverses_and_records() {
        let mut page = page();
        type_text(&mut page, "hello");

        assert!(matches!(page.update(Message::Submit), Action::Run(_)));
        assert!(page.result().is_visible());

        let latest = page.history().latest().unwrap();
        assert_eq!(latest.original, "hello");
        assert_eq!(latest.reversed, "olleh");
    }

    #[test]
    fn test_enter_ignored_for_short_input() {
        let mut page = page();
        type_text(&mut page, "abc");

        assert!(matches!(page.update(Message::Submit), Action::None));
        assert!(page.history().is_empty());
    }

    #[test]
    fn test_blank_input_records_nothing() {
        let mut page = page();
        type_text(&mut page, "      ");

        page.update(Message::Submit);
        page.update(Message::ReversePressed);
        assert!(page.history().is_empty());
    }

    #[test]
    fn test_trimmed_input_is_recorded() {
        let mut page = page();
        type_text(&mut page, "  ab  ");

        page.update(Message::ReversePressed);
        assert_eq!(page.history().latest().unwrap().original, "ab");
    }

    #[test]
    fn test_every_press_is_recorded() {
        let mut page = page();
        type_text(&mut page, "hello");

        for _ in 0..12 {
            page.update(Message::ReversePressed);
        }

        assert_eq!(page.history().len(), 10);
    }

    #[test]
    fn test_result_text_after_fade() {
        let mut page = page();
        type_text(&mut page, "hello");
        page.update(Message::Submit);

        page.update(Message::Result(result::Message::FadeIn(1, "olleh".to_string())));
        assert_eq!(page.result().text(), "olleh");
    }
}
