use crate::clipboard::ClipboardWriter;
use crate::config::AppConfig;
use crate::history::{CommitGate, HistoryBuffer, Ticket, commit::trigger_available};
use crate::reverse::reverse;
use crate::timer::{self, TimerGuard};
use crate::types::Page;
use crate::ui::counter::CharCounter;
use crate::ui::input::InputRow;
use crate::ui::{history_list, result};
use iced::widget::{column, text};
use iced::{Color, Element, Task};
use std::sync::Arc;
use std::time::Duration;

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
    SavePressed,
    QuietPeriodElapsed(Ticket),
    Result(result::Message),
}

/// Reverses while typing. History is written once typing pauses, or at once
/// when the user asks for it.
pub struct LivePage {
    input: String,
    history: HistoryBuffer,
    gate: CommitGate,
    debounce: Duration,
    debounce_timer: Option<TimerGuard>,
    result: result::ResultPanel,
    counter: CharCounter,
}

impl LivePage {
    pub fn new(config: &AppConfig, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            input: String::new(),
            history: HistoryBuffer::new(config.history_capacity),
            gate: CommitGate::new(config.min_commit_len),
            debounce: config.debounce(),
            debounce_timer: None,
            result: result::ResultPanel::new(
                clipboard,
                config.fade_delay(Page::Live),
                config.copy_feedback(),
            ),
            counter: CharCounter::new(config.counter_max, config.counter_warning),
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

    #[cfg(test)]
    pub fn pending_commit(&self) -> Option<Ticket> {
        self.gate.pending_ticket()
    }

    pub fn button_visible(&self) -> bool {
        trigger_available(&self.input, self.gate.min_len())
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                self.on_input()
            }
            Message::Submit if self.button_visible() => {
                self.commit_now();
                Action::None
            }
            Message::Submit => Action::None,
            Message::SavePressed => {
                self.commit_now();
                Action::None
            }
            Message::QuietPeriodElapsed(ticket) => {
                self.gate.on_quiet_period(ticket, &mut self.history);
                if !self.gate.is_pending() {
                    self.debounce_timer = None;
                }
                Action::None
            }
            Message::Result(message) => match self.result.update(message) {
                result::Action::Run(task) => Action::Run(task.map(Message::Result)),
                result::Action::Alert(notice) => Action::Alert(notice),
                result::Action::None => Action::None,
            },
        }
    }

    fn on_input(&mut self) -> Action {
        let Some(ticket) = self.gate.on_input(&self.input) else {
            self.debounce_timer = None;
            self.result.hide();
            return Action::None;
        };

        let fade = self.result.show(reverse(&self.input)).map(Message::Result);

        // Replacing the guard aborts the superseded timer
        let (quiet_period, guard) =
            timer::cancellable_after(self.debounce, Message::QuietPeriodElapsed(ticket));
        self.debounce_timer = Some(guard);

        Action::Run(Task::batch([fade, quiet_period]))
    }

    fn commit_now(&mut self) {
        self.gate.commit_now(&self.input, &mut self.history);
        if !self.gate.is_pending() {
            self.debounce_timer = None;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = InputRow {
            value: &self.input,
            placeholder: "Start typing...",
            on_input: Message::InputChanged,
            on_submit: Message::Submit,
            counter: self.counter,
            action: self
                .button_visible()
                .then_some(("Save", Message::SavePressed)),
        };

        column![
            text("Text is reversed as you type; history updates when you pause")
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

    fn page() -> LivePage {
        LivePage::new(&AppConfig::default(), Arc::new(MemoryClipboard::new()))
    }

    fn type_text(page: &mut LivePage, value: &str) -> Option<Ticket> {
        page.update(Message::InputChanged(value.to_string()));
        page.pending_commit()
    }

    fn pause(page: &mut LivePage, ticket: Ticket) {
        page.update(Message::QuietPeriodElapsed(ticket));
    }

    fn pairs(page: &LivePage) -> Vec<(String, String)> {
        page.history()
            .entries()
            .map(|e| (e.original.clone(), e.reversed.clone()))
            .collect()
    }

    #[test]
    fn test_typing_shows_result_without_history() {
        let mut page = page();
        type_text(&mut page, "hello");

        assert!(page.result().is_visible());
        assert!(page.history().is_empty());
        assert!(page.pending_commit().is_some());
    }

    #[test]
    fn test_pause_commits_once() {
        let mut page = page();
        let ticket = type_text(&mut page, "hello").unwrap();
        pause(&mut page, ticket);

        assert_eq!(pairs(&page), vec![("hello".to_string(), "olleh".to_string())]);
        assert!(page.pending_commit().is_none());
    }

    #[test]
    fn test_keystrokes_before_pause_commit_latest_only() {
        let mut page = page();
        let early = type_text(&mut page, "hello").unwrap();
        let late = type_text(&mut page, "hello world").unwrap();

        pause(&mut page, early);
        assert!(page.history().is_empty());

        pause(&mut page, late);
        assert_eq!(
            pairs(&page),
            vec![("hello world".to_string(), "dlrow olleh".to_string())]
        );
    }

    #[test]
    fn test_same_text_twice_commits_once() {
        let mut page = page();

        let ticket = type_text(&mut page, "hello").unwrap();
        pause(&mut page, ticket);
        let ticket = type_text(&mut page, "hello").unwrap();
        pause(&mut page, ticket);

        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn test_clearing_input_hides_result_and_cancels() {
        let mut page = page();
        let ticket = type_text(&mut page, "hello").unwrap();

        assert_eq!(type_text(&mut page, ""), None);
        assert!(!page.result().is_visible());

        pause(&mut page, ticket);
        assert!(page.history().is_empty());
    }

    #[test]
    fn test_manual_commit_short_input() {
        let mut page = page();
        type_text(&mut page, "abc");

        page.update(Message::SavePressed);
        page.update(Message::Submit);
        assert!(page.history().is_empty());
    }

    #[test]
    fn test_manual_commit_is_immediate_and_cancels_pending() {
        let mut page = page();
        let ticket = type_text(&mut page, "hello").unwrap();

        page.update(Message::Submit);
        assert_eq!(page.history().len(), 1);
        assert!(page.pending_commit().is_none());

        pause(&mut page, ticket);
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn test_manual_commit_twice_records_once() {
        let mut page = page();
        type_text(&mut page, "hello");

        page.update(Message::SavePressed);
        page.update(Message::SavePressed);
        assert_eq!(page.history().len(), 1);
    }

    #[test]
    fn test_history_capped_after_many_pauses() {
        let mut page = page();

        for i in 0..11 {
            let ticket = type_text(&mut page, &format!("entry {}", i)).unwrap();
            pause(&mut page, ticket);
        }

        let kept = pairs(&page);
        assert_eq!(kept.len(), 10);
        assert_eq!(kept[0].0, "entry 10");
        assert_eq!(kept[9].0, "entry 1");
    }

    #[test]
    fn test_late_fade_from_older_keystroke_is_ignored() {
        let mut page = page();
        type_text(&mut page, "ab");
        type_text(&mut page, "abcd");

        page.update(Message::Result(result::Message::FadeIn(2, "dcba".to_string())));
        page.update(Message::Result(result::Message::FadeIn(1, "ba".to_string())));

        assert_eq!(page.result().text(), "dcba");
    }

    #[tokio::test]
    async fn test_copy_sends_reversed_text_to_clipboard() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let mut page = LivePage::new(&AppConfig::default(), clipboard.clone());
        type_text(&mut page, "hello");
        page.update(Message::Result(result::Message::FadeIn(1, "olleh".to_string())));

        page.result().copy_job().await.unwrap();

        assert_eq!(clipboard.writes(), vec!["olleh"]);
        assert!(page.history().is_empty());
    }

    #[tokio::test]
    async fn test_refused_copy_raises_alert() {
        let mut page = LivePage::new(&AppConfig::default(), Arc::new(MemoryClipboard::refusing()));
        type_text(&mut page, "hello");
        page.update(Message::Result(result::Message::FadeIn(1, "olleh".to_string())));

        let outcome = page.result().copy_job().await;
        let action = page.update(Message::Result(result::Message::CopyFinished(outcome)));

        assert!(matches!(action, Action::Alert(_)));
        assert!(page.history().is_empty());
        assert_eq!(page.result().text(), "olleh");
    }
}
