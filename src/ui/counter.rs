use crate::reverse::char_len;
use iced::widget::text;
use iced::{Color, Element};

const NORMAL_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.55);
const WARNING_COLOR: Color = Color::from_rgb(0.86, 0.3, 0.2);

/// Character counter shown under the input. The limit is only displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub max: usize,
    pub warning: usize,
}

impl Default for CharCounter {
    fn default() -> Self {
        Self {
            max: 90,
            warning: 80,
        }
    }
}

impl CharCounter {
    pub fn new(max: usize, warning: usize) -> Self {
        Self { max, warning }
    }

    pub fn label(&self, input: &str) -> String {
        format!("{}/{}", char_len(input), self.max)
    }

    pub fn is_warning(&self, input: &str) -> bool {
        char_len(input) >= self.warning
    }

    pub fn view<'a, Message: 'a>(&self, input: &str) -> Element<'a, Message> {
        let color = if self.is_warning(input) {
            WARNING_COLOR
        } else {
            NORMAL_COLOR
        };

        text(self.label(input)).size(12).color(color).into()
    }
}
