use crate::ui::{basic, live};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two pages of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Reverse on button press or Enter
    Basic,
    /// Reverse while typing, history after a quiet period
    Live,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Basic, Page::Live];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Basic => write!(f, "Basic"),
            Page::Live => write!(f, "Live"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    PageSelected(Page),
    Basic(basic::Message),
    Live(live::Message),
    DismissAlert,
}
