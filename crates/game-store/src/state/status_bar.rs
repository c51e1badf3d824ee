//! Status Bar State

use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation in progress
    Running,
    Success,
    Error,
    Info,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Info => "ℹ️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

/// Status bar state - history of messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 50,
        }
    }
}

impl StatusBarState {
    /// Get the latest message (if any)
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
