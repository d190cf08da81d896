// Message area helpers

use volume_discount_core::{ProcessResult, StatusLevel};

/// Message level for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

impl From<StatusLevel> for MessageLevel {
    fn from(level: StatusLevel) -> Self {
        match level {
            StatusLevel::Info => MessageLevel::Info,
            StatusLevel::Warning => MessageLevel::Warning,
            StatusLevel::Error => MessageLevel::Error,
        }
    }
}

/// Get CSS class for message level
pub fn get_message_class(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => "message-text",
        MessageLevel::Warning => "message-text warning",
        MessageLevel::Error => "message-text error",
    }
}

/// Text and CSS class for the message area; empty before the first save
pub fn notice_view(notice: Option<&ProcessResult>) -> (String, &'static str) {
    match notice {
        Some(result) => (
            result.message(),
            get_message_class(result.level.into()),
        ),
        None => (String::new(), get_message_class(MessageLevel::Info)),
    }
}
