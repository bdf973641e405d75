use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Định danh tin nhắn, tăng dần theo thứ tự tạo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Khoảng thời gian giữa hai lần reset cuộc trò chuyện.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl SessionId {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn is_user(self) -> bool {
        matches!(self, Sender::User)
    }
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Handle of the one outstanding assistant reply.
///
/// Tickets carry the session they were issued in, so a reply that fires after
/// a reset can be told apart from the current one and dropped. `seq` is unique
/// per submission, so two tickets never compare equal even with the same delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    pub session: SessionId,
    pub seq: u64,
    pub due_after: Duration,
}
