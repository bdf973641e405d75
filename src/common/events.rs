use super::types::ReplyTicket;

/// Sự kiện từ bộ hẹn giờ gửi lên UI.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    ReplyDue(ReplyTicket),
}
