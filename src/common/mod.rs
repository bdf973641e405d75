pub mod events;
pub mod types;

pub use events::ChatEvent;
pub use types::{Message, MessageId, ReplyTicket, Sender, SessionId};
