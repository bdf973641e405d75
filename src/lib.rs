pub mod common;
pub mod config;
pub mod conversation;
pub mod responder;
pub mod ui;

pub use conversation::{ConversationEngine, Submission};
pub use ui::FloatingChat;
