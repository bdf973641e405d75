pub mod catalog;
pub mod engine;

pub use catalog::{DelayWindow, ReplyCatalog};
pub use engine::{ConversationEngine, ConversationState, IgnoreReason, Submission};
