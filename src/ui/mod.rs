pub mod app;
pub mod components;
pub mod visibility;
pub mod widget;

pub use app::HostApp;
pub use visibility::Visibility;
pub use widget::FloatingChat;
