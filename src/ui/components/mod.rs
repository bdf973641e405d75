pub mod chat_area;
pub mod header;
pub mod input_bar;
pub mod launcher;

/// Khoảng cách từ mép màn hình tới nút nổi và khung chat.
pub const SCREEN_MARGIN: f32 = 16.0;
