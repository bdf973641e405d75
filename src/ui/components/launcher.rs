use super::SCREEN_MARGIN;

/// Nút tròn nổi ở góc dưới bên phải, hiện khi khung chat đang đóng.
pub fn render(ctx: &egui::Context) -> bool {
    let mut clicked = false;
    egui::Area::new(egui::Id::new("floating_chat_launcher"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            egui::vec2(-SCREEN_MARGIN, -SCREEN_MARGIN),
        )
        .show(ctx, |ui| {
            let button = egui::Button::new(egui::RichText::new("💬 Chat").size(18.0))
                .min_size(egui::vec2(96.0, 48.0));
            clicked = ui.add(button).on_hover_text("Open chat").clicked();
        });
    clicked
}
