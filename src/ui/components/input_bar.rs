const SEND_BUTTON_WIDTH: f32 = 64.0;

pub fn input_id() -> egui::Id {
    egui::Id::new("floating_chat_input")
}

/// Ô nhập tin nhắn và nút Send.
///
/// Returns the text to submit when Send is clicked or Enter is pressed. The
/// buffer is left untouched; the caller clears it once the engine accepts.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    pending: bool,
    request_focus: bool,
) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let can_send = !pending && !input_text.trim().is_empty();
        let response = ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(input_text)
                .id(input_id())
                .hint_text("Type a message...")
                .desired_width((ui.available_width() - SEND_BUTTON_WIDTH).max(0.0)),
        );
        if request_focus {
            response.request_focus();
        }

        if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    if send && !input_text.trim().is_empty() {
        return Some(input_text.clone());
    }

    None
}
