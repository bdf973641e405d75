use super::widget::FloatingChat;

/// Trang demo: nội dung giả lập phía sau, khung chat nổi phía trên.
pub struct HostApp {
    chat: FloatingChat,
}

impl HostApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chat: FloatingChat) -> Self {
        Self { chat }
    }
}

impl eframe::App for HostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Floating Chat");
            ui.separator();
            ui.label("This page stands in for the embedding application.");
            ui.label("Open the chat with the button in the bottom-right corner; Escape closes it.");
        });

        self.chat.show(ctx);
    }
}
