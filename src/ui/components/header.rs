pub const SUBTITLE: &str = "Ask any question for our AI to answer";

#[derive(Default)]
pub struct HeaderActions {
    pub close: bool,
    pub new_chat: bool,
    pub clear: bool,
}

pub fn render(ui: &mut egui::Ui, title: &str, pending: bool) -> HeaderActions {
    let mut actions = HeaderActions::default();

    ui.horizontal(|ui| {
        ui.heading(title);
        // Chấm xanh: trợ lý đang "online"
        ui.colored_label(egui::Color32::GREEN, "●");
        let status = if pending { "typing..." } else { "Online" };
        ui.label(egui::RichText::new(status).weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                actions.close = true;
            }
        });
    });
    ui.label(egui::RichText::new(SUBTITLE).weak());

    ui.horizontal(|ui| {
        if ui.button("New Chat").clicked() {
            actions.new_chat = true;
        }
        if ui.button("Clear").clicked() {
            actions.clear = true;
        }
    });

    actions
}
