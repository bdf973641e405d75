use chrono::{DateTime, Local, Utc};
use crate::common::{Message, Sender};

const BUBBLE_MAX_WIDTH: f32 = 260.0;

pub fn render(ui: &mut egui::Ui, messages: &[Message], pending: bool, max_height: f32) {
    egui::ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() && !pending {
                empty_state(ui);
            }

            for message in messages {
                message_bubble(ui, message);
                ui.add_space(4.0);
            }

            if pending {
                typing_indicator(ui);
            }
        });
}

fn empty_state(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading("Start a conversation");
        ui.label(
            egui::RichText::new("Ask me anything! I'm here to help you with your questions.").weak(),
        );
    });
}

fn message_bubble(ui: &mut egui::Ui, message: &Message) {
    let is_user = message.sender.is_user();
    let layout = if is_user {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };
    let fill = if is_user {
        ui.visuals().selection.bg_fill
    } else {
        ui.visuals().faint_bg_color
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
            ui.set_max_width(BUBBLE_MAX_WIDTH);
            ui.vertical(|ui| {
                ui.label(message.content.as_str());
                ui.label(
                    egui::RichText::new(format!(
                        "{} · {}",
                        sender_name(message.sender),
                        format_time(message.timestamp)
                    ))
                    .small()
                    .weak(),
                );
            });
        });
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(egui::RichText::new("Assistant is typing...").weak());
    });
}

fn sender_name(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "You",
        Sender::Assistant => "Assistant",
    }
}

/// Giờ địa phương dạng HH:MM.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}
