use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::common::ChatEvent;
use crate::config::AppConfig;
use crate::conversation::ConversationEngine;
use crate::responder::{RandomSource, Scheduler, StdRandom, TokioScheduler};

use super::components::{SCREEN_MARGIN, chat_area, header, input_bar, launcher};
use super::visibility::Visibility;

const PANEL_SIZE: egui::Vec2 = egui::vec2(380.0, 520.0);
const INPUT_ROW_HEIGHT: f32 = 40.0;
const REPLY_POLL_INTERVAL: Duration = Duration::from_millis(50);
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Floating chat widget: launcher button while closed, anchored panel while open.
///
/// Mount it in any egui frame with [`FloatingChat::show`]. The widget reads the
/// engine's state every frame and never keeps its own copy of the conversation.
pub struct FloatingChat<R = StdRandom, S = TokioScheduler> {
    title: String,
    visibility: Visibility,
    engine: ConversationEngine<R, S>,
    input_text: String,
    event_receiver: mpsc::Receiver<ChatEvent>,
}

impl FloatingChat {
    /// Wires the engine to a tokio-backed reply timer on `runtime`.
    pub fn with_tokio(config: &AppConfig, runtime: Handle) -> Self {
        let (scheduler, event_receiver) = TokioScheduler::channel(runtime, EVENT_CHANNEL_CAPACITY);
        let engine = ConversationEngine::new(
            config.catalog(),
            config.delay_window(),
            StdRandom::from_seed_option(config.seed),
            scheduler,
        );
        Self::new(&config.title, engine, event_receiver, config.start_open)
    }
}

impl<R, S> FloatingChat<R, S>
where
    R: RandomSource,
    S: Scheduler,
{
    pub fn new(
        title: &str,
        engine: ConversationEngine<R, S>,
        event_receiver: mpsc::Receiver<ChatEvent>,
        open: bool,
    ) -> Self {
        Self {
            title: title.to_string(),
            visibility: Visibility::new(open),
            engine,
            input_text: String::new(),
            event_receiver,
        }
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut Visibility {
        &mut self.visibility
    }

    pub fn engine(&self) -> &ConversationEngine<R, S> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ConversationEngine<R, S> {
        &mut self.engine
    }

    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ChatEvent::ReplyDue(ticket) => {
                    self.engine.deliver(ticket);
                }
            }
        }
    }

    fn submit_input(&mut self, text: &str) {
        if self.engine.submit(text).is_accepted() {
            self.input_text.clear();
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_chat_events();

        // Vẫn cần repaint khi đóng để nhận câu trả lời đang chờ
        if self.engine.is_pending() {
            ctx.request_repaint_after(REPLY_POLL_INTERVAL);
        }

        if !self.visibility.is_open() {
            if launcher::render(ctx) {
                self.visibility.show();
            }
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.visibility.hide();
            return;
        }

        let request_focus = self.visibility.take_focus_request();
        let pending = self.engine.is_pending();
        let mut actions = header::HeaderActions::default();
        let mut submitted = None;

        egui::Window::new("floating_chat")
            .id(egui::Id::new("floating_chat_panel"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .fixed_size(PANEL_SIZE)
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-SCREEN_MARGIN, -SCREEN_MARGIN),
            )
            .show(ctx, |ui| {
                actions = header::render(ui, &self.title, pending);
                ui.separator();

                let list_height = (ui.available_height() - INPUT_ROW_HEIGHT).max(0.0);
                chat_area::render(ui, self.engine.messages(), pending, list_height);

                ui.separator();
                submitted =
                    input_bar::render(ui, &mut self.input_text, pending, request_focus);
            });

        self.apply_header_actions(&actions);
        if let Some(text) = submitted {
            self.submit_input(&text);
        }
    }

    fn apply_header_actions(&mut self, actions: &header::HeaderActions) {
        if actions.close {
            self.visibility.hide();
        }
        // "New Chat" và "Clear" giống nhau: đều làm rỗng cuộc trò chuyện
        if actions.new_chat || actions.clear {
            self.engine.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::common::{ReplyTicket, Sender};
    use crate::conversation::{DelayWindow, ReplyCatalog};
    use crate::responder::{ManualScheduler, ScriptedRandom};

    type TestChat = FloatingChat<ScriptedRandom, ManualScheduler>;

    fn test_chat(open: bool) -> (TestChat, mpsc::Sender<ChatEvent>) {
        let (event_tx, event_rx) = mpsc::channel(4);
        let engine = ConversationEngine::new(
            ReplyCatalog::default(),
            DelayWindow::default(),
            ScriptedRandom::new(vec![0]),
            ManualScheduler::new(),
        );
        (TestChat::new("Test", engine, event_rx, open), event_tx)
    }

    fn frame(ctx: &egui::Context, chat: &mut TestChat) {
        frame_with(ctx, chat, Vec::new());
    }

    fn frame_with(ctx: &egui::Context, chat: &mut TestChat, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| chat.show(ctx));
    }

    fn key_press(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn due_tickets(chat: &mut TestChat) -> Vec<ReplyTicket> {
        chat.engine_mut()
            .scheduler_mut()
            .advance(Duration::from_secs(2))
    }

    #[test]
    fn renders_closed_and_open() {
        let ctx = egui::Context::default();
        let (mut chat, _events) = test_chat(false);

        frame(&ctx, &mut chat);
        assert!(!chat.visibility().is_open());

        chat.visibility_mut().toggle();
        frame(&ctx, &mut chat);
        assert!(chat.visibility().is_open());
    }

    #[test]
    fn accepted_submission_clears_input() {
        let (mut chat, _events) = test_chat(true);
        chat.input_text = "Hello".to_string();
        chat.submit_input("Hello");

        assert!(chat.input_text.is_empty());
        assert_eq!(chat.engine().messages().len(), 1);
    }

    #[test]
    fn rejected_submission_keeps_input() {
        let (mut chat, _events) = test_chat(true);
        chat.submit_input("first");

        chat.input_text = "second".to_string();
        chat.submit_input("second");
        assert_eq!(chat.input_text, "second");
        assert_eq!(chat.engine().messages().len(), 1);
    }

    #[test]
    fn reply_events_are_delivered_on_next_frame() {
        let ctx = egui::Context::default();
        let (mut chat, events) = test_chat(true);
        chat.submit_input("Hello");

        for ticket in due_tickets(&mut chat) {
            events.try_send(ChatEvent::ReplyDue(ticket)).unwrap();
        }
        frame(&ctx, &mut chat);

        let messages = chat.engine().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert!(!chat.engine().is_pending());
    }

    #[test]
    fn replies_arrive_while_closed() {
        let ctx = egui::Context::default();
        let (mut chat, events) = test_chat(true);
        chat.submit_input("Hello");
        chat.visibility_mut().hide();

        for ticket in due_tickets(&mut chat) {
            events.try_send(ChatEvent::ReplyDue(ticket)).unwrap();
        }
        frame(&ctx, &mut chat);
        assert_eq!(chat.engine().messages().len(), 2);
    }

    #[test]
    fn stale_event_after_reset_is_ignored() {
        let ctx = egui::Context::default();
        let (mut chat, events) = test_chat(true);
        chat.submit_input("Hello");
        chat.engine_mut().reset();

        for ticket in due_tickets(&mut chat) {
            events.try_send(ChatEvent::ReplyDue(ticket)).unwrap();
        }
        frame(&ctx, &mut chat);
        assert!(chat.engine().messages().is_empty());
    }

    #[test]
    fn opening_moves_focus_to_input() {
        let ctx = egui::Context::default();
        let (mut chat, _events) = test_chat(false);

        frame(&ctx, &mut chat);
        assert!(!ctx.memory(|m| m.has_focus(input_bar::input_id())));

        chat.visibility_mut().show();
        frame(&ctx, &mut chat);
        assert!(ctx.memory(|m| m.has_focus(input_bar::input_id())));
    }

    #[test]
    fn enter_submits_and_escape_hides() {
        let ctx = egui::Context::default();
        let (mut chat, _events) = test_chat(true);
        frame(&ctx, &mut chat);

        chat.input_text = "Hi".to_string();
        frame_with(&ctx, &mut chat, vec![key_press(egui::Key::Enter)]);
        assert_eq!(chat.engine().messages().len(), 1);
        assert_eq!(chat.engine().messages()[0].content, "Hi");
        assert!(chat.input_text.is_empty());
        assert!(chat.engine().is_pending());

        frame_with(&ctx, &mut chat, vec![key_press(egui::Key::Escape)]);
        assert!(!chat.visibility().is_open());
    }

    #[test]
    fn enter_on_blank_input_sends_nothing() {
        let ctx = egui::Context::default();
        let (mut chat, _events) = test_chat(true);
        frame(&ctx, &mut chat);

        chat.input_text = "   ".to_string();
        frame_with(&ctx, &mut chat, vec![key_press(egui::Key::Enter)]);
        assert!(chat.engine().messages().is_empty());
        assert!(!chat.engine().is_pending());
        assert!(chat.visibility().is_open());
    }

    #[test]
    fn new_chat_and_clear_both_reset() {
        for actions in [
            header::HeaderActions {
                new_chat: true,
                ..Default::default()
            },
            header::HeaderActions {
                clear: true,
                ..Default::default()
            },
        ] {
            let (mut chat, _events) = test_chat(true);
            chat.submit_input("Hello");
            assert!(chat.engine().is_pending());

            chat.apply_header_actions(&actions);
            assert!(chat.engine().messages().is_empty());
            assert!(!chat.engine().is_pending());
            assert!(chat.visibility().is_open());
        }
    }

    #[test]
    fn close_button_hides_without_clearing() {
        let (mut chat, _events) = test_chat(true);
        chat.submit_input("Hello");

        chat.apply_header_actions(&header::HeaderActions {
            close: true,
            ..Default::default()
        });
        assert!(!chat.visibility().is_open());
        assert_eq!(chat.engine().messages().len(), 1);
    }

    #[test]
    fn frame_without_clicks_keeps_conversation() {
        let ctx = egui::Context::default();
        let (mut chat, _events) = test_chat(true);
        chat.submit_input("Hello");

        frame(&ctx, &mut chat);
        frame(&ctx, &mut chat);
        assert!(chat.visibility().is_open());
        assert_eq!(chat.engine().messages().len(), 1);
    }
}
