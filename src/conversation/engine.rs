use crate::common::{Message, MessageId, ReplyTicket, Sender, SessionId};
use crate::responder::{Clock, RandomSource, Scheduler, SystemClock};

use super::catalog::{DelayWindow, ReplyCatalog};

/// Why a submission was dropped. Neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Blank,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Accepted {
        message: MessageId,
        ticket: ReplyTicket,
    },
    Ignored(IgnoreReason),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

/// Trạng thái cuộc trò chuyện: danh sách tin nhắn và câu trả lời đang chờ.
#[derive(Debug, Clone)]
pub struct ConversationState {
    messages: Vec<Message>,
    pending: Option<ReplyTicket>,
    session: SessionId,
    next_id: u64,
    next_seq: u64,
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            pending: None,
            session: SessionId(0),
            next_id: 1,
            next_seq: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> Option<ReplyTicket> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    fn push(&mut self, sender: Sender, content: String, clock: &impl Clock) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            content,
            sender,
            timestamp: clock.now(),
        });
        id
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the conversation and the collaborators that drive simulated replies.
pub struct ConversationEngine<R, S, C = SystemClock> {
    state: ConversationState,
    catalog: ReplyCatalog,
    delay: DelayWindow,
    random: R,
    scheduler: S,
    clock: C,
}

impl<R, S> ConversationEngine<R, S, SystemClock>
where
    R: RandomSource,
    S: Scheduler,
{
    pub fn new(catalog: ReplyCatalog, delay: DelayWindow, random: R, scheduler: S) -> Self {
        Self::with_clock(catalog, delay, random, scheduler, SystemClock)
    }
}

impl<R, S, C> ConversationEngine<R, S, C>
where
    R: RandomSource,
    S: Scheduler,
    C: Clock,
{
    pub fn with_clock(
        catalog: ReplyCatalog,
        delay: DelayWindow,
        random: R,
        scheduler: S,
        clock: C,
    ) -> Self {
        Self {
            state: ConversationState::new(),
            catalog,
            delay,
            random,
            scheduler,
            clock,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        self.state.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn catalog(&self) -> &ReplyCatalog {
        &self.catalog
    }

    pub fn delay_window(&self) -> DelayWindow {
        self.delay
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Appends the user's text and schedules one assistant reply.
    ///
    /// Blank text, or any text while a reply is outstanding, is ignored.
    pub fn submit(&mut self, text: &str) -> Submission {
        if text.trim().is_empty() {
            log::debug!("Ignoring blank submission");
            return Submission::Ignored(IgnoreReason::Blank);
        }
        if self.state.is_pending() {
            log::debug!("Ignoring submission while a reply is pending");
            return Submission::Ignored(IgnoreReason::Pending);
        }

        let message = self.state.push(Sender::User, text.to_string(), &self.clock);
        let seq = self.state.next_seq;
        self.state.next_seq += 1;
        let ticket = ReplyTicket {
            session: self.state.session,
            seq,
            due_after: self.delay.draw(&mut self.random),
        };
        self.state.pending = Some(ticket);
        self.scheduler.schedule(ticket);

        log::info!(
            "Message {message} submitted; reply due in {}ms",
            ticket.due_after.as_millis()
        );
        Submission::Accepted { message, ticket }
    }

    /// Lands the reply for `ticket` if it is the one still pending.
    pub fn deliver(&mut self, ticket: ReplyTicket) -> Option<MessageId> {
        if self.state.pending != Some(ticket) {
            log::debug!(
                "Dropping stale reply from session {:?} (current {:?})",
                ticket.session,
                self.state.session
            );
            return None;
        }

        let reply = self.catalog.pick(&mut self.random).to_string();
        let id = self.state.push(Sender::Assistant, reply, &self.clock);
        self.state.pending = None;
        log::info!("Assistant reply {id} delivered");
        Some(id)
    }

    /// Empties the conversation and abandons any reply still in flight.
    pub fn reset(&mut self) {
        let dropped = self.state.messages.len();
        self.state.messages = Vec::new();
        self.state.pending = None;
        self.state.session = self.state.session.next();
        log::info!("Conversation reset ({dropped} messages cleared)");
    }
}
