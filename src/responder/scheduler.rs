use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::common::{ChatEvent, ReplyTicket};

/// One-shot deferred delivery of a reply ticket.
pub trait Scheduler {
    /// Arrange for `ticket` to come back after `ticket.due_after`.
    fn schedule(&mut self, ticket: ReplyTicket);
}

/// Chạy hẹn giờ trên runtime tokio, gửi ticket về UI qua channel khi tới hạn.
pub struct TokioScheduler {
    runtime: Handle,
    event_sender: mpsc::Sender<ChatEvent>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle, event_sender: mpsc::Sender<ChatEvent>) -> Self {
        Self {
            runtime,
            event_sender,
        }
    }

    /// Builds a scheduler together with the receiver the UI drains.
    pub fn channel(runtime: Handle, capacity: usize) -> (Self, mpsc::Receiver<ChatEvent>) {
        let (event_tx, event_rx) = mpsc::channel(capacity);
        (Self::new(runtime, event_tx), event_rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, ticket: ReplyTicket) {
        let sender = self.event_sender.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(ticket.due_after).await;
            if let Err(err) = sender.send(ChatEvent::ReplyDue(ticket)).await {
                // UI đã đóng, bỏ qua
                log::debug!("Reply for session {:?} not delivered: {err}", ticket.session);
            }
        });
    }
}

/// Scheduler on virtual time. Nothing fires until [`ManualScheduler::advance`].
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct ManualScheduler {
    elapsed: Duration,
    queue: Vec<(Duration, ReplyTicket)>,
}

#[cfg(any(test, feature = "test-support"))]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outstanding(&self) -> usize {
        self.queue.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Moves virtual time forward and returns the tickets that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<ReplyTicket> {
        self.elapsed += by;
        let now = self.elapsed;

        let mut due: Vec<(Duration, ReplyTicket)> = Vec::new();
        self.queue.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Scheduler for ManualScheduler {
    fn schedule(&mut self, ticket: ReplyTicket) {
        self.queue.push((self.elapsed + ticket.due_after, ticket));
    }
}
