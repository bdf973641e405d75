use std::time::Duration;

use crate::responder::RandomSource;

pub const DEFAULT_REPLIES: [&str; 5] = [
    "I'd be happy to help you with that! Could you provide more details about what you're looking for?",
    "That's a great question! Let me break this down for you in a clear and helpful way.",
    "I understand what you're asking. Here's my take on this topic, and I hope it helps clarify things for you.",
    "Thanks for reaching out! I'm here to assist you with whatever you need. Let's dive into this together.",
    "Excellent question! I love helping with topics like this. Here's what I think would be most useful for you to know.",
];

pub const DEFAULT_DELAY_MIN_MS: u64 = 1_200;
pub const DEFAULT_DELAY_MAX_MS: u64 = 2_000;

/// Danh sách câu trả lời có sẵn. Luôn khác rỗng.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyCatalog {
    replies: Vec<String>,
}

impl ReplyCatalog {
    /// Returns `None` when no usable (non-blank) reply is given.
    pub fn new(replies: impl IntoIterator<Item = String>) -> Option<Self> {
        let replies: Vec<String> = replies
            .into_iter()
            .filter(|reply| !reply.trim().is_empty())
            .collect();
        if replies.is_empty() {
            None
        } else {
            Some(Self { replies })
        }
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    pub fn contains(&self, text: &str) -> bool {
        self.replies.iter().any(|reply| reply == text)
    }

    pub fn pick(&self, random: &mut impl RandomSource) -> &str {
        let index = random.below(self.replies.len() as u64) as usize;
        &self.replies[index.min(self.replies.len() - 1)]
    }
}

impl Default for ReplyCatalog {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|reply| reply.to_string()).collect(),
        }
    }
}

/// Half-open window `[min, max)` the reply delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min_ms: u64,
    max_ms: u64,
}

impl DelayWindow {
    pub fn new(min_ms: u64, max_ms: u64) -> Option<Self> {
        (min_ms < max_ms).then_some(Self { min_ms, max_ms })
    }

    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    pub fn contains(&self, delay: Duration) -> bool {
        delay >= self.min() && delay < self.max()
    }

    pub fn draw(&self, random: &mut impl RandomSource) -> Duration {
        let offset = random.below(self.max_ms - self.min_ms);
        Duration::from_millis(self.min_ms + offset)
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_DELAY_MIN_MS,
            max_ms: DEFAULT_DELAY_MAX_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{ScriptedRandom, StdRandom};

    #[test]
    fn catalog_rejects_blank_input() {
        assert!(ReplyCatalog::new(Vec::<String>::new()).is_none());
        assert!(ReplyCatalog::new(vec!["  ".to_string(), String::new()]).is_none());

        let catalog = ReplyCatalog::new(vec![" ".to_string(), "Hi there".to_string()])
            .expect("one usable reply");
        assert_eq!(catalog.replies(), ["Hi there".to_string()]);
    }

    #[test]
    fn default_catalog_has_five_replies() {
        let catalog = ReplyCatalog::default();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.contains(DEFAULT_REPLIES[4]));
    }

    #[test]
    fn pick_follows_random_source() {
        let catalog = ReplyCatalog::default();
        let mut random = ScriptedRandom::new(vec![2, 0]);
        assert_eq!(catalog.pick(&mut random), DEFAULT_REPLIES[2]);
        assert_eq!(catalog.pick(&mut random), DEFAULT_REPLIES[0]);
    }

    #[test]
    fn delay_window_requires_min_below_max() {
        assert!(DelayWindow::new(2_000, 2_000).is_none());
        assert!(DelayWindow::new(2_000, 1_200).is_none());
        assert!(DelayWindow::new(0, 1).is_some());
    }

    #[test]
    fn drawn_delays_stay_inside_window() {
        let window = DelayWindow::default();
        let mut random = StdRandom::seeded(11);
        for _ in 0..1_000 {
            let delay = window.draw(&mut random);
            assert!(window.contains(delay), "{delay:?} outside window");
        }

        // Upper bound is exclusive: the largest offset lands one millisecond short.
        let mut edge = ScriptedRandom::new(vec![799]);
        assert_eq!(window.draw(&mut edge), Duration::from_millis(1_999));
    }
}
