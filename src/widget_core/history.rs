use std::collections::VecDeque;

use super::types::Message;

/// Exchanges (user + assistant pairs) kept for context.
pub const MAX_EXCHANGES: usize = 5;
pub const HISTORY_LIMIT: usize = MAX_EXCHANGES * 2;

/// Sliding window over the most recent messages. Oldest entries fall off first.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<Message>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        History::with_limit(HISTORY_LIMIT)
    }
}

impl History {
    pub fn with_limit(limit: usize) -> History {
        History {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.entries.push_back(message);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.iter().cloned().collect()
    }
}
