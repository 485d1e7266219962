use crate::state::message::Message;
use std::collections::VecDeque;

/// Maximum number of sent messages remembered
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded FIFO of sent messages, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Add entry, dropping the oldest if over capacity
    pub fn push(&mut self, message: Message) {
        self.entries.push_back(message);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Entries in insertion order
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.iter().map(|m| m.as_str().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn msg(s: &str) -> Message {
        Message::new(s).unwrap()
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut history = History::default();
        for s in ["a", "b", "c"] {
            history.push(msg(s));
        }
        assert_eq!(history.snapshot(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_eleventh_evicts_oldest() {
        let mut history = History::default();
        for i in 1..=11 {
            history.push(msg(&i.to_string()));
        }
        let expected: Vec<String> = (2..=11).map(|i| i.to_string()).collect();
        assert_eq!(history.snapshot(), expected);
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_random_send_counts_keep_last_ten() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let n = rng.gen_range(0..40);
            let mut history = History::default();
            let sent: Vec<String> = (0..n).map(|i| format!("m{}", i)).collect();
            for s in &sent {
                history.push(msg(s));
            }

            let keep = n.min(HISTORY_CAPACITY);
            assert_eq!(history.len(), keep);
            assert_eq!(history.snapshot(), sent[n - keep..].to_vec());
            assert_eq!(history.is_empty(), n == 0);
        }
    }
}
