//! Bounded combat log

use super::event::ResultEvent;
use std::collections::VecDeque;

/// How many entries the log keeps before evicting the oldest
pub const LOG_CAPACITY: usize = 6;

/// FIFO of the most recent result events
///
/// The log owns the eviction policy; producers only push.
#[derive(Debug, Clone, Default)]
pub struct CombatLog {
    entries: VecDeque<ResultEvent>,
}

impl CombatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, silently dropping the oldest past capacity
    pub fn push(&mut self, event: ResultEvent) {
        self.entries.push_back(event);
        while self.entries.len() > LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = ResultEvent>) {
        for event in events {
            self.push(event);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultEvent> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(text: &str) -> ResultEvent {
        ResultEvent::Info {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_push_evicts_oldest_in_order() {
        let mut log = CombatLog::new();
        for i in 0..7 {
            log.push(info(&format!("e{}", i)));
        }

        assert_eq!(log.len(), LOG_CAPACITY);
        let texts: Vec<String> = log
            .iter()
            .map(|e| match e {
                ResultEvent::Info { text } => text.clone(),
                _ => unreachable!(),
            })
            .collect();
        // e0 evicted, order preserved
        assert_eq!(texts, vec!["e1", "e2", "e3", "e4", "e5", "e6"]);
    }

    #[test]
    fn test_extend_applies_same_bound() {
        let mut log = CombatLog::new();
        log.extend((0..20).map(|i| info(&i.to_string())));
        assert_eq!(log.len(), LOG_CAPACITY);
    }
}
