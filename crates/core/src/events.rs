//! Buffered notifications for presentation layers.
//!
//! The core appends [`GameEvent`]s while it runs; observers pull them with
//! [`EventLog::drain`] whenever it suits their loop.

use crate::types::GameEvent;

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events not yet drained, oldest first.
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_log_in_order() {
        let mut log = EventLog::new();
        log.push(GameEvent::BoardReset);
        log.push(GameEvent::ScoreChanged { score: 4 });

        let drained: Vec<_> = log.drain().collect();
        assert_eq!(
            drained,
            vec![GameEvent::BoardReset, GameEvent::ScoreChanged { score: 4 }]
        );
        assert!(log.is_empty());
    }
}
