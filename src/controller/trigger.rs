//! Play button state machine

use crate::speech::LifecycleEvent;

/// Whether an utterance is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerState {
    #[default]
    Idle,
    Speaking,
}

impl TriggerState {
    /// Next state after `event`, or `None` if the event is not legal here
    ///
    /// `Failed` is accepted in both states: a submit can fail before the
    /// engine ever reports a start.
    pub fn on_event(self, event: &LifecycleEvent) -> Option<TriggerState> {
        match (self, event) {
            (TriggerState::Idle, LifecycleEvent::Started) => Some(TriggerState::Speaking),
            (TriggerState::Speaking, LifecycleEvent::Finished) => Some(TriggerState::Idle),
            (_, LifecycleEvent::Failed(_)) => Some(TriggerState::Idle),
            (TriggerState::Speaking, LifecycleEvent::Started) => None,
            (TriggerState::Idle, LifecycleEvent::Finished) => None,
        }
    }

    pub fn is_speaking(self) -> bool {
        self == TriggerState::Speaking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        let failed = LifecycleEvent::Failed("x".to_string());

        assert_eq!(
            TriggerState::Idle.on_event(&LifecycleEvent::Started),
            Some(TriggerState::Speaking)
        );
        assert_eq!(
            TriggerState::Speaking.on_event(&LifecycleEvent::Finished),
            Some(TriggerState::Idle)
        );
        assert_eq!(TriggerState::Speaking.on_event(&failed), Some(TriggerState::Idle));
        assert_eq!(TriggerState::Idle.on_event(&failed), Some(TriggerState::Idle));
    }

    #[test]
    fn test_ignored_transitions() {
        assert_eq!(TriggerState::Speaking.on_event(&LifecycleEvent::Started), None);
        assert_eq!(TriggerState::Idle.on_event(&LifecycleEvent::Finished), None);
    }

    #[test]
    fn test_default_idle() {
        assert_eq!(TriggerState::default(), TriggerState::Idle);
        assert!(!TriggerState::Idle.is_speaking());
        assert!(TriggerState::Speaking.is_speaking());
    }
}
