use tracing::warn;

/// Lifecycle of a user-triggered request.
///
/// A new request can start from `Idle` or `Settled`, never while one is
/// `InFlight`. Settling is only accepted while `InFlight`.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    InFlight,
    Settled(Result<T, String>),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn can_begin(&self) -> bool {
        !self.is_loading()
    }

    /// Moves to `InFlight`. Returns `false` (and changes nothing) if a request
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::InFlight;
        true
    }

    /// Records the outcome of the in-flight request. Outcomes arriving in any
    /// other state are dropped and `false` is returned.
    pub fn settle(&mut self, outcome: Result<T, String>) -> bool {
        if !self.is_loading() {
            warn!("Dropping outcome for a request that is no longer in flight");
            return false;
        }
        *self = Self::Settled(outcome);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Settled(Ok(data)) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Settled(Err(err)) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_only_outside_flight() {
        let mut state: RequestState<u32> = RequestState::default();
        assert!(state.can_begin());
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.can_begin());
        assert!(!state.begin());
        assert!(state.is_loading());
    }

    #[test]
    fn test_settle_success_then_begin_again() {
        let mut state = RequestState::default();
        state.begin();
        assert!(state.settle(Ok(7)));
        assert!(!state.is_loading());
        assert_eq!(state.data(), Some(&7));
        assert_eq!(state.error(), None);

        assert!(state.begin());
        assert_eq!(state.data(), None);
    }

    #[test]
    fn test_settle_failure_clears_loading() {
        let mut state: RequestState<u32> = RequestState::default();
        state.begin();
        assert!(state.settle(Err("model unavailable".to_string())));
        assert!(!state.is_loading());
        assert_eq!(state.error(), Some("model unavailable"));
        assert!(state.can_begin());
    }

    #[test]
    fn test_settle_outside_flight_is_dropped() {
        let mut state: RequestState<u32> = RequestState::default();
        assert!(!state.settle(Ok(1)));
        assert_eq!(state, RequestState::Idle);

        state.begin();
        state.settle(Ok(1));
        assert!(!state.settle(Ok(2)));
        assert_eq!(state.data(), Some(&1));
    }

    #[test]
    fn test_reset() {
        let mut state = RequestState::default();
        state.begin();
        state.settle(Ok(1));
        state.reset();
        assert_eq!(state, RequestState::Idle);
    }
}
