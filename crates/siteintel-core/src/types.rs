//! Shared application-level types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Application is initializing (terminal and config not ready yet)
    #[default]
    Initializing,
    /// Event loop is running
    Running,
    /// Application is shutting down
    Quitting,
}

impl AppPhase {
    pub fn is_quitting(&self) -> bool {
        matches!(self, AppPhase::Quitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_initializing() {
        assert_eq!(AppPhase::default(), AppPhase::Initializing);
    }

    #[test]
    fn test_is_quitting() {
        assert!(AppPhase::Quitting.is_quitting());
        assert!(!AppPhase::Running.is_quitting());
    }
}
