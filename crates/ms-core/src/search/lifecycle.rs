use serde::{Deserialize, Serialize};

/// Fetch lifecycle state machine
///
/// Design principle: this is a pure type state machine with only state
/// definitions and transition validation logic. Runtime behaviors like
/// issuing requests and discarding stale completions are handled by the
/// application layer.
///
/// State transitions:
///
/// ```text
/// Idle ──→ Loading ──→ Loaded
///             │      └─→ Error
///             │
/// Loaded ──→ Loading      (page advance, new term)
/// Error  ──→ Loading      (retry)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// No fetch has been issued yet
    Idle,

    /// A fetch is in flight
    Loading,

    /// The last fetch completed successfully
    Loaded,

    /// The last fetch failed, with a human-readable message
    Error(String),
}

impl Lifecycle {
    /// Check if a fetch is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Check if the last fetch settled (successfully or not)
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded | Self::Error(_))
    }

    /// Start a fetch
    ///
    /// Guarded: a tab that is already `Loading` must not issue a second
    /// fetch, so this returns `None` from `Loading`.
    pub fn start_loading(&self) -> Option<Self> {
        match self {
            Self::Loading => None,
            _ => Some(Self::Loading),
        }
    }

    /// Transition after a fetch completes successfully
    pub fn on_success(&self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            other => other.clone(),
        }
    }

    /// Transition after a fetch fails
    pub fn on_failure(&self, message: impl Into<String>) -> Self {
        match self {
            Self::Loading => Self::Error(message.into()),
            other => other.clone(),
        }
    }

    /// Reset to idle (new search term, filter change)
    pub fn reset(&self) -> Self {
        Self::Idle
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::Idle
    }
}
