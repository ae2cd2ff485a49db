// ============================================================================
// Event Handler Interface
// Defines the contract for handling calculator session events
// ============================================================================

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a session stopped reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    /// The exit command was entered
    ExitCommand,
    /// Input stream was exhausted
    EndOfInput,
    /// An expression failed under the halt policy
    Halted,
}

/// Events emitted by an interactive session
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionEvent {
    /// Expression evaluated and its result printed
    ExpressionEvaluated {
        expression: String,
        result: String,
        timestamp: DateTime<Utc>,
    },

    /// Expression rejected with reason
    ExpressionRejected {
        expression: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Session finished
    SessionEnded {
        reason: EndReason,
        evaluated: usize,
        rejected: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing session events
/// Implementations can handle logging, auditing, history, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a session event
    fn on_event(&self, event: SessionEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<SessionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: SessionEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: SessionEvent) {
        match &event {
            SessionEvent::ExpressionRejected {
                expression, reason, ..
            } => tracing::warn!(%expression, %reason, "expression rejected"),
            _ => tracing::debug!("Calculator session event: {:?}", event),
        }
    }
}

/// Keeps every event in memory, in arrival order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<SessionEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: SessionEvent) {
        self.events.lock().push(event);
    }
}
