//! Decision-flow state machine with synchronous observer broadcast.
//!
//! The flow holds at most one active decision. Presenting a new one always
//! clears previously installed options first, so a pending decision is
//! implicitly discarded (last present wins). There is no timeout:
//! [`DecisionState::AwaitingSelection`] persists until a selection arrives
//! on the same single-threaded path.
use std::fmt;

use thiserror::Error;

use crate::effect::DecisionOption;

/// Callback invoked with the chosen option key.
pub type DecisionObserver = Box<dyn FnMut(&str)>;

/// Handle identifying one registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriberId(u64);

/// Visibility state of the decision surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecisionState {
    /// No decision displayed (initial state, re-entered after a selection).
    #[default]
    Hidden,
    /// Options installed, waiting for the user's choice.
    AwaitingSelection,
}

/// Errors surfaced by [`DecisionFlow::select`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// A selection arrived while no decision was displayed.
    #[error("no decision is awaiting selection")]
    NoPendingDecision,
}

/// Single-select decision surface.
///
/// Observers are invoked synchronously, in registration order, each exactly
/// once per selection.
pub struct DecisionFlow {
    state: DecisionState,
    stage: Option<String>,
    options: Vec<DecisionOption>,
    observers: Vec<(SubscriberId, DecisionObserver)>,
    next_subscriber: u64,
}

impl DecisionFlow {
    pub fn new() -> Self {
        Self {
            state: DecisionState::Hidden,
            stage: None,
            options: Vec::new(),
            observers: Vec::new(),
            next_subscriber: 0,
        }
    }

    pub fn state(&self) -> DecisionState {
        self.state
    }

    /// Name of the stage currently awaiting selection, if any.
    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    /// Options currently visible to the user (empty while hidden).
    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    /// Registers an observer for chosen keys and returns its handle.
    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer. Returns false if the
    /// handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Displays a decision, replacing whatever was pending.
    ///
    /// Installed options are cleared before the new set goes in, so no
    /// stale option survives a re-present.
    pub fn present(&mut self, stage: impl Into<String>, options: Vec<DecisionOption>) {
        self.clear();
        self.stage = Some(stage.into());
        self.options = options;
        self.state = DecisionState::AwaitingSelection;
    }

    /// Resolves the pending decision with the given key.
    ///
    /// Delivers the key to every observer in registration order, then hides
    /// the surface. The key is not validated against the installed options;
    /// hosts may forward synthetic keys. Fails with
    /// [`DecisionError::NoPendingDecision`] while hidden.
    pub fn select(&mut self, key: &str) -> Result<(), DecisionError> {
        if self.state != DecisionState::AwaitingSelection {
            return Err(DecisionError::NoPendingDecision);
        }
        for (_, observer) in &mut self.observers {
            observer(key);
        }
        self.clear();
        Ok(())
    }

    fn clear(&mut self) {
        self.stage = None;
        self.options.clear();
        self.state = DecisionState::Hidden;
    }
}

impl Default for DecisionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecisionFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionFlow")
            .field("state", &self.state)
            .field("stage", &self.stage)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}
