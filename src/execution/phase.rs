//! Execution lifecycle state machine.

/// Lifecycle phase of a single child-process execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPhase {
    /// Nothing has happened yet.
    #[default]
    NotStarted,
    /// Process creation has been requested.
    CreationAttempted,
    /// Process creation failed; the call yields false.
    CreationFailed,
    /// Child is running and the parent is blocked on it.
    ChildRunning,
    /// Parent has observed the child's termination.
    ChildTerminated,
    /// Termination status has been turned into a result.
    Evaluated,
}

impl ExecutionPhase {
    /// Check if transition to target phase is valid.
    ///
    /// Valid transitions:
    /// - NotStarted -> CreationAttempted
    /// - CreationAttempted -> CreationFailed
    /// - CreationAttempted -> ChildRunning
    /// - ChildRunning -> ChildTerminated
    /// - ChildTerminated -> Evaluated
    pub fn can_transition_to(&self, target: ExecutionPhase) -> bool {
        use ExecutionPhase::*;
        matches!(
            (*self, target),
            (NotStarted, CreationAttempted)
                | (CreationAttempted, CreationFailed)
                | (CreationAttempted, ChildRunning)
                | (ChildRunning, ChildTerminated)
                | (ChildTerminated, Evaluated)
        )
    }

    /// Attempt to transition to a new phase.
    ///
    /// Returns `Ok(())` if the transition is valid, or an error otherwise.
    pub fn transition_to(&mut self, target: ExecutionPhase) -> crate::Result<()> {
        if self.can_transition_to(target) {
            tracing::trace!(from = ?*self, to = ?target, "execution phase");
            *self = target;
            Ok(())
        } else {
            Err(crate::error::ExecError::InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Check if this is a terminal phase.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionPhase::CreationFailed | ExecutionPhase::Evaluated
        )
    }
}
