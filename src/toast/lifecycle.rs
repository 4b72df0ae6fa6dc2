// SPDX-License-Identifier: MPL-2.0
//! Pure toast state machine.
//!
//! No timers and no rendering live here: [`Lifecycle::apply`] maps the
//! current phase and an incoming [`Event`] to the next phase. Timer glue is in
//! [`super::instance`], renderers read [`Phase`] from snapshots.
//!
//! ```text
//! Created --Mounted--> Visible --DismissRequested--> Dismissing --Settled--> Removed
//! ```

use std::fmt;

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Constructed, waiting for the first frame.
    Created,
    /// On screen, entry animation applied.
    Visible,
    /// Exit animation running, removal scheduled.
    Dismissing,
    /// Detached from its host. Terminal.
    Removed,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::Removed
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Created => "created",
            Phase::Visible => "visible",
            Phase::Dismissing => "dismissing",
            Phase::Removed => "removed",
        };
        f.write_str(name)
    }
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The first frame after mounting was painted.
    Mounted,
    /// Close control pressed, programmatic close, or auto-dismiss elapsed.
    DismissRequested,
    /// The exit animation window elapsed.
    Settled,
}

/// Result of applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine moved to a new phase.
    Moved(Phase),
    /// A dismiss arrived before mounting finished; it is applied on mount.
    Deferred,
    /// The event has no effect in the current phase.
    Ignored,
}

/// Phase bookkeeping for one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    phase: Phase,
    dismiss_pending: bool,
    history: Vec<Phase>,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Created,
            dismiss_pending: false,
            history: vec![Phase::Created],
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Every phase entered so far, in order, starting with `Created`.
    #[must_use]
    pub fn history(&self) -> &[Phase] {
        &self.history
    }

    /// Whether a dismiss arrived while still `Created`.
    #[must_use]
    pub fn dismiss_pending(&self) -> bool {
        self.dismiss_pending
    }

    /// Applies `event` and reports what happened.
    pub fn apply(&mut self, event: Event) -> Step {
        let next = match (self.phase, event) {
            (Phase::Created, Event::Mounted) => Phase::Visible,
            (Phase::Created, Event::DismissRequested) => {
                if self.dismiss_pending {
                    return Step::Ignored;
                }
                self.dismiss_pending = true;
                return Step::Deferred;
            }
            (Phase::Visible, Event::DismissRequested) => Phase::Dismissing,
            (Phase::Dismissing, Event::Settled) => Phase::Removed,
            _ => return Step::Ignored,
        };

        if next == Phase::Visible {
            // consumed by the caller right after entering Visible
            self.dismiss_pending = false;
        }
        self.phase = next;
        self.history.push(next);
        Step::Moved(next)
    }

    /// Applies a mount and reports whether a deferred dismiss must follow.
    pub fn mount(&mut self) -> (Step, bool) {
        let pending = self.dismiss_pending;
        let step = self.apply(Event::Mounted);
        (step, pending && step == Step::Moved(Phase::Visible))
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_visits_every_phase_in_order() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.apply(Event::Mounted), Step::Moved(Phase::Visible));
        assert_eq!(
            lifecycle.apply(Event::DismissRequested),
            Step::Moved(Phase::Dismissing)
        );
        assert_eq!(lifecycle.apply(Event::Settled), Step::Moved(Phase::Removed));
        assert_eq!(
            lifecycle.history(),
            &[
                Phase::Created,
                Phase::Visible,
                Phase::Dismissing,
                Phase::Removed
            ]
        );
    }

    #[test]
    fn repeated_dismiss_moves_once() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.apply(Event::Mounted);
        assert_eq!(
            lifecycle.apply(Event::DismissRequested),
            Step::Moved(Phase::Dismissing)
        );
        assert_eq!(lifecycle.apply(Event::DismissRequested), Step::Ignored);
        assert_eq!(lifecycle.apply(Event::DismissRequested), Step::Ignored);
        assert_eq!(lifecycle.history().len(), 3);
    }

    #[test]
    fn settle_before_dismiss_is_ignored() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.apply(Event::Settled), Step::Ignored);
        lifecycle.apply(Event::Mounted);
        assert_eq!(lifecycle.apply(Event::Settled), Step::Ignored);
        assert_eq!(lifecycle.phase(), Phase::Visible);
    }

    #[test]
    fn mount_is_idempotent() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.apply(Event::Mounted);
        assert_eq!(lifecycle.apply(Event::Mounted), Step::Ignored);
        assert_eq!(lifecycle.history(), &[Phase::Created, Phase::Visible]);
    }

    #[test]
    fn dismiss_before_mount_is_deferred_once() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.apply(Event::DismissRequested), Step::Deferred);
        assert_eq!(lifecycle.apply(Event::DismissRequested), Step::Ignored);
        assert!(lifecycle.dismiss_pending());

        let (step, dismiss_now) = lifecycle.mount();
        assert_eq!(step, Step::Moved(Phase::Visible));
        assert!(dismiss_now);
        assert!(!lifecycle.dismiss_pending());
    }

    #[test]
    fn removed_is_terminal() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.apply(Event::Mounted);
        lifecycle.apply(Event::DismissRequested);
        lifecycle.apply(Event::Settled);

        for event in [Event::Mounted, Event::DismissRequested, Event::Settled] {
            assert_eq!(lifecycle.apply(event), Step::Ignored);
        }
        assert!(lifecycle.phase().is_terminal());
    }
}
