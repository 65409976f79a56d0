/// Submission controller
///
/// Tracks the single in-flight generation request. Every accepted submission
/// gets a ticket; settling a ticket moves the controller out of `Submitting`
/// once the outstanding ticket comes back.

use std::fmt;

use tracing::{info, warn};

/// Sequence number of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How the last settled request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting(Ticket),
    Settled(Outcome),
}

/// What `settle` observed about the ticket it was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The outstanding request came back
    Current,
    /// A ticket that was no longer outstanding came back
    Stale,
}

#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    issued: u64,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            issued: 0,
        }
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase(), Phase::Submitting(_))
    }

    /// Enter `Submitting` and hand out a ticket
    ///
    /// Returns None while a request is already outstanding.
    pub fn begin(&mut self) -> Option<Ticket> {
        if let Phase::Submitting(outstanding) = self.phase {
            warn!(%outstanding, "submission refused, request already in flight");
            return None;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.phase = Phase::Submitting(ticket);
        info!(%ticket, "submission started");
        Some(ticket)
    }

    /// Record that the request behind `ticket` resolved
    ///
    /// Stale tickets are reported but do not change the phase.
    pub fn settle(&mut self, ticket: Ticket, outcome: Outcome) -> Settlement {
        match self.phase {
            Phase::Submitting(outstanding) if outstanding == ticket => {
                self.phase = Phase::Settled(outcome);
                info!(%ticket, ?outcome, "submission settled");
                Settlement::Current
            }
            _ => {
                warn!(%ticket, ?outcome, phase = ?self.phase, "stale submission settled");
                Settlement::Stale
            }
        }
    }
}
