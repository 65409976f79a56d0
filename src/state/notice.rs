use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notification shown at the top of the window
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub created: Instant,
}

/// Stack of live notices; expired ones are pruned on each tick
#[derive(Debug)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    lifetime: Duration,
}

impl NoticeBoard {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            notices: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
            created: now,
        });
    }

    /// Drop every notice older than the board's lifetime
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.notices
            .retain(|notice| now.saturating_duration_since(notice.created) < lifetime);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
