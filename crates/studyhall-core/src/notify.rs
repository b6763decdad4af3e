// ── Transient notices (toasts) ──
//
// Notices stack independently and each expires exactly NOTICE_TTL after
// creation -- no queueing, no deduplication, no interaction-based
// extension. Expiry is computed from `Instant`s the caller injects, so
// tests drive a synthetic clock.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Notice severity, each mapped to a fixed icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "·",
        }
    }
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: NoticeKind::Info,
        }
    }
}

/// The set of currently visible notices, oldest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    entries: Vec<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice created at `now`. Concurrent notices coexist, each
    /// with its own deadline.
    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.entries.push((notice, now));
    }

    /// Drop every notice whose TTL has elapsed at `now`.
    pub fn prune(&mut self, now: Instant) {
        self.entries
            .retain(|(_, created)| now.duration_since(*created) < NOTICE_TTL);
    }

    /// Currently visible notices, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|(notice, _)| notice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
