//! Outcome events delivered to the caller.

/// One notification about one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalEvent {
    Begin { post_url: String },
    Done { post_url: String },
    Error { post_url: String, message: String },
}

impl RemovalEvent {
    pub fn post_url(&self) -> &str {
        match self {
            RemovalEvent::Begin { post_url }
            | RemovalEvent::Done { post_url }
            | RemovalEvent::Error { post_url, .. } => post_url,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RemovalEvent::Begin { .. })
    }
}

/// Receives events synchronously, in processing order, from a single task.
pub trait EventSink {
    fn on_event(&mut self, event: RemovalEvent);
}

impl<F> EventSink for F
where
    F: FnMut(RemovalEvent),
{
    fn on_event(&mut self, event: RemovalEvent) {
        self(event)
    }
}

/// Counts for one run. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    pub processed: usize,
    pub done: usize,
    pub failed: usize,
}

impl RemovalSummary {
    pub(crate) fn record(&mut self, event: &RemovalEvent) {
        match event {
            RemovalEvent::Begin { .. } => self.processed += 1,
            RemovalEvent::Done { .. } => self.done += 1,
            RemovalEvent::Error { .. } => self.failed += 1,
        }
    }
}
