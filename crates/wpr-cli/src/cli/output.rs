//! Console lines for removal events. Write failures (closed pipe) are ignored.

use std::fmt;
use std::io::{self, Write};
use wpr_core::remover::{EventSink, RemovalEvent};

pub struct EventPrinter<W: Write> {
    out: W,
}

impl EventPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> EventPrinter<W> {
    #[cfg(test)]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{}", args);
        let _ = self.out.flush();
    }
}

impl<W: Write> EventSink for EventPrinter<W> {
    fn on_event(&mut self, event: RemovalEvent) {
        match &event {
            RemovalEvent::Begin { post_url } => self.line(format_args!("{}: begin", post_url)),
            RemovalEvent::Done { post_url } => self.line(format_args!("{}: done", post_url)),
            RemovalEvent::Error { post_url, message } => {
                self.line(format_args!("{}: error: {}", post_url, message))
            }
        }
    }
}
