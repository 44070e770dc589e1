//! Terminal event types and listener trait.
//!
//! Events flow outward from the parser to the host. The `EventListener`
//! trait decouples `Parser<T>` and `Terminal<T>` from any particular host;
//! tests use `VoidListener` or a recording listener.

/// Events the parser raises while consuming the byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// BEL character received.
    Bell,
    /// Window title changed (OSC 0/2).
    Title(String),
    /// Response bytes to write back to the PTY (DA, DSR).
    PtyWrite(String),
}

/// Receives terminal events.
///
/// The default implementation is a no-op, so `VoidListener` needs no
/// method body.
///
/// Bound: `Send + 'static` so a host may forward events to another thread.
pub trait EventListener: Send + 'static {
    /// Handle a terminal event. Default: no-op.
    fn send_event(&self, _event: Event) {}
}

/// No-op event listener for tests and headless operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidListener;

impl EventListener for VoidListener {}

#[cfg(test)]
mod tests;
