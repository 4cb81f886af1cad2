//! Messages between the front end and the worker thread.
//!
//! The two threads share no mutable state; everything crosses over these two
//! channels. The worker owns the serial handle, the HTTP client, the
//! last-seen tracker, and the selected category.

/// Front end → worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Change the category used by the filtered update check.
    SelectCategory(String),
    /// Stop the listener loop cleanly.
    Shutdown,
}

/// Worker → front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One line for the append-only display log.
    Display(String),
    /// The selectable category list derived at startup.
    Categories(Vec<String>),
}
