//! HTTP access to the law backend, plus a blocking facade for the worker thread.

pub mod blocking;
pub mod http;

pub use blocking::{BlockingClient, LawSource};
pub use http::{ClientError, LawClient};
