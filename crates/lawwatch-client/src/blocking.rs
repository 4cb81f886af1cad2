//! Blocking facade over the async client for the worker thread.

use lawwatch_core::Law;

use crate::http::{ClientError, LawClient};

/// Source of law records, abstracted so the listener can be exercised with
/// fakes in tests.
pub trait LawSource {
    /// Full or recent law list; `new_only` maps to the `?new=true` filter.
    fn laws(&mut self, new_only: bool) -> Result<Vec<Law>, ClientError>;

    /// Recent laws matching the selected category.
    fn search(&mut self, category: &str) -> Result<Vec<Law>, ClientError>;
}

/// Drives a [`LawClient`] to completion on a current-thread runtime.
///
/// Owned exclusively by the worker thread; each call blocks for up to the
/// client's request timeout, which serializes command handling.
pub struct BlockingClient {
    runtime: tokio::runtime::Runtime,
    client: LawClient,
}

impl BlockingClient {
    pub fn new(client: LawClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { runtime, client })
    }
}

impl LawSource for BlockingClient {
    fn laws(&mut self, new_only: bool) -> Result<Vec<Law>, ClientError> {
        self.runtime.block_on(self.client.laws(new_only))
    }

    fn search(&mut self, category: &str) -> Result<Vec<Law>, ClientError> {
        self.runtime.block_on(self.client.search(category))
    }
}
