// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

use futures::{stream, Stream, StreamExt};

use super::Failure;

/// Status of an asynchronous operation as seen by an observer. An operation emits any number
/// of `Loading` states followed by exactly one terminal `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressState<T> {
    Loading(bool),
    Success(T),
    Error(String),
}

impl<T> ProgressState<T> {
    pub fn is_terminal(&self) -> bool {
        match self {
            ProgressState::Loading(_) => false,
            ProgressState::Success(_) | ProgressState::Error(_) => true,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProgressState<U> {
        match self {
            ProgressState::Loading(is_loading) => ProgressState::Loading(is_loading),
            ProgressState::Success(value) => ProgressState::Success(f(value)),
            ProgressState::Error(message) => ProgressState::Error(message),
        }
    }
}

impl<T> From<Result<T, Failure>> for ProgressState<T> {
    fn from(value: Result<T, Failure>) -> Self {
        match value {
            Ok(value) => ProgressState::Success(value),
            Err(failure) => ProgressState::Error(failure.to_string()),
        }
    }
}

impl<T: Send + 'static> ProgressState<T> {
    /// Emits `Loading(true)`, then awaits `operation` and emits its outcome.
    /// The operation does not start before the stream is polled past the loading state.
    pub fn track<F>(operation: F) -> impl Stream<Item = ProgressState<T>> + Send
    where
        F: Future<Output = Result<T, Failure>> + Send + 'static,
    {
        stream::once(async { ProgressState::Loading(true) })
            .chain(stream::once(async move { ProgressState::from(operation.await) }))
    }
}
