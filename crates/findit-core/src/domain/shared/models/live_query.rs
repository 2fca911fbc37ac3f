// findit-core/findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::mem;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::{Stream, StreamExt};
use tracing::debug;

use super::Failure;

/// Deregisters the external watch backing a `LiveQuery`.
pub type Teardown = Box<dyn FnOnce() + Send>;

type Subscribe<T> = Box<dyn FnOnce(LiveQuerySink<T>) -> Teardown + Send>;

/// A cold, cancellable stream over a server-maintained watch.
///
/// The watch is registered when the stream is first polled. Every change notification yields
/// the complete current result set. A failure is yielded once and ends the stream. The
/// teardown runs exactly once: on `cancel`, on drop or after the stream ended.
pub struct LiveQuery<T> {
    state: State<T>,
}

enum State<T> {
    Idle(Subscribe<T>),
    Active {
        receiver: UnboundedReceiver<Result<T, Failure>>,
        teardown: Teardown,
    },
    Terminated,
}

/// Handed to the watch registration. Forwards snapshots and failures to the stream.
pub struct LiveQuerySink<T> {
    sender: UnboundedSender<Result<T, Failure>>,
}

impl<T> LiveQuery<T> {
    pub fn new<F>(subscribe: F) -> Self
    where
        F: FnOnce(LiveQuerySink<T>) -> Teardown + Send + 'static,
    {
        LiveQuery {
            state: State::Idle(Box::new(subscribe)),
        }
    }

    /// Tears the watch down synchronously. Nothing is yielded afterwards.
    pub fn cancel(&mut self) {
        self.terminate()
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.state, State::Terminated)
    }

    fn start(&mut self) {
        let State::Idle(subscribe) = mem::replace(&mut self.state, State::Terminated) else {
            return;
        };

        let (sender, receiver) = unbounded();
        let teardown = subscribe(LiveQuerySink { sender });
        self.state = State::Active { receiver, teardown };
    }

    fn terminate(&mut self) {
        match mem::replace(&mut self.state, State::Terminated) {
            State::Active {
                mut receiver,
                teardown,
            } => {
                // Close first so that a snapshot racing the teardown can't be queued anymore.
                receiver.close();
                debug!("Tearing down live query.");
                teardown();
            }
            State::Idle(_) | State::Terminated => (),
        }
    }
}

impl<T> Stream for LiveQuery<T> {
    type Item = Result<T, Failure>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if let State::Idle(_) = this.state {
            this.start();
        }

        let State::Active { receiver, .. } = &mut this.state else {
            return Poll::Ready(None);
        };

        match ready!(receiver.poll_next_unpin(cx)) {
            Some(Ok(value)) => Poll::Ready(Some(Ok(value))),
            Some(Err(failure)) => {
                this.terminate();
                Poll::Ready(Some(Err(failure)))
            }
            None => {
                this.terminate();
                Poll::Ready(None)
            }
        }
    }
}

impl<T> Drop for LiveQuery<T> {
    fn drop(&mut self) {
        self.terminate()
    }
}

impl<T> Debug for LiveQuery<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            State::Idle(_) => "Idle",
            State::Active { .. } => "Active",
            State::Terminated => "Terminated",
        };
        f.debug_struct("LiveQuery").field("state", &state).finish()
    }
}

impl<T> LiveQuerySink<T> {
    /// Delivers a full result set. Returns false if the query was torn down.
    pub fn send(&self, value: T) -> bool {
        self.sender.unbounded_send(Ok(value)).is_ok()
    }

    /// Delivers a terminal failure. Later snapshots are dropped.
    pub fn fail(&self, failure: Failure) {
        _ = self.sender.unbounded_send(Err(failure));
        self.sender.close_channel();
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
