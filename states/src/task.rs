//! Bookkeeping for commands running on the ctx's task set.

use tokio::task;
use tokio_util::sync::CancellationToken;

/// One dispatch of a command: its generation, its task on the `JoinSet` and the token used
/// to stop it.
///
/// Cancellation is cooperative: the command must watch `cancelled()` in a `tokio::select!`.
#[derive(Debug, Clone)]
pub(crate) struct TaskHandle {
    generation: u64,
    task: task::Id,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub(crate) fn new(generation: u64, task: task::Id, cancel_token: CancellationToken) -> Self {
        Self {
            generation,
            task,
            cancel_token,
        }
    }

    /// Higher generations were dispatched later.
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn task(&self) -> task::Id {
        self.task
    }

    pub(crate) fn cancel(&self) {
        self.cancel_token.cancel();
    }
}
