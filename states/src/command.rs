use std::any::{Any, TypeId, type_name};
use std::future::Future;
use std::pin::Pin;

use flume::Sender;
use tokio_util::sync::CancellationToken;

use crate::{CommandSnapshot, LatestOnlyUpdater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A manual-only side effect.
///
/// Commands never run implicitly. They are queued with [`CommandQueue::enqueue`] or
/// `StateCtx::enqueue_command` and start on the next `StateCtx::flush_commands`. The returned
/// future runs on the ctx's task set and reports results through the updater only.
pub trait Command: Any {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture;
}

/// Cloneable handle that queues commands on a [`crate::StateCtx`] without borrowing it.
#[derive(Debug, Clone)]
pub struct CommandQueue {
    send: Sender<TypeId>,
}

impl CommandQueue {
    pub(crate) fn new(send: Sender<TypeId>) -> Self {
        Self { send }
    }

    pub fn enqueue<C: Command>(&self) {
        if self.send.send(TypeId::of::<C>()).is_err() {
            log::debug!("CommandQueue: state ctx is gone, dropping {}", type_name::<C>());
        }
    }
}
