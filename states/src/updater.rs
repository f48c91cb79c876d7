use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;

use crate::Compute;

pub(crate) type UpdateMessage = (TypeId, Box<dyn Any + Send>);

/// Called after every queued update so the owner can schedule a `sync_computes`.
pub type WakeHook = Arc<dyn Fn() + Send + Sync>;

/// Sends new compute values back to the owning [`crate::StateCtx`].
///
/// Values are queued, not applied: nothing changes until the UI thread calls
/// `StateCtx::sync_computes`. When the ctx is gone the value is dropped.
#[derive(Clone)]
pub struct Updater {
    send: Sender<UpdateMessage>,
    wake: Option<WakeHook>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("wake", &self.wake.is_some())
            .finish_non_exhaustive()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<UpdateMessage>, wake: Option<WakeHook>) -> Self {
        Self { send, wake }
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        if self.send.send((TypeId::of::<T>(), Box::new(value))).is_err() {
            log::debug!(
                "Updater: state ctx is gone, discarding {}",
                type_name::<T>()
            );
            return;
        }
        if let Some(wake) = &self.wake {
            wake();
        }
    }
}

/// An [`Updater`] bound to one dispatch of a command.
///
/// Dispatching the same command again (or shutting the ctx down) bumps the shared
/// generation; from then on `set` on the older updater is a no-op, so a slow response
/// can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, generation: u64, latest: Arc<AtomicU64>) -> Self {
        Self {
            inner,
            generation,
            latest,
        }
    }

    pub fn is_latest(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }

    pub fn set<T: Compute + Send>(&self, value: T) {
        if self.is_latest() {
            self.inner.set(value);
        } else {
            log::debug!(
                "LatestOnlyUpdater: generation {} superseded, discarding {}",
                self.generation,
                type_name::<T>()
            );
        }
    }
}
