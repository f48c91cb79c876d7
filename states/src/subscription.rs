use flume::Receiver;

/// Receiving end of [`crate::StateCtx::subscribe`].
///
/// Holds a cloned snapshot for every update applied to the subscribed compute, in order.
/// Dropping the subscription unsubscribes; the ctx prunes the sender on its next sync.
#[derive(Debug)]
pub struct Subscription<T> {
    recv: Receiver<T>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(recv: Receiver<T>) -> Self {
        Self { recv }
    }

    /// Snapshots delivered since the last poll, oldest first. Never blocks.
    pub fn pending(&self) -> impl Iterator<Item = T> + '_ {
        self.recv.try_iter()
    }

    /// Only the newest pending snapshot, discarding older ones.
    pub fn latest(&self) -> Option<T> {
        self.pending().last()
    }
}
