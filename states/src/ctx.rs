use std::any::{Any, TypeId};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use flume::{Receiver, Sender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::task::TaskHandle;
use crate::updater::UpdateMessage;
use crate::{
    Command, CommandQueue, CommandSnapshot, Compute, LatestOnlyUpdater, State, Subscription,
    Updater, WakeHook,
};

/// Pushes an applied compute to one subscriber. Returns `false` once the subscriber is gone.
type Notify = Box<dyn FnMut(&dyn Any) -> bool>;

pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    subscribers: BTreeMap<TypeId, Vec<Notify>>,

    update_send: Sender<UpdateMessage>,
    update_recv: Receiver<UpdateMessage>,
    queue_send: Sender<TypeId>,
    queue_recv: Receiver<TypeId>,
    wake: Option<WakeHook>,

    tasks: JoinSet<()>,
    running: BTreeMap<TypeId, TaskHandle>,
    generations: BTreeMap<TypeId, Arc<AtomicU64>>,
    root_cancel: CancellationToken,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("subscribers", &self.subscriber_count())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StateCtx {
    fn drop(&mut self) {
        // Tasks are aborted by the JoinSet drop; the token lets cooperative ones stop first.
        self.root_cancel.cancel();
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (update_send, update_recv) = flume::unbounded();
        let (queue_send, queue_recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            subscribers: BTreeMap::new(),
            update_send,
            update_recv,
            queue_send,
            queue_recv,
            wake: None,
            tasks: JoinSet::new(),
            running: BTreeMap::new(),
            generations: BTreeMap::new(),
            root_cancel: CancellationToken::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
    }

    /// Last value applied to a compute by `sync_computes`.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.update_send.clone(), self.wake.clone())
    }

    /// Run `hook` whenever an updater queues a value, e.g. to request a UI repaint.
    ///
    /// Only updaters created afterwards carry the hook.
    pub fn set_wake_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.wake = Some(Arc::new(hook));
    }

    pub fn has_wake_hook(&self) -> bool {
        self.wake.is_some()
    }

    pub fn command_queue(&self) -> CommandQueue {
        CommandQueue::new(self.queue_send.clone())
    }

    /// Subscribe to every update applied to compute `T`.
    ///
    /// The current value (if recorded) is delivered immediately so a late subscriber starts
    /// from the same snapshot as everyone else.
    pub fn subscribe<T: Compute + Clone>(&mut self) -> Subscription<T> {
        let (send, recv) = flume::unbounded();
        if let Some(current) = self.cached::<T>() {
            let _ = send.send(current.clone());
        }

        let notify: Notify = Box::new(move |value: &dyn Any| match value.downcast_ref::<T>() {
            Some(value) => send.send(value.clone()).is_ok(),
            None => true,
        });
        self.subscribers
            .entry(TypeId::of::<T>())
            .or_default()
            .push(notify);

        Subscription::new(recv)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.values().map(Vec::len).sum()
    }

    /// Reap finished commands, apply every queued update, then notify subscribers of the
    /// touched computes.
    pub fn sync_computes(&mut self) {
        self.reap_finished();

        for (id, value) in self.update_recv.try_iter() {
            let Some(compute) = self.computes.get_mut(&id) else {
                log::warn!("sync_computes: update for an unrecorded compute, dropping");
                continue;
            };
            compute.assign_box(value);

            if let Some(subscribers) = self.subscribers.get_mut(&id) {
                let before = subscribers.len();
                subscribers.retain_mut(|notify| notify(compute.as_any()));
                let pruned = before - subscribers.len();
                if pruned > 0 {
                    log::debug!("sync_computes: pruned {pruned} closed subscriber(s)");
                }
            }
        }
    }

    pub fn enqueue_command<C: Command>(&self) {
        self.command_queue().enqueue::<C>();
    }

    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    /// Start every queued command on the current Tokio runtime.
    ///
    /// A command dispatched again while its previous run is in flight cancels that run and
    /// makes its updater stale.
    pub fn flush_commands(&mut self) {
        let queued: Vec<TypeId> = self.queue_recv.try_iter().collect();
        if queued.is_empty() {
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            log::error!(
                "flush_commands: no Tokio runtime, dropping {} queued command(s)",
                queued.len()
            );
            return;
        };

        for id in queued {
            if !self.commands.contains_key(&id) {
                log::warn!("flush_commands: command was never recorded, skipping");
                continue;
            }

            let latest = Arc::clone(self.generations.entry(id).or_default());
            let generation = latest.fetch_add(1, Ordering::AcqRel) + 1;
            if let Some(previous) = self.running.remove(&id) {
                previous.cancel();
            }

            let token = self.root_cancel.child_token();
            let updater = LatestOnlyUpdater::new(self.updater(), generation, latest);
            let snap = self.snapshot();
            let Some(command) = self.commands.get(&id) else {
                continue;
            };
            let future = command.run(snap, updater, token.clone());

            let task = self.tasks.spawn_on(future, &runtime).id();
            self.running
                .insert(id, TaskHandle::new(generation, task, token));
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Await every running command, applying their updates as they finish.
    pub async fn wait_for_tasks(&mut self) {
        while self.tasks.join_next().await.is_some() {
            self.sync_computes();
        }
        self.running.clear();
        self.sync_computes();
    }

    /// Cancel and abort every running command. Updates they send afterwards are discarded.
    pub async fn shutdown(&mut self) {
        self.root_cancel.cancel();
        for latest in self.generations.values() {
            latest.fetch_add(1, Ordering::AcqRel);
        }
        self.tasks.abort_all();
        while self.tasks.join_next().await.is_some() {}
        self.running.clear();
    }

    fn reap_finished(&mut self) {
        while let Some(joined) = self.tasks.try_join_next_with_id() {
            let task = match joined {
                Ok((task, ())) => task,
                Err(err) => {
                    if err.is_panic() {
                        log::error!("reap_finished: command task panicked: {err}");
                    }
                    err.id()
                }
            };
            self.running.retain(|_, handle| {
                let finished = handle.task() == task;
                if finished {
                    log::debug!("reap_finished: generation {} done", handle.generation());
                }
                !finished
            });
        }
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.clone_boxed() {
                snap.insert_state(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.clone_boxed() {
                snap.insert_compute(*id, value);
            }
        }
        snap
    }
}
