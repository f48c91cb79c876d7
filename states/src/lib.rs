//! Application state store shared by the business and UI crates.
//!
//! The store holds three kinds of entries, all keyed by their Rust type:
//! - [`State`]: plain values owned by the app (config, inputs).
//! - [`Compute`]: caches that only change through an [`Updater`], usually written by a command.
//! - [`Command`]: manual-only side effects (network IO) spawned onto the ctx's task set.
//!
//! Updates produced by commands travel through a `flume` channel and are applied on the UI
//! thread by [`StateCtx::sync_computes`]. Views that need to react to a compute subscribe with
//! [`StateCtx::subscribe`] and receive a cloned snapshot after every applied update.

mod command;
mod compute;
mod ctx;
mod error;
mod snapshot;
mod state;
mod subscription;
mod task;
mod updater;

pub use command::{Command, CommandFuture, CommandQueue};
pub use compute::{Compute, assign_impl};
pub use ctx::StateCtx;
pub use error::Error;
pub use snapshot::CommandSnapshot;
pub use state::{SnapshotClone, State, state_assign_impl};
pub use subscription::Subscription;
pub use updater::{LatestOnlyUpdater, Updater, WakeHook};
