use std::any::{Any, type_name};

use crate::SnapshotClone;

/// A cache whose value only changes through an [`crate::Updater`].
///
/// Computes never run side effects themselves. A command does the IO and pushes the new
/// value with `Updater::set`; [`crate::StateCtx::sync_computes`] applies it on the UI thread
/// and notifies subscribers.
pub trait Compute: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    /// Replace `self` with a boxed value of the same type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes: downcast and overwrite, log on type mismatch.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::error!("assign_impl: value is not a {}", type_name::<T>()),
    }
}
