use std::any::{Any, type_name};

/// Produces an owned, `Send` copy of a value for use outside the UI thread.
///
/// Commands never borrow the ctx; they receive a [`crate::CommandSnapshot`] built from these
/// copies. Types that should stay invisible to commands keep the default `None`.
pub trait SnapshotClone {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// A plain value stored in [`crate::StateCtx`].
pub trait State: Any + SnapshotClone {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same type.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        let _ = new_self;
    }
}

/// Shared `assign_box` body for states: downcast and overwrite, log on type mismatch.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => log::error!("state_assign_impl: value is not a {}", type_name::<T>()),
    }
}
