use audit_states::CommandQueue;

use super::FetchAllUsersCommand;

/// The "fetch all users" action, injected into views instead of reached through the ctx.
///
/// Fire-and-forget: completion is only observable through `UsersListCompute` changing.
pub trait UsersFetcher {
    fn fetch_all_users(&self);
}

/// Production fetcher: queues [`FetchAllUsersCommand`] on the ctx's command queue.
///
/// The command starts on the ctx's next `flush_commands`.
#[derive(Debug, Clone)]
pub struct DispatchFetchAllUsers {
    queue: CommandQueue,
}

impl DispatchFetchAllUsers {
    pub fn new(queue: CommandQueue) -> Self {
        Self { queue }
    }
}

impl UsersFetcher for DispatchFetchAllUsers {
    fn fetch_all_users(&self) {
        self.queue.enqueue::<FetchAllUsersCommand>();
    }
}
