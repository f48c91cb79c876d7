//! Users list cache + fetch command.
//!
//! - `UsersListCompute` is the store entry views subscribe to: `{ value, loading }` plus the
//!   last error, shaped like the store slice the page was designed against.
//! - `FetchAllUsersCommand` is manual-only; it performs the request and updates the compute
//!   through its updater.

use std::any::Any;

use audit_states::{
    Command, CommandFuture, CommandSnapshot, Compute, LatestOnlyUpdater, SnapshotClone,
    assign_impl,
};
use log::{error, info};
use tokio_util::sync::CancellationToken;

use super::{UserRecord, api};
use crate::BusinessConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersListCompute {
    /// `None` until a fetch succeeds, and again while a new fetch is loading.
    pub value: Option<Vec<UserRecord>>,
    pub loading: bool,
    /// Message of the last failed fetch. Views treat a failure as "no data".
    pub error: Option<String>,
}

impl UsersListCompute {
    pub fn loading() -> Self {
        Self {
            value: None,
            loading: true,
            error: None,
        }
    }

    pub fn loaded(users: Vec<UserRecord>) -> Self {
        Self {
            value: Some(users),
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            value: None,
            loading: false,
            error: Some(message.into()),
        }
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        self.value.as_deref()
    }
}

impl SnapshotClone for UsersListCompute {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl Compute for UsersListCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Fetches every user from `GET {api_url}/users` into [`UsersListCompute`].
#[derive(Default, Debug)]
pub struct FetchAllUsersCommand;

impl Command for FetchAllUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let api_url = snap
            .state::<BusinessConfig>()
            .map(|config| config.api_url().as_str().to_owned());

        Box::pin(async move {
            let api_url = match api_url {
                Ok(url) => url,
                Err(err) => {
                    error!("FetchAllUsersCommand: {err}");
                    updater.set(UsersListCompute::failed(err.to_string()));
                    return;
                }
            };

            info!("FetchAllUsersCommand: fetching users from {api_url}");
            updater.set(UsersListCompute::loading());

            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("FetchAllUsersCommand: cancelled");
                }
                result = api::list_users(&api_url) => match result {
                    Ok(users) => {
                        info!("FetchAllUsersCommand: fetched {} users", users.len());
                        updater.set(UsersListCompute::loaded(users));
                    }
                    Err(err) => {
                        error!("FetchAllUsersCommand: {err}");
                        updater.set(UsersListCompute::failed(err.to_string()));
                    }
                },
            }
        })
    }
}
