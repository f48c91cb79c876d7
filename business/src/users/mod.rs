//! Users domain: the record model, the API client and the store entries holding the list.
//!
//! UI code reads the list through `StateCtx::subscribe::<UsersListCompute>()` and requests a
//! refresh through an injected [`UsersFetcher`]; it never calls the API directly.

pub mod api;
mod fetcher;
mod list_users_compute;
mod model;

pub use api::ApiError;
pub use fetcher::{DispatchFetchAllUsers, UsersFetcher};
pub use list_users_compute::{FetchAllUsersCommand, UsersListCompute};
pub use model::{UserId, UserRecord};
