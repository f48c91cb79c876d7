//! Business layer for the audit console.
//!
//! - [`users`]: the user record model, the `/users` API client and the store entries
//!   (`UsersListCompute`, `FetchAllUsersCommand`) that hold the fetched list.
//! - [`audit`]: the audit page view-state machine (search, sort, paginate, time format) and
//!   its pure render into an [`audit::AuditDisplay`] tree.
//!
//! UI code only renders the display tree and feeds user input back as
//! [`audit::AuditAction`]s.

pub mod audit;
mod config;
pub mod users;

pub use audit::{
    AuditAction, AuditDisplay, AuditView, PAGE_SIZE, SortColumn, SortDirection, SortDirectives,
    TimeFormat, format_date,
};
pub use config::{BusinessConfig, ConfigError};
pub use users::{
    ApiError, DispatchFetchAllUsers, FetchAllUsersCommand, UserId, UserRecord, UsersFetcher,
    UsersListCompute,
};
