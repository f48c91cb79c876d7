//! Audit page widgets.
//!
//! - `page`: the `AuditPage` widget, owning the view state and the store subscription
//! - `toolbar`: heading, search box and date/time format selector
//! - `table`: the users table (columns, header, rows)
//! - `pagination`: Previous / page numbers / Next
//!
//! Every sub-widget draws from the `AuditDisplay` tree and reports user input as
//! `AuditAction`s; only `AuditPage` mutates state.

mod page;
mod pagination;
pub mod table;
mod toolbar;

pub use page::AuditPage;
