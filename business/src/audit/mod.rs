//! Audit page view-state machine.
//!
//! Pipeline: source list -> local mirror -> filtered view -> page -> display tree.
//! The stages are free functions so they can be tested on their own; [`AuditView`] owns the
//! state they run over.

mod display;
mod filter;
mod format;
mod paginate;
mod sort;
mod view;

pub use display::{
    AuditDisplay, FORMAT_LABEL, FormatSelector, HEADING, HeaderCell, PageButton,
    PaginationDisplay, RowDisplay, SEARCH_PLACEHOLDER, SearchBox,
};
pub use filter::{filter_users, matches_search};
pub use format::{TimeFormat, format_date};
pub use paginate::{PAGE_SIZE, paginate, total_pages};
pub use sort::{SortColumn, SortDirection, SortDirectives, compare_text, sort_users};
pub use view::{AuditAction, AuditView};
