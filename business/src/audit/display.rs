//! Display tree produced by `AuditView::render`.
//!
//! Plain data: everything the page draws, with no egui types, so the whole page can be
//! asserted on without a UI harness.

use super::{SortColumn, TimeFormat};
use crate::UserId;

pub const HEADING: &str = "Auditor Page";
pub const SEARCH_PLACEHOLDER: &str = "Search by First & last name or username";
pub const FORMAT_LABEL: &str = "Date/Time Format:";
const DATE_HEADER: &str = "Date/Time";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditDisplay {
    pub heading: &'static str,
    pub search: SearchBox,
    pub format: FormatSelector,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowDisplay>,
    /// Spinner row shown below the data rows while the source is loading.
    pub show_spinner: bool,
    pub pagination: PaginationDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub text: String,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSelector {
    pub label: &'static str,
    pub selected: TimeFormat,
    pub options: [TimeFormat; 2],
}

impl FormatSelector {
    pub(crate) fn new(selected: TimeFormat) -> Self {
        Self {
            label: FORMAT_LABEL,
            selected,
            options: TimeFormat::ALL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    /// `Some` for clickable headers.
    pub sort: Option<SortColumn>,
}

impl HeaderCell {
    pub(crate) fn all() -> Vec<Self> {
        let mut headers: Vec<Self> = SortColumn::ALL
            .into_iter()
            .map(|column| Self {
                label: format!("{} ↑↓", column.label()),
                sort: Some(column),
            })
            .collect();
        headers.push(Self {
            label: DATE_HEADER.to_owned(),
            sort: None,
        });
        headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDisplay {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub created: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationDisplay {
    pub previous_enabled: bool,
    pub pages: Vec<PageButton>,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}
