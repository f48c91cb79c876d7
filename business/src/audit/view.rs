use std::fmt::Display;

use chrono::TimeZone;

use super::display::{
    AuditDisplay, FormatSelector, HEADING, HeaderCell, PageButton, PaginationDisplay, RowDisplay,
    SEARCH_PLACEHOLDER, SearchBox,
};
use super::{
    PAGE_SIZE, SortColumn, SortDirectives, TimeFormat, filter_users, format_date, paginate,
    sort_users, total_pages,
};
use crate::{UserRecord, UsersFetcher, UsersListCompute};

/// Every user input the audit page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditAction {
    Search(String),
    SetTimeFormat(TimeFormat),
    Sort(SortColumn),
    GoToPage(usize),
    PreviousPage,
    NextPage,
}

/// Local state of the audit page.
///
/// The mirror is a private copy of the last loaded user list; sorting reorders it in place and
/// a new source value replaces it. Filtering and paging are recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditView {
    mirror: Vec<UserRecord>,
    directives: SortDirectives,
    search_text: String,
    time_format: TimeFormat,
    current_page: usize,
    loading: bool,
    mounted: bool,
}

impl Default for AuditView {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditView {
    pub fn new() -> Self {
        Self {
            mirror: Vec::new(),
            directives: SortDirectives::default(),
            search_text: String::new(),
            time_format: TimeFormat::default(),
            current_page: 1,
            loading: false,
            mounted: false,
        }
    }

    /// Request the user list once. Later calls are no-ops; returns whether a fetch was issued.
    pub fn mount(&mut self, fetcher: &dyn UsersFetcher) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        fetcher.fetch_all_users();
        true
    }

    /// Take a new store snapshot. A loading or absent value leaves the mirror untouched.
    pub fn sync_source(&mut self, source: &UsersListCompute) {
        self.loading = source.loading;
        if source.loading {
            return;
        }
        if let Some(users) = source.users() {
            self.mirror = users.to_vec();
            self.clamp_page();
            log::debug!("AuditView: mirror replaced with {} users", self.mirror.len());
        }
    }

    pub fn apply(&mut self, action: AuditAction) {
        match action {
            AuditAction::Search(text) => self.set_search(text),
            AuditAction::SetTimeFormat(format) => self.time_format = format,
            AuditAction::Sort(column) => self.sort(column),
            AuditAction::GoToPage(page) => self.go_to_page(page),
            AuditAction::PreviousPage => self.previous_page(),
            AuditAction::NextPage => self.next_page(),
        }
    }

    /// Reorder the mirror by `column`, flipping only that column's directive.
    pub fn sort(&mut self, column: SortColumn) {
        let direction = self.directives.toggle(column);
        sort_users(&mut self.mirror, column, direction);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.current_page = 1;
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.time_format = format;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.last_page());
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn mirror(&self) -> &[UserRecord] {
        &self.mirror
    }

    pub fn directives(&self) -> &SortDirectives {
        &self.directives
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filtered(&self) -> Vec<&UserRecord> {
        filter_users(&self.mirror, &self.search_text)
    }

    pub fn page_rows(&self) -> Vec<&UserRecord> {
        let filtered = self.filtered();
        paginate(&filtered, self.current_page, PAGE_SIZE).to_vec()
    }

    /// Page count of the unfiltered mirror, so a narrowing search keeps the page buttons.
    pub fn total_pages(&self) -> usize {
        total_pages(self.mirror.len(), PAGE_SIZE)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.last_page());
    }

    /// Everything the page shows, with dates formatted in `tz`.
    pub fn render<Tz>(&self, tz: &Tz) -> AuditDisplay
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let rows = self
            .page_rows()
            .into_iter()
            .map(|user| RowDisplay {
                id: user.id.clone(),
                first_name: user.first_name.clone(),
                last_name: user.last_name.clone(),
                username: user.username.clone(),
                created: format_date(&user.created_date.with_timezone(tz), self.time_format),
            })
            .collect();

        let total = self.total_pages();
        let pagination = PaginationDisplay {
            previous_enabled: self.current_page > 1,
            pages: (1..=total)
                .map(|number| PageButton {
                    number,
                    active: number == self.current_page,
                })
                .collect(),
            next_enabled: self.current_page < total,
        };

        AuditDisplay {
            heading: HEADING,
            search: SearchBox {
                text: self.search_text.clone(),
                placeholder: SEARCH_PLACEHOLDER,
            },
            format: FormatSelector::new(self.time_format),
            headers: HeaderCell::all(),
            rows,
            show_spinner: self.loading,
            pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::SortDirection;

    #[derive(Default)]
    struct CountingFetcher {
        calls: Cell<usize>,
    }

    impl UsersFetcher for CountingFetcher {
        fn fetch_all_users(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn user(id: u64, first: &str) -> UserRecord {
        UserRecord {
            id: id.into(),
            first_name: first.to_owned(),
            last_name: "Tester".to_owned(),
            username: first.to_lowercase(),
            created_date: Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap(),
        }
    }

    fn users(count: u64) -> Vec<UserRecord> {
        (0..count).map(|i| user(i, &format!("User{i:02}"))).collect()
    }

    fn loaded(count: u64) -> AuditView {
        let mut view = AuditView::new();
        view.sync_source(&UsersListCompute::loaded(users(count)));
        view
    }

    #[test]
    fn mount_fetches_exactly_once() {
        let fetcher = CountingFetcher::default();
        let mut view = AuditView::new();

        assert!(view.mount(&fetcher));
        assert!(!view.mount(&fetcher));
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[test]
    fn loading_or_absent_source_keeps_mirror() {
        let mut view = loaded(3);

        view.sync_source(&UsersListCompute::loading());
        assert_eq!(view.mirror().len(), 3);
        assert!(view.is_loading());

        view.sync_source(&UsersListCompute::failed("boom"));
        assert_eq!(view.mirror().len(), 3);
        assert!(!view.is_loading());

        view.sync_source(&UsersListCompute::default());
        assert_eq!(view.mirror().len(), 3);
    }

    #[test]
    fn new_source_replaces_sorted_mirror() {
        let mut view = loaded(3);
        view.sort(SortColumn::FirstName);
        assert_eq!(view.mirror()[0].id, 2);

        view.sync_source(&UsersListCompute::loaded(users(3)));
        assert_eq!(view.mirror()[0].id, 0);
        assert_eq!(view.directives().get(SortColumn::FirstName), SortDirection::Ascending);
    }

    #[test]
    fn search_resets_page() {
        let mut view = loaded(30);
        view.go_to_page(3);
        assert_eq!(view.current_page(), 3);

        view.apply(AuditAction::Search("user".to_owned()));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn page_navigation_stays_in_range() {
        let mut view = loaded(25);

        view.previous_page();
        assert_eq!(view.current_page(), 1);

        view.go_to_page(99);
        assert_eq!(view.current_page(), 3);
        view.next_page();
        assert_eq!(view.current_page(), 3);

        view.go_to_page(0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn shrinking_source_clamps_page() {
        let mut view = loaded(35);
        view.go_to_page(4);

        view.sync_source(&UsersListCompute::loaded(users(12)));
        assert_eq!(view.current_page(), 2);

        view.sync_source(&UsersListCompute::loaded(Vec::new()));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn empty_mirror_renders_no_page_buttons() {
        let view = AuditView::new();
        let display = view.render(&Utc);

        assert_eq!(view.total_pages(), 0);
        assert!(display.pagination.pages.is_empty());
        assert!(!display.pagination.previous_enabled);
        assert!(!display.pagination.next_enabled);
        assert!(display.rows.is_empty());
    }

    #[test]
    fn time_format_changes_only_date_column() {
        let mut view = loaded(1);
        let before = view.render(&Utc);
        view.apply(AuditAction::SetTimeFormat(TimeFormat::H24));
        let after = view.render(&Utc);

        assert_eq!(before.rows[0].created, "06/01/2024, 6:30:00 PM");
        assert_eq!(after.rows[0].created, "06/01/2024, 18:30:00");
        assert_eq!(before.rows[0].username, after.rows[0].username);
        assert_eq!(after.format.selected, TimeFormat::H24);
    }

    #[test]
    fn render_marks_active_page_and_spinner() {
        let mut view = loaded(25);
        view.apply(AuditAction::GoToPage(2));
        view.sync_source(&UsersListCompute::loading());

        let display = view.render(&Utc);
        let active: Vec<usize> = display
            .pagination
            .pages
            .iter()
            .filter(|b| b.active)
            .map(|b| b.number)
            .collect();

        assert_eq!(active, vec![2]);
        assert!(display.show_spinner);
        assert_eq!(display.rows.len(), 10);
        assert_eq!(display.rows[0].id, 10);
    }
}
