use audit_business::{
    AuditAction, AuditView, DispatchFetchAllUsers, UsersFetcher, UsersListCompute,
};
use audit_states::{StateCtx, Subscription};
use chrono::Local;
use egui::{Response, Ui};

use super::{pagination, table, toolbar};

/// The audit page.
///
/// Subscribes to `UsersListCompute` on creation and requests the user list on its first
/// frame. Dropping the page drops the subscription, so results arriving afterwards never
/// reach it.
pub struct AuditPage {
    view: AuditView,
    source: Subscription<UsersListCompute>,
    fetcher: Box<dyn UsersFetcher>,
}

impl std::fmt::Debug for AuditPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditPage")
            .field("view", &self.view)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl AuditPage {
    /// Wire the page to `ctx`: subscribe to the users list and fetch through its command queue.
    pub fn new(ctx: &mut StateCtx) -> Self {
        let source = ctx.subscribe::<UsersListCompute>();
        let fetcher = DispatchFetchAllUsers::new(ctx.command_queue());
        Self::with_fetcher(source, Box::new(fetcher))
    }

    pub fn with_fetcher(
        source: Subscription<UsersListCompute>,
        fetcher: Box<dyn UsersFetcher>,
    ) -> Self {
        Self {
            view: AuditView::new(),
            source,
            fetcher,
        }
    }

    pub fn view(&self) -> &AuditView {
        &self.view
    }

    /// Mount on first call, then fold every pending store snapshot into the view.
    pub fn poll(&mut self) {
        if self.view.mount(self.fetcher.as_ref()) {
            log::info!("AuditPage: mounted, requesting users");
        }
        for snapshot in self.source.pending() {
            self.view.sync_source(&snapshot);
        }
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        self.poll();

        let display = self.view.render(&Local);
        let mut actions: Vec<AuditAction> = Vec::new();

        let response = ui
            .vertical(|ui| {
                toolbar::render_toolbar(ui, &display, &mut actions);
                ui.add_space(8.0);
                table::render_table(ui, &display, &mut actions);
                ui.add_space(8.0);
                pagination::render_pagination(ui, &display.pagination, &mut actions);
            })
            .response;

        for action in actions {
            log::debug!("AuditPage: {action:?}");
            self.view.apply(action);
        }

        if display.show_spinner {
            ui.ctx().request_repaint();
        }

        response
    }
}
