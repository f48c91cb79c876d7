use crate::{state::State, widgets::AuditPage};

pub struct AuditApp {
    state: State,
    page: AuditPage,
}

impl AuditApp {
    /// Called once before the first frame.
    pub fn new(mut state: State) -> Self {
        let page = AuditPage::new(&mut state.ctx);
        Self { state, page }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn page(&self) -> &AuditPage {
        &self.page
    }
}

impl eframe::App for AuditApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Command results arrive off-frame; wake egui so they get synced
        if !self.state.ctx.has_wake_hook() {
            let egui_ctx = ctx.clone();
            self.state
                .ctx
                .set_wake_hook(move || egui_ctx.request_repaint());
        }

        // Sync Compute for render
        self.state.ctx.sync_computes();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.page.ui(ui);
        });

        // Run commands enqueued during this frame
        self.state.ctx.flush_commands();
    }
}
