#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use audit_business::{UserRecord, UsersFetcher, UsersListCompute};
use audit_states::StateCtx;
use audit_ui::AuditApp;
use audit_ui::state::State;
use audit_ui::widgets::AuditPage;
use chrono::{TimeZone, Utc};
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DEFAULT_NETWORK_WAIT_MS: u64 = 100;

/// Let spawned commands and the mock server make progress.
pub async fn wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

pub struct TestCtx<'a, T = AuditApp> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

impl<'a> TestCtx<'a, AuditApp> {
    /// The full app against a mock server answering `/api/users` with `users`.
    pub async fn new_app_with_users(users: serde_json::Value) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(200).set_body_json(users)).await
    }

    /// Like [`Self::new_app_with_users`], with the response held back for `delay`.
    pub async fn new_app_with_delayed_users(users: serde_json::Value, delay: Duration) -> Self {
        Self::new_app_with_response(
            ResponseTemplate::new(200)
                .set_body_json(users)
                .set_delay(delay),
        )
        .await
    }

    async fn new_app_with_response(response: ResponseTemplate) -> Self {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(response)
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = AuditApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1000.0, 800.0))
            .build_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

/// Fetcher that only counts calls.
#[derive(Clone, Default)]
pub struct CountingFetcher {
    pub calls: Rc<Cell<usize>>,
}

impl UsersFetcher for CountingFetcher {
    fn fetch_all_users(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// A bare `AuditPage` over its own ctx, fed by hand instead of over the network.
pub struct PageState {
    pub ctx: StateCtx,
    pub page: AuditPage,
}

impl PageState {
    pub fn new(fetcher: CountingFetcher) -> Self {
        let mut ctx = StateCtx::new();
        ctx.record_compute(UsersListCompute::default());
        let source = ctx.subscribe::<UsersListCompute>();
        let page = AuditPage::with_fetcher(source, Box::new(fetcher));
        Self { ctx, page }
    }

    /// Publish `compute` the way a finished command would.
    pub fn publish(&mut self, compute: UsersListCompute) {
        self.ctx.updater().set(compute);
        self.ctx.sync_computes();
    }
}

pub fn page_harness<'a>(fetcher: CountingFetcher) -> Harness<'a, PageState> {
    Harness::builder()
        .with_size(egui::vec2(1000.0, 800.0))
        .build_ui_state(
            |ui, state: &mut PageState| {
                state.page.ui(ui);
            },
            PageState::new(fetcher),
        )
}

/// `count` users with first names `Aname`, `Bname`, ... in reverse alphabetical order.
pub fn lettered_users(count: u8) -> Vec<UserRecord> {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    (0..count)
        .rev()
        .map(|i| {
            let letter = char::from(b'A' + i);
            UserRecord {
                id: (u64::from(i) + 1).into(),
                first_name: format!("{letter}name"),
                last_name: format!("{letter}last"),
                username: format!("user_{letter}"),
                created_date: created,
            }
        })
        .collect()
}
