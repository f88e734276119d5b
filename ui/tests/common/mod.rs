use std::time::Duration;

use holocron_ui::HolocronApp;
use holocron_ui::state::State;
use holocron_ui::widgets::data_table;
use egui_kittest::Harness;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a, T = State> {
    mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Step frames with real sleeps in between so spawned fetches can finish.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, State> {
    /// Harness rendering only the people table, driven the way the app drives it.
    #[allow(unused)]
    pub async fn people_table(mock_server: MockServer) -> Self {
        let state = State::test(mock_server.uri());
        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                let now = state.now();
                state.people.mount();
                state.people.poll(now);
                data_table(ui, &mut state.people, now);
            },
            state,
        );

        Self {
            mock_server,
            harness,
        }
    }
}

impl<'a> TestCtx<'a, HolocronApp> {
    #[allow(unused)]
    pub async fn new_app(mock_server: MockServer) -> Self {
        let app = HolocronApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }
}

#[allow(unused)]
pub fn people_page() -> serde_json::Value {
    serde_json::json!({
        "results": [
            { "id": 1, "name": "Luke Skywalker", "created": "2023-01-01T00:00:00Z" },
            { "id": 2, "name": "C-3PO", "created": "2023-02-01T12:30:00Z" }
        ],
        "count": 42
    })
}

/// Mock server answering every `/api/people` request with [`people_page`].
///
/// The catch-all sits below wiremock's default priority so tests can mount
/// stricter mocks with `.expect(n)` that win over it.
#[allow(unused)]
pub async fn people_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/people"))
        .respond_with(ResponseTemplate::new(200).set_body_json(people_page()))
        .with_priority(10)
        .mount(&mock_server)
        .await;

    mock_server
}

#[allow(unused)]
pub async fn request_count(mock_server: &MockServer) -> usize {
    mock_server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
