#![allow(dead_code)]

use college_chat::Application;
use college_chat::config::Settings;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-gemini-key";
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

pub const FALLBACK: &str = "Sorry 😕 the system is temporarily unavailable. Please try again later.";

pub struct TestApp {
    pub address: String,
    pub gemini: MockServer,
}

impl TestApp {
    /// Spawn the app on a random port, pointed at a fresh Gemini stub.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    pub async fn spawn_with(customize: impl FnOnce(&mut Settings)) -> Self {
        let gemini = MockServer::start().await;

        let mut settings = test_settings(&format!("{}{GEMINI_PATH}", gemini.uri()));
        customize(&mut settings);

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self { address, gemini }
    }

    pub async fn ask(&self, question: &str) -> reqwest::Response {
        http_client()
            .post(format!("{}/api/chat", self.address))
            .json(&json!({ "question": question }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Ask and return the `answer` field of a 200 response.
    pub async fn answer(&self, question: &str) -> String {
        let resp = self.ask(question).await;
        assert_eq!(resp.status(), 200);
        let data: serde_json::Value = resp.json().await.unwrap();
        data["answer"].as_str().unwrap().to_string()
    }
}

pub fn test_settings(gemini_api_url: &str) -> Settings {
    Settings {
        app_name: "College Chatbot API".into(),
        app_version: "1.0.0".into(),
        environment: "test".into(),
        host: "127.0.0.1".into(),
        port: 0,
        gemini_api_key: TEST_API_KEY.into(),
        gemini_api_url: gemini_api_url.into(),
        gemini_timeout: None,
        cors_origins: "*".into(),
        static_dir: "does-not-exist".into(),
        log_level: "debug".into(),
        log_format: "pretty".into(),
    }
}

pub fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
}

/// A well-formed generateContent response carrying `text`.
pub fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

/// Mount a stub that answers every generateContent call with `response`.
pub async fn stub_gemini(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mount a stub that fails the test if Gemini is ever called.
pub async fn forbid_gemini(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("unexpected")))
        .expect(0)
        .mount(server)
        .await;
}
