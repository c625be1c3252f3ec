use blog_architect::{
    Result,
    app::{Session, SessionSnapshot},
    blog::{BlogGenerator, InputParameters},
    config::{Config, LlmConfig},
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::fs;

pub const SAMPLE_OUTPUT: &str = "<h2>Market Overview</h2><p>The <a href=\"https://market-report.com/sample\">Cloud Security Solutions</a> market is growing.</p>";

/// Inputs from the reference example
pub fn sample_inputs() -> InputParameters {
    InputParameters::new(
        "Cloud Security Solutions",
        "https://market-report.com/sample",
        "https://picsum.photos/800/600",
    )
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.llm = LlmConfig {
        api_key: "test-api-key".to_string(),
        ..LlmConfig::default()
    };
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

pub fn create_test_state(client: Arc<dyn LlmClient>) -> AppState {
    let config = create_test_config();
    let generator = BlogGenerator::new(client, &config.llm);
    AppState::new(Session::from_config(&config), generator)
}

pub fn create_test_app(client: Arc<dyn LlmClient>) -> (Router, AppState) {
    let state = create_test_state(client);
    (server::router(state.clone()), state)
}

/// Polls the shared session until the in-flight generation has resolved.
pub async fn wait_until_settled(state: &AppState) -> SessionSnapshot {
    for _ in 0..200 {
        let snapshot = state.session.lock().await.snapshot();
        if !snapshot.is_generating {
            return snapshot;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("generation did not settle in time");
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8081
  logs:
    level: "debug"

llm:
  provider: "gemini"
  base_url: "http://localhost:9999"
  api_key: "test-api-key"
  model: "gemini-3-pro-preview"
  temperature: 0.7
  web_search: true

form:
  default_image_link: "https://picsum.photos/1200/800"

render:
  copy_ack_ms: 1500
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
