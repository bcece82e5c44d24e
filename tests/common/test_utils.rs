use ollama_generate::{Result, llm::OllamaClient};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

pub const GENERATE_PATH: &str = "/api/generate";

pub const HAIKU: &str = "Lines of logic flow\nBugs hide in silent shadows\nCoffee fuels the fix";

/// Request body the default configuration produces
pub fn default_request_body() -> Value {
    json!({
        "model": "gemma2:2b",
        "prompt": "Write a haiku about coding",
        "stream": false
    })
}

/// Point a client at the mock server's generate route
pub fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::with_endpoint(format!("{}{}", server.uri(), GENERATE_PATH))
}

/// Mount a generate handler that only answers the default request body
pub async fn mount_generate(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(default_request_body()))
        .respond_with(response)
        .mount(server)
        .await;
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
generation:
  model: "llama3.2:3b"
  prompt: "Tell me a story about a Rust programmer."

logs:
  level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
generation:
  model: ["not", "a", "string"]
"#;
