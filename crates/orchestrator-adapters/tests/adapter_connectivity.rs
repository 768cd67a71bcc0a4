use axum::{http::StatusCode, routing::post, Json, Router};
use inference_client::Client;
use orchestrator_adapters::HttpInference;
use orchestrator_core::config::OrchestratorConfig;
use orchestrator_core::mocks::MemoryClipboard;
use orchestrator_core::session::{Feature, SummarizerMode, UploadedFile};
use orchestrator_core::submission::{SubmitOutcome, BACKEND_NOT_CONFIGURED, CORRUPT_FILE_MESSAGE};
use orchestrator_core::RequestOrchestrator;
use serde_json::json;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn orchestrator(inference: HttpInference) -> RequestOrchestrator<HttpInference, MemoryClipboard> {
    RequestOrchestrator::new(inference, MemoryClipboard::default(), OrchestratorConfig::default())
}

#[tokio::test]
async fn summary_flows_from_backend_into_session() {
    let app = Router::new().route(
        "/api/summarize",
        post(|| async { Json(json!({ "summary": "Short version." })) }),
    );
    let base = spawn_backend(app).await;
    let orch = orchestrator(HttpInference::new(Client::new(base).unwrap()));

    orch.select_summarizer_mode(SummarizerMode::Text);
    orch.set_text("A very long text that needs summarizing.");

    assert_eq!(orch.submit().await, SubmitOutcome::Succeeded);
    assert_eq!(orch.snapshot().summary(), "Short version.");
}

#[tokio::test]
async fn backend_error_message_reaches_the_user() {
    let app = Router::new().route(
        "/api/paraphrase",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "Teks tidak ditemukan" }))) }),
    );
    let base = spawn_backend(app).await;
    let orch = orchestrator(HttpInference::new(Client::new(base).unwrap()));

    orch.select_feature(Feature::Paraphraser);
    orch.set_text("hello");

    assert_eq!(orch.submit().await, SubmitOutcome::Failed("Teks tidak ditemukan".into()));
    assert_eq!(orch.snapshot().last_error(), Some("Teks tidak ditemukan"));
}

#[tokio::test]
async fn object_dump_from_upload_becomes_corrupt_file_message() {
    let app = Router::new().route(
        "/api/summarize",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "[object Object]" }))) }),
    );
    let base = spawn_backend(app).await;
    let orch = orchestrator(HttpInference::new(Client::new(base).unwrap()));

    orch.set_file(Some(UploadedFile::new("broken.pdf", vec![0xde, 0xad])));

    assert_eq!(orch.submit().await, SubmitOutcome::Failed(CORRUPT_FILE_MESSAGE.into()));
}

#[tokio::test]
async fn missing_backend_surfaces_configuration_error() {
    let orch = orchestrator(HttpInference::unconfigured());
    orch.select_feature(Feature::Paraphraser);
    orch.set_text("hello");

    assert_eq!(orch.submit().await, SubmitOutcome::Failed(BACKEND_NOT_CONFIGURED.into()));
    assert!(!orch.with_session(|s| s.is_submitting()));
}
