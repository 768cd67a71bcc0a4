use std::sync::Arc;

use orchestrator_core::config::OrchestratorConfig;
use orchestrator_core::mocks::{MemoryClipboard, ScriptedInference};
use orchestrator_core::session::{Feature, RequestState, SummarizerMode, SummaryLength, UploadedFile};
use orchestrator_core::submission::SubmitOutcome;
use orchestrator_core::RequestOrchestrator;

type Orchestrator = RequestOrchestrator<ScriptedInference, MemoryClipboard>;

fn orchestrator(inference: ScriptedInference, config: OrchestratorConfig) -> Orchestrator {
    RequestOrchestrator::new(inference, MemoryClipboard::default(), config)
}

fn assert_clean(orch: &Orchestrator) {
    let s = orch.snapshot();
    assert_eq!(s.summary(), "");
    assert_eq!(s.paraphrased_text(), "");
    assert_eq!(s.last_error(), None);
    assert!(s.file().is_none());
    assert_eq!(s.original_text(), "");
    assert_eq!(s.copy_feedback(), None);
}

#[tokio::test]
async fn every_feature_switch_resets_inputs_and_results() {
    let orch = orchestrator(ScriptedInference::ok("result"), OrchestratorConfig::default());
    let sequence = [
        Feature::Paraphraser,
        Feature::Paraphraser,
        Feature::Summarizer,
        Feature::Paraphraser,
        Feature::Summarizer,
        Feature::Summarizer,
    ];

    for feature in sequence {
        // Dirty the session in whatever way the current feature allows.
        orch.set_file(Some(UploadedFile::new("a.pdf", vec![1])));
        orch.set_text("some input");
        let _ = orch.submit().await;
        orch.copy_result().await;

        orch.select_feature(feature);
        assert_eq!(orch.snapshot().active_feature(), feature);
        assert_clean(&orch);
    }
}

#[tokio::test]
async fn summary_length_survives_feature_switch() {
    let orch = orchestrator(ScriptedInference::ok("r"), OrchestratorConfig::default());
    orch.set_summary_length(SummaryLength::Twenty);
    orch.select_feature(Feature::Paraphraser);
    orch.select_feature(Feature::Summarizer);
    assert_eq!(orch.snapshot().summary_length(), SummaryLength::Twenty);
}

#[tokio::test]
async fn paraphrase_input_is_truncated_at_capture() {
    let orch = orchestrator(
        ScriptedInference::ok("short"),
        OrchestratorConfig::default().with_paraphrase_max_chars(500),
    );
    orch.select_feature(Feature::Paraphraser);
    orch.set_text("x".repeat(501));

    assert_eq!(orch.snapshot().original_text().len(), 500);
    assert_eq!(orch.submit().await, SubmitOutcome::Succeeded);
}

#[tokio::test]
async fn stale_summary_does_not_leak_into_paraphraser() {
    let (inference, gate) = ScriptedInference::gated(vec![Ok("late summary".into())]);
    let orch = Arc::new(orchestrator(inference, OrchestratorConfig::default()));
    orch.select_summarizer_mode(SummarizerMode::Text);
    orch.set_text("article");

    let pending = tokio::spawn({
        let orch = orch.clone();
        async move { orch.submit().await }
    });
    while !orch.with_session(|s| s.is_submitting()) {
        tokio::task::yield_now().await;
    }

    orch.select_feature(Feature::Paraphraser);
    orch.set_text("new paraphrase input");
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    let s = orch.snapshot();
    assert_eq!(s.summary(), "");
    assert_eq!(s.paraphrased_text(), "");
    assert_eq!(s.original_text(), "new paraphrase input");
    assert_eq!(s.request(), &RequestState::Idle);
}

#[tokio::test]
async fn switching_back_does_not_revive_old_request() {
    let (inference, gate) = ScriptedInference::gated(vec![Ok("old".into())]);
    let orch = Arc::new(orchestrator(inference, OrchestratorConfig::default()));
    orch.select_summarizer_mode(SummarizerMode::Text);
    orch.set_text("article");

    let pending = tokio::spawn({
        let orch = orch.clone();
        async move { orch.submit().await }
    });
    while !orch.with_session(|s| s.is_submitting()) {
        tokio::task::yield_now().await;
    }

    orch.select_feature(Feature::Paraphraser);
    orch.select_feature(Feature::Summarizer);
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), SubmitOutcome::Discarded);
    assert_eq!(orch.snapshot().summary(), "");
}

#[tokio::test]
async fn mode_toggle_keeps_text_and_drops_file() {
    let orch = orchestrator(ScriptedInference::ok("r"), OrchestratorConfig::default());
    orch.set_file(Some(UploadedFile::new("doc.pdf", vec![9])));
    orch.set_text("draft");

    orch.select_summarizer_mode(SummarizerMode::Text);
    orch.select_summarizer_mode(SummarizerMode::File);

    let s = orch.snapshot();
    assert!(s.file().is_none());
    assert_eq!(s.original_text(), "draft");
}
