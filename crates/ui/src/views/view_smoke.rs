use prep_core::model::{AppSettingsDraft, ExampleRun, RunReport, RunStatus, Session};
use prep_core::time::fixed_now;
use storage::repository::Storage;

use super::test_harness::{
    HarnessSeed, ViewKind, sample_question, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_start_form() {
    let mut harness = setup_view_harness(ViewKind::Home, HarnessSeed::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Interview topic"), "missing topic field in {html}");
    assert!(html.contains("Start practice"), "missing start button in {html}");
    assert!(!html.contains("No API key configured"), "unexpected warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_warns_without_credential() {
    let seed = HarnessSeed {
        provider_disabled: true,
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Home, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No API key configured"), "missing warning in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_without_session_points_home() {
    let mut harness = setup_view_harness(ViewKind::Practice, HarnessSeed::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No active session"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_view_smoke_renders_question() {
    let session = Session::create(sample_question("Two Sum"), fixed_now());
    let seed = HarnessSeed {
        session: Some(session),
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Practice, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Two Sum"), "missing title in {html}");
    assert!(html.contains("Question 1 of 1"), "missing counter in {html}");
    assert!(html.contains("Run"), "missing run button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_verdict() {
    let report = RunReport {
        status: RunStatus::WrongAnswer,
        examples: vec![
            ExampleRun {
                index: 0,
                passed: true,
                expected: "[0,1]".to_string(),
                actual: "[0,1]".to_string(),
                console: None,
            },
            ExampleRun {
                index: 1,
                passed: false,
                expected: "[1,2]".to_string(),
                actual: "[]".to_string(),
                console: Some("index out of range".to_string()),
            },
        ],
    };
    let seed = HarnessSeed {
        last_run: Some(report),
        ..HarnessSeed::default()
    };
    let mut harness = setup_view_harness(ViewKind::Results, seed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Wrong Answer"), "missing verdict in {html}");
    assert!(html.contains("1 of 2 examples passed"), "missing count in {html}");
    assert!(html.contains("Example 2"), "missing failed example in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_renders_stored_values() {
    let storage = Storage::in_memory();
    let draft = AppSettingsDraft {
        api_key: Some("sk-test".to_string()),
        api_model: Some("gpt-test".to_string()),
        api_base_url: Some("https://example.test/v1".to_string()),
    };
    let settings = draft.validate().expect("valid settings");
    storage
        .app_settings
        .save_settings(&settings)
        .await
        .expect("save settings");

    let mut harness =
        setup_view_harness_with_storage(ViewKind::Settings, HarnessSeed::default(), storage);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("gpt-test"), "missing stored model in {html}");
    assert!(html.contains("https://example.test/v1"), "missing base url in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn guidance_views_smoke_render_documents() {
    let mut harness = setup_view_harness(ViewKind::Learning, HarnessSeed::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Learning Path"), "missing title in {html}");
    assert!(html.contains("Practice daily"), "missing document in {html}");

    let mut harness = setup_view_harness(ViewKind::Expert, HarnessSeed::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Expert Advice"), "missing title in {html}");
}
