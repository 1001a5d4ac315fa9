use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use prep_core::model::{
    Difficulty, Language, LanguageMap, Question, QuestionId, RunReport, RunStatus, Session,
    Solution,
};
use prep_core::time::fixed_clock;
use services::{
    AppServices, AppSettingsService, ContentProvider, GuidanceKind, GuidanceService,
    ProviderError, RunService, SessionBuilder, TranslationService,
};
use storage::repository::Storage;

use crate::context::{AppContext, SharedState, UiApp};
use crate::views::{
    ExpertView, HomeView, ImportView, LearningView, PracticeView, ResultsView, SettingsView,
};

pub fn sample_question(title: &str) -> Question {
    Question {
        id: QuestionId::new(title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        difficulty: Difficulty::Easy,
        topic: "arrays".to_string(),
        description: "Given an array, do the thing.".to_string(),
        constraints: vec!["1 <= n <= 100".to_string()],
        examples: Vec::new(),
        starter_code: LanguageMap::from_fn(|lang| format!("// {} starter", lang.as_str())),
        solution: Solution::default(),
        hints: vec!["Think about a hash map.".to_string()],
    }
}

/// Provider with canned answers, so views can render without a network.
struct StubProvider;

#[async_trait]
impl ContentProvider for StubProvider {
    async fn generate_question(
        &self,
        topic: &str,
        index: usize,
    ) -> Result<Question, ProviderError> {
        Ok(sample_question(&format!("{topic} {index}")))
    }

    async fn fetch_question(&self, title: &str) -> Result<Question, ProviderError> {
        Ok(sample_question(title))
    }

    async fn evaluate(
        &self,
        _question: &Question,
        _language: Language,
        _code: &str,
    ) -> Result<RunReport, ProviderError> {
        Ok(RunReport {
            status: RunStatus::Accepted,
            examples: Vec::new(),
        })
    }

    async fn translate_solution(
        &self,
        question: &Question,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        Ok(format!("# {} in {target_language}", question.title))
    }

    async fn guidance(&self, _kind: GuidanceKind) -> Result<String, ProviderError> {
        Ok("## Step one\nPractice daily.".to_string())
    }
}

struct TestApp {
    services: AppServices,
    provider_enabled: bool,
}

impl UiApp for TestApp {
    fn provider_enabled(&self) -> bool {
        self.provider_enabled
    }

    fn session_builder(&self) -> Arc<SessionBuilder> {
        self.services.session_builder()
    }

    fn run_service(&self) -> Arc<RunService> {
        self.services.run_service()
    }

    fn translations(&self) -> Arc<TranslationService> {
        self.services.translations()
    }

    fn guidance(&self) -> Arc<GuidanceService> {
        self.services.guidance()
    }

    fn app_settings(&self) -> Arc<AppSettingsService> {
        self.services.app_settings()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Import,
    Practice,
    Results,
    Settings,
    Learning,
    Expert,
}

#[derive(Clone, Default)]
pub struct HarnessSeed {
    pub provider_disabled: bool,
    pub session: Option<Session>,
    pub last_run: Option<RunReport>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: HarnessSeed,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| AppContext::new(&app));
    use_context_provider(|| SharedState {
        session: Signal::new(props.seed.session.clone()),
        last_run: Signal::new(props.seed.last_run.clone()),
        error: Signal::new(None),
        building: Signal::new(false),
    });
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Import => rsx! { ImportView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Results => rsx! { ResultsView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
        ViewKind::Learning => rsx! { LearningView {} },
        ViewKind::Expert => rsx! { ExpertView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, seed: HarnessSeed) -> ViewHarness {
    setup_view_harness_with_storage(view, seed, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    seed: HarnessSeed,
    storage: Storage,
) -> ViewHarness {
    let services = AppServices::with_provider(fixed_clock(), Arc::new(StubProvider), &storage);
    let app = Arc::new(TestApp {
        services,
        provider_enabled: !seed.provider_disabled,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom, storage }
}
