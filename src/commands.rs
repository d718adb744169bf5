use std::sync::Arc;

use log::{info, warn};
use parking_lot::Mutex;
use tauri::{Builder, State};

use crate::api::ApiClient;
use crate::assessment::{
    AssessmentPayload, CategoryId, ConfiguratorHandle, FormSnapshot, PanelView, PromptSink,
    WeightState, WeightStrategy,
};
use crate::auth::{AuthClient, AuthSession, LoginForm, SessionStore, SignupForm, UserInfo};
use crate::config::AppConfig;
use crate::error::NetworkError;
use crate::directory::{Company, CompanyContextForm, ContextManager, HttpCompanyDirectory};
use crate::gallery::{Gallery, SavedAssessment, TypeFilter};
use crate::preferences::{Language, Preferences, PreferencesProvider, Theme};
use crate::prompts::{LocalPrompt, PromptForm, PromptList};

/// Everything the webview talks to, managed by Tauri.
pub struct AppState {
    strategy: WeightStrategy,
    auth: AuthClient,
    directory: Arc<HttpCompanyDirectory>,
    sink: PromptSink,
    configurator: Mutex<Option<Arc<ConfiguratorHandle>>>,
    contexts: tokio::sync::Mutex<ContextManager>,
    gallery: Mutex<Gallery>,
    prompts: Mutex<PromptList>,
    preferences: PreferencesProvider,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, NetworkError> {
        let api = ApiClient::new(config, SessionStore::default())?;
        let directory = Arc::new(HttpCompanyDirectory::new(api.clone()));

        Ok(Self {
            strategy: config.weight_strategy,
            auth: AuthClient::new(api.clone()),
            sink: PromptSink::new(api, config.prompts_path.clone()),
            contexts: tokio::sync::Mutex::new(ContextManager::new(directory.clone())),
            directory,
            configurator: Mutex::new(None),
            gallery: Mutex::new(Gallery::with_samples()),
            prompts: Mutex::new(PromptList::default()),
            preferences: PreferencesProvider::default(),
        })
    }

    fn configurator(&self) -> Result<Arc<ConfiguratorHandle>, String> {
        self.configurator
            .lock()
            .clone()
            .ok_or_else(|| "Assessment form is not mounted".to_string())
    }
}

fn parse_category(category: &str) -> Result<CategoryId, String> {
    category.parse().map_err(|e: crate::ConfiguratorError| e.to_string())
}

// Assessment form

#[tauri::command]
async fn mount_configurator(state: State<'_, AppState>) -> Result<FormSnapshot, String> {
    let handle = Arc::new(ConfiguratorHandle::mount(state.directory.clone(), state.strategy));
    let snapshot = handle.read(|c| c.snapshot());
    if state.configurator.lock().replace(handle).is_some() {
        info!("♻️ Replaced previously mounted assessment form");
    }
    Ok(snapshot)
}

#[tauri::command]
fn unmount_configurator(state: State<'_, AppState>) {
    if state.configurator.lock().take().is_some() {
        info!("🧩 Assessment form unmounted");
    }
}

#[tauri::command]
fn get_form_state(state: State<'_, AppState>) -> Result<FormSnapshot, String> {
    Ok(state.configurator()?.read(|c| c.snapshot()))
}

#[tauri::command]
fn set_question(state: State<'_, AppState>, question: String) -> Result<(), String> {
    state.configurator()?.update(|c| c.set_question(question));
    Ok(())
}

#[tauri::command]
fn toggle_category(state: State<'_, AppState>, category: String) -> Result<FormSnapshot, String> {
    let category = parse_category(&category)?;
    Ok(state.configurator()?.update(|c| {
        c.toggle_category(category);
        c.snapshot()
    }))
}

#[tauri::command]
fn toggle_option(
    state: State<'_, AppState>,
    category: String,
    option: String,
) -> Result<FormSnapshot, String> {
    let category = parse_category(&category)?;
    state.configurator()?.update(|c| {
        c.toggle_option(category, &option).map_err(|e| e.to_string())?;
        Ok(c.snapshot())
    })
}

#[tauri::command]
fn get_panel(state: State<'_, AppState>, category: String) -> Result<PanelView, String> {
    let category = parse_category(&category)?;
    Ok(state.configurator()?.read(|c| c.panel(category)))
}

#[tauri::command]
fn set_time_limit(state: State<'_, AppState>, minutes: i64) -> Result<u32, String> {
    Ok(state.configurator()?.update(|c| c.set_time_limit(minutes)))
}

#[tauri::command]
fn set_performance_weight(state: State<'_, AppState>, value: u32) -> Result<WeightState, String> {
    Ok(state.configurator()?.update(|c| c.set_performance_weight(value)))
}

#[tauri::command]
fn retry_company_fetch(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.configurator()?.retry_companies())
}

#[tauri::command]
async fn submit_assessment(state: State<'_, AppState>) -> Result<AssessmentPayload, String> {
    let handle = state.configurator()?;
    handle.submit(&state.sink).await.map_err(|e| {
        warn!("❌ Assessment submission failed: {}", e);
        e.to_string()
    })
}

// Authentication

#[tauri::command]
async fn login(state: State<'_, AppState>, form: LoginForm) -> Result<AuthSession, String> {
    state.auth.login(&form).await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn register(state: State<'_, AppState>, form: SignupForm) -> Result<UserInfo, String> {
    state.auth.register(&form).await.map_err(|e| e.to_string())
}

#[tauri::command]
fn logout(state: State<'_, AppState>) {
    state.auth.logout();
}

// Company context

#[tauri::command]
async fn save_company_context(
    state: State<'_, AppState>,
    form: CompanyContextForm,
) -> Result<Company, String> {
    let mut contexts = state.contexts.lock().await;
    *contexts.form_mut() = form;
    contexts.save().await.map_err(|e| e.to_string())
}

#[tauri::command]
async fn list_company_contexts(state: State<'_, AppState>) -> Result<Vec<Company>, String> {
    Ok(state.contexts.lock().await.saved().to_vec())
}

// Gallery

#[tauri::command]
fn filter_assessments(
    state: State<'_, AppState>,
    query: String,
    kind: TypeFilter,
) -> Vec<SavedAssessment> {
    state
        .gallery
        .lock()
        .filter(&query, kind)
        .into_iter()
        .cloned()
        .collect()
}

#[tauri::command]
fn delete_assessment(state: State<'_, AppState>, id: u32) -> bool {
    state.gallery.lock().remove(id).is_some()
}

// Prompts

#[tauri::command]
fn add_prompt(state: State<'_, AppState>, form: PromptForm) -> Result<LocalPrompt, String> {
    let mut prompts = state.prompts.lock();
    *prompts.form_mut() = form;
    prompts.add().cloned().map_err(|e| e.to_string())
}

#[tauri::command]
fn list_prompts(state: State<'_, AppState>) -> Vec<LocalPrompt> {
    state.prompts.lock().all().to_vec()
}

#[tauri::command]
fn delete_prompt(state: State<'_, AppState>, id: uuid::Uuid) -> bool {
    state.prompts.lock().remove(id).is_some()
}

// Settings

#[tauri::command]
fn get_preferences(state: State<'_, AppState>) -> Preferences {
    state.preferences.current()
}

#[tauri::command]
fn toggle_dark_mode(state: State<'_, AppState>) -> Theme {
    state.preferences.toggle_dark_mode()
}

#[tauri::command]
fn set_language(state: State<'_, AppState>, language: Language) {
    state.preferences.set_language(language);
}

#[tauri::command]
fn set_auto_select(state: State<'_, AppState>, enabled: bool) {
    state.preferences.set_auto_select(enabled);
}

pub fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("WorkForce starting against {}", config.api_url);

    Builder::default()
        .manage(AppState::new(&config)?)
        .invoke_handler(tauri::generate_handler![
            mount_configurator,
            unmount_configurator,
            get_form_state,
            set_question,
            toggle_category,
            toggle_option,
            get_panel,
            set_time_limit,
            set_performance_weight,
            retry_company_fetch,
            submit_assessment,
            login,
            register,
            logout,
            save_company_context,
            list_company_contexts,
            filter_assessments,
            delete_assessment,
            add_prompt,
            list_prompts,
            delete_prompt,
            get_preferences,
            toggle_dark_mode,
            set_language,
            set_auto_select,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}
