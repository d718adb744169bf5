use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use super::{AssessmentPayload, CategoryId};
use crate::api::ApiClient;
use crate::directory::Company;
use crate::error::ApiError;

/// Where a submitted assessment goes.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, payload: &AssessmentPayload, companies: &[Company]) -> Result<(), ApiError>;
}

/// Writes the payload to the log and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, payload: &AssessmentPayload, _companies: &[Company]) -> Result<(), ApiError> {
        let json = serde_json::to_string(payload).unwrap_or_else(|e| format!("<unserializable: {}>", e));
        info!("📝 Assessment submitted: {}", json);
        Ok(())
    }
}

/// The backend's prompt record, which the assessment generator reads from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PromptRecord {
    pub prompt_text: String,
    pub time_limit: u32,
    pub difficulty: String,
    pub question_types: String,
    pub skills: Vec<String>,
    pub company_context: Option<i64>,
    pub performance_weight: u32,
    pub behavioral_weight: u32,
    pub cultural_fit_weight: u32,
}

impl PromptRecord {
    pub fn from_payload(payload: &AssessmentPayload, companies: &[Company]) -> Self {
        let difficulty = payload
            .options(CategoryId::Difficulty)
            .first()
            .map(|d| d.to_lowercase())
            .unwrap_or_else(|| "medium".to_string());

        let company_context = payload
            .options(CategoryId::CompanyContext)
            .first()
            .and_then(|name| {
                companies
                    .iter()
                    .find(|c| c.display_name() == Some(name.as_str()))
                    .and_then(|c| c.id)
            });

        Self {
            prompt_text: payload.question.clone(),
            time_limit: payload.time_limit_minutes,
            difficulty,
            question_types: payload.options(CategoryId::QuestionTypes).join(", "),
            skills: payload.options(CategoryId::Skills).to_vec(),
            company_context,
            performance_weight: payload.performance,
            behavioral_weight: payload.behavioral,
            cultural_fit_weight: payload.cultural_fit,
        }
    }
}

#[derive(Deserialize)]
struct PromptCreated {
    #[serde(default)]
    id: Option<i64>,
}

/// Posts the assessment as a prompt record to the API.
#[derive(Clone)]
pub struct PromptSink {
    api: ApiClient,
    path: String,
}

impl PromptSink {
    pub fn new(api: ApiClient, path: impl Into<String>) -> Self {
        Self {
            api,
            path: path.into(),
        }
    }
}

#[async_trait]
impl SubmissionSink for PromptSink {
    async fn submit(&self, payload: &AssessmentPayload, companies: &[Company]) -> Result<(), ApiError> {
        let record = PromptRecord::from_payload(payload, companies);
        let created: PromptCreated = self
            .api
            .post_json(&self.path, &record)
            .await
            .map_err(ApiError::from_network)?;
        info!("✅ Prompt stored with id {:?}", created.id);
        Ok(())
    }
}
