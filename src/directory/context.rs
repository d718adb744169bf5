use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Company, CompanyDirectory};
use crate::error::ApiError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompanySize {
    #[default]
    #[serde(rename = "1-5")]
    OneToFive,
    #[serde(rename = "6-10")]
    SixToTen,
    #[serde(rename = "11-50")]
    ElevenToFifty,
    #[serde(rename = "51-100")]
    FiftyOneToHundred,
    #[serde(rename = "100+")]
    OverHundred,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStructure {
    #[default]
    Startup,
    SmallBusiness,
    Enterprise,
    Nonprofit,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkEnvironment {
    #[default]
    Remote,
    Hybrid,
    OfficeBased,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationStyle {
    #[default]
    AsyncFirst,
    RealTime,
    Hybrid,
}

/// The "new company context" form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct CompanyContextForm {
    #[validate(length(min = 1, max = 255, message = "Company name is required"))]
    pub company_name: String,
    pub company_size: CompanySize,
    #[validate(length(max = 255))]
    pub headquarters: String,
    #[validate(range(min = 1800, max = 2100))]
    pub year_founded: Option<i32>,
    pub company_structure: CompanyStructure,
    pub work_environment: WorkEnvironment,
    pub communication_style: CommunicationStyle,
    pub team_structure_overview: String,
}

/// Body of `POST /auth/companies/`; the backend wants the owning user's id alongside.
#[derive(Serialize, Debug)]
pub struct CompanyRequest<'a> {
    #[serde(flatten)]
    pub form: &'a CompanyContextForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl CompanyContextForm {
    pub fn to_request(&self, user: Option<String>) -> CompanyRequest<'_> {
        CompanyRequest { form: self, user }
    }
}

/// State behind the company-context screen: the saved list and the modal form.
pub struct ContextManager {
    directory: Arc<dyn CompanyDirectory>,
    saved: Vec<Company>,
    form: CompanyContextForm,
    modal_open: bool,
}

impl ContextManager {
    pub fn new(directory: Arc<dyn CompanyDirectory>) -> Self {
        Self {
            directory,
            saved: Vec::new(),
            form: CompanyContextForm::default(),
            modal_open: false,
        }
    }

    pub fn saved(&self) -> &[Company] {
        &self.saved
    }

    pub fn form(&self) -> &CompanyContextForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CompanyContextForm {
        &mut self.form
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Validates and posts the form. On success the company joins the saved list, the
    /// form resets and the modal closes; on failure everything is left for the user to fix.
    pub async fn save(&mut self) -> Result<Company, ApiError> {
        self.form.validate().map_err(|e| {
            warn!("⚠️ Company context form invalid: {}", e);
            e
        })?;

        let company = self.directory.create_company(&self.form).await?;
        info!("💾 Saved company context {:?}", company.display_name());

        self.saved.push(company.clone());
        self.form = CompanyContextForm::default();
        self.close_modal();
        Ok(company)
    }
}
