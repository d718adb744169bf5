pub mod client;
pub mod context;

pub use client::*;
pub use context::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, NetworkError};

/// A company as listed by the directory. Only the fields the app reads are kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Company {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "company_name", default)]
    pub name: Option<String>,
}

impl Company {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    /// Trimmed name, `None` when missing or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Source of company records for the company-context category and manager.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<Company>, NetworkError>;

    async fn create_company(&self, form: &CompanyContextForm) -> Result<Company, ApiError>;
}
