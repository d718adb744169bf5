use async_trait::async_trait;
use log::{info, warn};

use super::{Company, CompanyContextForm, CompanyDirectory};
use crate::api::ApiClient;
use crate::error::{ApiError, NetworkError};

const COMPANIES_PATH: &str = "auth/companies/";

/// Company directory backed by `GET/POST /auth/companies/`.
#[derive(Clone)]
pub struct HttpCompanyDirectory {
    api: ApiClient,
}

impl HttpCompanyDirectory {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CompanyDirectory for HttpCompanyDirectory {
    async fn fetch_companies(&self) -> Result<Vec<Company>, NetworkError> {
        info!("🏢 Fetching company directory");
        let companies: Vec<Company> = self.api.get_json(COMPANIES_PATH).await.map_err(|e| {
            warn!("❌ Company directory unavailable: {}", e);
            e
        })?;
        info!("✅ Loaded {} companies", companies.len());
        Ok(companies)
    }

    async fn create_company(&self, form: &CompanyContextForm) -> Result<Company, ApiError> {
        info!("🏢 Saving company context: {}", form.company_name);
        let request = form.to_request(self.api.session().current().map(|s| s.user.id));
        let company: Company = self
            .api
            .post_json(COMPANIES_PATH, &request)
            .await
            .map_err(ApiError::from_network)?;
        info!("✅ Company context saved with id {:?}", company.id);
        Ok(company)
    }
}
