use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::CategoryId;

/// What a submitted draft looks like on the way to a sink.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPayload {
    pub question: String,
    pub selected_categories: Vec<CategoryId>,
    pub category_options: IndexMap<CategoryId, Vec<String>>,
    pub time_limit_minutes: u32,
    pub performance: u32,
    pub behavioral: u32,
    pub cultural_fit: u32,
}

impl AssessmentPayload {
    pub fn options(&self, category: CategoryId) -> &[String] {
        self.category_options
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
