use serde::Serialize;
use uuid::Uuid;

use super::{AssessmentPayload, SelectionState, TimeLimit, WeightState};

/// The in-progress, unsaved assessment. A fresh one replaces it after submit.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DraftAssessment {
    pub id: Uuid,
    pub question: String,
    pub selection: SelectionState,
    pub weights: WeightState,
    pub time_limit: TimeLimit,
}

impl Default for DraftAssessment {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            question: String::new(),
            selection: SelectionState::default(),
            weights: WeightState::default(),
            time_limit: TimeLimit::default(),
        }
    }
}

impl DraftAssessment {
    pub fn to_payload(&self) -> AssessmentPayload {
        AssessmentPayload {
            question: self.question.clone(),
            selected_categories: self.selection.selected_categories.iter().copied().collect(),
            category_options: self.selection.category_options.clone(),
            time_limit_minutes: self.time_limit.minutes(),
            performance: self.weights.performance,
            behavioral: self.weights.behavioral,
            cultural_fit: self.weights.cultural_fit,
        }
    }
}
