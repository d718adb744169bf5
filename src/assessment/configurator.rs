use log::{debug, info, warn};
use serde::Serialize;
use uuid::Uuid;

use super::weights::{PERFORMANCE_MAX, TIME_LIMIT_MAX, TIME_LIMIT_MIN, TIME_LIMIT_STEP, WEIGHT_TOTAL};
use super::{
    options_for, AssessmentPayload, CategoryId, DraftAssessment, SelectionState, TimeLimit,
    WeightState, WeightStrategy,
};
use crate::directory::Company;
use crate::error::{ConfiguratorError, NetworkError, Result};

/// Where the one-shot company fetch stands.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum CompanyLoad {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Company>),
    Failed(NetworkError),
}

/// Identifies one issued company fetch. Results carrying a stale ticket are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What a view renders for one category.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelView {
    Closed,
    Options {
        options: Vec<String>,
        selected: Vec<String>,
        multiple: bool,
    },
    Slider {
        value: u32,
        min: u32,
        max: u32,
        step: u32,
        editable: bool,
    },
    CompanyLoading,
    CompanyError {
        message: String,
    },
}

/// Serializable picture of the whole form, handed to the view layer.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub draft: DraftAssessment,
    pub open_panel: Option<CategoryId>,
    pub strategy: WeightStrategy,
    pub companies: CompanyLoad,
}

/// State of the "create assessment" form.
///
/// Owns the draft, the single open option panel and the company list fetched for the
/// company-context category. All mutation goes through `&mut self`; the async fetch only
/// reaches it through [`Configurator::finish_company_fetch`].
#[derive(Debug)]
pub struct Configurator {
    draft: DraftAssessment,
    strategy: WeightStrategy,
    open_panel: Option<CategoryId>,
    companies: CompanyLoad,
    fetch_generation: u64,
}

impl Configurator {
    pub fn new(strategy: WeightStrategy) -> Self {
        Self {
            draft: DraftAssessment::default(),
            strategy,
            open_panel: None,
            companies: CompanyLoad::Idle,
            fetch_generation: 0,
        }
    }

    pub fn draft(&self) -> &DraftAssessment {
        &self.draft
    }

    pub fn selection(&self) -> &SelectionState {
        &self.draft.selection
    }

    pub fn weights(&self) -> WeightState {
        self.draft.weights
    }

    pub fn time_limit(&self) -> TimeLimit {
        self.draft.time_limit
    }

    pub fn strategy(&self) -> WeightStrategy {
        self.strategy
    }

    pub fn question(&self) -> &str {
        &self.draft.question
    }

    pub fn set_question(&mut self, question: impl Into<String>) {
        self.draft.question = question.into();
    }

    pub fn open_panel(&self) -> Option<CategoryId> {
        self.open_panel
    }

    pub fn is_panel_open(&self, category: CategoryId) -> bool {
        self.open_panel == Some(category)
    }

    /// Activates or deactivates `category` and flips its panel. Deactivation empties the
    /// category's options. Returns whether the category is now active.
    pub fn toggle_category(&mut self, category: CategoryId) -> bool {
        let active = self.draft.selection.toggle(category);
        self.open_panel = if self.is_panel_open(category) {
            None
        } else {
            Some(category)
        };
        debug!(
            "Category {} {} (open panel: {:?})",
            category,
            if active { "activated" } else { "deactivated" },
            self.open_panel
        );
        active
    }

    /// Picks or unpicks `option` on a non-slider category. Difficulty keeps a single
    /// choice; the others toggle membership.
    ///
    /// An inactive category is only reachable through its open panel (re-clicking an
    /// active category whose panel was closed). Picking from that panel activates it.
    pub fn toggle_option(&mut self, category: CategoryId, option: &str) -> Result<()> {
        if category.is_slider() {
            warn!("⚠️ Ignoring option {:?} for slider category {}", option, category);
            return Err(ConfiguratorError::SliderHasNoOptions(category));
        }
        let active = self.draft.selection.is_active(category);
        if !active && !self.is_panel_open(category) {
            return Err(ConfiguratorError::CategoryInactive(category));
        }
        if !self.options_for(category).iter().any(|o| o == option) {
            return Err(ConfiguratorError::UnknownOption {
                category,
                option: option.to_string(),
            });
        }

        if !active {
            self.draft.selection.activate(category);
            debug!("Category {} activated from its open panel", category);
        }
        if category.is_multi_select() {
            self.draft.selection.toggle_option(category, option);
        } else {
            self.draft.selection.replace_option(category, option);
        }
        Ok(())
    }

    /// Stores the time limit, clamped and snapped to 5-minute steps. Returns the stored value.
    pub fn set_time_limit(&mut self, minutes: i64) -> u32 {
        self.draft.time_limit = TimeLimit::new(minutes);
        self.draft.time_limit.minutes()
    }

    pub fn set_performance_weight(&mut self, value: u32) -> WeightState {
        self.draft.weights.set_performance(value, self.strategy);
        self.draft.weights
    }

    pub fn options_for(&self, category: CategoryId) -> Vec<String> {
        options_for(category, self.companies())
    }

    /// Loaded companies, empty while loading or after a failure.
    pub fn companies(&self) -> &[Company] {
        match &self.companies {
            CompanyLoad::Loaded(companies) => companies,
            _ => &[],
        }
    }

    pub fn company_load(&self) -> &CompanyLoad {
        &self.companies
    }

    /// Marks a company fetch as in flight. Returns `None` when one is already pending or
    /// the list is already loaded, so a fetch is never issued twice.
    pub fn begin_company_fetch(&mut self) -> Option<FetchTicket> {
        match self.companies {
            CompanyLoad::Loading | CompanyLoad::Loaded(_) => None,
            CompanyLoad::Idle | CompanyLoad::Failed(_) => {
                self.fetch_generation += 1;
                self.companies = CompanyLoad::Loading;
                Some(FetchTicket(self.fetch_generation))
            }
        }
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and the result was dropped.
    pub fn finish_company_fetch(
        &mut self,
        ticket: FetchTicket,
        result: std::result::Result<Vec<Company>, NetworkError>,
    ) -> bool {
        if ticket.0 != self.fetch_generation || self.companies != CompanyLoad::Loading {
            debug!("Dropping stale company fetch result {:?}", ticket);
            return false;
        }

        self.companies = match result {
            Ok(companies) => {
                info!("🏢 Company context options ready ({} companies)", companies.len());
                CompanyLoad::Loaded(companies)
            }
            Err(e) => {
                warn!("❌ Company context unavailable: {}", e);
                CompanyLoad::Failed(e)
            }
        };
        true
    }

    pub fn panel(&self, category: CategoryId) -> PanelView {
        if !self.is_panel_open(category) {
            return PanelView::Closed;
        }

        let weights = self.draft.weights;
        match category {
            CategoryId::TimeFrame => PanelView::Slider {
                value: self.draft.time_limit.minutes(),
                min: TIME_LIMIT_MIN,
                max: TIME_LIMIT_MAX,
                step: TIME_LIMIT_STEP,
                editable: true,
            },
            CategoryId::Performance => PanelView::Slider {
                value: weights.performance,
                min: 0,
                max: PERFORMANCE_MAX,
                step: 1,
                editable: true,
            },
            CategoryId::Behavioral => Self::derived_slider(weights.behavioral),
            CategoryId::CulturalFit => Self::derived_slider(weights.cultural_fit),
            CategoryId::CompanyContext => match &self.companies {
                CompanyLoad::Idle | CompanyLoad::Loading => PanelView::CompanyLoading,
                CompanyLoad::Failed(e) => PanelView::CompanyError {
                    message: e.to_string(),
                },
                CompanyLoad::Loaded(_) => self.options_panel(category),
            },
            _ => self.options_panel(category),
        }
    }

    fn derived_slider(value: u32) -> PanelView {
        PanelView::Slider {
            value,
            min: 0,
            max: WEIGHT_TOTAL,
            step: 1,
            editable: false,
        }
    }

    fn options_panel(&self, category: CategoryId) -> PanelView {
        PanelView::Options {
            options: self.options_for(category),
            selected: self.draft.selection.options(category).to_vec(),
            multiple: category.is_multi_select(),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            open_panel: self.open_panel,
            strategy: self.strategy,
            companies: self.companies.clone(),
        }
    }

    /// Assembles the payload for the current draft. Any draft is accepted, including an
    /// empty question with nothing selected. The draft is left untouched; call
    /// [`Configurator::complete_submission`] once the sink has taken it.
    pub fn submit(&self) -> AssessmentPayload {
        let payload = self.draft.to_payload();
        info!(
            "📤 Submitting draft {} ({} categories, {} min)",
            self.draft.id,
            payload.selected_categories.len(),
            payload.time_limit_minutes
        );
        payload
    }

    /// Starts a fresh draft and closes every panel. Fetched companies are kept.
    pub fn reset(&mut self) {
        self.draft = DraftAssessment::default();
        self.open_panel = None;
    }

    /// Called once a sink has accepted `submitted`. Resets when the draft is unchanged;
    /// edits made while the submission was in flight are kept under a new draft id.
    /// Returns whether the form was reset.
    pub fn complete_submission(&mut self, submitted: &DraftAssessment) -> bool {
        if self.draft == *submitted {
            self.reset();
            return true;
        }
        self.draft.id = Uuid::new_v4();
        info!(
            "✏️ Draft changed during submission, keeping edits as draft {}",
            self.draft.id
        );
        false
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new(WeightStrategy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(names: &[&str]) -> Configurator {
        let mut configurator = Configurator::default();
        let ticket = configurator.begin_company_fetch().unwrap();
        let companies = names
            .iter()
            .enumerate()
            .map(|(i, n)| Company::new(i as i64 + 1, *n))
            .collect();
        assert!(configurator.finish_company_fetch(ticket, Ok(companies)));
        configurator
    }

    #[test]
    fn test_initial_state() {
        let configurator = Configurator::default();
        assert_eq!(configurator.open_panel(), None);
        assert!(configurator.selection().selected_categories.is_empty());
        assert_eq!(configurator.weights(), WeightState::default());
        assert_eq!(configurator.time_limit().minutes(), 30);
        assert_eq!(configurator.company_load(), &CompanyLoad::Idle);
    }

    #[test]
    fn test_switching_categories_keeps_options() {
        let mut configurator = Configurator::default();
        configurator.toggle_category(CategoryId::QuestionTypes);
        configurator
            .toggle_option(CategoryId::QuestionTypes, "Coding challenges")
            .unwrap();
        configurator.toggle_category(CategoryId::Skills);

        assert!(!configurator.is_panel_open(CategoryId::QuestionTypes));
        assert!(configurator.is_panel_open(CategoryId::Skills));
        assert_eq!(
            configurator.selection().options(CategoryId::QuestionTypes),
            ["Coding challenges".to_string()]
        );
    }

    #[test]
    fn test_toggling_twice_closes_and_clears() {
        let mut configurator = Configurator::default();
        assert!(configurator.toggle_category(CategoryId::Skills));
        configurator.toggle_option(CategoryId::Skills, "Teamwork").unwrap();
        assert!(!configurator.toggle_category(CategoryId::Skills));

        assert_eq!(configurator.open_panel(), None);
        assert!(configurator.selection().options(CategoryId::Skills).is_empty());
        assert_eq!(configurator.panel(CategoryId::Skills), PanelView::Closed);
    }

    #[test]
    fn test_reopened_panel_of_deactivated_category_still_accepts_options() {
        let mut configurator = Configurator::default();
        configurator.toggle_category(CategoryId::QuestionTypes);
        configurator
            .toggle_option(CategoryId::QuestionTypes, "Coding challenges")
            .unwrap();
        configurator.toggle_category(CategoryId::Skills);

        assert!(!configurator.toggle_category(CategoryId::QuestionTypes));
        assert!(configurator.is_panel_open(CategoryId::QuestionTypes));
        assert_eq!(
            configurator.panel(CategoryId::QuestionTypes),
            PanelView::Options {
                options: configurator.options_for(CategoryId::QuestionTypes),
                selected: vec![],
                multiple: true,
            }
        );

        configurator
            .toggle_option(CategoryId::QuestionTypes, "Case studies")
            .unwrap();
        assert!(configurator.selection().is_active(CategoryId::QuestionTypes));
        assert_eq!(
            configurator.selection().options(CategoryId::QuestionTypes),
            ["Case studies".to_string()]
        );
        assert_eq!(
            configurator.toggle_option(CategoryId::BrainTeasers, "Logic puzzles"),
            Err(ConfiguratorError::CategoryInactive(CategoryId::BrainTeasers))
        );
    }

    #[test]
    fn test_difficulty_is_single_select() {
        let mut configurator = Configurator::default();
        configurator.toggle_category(CategoryId::Difficulty);
        configurator.toggle_option(CategoryId::Difficulty, "Easy").unwrap();
        configurator.toggle_option(CategoryId::Difficulty, "Hard").unwrap();
        configurator.toggle_option(CategoryId::Difficulty, "Hard").unwrap();
        assert_eq!(
            configurator.selection().options(CategoryId::Difficulty),
            ["Hard".to_string()]
        );
    }

    #[test]
    fn test_invalid_option_usage_is_rejected() {
        let mut configurator = Configurator::default();
        configurator.toggle_category(CategoryId::Performance);
        assert_eq!(
            configurator.toggle_option(CategoryId::Performance, "High"),
            Err(ConfiguratorError::SliderHasNoOptions(CategoryId::Performance))
        );
        assert_eq!(
            configurator.toggle_option(CategoryId::Skills, "Teamwork"),
            Err(ConfiguratorError::CategoryInactive(CategoryId::Skills))
        );

        configurator.toggle_category(CategoryId::Skills);
        assert!(matches!(
            configurator.toggle_option(CategoryId::Skills, "Juggling"),
            Err(ConfiguratorError::UnknownOption { .. })
        ));
        assert!(configurator.selection().options(CategoryId::Skills).is_empty());
    }

    #[test]
    fn test_company_panel_follows_fetch_state() {
        let mut configurator = Configurator::default();
        configurator.toggle_category(CategoryId::CompanyContext);
        assert_eq!(configurator.panel(CategoryId::CompanyContext), PanelView::CompanyLoading);

        let ticket = configurator.begin_company_fetch().unwrap();
        assert!(configurator.begin_company_fetch().is_none());
        configurator.finish_company_fetch(ticket, Err(NetworkError::Transport("offline".into())));
        assert!(matches!(
            configurator.panel(CategoryId::CompanyContext),
            PanelView::CompanyError { .. }
        ));

        let retry = configurator.begin_company_fetch().unwrap();
        configurator.finish_company_fetch(
            retry,
            Ok(vec![Company::new(1, "Acme"), Company::new(2, "Acme")]),
        );
        assert_eq!(
            configurator.panel(CategoryId::CompanyContext),
            PanelView::Options {
                options: vec!["Acme".into()],
                selected: vec![],
                multiple: true,
            }
        );
        configurator.toggle_option(CategoryId::CompanyContext, "Acme").unwrap();
    }

    #[test]
    fn test_stale_fetch_results_are_dropped() {
        let mut configurator = Configurator::default();
        let first = configurator.begin_company_fetch().unwrap();
        configurator.finish_company_fetch(first, Err(NetworkError::Transport("offline".into())));
        let second = configurator.begin_company_fetch().unwrap();

        assert!(!configurator.finish_company_fetch(first, Ok(vec![Company::new(1, "Old")])));
        assert_eq!(configurator.company_load(), &CompanyLoad::Loading);
        assert!(configurator.finish_company_fetch(second, Ok(vec![])));
        assert!(configurator.begin_company_fetch().is_none());
    }

    #[test]
    fn test_slider_panels() {
        let mut configurator = Configurator::default();
        configurator.set_time_limit(47);
        configurator.toggle_category(CategoryId::TimeFrame);
        assert_eq!(
            configurator.panel(CategoryId::TimeFrame),
            PanelView::Slider { value: 45, min: 5, max: 120, step: 5, editable: true }
        );

        configurator.set_performance_weight(20);
        configurator.toggle_category(CategoryId::CulturalFit);
        assert_eq!(
            configurator.panel(CategoryId::CulturalFit),
            PanelView::Slider { value: 47, min: 0, max: 100, step: 1, editable: false }
        );
    }

    #[test]
    fn test_submit_then_reset() {
        let mut configurator = loaded(&["Acme"]);
        configurator.set_question("Design a rate limiter");
        configurator.toggle_category(CategoryId::Skills);
        configurator.toggle_option(CategoryId::Skills, "Problem solving").unwrap();
        let draft_id = configurator.draft().id;

        let payload = configurator.submit();
        assert_eq!(payload.question, "Design a rate limiter");
        assert_eq!(payload.selected_categories, vec![CategoryId::Skills]);
        assert_eq!(payload.options(CategoryId::Skills), ["Problem solving".to_string()]);
        assert_eq!(
            (payload.performance, payload.behavioral, payload.cultural_fit),
            (33, 33, 34)
        );

        configurator.reset();
        assert_ne!(configurator.draft().id, draft_id);
        assert!(configurator.question().is_empty());
        assert_eq!(configurator.open_panel(), None);
        assert_eq!(configurator.companies().len(), 1);
    }

    #[test]
    fn test_complete_submission_keeps_later_edits() {
        let mut configurator = Configurator::default();
        configurator.set_question("first");
        let submitted = configurator.draft().clone();
        configurator.submit();
        configurator.set_question("second");

        assert!(!configurator.complete_submission(&submitted));
        assert_eq!(configurator.question(), "second");
        assert_ne!(configurator.draft().id, submitted.id);

        let resubmitted = configurator.draft().clone();
        assert!(configurator.complete_submission(&resubmitted));
        assert!(configurator.question().is_empty());
    }

    #[test]
    fn test_empty_submission_is_accepted() {
        let payload = Configurator::default().submit();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["question"], "");
        assert_eq!(json["selectedCategories"], serde_json::json!([]));
        assert_eq!(json["timeLimitMinutes"], 30);
        assert_eq!(json["culturalFit"], 34);
    }
}
