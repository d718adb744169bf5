use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::directory::Company;
use crate::error::ConfiguratorError;

/// The closed set of facets an assessment can be configured on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    QuestionTypes,
    Skills,
    Difficulty,
    TimeFrame,
    Performance,
    Behavioral,
    CulturalFit,
    CompanyContext,
    BrainTeasers,
}

/// Static configuration of a category. Pure data, no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub id: CategoryId,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub is_slider: bool,
    pub multi_select: bool,
    pub options: &'static [&'static str],
}

impl CategoryId {
    pub const ALL: [CategoryId; 9] = [
        CategoryId::QuestionTypes,
        CategoryId::Skills,
        CategoryId::Difficulty,
        CategoryId::TimeFrame,
        CategoryId::Performance,
        CategoryId::Behavioral,
        CategoryId::CulturalFit,
        CategoryId::CompanyContext,
        CategoryId::BrainTeasers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::QuestionTypes => "question-types",
            CategoryId::Skills => "skills",
            CategoryId::Difficulty => "difficulty",
            CategoryId::TimeFrame => "time-frame",
            CategoryId::Performance => "performance",
            CategoryId::Behavioral => "behavioral",
            CategoryId::CulturalFit => "cultural-fit",
            CategoryId::CompanyContext => "company-context",
            CategoryId::BrainTeasers => "brain-teasers",
        }
    }

    pub fn spec(&self) -> CategorySpec {
        match self {
            CategoryId::QuestionTypes => CategorySpec {
                id: *self,
                label: "Question Types",
                color: "blue",
                icon: "list-checks",
                is_slider: false,
                multi_select: true,
                options: &[
                    "Multiple choice",
                    "Coding challenges",
                    "Case studies",
                    "Situational judgment",
                    "Open-ended questions",
                ],
            },
            CategoryId::Skills => CategorySpec {
                id: *self,
                label: "Skills",
                color: "purple",
                icon: "brain",
                is_slider: false,
                multi_select: true,
                options: &[
                    "Problem solving",
                    "Communication",
                    "Leadership",
                    "Teamwork",
                    "Technical knowledge",
                    "Time management",
                ],
            },
            CategoryId::Difficulty => CategorySpec {
                id: *self,
                label: "Difficulty",
                color: "red",
                icon: "gauge",
                is_slider: false,
                multi_select: false,
                options: &["Easy", "Medium", "Hard"],
            },
            CategoryId::TimeFrame => CategorySpec {
                id: *self,
                label: "Time Frame",
                color: "yellow",
                icon: "clock",
                is_slider: true,
                multi_select: false,
                options: &[],
            },
            CategoryId::Performance => CategorySpec {
                id: *self,
                label: "Performance",
                color: "green",
                icon: "trending-up",
                is_slider: true,
                multi_select: false,
                options: &[],
            },
            CategoryId::Behavioral => CategorySpec {
                id: *self,
                label: "Behavioral",
                color: "orange",
                icon: "users",
                is_slider: true,
                multi_select: false,
                options: &[],
            },
            CategoryId::CulturalFit => CategorySpec {
                id: *self,
                label: "Cultural Fit",
                color: "pink",
                icon: "heart-handshake",
                is_slider: true,
                multi_select: false,
                options: &[],
            },
            CategoryId::CompanyContext => CategorySpec {
                id: *self,
                label: "Company Context",
                color: "indigo",
                icon: "building",
                is_slider: false,
                multi_select: true,
                options: &[],
            },
            CategoryId::BrainTeasers => CategorySpec {
                id: *self,
                label: "Brain Teasers",
                color: "teal",
                icon: "puzzle",
                is_slider: false,
                multi_select: true,
                options: &[
                    "Logic puzzles",
                    "Estimation questions",
                    "Lateral thinking",
                    "Pattern recognition",
                ],
            },
        }
    }

    pub fn is_slider(&self) -> bool {
        self.spec().is_slider
    }

    pub fn is_multi_select(&self) -> bool {
        self.spec().multi_select
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfiguratorError::UnknownCategory(s.to_string()))
    }
}

/// Options offered for `category`: its static labels, followed for company-context by the
/// fetched company names with blanks and duplicates dropped.
pub fn options_for(category: CategoryId, companies: &[Company]) -> Vec<String> {
    let mut options: IndexSet<String> = category
        .spec()
        .options
        .iter()
        .map(|o| o.to_string())
        .collect();

    if category == CategoryId::CompanyContext {
        for name in companies.iter().filter_map(Company::display_name) {
            options.insert(name.to_string());
        }
    }

    options.into_iter().collect()
}
