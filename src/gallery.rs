use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssessmentKind {
    Technical,
    Management,
    Design,
    Marketing,
    Leadership,
    Behavioral,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 6] = [
        AssessmentKind::Technical,
        AssessmentKind::Management,
        AssessmentKind::Design,
        AssessmentKind::Marketing,
        AssessmentKind::Leadership,
        AssessmentKind::Behavioral,
    ];
}

/// Type dropdown of the gallery.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(AssessmentKind),
}

impl TypeFilter {
    fn matches(&self, kind: AssessmentKind) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == kind,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SavedAssessment {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: AssessmentKind,
    pub role: String,
    pub created: NaiveDate,
    pub modified: NaiveDate,
}

static SAMPLE_TEMPLATES: Lazy<Vec<SavedAssessment>> = Lazy::new(|| {
    let templates = [
        (
            "Software Engineer Assessment",
            "Technical assessment for senior software engineer position",
            AssessmentKind::Technical,
            "Senior Software Engineer",
            20,
        ),
        (
            "Product Manager Assessment",
            "Leadership and product management skills evaluation",
            AssessmentKind::Management,
            "Product Manager",
            19,
        ),
        (
            "UX Designer Assessment",
            "Evaluating design thinking and UI/UX capabilities",
            AssessmentKind::Design,
            "Senior UX Designer",
            18,
        ),
        (
            "Data Scientist Assessment",
            "Technical and analytical skills for data science role",
            AssessmentKind::Technical,
            "Data Scientist",
            17,
        ),
        (
            "Frontend Developer Assessment",
            "React and UI development assessment",
            AssessmentKind::Technical,
            "Frontend Developer",
            16,
        ),
        (
            "Marketing Specialist Assessment",
            "Digital marketing and campaign management",
            AssessmentKind::Marketing,
            "Marketing Specialist",
            15,
        ),
    ];

    templates
        .into_iter()
        .zip(1..)
        .filter_map(|((title, description, kind, role, day), id)| {
            let date = NaiveDate::from_ymd_opt(2024, 3, day)?;
            Some(SavedAssessment {
                id,
                title: title.to_string(),
                description: description.to_string(),
                kind,
                role: role.to_string(),
                created: date,
                modified: date,
            })
        })
        .collect()
});

/// Saved assessment templates with search and type filtering.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    assessments: Vec<SavedAssessment>,
}

impl Gallery {
    pub fn new(assessments: Vec<SavedAssessment>) -> Self {
        Self { assessments }
    }

    /// The product's built-in templates.
    pub fn with_samples() -> Self {
        Self::new(SAMPLE_TEMPLATES.clone())
    }

    pub fn all(&self) -> &[SavedAssessment] {
        &self.assessments
    }

    /// Case-insensitive match of `query` against title or description, narrowed by type.
    pub fn filter(&self, query: &str, kind: TypeFilter) -> Vec<&SavedAssessment> {
        let needle = query.to_lowercase();
        self.assessments
            .iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
            })
            .filter(|a| kind.matches(a.kind))
            .collect()
    }

    pub fn remove(&mut self, id: u32) -> Option<SavedAssessment> {
        let pos = self.assessments.iter().position(|a| a.id == id)?;
        Some(self.assessments.remove(pos))
    }
}
