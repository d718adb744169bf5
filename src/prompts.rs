use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// The "create new prompt" form.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct PromptForm {
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Prompt description is required"))]
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LocalPrompt {
    pub id: Uuid,
    pub role: String,
    pub description: String,
}

/// Prompts kept for this session only, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct PromptList {
    prompts: Vec<LocalPrompt>,
    form: PromptForm,
}

impl PromptList {
    pub fn all(&self) -> &[LocalPrompt] {
        &self.prompts
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn form(&self) -> &PromptForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PromptForm {
        &mut self.form
    }

    /// Appends the form as a new prompt and clears it. An incomplete form is left as is.
    pub fn add(&mut self) -> Result<&LocalPrompt, ValidationErrors> {
        self.form.validate()?;
        let form = std::mem::take(&mut self.form);
        let prompt = LocalPrompt {
            id: Uuid::new_v4(),
            role: form.role,
            description: form.description,
        };
        info!("📝 Added prompt for {}", prompt.role);
        self.prompts.push(prompt);
        Ok(&self.prompts[self.prompts.len() - 1])
    }

    pub fn remove(&mut self, id: Uuid) -> Option<LocalPrompt> {
        let pos = self.prompts.iter().position(|p| p.id == id)?;
        Some(self.prompts.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_and_clears_form() {
        let mut list = PromptList::default();
        assert!(list.is_empty());

        list.form_mut().role = "Software Engineer".into();
        list.form_mut().description = "Design a URL shortener".into();
        let id = list.add().unwrap().id;

        list.form_mut().role = "Data Analyst".into();
        list.form_mut().description = "Explain a cohort chart".into();
        list.add().unwrap();

        let roles: Vec<_> = list.all().iter().map(|p| p.role.as_str()).collect();
        assert_eq!(roles, ["Software Engineer", "Data Analyst"]);
        assert_eq!(list.form(), &PromptForm::default());

        assert_eq!(list.remove(id).map(|p| p.role), Some("Software Engineer".to_string()));
        assert!(list.remove(id).is_none());
    }

    #[test]
    fn test_incomplete_form_is_kept() {
        let mut list = PromptList::default();
        list.form_mut().role = "Designer".into();

        let errors = list.add().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
        assert!(list.is_empty());
        assert_eq!(list.form().role, "Designer");
    }
}
