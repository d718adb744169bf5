use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Which categories are active and which options each one has picked.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub selected_categories: IndexSet<CategoryId>,
    pub category_options: IndexMap<CategoryId, Vec<String>>,
}

impl SelectionState {
    pub fn is_active(&self, category: CategoryId) -> bool {
        self.selected_categories.contains(&category)
    }

    pub fn options(&self, category: CategoryId) -> &[String] {
        self.category_options
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Activates or deactivates `category`. Returns whether it is now active.
    pub(crate) fn toggle(&mut self, category: CategoryId) -> bool {
        if self.selected_categories.shift_remove(&category) {
            self.category_options.insert(category, Vec::new());
            false
        } else {
            self.selected_categories.insert(category);
            self.category_options.entry(category).or_default();
            true
        }
    }

    pub(crate) fn activate(&mut self, category: CategoryId) {
        if self.selected_categories.insert(category) {
            self.category_options.entry(category).or_default();
        }
    }

    /// Multi-select toggle: add when absent, remove when present.
    pub(crate) fn toggle_option(&mut self, category: CategoryId, option: &str) {
        let chosen = self.category_options.entry(category).or_default();
        if let Some(pos) = chosen.iter().position(|o| o == option) {
            chosen.remove(pos);
        } else {
            chosen.push(option.to_string());
        }
    }

    /// Single-select: the new choice replaces whatever was there.
    pub(crate) fn replace_option(&mut self, category: CategoryId, option: &str) {
        self.category_options
            .insert(category, vec![option.to_string()]);
    }
}
