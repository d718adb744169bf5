use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub auto_select: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::English,
            auto_select: true,
        }
    }
}

/// Owns the settings-panel preferences and publishes every change.
///
/// Components never read a global; they are handed a [`PreferencesHandle`] and observe it.
pub struct PreferencesProvider {
    sender: watch::Sender<Preferences>,
}

/// Read side given to consumers.
#[derive(Clone)]
pub struct PreferencesHandle {
    receiver: watch::Receiver<Preferences>,
}

impl PreferencesProvider {
    pub fn new(initial: Preferences) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    pub fn handle(&self) -> PreferencesHandle {
        PreferencesHandle {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn current(&self) -> Preferences {
        *self.sender.borrow()
    }

    pub fn toggle_dark_mode(&self) -> Theme {
        self.modify(|p| {
            p.theme = match p.theme {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            }
        })
        .theme
    }

    pub fn set_language(&self, language: Language) {
        self.modify(|p| p.language = language);
    }

    pub fn set_auto_select(&self, enabled: bool) {
        self.modify(|p| p.auto_select = enabled);
    }

    fn modify(&self, f: impl FnOnce(&mut Preferences)) -> Preferences {
        self.sender.send_modify(f);
        let updated = self.current();
        info!("🎨 Preferences updated: {:?}", updated);
        updated
    }
}

impl Default for PreferencesProvider {
    fn default() -> Self {
        Self::new(Preferences::default())
    }
}

impl PreferencesHandle {
    pub fn get(&self) -> Preferences {
        *self.receiver.borrow()
    }

    pub fn theme(&self) -> Theme {
        self.receiver.borrow().theme
    }

    /// Resolves once preferences change after the last observed value. `None` when the
    /// provider is gone.
    pub async fn changed(&mut self) -> Option<Preferences> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}
