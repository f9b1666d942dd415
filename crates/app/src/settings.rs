use serde::{Deserialize, Serialize};

#[allow(async_fn_in_trait)]
pub trait SettingsRepository {
    async fn read_settings(&self) -> Result<Settings, String>;
    async fn write_settings(&self, settings: Settings) -> Result<(), String>;
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Resolves the system theme using the color scheme preferred by the platform.
    #[must_use]
    pub fn current_theme(&self, prefers_dark_scheme: bool) -> Theme {
        match self.theme {
            Theme::System => {
                if prefers_dark_scheme {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            }
            Theme::Light | Theme::Dark => self.theme,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    System,
    #[default]
    Light,
    Dark,
}
