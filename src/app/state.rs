use super::config::Config;
use super::settings::{ProfileOverrides, ResolvedProfile};
use crate::file::FileManager;

/// Everything one command invocation needs
pub struct AppState {
    pub config: Config,
    /// Form values in effect for this invocation
    pub profile: ResolvedProfile,
    pub files: FileManager,
}

impl AppState {
    pub fn new(config: Config, overrides: &ProfileOverrides) -> Self {
        Self::with_file_manager(config, overrides, FileManager::new())
    }

    pub fn with_file_manager(
        config: Config,
        overrides: &ProfileOverrides,
        files: FileManager,
    ) -> Self {
        let profile = ResolvedProfile::resolve(&config, overrides);
        tracing::trace!("Resolved profile: {:?}", profile);
        Self {
            config,
            profile,
            files,
        }
    }

    /// Store the effective form values in settings.toml
    pub fn remember_profile(&mut self) -> anyhow::Result<()> {
        self.config.profile = self.profile.to_profile_config();
        self.config.save()
    }
}
