use super::config::{Config, ProfileConfig};
use crate::file::{BindPadError, BindPadResult, resolve_managed_file};
use std::path::PathBuf;

/// Values given on the command line for this invocation
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub wow_path: Option<PathBuf>,
    pub account: Option<String>,
    pub character: Option<String>,
}

/// Effective form values after applying inheritance: command line > stored profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub wow_path: Option<PathBuf>,
    pub account: Option<String>,
    pub character: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl ResolvedProfile {
    pub fn resolve(config: &Config, overrides: &ProfileOverrides) -> Self {
        let stored = &config.profile;

        let wow_path = overrides
            .wow_path
            .clone()
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| stored.wow_path.clone())
            .filter(|p| !p.as_os_str().is_empty());

        let account = non_empty(overrides.account.clone()).or_else(|| non_empty(stored.account.clone()));
        let character =
            non_empty(overrides.character.clone()).or_else(|| non_empty(stored.character.clone()));

        Self {
            wow_path,
            account,
            character,
        }
    }

    /// Resolve the managed file, rejecting an empty installation path or account.
    ///
    /// Nothing on disk is touched here.
    pub fn managed_file(&self) -> BindPadResult<PathBuf> {
        match (&self.wow_path, &self.account) {
            (Some(root), Some(account)) => Ok(resolve_managed_file(root, account)),
            _ => Err(BindPadError::MissingInput("WoW path and account name")),
        }
    }

    /// Profile section to persist after a successful operation
    pub fn to_profile_config(&self) -> ProfileConfig {
        ProfileConfig {
            wow_path: self.wow_path.clone(),
            account: self.account.clone(),
            character: self.character.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stored_config() -> Config {
        let mut config = Config::default();
        config.profile.wow_path = Some(PathBuf::from("/stored/wow"));
        config.profile.account = Some("StoredAcct".to_string());
        config.profile.character = Some("StoredChar".to_string());
        config
    }

    #[test]
    fn test_resolve_uses_stored_profile() {
        let resolved = ResolvedProfile::resolve(&stored_config(), &ProfileOverrides::default());

        assert_eq!(resolved.wow_path, Some(PathBuf::from("/stored/wow")));
        assert_eq!(resolved.account.as_deref(), Some("StoredAcct"));
        assert_eq!(resolved.character.as_deref(), Some("StoredChar"));
    }

    #[test]
    fn test_resolve_command_line_wins() {
        let overrides = ProfileOverrides {
            wow_path: Some(PathBuf::from("/games/wow")),
            account: Some("MyAcct".to_string()),
            character: None,
        };
        let resolved = ResolvedProfile::resolve(&stored_config(), &overrides);

        assert_eq!(resolved.wow_path, Some(PathBuf::from("/games/wow")));
        assert_eq!(resolved.account.as_deref(), Some("MyAcct"));
        assert_eq!(resolved.character.as_deref(), Some("StoredChar"));
    }

    #[test]
    fn test_resolve_ignores_blank_values() {
        let overrides = ProfileOverrides {
            wow_path: Some(PathBuf::new()),
            account: Some("   ".to_string()),
            character: Some(String::new()),
        };
        let resolved = ResolvedProfile::resolve(&stored_config(), &overrides);

        assert_eq!(resolved.wow_path, Some(PathBuf::from("/stored/wow")));
        assert_eq!(resolved.account.as_deref(), Some("StoredAcct"));
    }

    #[test]
    fn test_managed_file_requires_path_and_account() {
        let resolved = ResolvedProfile {
            wow_path: Some(PathBuf::from("/games/wow")),
            account: None,
            character: Some("Thrall".to_string()),
        };
        assert!(matches!(
            resolved.managed_file(),
            Err(BindPadError::MissingInput(_))
        ));

        let resolved = ResolvedProfile {
            wow_path: None,
            account: Some("MyAcct".to_string()),
            character: None,
        };
        assert!(matches!(
            resolved.managed_file(),
            Err(BindPadError::MissingInput(_))
        ));
    }

    #[test]
    fn test_managed_file_resolves() {
        let resolved = ResolvedProfile {
            wow_path: Some(PathBuf::from("/games/wow")),
            account: Some("MyAcct".to_string()),
            character: None,
        };
        assert_eq!(
            resolved.managed_file().unwrap(),
            PathBuf::from("/games/wow/WTF/Account/MyAcct/SavedVariables/BindPad.lua")
        );
    }

    #[test]
    fn test_to_profile_config() {
        let resolved = ResolvedProfile::resolve(&stored_config(), &ProfileOverrides::default());
        assert_eq!(resolved.to_profile_config(), stored_config().profile);
    }
}
