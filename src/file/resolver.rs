use std::path::{Path, PathBuf};

/// Filename of the managed saved-variables file.
pub const MANAGED_FILE_NAME: &str = "BindPad.lua";

/// Builds `<root>/WTF/Account/<account>/SavedVariables/BindPad.lua`.
///
/// Never fails: empty or bogus inputs simply produce a path that later
/// fails the existence checks. Callers reject empty inputs up front.
pub fn resolve_managed_file(root: &Path, account: &str) -> PathBuf {
    root.join("WTF")
        .join("Account")
        .join(account)
        .join("SavedVariables")
        .join(MANAGED_FILE_NAME)
}
