use bindpad_manager::file::naming::BACKUP_MARKER;
use std::path::{Path, PathBuf};

/// Create `<root>/WTF/Account/<account>/SavedVariables` and return it
pub fn create_saved_variables_dir(root: &Path, account: &str) -> PathBuf {
    let dir = root
        .join("WTF")
        .join("Account")
        .join(account)
        .join("SavedVariables");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a bindings file with the given content and return its path
pub fn write_bindings_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// All `BindPad.lua.bak.*` files in `dir`, sorted by name
pub fn backup_files(dir: &Path) -> Vec<PathBuf> {
    let prefix = format!("BindPad.lua{}", BACKUP_MARKER);
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Helper to verify file contents match expected
#[allow(dead_code)]
pub fn verify_file_content(path: &Path, expected: &str) -> Result<(), String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    if content == expected {
        Ok(())
    } else {
        Err(format!(
            "File content mismatch in {}: expected {:?}, got {:?}",
            path.display(),
            expected,
            content
        ))
    }
}
