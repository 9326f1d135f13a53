use super::error::{BindPadError, BindPadResult};
use super::metadata::copy_with_metadata;
use super::naming::{BackupNameMatcher, backup_file_name, ensure_unique_backup_path};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Managed file that was replaced or created
    pub target: PathBuf,
    /// Backup of the previous content, if the target existed
    pub backup: Option<PathBuf>,
    /// Bytes copied from the source
    pub bytes: u64,
}

/// A backup found next to the managed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupEntry {
    pub path: PathBuf,
    pub file_name: String,
    pub timestamp: NaiveDateTime,
    pub counter: Option<u32>,
    pub size: u64,
}

/// Performs backups and imports of the managed file
pub struct FileManager {
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// True when both paths resolve to the same existing file (copying a file
/// onto itself truncates it)
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl FileManager {
    pub fn new() -> Self {
        Self { clock: local_now }
    }

    /// Use a fixed clock (tests and reproducible naming)
    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self { clock }
    }

    /// Copies `managed_file` to `<managed_file>.bak.<YYYYMMDD_HHMMSS>`.
    ///
    /// Fails with `FileNotFound` (creating nothing) unless `managed_file` is an
    /// existing regular file. Returns the path of the new backup.
    pub fn create_backup(&self, managed_file: &Path) -> BindPadResult<PathBuf> {
        if !managed_file.is_file() {
            return Err(BindPadError::FileNotFound(managed_file.to_path_buf()));
        }

        let dir = managed_file
            .parent()
            .ok_or_else(|| BindPadError::FileNotFound(managed_file.to_path_buf()))?;
        let original = managed_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| BindPadError::FileNotFound(managed_file.to_path_buf()))?;

        let name = backup_file_name(&original, (self.clock)());
        let backup_path = ensure_unique_backup_path(dir, &name);

        copy_with_metadata(managed_file, &backup_path)?;
        tracing::info!("Backup created: {}", backup_path.display());

        Ok(backup_path)
    }

    /// Replaces `managed_file` with `source_file`, backing up the old content first.
    ///
    /// The source must be a readable regular file distinct from the target;
    /// both are checked before any backup is taken. If the backup step fails,
    /// the managed file is left untouched.
    pub fn import_bindings(
        &self,
        managed_file: &Path,
        source_file: &Path,
    ) -> BindPadResult<ImportOutcome> {
        if !source_file.is_file() {
            return Err(BindPadError::FileNotFound(source_file.to_path_buf()));
        }
        std::fs::File::open(source_file)
            .map_err(|_| BindPadError::FileNotFound(source_file.to_path_buf()))?;

        if is_same_file(managed_file, source_file) {
            return Err(BindPadError::SameFile(managed_file.to_path_buf()));
        }

        let backup = if managed_file.exists() {
            let path = self.create_backup(managed_file)?;
            tracing::debug!("Created backup before import: {}", path.display());
            Some(path)
        } else {
            tracing::debug!("No existing {}, skipping backup", managed_file.display());
            None
        };

        let bytes = copy_with_metadata(source_file, managed_file)?;
        tracing::info!(
            "Imported {} into {} ({} bytes)",
            source_file.display(),
            managed_file.display(),
            bytes
        );

        Ok(ImportOutcome {
            target: managed_file.to_path_buf(),
            backup,
            bytes,
        })
    }

    /// Lists backups of `managed_file`, newest first.
    ///
    /// A missing directory yields an empty list.
    pub fn list_backups(&self, managed_file: &Path) -> BindPadResult<Vec<BackupEntry>> {
        let (Some(dir), Some(original)) = (managed_file.parent(), managed_file.file_name()) else {
            return Ok(Vec::new());
        };
        let Some(matcher) = BackupNameMatcher::new(&original.to_string_lossy()) else {
            return Ok(Vec::new());
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(BindPadError::io(dir, e)),
        };

        let mut backups = Vec::new();
        for entry in entries.flatten() {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let Some(parsed) = matcher.parse(&file_name) else {
                continue;
            };
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }

            backups.push(BackupEntry {
                path: entry.path(),
                file_name,
                timestamp: parsed.timestamp,
                counter: parsed.counter,
                size: meta.len(),
            });
        }

        backups.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.counter.cmp(&a.counter))
        });
        tracing::trace!("Found {} backups in {}", backups.len(), dir.display());

        Ok(backups)
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}
