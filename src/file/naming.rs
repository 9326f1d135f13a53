use chrono::NaiveDateTime;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Separator placed between the original filename and the timestamp.
pub const BACKUP_MARKER: &str = ".bak.";

/// Timestamp layout used in backup names (one-second resolution).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Parsed pieces of a backup filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupName {
    pub timestamp: NaiveDateTime,
    /// Collision counter appended when a backup already existed for the same second
    pub counter: Option<u32>,
}

/// Builds the backup filename for `original` taken at `at`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use bindpad_manager::file::naming::backup_file_name;
///
/// let at = NaiveDate::from_ymd_opt(2024, 3, 9)
///     .unwrap()
///     .and_hms_opt(7, 5, 1)
///     .unwrap();
/// assert_eq!(backup_file_name("BindPad.lua", at), "BindPad.lua.bak.20240309_070501");
/// ```
pub fn backup_file_name(original: &str, at: NaiveDateTime) -> String {
    format!("{}{}{}", original, BACKUP_MARKER, at.format(TIMESTAMP_FORMAT))
}

fn add_counter(name: &str, counter: u32) -> String {
    format!("{}.{}", name, counter)
}

/// Returns a path in `dir` for `name` that does not exist yet.
///
/// If `name` is taken, appends `.1`, `.2`, ... until a free name is found,
/// so two backups within the same second never overwrite each other.
pub fn ensure_unique_backup_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u32;
    loop {
        let candidate = dir.join(add_counter(name, counter));
        if !candidate.exists() {
            tracing::debug!("Backup name collision, using counter {}", counter);
            return candidate;
        }
        counter += 1;
    }
}

/// Matches backup names of one original file.
///
/// Compiled once and reused for every directory entry of a listing.
pub struct BackupNameMatcher {
    re: Regex,
}

impl BackupNameMatcher {
    /// Accepts `<original>.bak.YYYYMMDD_HHMMSS` with an optional `.N` counter
    pub fn new(original: &str) -> Option<Self> {
        let pattern = format!(
            r"^{}{}(\d{{8}}_\d{{6}})(?:\.(\d+))?$",
            regex::escape(original),
            regex::escape(BACKUP_MARKER)
        );
        let re = Regex::new(&pattern).ok()?;
        Some(Self { re })
    }

    /// Returns `None` for non-matching names, including impossible dates
    pub fn parse(&self, candidate: &str) -> Option<BackupName> {
        let caps = self.re.captures(candidate)?;

        let timestamp =
            NaiveDateTime::parse_from_str(caps.get(1)?.as_str(), TIMESTAMP_FORMAT).ok()?;
        let counter = match caps.get(2) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };

        Some(BackupName { timestamp, counter })
    }
}

/// Parses `candidate` as a backup of `original`.
///
/// For scanning many names, build a [`BackupNameMatcher`] once instead.
pub fn parse_backup_name(original: &str, candidate: &str) -> Option<BackupName> {
    BackupNameMatcher::new(original)?.parse(candidate)
}
