use crate::file::BackupEntry;
use chrono::NaiveDateTime;

/// Format bytes into human-readable string (KB, MB, GB)
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Status line shown after every action: `[HH:MM:SS] message`
pub fn status_line(at: NaiveDateTime, message: &str) -> String {
    format!("[{}] {}", at.format("%H:%M:%S"), message)
}

/// Format a single backup for display
pub fn format_backup(entry: &BackupEntry) -> String {
    format!(
        "{}  {:>10}  {}",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        format_bytes(entry.size),
        entry.file_name
    )
}

/// Format backups for display (human or JSON)
pub fn format_backups(entries: &[BackupEntry], json: bool) -> String {
    if json {
        serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
    } else {
        if entries.is_empty() {
            return "No backups found.".to_string();
        }

        entries
            .iter()
            .map(format_backup)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
