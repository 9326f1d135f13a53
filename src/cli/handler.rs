use super::error;
use super::output;
use super::{Commands, ConfigAction};
use crate::app::state::AppState;
use crate::file::BindPadError;
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Handle a CLI command and return exit code
pub fn handle_command(command: Commands, state: &mut AppState) -> i32 {
    let result = match command {
        Commands::Backup { save_profile } => handle_backup(state, save_profile),
        Commands::Import {
            source,
            save_profile,
        } => handle_import(state, &source, save_profile),
        Commands::Restore {
            backup,
            save_profile,
        } => handle_restore(state, &backup, save_profile),
        Commands::Resolve => handle_resolve(state),
        Commands::List { json } => handle_list(state, json),
        Commands::Config { action } => handle_config(action, state),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let kind = e
                .downcast_ref::<BindPadError>()
                .map(BindPadError::kind)
                .unwrap_or("other");
            tracing::error!(kind, "Command failed: {:#}", e);
            print_status(&format!("Error: {}", e));
            eprintln!("Error: {}", e);
            error::exit_code_for(&e)
        }
    }
}

fn print_status(message: &str) {
    println!("{}", output::status_line(Local::now().naive_local(), message));
}

fn notify_success(message: &str) {
    println!("Success: {}", message);
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Persist the profile after a successful action; failures only warn
fn remember_profile_if_requested(state: &mut AppState, save_profile: bool) {
    if !save_profile {
        return;
    }
    match state.remember_profile() {
        Ok(()) => tracing::debug!("Profile saved"),
        Err(e) => {
            tracing::warn!("Failed to save profile: {:#}", e);
            eprintln!("Warning: could not save profile: {}", e);
        }
    }
}

/// Create Backup
fn handle_backup(state: &mut AppState, save_profile: bool) -> Result<i32> {
    let managed = state.profile.managed_file()?;
    tracing::debug!(
        "Backing up {} (character: {})",
        managed.display(),
        state.profile.character.as_deref().unwrap_or("-")
    );

    let backup = state.files.create_backup(&managed)?;

    print_status(&format!("Backup created: {}", file_name_of(&backup)));
    notify_success("Backup created successfully");
    remember_profile_if_requested(state, save_profile);

    Ok(error::SUCCESS)
}

/// Import Bindings
fn handle_import(state: &mut AppState, source: &Path, save_profile: bool) -> Result<i32> {
    let managed = state.profile.managed_file()?;
    let outcome = state.files.import_bindings(&managed, source)?;

    if let Some(backup) = &outcome.backup {
        print_status(&format!(
            "Created backup before import: {}",
            file_name_of(backup)
        ));
    }
    print_status("Bindings imported successfully");
    notify_success("Bindings imported successfully");
    remember_profile_if_requested(state, save_profile);

    Ok(error::SUCCESS)
}

/// Resolve a backup argument: bare file names are looked up next to the managed file
fn resolve_backup_arg(managed: &Path, backup: &Path) -> PathBuf {
    let is_bare_name = backup.components().count() == 1 && !backup.is_absolute();
    match (is_bare_name, managed.parent()) {
        (true, Some(dir)) => dir.join(backup),
        _ => backup.to_path_buf(),
    }
}

/// Restore a previous backup
fn handle_restore(state: &mut AppState, backup: &Path, save_profile: bool) -> Result<i32> {
    let managed = state.profile.managed_file()?;
    let source = resolve_backup_arg(&managed, backup);
    let outcome = state.files.import_bindings(&managed, &source)?;

    if let Some(previous) = &outcome.backup {
        print_status(&format!(
            "Created backup before restore: {}",
            file_name_of(previous)
        ));
    }
    print_status(&format!("Restored {}", file_name_of(&source)));
    notify_success("Backup restored successfully");
    remember_profile_if_requested(state, save_profile);

    Ok(error::SUCCESS)
}

/// Print the managed file path
fn handle_resolve(state: &AppState) -> Result<i32> {
    let managed = state.profile.managed_file()?;
    println!("{}", managed.display());

    if managed.is_file() {
        Ok(error::SUCCESS)
    } else {
        tracing::info!("{} does not exist yet", managed.display());
        Ok(error::NOT_FOUND)
    }
}

/// List backups next to the managed file
fn handle_list(state: &AppState, json: bool) -> Result<i32> {
    let managed = state.profile.managed_file()?;
    let backups = state.files.list_backups(&managed)?;
    println!("{}", output::format_backups(&backups, json));

    Ok(error::SUCCESS)
}

/// Handle configuration commands
fn handle_config(action: ConfigAction, state: &mut AppState) -> Result<i32> {
    match action {
        ConfigAction::Get { key } => {
            println!("{}", state.config.get_value(&key)?);
            Ok(error::SUCCESS)
        }
        ConfigAction::Set { key, value } => {
            state.config.set_value(&key, &value)?;
            state.config.save()?;
            println!("Configuration updated: {} = {}", key, value);
            Ok(error::SUCCESS)
        }
        ConfigAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&state.config)?);
            } else {
                println!("{}", toml::to_string_pretty(&state.config)?);
            }
            Ok(error::SUCCESS)
        }
    }
}
