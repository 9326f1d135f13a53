use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod error;
pub mod handler;
pub mod output;

use crate::app::settings::ProfileOverrides;

/// BindPad Manager - back up and restore BindPad.lua saved variables
#[derive(Parser, Debug)]
#[command(name = "bindpad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// WoW installation directory
    #[arg(long, global = true, value_name = "PATH")]
    pub wow_path: Option<PathBuf>,

    /// WoW account name (folder under WTF/Account)
    #[arg(long, global = true, value_name = "NAME")]
    pub account: Option<String>,

    /// Character name
    #[arg(long, global = true, value_name = "NAME")]
    pub character: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn profile_overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            wow_path: self.wow_path.clone(),
            account: self.account.clone(),
            character: self.character.clone(),
        }
    }
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy BindPad.lua to a timestamped backup
    Backup {
        /// Remember the WoW path, account and character for later runs
        #[arg(long)]
        save_profile: bool,
    },

    /// Replace BindPad.lua with another file (backs up the current one first)
    Import {
        /// Bindings file to import
        source: PathBuf,

        /// Remember the WoW path, account and character for later runs
        #[arg(long)]
        save_profile: bool,
    },

    /// Restore a previous backup (backs up the current file first)
    Restore {
        /// Backup file name or path (see `list`)
        backup: PathBuf,

        /// Remember the WoW path, account and character for later runs
        #[arg(long)]
        save_profile: bool,
    },

    /// Print the resolved BindPad.lua path
    Resolve,

    /// List existing backups, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., profile.account)
        key: String,
    },

    /// Set a configuration value (empty value clears profile fields)
    Set {
        /// Configuration key (e.g., profile.account)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show all configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
