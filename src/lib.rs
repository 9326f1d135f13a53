pub mod app;
pub mod cli;
pub mod file;
pub mod util;

pub use app::{config::Config, state::AppState};
pub use file::{BindPadError, FileManager, resolve_managed_file};
