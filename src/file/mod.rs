pub mod error;
pub mod manager;
pub mod metadata;
pub mod naming;
pub mod resolver;

pub use error::{BindPadError, BindPadResult};
pub use manager::{BackupEntry, FileManager, ImportOutcome};
pub use resolver::{MANAGED_FILE_NAME, resolve_managed_file};
